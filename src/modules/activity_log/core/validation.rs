// Record validation for the activity log.
//
// Purpose
// - Turn raw action records and the action argument into core types before any query runs.
//
// Responsibilities
// - Check record fields in the order user_id, device, action, date_actioned.
// - Validate records in sequence order and stop at the first malformed one.
// - Never compute query results and never perform input or output.

use serde_json::Value;

use crate::modules::activity_log::core::action::Action;
use crate::modules::activity_log::core::record::ActionRecord;
use crate::shared::core::validation::{
    RecordDefect, ValidationError, as_object, integer_field, number_field, present, string_field,
};

pub fn require_action(value: &Value) -> Result<Action, ValidationError> {
    value.as_str().unwrap_or_default().parse()
}

pub fn validate_records(records: &[Value]) -> Result<Vec<ActionRecord>, ValidationError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record))
        .collect()
}

pub fn validate_record(index: usize, record: &Value) -> Result<ActionRecord, ValidationError> {
    let fields = as_object(index, record)?;

    let user_id = integer_field(fields, "user_id", index)?;
    let device = string_field(fields, "device", index)?;
    let action = present(fields, "action")
        .and_then(Value::as_str)
        .and_then(Action::parse)
        .ok_or_else(|| ValidationError::malformed(index, RecordDefect::InvalidAction))?;
    let date_actioned = number_field(fields, "date_actioned", index)?;

    Ok(ActionRecord {
        user_id,
        device,
        action,
        date_actioned,
    })
}
