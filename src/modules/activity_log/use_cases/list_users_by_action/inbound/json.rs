// Loosely-typed entry point for the windowed user query.
//
// Purpose
// - Accept arguments exactly as an external caller supplies them and answer with user ids.
//
// Responsibilities
// - Check arguments before touching records: records, action, start_time, end_time, window.
// - Validate every record, then delegate to the typed handler.

use serde_json::Value;

use crate::modules::activity_log::core::record::ActionRecord;
use crate::modules::activity_log::core::validation::{require_action, validate_records};
use crate::modules::activity_log::use_cases::list_users_by_action::handler::list_users_by_action;
use crate::modules::activity_log::use_cases::list_users_by_action::query::ListUsersByAction;
use crate::shared::core::primitives::UserId;
use crate::shared::core::validation::{ValidationError, require_number, require_sequence};

pub fn get_users(
    records: &Value,
    action: &Value,
    start_time: &Value,
    end_time: &Value,
) -> Result<Vec<UserId>, ValidationError> {
    let result = parse(records, action, start_time, end_time)
        .map(|(records, query)| list_users_by_action(&records, &query));
    if let Err(error) = &result {
        tracing::debug!(%error, "get_users rejected its input");
    }
    result
}

fn parse(
    records: &Value,
    action: &Value,
    start_time: &Value,
    end_time: &Value,
) -> Result<(Vec<ActionRecord>, ListUsersByAction), ValidationError> {
    let raw_records = require_sequence(records, "records")?;
    let action = require_action(action)?;
    let start_time = require_number(start_time, "start_time")?;
    let end_time = require_number(end_time, "end_time")?;
    let query = ListUsersByAction::new(action, start_time, end_time)?;
    Ok((validate_records(raw_records)?, query))
}
