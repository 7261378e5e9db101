// Loosely-typed entry point for the playback time calculation.
//
// Purpose
// - Accept user_id and records exactly as an external caller supplies them.
//
// Responsibilities
// - Check user_id, then the records shape, then every record, including other users' records.
// - Delegate to the typed handler.

use serde_json::Value;

use crate::modules::activity_log::core::record::ActionRecord;
use crate::modules::activity_log::core::validation::validate_records;
use crate::modules::activity_log::use_cases::calculate_playback_time::config::PlaybackConfig;
use crate::modules::activity_log::use_cases::calculate_playback_time::handler::calculate_playback_time;
use crate::shared::core::primitives::UserId;
use crate::shared::core::validation::{ValidationError, require_integer, require_sequence};

pub fn get_playback_time(user_id: &Value, records: &Value) -> Result<f64, ValidationError> {
    get_playback_time_with(user_id, records, &PlaybackConfig::default())
}

pub fn get_playback_time_with(
    user_id: &Value,
    records: &Value,
    config: &PlaybackConfig,
) -> Result<f64, ValidationError> {
    let result = parse(user_id, records)
        .map(|(user_id, records)| calculate_playback_time(user_id, &records, config));
    if let Err(error) = &result {
        tracing::debug!(%error, "get_playback_time rejected its input");
    }
    result
}

fn parse(user_id: &Value, records: &Value) -> Result<(UserId, Vec<ActionRecord>), ValidationError> {
    let user_id = require_integer(user_id, "user_id")?;
    let raw_records = require_sequence(records, "records")?;
    Ok((user_id, validate_records(raw_records)?))
}
