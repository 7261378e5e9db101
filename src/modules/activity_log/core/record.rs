// A single device action as it appears in the activity log.
//
// Purpose
// - Carry a record that has already passed validation, so queries never re-check fields.
//
// Responsibilities
// - Mirror the external record shape: user_id, device, action, date_actioned.
// - Stay independent of how records arrive (raw JSON, typed deserialization, test builders).

use crate::modules::activity_log::core::action::Action;
use crate::shared::core::primitives::{Timestamp, UserId};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActionRecord {
    pub user_id: UserId,
    pub device: String,
    pub action: Action,
    pub date_actioned: Timestamp,
}

impl ActionRecord {
    pub fn new(
        user_id: UserId,
        device: impl Into<String>,
        action: Action,
        date_actioned: Timestamp,
    ) -> Self {
        Self {
            user_id,
            device: device.into(),
            action,
            date_actioned,
        }
    }
}
