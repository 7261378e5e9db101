// Query data type for listing users by action inside a time window.
//
// Purpose
// - Express "which users did <action> between start and end" with already-validated values.
//
// Responsibilities
// - Carry the action and the closed window to the handler.
// - Be independent of how the caller supplied the arguments.

use crate::modules::activity_log::core::action::Action;
use crate::modules::activity_log::core::time_window::TimeWindow;
use crate::shared::core::validation::ValidationError;
use crate::shared::core::primitives::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListUsersByAction {
    pub action: Action,
    pub window: TimeWindow,
}

impl ListUsersByAction {
    pub fn new(
        action: Action,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            action,
            window: TimeWindow::new(start_time, end_time)?,
        })
    }
}
