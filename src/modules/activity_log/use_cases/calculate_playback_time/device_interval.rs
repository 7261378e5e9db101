// Per-device playback intervals rebuilt from a user's start and stop records.
//
// Purpose
// - Pair the last start and the last stop seen for every device of one user.
//
// Responsibilities
// - Group by device in first-seen order; later records overwrite the same field.
// - Keep only devices that have both a start and an end.

use indexmap::IndexMap;

use crate::modules::activity_log::core::action::Action;
use crate::modules::activity_log::core::record::ActionRecord;
use crate::shared::core::primitives::{Timestamp, UserId};

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DeviceInterval {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl DeviceInterval {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Negative when the stop precedes the start; records are not cross-checked.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Default)]
struct PartialInterval {
    start: Option<Timestamp>,
    end: Option<Timestamp>,
}

pub fn reconstruct_device_intervals(user_id: UserId, records: &[ActionRecord]) -> Vec<DeviceInterval> {
    let mut devices: IndexMap<&str, PartialInterval> = IndexMap::new();
    for record in records.iter().filter(|record| record.user_id == user_id) {
        let interval = devices.entry(record.device.as_str()).or_default();
        match record.action {
            Action::Start => interval.start = Some(record.date_actioned),
            Action::Stop => interval.end = Some(record.date_actioned),
        }
    }

    devices
        .into_values()
        .filter_map(|interval| match (interval.start, interval.end) {
            (Some(start), Some(end)) => Some(DeviceInterval::new(start, end)),
            _ => None,
        })
        .collect()
}
