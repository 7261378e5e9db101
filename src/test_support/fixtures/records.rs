// Action record fixtures: the seed log and a builder for ad hoc records.

use serde_json::Value;

use crate::modules::activity_log::core::action::Action;
use crate::modules::activity_log::core::record::ActionRecord;
use crate::shared::core::primitives::{Timestamp, UserId};
use crate::test_support::fixtures::load_json;

pub fn load_records_json(name: &str) -> anyhow::Result<Value> {
    load_json(name)
}

/// The seven-record log used by most scenarios.
pub fn seed_records() -> Vec<ActionRecord> {
    let json = load_records_json("seed_records.json").unwrap();
    serde_json::from_value(json).unwrap()
}

pub struct ActionRecordBuilder {
    inner: ActionRecord,
}

impl Default for ActionRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ActionRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: ActionRecord::new(1, "Windows 10", Action::Start, 100.0),
        }
    }

    pub fn user_id(mut self, v: UserId) -> Self {
        self.inner.user_id = v;
        self
    }

    pub fn device(mut self, v: impl Into<String>) -> Self {
        self.inner.device = v.into();
        self
    }

    pub fn action(mut self, v: Action) -> Self {
        self.inner.action = v;
        self
    }

    pub fn date_actioned(mut self, v: Timestamp) -> Self {
        self.inner.date_actioned = v;
        self
    }

    pub fn build(self) -> ActionRecord {
        self.inner
    }
}

#[cfg(test)]
mod action_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = ActionRecordBuilder::default().build();
        assert_eq!(built, ActionRecord::new(1, "Windows 10", Action::Start, 100.0));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ActionRecordBuilder::new()
            .user_id(9)
            .device("Smart TV")
            .action(Action::Stop)
            .date_actioned(4242.5)
            .build();
        assert_eq!(custom, ActionRecord::new(9, "Smart TV", Action::Stop, 4242.5));
    }

    #[rstest]
    fn seed_records_parse_into_seven_records() {
        let records = seed_records();
        assert_eq!(records.len(), 7);
        assert_eq!(records[6], ActionRecord::new(3, "Android 9.1", Action::Start, 700.0));
    }
}
