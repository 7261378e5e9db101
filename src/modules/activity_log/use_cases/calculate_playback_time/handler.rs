// Pure playback time calculation for one user.
//
// Purpose
// - Sum the time a user spent playing on any device, counting overlapping sessions once.
//
// Responsibilities
// - Rebuild device intervals, merge them with the configured strategy, sum merged durations.
// - Never validate raw input and never perform input or output.

use crate::modules::activity_log::core::record::ActionRecord;
use crate::modules::activity_log::use_cases::calculate_playback_time::config::PlaybackConfig;
use crate::modules::activity_log::use_cases::calculate_playback_time::device_interval::reconstruct_device_intervals;
use crate::modules::activity_log::use_cases::calculate_playback_time::merge::merge_intervals;
use crate::shared::core::primitives::UserId;

pub fn calculate_playback_time(
    user_id: UserId,
    records: &[ActionRecord],
    config: &PlaybackConfig,
) -> f64 {
    let intervals = reconstruct_device_intervals(user_id, records);
    let devices = intervals.len();
    let merged = merge_intervals(intervals, config.merge_strategy);
    let total = merged
        .iter()
        .fold(0.0, |total, interval| total + interval.duration());

    tracing::debug!(
        user_id,
        devices,
        merged = merged.len(),
        strategy = ?config.merge_strategy,
        total,
        "calculated playback time"
    );

    total
}

#[cfg(test)]
mod calculate_playback_time_handler_tests {
    use super::*;
    use crate::modules::activity_log::core::action::Action;
    use crate::modules::activity_log::use_cases::calculate_playback_time::config::MergeStrategy;
    use crate::test_support::fixtures::records::{ActionRecordBuilder, seed_records};
    use rstest::{fixture, rstest};

    #[fixture]
    fn records() -> Vec<ActionRecord> {
        seed_records()
    }

    #[fixture]
    fn disjoint_records() -> Vec<ActionRecord> {
        seed_records()
            .into_iter()
            .map(|record| {
                if record.device == "iPhone 8s" && record.action == Action::Start {
                    ActionRecord { date_actioned: 400.0, ..record }
                } else {
                    record
                }
            })
            .collect()
    }

    #[rstest]
    fn it_should_count_overlapping_devices_once(records: Vec<ActionRecord>) {
        assert_eq!(calculate_playback_time(1, &records, &PlaybackConfig::default()), 310.0);
    }

    #[rstest]
    fn it_should_sum_disjoint_sessions(disjoint_records: Vec<ActionRecord>) {
        assert_eq!(
            calculate_playback_time(1, &disjoint_records, &PlaybackConfig::default()),
            280.0
        );
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    fn it_should_return_zero_without_a_complete_interval(records: Vec<ActionRecord>, #[case] user_id: UserId) {
        assert_eq!(calculate_playback_time(user_id, &records, &PlaybackConfig::default()), 0.0);
    }

    #[rstest]
    fn it_should_time_a_single_device(records: Vec<ActionRecord>) {
        assert_eq!(calculate_playback_time(2, &records, &PlaybackConfig::default()), 290.0);
    }

    #[rstest]
    fn it_should_return_zero_for_only_stop_events() {
        let records = vec![
            ActionRecordBuilder::new().action(Action::Stop).date_actioned(50.0).build(),
            ActionRecordBuilder::new().device("tv").action(Action::Stop).date_actioned(80.0).build(),
        ];
        assert_eq!(calculate_playback_time(1, &records, &PlaybackConfig::default()), 0.0);
    }

    #[rstest]
    #[case(MergeStrategy::FirstMatch, 200.0)]
    #[case(MergeStrategy::Sweep, 400.0)]
    fn it_should_follow_the_configured_strategy(
        #[case] strategy: MergeStrategy,
        #[case] expected: f64,
    ) {
        let records = vec![
            ActionRecordBuilder::new().device("desktop").date_actioned(100.0).build(),
            ActionRecordBuilder::new().device("phone").date_actioned(200.0).build(),
            ActionRecordBuilder::new().device("phone").action(Action::Stop).date_actioned(300.0).build(),
            ActionRecordBuilder::new().device("desktop").action(Action::Stop).date_actioned(500.0).build(),
        ];
        let config = PlaybackConfig::with_merge_strategy(strategy);
        assert_eq!(calculate_playback_time(1, &records, &config), expected);
    }

    #[rstest]
    fn it_should_sum_fractional_sessions() {
        let records = vec![
            ActionRecordBuilder::new().device("tv").date_actioned(100.25).build(),
            ActionRecordBuilder::new().device("tv").action(Action::Stop).date_actioned(110.75).build(),
            ActionRecordBuilder::new().device("phone").date_actioned(200.5).build(),
            ActionRecordBuilder::new().device("phone").action(Action::Stop).date_actioned(201.0).build(),
        ];
        assert_eq!(calculate_playback_time(1, &records, &PlaybackConfig::default()), 11.0);
    }

    #[rstest]
    #[case(MergeStrategy::FirstMatch)]
    #[case(MergeStrategy::Sweep)]
    fn it_should_total_extreme_timestamps_without_overflowing(#[case] strategy: MergeStrategy) {
        let records = vec![
            ActionRecordBuilder::new().device("tv").date_actioned(i64::MIN as f64).build(),
            ActionRecordBuilder::new().device("tv").action(Action::Stop).date_actioned(i64::MAX as f64).build(),
            ActionRecordBuilder::new().device("phone").date_actioned(i64::MAX as f64).build(),
            ActionRecordBuilder::new().device("phone").action(Action::Stop).date_actioned(i64::MAX as f64 * 2.0).build(),
        ];
        let config = PlaybackConfig::with_merge_strategy(strategy);
        assert_eq!(
            calculate_playback_time(1, &records, &config),
            i64::MAX as f64 * 2.0 - i64::MIN as f64
        );
    }

    #[rstest]
    fn it_should_return_the_same_total_when_called_twice(records: Vec<ActionRecord>) {
        let config = PlaybackConfig::default();
        assert_eq!(
            calculate_playback_time(1, &records, &config),
            calculate_playback_time(1, &records, &config)
        );
    }
}
