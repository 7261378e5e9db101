use crate::modules::activity_log::use_cases::calculate_playback_time::config::MergeStrategy;
use crate::modules::activity_log::use_cases::calculate_playback_time::device_interval::DeviceInterval;

/// Sorts by start (stable) and collapses overlapping intervals with the chosen strategy.
pub fn merge_intervals(
    mut intervals: Vec<DeviceInterval>,
    strategy: MergeStrategy,
) -> Vec<DeviceInterval> {
    intervals.sort_by(|a, b| a.start.total_cmp(&b.start));
    match strategy {
        MergeStrategy::FirstMatch => merge_first_match(intervals),
        MergeStrategy::Sweep => merge_sweep(intervals),
    }
}

fn merge_first_match(intervals: Vec<DeviceInterval>) -> Vec<DeviceInterval> {
    let mut merged: Vec<DeviceInterval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        let absorbing = merged
            .iter_mut()
            .find(|m| m.start <= interval.start && interval.start <= m.end);
        match absorbing {
            // end is taken as-is, it may shrink the merged interval
            Some(m) => m.end = interval.end,
            None => merged.push(interval),
        }
    }
    merged
}

fn merge_sweep(intervals: Vec<DeviceInterval>) -> Vec<DeviceInterval> {
    let mut merged: Vec<DeviceInterval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.start <= last.end => last.end = last.end.max(interval.end),
            _ => merged.push(interval),
        }
    }
    merged
}
