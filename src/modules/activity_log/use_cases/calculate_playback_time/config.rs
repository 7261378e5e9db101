// Behavior knobs for the playback time calculation.
//
// The config is plain data so a caller can embed it in its own configuration file.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// The first merged interval containing the next start absorbs it and takes its end,
    /// even when that end is earlier than the merged one.
    #[default]
    FirstMatch,
    /// Linear sweep over the sorted intervals, keeping the furthest end.
    Sweep,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub merge_strategy: MergeStrategy,
}

impl PlaybackConfig {
    pub fn with_merge_strategy(merge_strategy: MergeStrategy) -> Self {
        Self { merge_strategy }
    }
}
