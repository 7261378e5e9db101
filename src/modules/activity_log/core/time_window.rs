use std::cmp::Ordering;

use crate::shared::core::validation::ValidationError;
use crate::shared::core::primitives::Timestamp;

/// Closed interval `[start, end]`. Construction guarantees `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TimeWindow {
    start: Timestamp,
    end: Timestamp,
}

impl TimeWindow {
    /// Bounds that are not ordered (NaN) are refused like an inverted window.
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, ValidationError> {
        match end.partial_cmp(&start) {
            Some(Ordering::Greater) => Ok(Self { start, end }),
            _ => Err(ValidationError::InvalidArgument(
                "end_time must be greater than start_time".into(),
            )),
        }
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, at: Timestamp) -> bool {
        self.start <= at && at <= self.end
    }
}
