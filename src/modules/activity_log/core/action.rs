use std::fmt;
use std::str::FromStr;

use crate::shared::core::validation::ValidationError;

pub const START_ACTION: &str = "start";
pub const STOP_ACTION: &str = "stop";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    Stop,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Start => START_ACTION,
            Action::Stop => STOP_ACTION,
        }
    }

    /// Parses the wire form. Anything other than the two exact literals is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            START_ACTION => Some(Action::Start),
            STOP_ACTION => Some(Action::Stop),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Action::parse(value).ok_or_else(|| {
            ValidationError::InvalidArgument(format!(
                "action can only be {START_ACTION} or {STOP_ACTION}"
            ))
        })
    }
}
