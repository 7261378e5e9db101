// Identifier and time primitives shared by every module.
//
// Ids are integers. Timestamps are opaque orderable numbers and may be fractional.
// No timezone or calendar meaning is attached.

pub type UserId = i64;
pub type Timestamp = f64;
pub type AppId = i64;
pub type FeatureId = i64;
