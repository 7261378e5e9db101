// Application and feature data used to resolve a user's permissions.
//
// Purpose
// - Represent the three inputs (apps, app features, user features) and the resolved result.
//
// Responsibilities
// - Serialize the result in the shape callers expect:
//   { user_id, application_permissions: [{ app_id, features_allowed }] }.

use crate::shared::core::primitives::{AppId, FeatureId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct App {
    pub app_id: AppId,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppFeatures {
    pub app_id: AppId,
    pub features_available: Vec<FeatureId>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserFeatures {
    pub user_id: UserId,
    pub features_allowed: Vec<FeatureId>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppPermission {
    pub app_id: AppId,
    pub features_allowed: Vec<FeatureId>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserAppPermissions {
    pub user_id: UserId,
    pub application_permissions: Vec<AppPermission>,
}
