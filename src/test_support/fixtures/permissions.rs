// App permission fixtures: apps, app features and user features.

use serde::Deserialize;
use serde_json::Value;

use crate::modules::app_permissions::core::model::{App, AppFeatures, UserFeatures};
use crate::test_support::fixtures::load_json;

#[derive(Debug, Clone, Deserialize)]
pub struct PermissionsFixture {
    pub apps: Vec<App>,
    pub app_features: Vec<AppFeatures>,
    pub user_features: Vec<UserFeatures>,
}

pub fn load_permissions_json() -> anyhow::Result<Value> {
    load_json("permissions.json")
}

pub fn load_permissions_fixture() -> anyhow::Result<PermissionsFixture> {
    Ok(serde_json::from_value(load_permissions_json()?)?)
}
