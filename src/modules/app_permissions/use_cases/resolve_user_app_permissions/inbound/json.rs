// Loosely-typed entry point for resolving a user's app permissions.
//
// Purpose
// - Accept the user id and the three collections exactly as an external caller supplies them.
//
// Responsibilities
// - Check arguments in order: user id, apps, app features, user features.
// - Validate every entry of each collection before resolving.

use serde_json::Value;

use crate::modules::app_permissions::core::model::{
    App, AppFeatures, UserAppPermissions, UserFeatures,
};
use crate::modules::app_permissions::use_cases::resolve_user_app_permissions::handler::resolve_user_app_permissions;
use crate::shared::core::validation::{
    ValidationError, as_object, integer_field, integer_list_field,
};

pub fn get_user_app_permissions(
    user_id: &Value,
    apps: &Value,
    app_features: &Value,
    user_features: &Value,
) -> Result<UserAppPermissions, ValidationError> {
    let user_id = user_id
        .as_i64()
        .ok_or_else(|| invalid("userId can not be None, and can only be int."))?;
    let apps = apps
        .as_array()
        .ok_or_else(|| invalid("apps can not be None, and can only be list."))?;
    let app_features = app_features
        .as_array()
        .ok_or_else(|| invalid("appFeatures can not be None, and can only be list."))?;
    let user_features = user_features
        .as_array()
        .ok_or_else(|| invalid("userFeatures can not be None, and can only be list."))?;

    let apps = apps
        .iter()
        .enumerate()
        .map(|(index, entry)| -> Result<App, ValidationError> {
            let fields = as_object(index, entry)?;
            Ok(App {
                app_id: integer_field(fields, "app_id", index)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let app_features = app_features
        .iter()
        .enumerate()
        .map(|(index, entry)| -> Result<AppFeatures, ValidationError> {
            let fields = as_object(index, entry)?;
            Ok(AppFeatures {
                app_id: integer_field(fields, "app_id", index)?,
                features_available: integer_list_field(fields, "features_available", index)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let user_features = user_features
        .iter()
        .enumerate()
        .map(|(index, entry)| -> Result<UserFeatures, ValidationError> {
            let fields = as_object(index, entry)?;
            Ok(UserFeatures {
                user_id: integer_field(fields, "user_id", index)?,
                features_allowed: integer_list_field(fields, "features_allowed", index)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(resolve_user_app_permissions(
        user_id,
        &apps,
        &app_features,
        &user_features,
    ))
}

fn invalid(message: &str) -> ValidationError {
    ValidationError::InvalidArgument(message.to_string())
}
