use std::collections::{HashMap, HashSet};

use crate::modules::app_permissions::core::model::{
    App, AppFeatures, AppPermission, UserAppPermissions, UserFeatures,
};
use crate::shared::core::primitives::{AppId, FeatureId, UserId};

/// Intersects the user's allowed features with each app's available features.
///
/// Only the first `user_features` entry for the user counts. A later `app_features` entry for the
/// same app replaces an earlier one. Apps keep their input order and features keep the app's order.
pub fn resolve_user_app_permissions(
    user_id: UserId,
    apps: &[App],
    app_features: &[AppFeatures],
    user_features: &[UserFeatures],
) -> UserAppPermissions {
    let allowed: HashSet<FeatureId> = user_features
        .iter()
        .find(|entry| entry.user_id == user_id)
        .map(|entry| entry.features_allowed.iter().copied().collect())
        .unwrap_or_default();

    let available: HashMap<AppId, &[FeatureId]> = app_features
        .iter()
        .map(|entry| (entry.app_id, entry.features_available.as_slice()))
        .collect();

    let application_permissions: Vec<AppPermission> = apps
        .iter()
        .map(|app| AppPermission {
            app_id: app.app_id,
            features_allowed: available
                .get(&app.app_id)
                .into_iter()
                .flat_map(|features| features.iter())
                .filter(|feature| allowed.contains(*feature))
                .copied()
                .collect(),
        })
        .collect();

    tracing::debug!(
        user_id,
        apps = apps.len(),
        allowed = allowed.len(),
        "resolved user app permissions"
    );

    UserAppPermissions {
        user_id,
        application_permissions,
    }
}
