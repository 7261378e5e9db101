// End to end tests for resolving a user's app permissions from raw JSON.

use activity_log::{ValidationError, get_user_app_permissions};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn apps() -> Value {
    json!([{"app_id": 1}, {"app_id": 2}, {"app_id": 3}, {"app_id": 126}])
}

#[fixture]
fn app_features() -> Value {
    json!([
        {"app_id": 1, "features_available": [1, 2, 3]},
        {"app_id": 2, "features_available": [3, 4, 5, 7]},
        {"app_id": 3, "features_available": [3, 12]}
    ])
}

#[fixture]
fn user_features() -> Value {
    json!([
        {"user_id": 1, "features_allowed": [1, 2, 5]},
        {"user_id": 2, "features_allowed": [1, 2, 3, 4]},
        {"user_id": 3, "features_allowed": []}
    ])
}

#[rstest]
fn it_should_resolve_permissions_for_a_known_user(
    apps: Value,
    app_features: Value,
    user_features: Value,
) {
    let result = get_user_app_permissions(&json!(2), &apps, &app_features, &user_features).unwrap();
    assert_eq!(
        serde_json::to_value(result).unwrap(),
        json!({
            "user_id": 2,
            "application_permissions": [
                {"app_id": 1, "features_allowed": [1, 2, 3]},
                {"app_id": 2, "features_allowed": [3, 4]},
                {"app_id": 3, "features_allowed": [3]},
                {"app_id": 126, "features_allowed": []}
            ]
        })
    );
}

#[rstest]
fn it_should_return_empty_permissions_with_no_data() {
    let result = get_user_app_permissions(&json!(1), &json!([]), &json!([]), &json!([])).unwrap();
    assert_eq!(
        serde_json::to_value(result).unwrap(),
        json!({"user_id": 1, "application_permissions": []})
    );
}

#[rstest]
fn it_should_reject_a_user_id_that_is_not_an_integer(
    apps: Value,
    app_features: Value,
    user_features: Value,
) {
    let result = get_user_app_permissions(&json!("1"), &apps, &app_features, &user_features);
    assert!(matches!(result, Err(ValidationError::InvalidArgument(_))));
}
