use indexmap::IndexSet;

use crate::modules::activity_log::core::record::ActionRecord;
use crate::modules::activity_log::use_cases::list_users_by_action::query::ListUsersByAction;
use crate::shared::core::primitives::UserId;

/// Distinct users who performed `query.action` inside `query.window`, in first-occurrence order.
pub fn list_users_by_action(records: &[ActionRecord], query: &ListUsersByAction) -> Vec<UserId> {
    let users: IndexSet<UserId> = records
        .iter()
        .filter(|record| record.action == query.action && query.window.contains(record.date_actioned))
        .map(|record| record.user_id)
        .collect();

    tracing::debug!(
        action = %query.action,
        start_time = query.window.start(),
        end_time = query.window.end(),
        records = records.len(),
        users = users.len(),
        "listed users by action"
    );

    users.into_iter().collect()
}
