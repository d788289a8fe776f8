//! Dashboard operations: call the backend and turn the result into something the view applies.

use admin_core::{AdminAction, ApiError, BackupTarget, Decision, DecisionOutcome, LogEntry};

use crate::AdminApi;

/// Fetch the log collection once for a freshly mounted dashboard.
pub async fn load_logs<A: AdminApi>(api: &A) -> Result<Vec<LogEntry>, ApiError> {
    let result = api.fetch_logs().await;
    match &result {
        Ok(logs) => tracing::info!(count = logs.len(), "Loaded admin logs"),
        Err(e) => tracing::warn!("Failed to load admin logs: {}", e),
    }
    result
}

/// Approve or reject a pending instructor request.
///
/// Without a usable `user_id` nothing is sent and the outcome carries the
/// missing-user-id notice.
pub async fn decide_instructor<A: AdminApi>(
    api: &A,
    decision: Decision,
    user_id: Option<&str>,
) -> DecisionOutcome {
    let Some(user_id) = user_id.filter(|id| !id.trim().is_empty()) else {
        tracing::warn!("Refusing to {}: user id is missing", decision.action());
        return DecisionOutcome::missing_user_id();
    };

    let result = match decision {
        Decision::Approve => api.approve_instructor(user_id).await,
        Decision::Reject => api.reject_instructor(user_id).await,
    };
    report(decision.action(), &result);

    DecisionOutcome::from_result(decision, user_id, &result)
}

/// Trigger a backup and return the status line to show.
pub async fn run_backup<A: AdminApi>(api: &A, target: BackupTarget) -> String {
    let result = match target {
        BackupTarget::Users => api.backup_users().await,
        BackupTarget::Progress => api.backup_progress().await,
    };
    let action = target.action();
    report(action, &result);
    action.message_for(&result)
}

fn report(action: AdminAction, result: &Result<(), ApiError>) {
    match result {
        Ok(()) => tracing::info!("{} succeeded", action),
        Err(e) if e.is_transport() => tracing::error!("Error during {}: {}", action, e),
        Err(e) => tracing::warn!("{} rejected by backend: {}", action, e),
    }
}
