//! Administrative actions and the messages they surface.

use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Notice shown when approve/reject is triggered for an entry without a user id.
pub const MISSING_USER_ID: &str = "User ID is missing.";

/// Decision on a pending instructor request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn action(self) -> AdminAction {
        match self {
            Decision::Approve => AdminAction::Approve,
            Decision::Reject => AdminAction::Reject,
        }
    }
}

/// Which dataset a backup exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupTarget {
    Users,
    Progress,
}

impl BackupTarget {
    pub fn action(self) -> AdminAction {
        match self {
            BackupTarget::Users => AdminAction::BackupUsers,
            BackupTarget::Progress => AdminAction::BackupProgress,
        }
    }

    /// Path segment under `/backup`.
    pub fn as_str(self) -> &'static str {
        match self {
            BackupTarget::Users => "users",
            BackupTarget::Progress => "progress",
        }
    }
}

/// A mutation the dashboard can send to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminAction {
    Approve,
    Reject,
    BackupUsers,
    BackupProgress,
}

impl AdminAction {
    /// Shown when the backend accepted the action.
    pub fn success_message(self) -> &'static str {
        match self {
            AdminAction::Approve => "User successfully promoted to instructor.",
            AdminAction::Reject => "Request rejected successfully.",
            AdminAction::BackupUsers => "Users backup completed successfully.",
            AdminAction::BackupProgress => "Progress backup completed successfully.",
        }
    }

    /// Shown when the backend refused without saying why.
    pub fn failure_message(self) -> &'static str {
        match self {
            AdminAction::Approve => "Failed to approve user.",
            AdminAction::Reject => "Failed to reject request.",
            AdminAction::BackupUsers => "Failed to backup users.",
            AdminAction::BackupProgress => "Failed to backup progress.",
        }
    }

    /// Shown when the request never completed.
    pub fn transport_message(self) -> &'static str {
        match self {
            AdminAction::Approve => "An error occurred while approving the user.",
            AdminAction::Reject => "An error occurred while rejecting the request.",
            AdminAction::BackupUsers => "An error occurred while backing up users.",
            AdminAction::BackupProgress => "An error occurred while backing up progress.",
        }
    }

    /// User-facing text for the result of this action.
    pub fn message_for(self, result: &Result<(), ApiError>) -> String {
        match result {
            Ok(()) => self.success_message().to_string(),
            Err(err) if err.is_transport() => self.transport_message().to_string(),
            Err(err) => err
                .server_message()
                .unwrap_or(self.failure_message())
                .to_string(),
        }
    }
}

impl std::fmt::Display for AdminAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminAction::Approve => write!(f, "approve instructor"),
            AdminAction::Reject => write!(f, "reject instructor"),
            AdminAction::BackupUsers => write!(f, "backup users"),
            AdminAction::BackupProgress => write!(f, "backup progress"),
        }
    }
}

/// Result of an approve/reject attempt, ready to apply to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionOutcome {
    /// One-shot notice for the administrator.
    pub notice: String,
    /// Set only when the backend accepted the decision.
    pub removed_user: Option<String>,
}

impl DecisionOutcome {
    /// Approve/reject was triggered without a usable user id.
    pub fn missing_user_id() -> Self {
        Self {
            notice: MISSING_USER_ID.to_string(),
            removed_user: None,
        }
    }

    pub fn from_result(decision: Decision, user_id: &str, result: &Result<(), ApiError>) -> Self {
        Self {
            notice: decision.action().message_for(result),
            removed_user: result.is_ok().then(|| user_id.to_string()),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.removed_user.is_some()
    }
}
