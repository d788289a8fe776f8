//! In-memory state behind the admin dashboard view.

use std::collections::VecDeque;

use crate::log_entry::{self, LogEntry};
use crate::{ApiError, DecisionOutcome};

/// Progress of the one-shot initial fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Dashboard state: the fetched logs, the banners and the pending notices.
///
/// `logs` is a read-through copy of the server collection. After the first load it
/// only changes through [`DashboardState::apply_decision`], so it may drift from the
/// server until the view is reloaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Entries in the order the server sent them.
    pub logs: Vec<LogEntry>,
    /// Persistent banner text for a failed initial load.
    pub error: Option<String>,
    /// Status of the most recent backup action.
    pub backup_message: Option<String>,
    pub load: LoadState,
    /// Decision notices not yet acknowledged, oldest first.
    pub notices: VecDeque<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the result of the initial fetch.
    pub fn apply_load(&mut self, result: Result<Vec<LogEntry>, ApiError>) {
        match result {
            Ok(logs) => {
                self.logs = logs;
                self.error = None;
                self.load = LoadState::Loaded;
            }
            Err(err) => self.fail(err.load_message()),
        }
    }

    /// Mark the initial load as failed with a banner message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.logs.clear();
        self.error = Some(message.into());
        self.load = LoadState::Failed;
    }

    /// Queue the decision notice and drop the decided user's entries if the
    /// backend accepted the decision.
    ///
    /// Returns the number of entries removed.
    pub fn apply_decision(&mut self, outcome: &DecisionOutcome) -> usize {
        self.notices.push_back(outcome.notice.clone());
        match outcome.removed_user.as_deref() {
            Some(user_id) => log_entry::remove_user(&mut self.logs, user_id),
            None => 0,
        }
    }

    /// Oldest notice still waiting for acknowledgement.
    pub fn current_notice(&self) -> Option<&str> {
        self.notices.front().map(String::as_str)
    }

    /// Dismiss the current notice, revealing the next one.
    pub fn acknowledge_notice(&mut self) -> Option<String> {
        self.notices.pop_front()
    }

    /// Replace the backup status line.
    pub fn set_backup_message(&mut self, message: impl Into<String>) {
        self.backup_message = Some(message.into());
    }

    pub fn instructor_requests(&self) -> Vec<LogEntry> {
        log_entry::instructor_requests(&self.logs).cloned().collect()
    }

    pub fn security_events(&self) -> Vec<LogEntry> {
        log_entry::security_events(&self.logs).cloned().collect()
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }
}
