#![allow(dead_code)]

use std::sync::Mutex;

use admin_core::{ApiError, LogEntry, LogKind};
use api::AdminApi;

/// A backend call as seen by [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchLogs,
    Approve(String),
    Reject(String),
    BackupUsers,
    BackupProgress,
}

/// In-memory [`AdminApi`] that records calls and answers with canned results.
pub struct FakeApi {
    logs: Result<Vec<LogEntry>, ApiError>,
    mutation: Result<(), ApiError>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    /// Every call succeeds; `/logs` is empty.
    pub fn ok() -> Self {
        Self {
            logs: Ok(Vec::new()),
            mutation: Ok(()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every mutation fails with `err`.
    pub fn failing(err: ApiError) -> Self {
        Self {
            mutation: Err(err),
            ..Self::ok()
        }
    }

    pub fn with_logs(mut self, logs: Result<Vec<LogEntry>, ApiError>) -> Self {
        self.logs = logs;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl AdminApi for FakeApi {
    async fn fetch_logs(&self) -> Result<Vec<LogEntry>, ApiError> {
        self.record(Call::FetchLogs);
        self.logs.clone()
    }

    async fn approve_instructor(&self, user_id: &str) -> Result<(), ApiError> {
        self.record(Call::Approve(user_id.to_string()));
        self.mutation.clone()
    }

    async fn reject_instructor(&self, user_id: &str) -> Result<(), ApiError> {
        self.record(Call::Reject(user_id.to_string()));
        self.mutation.clone()
    }

    async fn backup_users(&self) -> Result<(), ApiError> {
        self.record(Call::BackupUsers);
        self.mutation.clone()
    }

    async fn backup_progress(&self) -> Result<(), ApiError> {
        self.record(Call::BackupProgress);
        self.mutation.clone()
    }
}

pub fn instructor_request(user_id: &str) -> LogEntry {
    LogEntry::new(LogKind::InstructorRequest, "req", "1.2.3.4", "2024-01-01T00:00:00Z")
        .with_email("a@b.com")
        .with_user_id(user_id)
}

pub fn failed_login(ip: &str) -> LogEntry {
    LogEntry::new(LogKind::FailedLogin, "bad password", ip, "2024-01-01T00:00:00Z")
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_backend(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a local port nothing listens on.
pub async fn closed_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
