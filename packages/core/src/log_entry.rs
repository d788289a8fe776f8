//! Security and audit log records as served by the admin backend.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Display format for timestamps, matching the browser's default locale string.
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Date-time forms without an offset, read as the viewer's local time.
const LOCAL_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Kind of a log record. Decides which dashboard list renders it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogKind {
    /// Someone failed to authenticate.
    FailedLogin,
    /// An authenticated user hit a route they may not access.
    UnauthorizedAccess,
    /// A user asked to be promoted to instructor.
    InstructorRequest,
    /// Any kind this client does not know about yet, with the raw wire name.
    Other(String),
}

impl LogKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            LogKind::FailedLogin => "failed_login",
            LogKind::UnauthorizedAccess => "unauthorized_access",
            LogKind::InstructorRequest => "instructor_request",
            LogKind::Other(raw) => raw,
        }
    }

    pub fn is_instructor_request(&self) -> bool {
        matches!(self, LogKind::InstructorRequest)
    }
}

impl From<String> for LogKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "failed_login" => LogKind::FailedLogin,
            "unauthorized_access" => LogKind::UnauthorizedAccess,
            "instructor_request" => LogKind::InstructorRequest,
            _ => LogKind::Other(raw),
        }
    }
}

impl From<LogKind> for String {
    fn from(kind: LogKind) -> Self {
        match kind {
            LogKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record of the `/logs` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// What happened.
    #[serde(rename = "type")]
    pub kind: LogKind,
    /// Free-text description.
    pub message: String,
    /// Source IP address of the request that produced the record.
    #[serde(rename = "ip")]
    pub source_ip: String,
    /// ISO-8601 timestamp, kept as sent by the server.
    #[serde(rename = "timestamp")]
    pub occurred_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Only meaningful on instructor requests.
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl LogEntry {
    /// Create a record with no email or user attached.
    pub fn new(
        kind: LogKind,
        message: impl Into<String>,
        source_ip: impl Into<String>,
        occurred_at: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source_ip: source_ip.into(),
            occurred_at: occurred_at.into(),
            email: None,
            user_id: None,
        }
    }

    /// Attach the email of the account involved.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Attach the user id of the account involved.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// The user id approve/reject may act on, if it is present and non-blank.
    pub fn actionable_user_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }

    /// Parse the server timestamp.
    ///
    /// A date-time without an offset is local time. A bare date is midnight UTC.
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.occurred_at.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts);
        }
        if let Some(naive) = LOCAL_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|ts| ts.fixed_offset());
        }
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?).fixed_offset())
    }

    /// Timestamp rendered in the viewer's local time zone.
    pub fn local_timestamp(&self) -> String {
        self.timestamp_in(&Local)
    }

    /// Timestamp rendered in `tz`, or `Invalid Date` when the server sent garbage.
    pub fn timestamp_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match self.timestamp() {
            Some(ts) => ts.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string(),
            None => "Invalid Date".to_string(),
        }
    }
}

/// Entries shown in the instructor request list, in server order.
pub fn instructor_requests(logs: &[LogEntry]) -> impl Iterator<Item = &LogEntry> {
    logs.iter().filter(|log| log.kind.is_instructor_request())
}

/// Entries shown in the security log list: everything that is not an instructor request.
pub fn security_events(logs: &[LogEntry]) -> impl Iterator<Item = &LogEntry> {
    logs.iter().filter(|log| !log.kind.is_instructor_request())
}

/// Drop every entry belonging to `user_id`. Returns how many were removed.
///
/// Entries without a user id are always kept.
pub fn remove_user(logs: &mut Vec<LogEntry>, user_id: &str) -> usize {
    let before = logs.len();
    logs.retain(|log| log.user_id.as_deref() != Some(user_id));
    before - logs.len()
}
