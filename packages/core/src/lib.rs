//! Core domain types for the admin dashboard.
//!
//! This crate contains shared types used across all packages:
//! - LogEntry and LogKind for security and instructor-request records
//! - DashboardState for the view's in-memory state
//! - AdminAction and its user-facing messages

mod action;
mod dashboard;
mod error;
mod log_entry;

pub use action::{AdminAction, BackupTarget, Decision, DecisionOutcome, MISSING_USER_ID};
pub use dashboard::{DashboardState, LoadState};
pub use error::ApiError;
pub use log_entry::{LogEntry, LogKind, instructor_requests, remove_user, security_events};
