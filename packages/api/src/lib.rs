//! Client side of the admin backend.
//!
//! This crate contains:
//! - Backend configuration (base URL)
//! - The `AdminApi` trait and its reqwest implementation
//! - Dashboard operations (load, approve/reject, backups) built on top of it

pub mod actions;
mod client;
mod config;

pub use actions::{decide_instructor, load_logs, run_backup};
pub use client::{AdminApi, ClientError, HttpAdminClient, error_message};
pub use config::{ApiConfig, BASE_URL_ENV, ConfigError, DEFAULT_BASE_URL};

// Re-export core types for convenience
pub use admin_core::{
    AdminAction, ApiError, BackupTarget, DashboardState, Decision, DecisionOutcome, LoadState,
    LogEntry, LogKind,
};
