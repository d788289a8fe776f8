//! Read-only list of failed logins and unauthorized access attempts.

use admin_core::LogEntry;
use dioxus::prelude::*;

use super::KindBadge;

/// Every log entry that is not an instructor request.
#[component]
pub fn SecurityLogs(logs: Vec<LogEntry>) -> Element {
    rsx! {
        section { class: "logs",
            h2 { "Failed Login Attempts & Unauthorized Access Logs" }

            if logs.is_empty() {
                p { class: "no-logs", "No logs available." }
            } else {
                ul { class: "log-list",
                    for (index, log) in logs.iter().enumerate() {
                        SecurityLogItem { key: "{index}", log: log.clone() }
                    }
                }
            }
        }
    }
}

/// A single security log row.
#[component]
fn SecurityLogItem(log: LogEntry) -> Element {
    let occurred = log.local_timestamp();

    rsx! {
        li { class: "log-item",
            KindBadge { kind: log.kind.clone() }
            ": {log.message}"
            if let Some(ref email) = log.email {
                " (Email: {email})"
            }
            " (IP: {log.source_ip}) at {occurred}"
        }
    }
}
