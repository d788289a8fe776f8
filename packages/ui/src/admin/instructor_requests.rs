//! Pending instructor requests with approve/reject controls.

use admin_core::{Decision, LogEntry};
use dioxus::prelude::*;

/// Props for InstructorRequests component.
#[derive(Props, Clone, PartialEq)]
pub struct InstructorRequestsProps {
    /// Instructor request entries, in server order.
    pub requests: Vec<LogEntry>,
    /// Called with the decision and the entry's user id, which may be missing.
    pub on_decide: EventHandler<(Decision, Option<String>)>,
}

/// List of instructor requests.
#[component]
pub fn InstructorRequests(props: InstructorRequestsProps) -> Element {
    rsx! {
        section { class: "logs",
            h2 { "Instructor Requests" }

            if props.requests.is_empty() {
                p { class: "no-logs", "No instructor requests available." }
            } else {
                ul { class: "log-list",
                    for (index, request) in props.requests.iter().enumerate() {
                        InstructorRequestItem {
                            key: "{index}",
                            request: request.clone(),
                            on_decide: props.on_decide,
                        }
                    }
                }
            }
        }
    }
}

/// A single instructor request row.
#[component]
fn InstructorRequestItem(
    request: LogEntry,
    on_decide: EventHandler<(Decision, Option<String>)>,
) -> Element {
    let email = request.email.clone().unwrap_or_else(|| "N/A".to_string());
    let user_for_approve = request.actionable_user_id().map(str::to_string);
    let user_for_reject = user_for_approve.clone();
    let occurred = request.local_timestamp();

    rsx! {
        li { class: "log-item",
            strong { "{request.message}" }
            " (Email: {email}) (IP: {request.source_ip}) at {occurred}"
            div { class: "button-container",
                button {
                    class: "btn btn-approve",
                    onclick: move |_| on_decide.call((Decision::Approve, user_for_approve.clone())),
                    "Approve"
                }
                button {
                    class: "btn btn-reject",
                    onclick: move |_| on_decide.call((Decision::Reject, user_for_reject.clone())),
                    "Reject"
                }
            }
        }
    }
}
