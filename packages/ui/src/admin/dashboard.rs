//! Main admin dashboard component.

use admin_core::{BackupTarget, DashboardState, Decision};
use api::HttpAdminClient;
use dioxus::prelude::*;

use super::{BackupPanel, InstructorRequests, NoticeDialog, SecurityLogs};

/// Main admin dashboard component.
#[component]
pub fn AdminDashboard(client: HttpAdminClient) -> Element {
    // State
    let mut state = use_signal(DashboardState::new);

    // One fetch per mount. The task belongs to this scope, so a response that
    // arrives after unmount is dropped with it.
    let load_client = client.clone();
    let _logs_resource = use_resource(move || {
        let client = load_client.clone();
        async move {
            let result = api::load_logs(&client).await;
            state.write().apply_load(result);
        }
    });

    // Approve/reject handler
    let decide_client = client.clone();
    let on_decide = move |(decision, user_id): (Decision, Option<String>)| {
        let client = decide_client.clone();
        spawn(async move {
            let outcome = api::decide_instructor(&client, decision, user_id.as_deref()).await;
            state.write().apply_decision(&outcome);
        });
    };

    // Backup handler
    let on_backup = move |target: BackupTarget| {
        let client = client.clone();
        spawn(async move {
            let message = api::run_backup(&client, target).await;
            state.write().set_backup_message(message);
        });
    };

    let snapshot = state.read().clone();
    let requests = snapshot.instructor_requests();
    let events = snapshot.security_events();

    rsx! {
        div { class: "admin-dashboard",
            header { class: "admin-header",
                h1 { class: "admin-title", "Admin Dashboard" }
                div { class: "button-group",
                    a { class: "btn btn-link", href: "/profile/admin/users", "View All Users" }
                    a { class: "btn btn-link", href: "/profile/instructor/courses/view", "View All Courses" }
                }
            }

            if let Some(err) = snapshot.error.clone() {
                p { class: "error-banner", "Error: {err}" }
            }
            if let Some(message) = snapshot.backup_message.clone() {
                p { class: "success-banner", "{message}" }
            }

            BackupPanel { on_backup: on_backup }

            if snapshot.is_loading() {
                p { class: "loading", "Loading logs..." }
            }

            InstructorRequests { requests: requests, on_decide: on_decide }
            SecurityLogs { logs: events }

            if let Some(message) = snapshot.current_notice().map(str::to_string) {
                NoticeDialog {
                    message: message,
                    on_close: move |_| {
                        state.write().acknowledge_notice();
                    },
                }
            }
        }
    }
}
