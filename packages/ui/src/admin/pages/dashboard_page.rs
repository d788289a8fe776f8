//! Admin dashboard page - builds the backend client and mounts the dashboard.

use api::HttpAdminClient;
use dioxus::prelude::*;

use crate::admin::AdminDashboard;

/// Admin dashboard page component.
#[component]
pub fn AdminDashboardPage() -> Element {
    let client = use_hook(|| {
        HttpAdminClient::from_env().map_err(|e| {
            tracing::error!("Failed to configure admin API client: {}", e);
            e.to_string()
        })
    });

    match client {
        Ok(client) => rsx! {
            AdminDashboard { client: client }
        },
        Err(err) => rsx! {
            div { class: "admin-dashboard",
                h1 { class: "admin-title", "Admin Dashboard" }
                p { class: "error-banner", "Error: {err}" }
            }
        },
    }
}
