// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::admin::AdminDashboardPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/profile/admin")]
    AdminDashboard {},
}

const ADMIN_CSS: Asset = asset!("/assets/admin.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    tracing::info!("Starting admin dashboard");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ADMIN_CSS }

        Router::<Route> {}
    }
}

/// Redirect / to the admin dashboard.
#[component]
fn Home() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::AdminDashboard {});
    });
    rsx! {}
}

/// Admin dashboard page.
#[component]
fn AdminDashboard() -> Element {
    rsx! {
        AdminDashboardPage {}
    }
}
