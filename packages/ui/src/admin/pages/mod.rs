//! Admin page components for route-based navigation.

mod dashboard_page;

pub use dashboard_page::AdminDashboardPage;
