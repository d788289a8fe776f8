//! Admin dashboard components: security logs, instructor requests and backups.

mod backup_panel;
mod dashboard;
mod instructor_requests;
mod kind_badge;
mod notice_dialog;
mod security_logs;

pub mod pages;

pub use backup_panel::BackupPanel;
pub use dashboard::AdminDashboard;
pub use instructor_requests::InstructorRequests;
pub use kind_badge::KindBadge;
pub use notice_dialog::NoticeDialog;
pub use pages::AdminDashboardPage;
pub use security_logs::SecurityLogs;
