//! Backup trigger buttons.

use admin_core::BackupTarget;
use dioxus::prelude::*;

/// Buttons that trigger server-side backups.
///
/// Clicks are forwarded as-is; repeated clicks send repeated requests.
#[component]
pub fn BackupPanel(on_backup: EventHandler<BackupTarget>) -> Element {
    rsx! {
        div { class: "backup-buttons",
            button {
                class: "btn btn-backup",
                onclick: move |_| on_backup.call(BackupTarget::Users),
                "Backup Users"
            }
            button {
                class: "btn btn-backup",
                onclick: move |_| on_backup.call(BackupTarget::Progress),
                "Backup Progress"
            }
        }
    }
}
