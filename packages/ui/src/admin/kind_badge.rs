//! Log kind badge component.

use admin_core::LogKind;
use dioxus::prelude::*;

/// Bold label naming the kind of a security log entry. Unknown kinds show their raw name.
#[component]
pub fn KindBadge(kind: LogKind) -> Element {
    let bg_class = match kind {
        LogKind::FailedLogin => "badge-failed-login",
        LogKind::UnauthorizedAccess => "badge-unauthorized",
        LogKind::InstructorRequest => "badge-instructor",
        LogKind::Other(_) => "badge-default",
    };

    rsx! {
        strong {
            class: "kind-badge {bg_class}",
            "{kind}"
        }
    }
}
