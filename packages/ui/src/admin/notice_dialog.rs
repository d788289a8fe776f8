//! Modal notice that stays up until acknowledged.

use dioxus::prelude::*;

/// Props for NoticeDialog component.
#[derive(Props, Clone, PartialEq)]
pub struct NoticeDialogProps {
    /// Text to show.
    pub message: String,
    /// Callback when the administrator acknowledges the notice.
    pub on_close: EventHandler<()>,
}

/// Blocking notice overlay with a single OK button.
#[component]
pub fn NoticeDialog(props: NoticeDialogProps) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div {
                class: "modal",
                role: "alertdialog",
                p { class: "modal-message", "{props.message}" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        autofocus: true,
                        onclick: move |_| props.on_close.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
