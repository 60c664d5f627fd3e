//! Transient notice banners for the error and success signals.
//!
//! The store keeps each message until the operator dismisses it; the
//! dismiss handler is expected to call the matching clear operation.

use dioxus::prelude::*;

#[component]
pub fn ErrorNotice(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "notice notice-error",
            role: "alert",
            span { "{message}" }
            button {
                class: "notice-dismiss",
                onclick: move |_| on_dismiss.call(()),
                "\u{2715}"
            }
        }
    }
}

#[component]
pub fn SuccessNotice(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "notice notice-success",
            role: "status",
            span { "{message}" }
            button {
                class: "notice-dismiss",
                onclick: move |_| on_dismiss.call(()),
                "\u{2715}"
            }
        }
    }
}
