//! Loading components

use dioxus::prelude::*;

/// Full-area loading spinner with a caption
#[component]
pub fn LoadingSpinner(label: String) -> Element {
    rsx! {
        div {
            class: "loading-container",
            div {
                class: "loading-dots",
                div { class: "loading-dot" }
                div { class: "loading-dot", style: "animation-delay: 0.1s" }
                div { class: "loading-dot", style: "animation-delay: 0.2s" }
            }
            p { class: "loading-label", "{label}" }
        }
    }
}

/// Inline loading indicator
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        div {
            class: "loading-dots loading-dots-inline",
            div { class: "loading-dot loading-dot-small" }
            div { class: "loading-dot loading-dot-small", style: "animation-delay: 0.1s" }
            div { class: "loading-dot loading-dot-small", style: "animation-delay: 0.2s" }
        }
    }
}
