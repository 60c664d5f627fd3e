//! Application header component

use dioxus::prelude::*;

use crate::routes::Route;

/// Fixed header with the brand, links back to the welcome screen
#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "app-header",
            div {
                class: "header-content",
                Link {
                    to: Route::Welcome {},
                    class: "header-brand",
                    span { class: "header-logo", "\u{1F6D2}" }
                    h1 { class: "header-title", "e-Commerce Gapsi" }
                }
                nav {
                    class: "header-nav",
                    Link { to: Route::Providers {}, class: "header-link", "Providers" }
                }
            }
        }
    }
}
