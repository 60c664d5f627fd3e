//! Main layout wrapper with the fixed header

use dioxus::prelude::*;

use super::Header;
use crate::routes::Route;

/// Layout component wrapping every page with the app header
#[component]
pub fn MainLayout() -> Element {
    rsx! {
        div {
            class: "main-layout",

            Header {}

            main {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
