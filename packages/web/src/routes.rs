//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::MainLayout;
use crate::pages::{Providers, Welcome};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Welcome {},

        #[route("/providers")]
        Providers {},
    #[end_layout]

    // Unknown paths go back to the welcome screen
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    nav.replace(Route::Welcome {});
    rsx! {}
}
