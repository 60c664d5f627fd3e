//! Welcome page - greeting and version fetched from the backend

use dioxus::prelude::*;

use crate::components::{ErrorNotice, LoadingSpinner};
use crate::routes::Route;
use crate::store::WelcomeStore;

#[component]
pub fn Welcome() -> Element {
    let store = use_context::<WelcomeStore>();
    let navigator = use_navigator();

    // Fetch greeting and version on mount
    {
        let store = store.clone();
        use_future(move || {
            let store = store.clone();
            async move { store.load().await }
        });
    }

    let state = store.state.read().clone();
    let greeting = if state.message.is_empty() {
        "Welcome".to_string()
    } else {
        state.message.clone()
    };
    let version = if state.version.is_empty() {
        "N/A".to_string()
    } else {
        state.version.clone()
    };

    rsx! {
        div {
            class: "welcome-page",
            div {
                class: "welcome-card",
                div { class: "welcome-logo", "\u{1F44B}" }

                if state.loading {
                    LoadingSpinner { label: "Loading information..." }
                } else {
                    if let Some(message) = state.error.clone() {
                        ErrorNotice {
                            message,
                            on_dismiss: {
                                let store = store.clone();
                                move |_| store.clear_error()
                            },
                        }
                    }

                    h1 { class: "welcome-title", "{greeting}" }

                    p { class: "version-info", "Version: {version}" }

                    p {
                        class: "welcome-description",
                        "Welcome to the e-Commerce Gapsi provider management system. "
                        "This platform lets you administer your provider catalog "
                        "efficiently and professionally."
                    }

                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            navigator.push(Route::Providers {});
                        },
                        "Continue \u{2192}"
                    }
                }
            }
        }
    }
}
