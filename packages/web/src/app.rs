//! Root application component

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::routes::Route;
use crate::store::{ProvidersStore, WelcomeStore};

/// Root application component
#[component]
pub fn App() -> Element {
    // One REST client shared by every store
    let client = use_hook(ApiClient::from_env);

    // App-level state containers, handed to pages through context
    use_context_provider({
        let client = client.clone();
        move || WelcomeStore::new(client.clone())
    });
    use_context_provider(move || ProvidersStore::new(client.clone()));

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}
