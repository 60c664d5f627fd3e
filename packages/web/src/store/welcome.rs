//! Welcome screen state container

use dioxus::prelude::*;

use crate::api::ApiClient;

/// Greeting and version shown on the welcome screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WelcomeState {
    pub message: String,
    pub version: String,
    pub loading: bool,
    pub error: Option<String>,
}

/// Context-provided handle pairing the welcome state with the REST client
#[derive(Clone)]
pub struct WelcomeStore {
    pub state: Signal<WelcomeState>,
    client: ApiClient,
}

impl WelcomeStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            state: Signal::new(WelcomeState::default()),
            client,
        }
    }

    /// Fetch the greeting and the backend version. A failure on either call
    /// surfaces as the transient error; the first one wins.
    pub async fn load(&self) {
        let mut state = self.state;
        {
            let mut s = state.write();
            s.loading = true;
            s.error = None;
        }

        let message = self.client.welcome_message().await;
        let version = self.client.version().await;

        let mut s = state.write();
        s.loading = false;
        match message {
            Ok(text) => s.message = text,
            Err(err) => s.error = Some(err.user_message("Could not load the welcome message")),
        }
        match version {
            Ok(text) => s.version = text,
            Err(err) => {
                if s.error.is_none() {
                    s.error = Some(err.user_message("Could not load the application version"));
                }
            }
        }
    }

    pub fn clear_error(&self) {
        let mut state = self.state;
        state.write().error = None;
    }
}
