//! Providers management page - listing, infinite append, create, edit,
//! and delete against the providers store

use dioxus::prelude::*;

use crate::components::{
    ErrorNotice, LoadingSpinner, ProviderForm, ProvidersTable, SuccessNotice,
};
use crate::store::{LoadMode, ProvidersStore, DEFAULT_PAGE_SIZE};
use crate::types::{Provider, ProviderDraft};

#[component]
pub fn Providers() -> Element {
    let store = use_context::<ProvidersStore>();

    // Initial page load
    {
        let store = store.clone();
        use_future(move || {
            let store = store.clone();
            async move { store.load(0, DEFAULT_PAGE_SIZE, LoadMode::Replace).await }
        });
    }

    let mut form_open = use_signal(|| false);
    let mut selected = use_signal(|| None::<Provider>);
    let mut pending_delete = use_signal(|| None::<Provider>);

    let state = store.state.read().clone();
    let showing_page = state.current_page + 1;
    let total_pages = state.total_pages.max(1);

    // Keyed so the form fields reset when the edit target changes
    let form_key = match &*selected.read() {
        Some(provider) => format!("edit-{}", provider.id),
        None => "new".to_string(),
    };

    let handle_submit = {
        let store = store.clone();
        move |draft: ProviderDraft| {
            let store = store.clone();
            spawn(async move {
                // Take the target out of the signal before awaiting
                let target = selected.peek().clone();
                let confirmed = match target {
                    Some(provider) => store.update(provider.id, draft).await,
                    None => store.create(draft).await,
                };
                if confirmed {
                    form_open.set(false);
                    selected.set(None);
                }
            });
        }
    };

    let handle_confirm_delete = {
        let store = store.clone();
        move |_| {
            let store = store.clone();
            spawn(async move {
                let target = pending_delete.peek().clone();
                if let Some(provider) = target {
                    if store.remove(provider.id).await {
                        pending_delete.set(None);
                    }
                }
            });
        }
    };

    let handle_load_more = {
        let store = store.clone();
        move |_| {
            let store = store.clone();
            spawn(async move { store.load_more().await });
        }
    };

    rsx! {
        div {
            class: "providers-page",

            div {
                class: "page-header",
                div {
                    h2 { class: "page-title", "Provider Management" }
                    p { class: "page-subtitle", "Administer your provider catalog" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        selected.set(None);
                        form_open.set(true);
                    },
                    "\u{FF0B} New Provider"
                }
            }

            if let Some(message) = state.error.clone() {
                ErrorNotice {
                    message,
                    on_dismiss: {
                        let store = store.clone();
                        move |_| store.clear_error()
                    },
                }
            }
            if let Some(message) = state.success_message.clone() {
                SuccessNotice {
                    message,
                    on_dismiss: {
                        let store = store.clone();
                        move |_| store.clear_success_message()
                    },
                }
            }

            if state.loading && state.items.is_empty() {
                LoadingSpinner { label: "Loading providers..." }
            } else {
                div {
                    class: "table-info",
                    span { "Total: {state.total_elements} provider(s)" }
                    if state.total_elements > 0 {
                        span {
                            class: "page-info",
                            " (showing page {showing_page} of {total_pages})"
                        }
                    }
                }

                ProvidersTable {
                    providers: state.items.clone(),
                    has_more: state.has_more(),
                    loading_more: state.loading_more,
                    on_edit: move |provider| {
                        selected.set(Some(provider));
                        form_open.set(true);
                    },
                    on_delete: move |provider| pending_delete.set(Some(provider)),
                    on_load_more: handle_load_more,
                }
            }

            if form_open() {
                ProviderForm {
                    key: "{form_key}",
                    provider: selected(),
                    busy: state.loading,
                    on_submit: handle_submit,
                    on_close: move |_| {
                        form_open.set(false);
                        selected.set(None);
                    },
                }
            }

            if let Some(provider) = pending_delete() {
                div {
                    class: "modal-overlay",
                    div {
                        class: "modal",
                        h2 { class: "modal-title", "Confirm Deletion" }
                        p {
                            "Are you sure you want to delete provider "
                            strong { "{provider.name}" }
                            "?"
                        }
                        p { class: "text-muted", "This action cannot be undone." }
                        div {
                            class: "modal-actions",
                            button {
                                r#type: "button",
                                class: "btn btn-secondary",
                                disabled: state.loading,
                                onclick: move |_| pending_delete.set(None),
                                "Cancel"
                            }
                            button {
                                r#type: "button",
                                class: "btn btn-danger",
                                disabled: state.loading,
                                onclick: handle_confirm_delete,
                                if state.loading { "Deleting..." } else { "Delete" }
                            }
                        }
                    }
                }
            }
        }
    }
}
