//! Providers table with row actions and the load-more control

use dioxus::prelude::*;

use super::LoadingDots;
use crate::types::Provider;

#[component]
pub fn ProvidersTable(
    providers: Vec<Provider>,
    has_more: bool,
    loading_more: bool,
    on_edit: EventHandler<Provider>,
    on_delete: EventHandler<Provider>,
    on_load_more: EventHandler<()>,
) -> Element {
    if providers.is_empty() {
        return rsx! {
            div {
                class: "empty-state",
                p { "No providers registered yet." }
            }
        };
    }

    rsx! {
        div {
            class: "providers-table",

            div {
                class: "table-header",
                div { class: "table-cell table-cell-id", "ID" }
                div { class: "table-cell", "Name" }
                div { class: "table-cell", "Legal Name" }
                div { class: "table-cell table-cell-wide", "Address" }
                div { class: "table-cell table-cell-actions", "Actions" }
            }

            for provider in providers.iter() {
                ProviderRow {
                    key: "{provider.id}",
                    provider: provider.clone(),
                    on_edit,
                    on_delete,
                }
            }

            if loading_more {
                div {
                    class: "table-footer",
                    LoadingDots {}
                    span { "Loading more providers..." }
                }
            } else if has_more {
                div {
                    class: "table-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_load_more.call(()),
                        "Load more"
                    }
                }
            } else {
                div {
                    class: "table-footer table-footer-end",
                    span { "You have seen every provider" }
                }
            }
        }
    }
}

#[component]
fn ProviderRow(
    provider: Provider,
    on_edit: EventHandler<Provider>,
    on_delete: EventHandler<Provider>,
) -> Element {
    rsx! {
        div {
            class: "table-row",
            div { class: "table-cell table-cell-id", "{provider.id}" }
            div { class: "table-cell", "{provider.name}" }
            div { class: "table-cell", "{provider.legal_name}" }
            div { class: "table-cell table-cell-wide", "{provider.address}" }
            div {
                class: "table-cell table-cell-actions",
                button {
                    class: "action-button",
                    title: "Edit",
                    onclick: {
                        let provider = provider.clone();
                        move |_| on_edit.call(provider.clone())
                    },
                    "\u{270E}"
                }
                button {
                    class: "action-button action-button-danger",
                    title: "Delete",
                    onclick: {
                        let provider = provider.clone();
                        move |_| on_delete.call(provider.clone())
                    },
                    "\u{1F5D1}"
                }
            }
        }
    }
}
