//! Modal form for creating or editing a provider.
//!
//! Field validation lives here, on the client: a draft with an empty field
//! never reaches the store. The parent keys this component by the record
//! being edited so the fields reset whenever the target changes.

use dioxus::prelude::*;

use crate::types::{Provider, ProviderDraft};

#[derive(Clone, Default, PartialEq)]
struct FieldErrors {
    name: Option<&'static str>,
    legal_name: Option<&'static str>,
    address: Option<&'static str>,
}

impl FieldErrors {
    fn is_clean(&self) -> bool {
        self.name.is_none() && self.legal_name.is_none() && self.address.is_none()
    }
}

#[component]
pub fn ProviderForm(
    provider: Option<Provider>,
    busy: bool,
    on_submit: EventHandler<ProviderDraft>,
    on_close: EventHandler<()>,
) -> Element {
    let editing = provider.is_some();
    let (init_name, init_legal_name, init_address) = match &provider {
        Some(p) => (p.name.clone(), p.legal_name.clone(), p.address.clone()),
        None => Default::default(),
    };

    let mut name = use_signal(move || init_name);
    let mut legal_name = use_signal(move || init_legal_name);
    let mut address = use_signal(move || init_address);
    let mut errors = use_signal(FieldErrors::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let draft = ProviderDraft {
            name: name().trim().to_string(),
            legal_name: legal_name().trim().to_string(),
            address: address().trim().to_string(),
        };

        let mut next = FieldErrors::default();
        if draft.name.is_empty() {
            next.name = Some("Name is required");
        }
        if draft.legal_name.is_empty() {
            next.legal_name = Some("Legal name is required");
        }
        if draft.address.is_empty() {
            next.address = Some("Address is required");
        }

        if next.is_clean() {
            on_submit.call(draft);
        } else {
            errors.set(next);
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal",
                h2 {
                    class: "modal-title",
                    if editing { "Edit Provider" } else { "New Provider" }
                }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        label { r#for: "provider-name", "Name *" }
                        input {
                            id: "provider-name",
                            r#type: "text",
                            value: "{name}",
                            autofocus: true,
                            disabled: busy,
                            oninput: move |e| {
                                name.set(e.value());
                                errors.write().name = None;
                            },
                        }
                        if let Some(message) = errors().name {
                            p { class: "field-error", "{message}" }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "provider-legal-name", "Legal Name *" }
                        input {
                            id: "provider-legal-name",
                            r#type: "text",
                            value: "{legal_name}",
                            disabled: busy,
                            oninput: move |e| {
                                legal_name.set(e.value());
                                errors.write().legal_name = None;
                            },
                        }
                        if let Some(message) = errors().legal_name {
                            p { class: "field-error", "{message}" }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "provider-address", "Address *" }
                        textarea {
                            id: "provider-address",
                            rows: "3",
                            value: "{address}",
                            disabled: busy,
                            oninput: move |e| {
                                address.set(e.value());
                                errors.write().address = None;
                            },
                        }
                        if let Some(message) = errors().address {
                            p { class: "field-error", "{message}" }
                        }
                    }

                    div {
                        class: "modal-actions",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            disabled: busy,
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: busy,
                            if busy { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }
    }
}
