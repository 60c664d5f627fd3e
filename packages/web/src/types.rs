//! Wire types for the providers REST API

use serde::{Deserialize, Serialize};

/// A provider record as persisted by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub legal_name: String,
    pub address: String,
}

/// The fields sent when creating or updating a provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDraft {
    pub name: String,
    pub legal_name: String,
    pub address: String,
}

/// One page of providers as the backend reports it.
///
/// The counter fields are optional because older backend builds omit them;
/// the store falls back to its last known values when they are missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPage {
    #[serde(alias = "data", default)]
    pub content: Vec<Provider>,
    pub total_elements: Option<u64>,
    pub total_pages: Option<u32>,
    #[serde(rename = "number")]
    pub page_index: Option<u32>,
}

/// The list endpoint answers with either a page envelope or a bare array.
/// Resolved once here, at the API boundary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProvidersResponse {
    Page(ProviderPage),
    Items(Vec<Provider>),
}

/// `/api/welcome` and `/api/version` may answer with a bare string or a
/// wrapped object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextPayload {
    Text(String),
    Welcome { message: String },
    Version { version: String },
}

impl TextPayload {
    pub fn into_inner(self) -> String {
        match self {
            TextPayload::Text(text) => text,
            TextPayload::Welcome { message } => message,
            TextPayload::Version { version } => version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_parses_as_items() {
        let body = r#"[{"id":1,"name":"A","legalName":"A SA","address":"Street 1"},
                       {"id":2,"name":"B","legalName":"B SA","address":"Street 2"}]"#;
        let parsed: ProvidersResponse = serde_json::from_str(body).unwrap();
        match parsed {
            ProvidersResponse::Items(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].legal_name, "A SA");
            }
            other => panic!("expected bare items, got {other:?}"),
        }
    }

    #[test]
    fn envelope_parses_as_page() {
        let body = r#"{"content":[{"id":1,"name":"A","legalName":"A SA","address":"x"}],
                       "totalElements":5,"totalPages":3,"number":0}"#;
        let parsed: ProvidersResponse = serde_json::from_str(body).unwrap();
        match parsed {
            ProvidersResponse::Page(page) => {
                assert_eq!(page.content.len(), 1);
                assert_eq!(page.total_elements, Some(5));
                assert_eq!(page.total_pages, Some(3));
                assert_eq!(page.page_index, Some(0));
            }
            other => panic!("expected page envelope, got {other:?}"),
        }
    }

    #[test]
    fn envelope_accepts_data_alias_and_missing_counters() {
        let body = r#"{"data":[{"id":7,"name":"C","legalName":"C SA","address":"y"}]}"#;
        let parsed: ProvidersResponse = serde_json::from_str(body).unwrap();
        match parsed {
            ProvidersResponse::Page(page) => {
                assert_eq!(page.content.len(), 1);
                assert_eq!(page.total_elements, None);
                assert_eq!(page.total_pages, None);
                assert_eq!(page.page_index, None);
            }
            other => panic!("expected page envelope, got {other:?}"),
        }
    }

    #[test]
    fn text_payload_accepts_both_shapes() {
        let bare: TextPayload = serde_json::from_str(r#""Bienvenido""#).unwrap();
        assert_eq!(bare.into_inner(), "Bienvenido");

        let wrapped: TextPayload = serde_json::from_str(r#"{"message":"Hola"}"#).unwrap();
        assert_eq!(wrapped.into_inner(), "Hola");

        let version: TextPayload = serde_json::from_str(r#"{"version":"1.2.3"}"#).unwrap();
        assert_eq!(version.into_inner(), "1.2.3");
    }
}
