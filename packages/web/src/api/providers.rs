//! Provider catalog endpoints

use super::client::{ApiClient, ApiError};
use crate::types::{Provider, ProviderDraft, ProvidersResponse};

impl ApiClient {
    /// `GET /providers` - one page of the catalog
    pub async fn fetch_providers(&self, page: u32, size: u32) -> Result<ProvidersResponse, ApiError> {
        let request = self.get("/providers").query(&[("page", page), ("size", size)]);
        self.execute(request).await
    }

    /// `POST /providers` - create a provider, returns the persisted record
    /// with its server-assigned id
    pub async fn create_provider(&self, draft: &ProviderDraft) -> Result<Provider, ApiError> {
        self.execute(self.post("/providers").json(draft)).await
    }

    /// `PUT /providers/{id}` - update a provider, returns the full record
    pub async fn update_provider(&self, id: i64, draft: &ProviderDraft) -> Result<Provider, ApiError> {
        self.execute(self.put(&format!("/providers/{id}")).json(draft))
            .await
    }

    /// `DELETE /providers/{id}`
    pub async fn delete_provider(&self, id: i64) -> Result<(), ApiError> {
        self.execute_unit(self.delete(&format!("/providers/{id}")))
            .await
    }
}
