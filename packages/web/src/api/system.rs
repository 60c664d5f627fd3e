//! Welcome message and version endpoints

use super::client::{ApiClient, ApiError};
use crate::types::TextPayload;

impl ApiClient {
    /// `GET /api/welcome` - greeting shown on the welcome screen
    pub async fn welcome_message(&self) -> Result<String, ApiError> {
        let payload: TextPayload = self.execute(self.get("/api/welcome")).await?;
        Ok(payload.into_inner())
    }

    /// `GET /api/version` - backend-reported application version
    pub async fn version(&self) -> Result<String, ApiError> {
        let payload: TextPayload = self.execute(self.get("/api/version")).await?;
        Ok(payload.into_inner())
    }
}
