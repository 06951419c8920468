use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, ExportTarget},
};

impl ApiClient {
    /// `POST /api/export/{resource}` with `{format}`; the success body is the
    /// raw file contents.
    pub async fn export(&self, target: ExportTarget) -> Result<Vec<u8>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/export/{}", base_url, target.resource.as_str()))
            .json(&json!({ "format": target.format }))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to read export payload: {}", e)))?;
            Ok(bytes.to_vec())
        } else {
            Err(Self::decode_error(response).await)
        }
    }
}
