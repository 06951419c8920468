use super::{
    client::ApiClient,
    types::{ApiError, AttendanceAction, MarkAttendanceRequest},
};

impl ApiClient {
    /// `POST /api/mark_attendance` with `{action, time}`. The success body
    /// carries no fields this client uses.
    pub async fn mark_attendance(
        &self,
        action: AttendanceAction,
        time: &str,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/mark_attendance", base_url))
            .json(&MarkAttendanceRequest {
                action,
                time: time.to_string(),
            })
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::decode_error(response).await)
        }
    }
}
