use super::{
    client::ApiClient,
    types::{ApiError, AttendanceQuery, AttendanceRecord, CreatePersonRequest},
};

impl ApiClient {
    pub async fn list_attendance(
        &self,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/api/attendance", base_url))
                    .query(&query.query_pairs()),
            )
            .await?;
        response.json()
    }

    pub async fn create_person(&self, request: &CreatePersonRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/api/attendance", base_url))
                    .json(request),
            )
            .await?;
        response.empty()
    }
}
