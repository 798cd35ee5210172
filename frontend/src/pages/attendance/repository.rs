use crate::api::{ApiClient, ApiError, AttendanceQuery, CreatePersonRequest};
use crate::state::attendance::{self, AttendanceState};
use leptos::WriteSignal;

pub async fn fetch_attendance(
    api: &ApiClient,
    set_state: WriteSignal<AttendanceState>,
    query: AttendanceQuery,
) -> Result<(), ApiError> {
    attendance::load_attendance(api, set_state, query).await
}

pub async fn add_person(
    api: &ApiClient,
    set_state: WriteSignal<AttendanceState>,
    request: CreatePersonRequest,
) -> Result<(), ApiError> {
    attendance::create_person(api, set_state, request).await
}
