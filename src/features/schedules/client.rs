//! Client wrappers for the schedule endpoints.

use crate::{
    app_lib::{
        AppError, Envelope, delete_with_bearer, get_json_with_bearer,
        post_json_with_bearer_response, put_json_with_bearer_response,
    },
    features::schedules::types::{Schedule, SchedulePayload},
};

pub async fn list_schedules(token: &str) -> Result<Vec<Schedule>, AppError> {
    get_json_with_bearer::<Envelope<Vec<Schedule>>>("/schedules", token)
        .await
        .map(|envelope| envelope.data)
}

pub async fn get_schedule(id: u64, token: &str) -> Result<Schedule, AppError> {
    get_json_with_bearer::<Envelope<Schedule>>(&format!("/schedules/{id}"), token)
        .await
        .map(|envelope| envelope.data)
}

pub async fn create_schedule(
    payload: &SchedulePayload,
    token: &str,
) -> Result<Schedule, AppError> {
    post_json_with_bearer_response::<_, Envelope<Schedule>>("/schedules", payload, token)
        .await
        .map(|envelope| envelope.data)
}

pub async fn update_schedule(
    id: u64,
    payload: &SchedulePayload,
    token: &str,
) -> Result<Schedule, AppError> {
    put_json_with_bearer_response::<_, Envelope<Schedule>>(
        &format!("/schedules/{id}"),
        payload,
        token,
    )
    .await
    .map(|envelope| envelope.data)
}

pub async fn delete_schedule(id: u64, token: &str) -> Result<(), AppError> {
    delete_with_bearer(&format!("/schedules/{id}"), token).await
}
