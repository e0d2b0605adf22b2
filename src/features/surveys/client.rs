//! Client wrappers for the survey endpoints. Responses use the `{ "data": ... }`
//! envelope; helpers unwrap it so routes work with plain values.

use crate::{
    app_lib::{
        AppError, Envelope, delete_with_bearer, get_json_with_bearer,
        post_json_with_bearer_response, put_json_with_bearer_response,
    },
    features::surveys::types::{Survey, SurveyPayload},
};

/// Fetches all surveys owned by the current identity.
pub async fn list_surveys(token: &str) -> Result<Vec<Survey>, AppError> {
    get_json_with_bearer::<Envelope<Vec<Survey>>>("/surveys", token)
        .await
        .map(|envelope| envelope.data)
}

/// Fetches a single survey by its public identifier.
pub async fn get_survey(public_id: &str, token: &str) -> Result<Survey, AppError> {
    let trimmed = public_id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Survey id is required.".to_string()));
    }

    get_json_with_bearer::<Envelope<Survey>>(&format!("/surveys/{trimmed}"), token)
        .await
        .map(|envelope| envelope.data)
}

pub async fn create_survey(payload: &SurveyPayload, token: &str) -> Result<Survey, AppError> {
    post_json_with_bearer_response::<_, Envelope<Survey>>("/surveys", payload, token)
        .await
        .map(|envelope| envelope.data)
}

pub async fn update_survey(
    id: u64,
    payload: &SurveyPayload,
    token: &str,
) -> Result<Survey, AppError> {
    put_json_with_bearer_response::<_, Envelope<Survey>>(&format!("/surveys/{id}"), payload, token)
        .await
        .map(|envelope| envelope.data)
}

pub async fn delete_survey(id: u64, token: &str) -> Result<(), AppError> {
    delete_with_bearer(&format!("/surveys/{id}"), token).await
}
