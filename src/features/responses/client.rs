//! Client wrappers for the response endpoints.

use crate::{
    app_lib::{AppError, Envelope, get_json_with_bearer, post_json_with_bearer_response},
    features::responses::types::{ResponsePayload, SurveyResponse},
};

pub async fn list_responses(token: &str) -> Result<Vec<SurveyResponse>, AppError> {
    get_json_with_bearer::<Envelope<Vec<SurveyResponse>>>("/responses", token)
        .await
        .map(|envelope| envelope.data)
}

pub async fn submit_response(
    payload: &ResponsePayload,
    token: &str,
) -> Result<SurveyResponse, AppError> {
    post_json_with_bearer_response::<_, Envelope<SurveyResponse>>("/responses", payload, token)
        .await
        .map(|envelope| envelope.data)
}
