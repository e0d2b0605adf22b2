//! Survey response types: an answer per question, submitted as one payload.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u64,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SurveyResponse {
    pub id: u64,
    pub survey_id: u64,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResponsePayload {
    pub survey_id: u64,
    pub answers: Vec<Answer>,
}
