use crate::{
    app_lib::{AppError, Envelope, get_json_with_bearer},
    features::practices::types::Practice,
};

pub async fn list_practices(token: &str) -> Result<Vec<Practice>, AppError> {
    get_json_with_bearer::<Envelope<Vec<Practice>>>("/practices", token)
        .await
        .map(|envelope| envelope.data)
}
