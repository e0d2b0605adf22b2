use crate::{
    app_lib::{AppError, Envelope, get_json_with_bearer},
    features::groups::types::Group,
};

pub async fn list_groups(token: &str) -> Result<Vec<Group>, AppError> {
    get_json_with_bearer::<Envelope<Vec<Group>>>("/groups", token)
        .await
        .map(|envelope| envelope.data)
}
