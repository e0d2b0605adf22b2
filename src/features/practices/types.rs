use serde::Deserialize;

/// Practice area a survey can be filed under.
#[derive(Clone, Debug, Deserialize)]
pub struct Practice {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
