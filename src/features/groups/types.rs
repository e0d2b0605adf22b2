use serde::Deserialize;

/// Recipient group a schedule can target.
#[derive(Clone, Debug, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub members_count: Option<u64>,
}
