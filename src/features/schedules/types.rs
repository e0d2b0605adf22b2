//! Schedule resource and form payload types. A schedule distributes a survey
//! to a group on a recurrence starting at a given time.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Once,
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Self; 4] = [Self::Once, Self::Daily, Self::Weekly, Self::Monthly];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Once => "Once",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Schedule {
    pub id: u64,
    pub survey_id: u64,
    #[serde(default)]
    pub group_id: Option<u64>,
    pub starts_at: String,
    #[serde(default)]
    pub ends_at: Option<String>,
    pub frequency: Frequency,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SchedulePayload {
    pub survey_id: u64,
    pub group_id: Option<u64>,
    pub starts_at: String,
    pub ends_at: Option<String>,
    pub frequency: Frequency,
}

#[cfg(test)]
mod tests {
    use super::{Frequency, Schedule};

    #[test]
    fn frequency_values_round_trip() {
        for kind in Frequency::ALL {
            assert_eq!(Frequency::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(Frequency::parse(""), None);
    }

    #[test]
    fn schedule_decodes_snake_case_frequency() {
        let payload = r#"{
            "id": 1,
            "survey_id": 3,
            "starts_at": "2025-06-01T09:00:00Z",
            "frequency": "weekly"
        }"#;
        let schedule: Schedule = serde_json::from_str(payload).expect("schedule should decode");

        assert_eq!(schedule.frequency, Frequency::Weekly);
        assert!(schedule.group_id.is_none());
        assert!(schedule.ends_at.is_none());
    }
}
