//! Survey resource and form payload types.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Text,
    SingleChoice,
    MultipleChoice,
    Scale,
}

impl QuestionType {
    pub const ALL: [Self; 4] = [
        Self::Text,
        Self::SingleChoice,
        Self::MultipleChoice,
        Self::Scale,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::SingleChoice => "single_choice",
            Self::MultipleChoice => "multiple_choice",
            Self::Scale => "scale",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Free text",
            Self::SingleChoice => "Single choice",
            Self::MultipleChoice => "Multiple choice",
            Self::Scale => "Scale 1-10",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: Option<u64>,
    pub text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Survey {
    pub id: u64,
    /// Identifier used in answer links shared with respondents.
    pub public_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub practice_id: Option<u64>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Create/update payload. Question ids are preserved on update so the server
/// can keep answers attached.
#[derive(Clone, Debug, Serialize)]
pub struct SurveyPayload {
    pub title: String,
    pub description: Option<String>,
    pub practice_id: Option<u64>,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::{QuestionType, Survey};

    #[test]
    fn question_type_labels_round_trip() {
        for kind in QuestionType::ALL {
            assert_eq!(QuestionType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(QuestionType::parse("unknown"), None);
    }

    #[test]
    fn survey_decodes_with_missing_optionals() {
        let payload = r#"{
            "id": 3,
            "public_id": "pub-3",
            "title": "Team pulse",
            "questions": [
                {"id": 9, "text": "How was your week?", "question_type": "text"}
            ]
        }"#;
        let survey: Survey = serde_json::from_str(payload).expect("survey should decode");

        assert_eq!(survey.public_id, "pub-3");
        assert!(survey.description.is_none());
        assert_eq!(survey.questions.len(), 1);
        assert!(survey.questions[0].options.is_empty());
    }
}
