//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies use `descriptionUrl`, while listed questions are returned
//! with a `descriptionURL` key. Both spellings are part of the public API.

use serde::{Deserialize, Deserializer, Serialize};

use super::{NewQuestion, Question};

/// Body of `POST /api/v1/questions`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    /// Link to the question description.
    #[serde(rename = "descriptionUrl")]
    pub description_url: String,

    /// Coding round, given as a string or an integer.
    #[serde(rename = "codingRound", deserialize_with = "string_or_integer")]
    pub coding_round: String,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(request: CreateQuestionRequest) -> Self {
        Self::new(request.description_url, request.coding_round)
    }
}

/// Body of `PATCH /api/v1/questions/{questionID}`.
///
/// An absent `whereAsked` clears the stored value, as does an explicit null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuestionRequest {
    /// Where the question was asked.
    #[serde(rename = "whereAsked", default)]
    pub where_asked: Option<String>,
}

/// One element of the `GET /api/v1/questions` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    /// Link to the question description.
    #[serde(rename = "descriptionURL")]
    pub description_url: String,

    /// Coding round.
    #[serde(rename = "codingRound")]
    pub coding_round: String,

    /// Where the question was asked (null when unset).
    #[serde(rename = "whereAsked")]
    pub where_asked: Option<String>,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            description_url: question.description_url,
            coding_round: question.coding_round,
            where_asked: question.where_asked,
        }
    }
}

/// Accept either a JSON string or a JSON integer, keeping the textual form.
fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInteger {
        String(String),
        Signed(i64),
        Unsigned(u64),
    }

    match StringOrInteger::deserialize(deserializer)? {
        StringOrInteger::String(value) => Ok(value),
        StringOrInteger::Signed(value) => Ok(value.to_string()),
        StringOrInteger::Unsigned(value) => Ok(value.to_string()),
    }
}
