//! Question entity types.

use std::fmt;
use std::str::FromStr;

/// Store-generated primary key of a question (`question.qid`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionId(pub i32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A stored interview question.
///
/// `description_url` and `coding_round` are fixed at creation; `where_asked`
/// is the only field that changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Primary key.
    pub id: QuestionId,
    /// Link to the question description.
    pub description_url: String,
    /// Coding round the question belongs to.
    pub coding_round: String,
    /// Where the question was asked, if recorded.
    pub where_asked: Option<String>,
}

/// Fields supplied when creating a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    /// Link to the question description.
    pub description_url: String,
    /// Coding round the question belongs to.
    pub coding_round: String,
}

impl NewQuestion {
    /// Create a new question payload.
    pub fn new(description_url: impl Into<String>, coding_round: impl Into<String>) -> Self {
        Self {
            description_url: description_url.into(),
            coding_round: coding_round.into(),
        }
    }
}

/// Listing order: `where_asked` ascending with unset values first, then by id.
#[must_use]
pub fn listing_order(a: &Question, b: &Question) -> std::cmp::Ordering {
    a.where_asked
        .cmp(&b.where_asked)
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i32, where_asked: Option<&str>) -> Question {
        Question {
            id: QuestionId(id),
            description_url: format!("http://q/{id}"),
            coding_round: "1".to_string(),
            where_asked: where_asked.map(ToString::to_string),
        }
    }

    #[test]
    fn test_question_id_parsing() {
        assert_eq!("42".parse::<QuestionId>().unwrap(), QuestionId(42));
        assert!(" 7 ".parse::<QuestionId>().is_err());
        assert!("abc".parse::<QuestionId>().is_err());
        assert!("1.5".parse::<QuestionId>().is_err());
        assert!("99999999999".parse::<QuestionId>().is_err());
    }

    #[test]
    fn test_listing_order_puts_unset_first() {
        let mut questions = vec![
            question(1, Some("Company B")),
            question(2, None),
            question(3, Some("Company A")),
            question(4, None),
        ];
        questions.sort_by(listing_order);

        let ids: Vec<i32> = questions.iter().map(|q| q.id.0).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }
}
