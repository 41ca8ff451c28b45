//! Domain models for the question service.

pub mod dto;
pub mod question;

pub use dto::{CreateQuestionRequest, QuestionResponse, UpdateQuestionRequest};
pub use question::{NewQuestion, Question, QuestionId, listing_order};
