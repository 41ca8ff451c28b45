//! Request extractors that reject with [`AppError`](crate::error::AppError).

mod json;
mod path;

pub use json::JsonBody;
pub use path::QuestionIdPath;
