//! Service layer module.
//!
//! Contains the question operations and the listing notification step.

pub mod notifier;
pub mod question;

pub use notifier::{HttpNotifier, NoopNotifier, QuestionNotifier, create_notifier};
pub use question::QuestionService;
