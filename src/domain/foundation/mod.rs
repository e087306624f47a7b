//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the stress scale domain.

mod errors;
mod ids;
mod percentage;
mod rating;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{QuestionId, SessionId};
pub use percentage::Percentage;
pub use rating::Rating;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
