//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Fixed core questions and follow-up modules
//! - `assessment` - Responses, module selection and the stage sequencer
//! - `scoring` - Result calculation, stress classification and reports

pub mod assessment;
pub mod catalog;
pub mod foundation;
pub mod scoring;
