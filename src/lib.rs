//! Stress Scale - Combined College Student Stress Scale
//!
//! This crate runs the branching stress questionnaire: ten core questions,
//! conditional follow-up modules, and a scored, classified result that can
//! be exported as CSV, PDF, Markdown or JSON.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
