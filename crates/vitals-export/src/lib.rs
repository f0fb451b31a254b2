//! vitals-export
//!
//! Markdown report generation from a scored questionnaire.

pub mod error;
pub mod render;
pub mod report;
