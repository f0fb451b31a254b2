//! vitals-core
//!
//! Pure domain types for the health-risk questionnaire: the answer record,
//! stage and question descriptors, and the stage configuration document.
//! No scoring and no navigation logic lives here.

pub mod config;
pub mod error;
pub mod keys;
pub mod models;
