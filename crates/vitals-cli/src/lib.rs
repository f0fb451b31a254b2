//! vitals-cli library root.
//!
//! Exposes the terminal presenter so integration tests can drive a whole
//! questionnaire through in-memory input and output.

pub mod terminal;
