//! vitals-quiz
//!
//! The questionnaire state machine: stage validation and navigation, input
//! normalization for each question kind, the one-item-at-a-time scale
//! interview, and the session that owns the answer record.
//!
//! Everything here is synchronous and in-memory. Presentation is left to the
//! caller, which reads a [`session::StageView`] and feeds user input back in
//! as explicit updates.

pub mod error;
pub mod navigator;
pub mod renderer;
pub mod scale_flow;
pub mod session;
pub mod validator;
