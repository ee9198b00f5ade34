//! SQL fragment formatting
//!
//! Turns sanitized question data into the INSERT fragments the rest of
//! the pipeline concatenates into a batch. Sanitization lives in
//! [`escape`], fragment assembly in [`statement`].

pub mod escape;
pub mod statement;

pub use escape::sanitize;
pub use statement::{format_question, MAX_OPTIONS, MIN_ANSWERS};
