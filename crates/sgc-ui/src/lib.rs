//! Terminal output helpers for the sgc workflow tool.
//!
//! Provides Ayu-themed color styling and terminal detection. Styling is
//! dropped whenever color is not supported, so piped output stays plain.

pub mod styles;
pub mod terminal;
