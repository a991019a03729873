//! Error types and error handling for the lexer's callers.
//!
//! The scanner itself never fails: malformed input surfaces as tokens
//! of a distinguished kind. This module defines the diagnostics a
//! caller builds from those tokens:
//!
//! - Error structures carrying the offending source span
//! - Specific error variants for lexical anomalies
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
