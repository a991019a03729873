//! Lexical analysis module for the compiler front end.
//!
//! This module contains the scanner that converts source code into a
//! stream of tokens for parsing. It handles:
//!
//! - Single-pass, pull-based tokenization of source code
//! - Recognition of keywords (case-insensitive), identifiers, numeric
//!   literals, and operators with longest-match-first disambiguation
//! - Token span tracking for error reporting
//! - Comment and whitespace skipping

pub mod lang;
pub mod scanner;
pub mod tokens;
