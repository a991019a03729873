use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::{lexer::tokens::Token, Span};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
    file: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span, file: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            span,
            file,
        }
    }

    /// Diagnostic for a token the scanner classified as unrecognised.
    pub fn unrecognised(token: &Token, file: Rc<String>) -> Self {
        Error {
            internal_error: ErrorImpl::UnrecognisedToken {
                token: token.lexeme().to_string(),
            },
            span: token.span.clone(),
            file,
        }
    }

    /// Diagnostic for a numeric literal the scanner accepted leniently
    /// (a bare `.` or a trailing `.`) that failed downstream validation.
    pub fn malformed_number(token: &Token, file: Rc<String>) -> Self {
        Error {
            internal_error: ErrorImpl::NumberParseError {
                token: token.lexeme().to_string(),
            },
            span: token.span.clone(),
            file,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it missing digits after the decimal point?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
