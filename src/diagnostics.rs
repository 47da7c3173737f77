//!
//! Error types for verity.
//!
//! # Overview
//!
//! Matchers never fail on values of an unexpected kind: those are ordinary
//! mismatches and surface as `false` from `Matcher::matches`. Errors exist for
//! three situations only:
//!
//! - an assertion that did not hold (`AssertionFailed`), raised by the entry
//!   points in [`crate::assertion`];
//! - a matcher that cannot be built from the arguments it was given
//!   (`Configuration`), e.g. a negative tolerance or an unknown template
//!   placeholder;
//! - a host value that cannot be converted into a [`crate::Value`]
//!   (`Conversion`).
//!
//! # Error Construction
//!
//! - **Use `err_msg!` for message-only errors.**
//!   - `err_msg!(Configuration, "tolerance must not be negative, got {}", tolerance)`
//! - **Attach help with `with_help`.**
//!   - `err_msg!(Configuration, "bad pattern").with_help("escape the brackets")`
//!
//! All variants carry the same shape (`message`, `help`, `source`), so the macro
//! works uniformly across them.

use miette::Diagnostic;
use thiserror::Error;

pub type ErrorSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Convenience alias used by every fallible constructor in the crate.
pub type VerityResult<T> = Result<T, VerityError>;

/// Type-safe error classification that corresponds to `VerityError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// A matcher rejected the examined value
    Assertion,
    /// A matcher could not be constructed from its arguments
    Configuration,
    /// A host value could not be turned into a `Value`
    Conversion,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Assertion => "Assertion",
            ErrorType::Configuration => "Configuration",
            ErrorType::Conversion => "Conversion",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unified error type for every verity failure mode.
#[derive(Debug, Error)]
pub enum VerityError {
    /// The message is the complete failure report:
    /// `{reason}\nExpected: {description}\n     but: {mismatch}`.
    #[error("{message}")]
    AssertionFailed {
        message: String,
        help: Option<String>,
        #[source]
        source: Option<ErrorSource>,
    },
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        help: Option<String>,
        #[source]
        source: Option<ErrorSource>,
    },
    #[error("Conversion error: {message}")]
    Conversion {
        message: String,
        help: Option<String>,
        #[source]
        source: Option<ErrorSource>,
    },
}

impl VerityError {
    fn help_text(&self) -> Option<&String> {
        match self {
            VerityError::AssertionFailed { help, .. } => help.as_ref(),
            VerityError::Configuration { help, .. } => help.as_ref(),
            VerityError::Conversion { help, .. } => help.as_ref(),
        }
    }

    /// Returns the type-safe error classification for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            VerityError::AssertionFailed { .. } => ErrorType::Assertion,
            VerityError::Configuration { .. } => ErrorType::Configuration,
            VerityError::Conversion { .. } => ErrorType::Conversion,
        }
    }

    /// The bare message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            VerityError::AssertionFailed { message, .. } => message,
            VerityError::Configuration { message, .. } => message,
            VerityError::Conversion { message, .. } => message,
        }
    }

    /// Replaces the help text attached to this error.
    pub fn with_help(mut self, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match &mut self {
            VerityError::AssertionFailed { help, .. } => *help = text,
            VerityError::Configuration { help, .. } => *help = text,
            VerityError::Conversion { help, .. } => *help = text,
        }
        self
    }

    /// Attaches an underlying cause.
    pub fn with_source(mut self, cause: impl Into<ErrorSource>) -> Self {
        let cause = Some(cause.into());
        match &mut self {
            VerityError::AssertionFailed { source, .. } => *source = cause,
            VerityError::Configuration { source, .. } => *source = cause,
            VerityError::Conversion { source, .. } => *source = cause,
        }
        self
    }
}

impl Diagnostic for VerityError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self.error_type() {
            ErrorType::Assertion => "verity::assertion",
            ErrorType::Configuration => "verity::configuration",
            ErrorType::Conversion => "verity::conversion",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.help_text()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }
}

/// Constructs a VerityError variant with a formatted message and no help or cause.
#[macro_export]
macro_rules! err_msg {
    // Message with format arguments
    ($variant:ident, $msg:expr, $($arg:expr),+ $(,)?) => {
        $crate::VerityError::$variant {
            message: format!($msg, $($arg),+),
            help: None,
            source: None,
        }
    };
    // Message only
    ($variant:ident, $msg:expr) => {
        $crate::VerityError::$variant {
            message: format!("{}", $msg),
            help: None,
            source: None,
        }
    };
}
