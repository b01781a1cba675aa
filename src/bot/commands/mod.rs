//! # Command Layer
//!
//! One function per REPL verb. Commands take the containers by reference plus the raw
//! argument tokens, and return a [`CmdResult`]: user-facing messages and, for listings,
//! an already-rendered table. Nothing here prints.
//!
//! Usage errors (missing or surplus arguments) come back as
//! [`ValidationError::MissingArgument`](crate::error::ValidationError::MissingArgument)
//! carrying the usage line; the CLI shows it like any other error.

use crate::error::{Result, ValidationError};

pub mod contacts;
pub mod help;
pub mod notes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Rendered table or help text, printed before the messages
    pub output: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self {
            output: None,
            messages: vec![message],
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// Joins argument tokens back into one space-separated value.
pub fn join_args<T: AsRef<str>>(args: &[T]) -> String {
    args.iter()
        .map(|a| a.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn usage(text: &str) -> crate::error::BotError {
    ValidationError::MissingArgument(text.to_string()).into()
}

pub(crate) fn require_args<T>(args: &[T], min: usize, usage_text: &str) -> Result<()> {
    if args.len() < min {
        return Err(usage(usage_text));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BotError;

    #[test]
    fn join_args_uses_single_spaces() {
        assert_eq!(join_args(&["John", "Smith"]), "John Smith");
        assert_eq!(join_args::<&str>(&[]), "");
    }

    #[test]
    fn require_args_reports_usage() {
        let err = require_args::<&str>(&[], 1, "Usage: x <y>").unwrap_err();
        assert!(matches!(
            err,
            BotError::Validation(ValidationError::MissingArgument(_))
        ));
        assert_eq!(err.to_string(), "Usage: x <y>");
        assert!(require_args(&["a"], 1, "unused").is_ok());
    }
}
