//! A ready-made fault token.
//!
//! Fault tokens are arbitrary caller-chosen types; nothing in the library
//! requires this one. It exists so examples, tests, and small programs have a
//! message-carrying token on hand, and it doubles as the default token type of
//! the built-in producers.

use thiserror::Error;

/// A simple message-carrying fault token.
///
/// ```rust
/// use lazyseq::Fault;
///
/// let fault = Fault::new("some error...");
/// assert_eq!(fault.to_string(), "injected fault: some error...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("injected fault: {message}")]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Create a fault token carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Fault {
            message: message.into(),
        }
    }

    /// The message this token carries.
    pub fn message(&self) -> &str {
        &self.message
    }
}
