//! Failure signals raised by handlers

use std::fmt;

use thiserror::Error;

/// Failures a handler can raise instead of returning a payload
///
/// Every variant carries a message and one auxiliary string property.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Translated by the raising handler's own translator, if it has one
    #[error("{message}")]
    Handled {
        message: String,
        /// Type name of the raising handler
        source_class: String,
    },

    /// Translated by the application-wide translator
    #[error("{message}")]
    HandledGlobally {
        message: String,
        /// Type name of the raising handler
        source_class: String,
    },

    /// Never translated; surfaces as a generic server error
    #[error("{message}")]
    Unhandled { message: String, detail: String },
}

impl Failure {
    pub fn handled(message: impl Into<String>, source_class: impl Into<String>) -> Self {
        Self::Handled {
            message: message.into(),
            source_class: source_class.into(),
        }
    }

    pub fn handled_globally(message: impl Into<String>, source_class: impl Into<String>) -> Self {
        Self::HandledGlobally {
            message: message.into(),
            source_class: source_class.into(),
        }
    }

    pub fn unhandled(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Unhandled {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Tag used to look up translators
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Failure::Handled { .. } => FailureKind::Handled,
            Failure::HandledGlobally { .. } => FailureKind::HandledGlobally,
            Failure::Unhandled { .. } => FailureKind::Unhandled,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Failure::Handled { message, .. }
            | Failure::HandledGlobally { message, .. }
            | Failure::Unhandled { message, .. } => message,
        }
    }

    /// The auxiliary property: source class, or detail for unhandled failures
    #[must_use]
    pub fn property(&self) -> &str {
        match self {
            Failure::Handled { source_class, .. }
            | Failure::HandledGlobally { source_class, .. } => source_class,
            Failure::Unhandled { detail, .. } => detail,
        }
    }
}

/// Failure tag, the key of a translator table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FailureKind {
    Handled,
    HandledGlobally,
    Unhandled,
}

impl FailureKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Handled => "handled",
            FailureKind::HandledGlobally => "handled_globally",
            FailureKind::Unhandled => "unhandled",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let failure = Failure::handled("occurs :: ", "crate::Handler");
        assert_eq!(failure.kind(), FailureKind::Handled);
        assert_eq!(failure.message(), "occurs :: ");
        assert_eq!(failure.property(), "crate::Handler");

        let failure = Failure::unhandled("occurs ::", "should not handle it!");
        assert_eq!(failure.kind(), FailureKind::Unhandled);
        assert_eq!(failure.property(), "should not handle it!");
    }

    #[test]
    fn test_display_is_message_verbatim() {
        let failure = Failure::handled_globally("X#HandledGloballyException occurs :: ", "X");
        assert_eq!(failure.to_string(), "X#HandledGloballyException occurs :: ");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(FailureKind::HandledGlobally.to_string(), "handled_globally");
        assert_eq!(FailureKind::Handled.as_str(), "handled");
        assert_eq!(FailureKind::Unhandled.to_string(), "unhandled");
    }
}
