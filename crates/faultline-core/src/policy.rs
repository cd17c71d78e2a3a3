//! Scoped-then-global translation order

use std::fmt;

use faultline_api::responses::ErrorResponse;

use crate::error::Failure;
use crate::translator::TranslatorTable;

/// Where a translation happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationScope {
    /// The raising handler's own table
    Handler,
    /// The application-wide table
    Global,
}

impl TranslationScope {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TranslationScope::Handler => "handler",
            TranslationScope::Global => "global",
        }
    }
}

impl fmt::Display for TranslationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of running a failure through the translator tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Translated {
        payload: ErrorResponse,
        scope: TranslationScope,
    },
    Unhandled(Failure),
}

/// Translate with the handler's table first, then the global one
///
/// `scoped` is `None` when the raising handler registers no translators.
#[must_use]
pub fn resolve(
    scoped: Option<&TranslatorTable>,
    global: &TranslatorTable,
    failure: Failure,
) -> Resolution {
    if let Some(payload) = scoped.and_then(|table| table.translate(&failure)) {
        tracing::debug!(kind = %failure.kind(), scope = "handler", "failure translated");
        return Resolution::Translated {
            payload,
            scope: TranslationScope::Handler,
        };
    }

    if let Some(payload) = global.translate(&failure) {
        tracing::debug!(kind = %failure.kind(), scope = "global", "failure translated");
        return Resolution::Translated {
            payload,
            scope: TranslationScope::Global,
        };
    }

    Resolution::Unhandled(failure)
}
