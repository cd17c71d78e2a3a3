//! Translators and the tables that hold them

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use faultline_api::responses::ErrorResponse;

use crate::error::{Failure, FailureKind};

/// Turns a failure into a structured payload
pub trait Translator: Send + Sync {
    fn translate(&self, failure: &Failure) -> ErrorResponse;
}

impl<F> Translator for F
where
    F: Fn(&Failure) -> ErrorResponse + Send + Sync,
{
    fn translate(&self, failure: &Failure) -> ErrorResponse {
        self(failure)
    }
}

/// Copies the message and auxiliary property verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceClassTranslator;

impl Translator for SourceClassTranslator {
    fn translate(&self, failure: &Failure) -> ErrorResponse {
        ErrorResponse {
            message: failure.message().to_string(),
            source_class: failure.property().to_string(),
        }
    }
}

/// Translators keyed by failure kind
///
/// A handler owns one of these for its scoped translators; the application
/// owns another for global ones.
#[derive(Clone, Default)]
pub struct TranslatorTable {
    entries: BTreeMap<FailureKind, Arc<dyn Translator>>,
}

impl TranslatorTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a translator, replacing any previous one for that kind
    pub fn register(&mut self, kind: FailureKind, translator: impl Translator + 'static) {
        self.entries.insert(kind, Arc::new(translator));
    }

    /// Builder form of [`TranslatorTable::register`]
    #[must_use]
    pub fn with(mut self, kind: FailureKind, translator: impl Translator + 'static) -> Self {
        self.register(kind, translator);
        self
    }

    #[must_use]
    pub fn handles(&self, kind: FailureKind) -> bool {
        self.entries.contains_key(&kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered kinds, in order
    pub fn kinds(&self) -> impl Iterator<Item = FailureKind> + '_ {
        self.entries.keys().copied()
    }

    /// Translate the failure if a translator is registered for its kind
    #[must_use]
    pub fn translate(&self, failure: &Failure) -> Option<ErrorResponse> {
        self.entries
            .get(&failure.kind())
            .map(|translator| translator.translate(failure))
    }
}

impl fmt::Debug for TranslatorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_class_translator() {
        let failure = Failure::handled("V1#HandledException occurs :: ", "app::V1");
        let payload = SourceClassTranslator.translate(&failure);
        assert_eq!(payload.message, "V1#HandledException occurs :: ");
        assert_eq!(payload.source_class, "app::V1");
    }

    #[test]
    fn test_table_only_translates_registered_kinds() {
        let table = TranslatorTable::new().with(FailureKind::Handled, SourceClassTranslator);
        assert!(table.handles(FailureKind::Handled));
        assert!(!table.handles(FailureKind::HandledGlobally));

        assert!(table.translate(&Failure::handled("m", "s")).is_some());
        assert!(table.translate(&Failure::handled_globally("m", "s")).is_none());
        assert!(table.translate(&Failure::unhandled("m", "d")).is_none());
    }

    #[test]
    fn test_closure_translator_replaces_previous() {
        let mut table = TranslatorTable::new().with(FailureKind::Handled, SourceClassTranslator);
        table.register(FailureKind::Handled, |failure: &Failure| ErrorResponse {
            message: failure.message().to_uppercase(),
            source_class: "custom".to_string(),
        });

        let payload = table.translate(&Failure::handled("boom", "s")).unwrap();
        assert_eq!(payload.message, "BOOM");
        assert_eq!(payload.source_class, "custom");
        assert_eq!(table.kinds().count(), 1);
    }

    #[test]
    fn test_empty_table() {
        let table = TranslatorTable::new();
        assert!(table.is_empty());
        assert!(table.translate(&Failure::handled("m", "s")).is_none());
    }
}
