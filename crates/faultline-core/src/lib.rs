//! faultline-core: Failure taxonomy and translation policy
//!
//! Defines the failure signals handlers raise, the translators that turn
//! them into structured payloads, and the scoped-then-global resolution order.

pub mod error;
pub mod policy;
pub mod translator;

pub use error::{Failure, FailureKind};
pub use policy::{Resolution, TranslationScope, resolve};
pub use translator::{SourceClassTranslator, Translator, TranslatorTable};
