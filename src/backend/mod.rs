//! Translation backend abstraction.
//!
//! The backend turns source text into translated text. The core only decides
//! what to send and where results go, so any provider (an external script, an
//! HTTP service, a test double) can sit behind [`TranslationBackend`].

use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

mod command;

pub use command::CommandBackend;

/// Whether the backend should return new content or rewrite files in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    Create,
    Update,
}

/// One translation request for a single family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub mode: TranslationMode,
    /// Source file first; in update mode followed by the target files, in
    /// the same order as `target_locales`.
    pub files: Vec<PathBuf>,
    pub source_locale: String,
    pub source_locale_name: String,
    pub target_locales: Vec<String>,
    pub target_locale_names: Vec<String>,
}

/// Generated content per target locale.
pub type CreatedContent = BTreeMap<String, String>;

pub trait TranslationBackend {
    /// Translate the source for locales that do not exist yet.
    ///
    /// Must not write files; the caller places the returned content.
    fn translate_for_creation(&self, request: &TranslationRequest) -> Result<CreatedContent>;

    /// Translate the source into the existing target files, writing them in place.
    fn translate_and_write(&self, request: &TranslationRequest) -> Result<()>;

    /// Name used in diagnostics.
    fn name(&self) -> &str;
}
