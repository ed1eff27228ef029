use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("cloze placeholder cannot be empty")]
    EmptyPlaceholder,

    #[error("definition-only lesson prefix cannot be empty; use none to disable it")]
    EmptyDefinitionOnlyPrefix,

    #[error("prompt label cannot be empty")]
    EmptyPromptLabel,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

pub const DEFAULT_PLACEHOLDER: &str = "______";
pub const DEFAULT_DEFINITION_ONLY_PREFIX: &str = "wordly";
pub const DEFAULT_DEFINITION_LABEL: &str = "Write the word that matches the meaning";
pub const DEFAULT_CLOZE_LABEL: &str = "Fill in the blank with the right word";

/// Configuration for question generation and lesson loading.
///
/// Deserializes through the same validation as [`QuizSettings::new`], so a
/// settings file cannot smuggle in an empty placeholder or label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuizSettings", into = "RawQuizSettings")]
pub struct QuizSettings {
    placeholder: String,
    definition_only_prefix: Option<String>,
    definition_label: String,
    cloze_label: String,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            definition_only_prefix: Some(DEFAULT_DEFINITION_ONLY_PREFIX.to_owned()),
            definition_label: DEFAULT_DEFINITION_LABEL.to_owned(),
            cloze_label: DEFAULT_CLOZE_LABEL.to_owned(),
        }
    }
}

impl QuizSettings {
    /// Creates custom quiz settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the placeholder, a label, or a provided
    /// prefix is blank.
    pub fn new(
        placeholder: impl Into<String>,
        definition_only_prefix: Option<String>,
        definition_label: impl Into<String>,
        cloze_label: impl Into<String>,
    ) -> Result<Self, SettingsError> {
        let placeholder = placeholder.into();
        if placeholder.is_empty() {
            return Err(SettingsError::EmptyPlaceholder);
        }

        let definition_only_prefix = match definition_only_prefix {
            Some(prefix) if prefix.trim().is_empty() => {
                return Err(SettingsError::EmptyDefinitionOnlyPrefix);
            }
            Some(prefix) => Some(prefix.trim().to_owned()),
            None => None,
        };

        let definition_label = definition_label.into().trim().to_owned();
        let cloze_label = cloze_label.into().trim().to_owned();
        if definition_label.is_empty() || cloze_label.is_empty() {
            return Err(SettingsError::EmptyPromptLabel);
        }

        Ok(Self {
            placeholder,
            definition_only_prefix,
            definition_label,
            cloze_label,
        })
    }

    // Accessors

    /// Token that replaces the word in cloze prompts, inserted verbatim.
    ///
    /// A placeholder that itself contains a lesson word would leave that word
    /// visible; question generation drops such cloze questions.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Lessons whose key starts with this prefix never get cloze questions.
    #[must_use]
    pub fn definition_only_prefix(&self) -> Option<&str> {
        self.definition_only_prefix.as_deref()
    }

    #[must_use]
    pub fn definition_label(&self) -> &str {
        &self.definition_label
    }

    #[must_use]
    pub fn cloze_label(&self) -> &str {
        &self.cloze_label
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct RawQuizSettings {
    placeholder: String,
    definition_only_prefix: Option<String>,
    definition_label: String,
    cloze_label: String,
}

impl Default for RawQuizSettings {
    fn default() -> Self {
        QuizSettings::default().into()
    }
}

impl TryFrom<RawQuizSettings> for QuizSettings {
    type Error = SettingsError;

    fn try_from(raw: RawQuizSettings) -> Result<Self, Self::Error> {
        Self::new(
            raw.placeholder,
            raw.definition_only_prefix,
            raw.definition_label,
            raw.cloze_label,
        )
    }
}

impl From<QuizSettings> for RawQuizSettings {
    fn from(settings: QuizSettings) -> Self {
        Self {
            placeholder: settings.placeholder,
            definition_only_prefix: settings.definition_only_prefix,
            definition_label: settings.definition_label,
            cloze_label: settings.cloze_label,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
