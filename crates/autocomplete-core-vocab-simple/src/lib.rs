#![warn(missing_docs)]
//! Simple static-vocabulary suggestion source for `autocomplete-core`.
//!
//! [`StaticVocabulary`] implements the [`SuggestionSource`] contract as a
//! case-sensitive prefix filter over a fixed candidate vocabulary: candidates
//! keep their declared order (insertion order is relevance order), duplicates
//! are kept, and the result is truncated to a configured maximum. An empty
//! partial yields no candidates, never match-all.
//!
//! Vocabularies can be built in code or deserialized from a small JSON
//! definition format:
//!
//! ```json
//! {
//!     "vocabulary": ["getSelection", "getAnchorKey", "getEntityAt"],
//!     "max_suggestions": 4
//! }
//! ```

use autocomplete_core::{MAX_SUGGESTIONS, SuggestionSource};
use serde::{Deserialize, Serialize};

/// Error loading a vocabulary definition.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// The definition text was not valid JSON for [`VocabularyDefinition`].
    #[error("invalid vocabulary definition: {0}")]
    Parse(#[from] serde_json::Error),
    /// `max_suggestions` was zero.
    #[error("max_suggestions must be greater than 0")]
    ZeroMaxSuggestions,
}

/// On-disk vocabulary definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyDefinition {
    /// Candidate completions, in relevance order.
    pub vocabulary: Vec<String>,
    /// Optional bound on returned candidates; defaults to
    /// [`MAX_SUGGESTIONS`] when absent.
    #[serde(default)]
    pub max_suggestions: Option<usize>,
}

/// A static, declared-order vocabulary with case-sensitive prefix filtering.
///
/// # Example
///
/// ```rust
/// use autocomplete_core::SuggestionSource;
/// use autocomplete_core_vocab_simple::StaticVocabulary;
///
/// let vocabulary = StaticVocabulary::new([
///     "getSelection",
///     "getAnchorKey",
///     "getEntityAt",
///     "getAnchorOffset",
/// ]);
///
/// assert_eq!(vocabulary.suggest("getA").len(), 2);
/// assert!(vocabulary.suggest("").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct StaticVocabulary {
    words: Vec<String>,
    max_suggestions: usize,
}

impl StaticVocabulary {
    /// Create a vocabulary from candidates in relevance order, bounded to
    /// [`MAX_SUGGESTIONS`].
    pub fn new<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            max_suggestions: MAX_SUGGESTIONS,
        }
    }

    /// Override the candidate bound.
    ///
    /// Note that the selector in `autocomplete-core` enforces its own global
    /// bound of [`MAX_SUGGESTIONS`] regardless of this setting.
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions.max(1);
        self
    }

    /// Build a vocabulary from a parsed definition.
    pub fn from_definition(definition: VocabularyDefinition) -> Result<Self, VocabularyError> {
        let max_suggestions = definition.max_suggestions.unwrap_or(MAX_SUGGESTIONS);
        if max_suggestions == 0 {
            return Err(VocabularyError::ZeroMaxSuggestions);
        }
        Ok(Self {
            words: definition.vocabulary,
            max_suggestions,
        })
    }

    /// Parse a JSON definition and build a vocabulary from it.
    pub fn from_json_str(json: &str) -> Result<Self, VocabularyError> {
        let definition: VocabularyDefinition = serde_json::from_str(json)?;
        Self::from_definition(definition)
    }

    /// The candidates, in declared order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The configured candidate bound.
    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }
}

impl SuggestionSource for StaticVocabulary {
    fn suggest(&self, partial: &str) -> Vec<String> {
        if partial.is_empty() {
            return Vec::new();
        }

        self.words
            .iter()
            .filter(|word| word.starts_with(partial))
            .take(self.max_suggestions)
            .cloned()
            .collect()
    }
}
