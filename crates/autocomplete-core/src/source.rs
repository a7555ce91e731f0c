//! Pluggable suggestion sources.
//!
//! The core only depends on the [`SuggestionSource`] contract, never on a
//! concrete vocabulary: a production integration may substitute fuzzy matching
//! or an external index without touching the scanner or the selector. The
//! `autocomplete-core-vocab-simple` crate ships a simple static-vocabulary
//! implementation.

/// Maximum number of candidates the selector will hold.
///
/// A source returning more than this violates its contract; callers defend by
/// truncating, never by failing.
pub const MAX_SUGGESTIONS: usize = 4;

/// Trait for providing completion candidates for a partial token.
///
/// # Examples
///
/// Functions with the right signature implement the trait automatically:
///
/// ```rust
/// use autocomplete_core::SuggestionSource;
///
/// let source = |partial: &str| -> Vec<String> {
///     if partial.starts_with('g') {
///         vec!["getSelection".to_string()]
///     } else {
///         Vec::new()
///     }
/// };
///
/// assert_eq!(source.suggest("ge"), vec!["getSelection".to_string()]);
/// assert!(source.suggest("x").is_empty());
/// ```
pub trait SuggestionSource {
    /// Return candidate completions for `partial`, most relevant first.
    ///
    /// Contract: at most [`MAX_SUGGESTIONS`] entries, deterministic order for a
    /// given input, and an empty `partial` yields no candidates (never
    /// match-all).
    fn suggest(&self, partial: &str) -> Vec<String>;
}

impl<F> SuggestionSource for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn suggest(&self, partial: &str) -> Vec<String> {
        self(partial)
    }
}
