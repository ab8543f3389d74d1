use thiserror::Error;

/// Errors raised while building a lexicon registry from caller-supplied
/// configuration. Classification itself is total and never fails.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The lexicon document is not valid JSON.
    #[error("Lexicon parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A keyword could not be compiled into a word-boundary pattern.
    #[error("Keyword pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// The lexicon content failed validation (e.g. an extension marker
    /// without a leading dot, or an empty vocabulary entry).
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),
}
