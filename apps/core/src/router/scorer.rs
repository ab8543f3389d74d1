//! Intent Scorer - weighted lexicon matching.
//!
//! Turns normalized prompt text into a per-category score board. Categories
//! are scored independently in one generic pass; the same input substring
//! may contribute to several categories.

use regex::Regex;

use super::lexicon::LexiconRegistry;
use super::route_packet::Category;

/// Points per whole-word keyword occurrence. Occurrences are counted, not
/// just presence: three hits of the same keyword contribute three times.
pub const KEYWORD_OCCURRENCE_WEIGHT: u32 = 2;

/// Flat points for a trigger phrase found anywhere in the text, at most
/// once per phrase per classification.
pub const PHRASE_PRESENCE_WEIGHT: u32 = 5;

/// Flat points for a file-extension marker found in the text, at most once
/// per marker per classification.
pub const EXTENSION_PRESENCE_WEIGHT: u32 = 10;

/// Per-category accumulator of match-derived points for one classification
/// call. Fixed-size and stack-allocated: one slot per category, all zero at
/// the start of scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    scores: [u32; Category::COUNT],
}

impl ScoreBoard {
    /// Create a board with every category at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to a category.
    pub fn add(&mut self, category: Category, points: u32) {
        self.scores[category.index()] += points;
    }

    /// Current score for a category.
    pub fn get(&self, category: Category) -> u32 {
        self.scores[category.index()]
    }

    /// Sum of all category scores.
    pub fn total(&self) -> u32 {
        self.scores.iter().sum()
    }

    /// Highest single category score.
    pub fn max(&self) -> u32 {
        self.scores.iter().copied().max().unwrap_or(0)
    }
}

/// Scores normalized text against a lexicon registry.
///
/// The weights live on the struct so tests can exercise substitutes; the
/// defaults are the product contract (see the module constants).
pub struct IntentScorer {
    keyword_weight: u32,
    phrase_weight: u32,
    extension_weight: u32,
}

impl Default for IntentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentScorer {
    /// Create a scorer with the product weights.
    pub fn new() -> Self {
        Self {
            keyword_weight: KEYWORD_OCCURRENCE_WEIGHT,
            phrase_weight: PHRASE_PRESENCE_WEIGHT,
            extension_weight: EXTENSION_PRESENCE_WEIGHT,
        }
    }

    /// Create a scorer with custom weights.
    #[allow(dead_code)]
    pub fn with_weights(keyword_weight: u32, phrase_weight: u32, extension_weight: u32) -> Self {
        Self {
            keyword_weight,
            phrase_weight,
            extension_weight,
        }
    }

    /// Score `text` (already trimmed and lowercased) against every category
    /// in the registry.
    pub fn score(&self, registry: &LexiconRegistry, text: &str) -> ScoreBoard {
        let mut board = ScoreBoard::new();

        for category in Category::ALL {
            let lexicon = registry.lexicon(category);

            for pattern in lexicon.keyword_patterns() {
                let occurrences = count_occurrences(pattern, text);
                if occurrences > 0 {
                    board.add(category, occurrences * self.keyword_weight);
                }
            }

            for phrase in lexicon.phrases() {
                if text.contains(phrase.as_str()) {
                    board.add(category, self.phrase_weight);
                }
            }

            for extension in lexicon.extensions() {
                if text.contains(extension.as_str()) {
                    board.add(category, self.extension_weight);
                }
            }
        }

        board
    }
}

fn count_occurrences(pattern: &Regex, text: &str) -> u32 {
    pattern.find_iter(text).count() as u32
}
