//! Route Packet - Output structures for router analysis.
//!
//! Contains the studio category taxonomy and the decision record handed to
//! the confirmation UI and the dispatch layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Studio category a prompt can be routed to.
///
/// This is a closed set: there is no "unknown" variant. Absence of a strong
/// signal resolves to [`Category::Chat`], the safe default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// General conversation, questions, anything without a generation signal
    Chat,
    /// Programming, debugging, API and component work
    Code,
    /// Graphic design: logos, branding, UI mockups
    Design,
    /// Text-to-video generation
    VideoGenerate,
    /// Editing of existing video material
    VideoEdit,
    /// Speech synthesis and narration
    Voice,
    /// Song and music generation
    Music,
    /// Image generation and illustration
    Image,
    /// Slide decks and presentations
    Presentation,
}

impl Category {
    /// All categories in declaration order. The score board is indexed by
    /// position in this table.
    pub const ALL: [Category; 9] = [
        Category::Chat,
        Category::Code,
        Category::Design,
        Category::VideoGenerate,
        Category::VideoEdit,
        Category::Voice,
        Category::Music,
        Category::Image,
        Category::Presentation,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the snake_case name used in reasoning and log strings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Chat => "chat",
            Category::Code => "code",
            Category::Design => "design",
            Category::VideoGenerate => "video_generate",
            Category::VideoEdit => "video_edit",
            Category::Voice => "voice",
            Category::Music => "music",
            Category::Image => "image",
            Category::Presentation => "presentation",
        }
    }

    /// Returns the destination studio name shown in the confirmation UI.
    pub fn studio_label(&self) -> &'static str {
        match self {
            Category::Chat => "Chat Studio",
            Category::Code => "Code Studio",
            Category::Design => "Design Studio",
            Category::VideoGenerate => "Video Studio",
            Category::VideoEdit => "Video Editing Studio",
            Category::Voice => "Voice Studio",
            Category::Music => "Music Studio",
            Category::Image => "Image Studio",
            Category::Presentation => "PPT Studio",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Chat => 0,
            Category::Code => 1,
            Category::Design => 2,
            Category::VideoGenerate => 3,
            Category::VideoEdit => 4,
            Category::Voice => 5,
            Category::Music => 6,
            Category::Image => 7,
            Category::Presentation => 8,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Complete routing decision for one prompt.
///
/// Produced fresh on every call; the engine keeps no state between calls,
/// so two classifications of identical text yield identical decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDecision {
    /// Winning category
    pub category: Category,

    /// Damped dominance ratio in [0.0, 1.0]
    pub confidence: f32,

    /// Destination studio name for the confirmation UI
    pub studio_label: String,

    /// Short human-readable explanation for the observability sink
    pub reasoning: String,

    /// Named-model hint extracted independently of the category outcome.
    /// `None` means "no hint available", never an error.
    pub suggested_model: Option<String>,
}

impl RouteDecision {
    /// True when the decision fell through to the chat default.
    pub fn is_default(&self) -> bool {
        self.category == Category::Chat
    }

    /// Get a one-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Category: {} ({:.0}%), Studio: {}, Model hint: {}",
            self.category,
            self.confidence * 100.0,
            self.studio_label,
            self.suggested_model.as_deref().unwrap_or("none")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Chat.label(), "chat");
        assert_eq!(Category::VideoEdit.label(), "video_edit");
        assert_eq!(Category::Presentation.studio_label(), "PPT Studio");
        assert_eq!(Category::Music.studio_label(), "Music Studio");
    }

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&Category::VideoGenerate).unwrap();
        assert_eq!(json, "\"video_generate\"");

        let parsed: Category = serde_json::from_str("\"video_edit\"").unwrap();
        assert_eq!(parsed, Category::VideoEdit);
    }

    #[test]
    fn test_index_matches_all_table() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), position, "index mismatch for {}", category);
        }
    }

    #[test]
    fn test_summary() {
        let decision = RouteDecision {
            category: Category::Code,
            confidence: 0.6,
            studio_label: Category::Code.studio_label().to_string(),
            reasoning: "code intent matched with score 15".to_string(),
            suggested_model: None,
        };

        let summary = decision.summary();
        assert!(summary.contains("code"));
        assert!(summary.contains("60%"));
        assert!(summary.contains("none"));
    }

    #[test]
    fn test_decision_round_trip() {
        let decision = RouteDecision {
            category: Category::Music,
            confidence: 0.55,
            studio_label: "Music Studio".to_string(),
            reasoning: "music intent matched with score 12".to_string(),
            suggested_model: Some("claude-opus-4.1".to_string()),
        };

        let json = serde_json::to_string(&decision).unwrap();
        let parsed: RouteDecision = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, decision);
    }
}
