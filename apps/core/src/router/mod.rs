//! # Router Module
//!
//! Fast, non-LLM intent routing for OmniStudio.
//! Classifies user prompts BEFORE dispatch to decide which studio should
//! handle them.
//!
//! ## Components
//! - `lexicon`: per-category keyword/phrase/extension vocabularies
//! - `scorer`: weighted lexicon matching into a per-category score board
//! - `classifier`: confidence normalization and tie-break resolution
//! - `model_hint`: independent named-model detection (vendor + variant)
//! - `policy`: confirmation/auto-route predicates over a decision
//! - `route_packet`: output data structures
//!
//! Data flow: `prompt → scorer → classifier → RouteDecision`, with the
//! model detector run on the same normalized text and its output attached
//! to the decision.

pub mod classifier;
pub mod lexicon;
pub mod model_hint;
pub mod policy;
pub mod route_packet;
pub mod scorer;

// Re-export main types for convenience
pub use classifier::StudioRouter;
pub use lexicon::{CategoryLexicon, CompiledLexicon, LexiconRegistry};
pub use model_hint::ModelHintDetector;
pub use route_packet::{Category, RouteDecision};
pub use scorer::{IntentScorer, ScoreBoard};
