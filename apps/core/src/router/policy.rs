//! Routing Policy - pure predicates over a routing decision.
//!
//! The product never dispatches a generation call silently; a
//! misclassified prompt must not trigger an unwanted (and possibly costly)
//! generation. Confirmation is offered only when the signal is both
//! non-trivial and non-default.

use super::route_packet::{Category, RouteDecision};

/// Minimum confidence before the confirmation dialog is offered.
pub const CONFIRMATION_THRESHOLD: f32 = 0.5;

/// Whether the decision may be dispatched without user confirmation.
/// Always false.
pub fn should_auto_route(_decision: &RouteDecision) -> bool {
    false
}

/// Whether the confirmation dialog should be shown for this decision.
pub fn should_show_confirmation(decision: &RouteDecision) -> bool {
    decision.confidence >= CONFIRMATION_THRESHOLD && decision.category != Category::Chat
}
