//! Model Hint Detection - single point of truth for named-model mentions.
//!
//! Scans the normalized prompt for mentions of a model family (vendor) and
//! refines to a specific variant when a qualifier token is present. The
//! detection runs independently of category scoring: a prompt routed to the
//! music studio can still carry a "claude opus" hint.

/// A vendor family with its alias tokens and variant table.
///
/// Vendors are consulted in the order of [`VENDOR_PRECEDENCE`]; within a
/// vendor, qualifiers are consulted in table order, most specific first.
#[derive(Debug)]
struct VendorBlock {
    /// Substrings that mark a mention of this vendor
    aliases: &'static [&'static str],
    /// Variant returned when no qualifier matches
    default_variant: &'static str,
    /// (qualifier substring, variant identifier) pairs, most specific first
    variants: &'static [(&'static str, &'static str)],
}

/// Fixed vendor precedence. The first vendor whose alias appears in the
/// text wins; later vendors are not consulted.
const VENDOR_PRECEDENCE: &[VendorBlock] = &[
    VendorBlock {
        aliases: &["claude", "anthropic"],
        default_variant: "claude-sonnet-4",
        variants: &[
            ("opus 4.1", "claude-opus-4.1"),
            ("opus", "claude-opus-4"),
            ("sonnet 4.5", "claude-sonnet-4.5"),
            ("sonnet", "claude-sonnet-4"),
            ("haiku", "claude-haiku-3.5"),
        ],
    },
    VendorBlock {
        aliases: &["gpt", "openai", "chatgpt"],
        default_variant: "gpt-4o",
        variants: &[
            ("4o mini", "gpt-4o-mini"),
            ("4o", "gpt-4o"),
            ("o3", "o3"),
            ("turbo", "gpt-4-turbo"),
        ],
    },
    VendorBlock {
        aliases: &["gemini"],
        default_variant: "gemini-2.5-pro",
        variants: &[
            ("flash", "gemini-2.5-flash"),
            ("pro", "gemini-2.5-pro"),
        ],
    },
    VendorBlock {
        aliases: &["deepseek"],
        default_variant: "deepseek-chat",
        variants: &[
            ("r1", "deepseek-r1"),
            ("coder", "deepseek-coder"),
        ],
    },
    VendorBlock {
        aliases: &["llama"],
        default_variant: "llama-3.3-70b",
        variants: &[
            ("405b", "llama-3.1-405b"),
            ("70b", "llama-3.3-70b"),
            ("8b", "llama-3.1-8b"),
        ],
    },
    VendorBlock {
        aliases: &["mistral"],
        default_variant: "mistral-small",
        variants: &[
            ("large", "mistral-large"),
            ("small", "mistral-small"),
        ],
    },
];

/// Detector for explicit backend/model mentions in prompt text.
pub struct ModelHintDetector {
    blocks: &'static [VendorBlock],
}

impl Default for ModelHintDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelHintDetector {
    /// Create a detector over the product vendor table.
    pub fn new() -> Self {
        Self {
            blocks: VENDOR_PRECEDENCE,
        }
    }

    /// Detect a model hint in `text` (already trimmed and lowercased).
    ///
    /// Returns the variant identifier for the first mentioned vendor, or
    /// `None` when no vendor name is present. A missing hint is not an
    /// error condition.
    pub fn detect(&self, text: &str) -> Option<&'static str> {
        for block in self.blocks {
            if block.aliases.iter().any(|alias| text.contains(alias)) {
                let variant = block
                    .variants
                    .iter()
                    .find(|(qualifier, _)| text.contains(qualifier))
                    .map(|(_, variant)| *variant)
                    .unwrap_or(block.default_variant);
                return Some(variant);
            }
        }
        None
    }
}
