//! Lexicon Registry - per-category routing vocabularies.
//!
//! Each studio category owns three vocabularies: keywords (matched on word
//! boundaries, occurrences counted), trigger phrases (substring presence),
//! and file-extension markers (substring presence). The registry is
//! read-only after construction; keyword patterns are compiled once, the
//! way the intent patterns are compiled once at startup elsewhere in the
//! product.
//!
//! Adding a new category only requires a new lexicon entry. Scoring logic
//! never changes.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::route_packet::Category;
use crate::error::RouterError;

// The chat category deliberately has no vocabulary: chat is the default
// destination, never a scored winner.

const CODE_KEYWORDS: &[&str] = &[
    "code", "coding", "program", "function", "api", "endpoint", "component", "frontend",
    "backend", "database", "sql", "algorithm", "debug", "bug", "compile", "script", "react",
    "vue", "angular", "node", "python", "javascript", "typescript", "rust", "java", "html",
    "css", "json", "regex", "git", "build", "deploy", "refactor", "class", "library",
    "framework", "server", "cli", "terminal",
];

const CODE_PHRASES: &[&str] = &[
    "api endpoint",
    "write a program",
    "write code",
    "fix this error",
    "fix the bug",
    "code review",
    "unit test",
    "pull request",
    "build an app",
    "create a website",
];

const CODE_EXTENSIONS: &[&str] = &[
    ".js", ".ts", ".jsx", ".tsx", ".py", ".rs", ".go", ".java", ".cpp", ".html", ".css",
    ".json", ".sql", ".sh",
];

const DESIGN_KEYWORDS: &[&str] = &[
    "design", "logo", "branding", "ui", "ux", "mockup", "wireframe", "poster", "banner",
    "flyer", "icon", "typography", "font", "layout", "palette", "figma", "photoshop",
    "illustrator", "brochure", "thumbnail",
];

const DESIGN_PHRASES: &[&str] = &[
    "design a logo",
    "logo design",
    "color palette",
    "landing page design",
    "brand identity",
    "business card",
    "user interface",
    "design system",
];

const DESIGN_EXTENSIONS: &[&str] = &[".psd", ".ai", ".fig", ".sketch", ".svg", ".eps"];

const VIDEO_GENERATE_KEYWORDS: &[&str] = &[
    "video", "animation", "clip", "trailer", "cinematic", "film", "footage", "timelapse",
    "animate",
];

const VIDEO_GENERATE_PHRASES: &[&str] = &[
    "generate a video",
    "create a video",
    "make a video",
    "text to video",
    "a video of",
    "video about",
    "short film",
    "animated video",
];

const VIDEO_GENERATE_EXTENSIONS: &[&str] = &[];

const VIDEO_EDIT_KEYWORDS: &[&str] = &[
    "edit", "trim", "cut", "crop", "splice", "merge", "subtitle", "subtitles", "caption",
    "captions", "transition", "stabilize", "rotate", "resize", "watermark",
];

const VIDEO_EDIT_PHRASES: &[&str] = &[
    "edit this video",
    "edit my video",
    "edit the video",
    "cut the video",
    "trim the video",
    "add subtitles",
    "add captions",
    "remove the background",
    "speed up the video",
    "video editing",
];

const VIDEO_EDIT_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".avi", ".mkv", ".webm"];

const VOICE_KEYWORDS: &[&str] = &[
    "voice", "speech", "speak", "narration", "narrate", "voiceover", "audiobook", "tts",
    "pronounce", "dub", "dubbing", "accent",
];

const VOICE_PHRASES: &[&str] = &[
    "text to speech",
    "read this aloud",
    "read it aloud",
    "voice over",
    "clone my voice",
    "convert to speech",
    "natural voice",
];

const VOICE_EXTENSIONS: &[&str] = &[".wav", ".ogg"];

const MUSIC_KEYWORDS: &[&str] = &[
    "music", "song", "songs", "melody", "beat", "beats", "instrumental", "lyrics",
    "soundtrack", "tune", "remix", "chorus", "rap", "jazz", "techno", "orchestral", "jingle",
];

const MUSIC_PHRASES: &[&str] = &[
    "generate a song",
    "a song about",
    "write a song",
    "compose music",
    "make a beat",
    "background music",
    "theme song",
    "piece of music",
];

const MUSIC_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".flac", ".mid"];

const IMAGE_KEYWORDS: &[&str] = &[
    "image", "picture", "photo", "photograph", "illustration", "drawing", "painting",
    "wallpaper", "portrait", "sketch", "artwork", "render", "avatar", "sticker",
    "watercolor",
];

const IMAGE_PHRASES: &[&str] = &[
    "generate an image",
    "create an image",
    "draw a picture",
    "text to image",
    "an image of",
    "a picture of",
    "a photo of",
    "photorealistic image",
];

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".webp", ".gif", ".bmp"];

const PRESENTATION_KEYWORDS: &[&str] = &[
    "presentation", "slide", "slides", "deck", "powerpoint", "keynote", "ppt", "pitch",
    "webinar",
];

const PRESENTATION_PHRASES: &[&str] = &[
    "create a presentation",
    "make a presentation",
    "presentation about",
    "presentation on",
    "pitch deck",
    "slide deck",
    "board meeting",
];

const PRESENTATION_EXTENSIONS: &[&str] = &[".ppt", ".pptx", ".key", ".odp"];

/// Raw per-category vocabulary, as supplied by configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryLexicon {
    /// Single or multi-word keywords, matched on word boundaries
    pub keywords: Vec<String>,
    /// Trigger phrases, matched by substring containment
    pub phrases: Vec<String>,
    /// File-extension markers such as ".mp4", matched by substring containment
    pub extensions: Vec<String>,
}

impl CategoryLexicon {
    fn from_static(keywords: &[&str], phrases: &[&str], extensions: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            phrases: phrases.iter().map(|s| s.to_string()).collect(),
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A category vocabulary with its keyword patterns pre-compiled.
#[derive(Debug)]
pub struct CompiledLexicon {
    keyword_patterns: Vec<Regex>,
    phrases: Vec<String>,
    extensions: Vec<String>,
}

impl CompiledLexicon {
    /// Validates and compiles a raw lexicon. Entries are lowercased on
    /// ingest so matching against normalized text stays case-insensitive.
    fn compile(lexicon: &CategoryLexicon) -> Result<Self, RouterError> {
        let mut keyword_patterns = Vec::with_capacity(lexicon.keywords.len());
        for keyword in &lexicon.keywords {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(RouterError::InvalidLexicon(
                    "empty keyword entry".to_string(),
                ));
            }
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&keyword)))?;
            keyword_patterns.push(pattern);
        }

        let mut phrases = Vec::with_capacity(lexicon.phrases.len());
        for phrase in &lexicon.phrases {
            let phrase = phrase.trim().to_lowercase();
            if phrase.is_empty() {
                return Err(RouterError::InvalidLexicon("empty phrase entry".to_string()));
            }
            phrases.push(phrase);
        }

        let mut extensions = Vec::with_capacity(lexicon.extensions.len());
        for extension in &lexicon.extensions {
            let extension = extension.trim().to_lowercase();
            if !extension.starts_with('.') {
                return Err(RouterError::InvalidLexicon(format!(
                    "extension marker '{}' must start with '.'",
                    extension
                )));
            }
            extensions.push(extension);
        }

        Ok(Self {
            keyword_patterns,
            phrases,
            extensions,
        })
    }

    /// Word-boundary patterns for this category's keywords.
    pub fn keyword_patterns(&self) -> &[Regex] {
        &self.keyword_patterns
    }

    /// Trigger phrases for this category.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// File-extension markers for this category.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// True when this category carries no vocabulary at all.
    pub fn is_empty(&self) -> bool {
        self.keyword_patterns.is_empty() && self.phrases.is_empty() && self.extensions.is_empty()
    }
}

/// Read-only registry of compiled lexicons, one per category.
///
/// Construct once at process start and share freely: lookups are pure and
/// the registry is never mutated after construction.
#[derive(Debug)]
pub struct LexiconRegistry {
    // Indexed by Category position in Category::ALL
    lexicons: Vec<CompiledLexicon>,
}

impl Default for LexiconRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconRegistry {
    /// Create the registry with the built-in vocabularies.
    pub fn new() -> Self {
        // Built-in entries are escaped literals; compilation cannot fail.
        Self::from_lexicons(builtin_lexicons()).expect("Invalid built-in lexicon")
    }

    /// Build a registry from a JSON document mapping category names to
    /// vocabularies, e.g. `{"music": {"keywords": ["polka"], ...}}`.
    /// Categories absent from the document keep empty vocabularies.
    pub fn from_json(document: &str) -> Result<Self, RouterError> {
        let entries: HashMap<Category, CategoryLexicon> = serde_json::from_str(document)?;

        let mut table: Vec<CategoryLexicon> = Category::ALL
            .iter()
            .map(|_| CategoryLexicon::default())
            .collect();
        for (category, lexicon) in entries {
            table[category.index()] = lexicon;
        }

        Self::from_lexicons(table)
    }

    fn from_lexicons(table: Vec<CategoryLexicon>) -> Result<Self, RouterError> {
        let mut lexicons = Vec::with_capacity(table.len());
        for lexicon in &table {
            lexicons.push(CompiledLexicon::compile(lexicon)?);
        }
        Ok(Self { lexicons })
    }

    /// Look up the compiled lexicon for a category.
    pub fn lexicon(&self, category: Category) -> &CompiledLexicon {
        &self.lexicons[category.index()]
    }
}

fn builtin_lexicons() -> Vec<CategoryLexicon> {
    Category::ALL
        .iter()
        .map(|category| match category {
            Category::Chat => CategoryLexicon::default(),
            Category::Code => {
                CategoryLexicon::from_static(CODE_KEYWORDS, CODE_PHRASES, CODE_EXTENSIONS)
            }
            Category::Design => {
                CategoryLexicon::from_static(DESIGN_KEYWORDS, DESIGN_PHRASES, DESIGN_EXTENSIONS)
            }
            Category::VideoGenerate => CategoryLexicon::from_static(
                VIDEO_GENERATE_KEYWORDS,
                VIDEO_GENERATE_PHRASES,
                VIDEO_GENERATE_EXTENSIONS,
            ),
            Category::VideoEdit => CategoryLexicon::from_static(
                VIDEO_EDIT_KEYWORDS,
                VIDEO_EDIT_PHRASES,
                VIDEO_EDIT_EXTENSIONS,
            ),
            Category::Voice => {
                CategoryLexicon::from_static(VOICE_KEYWORDS, VOICE_PHRASES, VOICE_EXTENSIONS)
            }
            Category::Music => {
                CategoryLexicon::from_static(MUSIC_KEYWORDS, MUSIC_PHRASES, MUSIC_EXTENSIONS)
            }
            Category::Image => {
                CategoryLexicon::from_static(IMAGE_KEYWORDS, IMAGE_PHRASES, IMAGE_EXTENSIONS)
            }
            Category::Presentation => CategoryLexicon::from_static(
                PRESENTATION_KEYWORDS,
                PRESENTATION_PHRASES,
                PRESENTATION_EXTENSIONS,
            ),
        })
        .collect()
}
