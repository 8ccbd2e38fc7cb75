//! Cattlelog - ASCII art creatures for your terminal
//!
//! This library renders a speech or thought balloon above an ASCII-art
//! creature. The balloon formatter and the placeholder substitution
//! engine are pure functions; the creature catalog is embedded data.
//!
//! # Example
//!
//! ```rust
//! use cattlelog::moo;
//!
//! let art = moo("Hello world", &cattlelog::MooOptions::default()).unwrap();
//! assert!(art.contains("< Hello world >"));
//! ```

pub mod balloon;
pub mod catalog;
pub mod face;
pub mod replacer;

pub use balloon::{balloon, say, string_width, think, BalloonStyle};
pub use catalog::{cow_names, get_cow, list_cows, Cow};
pub use face::{Face, FaceMode, FaceOptions, FACE_MODES};
pub use replacer::{replace_placeholders, FaceValues};

use thiserror::Error;

/// Errors that can occur during a render
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested creature is not in the catalog
    #[error("cow not found: {0}")]
    CowNotFound(String),
}

/// Configuration for a complete render
#[derive(Debug, Clone, Default)]
pub struct MooOptions {
    /// Creature name or id (default: "Default")
    pub cow: Option<String>,
    /// Thought bubble instead of speech
    pub think: bool,
    /// Wrap text at this many characters
    pub wrap: Option<usize>,
    /// Face configuration
    pub face: FaceOptions,
}

impl MooOptions {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a creature by name or id
    pub fn with_cow(mut self, cow: impl Into<String>) -> Self {
        self.cow = Some(cow.into());
        self
    }

    /// Use a thought bubble instead of speech
    pub fn with_think(mut self, think: bool) -> Self {
        self.think = think;
        self
    }

    /// Wrap the message at the given character count
    pub fn with_wrap(mut self, wrap: usize) -> Self {
        self.wrap = Some(wrap);
        self
    }

    /// Apply a face mode preset
    pub fn with_mode(mut self, mode: FaceMode) -> Self {
        self.face.mode = Some(mode);
        self
    }

    /// Set custom eyes (2 characters)
    pub fn with_eyes(mut self, eyes: impl Into<String>) -> Self {
        self.face.eyes = Some(eyes.into());
        self
    }

    /// Set a custom tongue (2 characters)
    pub fn with_tongue(mut self, tongue: impl Into<String>) -> Self {
        self.face.tongue = Some(tongue.into());
        self
    }
}

/// Render a creature saying (or thinking) a message.
///
/// This is the main entry point for the library. It formats the balloon,
/// stamps the face into the creature template and joins the two.
///
/// # Example
///
/// ```rust
/// use cattlelog::{moo, FaceMode, MooOptions};
///
/// let art = moo("Moo?", &MooOptions::new().with_mode(FaceMode::Dead)).unwrap();
/// assert!(art.contains("< Moo? >"));
/// assert!(art.contains("(xx)"));
/// ```
pub fn moo(text: &str, options: &MooOptions) -> Result<String, RenderError> {
    let name = options.cow.as_deref().unwrap_or("Default");
    let cow = catalog::get_cow(name).ok_or_else(|| RenderError::CowNotFound(name.to_string()))?;

    let style = if options.think {
        BalloonStyle::Thought
    } else {
        BalloonStyle::Speech
    };

    let face = options.face.resolve();
    let balloon = balloon::balloon(text, options.wrap, style);
    let art = replacer::replace_placeholders(
        &cow.art,
        &FaceValues {
            thoughts: style.connector().to_string(),
            eyes: face.eyes,
            tongue: face.tongue,
        },
    );

    Ok(format!("{}\n{}", balloon, art))
}
