//! Face mode presets and resolution
//!
//! Each face mode is a fixed eyes/tongue pair matching the classic
//! cowsay flags. The table is immutable; callers resolve a `FaceOptions`
//! into concrete glyphs per render.

/// A named face preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceMode {
    Borg,
    Dead,
    Greedy,
    Paranoid,
    Stoned,
    Tired,
    Wired,
    Young,
}

/// All face modes in flag-precedence order.
pub const FACE_MODES: [FaceMode; 8] = [
    FaceMode::Borg,
    FaceMode::Dead,
    FaceMode::Greedy,
    FaceMode::Paranoid,
    FaceMode::Stoned,
    FaceMode::Tired,
    FaceMode::Wired,
    FaceMode::Young,
];

impl FaceMode {
    pub fn eyes(self) -> &'static str {
        match self {
            FaceMode::Borg => "==",
            FaceMode::Dead => "xx",
            FaceMode::Greedy => "$$",
            FaceMode::Paranoid => "@@",
            FaceMode::Stoned => "**",
            FaceMode::Tired => "--",
            FaceMode::Wired => "OO",
            FaceMode::Young => "..",
        }
    }

    pub fn tongue(self) -> &'static str {
        match self {
            FaceMode::Dead | FaceMode::Stoned => "U ",
            _ => "  ",
        }
    }
}

/// Resolved face glyphs for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub eyes: String,
    pub tongue: String,
}

/// Face configuration before resolution: an optional preset mode plus
/// optional custom eyes/tongue overrides.
#[derive(Debug, Clone, Default)]
pub struct FaceOptions {
    /// Preset mode; wins over custom eyes and tongue.
    pub mode: Option<FaceMode>,
    /// Custom eyes (2 characters by convention).
    pub eyes: Option<String>,
    /// Custom tongue (2 characters by convention).
    pub tongue: Option<String>,
}

impl FaceOptions {
    /// Resolve options into concrete glyphs.
    ///
    /// A preset mode takes precedence over custom values; without either,
    /// eyes default to `oo` and the tongue to two spaces.
    pub fn resolve(&self) -> Face {
        if let Some(mode) = self.mode {
            return Face {
                eyes: mode.eyes().to_string(),
                tongue: mode.tongue().to_string(),
            };
        }

        Face {
            eyes: self.eyes.clone().unwrap_or_else(|| "oo".to_string()),
            tongue: self.tongue.clone().unwrap_or_else(|| "  ".to_string()),
        }
    }
}
