//! Game configuration.
//!
//! `GameConfig::default()` reproduces the classic board: six motifs dealt
//! into four columns of standard playing-card proportions. Games can
//! override any field with the `with_*` builders or load a JSON document.
//!
//! ```
//! use memory_match::core::GameConfig;
//!
//! let config = GameConfig::default().with_columns(3).with_gutter(12.0);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.pair_count(), 6);
//! assert_eq!(config.rows(), 4);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Names of the motifs on the classic board.
pub const DEFAULT_MOTIFS: [&str; 6] =
    ["camembert", "circle", "crescent", "heart", "square", "star"];

/// Longest accepted pair delay, in ms.
pub const MAX_DELAY_MS: f64 = 60_000.0;

/// A symbol shared by exactly one pair of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifSpec {
    /// Identity of the motif; two cards match when their names are equal.
    pub name: String,

    /// Texture path of the front face.
    pub texture: String,
}

impl MotifSpec {
    /// Create a motif with an explicit texture path.
    pub fn new(name: impl Into<String>, texture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            texture: texture.into(),
        }
    }

    /// Create a motif whose texture lives at `img/motifs/<name>.png`.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let texture = format!("img/motifs/{}.png", name);
        Self { name, texture }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Motifs in the deck; each is dealt twice.
    pub motifs: Vec<MotifSpec>,

    /// Texture path of the shared card back.
    pub back_texture: String,

    /// Fixed number of grid columns.
    pub columns: usize,

    /// Spacing between cells, in pixels.
    pub gutter: f64,

    /// Card width divided by card height.
    pub card_ratio: f64,

    /// Top and bottom padding, each as a fraction of the canvas height.
    pub vertical_padding_ratio: f64,

    /// Fraction of the window width given to the canvas.
    pub canvas_width_ratio: f64,

    /// Delay before a mismatched pair flips back, in ms.
    pub conceal_delay_ms: f64,

    /// Delay before a matched pair starts its celebration, in ms.
    pub celebrate_delay_ms: f64,

    /// How many times the celebration's backswing repeats.
    pub swing_repeats: u32,

    /// Back-face brightness while the pointer is over a card.
    pub hover_brightness: f64,

    /// Width of the random resting tilt range, in radians.
    pub max_tilt: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            motifs: DEFAULT_MOTIFS.iter().map(|name| MotifSpec::named(*name)).collect(),
            back_texture: "img/card_back.png".to_string(),
            columns: 4,
            gutter: 20.0,
            card_ratio: 2.5 / 3.5,
            vertical_padding_ratio: 0.15,
            canvas_width_ratio: 0.7,
            conceal_delay_ms: 700.0,
            celebrate_delay_ms: 340.0,
            swing_repeats: 2,
            hover_brightness: 1.15,
            max_tilt: std::f64::consts::PI / 24.0,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the motif list.
    #[must_use]
    pub fn with_motifs(mut self, motifs: Vec<MotifSpec>) -> Self {
        self.motifs = motifs;
        self
    }

    /// Keep only the first `count` motifs.
    #[must_use]
    pub fn with_motif_count(mut self, count: usize) -> Self {
        self.motifs.truncate(count);
        self
    }

    /// Set the column count.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the gutter in pixels.
    #[must_use]
    pub fn with_gutter(mut self, gutter: f64) -> Self {
        self.gutter = gutter;
        self
    }

    /// Set both pair delays in ms.
    #[must_use]
    pub fn with_delays(mut self, conceal_ms: f64, celebrate_ms: f64) -> Self {
        self.conceal_delay_ms = conceal_ms;
        self.celebrate_delay_ms = celebrate_ms;
        self
    }

    /// Set the backswing repeat count.
    #[must_use]
    pub fn with_swing_repeats(mut self, repeats: u32) -> Self {
        self.swing_repeats = repeats;
        self
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.motifs.len()
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.motifs.len() * 2
    }

    /// Number of grid rows needed for every card.
    #[must_use]
    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            return 0;
        }
        self.card_count().div_ceil(self.columns)
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.motifs.is_empty() {
            return Err(ConfigError::NoMotifs);
        }

        let mut seen = FxHashSet::default();
        for motif in &self.motifs {
            if !seen.insert(motif.name.as_str()) {
                return Err(ConfigError::DuplicateMotif(motif.name.clone()));
            }
        }

        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if !self.gutter.is_finite() || self.gutter < 0.0 {
            return Err(ConfigError::InvalidGutter(self.gutter));
        }
        if !self.card_ratio.is_finite() || self.card_ratio <= 0.0 {
            return Err(ConfigError::InvalidCardRatio(self.card_ratio));
        }
        if !(0.0..0.5).contains(&self.vertical_padding_ratio) {
            return Err(ConfigError::InvalidPadding(self.vertical_padding_ratio));
        }
        if !(self.canvas_width_ratio > 0.0 && self.canvas_width_ratio <= 1.0) {
            return Err(ConfigError::InvalidCanvasRatio(self.canvas_width_ratio));
        }
        if !self.hover_brightness.is_finite() || self.hover_brightness <= 0.0 {
            return Err(ConfigError::InvalidBrightness(self.hover_brightness));
        }
        // A flip-back that never starts would hold the selection forever.
        for delay in [self.conceal_delay_ms, self.celebrate_delay_ms] {
            if !(0.0..=MAX_DELAY_MS).contains(&delay) {
                return Err(ConfigError::InvalidDelay(delay));
            }
        }
        if !(0.0..=std::f64::consts::PI).contains(&self.max_tilt) {
            return Err(ConfigError::InvalidTilt(self.max_tilt));
        }

        Ok(())
    }
}
