//! Asset loading collaborator.
//!
//! All textures are loaded up front, before the first deal. A texture the
//! loader cannot supply aborts startup.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameConfig, GameError};

/// Opaque handle to a loaded texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Loads textures by path.
pub trait AssetLoader {
    /// Load one texture. The error string is surfaced in `GameError::AssetLoad`.
    fn load_texture(&mut self, path: &str) -> Result<TextureId, String>;
}

/// Every texture the board needs.
///
/// Fronts are stored in motif order, one per configured motif.
#[derive(Clone, Debug)]
pub struct TextureSet {
    back: TextureId,
    fronts: Vec<TextureId>,
}

impl TextureSet {
    /// Load the back texture and every motif's front texture.
    pub fn load(loader: &mut impl AssetLoader, config: &GameConfig) -> Result<Self, GameError> {
        let mut load = |path: &str| {
            loader.load_texture(path).map_err(|reason| GameError::AssetLoad {
                path: path.to_string(),
                reason,
            })
        };

        let mut fronts = Vec::with_capacity(config.motifs.len());
        for motif in &config.motifs {
            let texture = load(&motif.texture)?;
            debug!(motif = %motif.name, path = %motif.texture, "loaded front texture");
            fronts.push(texture);
        }
        let back = load(&config.back_texture)?;

        Ok(Self { back, fronts })
    }

    #[must_use]
    pub fn back(&self) -> TextureId {
        self.back
    }

    /// Front texture of the motif at `index` in the configuration.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a motif index of the configuration this set
    /// was loaded for.
    #[must_use]
    pub fn front(&self, index: usize) -> TextureId {
        self.fronts[index]
    }

    /// Number of front textures, one per motif.
    #[must_use]
    pub fn front_count(&self) -> usize {
        self.fronts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessAssets;

    #[test]
    fn test_load_all_textures() {
        let config = GameConfig::default();
        let mut loader = HeadlessAssets::new();

        let textures = TextureSet::load(&mut loader, &config).unwrap();

        assert_eq!(loader.loaded().len(), 7);
        assert_eq!(textures.front_count(), config.motifs.len());
        for (index, motif) in config.motifs.iter().enumerate() {
            assert_eq!(loader.loaded()[index], motif.texture);
            assert_ne!(textures.front(index), textures.back());
        }
        assert_eq!(loader.loaded()[6], config.back_texture);
    }

    #[test]
    fn test_missing_texture_is_fatal() {
        let config = GameConfig::default();
        let mut loader = HeadlessAssets::new().with_missing("img/card_back.png");

        let err = TextureSet::load(&mut loader, &config).unwrap_err();
        assert!(matches!(
            err,
            GameError::AssetLoad { ref path, .. } if path == "img/card_back.png"
        ));
    }
}
