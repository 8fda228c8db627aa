//! Rendering collaborator.

use serde::{Deserialize, Serialize};

use super::assets::TextureId;
use crate::cards::CardView;

/// Opaque handle to a card's node in the renderer's scene graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeHandle(pub u32);

impl NodeHandle {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// A scene graph able to draw cards.
///
/// Each card node is a container holding a face container with two
/// center-anchored sprites (front and back) and a brightness filter on the
/// back sprite.
pub trait Scene {
    /// Create the node tree for one card.
    fn create_card_node(&mut self, front: TextureId, back: TextureId) -> NodeHandle;

    /// Remove a card's node tree and everything under it.
    fn destroy_node(&mut self, node: NodeHandle);

    /// Push a card's current visual state to its node.
    fn sync_card(&mut self, node: NodeHandle, view: &CardView);
}
