//! In-memory collaborators for the simulator and the tests.

use rustc_hash::FxHashMap;

use super::assets::{AssetLoader, TextureId};
use super::presenter::Presenter;
use super::scene::{NodeHandle, Scene};
use crate::cards::CardView;

#[derive(Debug)]
struct HeadlessNode {
    textures: (TextureId, TextureId),
    view: Option<CardView>,
}

/// Scene graph that remembers each node's textures and last synced view.
#[derive(Debug, Default)]
pub struct HeadlessScene {
    next_node: u32,
    nodes: FxHashMap<NodeHandle, HeadlessNode>,
    destroyed: usize,
}

impl HeadlessScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes currently alive.
    #[must_use]
    pub fn live_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes destroyed so far.
    #[must_use]
    pub fn destroyed_nodes(&self) -> usize {
        self.destroyed
    }

    /// Last view synced to a node, if any.
    #[must_use]
    pub fn view(&self, node: NodeHandle) -> Option<&CardView> {
        self.nodes.get(&node).and_then(|n| n.view.as_ref())
    }

    /// Front and back textures a node was created with.
    #[must_use]
    pub fn textures(&self, node: NodeHandle) -> Option<(TextureId, TextureId)> {
        self.nodes.get(&node).map(|n| n.textures)
    }
}

impl Scene for HeadlessScene {
    fn create_card_node(&mut self, front: TextureId, back: TextureId) -> NodeHandle {
        let node = NodeHandle::new(self.next_node);
        self.next_node += 1;
        self.nodes.insert(
            node,
            HeadlessNode {
                textures: (front, back),
                view: None,
            },
        );
        node
    }

    fn destroy_node(&mut self, node: NodeHandle) {
        if self.nodes.remove(&node).is_some() {
            self.destroyed += 1;
        }
    }

    fn sync_card(&mut self, node: NodeHandle, view: &CardView) {
        if let Some(slot) = self.nodes.get_mut(&node) {
            slot.view = Some(*view);
        }
    }
}

/// Presenter that records what it was last told to display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingPresenter {
    pub pairs_found: u32,
    pub pair_total: u32,
    pub attempts: u32,
    pub win_visible: bool,
    /// How many times the banner went from hidden to shown.
    pub win_shown_count: u32,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for RecordingPresenter {
    fn show_pairs_found(&mut self, pairs: u32) {
        self.pairs_found = pairs;
    }

    fn show_pair_total(&mut self, pairs: u32) {
        self.pair_total = pairs;
    }

    fn show_attempts(&mut self, attempts: u32) {
        self.attempts = attempts;
    }

    fn set_win_visible(&mut self, visible: bool) {
        if visible && !self.win_visible {
            self.win_shown_count += 1;
        }
        self.win_visible = visible;
    }
}

/// Asset loader that hands out sequential texture ids.
#[derive(Clone, Debug, Default)]
pub struct HeadlessAssets {
    loaded: Vec<String>,
    missing: Vec<String>,
}

impl HeadlessAssets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make loading `path` fail.
    #[must_use]
    pub fn with_missing(mut self, path: impl Into<String>) -> Self {
        self.missing.push(path.into());
        self
    }

    /// Paths loaded so far, in order.
    #[must_use]
    pub fn loaded(&self) -> &[String] {
        &self.loaded
    }
}

impl AssetLoader for HeadlessAssets {
    fn load_texture(&mut self, path: &str) -> Result<TextureId, String> {
        if self.missing.iter().any(|m| m == path) {
            return Err("no such asset".to_string());
        }
        self.loaded.push(path.to_string());
        Ok(TextureId(self.loaded.len() as u32 - 1))
    }
}
