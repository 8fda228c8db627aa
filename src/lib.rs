//! # memory-match
//!
//! The game core of a memory-matching card game: a grid of face-down
//! cards revealed two at a time, with win detection and animated flips.
//!
//! ## Design Principles
//!
//! 1. **Collaborators at the edges**: rendering, the counters display and
//!    texture loading sit behind the `Scene`, `Presenter` and `AssetLoader`
//!    traits. Cards own a node handle; they never extend a renderer type.
//!
//! 2. **One owner for game state**: `MemoryGame` owns the `Session`. Input
//!    and frame ticks arrive on one thread, so nothing is locked.
//!
//! 3. **Animations as data**: flips and wiggles are stage machines advanced
//!    by `frame(dt)`. Tests simulate frames instead of waiting on timers.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, session state, errors
//! - `cards`: cards, deck, selection
//! - `layout`: responsive grid geometry
//! - `anim`: easing, tween tracks, animator
//! - `surface`: collaborator traits and headless implementations
//! - `game`: turn controller and autoplay

pub mod core;
pub mod cards;
pub mod layout;
pub mod anim;
pub mod surface;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, MotifSpec, Session, SessionStatus, TurnPhase,
};

pub use crate::cards::{Card, CardId, CardView, Deck, Facing, Rejection, Selection, Transform};

pub use crate::layout::{GridGeometry, Rect, Viewport};

pub use crate::anim::{AnimationId, Animator, Easing};

pub use crate::surface::{
    AssetLoader, HeadlessAssets, HeadlessScene, NodeHandle, Presenter, RecordingPresenter, Scene,
    TextureId, TextureSet,
};

pub use crate::game::{
    ChooseOutcome, MemoryGame, MemoryStrategy, RandomStrategy, SimReport, Strategy,
};
