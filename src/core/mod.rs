//! Core types: RNG, configuration, session state, errors.
//!
//! This module holds the pieces the rest of the crate builds on. Nothing
//! here knows about rendering or animation.

pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use rng::GameRng;
pub use config::{GameConfig, MotifSpec, DEFAULT_MOTIFS, MAX_DELAY_MS};
pub use state::{Session, SessionStatus, TurnPhase};
pub use error::{ConfigError, GameError};
