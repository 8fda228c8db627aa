//! Animation: easing curves, tween tracks and the card animator.
//!
//! Animations are explicit stage machines advanced by one frame tick.
//! Nothing here owns a timer, so tests can simulate any number of frames
//! and inspect the cards in between.

pub mod animator;
pub mod easing;
pub mod tween;

pub use animator::{
    AnimationId, AnimationKind, Animator, FLIP_LIFT, FLIP_STAGE_MS, ROTATE_SEGMENT_MS,
};
pub use easing::Easing;
pub use tween::{CardProperty, Step, Track, TrackAction, Tween};
