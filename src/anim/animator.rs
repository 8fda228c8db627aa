//! Card animations driven by a single frame tick.
//!
//! ## Flip
//!
//! Two tracks start together after the delay:
//! - lift: face container up by `FLIP_LIFT`, then back to rest (quartic in-out)
//! - squash: face width to 0 (exponential in), turn the card over, width
//!   back to rest (exponential out)
//!
//! The card counts as animating from the call to `flip` until completion.
//! On completion the callback passed to `tick` runs first, then the card's
//! animating flag is released. Exactly one completion per flip.
//!
//! ## Funky rotate
//!
//! Purely cosmetic wiggle after a match: +π/40, a backswing to −π/20
//! repeated a bounded number of times, +π/20, then back to the rotation the
//! card had when the wiggle was requested. No completion callback.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use super::easing::Easing;
use super::tween::{CardProperty, Step, Track, TrackAction, Tween};
use crate::cards::{Card, CardId, Deck, REST_LIFT, REST_SCALE};

/// Duration of each flip stage, in ms.
pub const FLIP_STAGE_MS: f64 = 120.0;

/// Face container offset at the top of a flip, in px.
pub const FLIP_LIFT: f64 = -20.0;

/// Duration of each funky-rotate segment, in ms.
pub const ROTATE_SEGMENT_MS: f64 = 100.0;

/// Handle to a running animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimationId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationKind {
    Flip,
    FunkyRotate,
}

#[derive(Clone, Debug)]
struct Animation {
    id: AnimationId,
    card: CardId,
    kind: AnimationKind,
    tracks: SmallVec<[Track; 2]>,
}

impl Animation {
    fn is_finished(&self) -> bool {
        self.tracks.iter().all(Track::is_finished)
    }
}

/// Runs every in-flight card animation.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    next_id: u64,
    active: Vec<Animation>,
    swing_repeats: u32,
}

impl Animator {
    /// Create an animator whose funky-rotate backswing repeats `swing_repeats` times.
    #[must_use]
    pub fn new(swing_repeats: u32) -> Self {
        Self {
            next_id: 0,
            active: Vec::new(),
            swing_repeats,
        }
    }

    /// Start a flip after `delay` ms. Marks the card as animating.
    pub fn flip(&mut self, card: &mut Card, delay: f64) -> AnimationId {
        card.begin_flip();

        let lift = Track::new(
            delay,
            vec![
                Step::Tween(
                    Tween::new(CardProperty::FaceLift, FLIP_LIFT, FLIP_STAGE_MS)
                        .easing(Easing::QuarticInOut),
                ),
                Step::Tween(
                    Tween::new(CardProperty::FaceLift, REST_LIFT, FLIP_STAGE_MS)
                        .easing(Easing::QuarticInOut),
                ),
            ],
        );
        let squash = Track::new(
            delay,
            vec![
                Step::Tween(
                    Tween::new(CardProperty::FaceScaleX, 0.0, FLIP_STAGE_MS)
                        .easing(Easing::ExponentialIn),
                ),
                Step::Action(TrackAction::TurnOver),
                Step::Tween(
                    Tween::new(CardProperty::FaceScaleX, REST_SCALE, FLIP_STAGE_MS)
                        .easing(Easing::ExponentialOut),
                ),
            ],
        );

        self.start(card.id(), AnimationKind::Flip, smallvec![lift, squash])
    }

    /// Start the celebratory wiggle after `delay` ms.
    pub fn funky_rotate(&mut self, card: &Card, delay: f64) -> AnimationId {
        use std::f64::consts::PI;

        let rest = card.transform().rotation;
        let segment = |target| Tween::new(CardProperty::Rotation, target, ROTATE_SEGMENT_MS);
        let wiggle = Track::new(
            delay,
            vec![
                Step::Tween(segment(PI / 40.0)),
                Step::Tween(segment(-PI / 20.0).repeat(self.swing_repeats)),
                Step::Tween(segment(PI / 20.0)),
                Step::Tween(segment(rest)),
            ],
        );

        self.start(card.id(), AnimationKind::FunkyRotate, smallvec![wiggle])
    }

    fn start(
        &mut self,
        card: CardId,
        kind: AnimationKind,
        tracks: SmallVec<[Track; 2]>,
    ) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        trace!(?id, %card, ?kind, "animation started");
        self.active.push(Animation { id, card, kind, tracks });
        id
    }

    /// Advance every animation by `dt` ms, in start order.
    ///
    /// `on_flip_complete` runs once per finished flip, before the card's
    /// animating flag is released. Animations whose card is no longer in
    /// `deck` are dropped.
    pub fn tick(
        &mut self,
        deck: &mut Deck,
        dt: f64,
        mut on_flip_complete: impl FnMut(AnimationId, CardId),
    ) {
        self.active.retain_mut(|anim| {
            let Some(card) = deck.get_mut(anim.card) else {
                debug!(id = ?anim.id, card = %anim.card, "dropping animation for a removed card");
                return false;
            };

            for track in &mut anim.tracks {
                track.advance(card, dt);
            }

            if !anim.is_finished() {
                return true;
            }

            trace!(id = ?anim.id, card = %anim.card, kind = ?anim.kind, "animation finished");
            if anim.kind == AnimationKind::Flip {
                on_flip_complete(anim.id, anim.card);
                card.end_flip();
            }
            false
        });
    }

    /// Drop every animation without completing it.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn is_running(&self, id: AnimationId) -> bool {
        self.active.iter().any(|a| a.id == id)
    }
}
