//! Tween tracks: explicit stage machines advanced by elapsed time.
//!
//! A `Track` is a chain of steps run one after another. Each `Tween` step
//! captures its property's start value when it begins, interpolates to its
//! target over its duration and may repeat a bounded number of times. An
//! `Action` step fires instantly between tweens, so it always happens
//! strictly after the previous tween completes and before the next begins.
//!
//! Time that overshoots a step carries into the next one, so advancing by
//! one large delta gives the same end state as many small ones.

use serde::{Deserialize, Serialize};

use super::easing::Easing;
use crate::cards::Card;

/// Animatable card properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardProperty {
    /// Vertical offset of the face container.
    FaceLift,
    /// Horizontal squash of the visible face.
    FaceScaleX,
    /// Rotation of the whole card.
    Rotation,
}

impl CardProperty {
    #[must_use]
    pub fn get(self, card: &Card) -> f64 {
        match self {
            CardProperty::FaceLift => card.face_lift(),
            CardProperty::FaceScaleX => card.face_scale_x(),
            CardProperty::Rotation => card.transform().rotation,
        }
    }

    pub fn set(self, card: &mut Card, value: f64) {
        match self {
            CardProperty::FaceLift => card.set_face_lift(value),
            CardProperty::FaceScaleX => card.set_face_scale_x(value),
            CardProperty::Rotation => card.set_rotation(value),
        }
    }
}

/// Instant side effects that can sit between tweens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackAction {
    /// Swap the card's visible face.
    TurnOver,
}

/// Interpolate one property to a target value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub property: CardProperty,
    pub target: f64,
    /// Milliseconds.
    pub duration: f64,
    pub easing: Easing,
    /// Extra runs after the first, each restarting from the captured start.
    pub repeat: u32,
}

impl Tween {
    #[must_use]
    pub fn new(property: CardProperty, target: f64, duration: f64) -> Self {
        Self {
            property,
            target,
            duration,
            easing: Easing::Linear,
            repeat: 0,
        }
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn repeat(mut self, times: u32) -> Self {
        self.repeat = times;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Step {
    Tween(Tween),
    Action(TrackAction),
}

/// A chain of steps with a start delay.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    steps: Vec<Step>,
    index: usize,
    /// Time into the current step. Negative while the start delay runs.
    elapsed: f64,
    start_value: Option<f64>,
    runs_done: u32,
}

impl Track {
    /// Create a track that starts after `delay` milliseconds.
    #[must_use]
    pub fn new(delay: f64, steps: Vec<Step>) -> Self {
        Self {
            steps,
            index: 0,
            elapsed: -delay.max(0.0),
            start_value: None,
            runs_done: 0,
        }
    }

    /// Has every step run?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.steps.len()
    }

    /// Index of the step currently running.
    #[must_use]
    pub fn stage(&self) -> usize {
        self.index
    }

    /// Advance by `dt` milliseconds, writing into `card`.
    pub fn advance(&mut self, card: &mut Card, dt: f64) {
        let mut budget = dt.max(0.0);

        if self.elapsed < 0.0 {
            let wait = budget.min(-self.elapsed);
            self.elapsed += wait;
            budget -= wait;
            if self.elapsed < 0.0 {
                return;
            }
        }

        while let Some(step) = self.steps.get(self.index).copied() {
            match step {
                Step::Action(TrackAction::TurnOver) => {
                    card.turn_over();
                    self.next_step();
                }
                Step::Tween(tween) => {
                    let from = *self.start_value.get_or_insert_with(|| tween.property.get(card));
                    let remaining = tween.duration - self.elapsed;

                    if budget < remaining {
                        self.elapsed += budget;
                        let eased = tween.easing.apply(self.elapsed / tween.duration);
                        tween.property.set(card, from + (tween.target - from) * eased);
                        return;
                    }

                    budget -= remaining.max(0.0);
                    tween.property.set(card, tween.target);

                    if self.runs_done < tween.repeat {
                        self.runs_done += 1;
                        self.elapsed = 0.0;
                    } else {
                        self.next_step();
                    }
                }
            }
        }
    }

    fn next_step(&mut self) {
        self.index += 1;
        self.elapsed = 0.0;
        self.start_value = None;
        self.runs_done = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::surface::NodeHandle;

    fn card() -> Card {
        Card::new(CardId::new(0), "star", NodeHandle::new(0), 0.0)
    }

    fn linear_rotation(target: f64, duration: f64) -> Step {
        Step::Tween(Tween::new(CardProperty::Rotation, target, duration))
    }

    #[test]
    fn test_delay_holds_start() {
        let mut c = card();
        let mut track = Track::new(50.0, vec![linear_rotation(1.0, 100.0)]);

        track.advance(&mut c, 40.0);
        assert_eq!(c.transform().rotation, 0.0);

        track.advance(&mut c, 60.0);
        assert!((c.transform().rotation - 0.5).abs() < 1e-12);
        assert!(!track.is_finished());
    }

    #[test]
    fn test_overshoot_carries_into_next_step() {
        let mut c = card();
        let mut track = Track::new(
            0.0,
            vec![linear_rotation(1.0, 100.0), linear_rotation(0.0, 100.0)],
        );

        track.advance(&mut c, 150.0);
        assert_eq!(track.stage(), 1);
        assert!((c.transform().rotation - 0.5).abs() < 1e-12);

        track.advance(&mut c, 50.0);
        assert!(track.is_finished());
        assert_eq!(c.transform().rotation, 0.0);
    }

    #[test]
    fn test_action_fires_between_tweens() {
        let mut c = card();
        let mut track = Track::new(
            0.0,
            vec![
                Step::Tween(Tween::new(CardProperty::FaceScaleX, 0.0, 100.0)),
                Step::Action(TrackAction::TurnOver),
                Step::Tween(Tween::new(CardProperty::FaceScaleX, 1.0, 100.0)),
            ],
        );

        track.advance(&mut c, 99.0);
        assert!(!c.is_showing_front());

        track.advance(&mut c, 1.0);
        assert!(c.is_showing_front());
        assert_eq!(c.face_scale_x(), 0.0);
        assert_eq!(track.stage(), 2);

        track.advance(&mut c, 100.0);
        assert!(track.is_finished());
        assert_eq!(c.face_scale_x(), 1.0);
    }

    #[test]
    fn test_repeat_restarts_from_captured_start() {
        let mut c = card();
        c.set_rotation(1.0);
        let mut track = Track::new(
            0.0,
            vec![Step::Tween(Tween::new(CardProperty::Rotation, -1.0, 100.0).repeat(2))],
        );

        track.advance(&mut c, 150.0);
        // Second run, halfway from the captured 1.0 to -1.0.
        assert!(c.transform().rotation.abs() < 1e-12);

        track.advance(&mut c, 100.0);
        assert!(!track.is_finished());

        track.advance(&mut c, 50.0);
        assert!(track.is_finished());
        assert_eq!(c.transform().rotation, -1.0);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut c = card();
        let mut track = Track::new(0.0, vec![linear_rotation(1.0, 100.0)]);

        track.advance(&mut c, 50.0);
        track.advance(&mut c, -30.0);
        assert!((c.transform().rotation - 0.5).abs() < 1e-12);
    }
}
