//! Card entities.
//!
//! A `Card` is plain game data plus a handle to the scene node that draws
//! it. It never reaches into the renderer: each frame the controller hands
//! a `CardView` snapshot to the `Scene`.
//!
//! Visual state lives in three places:
//! - `Transform`: position/size from the layout engine, plus rotation
//! - `face_lift` / `face_scale_x`: the face container's vertical offset and
//!   horizontal squash, animated by a flip
//! - `back_brightness`: the hover filter on the back face

use serde::{Deserialize, Serialize};

use crate::layout::Rect;
use crate::surface::NodeHandle;

/// Face container offset when a card is at rest.
pub const REST_LIFT: f64 = 0.0;

/// Face width factor when a card is at rest.
pub const REST_SCALE: f64 = 1.0;

/// Unique identifier for a card.
///
/// Ids are never reused within a game, so a card dealt on replay never
/// collides with one from the previous deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Which face a card is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    /// The motif is visible.
    Front,
    /// The shared cover is visible.
    Back,
}

/// Why a click on a card was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// No card with that id is in the current deck.
    UnknownCard,
    /// The card is mid-flip.
    Animating,
    /// Two cards are already awaiting evaluation.
    SelectionFull,
    /// The card is already face up.
    AlreadyRevealed,
    /// The card belongs to a found pair.
    Matched,
    /// Every pair has been found.
    GameOver,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Rejection::UnknownCard => "unknown card",
            Rejection::Animating => "card is animating",
            Rejection::SelectionFull => "two cards already selected",
            Rejection::AlreadyRevealed => "card is already face up",
            Rejection::Matched => "card is already matched",
            Rejection::GameOver => "game is over",
        };
        f.write_str(reason)
    }
}

/// Position, size and rotation of a card. Position is the card's center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Radians.
    pub rotation: f64,
}

/// Snapshot of everything a renderer needs to draw one card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub transform: Transform,
    pub face_lift: f64,
    pub face_scale_x: f64,
    /// Hidden faces stay in the scene graph so they keep their transforms.
    pub front_renderable: bool,
    pub back_renderable: bool,
    pub back_brightness: f64,
}

/// A card on the board.
#[derive(Clone, Debug)]
pub struct Card {
    id: CardId,
    motif: String,
    node: NodeHandle,
    facing: Facing,
    /// Flips started but not yet completed.
    pending_flips: u8,
    matched: bool,
    transform: Transform,
    face_lift: f64,
    face_scale_x: f64,
    back_brightness: f64,
}

impl Card {
    /// Create a face-down card resting at `tilt` radians.
    #[must_use]
    pub fn new(id: CardId, motif: impl Into<String>, node: NodeHandle, tilt: f64) -> Self {
        Self {
            id,
            motif: motif.into(),
            node,
            facing: Facing::Back,
            pending_flips: 0,
            matched: false,
            transform: Transform {
                rotation: tilt,
                ..Transform::default()
            },
            face_lift: REST_LIFT,
            face_scale_x: REST_SCALE,
            back_brightness: 1.0,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn motif(&self) -> &str {
        &self.motif
    }

    #[must_use]
    pub fn node(&self) -> NodeHandle {
        self.node
    }

    #[must_use]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[must_use]
    pub fn is_showing_front(&self) -> bool {
        self.facing == Facing::Front
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn face_lift(&self) -> f64 {
        self.face_lift
    }

    #[must_use]
    pub fn face_scale_x(&self) -> f64 {
        self.face_scale_x
    }

    #[must_use]
    pub fn back_brightness(&self) -> f64 {
        self.back_brightness
    }

    /// Show the front (`true`) or the back (`false`).
    pub fn show_face(&mut self, front: bool) {
        self.facing = if front { Facing::Front } else { Facing::Back };
    }

    /// Swap the visible face.
    pub fn turn_over(&mut self) {
        self.show_face(!self.is_showing_front());
    }

    /// Do both cards carry the same motif?
    #[must_use]
    pub fn has_same_motif(&self, other: &Card) -> bool {
        self.motif == other.motif
    }

    /// Is a flip in progress?
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.pending_flips > 0
    }

    /// Record that a flip has started.
    pub fn begin_flip(&mut self) {
        self.pending_flips = self.pending_flips.saturating_add(1);
    }

    /// Record that a flip has completed.
    pub fn end_flip(&mut self) {
        self.pending_flips = self.pending_flips.saturating_sub(1);
    }

    /// Mark the card as part of a found pair.
    pub fn mark_matched(&mut self) {
        self.matched = true;
    }

    /// Click acceptance: the card must be idle, face down and unmatched,
    /// and fewer than two cards may be selected.
    pub fn accepts_click(&self, selected: usize) -> Result<(), Rejection> {
        if self.matched {
            return Err(Rejection::Matched);
        }
        if self.is_animating() {
            return Err(Rejection::Animating);
        }
        if selected >= 2 {
            return Err(Rejection::SelectionFull);
        }
        if self.is_showing_front() {
            return Err(Rejection::AlreadyRevealed);
        }
        Ok(())
    }

    /// Apply a layout rectangle. Rotation is left alone.
    pub fn place(&mut self, rect: Rect) {
        self.transform.x = rect.x;
        self.transform.y = rect.y;
        self.transform.width = rect.width;
        self.transform.height = rect.height;
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.transform.rotation = rotation;
    }

    pub fn set_face_lift(&mut self, lift: f64) {
        self.face_lift = lift;
    }

    pub fn set_face_scale_x(&mut self, scale: f64) {
        self.face_scale_x = scale;
    }

    /// Pointer entered the card. Cosmetic only.
    pub fn hover(&mut self, brightness: f64) {
        self.back_brightness = brightness;
    }

    /// Pointer left the card. Cosmetic only.
    pub fn unhover(&mut self) {
        self.back_brightness = 1.0;
    }

    /// Snapshot for the renderer.
    #[must_use]
    pub fn view(&self) -> CardView {
        let front = self.is_showing_front();
        CardView {
            transform: self.transform,
            face_lift: self.face_lift,
            face_scale_x: self.face_scale_x,
            front_renderable: front,
            back_renderable: !front,
            back_brightness: self.back_brightness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, motif: &str) -> Card {
        Card::new(CardId::new(id), motif, NodeHandle::new(id), 0.0)
    }

    #[test]
    fn test_new_card_is_face_down_and_idle() {
        let c = card(1, "star");

        assert_eq!(c.facing(), Facing::Back);
        assert!(!c.is_animating());
        assert!(!c.is_matched());
        assert_eq!(c.face_scale_x(), REST_SCALE);
        assert_eq!(c.face_lift(), REST_LIFT);
        assert!(c.accepts_click(0).is_ok());
    }

    #[test]
    fn test_show_face_toggles_renderables() {
        let mut c = card(1, "star");

        c.show_face(true);
        let view = c.view();
        assert!(view.front_renderable);
        assert!(!view.back_renderable);

        c.turn_over();
        let view = c.view();
        assert!(!view.front_renderable);
        assert!(view.back_renderable);
    }

    #[test]
    fn test_has_same_motif() {
        let a = card(1, "star");
        let b = card(2, "star");
        let c = card(3, "heart");

        assert!(a.has_same_motif(&b));
        assert!(!a.has_same_motif(&c));
    }

    #[test]
    fn test_accepts_click_guards() {
        let mut c = card(1, "star");

        assert_eq!(c.accepts_click(2), Err(Rejection::SelectionFull));

        c.begin_flip();
        assert_eq!(c.accepts_click(0), Err(Rejection::Animating));
        c.end_flip();

        c.show_face(true);
        assert_eq!(c.accepts_click(0), Err(Rejection::AlreadyRevealed));

        c.mark_matched();
        assert_eq!(c.accepts_click(0), Err(Rejection::Matched));
    }

    #[test]
    fn test_overlapping_flips_keep_card_busy() {
        let mut c = card(1, "star");

        c.begin_flip();
        c.begin_flip();
        c.end_flip();
        assert!(c.is_animating());
        c.end_flip();
        assert!(!c.is_animating());

        // Extra completions never underflow.
        c.end_flip();
        assert!(!c.is_animating());
    }

    #[test]
    fn test_place_keeps_rotation() {
        let mut c = Card::new(CardId::new(1), "star", NodeHandle::new(1), 0.1);
        c.place(Rect {
            x: 10.0,
            y: 20.0,
            width: 30.0,
            height: 40.0,
        });

        let t = c.transform();
        assert_eq!((t.x, t.y, t.width, t.height), (10.0, 20.0, 30.0, 40.0));
        assert_eq!(t.rotation, 0.1);
    }

    #[test]
    fn test_hover_is_cosmetic() {
        let mut c = card(1, "star");
        c.hover(1.15);
        assert_eq!(c.back_brightness(), 1.15);
        assert!(c.accepts_click(0).is_ok());
        c.unhover();
        assert_eq!(c.back_brightness(), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId::new(7)), "Card(7)");
        assert_eq!(Rejection::SelectionFull.to_string(), "two cards already selected");
    }
}
