//! Headless autoplay.
//!
//! Strategies see only what a player sees: which cards are face up, which
//! are selected and which would accept a click. Face-down motifs are never
//! exposed.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::controller::MemoryGame;
use crate::cards::CardId;
use crate::core::{GameRng, Session};
use crate::surface::{Presenter, Scene};

/// One card as a player sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seat {
    pub id: CardId,
    /// Motif, if the card is currently face up.
    pub revealed: Option<String>,
    pub selected: bool,
    pub selectable: bool,
}

/// The visible board, in deal order.
#[must_use]
pub fn visible_board(session: &Session) -> Vec<Seat> {
    let selected = session.selection().len();
    session
        .deck()
        .iter()
        .map(|card| Seat {
            id: card.id(),
            revealed: card.is_showing_front().then(|| card.motif().to_string()),
            selected: session.selection().contains(card.id()),
            selectable: !session.is_won() && card.accepts_click(selected).is_ok(),
        })
        .collect()
}

/// Chooses which card to click.
pub trait Strategy {
    /// Called every frame with the visible board.
    fn observe(&mut self, _board: &[Seat]) {}

    /// Pick a card to click this frame, or `None` to wait.
    fn pick(&mut self, board: &[Seat], rng: &mut GameRng) -> Option<CardId>;
}

impl<T: Strategy + ?Sized> Strategy for Box<T> {
    fn observe(&mut self, board: &[Seat]) {
        (**self).observe(board);
    }

    fn pick(&mut self, board: &[Seat], rng: &mut GameRng) -> Option<CardId> {
        (**self).pick(board, rng)
    }
}

/// Clicks a uniformly random selectable card.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn pick(&mut self, board: &[Seat], rng: &mut GameRng) -> Option<CardId> {
        let choices: Vec<CardId> = board.iter().filter(|s| s.selectable).map(|s| s.id).collect();
        if choices.is_empty() {
            return None;
        }
        Some(choices[rng.gen_range_usize(0..choices.len())])
    }
}

/// Remembers every motif it has seen and plays known pairs first.
#[derive(Clone, Debug, Default)]
pub struct MemoryStrategy {
    seen: FxHashMap<CardId, String>,
}

impl MemoryStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn known_partner(&self, board: &[Seat], motif: &str, except: CardId) -> Option<CardId> {
        board
            .iter()
            .filter(|s| s.selectable && s.id != except)
            .find(|s| self.seen.get(&s.id).is_some_and(|m| m == motif))
            .map(|s| s.id)
    }

    fn unknown(&self, board: &[Seat], rng: &mut GameRng) -> Option<CardId> {
        let unknown: Vec<CardId> = board
            .iter()
            .filter(|s| s.selectable && !self.seen.contains_key(&s.id))
            .map(|s| s.id)
            .collect();
        if unknown.is_empty() {
            return RandomStrategy.pick(board, rng);
        }
        Some(unknown[rng.gen_range_usize(0..unknown.len())])
    }
}

impl Strategy for MemoryStrategy {
    fn observe(&mut self, board: &[Seat]) {
        for seat in board {
            if let Some(motif) = &seat.revealed {
                self.seen.insert(seat.id, motif.clone());
            }
        }
    }

    fn pick(&mut self, board: &[Seat], rng: &mut GameRng) -> Option<CardId> {
        if let Some(first) = board.iter().find(|s| s.selected) {
            // Wait for the first card to show its face.
            let motif = first.revealed.as_deref()?;
            return self
                .known_partner(board, motif, first.id)
                .or_else(|| self.unknown(board, rng));
        }

        let known_pair = board.iter().filter(|s| s.selectable).find_map(|s| {
            let motif = self.seen.get(&s.id)?;
            self.known_partner(board, motif, s.id).map(|_| s.id)
        });
        known_pair.or_else(|| self.unknown(board, rng))
    }
}

/// Outcome of an autoplayed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimReport {
    pub won: bool,
    pub attempts: u32,
    pub pairs_found: u32,
    pub frames: usize,
}

/// Play until the game is won or `max_frames` frames have run.
///
/// Each frame the strategy observes the board, may click one card, and
/// the game advances by `frame_ms`.
pub fn play_to_completion<S: Scene, P: Presenter>(
    game: &mut MemoryGame<S, P>,
    strategy: &mut impl Strategy,
    rng: &mut GameRng,
    frame_ms: f64,
    max_frames: usize,
) -> SimReport {
    let mut frames = 0;

    while frames < max_frames && !game.session().is_won() {
        let board = visible_board(game.session());
        strategy.observe(&board);

        if let Some(id) = strategy.pick(&board, rng) {
            let outcome = game.choose_card(id);
            debug!(card = %id, ?outcome, frame = frames, "autoplay click");
        }

        game.frame(frame_ms);
        frames += 1;
    }

    let session = game.session();
    SimReport {
        won: session.is_won(),
        attempts: session.attempts(),
        pairs_found: session.pairs_found(),
        frames,
    }
}
