//! Session state: everything one round of play owns.
//!
//! A `Session` is built around a freshly dealt deck with zeroed counters
//! and is discarded wholesale on replay. It is mutated only by the turn
//! controller, from the single frame/input thread.
//!
//! ## Invariants
//!
//! - `selection.len()` is 0, 1 or 2
//! - `pairs_found <= deck.pair_count()`
//! - `attempts` grows by exactly one per completed pair of selections
//! - won ⇔ `pairs_found == deck.pair_count()`

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::anim::AnimationId;
use crate::cards::{Deck, Selection};

/// Whether play can continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Playing,
    /// Every pair has been found. Terminal until replay.
    Won,
}

/// Turn state machine, derived from the selection and status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No card selected.
    Idle,
    /// One card face up, waiting for the second.
    OneChosen,
    /// Two cards selected, flip-backs in flight.
    Evaluating,
    Won,
}

/// State of one round of play.
#[derive(Clone, Debug)]
pub struct Session {
    pub(crate) deck: Deck,
    pub(crate) selection: Selection,
    pub(crate) pairs_found: u32,
    pub(crate) attempts: u32,
    pub(crate) status: SessionStatus,
    /// Mismatch flip-backs that must complete before the selection clears.
    pub(crate) pending_conceal: SmallVec<[AnimationId; 2]>,
}

impl Session {
    /// Start a session on `deck` with zeroed counters.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            selection: Selection::new(),
            pairs_found: 0,
            attempts: 0,
            status: SessionStatus::Playing,
            pending_conceal: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn pairs_found(&self) -> u32 {
        self.pairs_found
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Total number of pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.deck.pair_count() as u32
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == SessionStatus::Won
    }

    /// Current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.is_won() {
            return TurnPhase::Won;
        }
        match self.selection.len() {
            0 => TurnPhase::Idle,
            1 => TurnPhase::OneChosen,
            _ => TurnPhase::Evaluating,
        }
    }

    /// Flip-backs still pending before the selection clears.
    #[must_use]
    pub fn pending_conceal(&self) -> &[AnimationId] {
        &self.pending_conceal
    }

    /// Consume the session, returning its deck for teardown.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId};
    use crate::surface::NodeHandle;

    fn two_card_deck() -> Deck {
        Deck::from_cards(vec![
            Card::new(CardId::new(0), "star", NodeHandle::new(0), 0.0),
            Card::new(CardId::new(1), "star", NodeHandle::new(1), 0.0),
        ])
    }

    #[test]
    fn test_new_session_is_zeroed() {
        let session = Session::new(two_card_deck());

        assert_eq!(session.pairs_found(), 0);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.pair_count(), 1);
        assert!(session.selection().is_empty());
        assert!(session.pending_conceal().is_empty());
        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_phase_follows_selection() {
        let mut session = Session::new(two_card_deck());

        session.selection.push(CardId::new(0));
        assert_eq!(session.phase(), TurnPhase::OneChosen);

        session.selection.push(CardId::new(1));
        assert_eq!(session.phase(), TurnPhase::Evaluating);

        session.status = SessionStatus::Won;
        assert_eq!(session.phase(), TurnPhase::Won);
    }

    #[test]
    fn test_into_deck() {
        let session = Session::new(two_card_deck());
        assert_eq!(session.into_deck().len(), 2);
    }
}
