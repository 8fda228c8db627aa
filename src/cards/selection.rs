//! Cards turned face up and awaiting evaluation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::CardId;

/// Most cards that can be selected at once.
pub const MAX_SELECTION: usize = 2;

/// Up to two selected cards, in click order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    cards: SmallVec<[CardId; MAX_SELECTION]>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// No further card may be chosen until the selection is cleared.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_SELECTION
    }

    /// Add a card. Returns `false` (and changes nothing) when full.
    pub fn push(&mut self, card: CardId) -> bool {
        if self.is_full() {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Both selected cards, once two have been chosen.
    #[must_use]
    pub fn pair(&self) -> Option<(CardId, CardId)> {
        match self.cards.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// Empty the selection. Clearing an empty selection is a no-op.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut selection = Selection::new();

        assert!(selection.push(CardId::new(1)));
        assert!(selection.pair().is_none());
        assert!(selection.push(CardId::new(2)));
        assert!(selection.is_full());
        assert_eq!(selection.pair(), Some((CardId::new(1), CardId::new(2))));

        assert!(!selection.push(CardId::new(3)));
        assert_eq!(selection.len(), 2);
        assert!(!selection.contains(CardId::new(3)));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut selection = Selection::new();
        selection.push(CardId::new(1));

        selection.clear();
        assert!(selection.is_empty());
        selection.clear();
        assert!(selection.is_empty());
    }
}
