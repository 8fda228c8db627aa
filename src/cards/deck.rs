//! The deck: every card on the board, in deal order.
//!
//! Deal order is also grid order: card `i` sits in row `i / columns`,
//! column `i % columns`.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};
use crate::core::{GameRng, MotifSpec};
use crate::surface::NodeHandle;

/// Shuffled sequence of cards, exactly two per motif.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal two cards per motif and shuffle them.
    ///
    /// Ids are allocated from `next_id`, which is left pointing past the
    /// last id used. `create_node` is asked for a scene node per card
    /// (given the motif and its index in `motifs`) and `tilt` for each
    /// card's resting rotation, both in deal order.
    pub fn deal(
        motifs: &[MotifSpec],
        rng: &mut GameRng,
        next_id: &mut u32,
        mut tilt: impl FnMut() -> f64,
        mut create_node: impl FnMut(usize, &MotifSpec) -> NodeHandle,
    ) -> Self {
        let unshuffled: Vec<(usize, &MotifSpec)> =
            motifs.iter().enumerate().flat_map(|m| [m, m]).collect();
        let order = rng.shuffle_by_removal(unshuffled);

        let cards = order
            .into_iter()
            .map(|(index, motif)| {
                let id = CardId::new(*next_id);
                *next_id += 1;
                let node = create_node(index, motif);
                Card::new(id, motif.name.clone(), node, tilt())
            })
            .collect();

        Self { cards }
    }

    /// Build a deck from already-created cards, keeping their order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }

    /// Card ids in deal order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(Card::id).collect()
    }

    /// How many cards carry each motif.
    #[must_use]
    pub fn motif_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.motif()).or_insert(0) += 1;
        }
        counts
    }

    /// Have all cards been matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Tear the deck down, returning its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motifs(names: &[&str]) -> Vec<MotifSpec> {
        names.iter().map(|n| MotifSpec::named(*n)).collect()
    }

    fn deal(names: &[&str], seed: u64) -> Deck {
        let mut rng = GameRng::new(seed);
        let mut next_id = 0;
        let mut next_node = 0;
        Deck::deal(
            &motifs(names),
            &mut rng,
            &mut next_id,
            || 0.0,
            |_, _| {
                next_node += 1;
                NodeHandle::new(next_node)
            },
        )
    }

    #[test]
    fn test_deal_two_per_motif() {
        let deck = deal(&["a", "b", "c"], 42);

        assert_eq!(deck.len(), 6);
        assert_eq!(deck.pair_count(), 3);

        let counts = deck.motif_counts();
        assert_eq!(counts.len(), 3);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_deal_allocates_unique_ids() {
        let mut rng = GameRng::new(1);
        let mut next_id = 100;
        let deck = Deck::deal(&motifs(&["a", "b"]), &mut rng, &mut next_id, || 0.0, |_, _| {
            NodeHandle::new(0)
        });

        let mut ids = deck.ids();
        ids.sort();
        assert_eq!(ids, vec![CardId(100), CardId(101), CardId(102), CardId(103)]);
        assert_eq!(next_id, 104);
    }

    #[test]
    fn test_deal_is_deterministic() {
        let order = |deck: Deck| deck.iter().map(|c| c.motif().to_string()).collect::<Vec<_>>();
        assert_eq!(order(deal(&["a", "b", "c", "d"], 9)), order(deal(&["a", "b", "c", "d"], 9)));
    }

    #[test]
    fn test_deal_uses_tilt_and_nodes() {
        let mut rng = GameRng::new(5);
        let mut next_id = 0;
        let mut seen = Vec::new();
        let specs = motifs(&["a", "b"]);
        let deck = Deck::deal(
            &specs,
            &mut rng,
            &mut next_id,
            || 0.25,
            |index, m| {
                assert_eq!(&specs[index], m);
                seen.push(m.name.clone());
                NodeHandle::new(seen.len() as u32)
            },
        );

        assert_eq!(seen.len(), 4);
        assert!(deck.iter().all(|c| c.transform().rotation == 0.25));
        for (card, name) in deck.iter().zip(&seen) {
            assert_eq!(card.motif(), name);
        }
    }

    #[test]
    fn test_lookup() {
        let deck = deal(&["a", "b"], 3);
        let id = deck.cards()[2].id();

        assert_eq!(deck.get(id).map(Card::id), Some(id));
        assert!(deck.get(CardId::new(999)).is_none());
    }

    #[test]
    fn test_all_matched() {
        let mut deck = deal(&["a"], 3);
        assert!(!deck.all_matched());
        deck.iter_mut().for_each(Card::mark_matched);
        assert!(deck.all_matched());
    }
}
