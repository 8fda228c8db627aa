//! Deck dealing properties.

use std::collections::BTreeSet;

use memory_match::cards::{CardId, Deck};
use memory_match::core::{GameConfig, GameRng, MotifSpec};
use memory_match::surface::NodeHandle;
use proptest::prelude::*;

fn motifs(count: usize) -> Vec<MotifSpec> {
    (0..count).map(|i| MotifSpec::named(format!("motif{}", i))).collect()
}

fn deal(motifs: &[MotifSpec], seed: u64, next_id: &mut u32) -> Deck {
    let mut rng = GameRng::new(seed);
    let mut node = 0;
    Deck::deal(motifs, &mut rng, next_id, || 0.0, |_, _| {
        node += 1;
        NodeHandle::new(node)
    })
}

proptest! {
    #[test]
    fn test_shuffle_is_permutation(
        seed in any::<u64>(),
        items in prop::collection::vec(any::<u16>(), 0..40),
    ) {
        let mut rng = GameRng::new(seed);
        let mut shuffled = rng.shuffle_by_removal(items.clone());

        let mut expected = items;
        expected.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_deal_has_two_of_each_motif(seed in any::<u64>(), count in 1usize..20) {
        let specs = motifs(count);
        let mut next_id = 0;
        let deck = deal(&specs, seed, &mut next_id);

        prop_assert_eq!(deck.len(), 2 * count);
        prop_assert_eq!(deck.pair_count(), count);

        let counts = deck.motif_counts();
        prop_assert_eq!(counts.len(), count);
        for spec in &specs {
            prop_assert_eq!(counts.get(spec.name.as_str()).copied(), Some(2));
        }
    }

    #[test]
    fn test_deal_ids_unique_and_fresh(
        seed in any::<u64>(),
        count in 1usize..12,
        start in 0u32..1000,
    ) {
        let specs = motifs(count);
        let mut next_id = start;
        let first = deal(&specs, seed, &mut next_id);
        let second = deal(&specs, seed.wrapping_add(1), &mut next_id);

        let ids: BTreeSet<CardId> = first.ids().into_iter().chain(second.ids()).collect();
        prop_assert_eq!(ids.len(), 4 * count);
        prop_assert_eq!(next_id, start + 4 * count as u32);
        prop_assert!(first
            .iter()
            .all(|c| !c.is_showing_front() && !c.is_matched() && !c.is_animating()));
    }

    #[test]
    fn test_same_seed_same_order(seed in any::<u64>(), count in 1usize..10) {
        let specs = motifs(count);
        let order = |deck: &Deck| deck.iter().map(|c| c.motif().to_string()).collect::<Vec<_>>();

        prop_assert_eq!(order(&deal(&specs, seed, &mut 0)), order(&deal(&specs, seed, &mut 0)));
    }

    #[test]
    fn test_config_rows_cover_cards(pairs in 1usize..30, columns in 1usize..10) {
        let config = GameConfig::default()
            .with_motifs(motifs(pairs))
            .with_columns(columns);

        prop_assert!(config.validate().is_ok());
        prop_assert!(config.rows() * columns >= config.card_count());
        prop_assert!((config.rows() - 1) * columns < config.card_count());
    }
}

#[test]
fn test_every_arrangement_reachable() {
    // Two pairs can be arranged 4!/(2!2!) = 6 ways; all of them show up.
    let specs = motifs(2);
    let mut seen = BTreeSet::new();
    for seed in 0..500 {
        let deck = deal(&specs, seed, &mut 0);
        seen.insert(deck.iter().map(|c| c.motif().to_string()).collect::<Vec<_>>());
    }
    assert_eq!(seen.len(), 6);
}
