//! Turn controller.
//!
//! `MemoryGame` owns the session, the animator and the collaborators, and
//! is the only code that mutates game state. Input (clicks, hover, resize,
//! replay) and the per-frame tick all arrive on the same thread.
//!
//! ## Turn flow
//!
//! 1. A click passes the card's acceptance check and the card flips face up.
//! 2. The second click counts an attempt and compares motifs:
//!    - match: both cards are marked matched, wiggle after a short delay,
//!      and the selection clears at once. Finding the last pair wins.
//!    - mismatch: both cards flip back after `conceal_delay_ms`; the
//!      selection clears once both flip-backs have completed.
//!
//! ## Frame order
//!
//! `frame` lays out every card, advances animations (running completion
//! handling), then syncs every card to the scene.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::anim::Animator;
use crate::cards::{Card, CardId, Deck, Rejection};
use crate::core::{GameConfig, GameError, GameRng, Session, SessionStatus, TurnPhase};
use crate::layout::{GridGeometry, Rect, Viewport};
use crate::surface::{AssetLoader, Presenter, Scene, TextureSet};

/// Result of a click on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChooseOutcome {
    /// First card of a pair turned face up.
    FirstChosen,
    /// Second card matched the first.
    Matched,
    /// Second card matched the first and it was the last pair.
    Won,
    /// Second card did not match; both will flip back.
    Mismatched,
    /// The click was refused; nothing changed.
    Rejected(Rejection),
}

impl ChooseOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        !matches!(self, ChooseOutcome::Rejected(_))
    }
}

/// A memory game wired to its renderer and presentation surface.
pub struct MemoryGame<S: Scene, P: Presenter> {
    config: GameConfig,
    grid: GridGeometry,
    viewport: Viewport,
    textures: TextureSet,
    scene: S,
    presenter: P,
    deal_rng: GameRng,
    tilt_rng: GameRng,
    next_card_id: u32,
    animator: Animator,
    session: Session,
}

impl<S: Scene, P: Presenter> MemoryGame<S, P> {
    /// Validate the configuration, load every texture and deal the first deck.
    ///
    /// Fails if the configuration is invalid or any texture is missing.
    /// The viewport starts empty; call `resize` or `set_viewport` before
    /// the first frame.
    pub fn new(
        config: GameConfig,
        seed: u64,
        loader: &mut impl AssetLoader,
        scene: S,
        presenter: P,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let textures = TextureSet::load(loader, &config)?;
        let rng = GameRng::new(seed);

        let mut game = Self {
            grid: GridGeometry::from_config(&config),
            viewport: Viewport::new(0.0, 0.0),
            textures,
            scene,
            presenter,
            deal_rng: rng.for_context("deal"),
            tilt_rng: rng.for_context("tilt"),
            next_card_id: 0,
            animator: Animator::new(config.swing_repeats),
            session: Session::new(Deck::default()),
            config,
        };
        game.start_session();
        Ok(game)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.session.deck.get(id)
    }

    #[must_use]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn grid(&self) -> GridGeometry {
        self.grid
    }

    /// Rectangles for every card at the current viewport, in deal order.
    #[must_use]
    pub fn layout(&self) -> Vec<Rect> {
        self.grid.layout(self.viewport, self.session.deck.len())
    }

    // === Input ===

    /// The browser window changed size. Takes effect on the next frame.
    pub fn resize(&mut self, window_width: f64, window_height: f64) {
        self.set_viewport(Viewport::from_window(
            window_width,
            window_height,
            self.config.canvas_width_ratio,
        ));
    }

    /// Set the canvas size directly.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        debug!(width = viewport.width, height = viewport.height, "viewport changed");
        self.viewport = viewport;
    }

    /// Pointer entered a card. Cosmetic only.
    pub fn pointer_enter(&mut self, id: CardId) {
        let brightness = self.config.hover_brightness;
        if let Some(card) = self.session.deck.get_mut(id) {
            card.hover(brightness);
        }
    }

    /// Pointer left a card. Cosmetic only.
    pub fn pointer_leave(&mut self, id: CardId) {
        if let Some(card) = self.session.deck.get_mut(id) {
            card.unhover();
        }
    }

    /// A card was clicked.
    pub fn choose_card(&mut self, id: CardId) -> ChooseOutcome {
        if self.session.status == SessionStatus::Won {
            debug!(card = %id, "click ignored: game over");
            return ChooseOutcome::Rejected(Rejection::GameOver);
        }

        let selected = self.session.selection.len();
        let Some(card) = self.session.deck.get_mut(id) else {
            debug!(card = %id, "click ignored: unknown card");
            return ChooseOutcome::Rejected(Rejection::UnknownCard);
        };
        if let Err(reason) = card.accepts_click(selected) {
            debug!(card = %id, %reason, "click ignored");
            return ChooseOutcome::Rejected(reason);
        }

        self.animator.flip(card, 0.0);
        self.session.selection.push(id);
        debug!(card = %id, motif = card.motif(), "card chosen");

        let Some((first, second)) = self.session.selection.pair() else {
            return ChooseOutcome::FirstChosen;
        };

        self.session.attempts += 1;
        self.presenter.show_attempts(self.session.attempts);

        let same = match (self.session.deck.get(first), self.session.deck.get(second)) {
            (Some(a), Some(b)) => a.has_same_motif(b),
            _ => false,
        };

        if same {
            self.resolve_match(first, second)
        } else {
            self.resolve_mismatch(first, second)
        }
    }

    /// Discard the current deck and start over with a fresh shuffle.
    pub fn replay(&mut self) {
        info!(
            attempts = self.session.attempts,
            pairs_found = self.session.pairs_found,
            "replay requested"
        );
        self.start_session();
    }

    // === Frame ===

    /// Advance the game by `dt` ms: layout, animations, scene sync.
    pub fn frame(&mut self, dt: f64) {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            warn!(dt, "ignoring invalid frame delta");
            0.0
        };

        let (grid, viewport) = (self.grid, self.viewport);
        for (index, card) in self.session.deck.iter_mut().enumerate() {
            card.place(grid.rect_for_index(viewport, index));
        }

        let Session {
            deck,
            selection,
            pending_conceal,
            ..
        } = &mut self.session;

        self.animator.tick(deck, dt, |anim, card| {
            let Some(pos) = pending_conceal.iter().position(|&p| p == anim) else {
                return;
            };
            pending_conceal.remove(pos);
            debug!(%card, remaining = pending_conceal.len(), "flip-back finished");
            if pending_conceal.is_empty() {
                selection.clear();
            }
        });
        debug_assert!(self.session.pending_conceal.iter().all(|&id| self.animator.is_running(id)));

        for card in self.session.deck.iter() {
            self.scene.sync_card(card.node(), &card.view());
        }
    }

    // === Internals ===

    fn resolve_match(&mut self, first: CardId, second: CardId) -> ChooseOutcome {
        let delay = self.config.celebrate_delay_ms;
        for id in [first, second] {
            if let Some(card) = self.session.deck.get_mut(id) {
                card.mark_matched();
                self.animator.funky_rotate(card, delay);
            }
        }

        self.session.pairs_found += 1;
        self.session.selection.clear();
        self.presenter.show_pairs_found(self.session.pairs_found);
        info!(
            pairs_found = self.session.pairs_found,
            attempts = self.session.attempts,
            "pair found"
        );

        if self.session.pairs_found == self.session.pair_count() {
            self.win();
            return ChooseOutcome::Won;
        }
        ChooseOutcome::Matched
    }

    fn resolve_mismatch(&mut self, first: CardId, second: CardId) -> ChooseOutcome {
        let delay = self.config.conceal_delay_ms;
        for id in [first, second] {
            if let Some(card) = self.session.deck.get_mut(id) {
                let anim = self.animator.flip(card, delay);
                self.session.pending_conceal.push(anim);
            }
        }
        info!(attempts = self.session.attempts, "no match");
        ChooseOutcome::Mismatched
    }

    fn win(&mut self) {
        debug_assert!(self.session.deck.all_matched());
        self.session.status = SessionStatus::Won;
        self.presenter.set_win_visible(true);
        info!(attempts = self.session.attempts, "all pairs found");
    }

    fn start_session(&mut self) {
        self.animator.clear();

        let old = std::mem::replace(&mut self.session, Session::new(Deck::default()));
        for card in old.into_deck().into_cards() {
            self.scene.destroy_node(card.node());
        }

        // Fronts were loaded from this same motif list.
        debug_assert_eq!(self.textures.front_count(), self.config.motifs.len());

        let max_tilt = self.config.max_tilt;
        let tilt_rng = &mut self.tilt_rng;
        let textures = &self.textures;
        let scene = &mut self.scene;

        let deck = Deck::deal(
            &self.config.motifs,
            &mut self.deal_rng,
            &mut self.next_card_id,
            || tilt_rng.gen_unit() * max_tilt - max_tilt / 2.0,
            |index, _| scene.create_card_node(textures.front(index), textures.back()),
        );
        self.session = Session::new(deck);

        self.presenter.show_pairs_found(0);
        self.presenter.show_pair_total(self.session.pair_count());
        self.presenter.show_attempts(0);
        self.presenter.set_win_visible(false);

        debug!(cards = self.session.deck.len(), "deck dealt");
    }
}
