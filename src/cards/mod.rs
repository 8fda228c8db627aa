//! Card system: cards, the deck and the selection.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a dealt card
//! - `Card`: Facing, busy state, matched flag and visual state
//! - `Deck`: Shuffled cards, exactly two per motif
//! - `Selection`: Up to two face-up cards awaiting evaluation

pub mod card;
pub mod deck;
pub mod selection;

pub use card::{Card, CardId, CardView, Facing, Rejection, Transform, REST_LIFT, REST_SCALE};
pub use deck::Deck;
pub use selection::{Selection, MAX_SELECTION};
