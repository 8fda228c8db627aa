//! Turn controller and headless autoplay.

pub mod controller;
pub mod sim;

pub use controller::{ChooseOutcome, MemoryGame};
pub use sim::{
    play_to_completion, visible_board, MemoryStrategy, RandomStrategy, Seat, SimReport, Strategy,
};
