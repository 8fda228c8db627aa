//! Presentation surface: the counters and the win banner.

/// Numeric displays plus the win banner and replay control.
pub trait Presenter {
    fn show_pairs_found(&mut self, pairs: u32);

    fn show_pair_total(&mut self, pairs: u32);

    fn show_attempts(&mut self, attempts: u32);

    /// Show or hide the win banner together with the replay control.
    fn set_win_visible(&mut self, visible: bool);
}
