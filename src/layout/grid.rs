//! Responsive grid geometry.
//!
//! Card height is chosen so the rows and their gutters exactly fill the
//! canvas height minus a padding band at the top and bottom. Width follows
//! from the fixed card ratio, and the whole block of columns is centered
//! horizontally. Rectangles are center-anchored.
//!
//! Everything here is a pure function of `(Viewport, GridGeometry)`.

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Rendered canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Canvas for a browser window: a share of the width, the full height.
    #[must_use]
    pub fn from_window(window_width: f64, window_height: f64, width_ratio: f64) -> Self {
        Self {
            width: window_width * width_ratio,
            height: window_height,
        }
    }
}

/// A card rectangle. `x`/`y` are the center, not the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Grid parameters derived from the deck size and configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub columns: usize,
    pub rows: usize,
    pub gutter: f64,
    pub card_ratio: f64,
    pub vertical_padding_ratio: f64,
}

impl GridGeometry {
    /// Grid with enough rows for `card_count` cards.
    ///
    /// `columns` must be at least 1.
    #[must_use]
    pub fn for_cards(card_count: usize, columns: usize, gutter: f64, card_ratio: f64) -> Self {
        Self {
            columns,
            rows: card_count.div_ceil(columns),
            gutter,
            card_ratio,
            vertical_padding_ratio: 0.15,
        }
    }

    /// Grid for the board described by `config`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            columns: config.columns,
            rows: config.rows(),
            gutter: config.gutter,
            card_ratio: config.card_ratio,
            vertical_padding_ratio: config.vertical_padding_ratio,
        }
    }

    /// Padding above the first row (and below the last), in pixels.
    #[must_use]
    pub fn vertical_padding(&self, viewport: Viewport) -> f64 {
        viewport.height * self.vertical_padding_ratio
    }

    /// Card width and height for this viewport.
    ///
    /// Clamped to zero when the viewport is too short to fit the gutters.
    #[must_use]
    pub fn card_size(&self, viewport: Viewport) -> (f64, f64) {
        if self.rows == 0 {
            return (0.0, 0.0);
        }
        let rows = self.rows as f64;
        let usable = viewport.height - 2.0 * self.vertical_padding(viewport);
        let height = ((usable - (rows - 1.0) * self.gutter) / rows).max(0.0);
        (height * self.card_ratio, height)
    }

    /// Left margin that centers the block of columns.
    ///
    /// Negative when the columns are wider than the viewport.
    #[must_use]
    pub fn horizontal_padding(&self, viewport: Viewport) -> f64 {
        let (card_width, _) = self.card_size(viewport);
        let columns = self.columns as f64;
        let block = columns * card_width + (columns - 1.0).max(0.0) * self.gutter;
        (viewport.width - block) / 2.0
    }

    /// Rectangle for the cell at (`row`, `column`).
    #[must_use]
    pub fn rect(&self, viewport: Viewport, row: usize, column: usize) -> Rect {
        let (width, height) = self.card_size(viewport);
        let left = self.horizontal_padding(viewport);
        let top = self.vertical_padding(viewport);

        Rect {
            x: left + column as f64 * (width + self.gutter) + width / 2.0,
            y: top + row as f64 * (height + self.gutter) + height / 2.0,
            width,
            height,
        }
    }

    /// Rectangle for the `index`-th card in row-major order.
    #[must_use]
    pub fn rect_for_index(&self, viewport: Viewport, index: usize) -> Rect {
        self.rect(viewport, index / self.columns, index % self.columns)
    }

    /// Rectangles for the first `count` cells in row-major order.
    #[must_use]
    pub fn layout(&self, viewport: Viewport, count: usize) -> Vec<Rect> {
        (0..count).map(|i| self.rect_for_index(viewport, i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_viewport_from_window() {
        let viewport = Viewport::from_window(1000.0, 800.0, 0.7);
        assert!(approx(viewport.width, 700.0));
        assert_eq!(viewport.height, 800.0);
    }

    #[test]
    fn test_card_size_fills_height() {
        // 3 rows, 20px gutter, 1000px tall: 150px padding each side,
        // 700 usable, minus 40 gutter = 660 / 3 = 220.
        let grid = GridGeometry::for_cards(12, 4, 20.0, 0.5);
        let (w, h) = grid.card_size(Viewport::new(1200.0, 1000.0));
        assert!(approx(h, 220.0));
        assert!(approx(w, 110.0));
    }

    #[test]
    fn test_rect_centers() {
        let grid = GridGeometry::for_cards(12, 4, 20.0, 0.5);
        let viewport = Viewport::new(1200.0, 1000.0);

        // Block width: 4 * 110 + 3 * 20 = 500 -> padding 350.
        assert!(approx(grid.horizontal_padding(viewport), 350.0));

        let first = grid.rect(viewport, 0, 0);
        assert!(approx(first.x, 350.0 + 55.0));
        assert!(approx(first.y, 150.0 + 110.0));

        let last = grid.rect(viewport, 2, 3);
        assert!(approx(last.x, 350.0 + 3.0 * 130.0 + 55.0));
        assert!(approx(last.y, 150.0 + 2.0 * 240.0 + 110.0));
    }

    #[test]
    fn test_rect_for_index_is_row_major() {
        let grid = GridGeometry::for_cards(12, 4, 20.0, 0.5);
        let viewport = Viewport::new(1200.0, 1000.0);

        assert_eq!(grid.rect_for_index(viewport, 5), grid.rect(viewport, 1, 1));
        assert_eq!(grid.layout(viewport, 12).len(), 12);
    }

    #[test]
    fn test_tiny_viewport_clamps_to_zero() {
        let grid = GridGeometry::for_cards(12, 4, 20.0, 0.5);
        let (w, h) = grid.card_size(Viewport::new(100.0, 10.0));
        assert_eq!(w, 0.0);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_single_column_has_no_gutter() {
        let grid = GridGeometry::for_cards(2, 1, 20.0, 1.0);
        let viewport = Viewport::new(500.0, 1000.0);
        let (w, _) = grid.card_size(viewport);
        assert!(approx(grid.horizontal_padding(viewport), (500.0 - w) / 2.0));
    }

    #[test]
    fn test_from_config() {
        let grid = GridGeometry::from_config(&GameConfig::default());
        assert_eq!(grid.columns, 4);
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.gutter, 20.0);
        assert_eq!(grid.vertical_padding_ratio, 0.15);
    }
}
