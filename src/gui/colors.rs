//! Colors the board is drawn with.

use crate::grid::CellColor;
use eframe::egui::Color32;

/// Background of the board; colored cells blend over it like rgba over a page.
pub const BOARD_COLOR: Color32 = Color32::WHITE;
/// Cell boundary lines.
pub const GRID_LINE_COLOR: Color32 = Color32::LIGHT_GRAY;

/// The fill for a colored cell: its RGB triple at `darkness * 10%` opacity.
pub fn cell_fill(color: &CellColor) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r,
        color.g,
        color.b,
        (color.alpha() * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_alpha_tracks_darkness() {
        let mut color = CellColor {
            r: 12,
            g: 34,
            b: 56,
            darkness: 1,
        };
        assert_eq!(cell_fill(&color).a(), 26);
        color.darkness = 10;
        assert_eq!(cell_fill(&color).a(), 255);
    }
}
