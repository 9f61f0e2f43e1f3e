//! The sketch board model: an explicit side-table of per-cell color records.

use rand::Rng;

/// Total edge length of the board in logical pixels, regardless of cell count.
pub const BOARD_SIDE_PX: f32 = 960.0;
/// Side length of the grid created at startup.
pub const DEFAULT_GRID_SIDE: usize = 16;
/// Largest side length the size prompt will accept.
pub const MAX_GRID_SIDE: usize = 100;
/// Hover count at which a cell stops darkening.
pub const MAX_DARKNESS: u8 = 10;

/// Color record for a cell that has been hovered at least once.
///
/// The RGB triple is rolled once, on the first hover, and never changes for the
/// rest of the cell's lifetime; only `darkness` moves, up by one per pointer
/// enter until it reaches [`MAX_DARKNESS`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CellColor {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
    /// How many times the cell has been entered, in `1..=MAX_DARKNESS`.
    pub darkness: u8,
}

impl CellColor {
    /// Rolls a fresh color: each channel independently uniform in 0-255.
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
            darkness: 1,
        }
    }

    /// The opacity this cell renders at: 10% per darkness step.
    pub fn alpha(&self) -> f32 {
        f32::from(self.darkness) * 0.1
    }
}

/// A `side` x `side` board of hoverable cells.
///
/// Cell color state lives in a row-major side-table rather than on any rendered
/// object; slot `row * side + col` is `None` until that cell's first hover.
pub struct SketchGrid {
    side: usize,
    cell_edge: f32,
    cells: Vec<Option<CellColor>>,
}

impl SketchGrid {
    /// Creates a board with `side * side` uncolored cells.
    ///
    /// A `side` of 0 is accepted and produces a board with no cells; the size
    /// prompt rejects such input before it gets here.
    pub fn new(side: usize) -> Self {
        let mut grid = Self {
            side: 0,
            cell_edge: 0.0,
            cells: Vec::new(),
        };
        grid.rebuild(side);
        grid
    }

    /// Tears down every cell and rebuilds the board at the new side length.
    ///
    /// Nothing survives a rebuild: all color records from the previous build
    /// are dropped along with their slots.
    pub fn rebuild(&mut self, side: usize) {
        self.side = side;
        self.cell_edge = if side == 0 {
            0.0
        } else {
            BOARD_SIDE_PX / side as f32
        };
        self.cells = vec![None; side * side];
    }

    /// Side length of the board, in cells.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Edge length of one cell in logical pixels, [`BOARD_SIDE_PX`] / side.
    pub fn cell_edge(&self) -> f32 {
        self.cell_edge
    }

    /// Total number of cell slots.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The color record at `(row, col)`, if that cell has been hovered.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<CellColor> {
        if row >= self.side || col >= self.side {
            return None;
        }
        self.cells[row * self.side + col]
    }

    /// Advances the hover state machine for the cell at a row-major index.
    ///
    /// An uncolored cell gets a random color at darkness 1; a colored cell
    /// darkens by one step, saturating at [`MAX_DARKNESS`]. Indices outside
    /// the board are ignored.
    pub fn hover_enter(&mut self, index: usize, rng: &mut impl Rng) {
        let Some(slot) = self.cells.get_mut(index) else {
            return;
        };
        match slot {
            None => *slot = Some(CellColor::random(rng)),
            Some(color) => {
                if color.darkness < MAX_DARKNESS {
                    color.darkness += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xE7C4)
    }

    #[test]
    fn build_produces_n_squared_cells() {
        for side in [1, 2, 16, 77, MAX_GRID_SIDE] {
            let grid = SketchGrid::new(side);
            assert_eq!(grid.cell_count(), side * side);
            assert_eq!(grid.cell_edge(), BOARD_SIDE_PX / side as f32);
        }
    }

    #[test]
    fn build_zero_is_an_empty_board() {
        let grid = SketchGrid::new(0);
        assert_eq!(grid.cell_count(), 0);
        assert_eq!(grid.cell_edge(), 0.0);
    }

    #[test]
    fn rebuild_leaves_no_residue() {
        let mut rng = rng();
        let mut grid = SketchGrid::new(4);
        for index in 0..16 {
            grid.hover_enter(index, &mut rng);
        }
        grid.rebuild(3);
        assert_eq!(grid.cell_count(), 9);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(grid.cell_at(row, col), None);
            }
        }
    }

    #[test]
    fn first_hover_assigns_color_at_darkness_one() {
        let mut rng = rng();
        let mut grid = SketchGrid::new(16);
        grid.hover_enter(5, &mut rng);
        let color = grid.cell_at(0, 5).unwrap();
        assert_eq!(color.darkness, 1);
        assert_eq!(color.alpha(), 0.1);
    }

    #[test]
    fn color_is_rolled_once_and_kept() {
        let mut rng = rng();
        let mut grid = SketchGrid::new(2);
        grid.hover_enter(3, &mut rng);
        let first = grid.cell_at(1, 1).unwrap();
        for _ in 0..20 {
            grid.hover_enter(3, &mut rng);
        }
        let last = grid.cell_at(1, 1).unwrap();
        assert_eq!((first.r, first.g, first.b), (last.r, last.g, last.b));
    }

    #[test]
    fn darkness_steps_by_one_and_saturates() {
        let mut rng = rng();
        let mut grid = SketchGrid::new(1);
        for expected in 1..=MAX_DARKNESS {
            grid.hover_enter(0, &mut rng);
            let color = grid.cell_at(0, 0).unwrap();
            assert_eq!(color.darkness, expected);
            assert_eq!(color.alpha(), f32::from(expected) * 0.1);
        }
        grid.hover_enter(0, &mut rng);
        assert_eq!(grid.cell_at(0, 0).unwrap().darkness, MAX_DARKNESS);
    }

    #[test]
    fn hovering_one_cell_leaves_others_untouched() {
        let mut rng = rng();
        let mut grid = SketchGrid::new(3);
        grid.hover_enter(4, &mut rng);
        grid.hover_enter(4, &mut rng);
        for index in 0..9 {
            let (row, col) = (index / 3, index % 3);
            if index == 4 {
                assert_eq!(grid.cell_at(row, col).unwrap().darkness, 2);
            } else {
                assert_eq!(grid.cell_at(row, col), None);
            }
        }
    }

    #[test]
    fn out_of_range_hover_is_ignored() {
        let mut rng = rng();
        let mut grid = SketchGrid::new(2);
        grid.hover_enter(4, &mut rng);
        for index in 0..4 {
            assert_eq!(grid.cell_at(index / 2, index % 2), None);
        }
    }
}
