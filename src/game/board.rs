/// Number of same-player cells in a line needed to win.
pub const CONNECT: usize = 4;

/// Step directions `(dy, dx)` for a line starting at a cell: horizontal,
/// vertical, diagonal down-right and diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Fixed-size grid of cells, each empty or owned by a player token.
/// Row 0 is the top, row `height - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<P> {
    height: usize,
    width: usize,
    /// Row-major cell storage (`row * width + column`)
    cells: Vec<Option<P>>,
}

impl<P: Clone + PartialEq> Grid<P> {
    /// Create an all-empty grid.
    ///
    /// Panics if `height * width` cells cannot be allocated; see `try_new`.
    pub fn new(height: usize, width: usize) -> Self {
        Grid {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    /// Create an all-empty grid, or `None` if the cell count overflows or
    /// cannot be allocated
    pub fn try_new(height: usize, width: usize) -> Option<Self> {
        let len = height.checked_mul(width)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, None);
        Some(Grid {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.height && column < self.width {
            Some(row * self.width + column)
        } else {
            None
        }
    }

    /// Get the owner of a cell, `None` if empty or out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<&P> {
        self.index(row, column)
            .and_then(|idx| self.cells[idx].as_ref())
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<P>]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Lowest empty row in a column, or `None` if the column is full or
    /// out of range
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + column].is_none())
    }

    pub(crate) fn place(&mut self, row: usize, column: usize, player: P) {
        let idx = self.index(row, column);
        debug_assert!(idx.is_some(), "cell ({row}, {column}) out of bounds");
        if let Some(idx) = idx {
            debug_assert!(self.cells[idx].is_none(), "cell ({row}, {column}) already taken");
            self.cells[idx] = Some(player);
        }
    }

    /// Check if a column has no empty row left (out-of-range columns count
    /// as full)
    pub fn is_column_full(&self, column: usize) -> bool {
        self.landing_row(column).is_none()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Count of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Scan every cell as a potential line start and report whether `player`
    /// owns four in-bounds cells in a row in any direction.
    pub fn has_four_in_a_row(&self, player: &P) -> bool {
        (0..self.height).any(|y| {
            (0..self.width).any(|x| {
                DIRECTIONS
                    .iter()
                    .any(|&(dy, dx)| self.line_owned_by(y, x, dy, dx, player))
            })
        })
    }

    fn line_owned_by(&self, y: usize, x: usize, dy: isize, dx: isize, player: &P) -> bool {
        (0..CONNECT as isize).all(|i| {
            let row = y as isize + dy * i;
            let column = x as isize + dx * i;
            row >= 0
                && column >= 0
                && self.get(row as usize, column as usize) == Some(player)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(height: usize, width: usize, owned: &[(usize, usize)]) -> Grid<u8> {
        let mut grid = Grid::new(height, width);
        for &(row, column) in owned {
            grid.place(row, column, 1);
        }
        grid
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid: Grid<u8> = Grid::new(6, 7);
        assert_eq!(grid.rows().count(), 6);
        for row in grid.rows() {
            assert_eq!(row.len(), 7);
            assert!(row.iter().all(Option::is_none));
        }
        assert_eq!(grid.occupied(), 0);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_landing_row_fills_bottom_up() {
        let mut grid: Grid<u8> = Grid::new(3, 2);
        assert_eq!(grid.landing_row(1), Some(2));
        grid.place(2, 1, 1);
        assert_eq!(grid.landing_row(1), Some(1));
        grid.place(1, 1, 2);
        grid.place(0, 1, 1);
        assert_eq!(grid.landing_row(1), None);
        assert!(grid.is_column_full(1));
        assert!(!grid.is_column_full(0));
    }

    #[test]
    fn test_try_new_rejects_overflowing_size() {
        assert!(Grid::<u8>::try_new(usize::MAX, 2).is_none());
        assert!(Grid::<u8>::try_new(usize::MAX, 1).is_none());

        let grid = Grid::<u8>::try_new(6, 7).unwrap();
        assert_eq!(grid, Grid::new(6, 7));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of bounds")]
    fn test_place_out_of_bounds_panics_in_debug() {
        let mut grid: Grid<u8> = Grid::new(6, 7);
        grid.place(6, 0, 1);
    }

    #[test]
    fn test_out_of_range_column() {
        let grid: Grid<u8> = Grid::new(6, 7);
        assert_eq!(grid.landing_row(7), None);
        assert!(grid.is_column_full(7));
        assert_eq!(grid.get(0, 7), None);
        assert_eq!(grid.get(6, 0), None);
    }

    #[test]
    fn test_horizontal_line() {
        let grid = grid_with(6, 7, &[(5, 2), (5, 3), (5, 4), (5, 5)]);
        assert!(grid.has_four_in_a_row(&1));
        assert!(!grid.has_four_in_a_row(&2));
    }

    #[test]
    fn test_vertical_line() {
        let grid = grid_with(6, 7, &[(2, 6), (3, 6), (4, 6), (5, 6)]);
        assert!(grid.has_four_in_a_row(&1));
    }

    #[test]
    fn test_diagonal_down_right_line() {
        let grid = grid_with(6, 7, &[(1, 1), (2, 2), (3, 3), (4, 4)]);
        assert!(grid.has_four_in_a_row(&1));
    }

    #[test]
    fn test_diagonal_down_left_line() {
        let grid = grid_with(6, 7, &[(2, 5), (3, 4), (4, 3), (5, 2)]);
        assert!(grid.has_four_in_a_row(&1));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let grid = grid_with(6, 7, &[(5, 0), (5, 1), (5, 2), (4, 0), (3, 0)]);
        assert!(!grid.has_four_in_a_row(&1));
    }

    #[test]
    fn test_line_does_not_wrap_across_rows() {
        // Row-major neighbours at the row boundary are not a line
        let grid = grid_with(6, 7, &[(4, 5), (4, 6), (5, 0), (5, 1)]);
        assert!(!grid.has_four_in_a_row(&1));
    }

    #[test]
    fn test_grid_too_small_for_a_line() {
        let mut grid: Grid<u8> = Grid::new(3, 3);
        for row in 0..3 {
            for column in 0..3 {
                grid.place(row, column, 1);
            }
        }
        assert!(grid.is_full());
        assert!(!grid.has_four_in_a_row(&1));
    }
}
