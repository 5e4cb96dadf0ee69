use crate::grid::Grid;

/// Count the live cells in the 3x3 neighborhood of `(row, col)`, excluding
/// the center cell itself.
///
/// The board is bounded: positions outside `[0, rows) x [0, cols)` do not
/// exist and are never counted, so a corner cell has at most 3 candidate
/// neighbors and an edge cell at most 5. No wraparound.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    assert!(row < grid.rows(), "row is out of bounds");
    assert!(col < grid.cols(), "col is out of bounds");

    let min_row = row.saturating_sub(1);
    let max_row = (row + 1).min(grid.rows() - 1);
    let min_col = col.saturating_sub(1);
    let max_col = (col + 1).min(grid.cols() - 1);

    let mut count = 0;

    for r in min_row..=max_row {
        for c in min_col..=max_col {
            if r == row && c == col {
                continue;
            }

            if grid.is_alive(r, c) {
                count += 1;
            }
        }
    }

    count
}
