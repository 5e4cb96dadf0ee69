use crate::grid::Grid;
use crate::neighbors::live_neighbors;

/// Produce the next generation of a board.
///
/// For every cell the classic rules apply, first match wins:
///
/// 1. a live cell with fewer than two live neighbors dies (underpopulation)
/// 2. a live cell with two or three live neighbors lives on
/// 3. a live cell with more than three live neighbors dies (overpopulation)
/// 4. a dead cell with exactly three live neighbors becomes alive (reproduction)
/// 5. every other cell stays dead
///
/// Pure function of its input; the returned grid has the same dimensions.
pub fn step(grid: &Grid) -> Grid {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut cells = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let neighbors = live_neighbors(grid, row, col);

            let flag = match (grid.is_alive(row, col), neighbors) {
                (true, n) if n < 2 => 0,
                (true, 2 | 3) => 1,
                (true, _) => 0,
                (false, 3) => 1,
                (false, _) => 0,
            };

            cells.push(flag);
        }
    }

    Grid::from_cells(rows, cols, cells)
}
