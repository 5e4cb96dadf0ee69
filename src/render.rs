use image::Rgb;
use image::RgbImage;

use crate::age::AgeGrid;
use crate::grid::Grid;

/// Frame background.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 240, 245]);

/// Grid lines between cells.
pub const GRID_LINE: Rgb<u8> = Rgb([188, 143, 143]);

/// One-pixel outline around a live cell's square.
pub const CELL_OUTLINE: Rgb<u8> = Rgb([255, 182, 193]);

/// Fill for cells that just came alive.
pub const FRESH_FILL: Rgb<u8> = Rgb([255, 0, 0]);

/// Pixel layout of a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    /// Side length of a cell square, in pixels.
    pub cell_size: u32,

    /// Thickness of the grid lines, in pixels.
    pub border_width: u32,
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self {
            cell_size: 45,
            border_width: 2,
        }
    }
}

/// Frame dimensions for a board under the given geometry.
///
/// The frame keeps a trailing margin of one cell column on the right:
/// `(cols + 1) * cell_size` wide, `rows * (cell_size + border) + border`
/// tall.
pub fn frame_size(grid: &Grid, geometry: CellGeometry) -> (u32, u32) {
    let (rows, cols) = (grid.rows() as u32, grid.cols() as u32);
    let CellGeometry {
        cell_size,
        border_width,
    } = geometry;

    let width = (cols + 1) * cell_size;
    let height = rows * (cell_size + border_width) + border_width;

    (width, height)
}

/// Color-ramp channel for an aged cell: `age^6`, saturated at 255.
///
/// Ages above 2 do not occur with the current tracker, but the arithmetic
/// is total: the sixth power saturates instead of wrapping.
pub fn age_channel(age: u8) -> u8 {
    u32::from(age).saturating_pow(6).min(255) as u8
}

/// Fill color for a live cell of the given age.
///
/// Fresh cells (age 0 or 1) are bright red; continuing cells shift toward
/// the ramp `(255 - age^6, age^6, age^6)` with saturated channels.
pub fn cell_fill(age: u8) -> Rgb<u8> {
    if age <= 1 {
        return FRESH_FILL;
    }

    let channel = age_channel(age);

    Rgb([255 - channel, channel, channel])
}

/// Rasterize one board state into an RGB frame.
///
/// Live cells are drawn as filled squares with a one-pixel outline, dead
/// cells are bare background, and grid lines are drawn over the cells at
/// every row and column boundary. Deterministic in `(grid, ages,
/// geometry)`.
pub fn render(grid: &Grid, ages: &AgeGrid, geometry: CellGeometry) -> RgbImage {
    assert_eq!(grid.rows(), ages.rows(), "age grid differs in row count");
    assert_eq!(grid.cols(), ages.cols(), "age grid differs in column count");

    let CellGeometry {
        cell_size,
        border_width,
    } = geometry;

    let (width, height) = frame_size(grid, geometry);
    let mut frame = RgbImage::from_pixel(width, height, BACKGROUND);

    let row_pitch = cell_size + border_width;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if !grid.is_alive(row, col) {
                continue;
            }

            let x = col as u32 * cell_size;
            let y = row as u32 * row_pitch + border_width;
            let fill = cell_fill(ages.get(row, col));

            fill_rect(&mut frame, x, y, cell_size, cell_size, fill);
            outline_rect(&mut frame, x, y, cell_size, cell_size, CELL_OUTLINE);
        }
    }

    // Grid lines go over the cells.
    for k in 0..=grid.rows() as u32 {
        fill_rect(&mut frame, 0, k * row_pitch, width, border_width, GRID_LINE);
    }

    for k in 0..=grid.cols() as u32 {
        fill_rect(&mut frame, k * cell_size, 0, border_width, height, GRID_LINE);
    }

    frame
}

/// Fill an axis-aligned rectangle, clipped to the frame.
fn fill_rect(frame: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x1 = (x + w).min(frame.width());
    let y1 = (y + h).min(frame.height());

    for py in y..y1 {
        for px in x..x1 {
            frame.put_pixel(px, py, color);
        }
    }
}

/// Draw a one-pixel border just inside the given rectangle.
fn outline_rect(frame: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    if w == 0 || h == 0 {
        return;
    }

    fill_rect(frame, x, y, w, 1, color);
    fill_rect(frame, x, y + h - 1, w, 1, color);
    fill_rect(frame, x, y, 1, h, color);
    fill_rect(frame, x + w - 1, y, 1, h, color);
}
