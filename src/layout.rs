use eframe::egui::{Pos2, Vec2, pos2};
use rand::Rng;

use crate::util::unit;

/// Emits one point per cell of a `grid` x `grid` lattice covering `size`,
/// jittered uniformly inside its cell. Cells are visited column by column.
pub fn jittered_grid<R: Rng + ?Sized>(size: Vec2, grid: usize, rng: &mut R) -> Vec<Pos2> {
    if grid == 0 {
        return Vec::new();
    }

    let cell_width = size.x.max(0.0) / grid as f32;
    let cell_height = size.y.max(0.0) / grid as f32;

    let mut positions = Vec::with_capacity(grid * grid);
    for column in 0..grid {
        for row in 0..grid {
            let x = column as f32 * cell_width + unit(rng) * cell_width;
            let y = row as f32 * cell_height + unit(rng) * cell_height;
            positions.push(pos2(x, y));
        }
    }

    positions
}
