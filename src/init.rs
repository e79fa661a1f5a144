use rand::Rng;
use tracing::debug;

use crate::CellSize;
use crate::cell::Cell;
use crate::config::Config;
use crate::generation::Generation;

/// Build generation 0 for a `width` by `height` grid (in cells).
///
/// Every cell is an independent trial: a number is drawn uniformly from `[0, 100]` and the cell
/// lives iff the draw is below `live_chance`. So a `live_chance <= 0` always gives an empty
/// generation and one `> 100` a full grid.
///
/// A `live_chance` of exactly 100 is *not* guaranteed to fill the grid: a draw of 100 leaves its
/// cell dead, so each cell still has a 1 in 101 chance to start out dead.
pub fn initialize<R>(
    width: u32,
    height: u32,
    cell_size: CellSize,
    live_chance: i32,
    rng: &mut R,
) -> Generation
where
    R: Rng + ?Sized,
{
    let mut cells = Vec::new();

    for column in 0..width {
        for row in 0..height {
            let draw: i32 = rng.gen_range(0..=100);

            if draw < live_chance {
                cells.push(Cell::at(column.into(), row.into(), cell_size));
            }
        }
    }

    let generation: Generation = cells.into_iter().collect();

    debug!(
        width,
        height,
        live_chance,
        population = generation.len(),
        "initialized generation 0"
    );

    generation
}

/// `initialize` over the grid described by `config`
pub fn initialize_from<R>(config: &Config, rng: &mut R) -> Generation
where
    R: Rng + ?Sized,
{
    initialize(
        config.grid_width(),
        config.grid_height(),
        config.cell_size,
        config.live_chance,
        rng,
    )
}
