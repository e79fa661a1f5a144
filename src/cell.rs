use crate::CellSize;
use crate::Coord;

/// Offsets of the Moore neighborhood, in grid units.
///
/// ```notrust
///   (-1,-1) ( 0,-1) ( 1,-1)
///   (-1, 0)    x    ( 1, 0)
///   (-1, 1) ( 0, 1) ( 1, 1)
/// ```
pub const NEIGHBOR_OFFSETS: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A single cell on the plane.
///
/// Coordinates are stored in screen units, so they are always multiples of the cell size the
/// generation was built with. Two cells are the same cell iff their coordinates are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: Coord,
    pub y: Coord,
}

impl Cell {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The cell at `column` and `row` of a grid whose cells are `cell_size` wide.
    pub const fn at(column: Coord, row: Coord, cell_size: CellSize) -> Self {
        let s = cell_size.get() as Coord;

        Self {
            x: column * s,
            y: row * s,
        }
    }

    /// The 8 cells surrounding this one. Never contains `self`.
    pub fn neighbors(&self, cell_size: CellSize) -> [Cell; 8] {
        let s = cell_size.get() as Coord;

        NEIGHBOR_OFFSETS.map(|(dx, dy)| Cell {
            x: self.x + dx * s,
            y: self.y + dy * s,
        })
    }
}

impl From<(Coord, Coord)> for Cell {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self { x, y }
    }
}
