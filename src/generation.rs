use std::collections::HashSet;
use std::collections::hash_set;

use crate::Coord;
use crate::cell::Cell;

/// Every living cell at one step of the simulation.
///
/// Membership is the only encoding of life: a cell that isn't in the set is dead. A `Generation`
/// can't be changed once built, the next step always produces a new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    cells: HashSet<Cell>,
}

/// Smallest rectangle holding every living cell. Both corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: Coord,
    pub min_y: Coord,
    pub max_x: Coord,
    pub max_y: Coord,
}

impl Generation {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: HashSet<Cell>) -> Self {
        Self { cells }
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// `None` for an empty generation
    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.cells.iter();
        let first = cells.next()?;

        let init = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };

        Some(cells.fold(init, |b, c| Bounds {
            min_x: b.min_x.min(c.x),
            min_y: b.min_y.min(c.y),
            max_x: b.max_x.max(c.x),
            max_y: b.max_y.max(c.y),
        }))
    }
}

impl FromIterator<Cell> for Generation {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Generation {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for Generation {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
