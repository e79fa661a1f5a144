use std::collections::HashSet;

use tracing::trace;

use crate::CellSize;
use crate::cell::Cell;
use crate::config::Config;
use crate::generation::Generation;
use crate::rule_set::RuleSet;

/// How many neighborhoods a transition looked at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluations {
    /// Living cells checked for survival
    pub live: usize,

    /// Dead cells next to a living one, checked for birth. Each is counted once.
    pub candidates: usize,
}

impl Evaluations {
    pub fn total(&self) -> usize {
        self.live + self.candidates
    }
}

/// Steps a [`Generation`] forward.
///
/// Only living cells and the dead cells touching them are ever looked at, so the cost of a step
/// depends on the population and not on the size of the plane. There are no edges: a pattern can
/// grow past the grid it started on.
#[derive(Clone, Copy, Debug)]
pub struct World {
    cell_size: CellSize,
    rules: RuleSet,
}

impl World {
    /// `config` is expected to have gone through [`Config::validate`].
    pub fn new(config: &Config) -> Self {
        Self::with_cell_size(config.cell_size)
    }

    pub fn with_cell_size(cell_size: CellSize) -> Self {
        Self {
            cell_size,
            rules: RuleSet::default(),
        }
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    pub fn transition(&self, current: &Generation) -> Generation {
        self.transition_counted(current).0
    }

    /// Like `transition`, also reporting how much work was done.
    pub fn transition_counted(&self, current: &Generation) -> (Generation, Evaluations) {
        let mut next = HashSet::with_capacity(current.len());
        let mut candidates = HashSet::new();
        let mut evals = Evaluations::default();

        // Survivals. The same pass collects the dead neighbors that could be born.
        for cell in current {
            let mut count = 0;

            for neighbor in cell.neighbors(self.cell_size) {
                if current.contains(&neighbor) {
                    count += 1;
                } else {
                    candidates.insert(neighbor);
                }
            }

            evals.live += 1;

            if self.rules.next_state(true, count) {
                next.insert(*cell);
            }
        }

        let survivors = next.len();

        // Births
        for cell in candidates {
            let count = self.live_neighbors(current, &cell);

            evals.candidates += 1;

            if self.rules.next_state(false, count) {
                next.insert(cell);
            }
        }

        trace!(
            population = current.len(),
            survivors,
            births = next.len() - survivors,
            live_evals = evals.live,
            candidate_evals = evals.candidates,
            "stepped generation"
        );

        (Generation::from_cells(next), evals)
    }

    fn live_neighbors(&self, current: &Generation, cell: &Cell) -> u8 {
        cell.neighbors(self.cell_size)
            .iter()
            .filter(|n| current.contains(n))
            .count() as u8
    }
}

/// Step `current` once on a plane of `cell_size` cells
pub fn transition(current: &Generation, cell_size: CellSize) -> Generation {
    World::with_cell_size(cell_size).transition(current)
}
