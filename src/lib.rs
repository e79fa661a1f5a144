pub mod camera;
pub mod cell;
pub mod config;
pub mod generation;
pub mod init;
pub mod io;
pub mod rule_set;
pub mod world;

use std::num::NonZeroU32;

pub use init::initialize;
pub use world::transition;

/// Coordinate on the plane, in screen units. Signed since patterns can drift past the origin.
pub type Coord = i64;

/// Side length of a cell in screen units. Never zero, or every cell would be its own neighbor.
pub type CellSize = NonZeroU32;
