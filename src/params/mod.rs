//! Parameter definitions with documented units and defaults.
//!
//! Every tunable constant of the generator and viewer lives here.

mod grid;
mod terrain;
mod tuning;

pub use grid::GridSize;
pub use terrain::{map_constants, MapType, NoiseParameters};
pub use tuning::{TuningSteps, WATERFALL_LAST_LEVEL};
