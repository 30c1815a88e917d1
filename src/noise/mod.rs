//! Deterministic 3D gradient noise and its fractal composition.
//!
//! [`PerlinNoise`] and [`Fbm`] both implement the `noise` crate's
//! [`NoiseFn`](noise::NoiseFn) trait, so they can be sampled anywhere a
//! `noise` source is accepted.

mod fbm;
mod perlin;
mod permutation;

use thiserror::Error;

pub use fbm::Fbm;
pub use perlin::{fade, grad, lerp, PerlinNoise};
pub use permutation::{PermutationTable, CANONICAL_PERMUTATION, PERIOD};

/// Errors raised by the noise engine and height-field generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    #[error("octave count must be at least 1, got {0}")]
    InvalidOctaveCount(u32),
    #[error("permutation repeats value {0}")]
    InvalidPermutation(u8),
    #[error("height field is {actual:?} but generator grid is {expected:?}")]
    GridMismatch {
        expected: [u32; 3],
        actual: [u32; 3],
    },
}
