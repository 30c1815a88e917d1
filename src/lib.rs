//! Perlinscape library - Perlin-noise height fields for terrain viewers

pub mod cli;
pub mod controls;
pub mod export;
pub mod heightfield;
pub mod noise;
pub mod params;
pub mod session;

pub use crate::heightfield::{HeightField, HeightFieldGenerator, Layer, MappingPolicy};
pub use crate::noise::{Fbm, NoiseError, PerlinNoise, PermutationTable};
pub use crate::params::{GridSize, MapType, NoiseParameters};
