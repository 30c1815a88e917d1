//! Fills height fields by sampling noise under a mapping policy.

use std::f64::consts::PI;
use std::time::Instant;

use glam::UVec3;
use noise::NoiseFn;
use rayon::prelude::*;

use super::HeightField;
use crate::noise::{Fbm, NoiseError, PerlinNoise};
use crate::params::{map_constants, GridSize, MapType, NoiseParameters};

/// Height mapping resolved from [`NoiseParameters`] once per generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MappingPolicy {
    /// `height_scale * n`
    Plain { height_scale: f64 },
    /// `|sin(π (x·Px/X + y·Py/Y + power·n))|`
    Sine { power: f64 },
    /// `|sin(2π·P·(r + power·n))|` with `r` the distance from the grid center
    Ring { power: f64 },
}

impl MappingPolicy {
    pub fn from_params(params: &NoiseParameters) -> Self {
        match params.map_type {
            MapType::Plain => Self::Plain {
                height_scale: params.height_scale,
            },
            MapType::Sine => Self::Sine {
                power: params.sin_power,
            },
            MapType::Ring => Self::Ring {
                power: params.ring_power,
            },
        }
    }
}

/// Generates height fields of a fixed grid size from one noise engine
#[derive(Debug, Clone)]
pub struct HeightFieldGenerator {
    engine: PerlinNoise,
    size: GridSize,
}

impl HeightFieldGenerator {
    /// Generator over the canonical noise engine
    pub fn new(size: GridSize) -> Self {
        Self::with_engine(PerlinNoise::new(), size)
    }

    pub fn with_engine(engine: PerlinNoise, size: GridSize) -> Self {
        Self { engine, size }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn engine(&self) -> &PerlinNoise {
        &self.engine
    }

    /// Generate a fresh height field.
    ///
    /// # Errors
    /// [`NoiseError::InvalidOctaveCount`] when octaves are enabled with a count of 0.
    pub fn generate(&self, params: &NoiseParameters) -> Result<HeightField, NoiseError> {
        let mut field = HeightField::new(self.size);
        self.generate_into(params, &mut field)?;
        Ok(field)
    }

    /// Overwrite every cell of `field` with a new generation.
    ///
    /// `field` is left untouched on error.
    pub fn generate_into(
        &self,
        params: &NoiseParameters,
        field: &mut HeightField,
    ) -> Result<(), NoiseError> {
        params.validate()?;
        if field.size() != self.size {
            return Err(NoiseError::GridMismatch {
                expected: self.size.to_array(),
                actual: field.size().to_array(),
            });
        }

        let start = Instant::now();
        let policy = MappingPolicy::from_params(params);

        if params.use_octaves {
            let fbm = Fbm::new(&self.engine, params.octave_count, params.persistence)?;
            self.fill(field, &fbm, params.noise_scale, policy);
        } else {
            self.fill(field, &self.engine, params.noise_scale, policy);
        }

        log::debug!(
            "Generated {} {:?} field ({} cells, octaves: {}) in {:.2}ms",
            params.map_type.name(),
            self.size.to_array(),
            field.len(),
            if params.use_octaves { params.octave_count } else { 0 },
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(())
    }

    fn fill<S>(&self, field: &mut HeightField, source: &S, noise_scale: f64, policy: MappingPolicy)
    where
        S: NoiseFn<f64, 3> + Sync,
    {
        let size = self.size;
        match policy {
            MappingPolicy::Plain { height_scale } => {
                self.fill_with(field, source, noise_scale, |_, n| height_scale * n)
            }
            MappingPolicy::Sine { power } => {
                let (sx, sy) = (size.x as f64, size.y as f64);
                self.fill_with(field, source, noise_scale, move |cell, n| {
                    let val = cell.x as f64 * map_constants::SINE_X_PERIOD / sx
                        + cell.y as f64 * map_constants::SINE_Y_PERIOD / sy
                        + power * n;
                    (val * PI).sin().abs()
                })
            }
            MappingPolicy::Ring { power } => {
                // Integer halving, so even sizes center on a cell
                let (cx, cy) = ((size.x / 2) as i64, (size.y / 2) as i64);
                let (sx, sy) = (size.x as f64, size.y as f64);
                self.fill_with(field, source, noise_scale, move |cell, n| {
                    let x_val = (cell.x as i64 - cx) as f64 / sx;
                    let y_val = (cell.y as i64 - cy) as f64 / sy;
                    let dist = (x_val * x_val + y_val * y_val).sqrt() + power * n;
                    (2.0 * map_constants::RING_PERIOD * dist * PI).sin().abs()
                })
            }
        }
    }

    /// Evaluate every cell, one rayon task per x-row.
    fn fill_with<S, F>(&self, field: &mut HeightField, source: &S, noise_scale: f64, map: F)
    where
        S: NoiseFn<f64, 3> + Sync,
        F: Fn(UVec3, f64) -> f64 + Sync,
    {
        let size = self.size;
        let row_len = size.row_len();
        if row_len == 0 {
            return;
        }

        field
            .as_mut_slice()
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(x, row)| {
                for y in 0..size.y {
                    for z in 0..size.z {
                        let cell = UVec3::new(x as u32, y, z);
                        let n = source.get((cell.as_dvec3() * noise_scale).to_array());
                        row[y as usize * size.z as usize + z as usize] = map(cell, n);
                    }
                }
            });
    }
}
