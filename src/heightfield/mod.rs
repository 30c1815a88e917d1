//! Dense 3D height fields and their generation from noise.

mod generator;

pub use generator::{HeightFieldGenerator, MappingPolicy};

use glam::UVec3;

use crate::params::GridSize;

/// Dense scalar field over `[0, x) × [0, y) × [0, z)`.
///
/// Stored flat in row-major order: `index = (x * size.y + y) * size.z + z`,
/// so each x-row is one contiguous `y * z` slice.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    size: GridSize,
    values: Vec<f64>,
}

impl HeightField {
    /// Zero-filled field of the given size
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            values: vec![0.0; size.len()],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Cells per axis as `(x, y, z)`
    pub fn dims(&self) -> UVec3 {
        self.size.as_uvec3()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flat index of a cell. Panics in debug builds when out of bounds.
    #[inline]
    pub fn index(&self, x: u32, y: u32, z: u32) -> usize {
        debug_assert!(x < self.size.x && y < self.size.y && z < self.size.z);
        (x as usize * self.size.y as usize + y as usize) * self.size.z as usize + z as usize
    }

    /// Value at a cell, or `None` outside the grid
    pub fn get(&self, x: u32, y: u32, z: u32) -> Option<f64> {
        if x >= self.size.x || y >= self.size.y || z >= self.size.z {
            return None;
        }
        Some(self.values[self.index(x, y, z)])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Smallest and largest value, or `None` for an empty field
    pub fn min_max(&self) -> Option<(f64, f64)> {
        min_max(&self.values)
    }

    /// The 2D slice at depth `z`, indexed by `(x, y)`.
    ///
    /// This is the surface the viewer renders for one waterfall level.
    pub fn layer(&self, z: u32) -> Option<Layer> {
        if z >= self.size.z {
            return None;
        }
        let mut values = Vec::with_capacity(self.size.x as usize * self.size.y as usize);
        for x in 0..self.size.x {
            for y in 0..self.size.y {
                values.push(self.values[self.index(x, y, z)]);
            }
        }
        Some(Layer {
            width: self.size.x,
            height: self.size.y,
            depth: z,
            values,
        })
    }
}

/// One constant-z slice of a [`HeightField`]
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Cells along X
    pub width: u32,
    /// Cells along Y
    pub height: u32,
    /// Source z index
    pub depth: u32,
    /// Row-major by x: `values[x * height + y]`
    pub values: Vec<f64>,
}

impl Layer {
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.values[x as usize * self.height as usize + y as usize])
    }

    pub fn min_max(&self) -> Option<(f64, f64)> {
        min_max(&self.values)
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
