//! Height-field grid dimensions.

use glam::UVec3;
use serde::{Deserialize, Serialize};

/// Grid resolution of a height field (cells per axis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Default for GridSize {
    fn default() -> Self {
        Self::cube(128) // 2M cells, regenerates in well under a second
    }
}

impl GridSize {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    pub fn cube(size: u32) -> Self {
        Self::new(size, size, size)
    }

    pub fn as_uvec3(self) -> UVec3 {
        UVec3::new(self.x, self.y, self.z)
    }

    pub fn to_array(self) -> [u32; 3] {
        [self.x, self.y, self.z]
    }

    /// Total number of cells
    pub fn len(self) -> usize {
        self.x as usize * self.y as usize * self.z as usize
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Cells in one x-row (a full y-z plane)
    pub fn row_len(self) -> usize {
        self.y as usize * self.z as usize
    }
}

impl From<UVec3> for GridSize {
    fn from(v: UVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
