//! Noise sampling and height mapping parameters.

use serde::{Deserialize, Serialize};

use crate::noise::NoiseError;

/// Height mapping applied on top of the raw noise sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    /// Scaled noise: `height_scale * n`
    #[default]
    Plain,

    /// Diagonal sine bands displaced by noise
    Sine,

    /// Concentric sine rings around the grid center, displaced by noise
    Ring,
}

impl MapType {
    /// Map the viewer's numeric selector (1, 2, 3) to a map type
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Plain),
            2 => Some(Self::Sine),
            3 => Some(Self::Ring),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Plain => 1,
            Self::Sine => 2,
            Self::Ring => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Sine => "sine",
            Self::Ring => "ring",
        }
    }
}

/// Parameters for one height-field generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParameters {
    /// Sum several octaves instead of sampling the base noise once
    pub use_octaves: bool,

    /// Number of octaves (must be >= 1 when `use_octaves` is set)
    pub octave_count: u32,

    /// Amplitude multiplier between successive octaves (dimensionless)
    pub persistence: f64,

    /// Grid-cell to noise-space scale (noise units per cell)
    pub noise_scale: f64,

    /// Output multiplier for the plain map
    pub height_scale: f64,

    /// Which height mapping to apply
    pub map_type: MapType,

    /// Noise displacement of the sine bands (band widths per unit noise)
    pub sin_power: f64,

    /// Noise displacement of the rings (normalized radius per unit noise)
    pub ring_power: f64,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            use_octaves: false,
            octave_count: 1,
            persistence: 0.1, // Viewer reset value
            noise_scale: 0.05,
            height_scale: 3.0,
            map_type: MapType::Plain,
            sin_power: 0.0,
            ring_power: 0.0,
        }
    }
}

impl NoiseParameters {
    /// Check the octave count when octave summation is enabled.
    ///
    /// Every other field is accepted as-is, including degenerate values.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.use_octaves && self.octave_count == 0 {
            return Err(NoiseError::InvalidOctaveCount(self.octave_count));
        }
        Ok(())
    }

    /// Noise displacement power for the active map (0.0 for plain)
    pub fn active_power(&self) -> f64 {
        match self.map_type {
            MapType::Plain => 0.0,
            MapType::Sine => self.sin_power,
            MapType::Ring => self.ring_power,
        }
    }
}

/// Fixed periods of the sine and ring maps
pub mod map_constants {
    /// Sine bands across the grid along X
    pub const SINE_X_PERIOD: f64 = 5.0;

    /// Sine bands across the grid along Y
    pub const SINE_Y_PERIOD: f64 = 5.0;

    /// Rings between the center and the edge of the normalized grid
    pub const RING_PERIOD: f64 = 5.0;
}
