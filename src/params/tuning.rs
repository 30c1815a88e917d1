//! Step sizes for interactive parameter tuning.

/// Increment applied by each tuning command
#[derive(Debug, Clone)]
pub struct TuningSteps {
    /// Persistence change per step
    pub persistence: f64,

    /// Lower bound that persistence must exceed before it can decrease
    pub min_persistence: f64,

    /// Sine power change per step
    pub sin_power: f64,

    /// Ring power change per step
    pub ring_power: f64,

    /// Height scale change per step
    pub height: f64,
}

impl Default for TuningSteps {
    fn default() -> Self {
        Self {
            persistence: 0.1,
            min_persistence: 0.1,
            sin_power: 1.0,
            ring_power: 0.1,
            height: 1.0,
        }
    }
}

/// Last layer shown by the waterfall animation before it wraps to 0
pub const WATERFALL_LAST_LEVEL: usize = 63;
