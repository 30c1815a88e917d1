//! Octave-summed (fractal) sampling over a [`PerlinNoise`] engine.

use noise::NoiseFn;

use super::{NoiseError, PerlinNoise};

/// A validated octave configuration borrowing an engine.
///
/// Validation happens once in [`Fbm::new`], so sampling through
/// [`NoiseFn::get`] cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct Fbm<'a> {
    engine: &'a PerlinNoise,
    octaves: u32,
    persistence: f64,
}

impl<'a> Fbm<'a> {
    pub fn new(engine: &'a PerlinNoise, octaves: u32, persistence: f64) -> Result<Self, NoiseError> {
        if octaves == 0 {
            return Err(NoiseError::InvalidOctaveCount(octaves));
        }
        Ok(Self {
            engine,
            octaves,
            persistence,
        })
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    /// Sum of the amplitudes used to normalize the total.
    pub fn amplitude_sum(&self) -> f64 {
        let mut amplitude = 1.0;
        let mut sum = 0.0;
        for _ in 0..self.octaves {
            sum += amplitude;
            amplitude *= self.persistence;
        }
        sum
    }
}

impl NoiseFn<f64, 3> for Fbm<'_> {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.engine
            .octave_sum(point[0], point[1], point[2], self.octaves, self.persistence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_octaves() {
        let engine = PerlinNoise::new();
        assert!(matches!(
            Fbm::new(&engine, 0, 0.5),
            Err(NoiseError::InvalidOctaveCount(0))
        ));
    }

    #[test]
    fn test_matches_octave_evaluate() {
        let engine = PerlinNoise::new();
        let fbm = Fbm::new(&engine, 5, 0.6).unwrap();
        let expected = engine.octave_evaluate(3.3, 1.7, 9.1, 5, 0.6).unwrap();
        assert_eq!(fbm.get([3.3, 1.7, 9.1]), expected);
    }

    #[test]
    fn test_amplitude_sum() {
        let engine = PerlinNoise::new();
        let fbm = Fbm::new(&engine, 3, 0.5).unwrap();
        assert_eq!(fbm.amplitude_sum(), 1.75);
    }

    #[test]
    fn test_normalized_range() {
        let engine = PerlinNoise::new();
        let fbm = Fbm::new(&engine, 6, 0.5).unwrap();
        for i in 0..200 {
            let t = i as f64 * 0.173;
            let v = fbm.get([t, t * 0.5 + 3.0, 7.0 - t]);
            assert!((0.0..=1.0).contains(&v), "out of range: {}", v);
        }
    }
}
