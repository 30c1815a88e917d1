//! Classic 3D gradient noise with the quintic fade curve.

use noise::NoiseFn;

use super::permutation::{PermutationTable, PERIOD};
use super::NoiseError;

/// Deterministic 3D noise sampler owning an immutable permutation table.
///
/// Output of [`PerlinNoise::evaluate`] is remapped to `[0, 1]`. The lattice
/// wraps every 256 units on each axis.
#[derive(Debug, Clone, Default)]
pub struct PerlinNoise {
    table: PermutationTable,
}

impl PerlinNoise {
    /// Engine over the canonical permutation.
    pub fn new() -> Self {
        Self::with_table(PermutationTable::canonical())
    }

    pub fn with_table(table: PermutationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Sample noise at a point, returning a value in `[0, 1]`.
    ///
    /// Integer lattice points always return exactly `0.5`.
    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xi, xf) = split_lattice(x);
        let (yi, yf) = split_lattice(y);
        let (zi, zf) = split_lattice(z);

        let u = fade(xf);
        let v = fade(yf);
        let w = fade(zf);

        let t = &self.table;
        let aaa = t.hash(xi, yi, zi);
        let aba = t.hash(xi, yi + 1, zi);
        let aab = t.hash(xi, yi, zi + 1);
        let abb = t.hash(xi, yi + 1, zi + 1);
        let baa = t.hash(xi + 1, yi, zi);
        let bba = t.hash(xi + 1, yi + 1, zi);
        let bab = t.hash(xi + 1, yi, zi + 1);
        let bbb = t.hash(xi + 1, yi + 1, zi + 1);

        // x first, then y within each z layer, then z
        let x1 = lerp(grad(aaa, xf, yf, zf), grad(baa, xf - 1.0, yf, zf), u);
        let x2 = lerp(
            grad(aba, xf, yf - 1.0, zf),
            grad(bba, xf - 1.0, yf - 1.0, zf),
            u,
        );
        let y1 = lerp(x1, x2, v);

        let x1 = lerp(
            grad(aab, xf, yf, zf - 1.0),
            grad(bab, xf - 1.0, yf, zf - 1.0),
            u,
        );
        let x2 = lerp(
            grad(abb, xf, yf - 1.0, zf - 1.0),
            grad(bbb, xf - 1.0, yf - 1.0, zf - 1.0),
            u,
        );
        let y2 = lerp(x1, x2, v);

        (lerp(y1, y2, w) + 1.0) / 2.0
    }

    /// Fractal sum of `octaves` layers of [`evaluate`](Self::evaluate).
    ///
    /// Frequency doubles and amplitude is multiplied by `persistence` per
    /// layer. The total is divided by the summed amplitudes so a single
    /// octave returns exactly the base noise.
    ///
    /// # Errors
    /// [`NoiseError::InvalidOctaveCount`] when `octaves == 0`.
    pub fn octave_evaluate(
        &self,
        x: f64,
        y: f64,
        z: f64,
        octaves: u32,
        persistence: f64,
    ) -> Result<f64, NoiseError> {
        if octaves == 0 {
            return Err(NoiseError::InvalidOctaveCount(octaves));
        }
        Ok(self.octave_sum(x, y, z, octaves, persistence))
    }

    /// Octave sum without the count check; callers guarantee `octaves >= 1`.
    pub(crate) fn octave_sum(&self, x: f64, y: f64, z: f64, octaves: u32, persistence: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            total += self.evaluate(x * frequency, y * frequency, z * frequency) * amplitude;
            max_value += amplitude;

            amplitude *= persistence;
            frequency *= 2.0;
        }

        total / max_value
    }
}

impl NoiseFn<f64, 3> for PerlinNoise {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.evaluate(point[0], point[1], point[2])
    }
}

/// Split a coordinate into its wrapped lattice cell and fractional offset.
#[inline]
fn split_lattice(value: f64) -> (usize, f64) {
    let cell = value.floor();
    ((cell as i64 & (PERIOD as i64 - 1)) as usize, value - cell)
}

/// Quintic fade `6t^5 - 15t^4 + 10t^3`; first and second derivatives vanish at 0 and 1.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product with one of 16 fixed pseudo-gradients chosen by the low hash bits.
///
/// Cases 0xD and 0xF repeat 0x9 and 0xB rather than mirroring 0x5 and 0x7.
/// Changing them would alter every sample, so they are kept as-is.
#[inline]
pub fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    match hash & 0xF {
        0x0 => x + y,
        0x1 => -x + y,
        0x2 => x - y,
        0x3 => -x - y,
        0x4 => x + z,
        0x5 => -x + z,
        0x6 => x - z,
        0x7 => -x - z,
        0x8 => y + z,
        0x9 => -y + z,
        0xA => y - z,
        0xB => -y - z,
        0xC => y + x,
        0xD => -y + z,
        0xE => y - x,
        0xF => -y - z,
        _ => unreachable!(),
    }
}
