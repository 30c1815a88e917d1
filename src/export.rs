//! Height-field export: grayscale PNG layers and raw f64 dumps.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use thiserror::Error;

use crate::heightfield::{HeightField, Layer};
use crate::params::{MapType, NoiseParameters};

/// Errors that can occur during export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid value range: min ({0}) >= max ({1})")]
    InvalidRange(f64, f64),
    #[error("Nothing to export: layer is empty")]
    EmptyLayer,
}

/// Value range mapped onto black..white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Expected output range for a parameter set: `[0, height_scale]` for
    /// the plain map, `[0, 1]` for the sine and ring maps.
    pub fn for_params(params: &NoiseParameters) -> Self {
        match params.map_type {
            MapType::Plain if params.height_scale > 0.0 => Self::new(0.0, params.height_scale),
            MapType::Plain if params.height_scale < 0.0 => Self::new(params.height_scale, 0.0),
            _ => Self::new(0.0, 1.0),
        }
    }

    /// Normalize `value` into `[0, 1]`, clamping outliers.
    pub fn normalize(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Render a layer as an 8-bit grayscale image with `x` across and `y` down.
pub fn layer_to_image(layer: &Layer, range: ValueRange) -> Result<GrayImage, ExportError> {
    if range.min >= range.max {
        return Err(ExportError::InvalidRange(range.min, range.max));
    }
    if layer.values.is_empty() {
        return Err(ExportError::EmptyLayer);
    }

    let mut img = GrayImage::new(layer.width, layer.height);
    for x in 0..layer.width {
        for y in 0..layer.height {
            let value = layer.get(x, y).unwrap_or(range.min);
            let gray = (range.normalize(value) * 255.0).round() as u8;
            img.put_pixel(x, y, Luma([gray]));
        }
    }
    Ok(img)
}

/// Write a layer as a grayscale PNG.
pub fn write_layer_png(layer: &Layer, range: ValueRange, path: &Path) -> Result<(), ExportError> {
    let img = layer_to_image(layer, range)?;
    img.save(path)?;
    log::debug!(
        "Wrote layer z={} ({}x{}) to {}",
        layer.depth,
        layer.width,
        layer.height,
        path.display()
    );
    Ok(())
}

/// Path for animation frame `index`: `out.png` -> `out_007.png`
pub fn numbered_path(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let name = match path.extension() {
        Some(ext) => format!("{}_{:03}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{:03}", stem, index),
    };
    path.with_file_name(name)
}

/// Write the whole field as little-endian f64 values in storage order.
///
/// The file holds `x * y * z` values, indexed `(x * y_size + y) * z_size + z`.
pub fn write_raw(field: &HeightField, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    if cfg!(target_endian = "little") {
        writer.write_all(bytemuck::cast_slice(field.as_slice()))?;
    } else {
        for value in field.as_slice() {
            writer.write_all(&value.to_le_bytes())?;
        }
    }
    writer.flush()?;

    log::debug!(
        "Wrote {} raw values ({} bytes) to {}",
        field.len(),
        field.len() * std::mem::size_of::<f64>(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heightfield::HeightFieldGenerator;
    use crate::params::GridSize;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("perlinscape_{}_{}", std::process::id(), name))
    }

    fn small_layer() -> Layer {
        Layer {
            width: 2,
            height: 3,
            depth: 0,
            values: vec![0.0, 0.5, 1.0, 1.5, 3.0, -1.0],
        }
    }

    #[test]
    fn test_normalize_clamps() {
        let range = ValueRange::new(0.0, 2.0);
        assert_eq!(range.normalize(1.0), 0.5);
        assert_eq!(range.normalize(-5.0), 0.0);
        assert_eq!(range.normalize(5.0), 1.0);
    }

    #[test]
    fn test_range_for_params() {
        let mut params = NoiseParameters::default();
        assert_eq!(ValueRange::for_params(&params), ValueRange::new(0.0, 3.0));

        params.height_scale = 0.0;
        assert_eq!(ValueRange::for_params(&params), ValueRange::new(0.0, 1.0));

        params.map_type = MapType::Ring;
        params.height_scale = 10.0;
        assert_eq!(ValueRange::for_params(&params), ValueRange::new(0.0, 1.0));
    }

    #[test]
    fn test_layer_to_image_pixels() {
        let img = layer_to_image(&small_layer(), ValueRange::new(0.0, 1.0)).unwrap();
        assert_eq!(img.dimensions(), (2, 3));
        assert_eq!(img.get_pixel(0, 0)[0], 0);
        assert_eq!(img.get_pixel(0, 1)[0], 128);
        assert_eq!(img.get_pixel(0, 2)[0], 255);
        assert_eq!(img.get_pixel(1, 0)[0], 255); // clamped 1.5
        assert_eq!(img.get_pixel(1, 2)[0], 0); // clamped -1.0
    }

    #[test]
    fn test_invalid_range() {
        let result = layer_to_image(&small_layer(), ValueRange::new(1.0, 1.0));
        assert!(matches!(result, Err(ExportError::InvalidRange(_, _))));
    }

    #[test]
    fn test_empty_layer() {
        let layer = Layer {
            width: 0,
            height: 0,
            depth: 0,
            values: Vec::new(),
        };
        let result = layer_to_image(&layer, ValueRange::new(0.0, 1.0));
        assert!(matches!(result, Err(ExportError::EmptyLayer)));
    }

    #[test]
    fn test_numbered_path() {
        assert_eq!(
            numbered_path(Path::new("renders/out.png"), 7),
            PathBuf::from("renders/out_007.png")
        );
        assert_eq!(
            numbered_path(Path::new("renders/out"), 12),
            PathBuf::from("renders/out_012")
        );
        assert_eq!(numbered_path(Path::new("a.b.png"), 123), PathBuf::from("a.b_123.png"));
    }

    #[test]
    fn test_png_written() {
        let generator = HeightFieldGenerator::new(GridSize::cube(16));
        let field = generator.generate(&NoiseParameters::default()).unwrap();
        let layer = field.layer(4).unwrap();
        let path = temp_path("layer.png");

        write_layer_png(&layer, ValueRange::new(0.0, 3.0), &path).unwrap();
        let decoded = image::open(&path).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), (16, 16));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_raw_written() {
        let generator = HeightFieldGenerator::new(GridSize::new(3, 2, 2));
        let field = generator.generate(&NoiseParameters::default()).unwrap();
        let path = temp_path("field.raw");

        write_raw(&field, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), field.len() * 8);

        let mut first = [0u8; 8];
        first.copy_from_slice(&bytes[..8]);
        assert_eq!(f64::from_le_bytes(first), field.as_slice()[0]);

        std::fs::remove_file(&path).ok();
    }
}
