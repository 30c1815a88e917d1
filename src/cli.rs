//! Command-line argument parsing.

use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use crate::params::{GridSize, MapType, NoiseParameters};

/// Errors raised while turning arguments into parameters
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read parameter file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid parameter file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "perlinscape")]
#[command(about = "Perlin-noise height field generator", long_about = None)]
pub struct Args {
    /// Height mapping: plain (default), sine, ring
    #[arg(long, value_name = "MAP")]
    pub map: Option<String>,

    /// Sum this many octaves of noise (enables octave mode)
    #[arg(long, value_name = "COUNT")]
    pub octaves: Option<u32>,

    /// Amplitude falloff between octaves
    #[arg(long)]
    pub persistence: Option<f64>,

    /// Noise-space units per grid cell
    #[arg(long)]
    pub noise_scale: Option<f64>,

    /// Output multiplier for the plain map
    #[arg(long)]
    pub height_scale: Option<f64>,

    /// Noise displacement for the sine or ring map
    #[arg(long)]
    pub power: Option<f64>,

    /// Grid resolution along every axis
    #[arg(long, value_name = "CELLS", default_value_t = 128)]
    pub size: u32,

    /// JSON file with base parameters (flags override its values)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Z layer to write as PNG
    #[arg(long, value_name = "Z", default_value_t = 0)]
    pub layer: u32,

    /// PNG output path
    #[arg(long, value_name = "FILE", default_value = "heightfield.png")]
    pub output: PathBuf,

    /// Also dump the whole field as little-endian f64 values
    #[arg(long, value_name = "FILE")]
    pub raw: Option<PathBuf>,

    /// Write this many waterfall animation frames instead of a single layer
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    pub frames: usize,
}

impl Args {
    /// Parse the map name, falling back to plain for unknown names
    pub fn parse_map_type(&self, fallback: MapType) -> MapType {
        let Some(name) = self.map.as_deref() else {
            return fallback;
        };
        match name.to_lowercase().as_str() {
            "plain" | "1" => MapType::Plain,
            "sine" | "sin" | "2" => MapType::Sine,
            "ring" | "3" => MapType::Ring,
            other => {
                log::warn!("Unknown map type '{}', using plain", other);
                MapType::Plain
            }
        }
    }

    pub fn grid_size(&self) -> GridSize {
        GridSize::cube(self.size)
    }

    /// Build generation parameters from the optional file and flag overrides
    pub fn noise_parameters(&self) -> Result<NoiseParameters, CliError> {
        let mut params = match &self.params {
            Some(path) => load_parameters(path)?,
            None => NoiseParameters::default(),
        };

        params.map_type = self.parse_map_type(params.map_type);
        if let Some(octaves) = self.octaves {
            params.use_octaves = true;
            params.octave_count = octaves;
        }
        if let Some(persistence) = self.persistence {
            params.persistence = persistence;
        }
        if let Some(noise_scale) = self.noise_scale {
            params.noise_scale = noise_scale;
        }
        if let Some(height_scale) = self.height_scale {
            params.height_scale = height_scale;
        }
        if let Some(power) = self.power {
            match params.map_type {
                MapType::Sine => params.sin_power = power,
                MapType::Ring => params.ring_power = power,
                MapType::Plain => log::warn!("--power has no effect on the plain map"),
            }
        }

        Ok(params)
    }
}

fn load_parameters(path: &Path) -> Result<NoiseParameters, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("perlinscape").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.grid_size(), GridSize::cube(128));
        assert_eq!(args.noise_parameters().unwrap(), NoiseParameters::default());
    }

    #[test]
    fn test_flags_override() {
        let args = parse(&["--map", "ring", "--octaves", "4", "--power", "0.3", "--size", "32"]);
        let params = args.noise_parameters().unwrap();

        assert_eq!(params.map_type, MapType::Ring);
        assert!(params.use_octaves);
        assert_eq!(params.octave_count, 4);
        assert_eq!(params.ring_power, 0.3);
        assert_eq!(params.sin_power, 0.0);
        assert_eq!(args.grid_size(), GridSize::cube(32));
    }

    #[test]
    fn test_unknown_map_falls_back() {
        let args = parse(&["--map", "volcano"]);
        assert_eq!(args.parse_map_type(MapType::Sine), MapType::Plain);
    }

    #[test]
    fn test_params_file_then_flags() {
        let path = std::env::temp_dir().join(format!("perlinscape_{}_params.json", std::process::id()));
        std::fs::write(&path, r#"{ "map_type": "sine", "sin_power": 2.0, "noise_scale": 0.1 }"#)
            .unwrap();

        let args = parse(&["--params", path.to_str().unwrap(), "--noise-scale", "0.02"]);
        let params = args.noise_parameters().unwrap();
        assert_eq!(params.map_type, MapType::Sine);
        assert_eq!(params.sin_power, 2.0);
        assert_eq!(params.noise_scale, 0.02);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_params_file() {
        let args = parse(&["--params", "/nonexistent/perlinscape.json"]);
        assert!(matches!(args.noise_parameters(), Err(CliError::Io { .. })));
    }
}
