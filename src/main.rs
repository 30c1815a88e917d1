//! Perlinscape - generate Perlin-noise height fields and export their layers.

use std::time::Instant;

use clap::Parser;

use perlinscape::cli::Args;
use perlinscape::controls::Command;
use perlinscape::export::{numbered_path, write_layer_png, write_raw, ValueRange};
use perlinscape::session::ViewerSession;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let params = args.noise_parameters()?;
    let size = args.grid_size();

    println!("Perlinscape height field");
    println!("  Map: {}", params.map_type.name());
    println!("  Grid: {}x{}x{}", size.x, size.y, size.z);
    if params.use_octaves {
        println!(
            "  Octaves: {} (persistence {})",
            params.octave_count, params.persistence
        );
    }
    println!("  Noise scale: {}", params.noise_scale);

    let range = ValueRange::for_params(&params);
    let mut session = ViewerSession::new(size, params);

    let start = Instant::now();
    session.frame()?;
    println!("  Generated in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);

    if let Some((min, max)) = session.field().min_max() {
        println!("  Values: [{:.4}, {:.4}]", min, max);
    }

    if let Some(raw) = &args.raw {
        write_raw(session.field(), raw)?;
        println!("  Raw: {}", raw.display());
    }

    if args.frames == 0 {
        let layer = session
            .field()
            .layer(args.layer)
            .ok_or_else(|| format!("layer {} is outside the {}-cell grid", args.layer, size.z))?;
        write_layer_png(&layer, range, &args.output)?;
        println!("  Output: {}", args.output.display());
        return Ok(());
    }

    session.apply(Command::ToggleAdvance);
    let mut written = 0;
    for frame in 0..args.frames {
        let update = session.frame()?;
        let Some(level) = update.layer else {
            continue;
        };
        match session.layer(level) {
            Some(layer) => {
                write_layer_png(&layer, range, &numbered_path(&args.output, frame))?;
                written += 1;
            }
            None => log::warn!("Frame {}: level {} is outside the grid, skipped", frame, level),
        }
    }
    println!("  Frames: {} written next to {}", written, args.output.display());

    Ok(())
}
