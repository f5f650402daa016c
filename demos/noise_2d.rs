//! Renders a 2D noise image, the way the desktop front end shows it.
//!
//! Usage: `cargo run --example noise_2d -- [width] [octaves] [bias]`

use octave_noise::{Layout, NoiseParameters, SeedField, render};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = env::args().skip(1);
    let width: usize = args.next().map_or(Ok(256), |a| a.parse())?;
    let octaves: u32 = args.next().map_or(Ok(8), |a| a.parse())?;
    let bias: f32 = args.next().map_or(Ok(2.0), |a| a.parse())?;

    // The front end only offers square images.
    let layout = Layout::spatial(width, width)?;
    let seed = SeedField::<f32>::from_entropy(layout)?;
    let noise = seed.synthesize(&NoiseParameters::new(octaves, bias))?;

    let path = format!("noise_2d_{width}_{octaves}_{bias}.png");
    render::gray_image(&noise)?.save(&path)?;
    println!("Wrote {path}");

    Ok(())
}
