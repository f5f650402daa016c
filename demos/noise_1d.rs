//! Draws 1D noise as a bar chart.
//!
//! Usage: `cargo run --example noise_1d -- [size] [octaves] [bias]`

use octave_noise::{
    Layout, NoiseParameters, SeedField,
    render::{self, BarStyle},
};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = env::args().skip(1);
    let size: usize = args.next().map_or(Ok(256), |a| a.parse())?;
    let octaves: u32 = args.next().map_or(Ok(8), |a| a.parse())?;
    let bias: f32 = args.next().map_or(Ok(2.0), |a| a.parse())?;

    let seed = SeedField::<f32>::from_entropy(Layout::linear(size)?)?;
    let noise = seed.synthesize(&NoiseParameters::new(octaves, bias))?;

    print_sparkline(noise.as_slice());

    let path = format!("noise_1d_{size}_{octaves}_{bias}.png");
    render::bar_chart(&noise, &BarStyle::default())?.save(&path)?;
    println!("Wrote {path}");

    Ok(())
}

/// Prints every fourth value as a block character.
fn print_sparkline(values: &[f32]) {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

    let line: String = values
        .iter()
        .step_by(4)
        .map(|&v| BLOCKS[((v * 8.0) as usize).min(7)])
        .collect();
    println!("{line}");
}
