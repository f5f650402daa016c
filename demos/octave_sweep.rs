//! Renders the same seed with every octave count side by side, then with a
//! range of biases, to show how both parameters shape the result.

use image::{GenericImage, RgbImage};
use octave_noise::{Layout, NoiseGenerator, NoiseParameters, render};

const SIZE: usize = 128;
const BIASES: [f32; 5] = [0.2, 1.0, 2.0, 5.0, 10.0];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let layout = Layout::spatial(SIZE, SIZE)?;
    let mut generator =
        NoiseGenerator::with_seed(42, layout, NoiseParameters::default())?;
    generator.generate()?;

    let max = generator.max_octaves();
    let tile = SIZE as u32;
    let mut sheet = RgbImage::new(tile * max, tile * 2);

    // Top row: octaves 1..=max with the default bias.
    for octaves in 1..=max {
        generator.set_octaves(octaves)?;
        let image = render::gray_image(&generator.refresh()?)?;
        sheet.copy_from(&image, tile * (octaves - 1), 0)?;
    }

    // Bottom row: all octaves, increasing bias.
    for (column, bias) in (0u32..).zip(BIASES) {
        generator.set_bias(bias)?;
        let image = render::gray_image(&generator.refresh()?)?;
        sheet.copy_from(&image, tile * column, tile)?;
    }

    sheet.save("octave_sweep.png")?;
    println!("Wrote octave_sweep.png ({max} octaves, {} biases)", BIASES.len());

    Ok(())
}
