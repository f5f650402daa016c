//! Rendering of noise fields into images.
//!
//! Requires the `image` feature.

use crate::{NoiseError, NoiseField, NoiseFloat, Result, palette};
use image::{Rgb, RgbImage};

/// Renders a field one pixel per value, colored by its [`palette`] bucket.
///
/// Linear fields become a strip one pixel high.
///
/// ```
/// use octave_noise::{Layout, NoiseParameters, SeedField, render};
///
/// let seed = SeedField::<f32>::from_seed(Layout::spatial(16, 8)?, 3)?;
/// let noise = seed.synthesize(&NoiseParameters::new(3, 2.0))?;
/// let image = render::gray_image(&noise)?;
///
/// assert_eq!(image.dimensions(), (16, 8));
/// # Ok::<(), octave_noise::NoiseError>(())
/// ```
pub fn gray_image<T: NoiseFloat>(field: &NoiseField<T>) -> Result<RgbImage> {
    let (width, height) = (field.width(), field.height());
    let invalid = || NoiseError::InvalidSize { width, height };
    let image_width = u32::try_from(width).map_err(|_| invalid())?;
    let image_height = u32::try_from(height).map_err(|_| invalid())?;

    let mut image = RgbImage::new(image_width, image_height);
    for (pixel, &value) in image.pixels_mut().zip(field.iter()) {
        *pixel = Rgb(palette::map(value).rgb());
    }

    Ok(image)
}

/// Appearance of a [`bar_chart()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BarStyle {
    /// Width of a bar in pixels.
    pub bar_width: u32,
    /// Empty columns between two bars.
    pub gap: u32,
    /// Height of a bar for a value of `1.0`.
    pub max_height: u32,
    /// Empty border around the chart.
    pub margin: u32,
    pub bar: [u8; 3],
    pub background: [u8; 3],
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            bar_width: 3,
            gap: 1,
            max_height: 500,
            margin: 20,
            bar: [0x80, 0x80, 0x80],
            background: [0x3e, 0x44, 0x44],
        }
    }
}

/// Renders every value of a field as a vertical bar standing on a common
/// baseline.
///
/// Values are clamped to `[0, 1]`; a bar is `value * max_height` pixels
/// high, rounded down. Spatial fields are drawn in storage order.
pub fn bar_chart<T: NoiseFloat>(
    field: &NoiseField<T>,
    style: &BarStyle,
) -> Result<RgbImage> {
    let invalid = || NoiseError::InvalidSize {
        width: field.len(),
        height: style.max_height as usize,
    };

    if style.bar_width == 0 {
        return Err(invalid());
    }
    let stride = style.bar_width.checked_add(style.gap).ok_or_else(invalid)?;
    let bars = u32::try_from(field.len()).map_err(|_| invalid())?;
    let border = style.margin.checked_mul(2).ok_or_else(invalid)?;
    let width = bars
        .checked_mul(stride)
        .and_then(|w| w.checked_add(border))
        .ok_or_else(invalid)?;
    let height = style.max_height.checked_add(border).ok_or_else(invalid)?;

    let baseline = style.margin + style.max_height;
    let heights: Vec<u32> = field
        .iter()
        .map(|&value| {
            let value = value.widen().clamp(0.0, 1.0);
            (value * style.max_height as f64) as u32
        })
        .collect();

    let mut image = RgbImage::from_pixel(width, height, Rgb(style.background));
    for (bar, &bar_height) in (0u32..).zip(heights.iter()) {
        let left = style.margin + bar * stride;
        for x in left..left + style.bar_width {
            for y in baseline - bar_height..baseline {
                image.put_pixel(x, y, Rgb(style.bar));
            }
        }
    }

    Ok(image)
}
