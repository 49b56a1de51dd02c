//! Plain-text PPM (P3) output.
//!
//! Three header lines (`P3`, `<width> <height>`, `255`) then one
//! `r g b` triple per pixel in row-major order. Written in one pass
//! from a fully assembled image, never incrementally.

use crate::material::Color;
use crate::renderer::ImageBuffer;
use lux_math::Interval;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Gamma 2 transform for storage.
#[inline]
fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Map a linear color channel to its output byte.
fn channel_byte(value: f32) -> u8 {
    const INTENSITY: Interval = Interval {
        min: 0.0,
        max: 0.999,
    };
    (256.0 * INTENSITY.clamp(linear_to_gamma(value))) as u8
}

/// One output line for a pixel.
fn format_color(color: Color) -> String {
    format!(
        "{} {} {}\n",
        channel_byte(color.x),
        channel_byte(color.y),
        channel_byte(color.z)
    )
}

/// Serialize `image` as P3 to `out`.
pub fn write(image: &ImageBuffer, out: &mut impl Write) -> io::Result<()> {
    write!(out, "P3\n{} {}\n255\n", image.width, image.height)?;
    for pixel in &image.pixels {
        out.write_all(format_color(*pixel).as_bytes())?;
    }
    Ok(())
}

/// Write `image` to a file at `path`.
pub fn save(image: &ImageBuffer, path: impl AsRef<Path>) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write(image, &mut out)?;
    out.flush()
}
