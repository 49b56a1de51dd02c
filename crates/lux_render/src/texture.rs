//! Texture evaluation: pure functions of (u, v, point).

use crate::material::Color;
use crate::perlin::Perlin;
use lux_math::{Interval, Vec3};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Shown wherever an image texture has nothing to sample.
const SENTINEL: Color = Color::new(1.0, 0.0, 1.0); // magenta

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("failed to decode texture image: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error reading texture: {0}")]
    Io(#[from] std::io::Error),
}

/// A color field over surface UV and world position.
///
/// Evaluation has no side effects; textures are shared read-only
/// across render threads.
pub trait Texture: Send + Sync {
    fn value(&self, u: f32, v: f32, p: Vec3) -> Color;
}

/// The same color everywhere.
pub struct SolidColor {
    albedo: Color,
}

impl SolidColor {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Texture for SolidColor {
    fn value(&self, _u: f32, _v: f32, _p: Vec3) -> Color {
        self.albedo
    }
}

/// 3D checkerboard switching between two textures on spatial parity.
pub struct CheckerTexture {
    inv_scale: f32,
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl CheckerTexture {
    pub fn new(scale: f32, even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        Self {
            inv_scale: 1.0 / scale,
            even,
            odd,
        }
    }

    pub fn from_colors(scale: f32, even: Color, odd: Color) -> Self {
        Self::new(
            scale,
            Arc::new(SolidColor::new(even)),
            Arc::new(SolidColor::new(odd)),
        )
    }
}

impl Texture for CheckerTexture {
    fn value(&self, u: f32, v: f32, p: Vec3) -> Color {
        // floor, not truncation: negative coordinates must alternate too
        let x = (self.inv_scale * p.x).floor() as i64;
        let y = (self.inv_scale * p.y).floor() as i64;
        let z = (self.inv_scale * p.z).floor() as i64;

        if (x + y + z) % 2 == 0 {
            self.even.value(u, v, p)
        } else {
            self.odd.value(u, v, p)
        }
    }
}

/// Decoded image with a clamped byte accessor.
pub struct RasterImage {
    width: u32,
    height: u32,
    /// Tightly packed RGB8, row-major, top row first.
    data: Vec<u8>,
}

impl RasterImage {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let rgb = image::open(path)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(Self {
            width,
            height,
            data: rgb.into_raw(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB bytes at (x, y); out-of-range indices clamp to the border.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        let idx = (y * self.width as usize + x) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    #[cfg(test)]
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), (width * height * 3) as usize);
        Self {
            width,
            height,
            data,
        }
    }
}

/// Samples a decoded image over clamped UV, V flipped to the
/// top-left-origin convention of image files.
pub struct ImageTexture {
    image: Option<RasterImage>,
}

impl ImageTexture {
    /// Loading never fails the render: a missing or unreadable file
    /// logs a warning and the texture shows the sentinel color.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let image = match RasterImage::load(path) {
            Ok(img) => Some(img),
            Err(err) => {
                log::warn!("could not load texture image {}: {err}", path.display());
                None
            }
        };
        Self { image }
    }

    pub fn from_image(image: RasterImage) -> Self {
        Self { image: Some(image) }
    }
}

impl Texture for ImageTexture {
    fn value(&self, u: f32, v: f32, _p: Vec3) -> Color {
        let Some(image) = &self.image else {
            return SENTINEL;
        };

        let unit = Interval::new(0.0, 1.0);
        let u = unit.clamp(u);
        let v = 1.0 - unit.clamp(v);

        let x = (u * image.width() as f32) as u32;
        let y = (v * image.height() as f32) as u32;
        let [r, g, b] = image.pixel(x, y);

        let scale = 1.0 / 255.0;
        Color::new(r as f32 * scale, g as f32 * scale, b as f32 * scale)
    }
}

/// Marble-like pattern: a sine along Z phase-shifted by turbulence.
pub struct NoiseTexture {
    noise: Perlin,
    scale: f32,
}

impl NoiseTexture {
    pub fn new(noise: Perlin, scale: f32) -> Self {
        Self { noise, scale }
    }
}

impl Texture for NoiseTexture {
    fn value(&self, _u: f32, _v: f32, p: Vec3) -> Color {
        Color::splat(0.5) * (1.0 + (self.scale * p.z + 10.0 * self.noise.turbulence(p, 7)).sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn solid_ignores_coordinates() {
        let tex = SolidColor::new(Color::new(0.1, 0.2, 0.3));
        assert_eq!(tex.value(0.0, 0.0, Vec3::ZERO), Color::new(0.1, 0.2, 0.3));
        assert_eq!(
            tex.value(0.9, 0.1, Vec3::new(100.0, -5.0, 3.0)),
            Color::new(0.1, 0.2, 0.3)
        );
    }

    #[test]
    fn checker_flips_at_integer_boundaries() {
        let white = Color::ONE;
        let black = Color::ZERO;
        let tex = CheckerTexture::from_colors(1.0, white, black);

        let a = tex.value(0.0, 0.0, Vec3::new(0.4, 0.0, 0.0));
        let b = tex.value(0.0, 0.0, Vec3::new(1.4, 0.0, 0.0));
        assert_ne!(a, b);

        // Each axis flips parity independently
        let c = tex.value(0.0, 0.0, Vec3::new(0.4, 1.4, 0.0));
        assert_ne!(a, c);
        let d = tex.value(0.0, 0.0, Vec3::new(0.4, 1.4, 1.4));
        assert_eq!(a, d);
    }

    #[test]
    fn checker_uses_floor_for_negative_coordinates() {
        let tex = CheckerTexture::from_colors(1.0, Color::ONE, Color::ZERO);

        // -0.5 floors to -1, 0.5 floors to 0: opposite cells
        let neg = tex.value(0.0, 0.0, Vec3::new(-0.5, 0.0, 0.0));
        let pos = tex.value(0.0, 0.0, Vec3::new(0.5, 0.0, 0.0));
        assert_ne!(neg, pos);
    }

    #[test]
    fn missing_image_shows_sentinel() {
        let tex = ImageTexture::open("/nonexistent/not_a_real_file.png");
        assert_eq!(tex.value(0.5, 0.5, Vec3::ZERO), SENTINEL);
    }

    #[test]
    fn image_texture_flips_v() {
        // 1x2 image: red on the top row, blue on the bottom
        let img = RasterImage::from_raw(1, 2, vec![255, 0, 0, 0, 0, 255]);
        let tex = ImageTexture::from_image(img);

        // v = 1 is the top of the texture, which is the first row
        let top = tex.value(0.5, 0.99, Vec3::ZERO);
        assert!(top.x > 0.9 && top.z < 0.1);

        let bottom = tex.value(0.5, 0.01, Vec3::ZERO);
        assert!(bottom.z > 0.9 && bottom.x < 0.1);
    }

    #[test]
    fn image_accessor_clamps_indices() {
        let img = RasterImage::from_raw(2, 1, vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(img.pixel(5, 9), [40, 50, 60]);
    }

    #[test]
    fn noise_texture_stays_in_gamut() {
        let mut rng = StdRng::seed_from_u64(5);
        let tex = NoiseTexture::new(Perlin::new(&mut rng), 4.0);

        for i in 0..100 {
            let p = Vec3::splat(i as f32 * 0.13);
            let c = tex.value(0.0, 0.0, p);
            assert!(c.x >= 0.0 && c.x <= 1.0 + 1e-4);
        }
    }
}
