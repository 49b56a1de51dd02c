//! Render orchestration: the recursive radiance estimator and the
//! per-row parallel scheduler.

use crate::camera::Camera;
use crate::hittable::{HitRecord, Hittable};
use crate::material::Color;
use crate::pool::{PoolError, ThreadPool};
use crate::progress::Progress;
use lux_math::{Interval, Ray};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::mpsc;
use std::sync::Arc;
use thiserror::Error;

/// Render quality and environment settings.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Primary rays per pixel.
    pub samples_per_pixel: u32,
    /// Recursion cutoff for the radiance estimator.
    pub max_depth: u32,
    /// Radiance for rays that leave the scene.
    pub background: Color,
    /// Use the blue-white sky gradient instead of `background`.
    pub use_sky_gradient: bool,
    /// Base seed for per-row RNGs; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Worker threads; 0 means one per available core.
    pub threads: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            background: Color::ZERO,
            use_sky_gradient: false,
            seed: None,
            threads: 0,
        }
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("render aborted: {0}")]
    Pool(#[from] PoolError),

    /// A row job completed without delivering its pixels. Should be
    /// unreachable; guards against ever writing a partial image.
    #[error("row {0} was never delivered")]
    MissingRow(u32),
}

/// Radiance arriving along `ray`.
///
/// Plain recursion with a hard depth cutoff: emitted light plus the
/// attenuated estimate along the scattered ray.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let mut rec = HitRecord::default();
    if !world.hit(ray, Interval::new(0.001, f32::INFINITY), &mut rec) {
        if config.use_sky_gradient {
            return sky_gradient(ray);
        }
        return config.background;
    }

    let emission = rec.material.emitted(rec.u, rec.v, rec.p);

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            let scattered = ray_color(&result.scattered, world, depth - 1, config, rng);
            emission + result.attenuation * scattered
        }
        None => emission,
    }
}

/// The classic white-to-blue gradient over the ray's vertical angle.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    Color::ONE * (1.0 - a) + Color::new(0.5, 0.7, 1.0) * a
}

/// Final assembled image, one linear color per pixel, row-major.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Accumulated (unaveraged) sample sums for one image row.
fn render_row(
    camera: &Camera,
    world: &dyn Hittable,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Vec<Color> {
    let mut row = Vec::with_capacity(camera.image_width as usize);
    for i in 0..camera.image_width {
        let mut pixel_color = Color::ZERO;
        for _ in 0..config.samples_per_pixel {
            let ray = camera.get_ray(i, j, rng);
            pixel_color += ray_color(&ray, world, config.max_depth, config, rng);
        }
        row.push(pixel_color);
    }
    row
}

/// RNG for one row job: reproducible when a seed is configured.
fn row_rng(config: &RenderConfig, row: u32) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ (row as u64).wrapping_mul(0x9e3779b97f4a7c15)),
        None => StdRng::from_entropy(),
    }
}

/// Render the scene, one pool job per image row.
///
/// Each job owns its row buffer and its own RNG; rows come back over
/// a channel and are assembled (with the 1/samples averaging weight
/// applied) only after the completion barrier. Any panicked job fails
/// the whole render before an image exists.
pub fn render(
    camera: &Camera,
    world: Arc<dyn Hittable>,
    config: &RenderConfig,
    progress: &Arc<Progress>,
) -> Result<ImageBuffer, RenderError> {
    let width = camera.image_width;
    let height = camera.image_height();

    let mut pool = if config.threads == 0 {
        ThreadPool::new()
    } else {
        ThreadPool::with_threads(config.threads)
    };
    log::info!(
        "rendering {width}x{height} at {} spp on {} threads",
        config.samples_per_pixel,
        pool.thread_count()
    );

    let (tx, rx) = mpsc::channel::<(u32, Vec<Color>)>();

    for j in 0..height {
        let camera = camera.clone();
        let world = world.clone();
        let config = config.clone();
        let progress = progress.clone();
        let tx = tx.clone();

        pool.submit(move || {
            let mut rng = row_rng(&config, j);
            let row = render_row(&camera, world.as_ref(), j, &config, &mut rng);
            // The coordinator holds the receiver for the whole render
            let _ = tx.send((j, row));
            progress.row_done();
        });
    }
    drop(tx);

    // Full barrier: no image is assembled until every row finished
    pool.await_all()?;
    pool.shutdown();

    let samples_scale = 1.0 / config.samples_per_pixel as f32;
    let mut image = ImageBuffer::new(width, height);
    let mut rows_seen = vec![false; height as usize];

    for (j, row) in rx.try_iter() {
        rows_seen[j as usize] = true;
        for (i, sum) in row.into_iter().enumerate() {
            image.set(i as u32, j, sum * samples_scale);
        }
    }

    if let Some(missing) = rows_seen.iter().position(|seen| !seen) {
        return Err(RenderError::MissingRow(missing as u32));
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::HittableList;
    use crate::material::{DiffuseLight, Lambertian};
    use crate::sphere::Sphere;
    use lux_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn one_sphere_world(material: Arc<dyn crate::Material>) -> Arc<dyn Hittable> {
        let mut list = HittableList::new();
        list.add(Arc::new(Sphere::stationary(
            Vec3::new(0.0, 0.0, -2.0),
            0.5,
            material,
        )));
        Arc::new(list)
    }

    #[test]
    fn depth_zero_is_black_regardless_of_scene() {
        let world = one_sphere_world(Arc::new(Lambertian::from_color(Color::ONE)));
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(1);

        let ray = Ray::at_rest(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(
            ray_color(&ray, world.as_ref(), 0, &config, &mut rng),
            Color::ZERO
        );
    }

    #[test]
    fn missing_everything_returns_the_background() {
        let world: Arc<dyn Hittable> = Arc::new(HittableList::new());
        let config = RenderConfig {
            background: Color::new(0.1, 0.2, 0.3),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);

        let ray = Ray::at_rest(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(
            ray_color(&ray, world.as_ref(), 10, &config, &mut rng),
            Color::new(0.1, 0.2, 0.3)
        );
    }

    #[test]
    fn emissive_hit_returns_exactly_the_emission() {
        let emission = Color::new(3.0, 2.0, 1.0);
        let world = one_sphere_world(Arc::new(DiffuseLight::from_color(emission)));
        let config = RenderConfig {
            background: Color::ZERO,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let ray = Ray::at_rest(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Independent of the remaining depth
        for depth in [1, 5, 50] {
            assert_eq!(
                ray_color(&ray, world.as_ref(), depth, &config, &mut rng),
                emission
            );
        }
    }

    #[test]
    fn sky_gradient_matches_the_formula() {
        let ray = Ray::at_rest(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!((sky_gradient(&ray) - Color::new(0.5, 0.7, 1.0)).length() < 1e-5);

        let ray = Ray::at_rest(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        assert!((sky_gradient(&ray) - Color::ONE).length() < 1e-5);
    }

    #[test]
    fn render_fills_every_pixel() {
        let world = one_sphere_world(Arc::new(Lambertian::from_color(Color::splat(0.5))));
        let mut camera = Camera::new().with_image(2.0, 16);
        camera.initialize();

        let config = RenderConfig {
            samples_per_pixel: 4,
            max_depth: 5,
            background: Color::new(0.2, 0.4, 0.6),
            seed: Some(42),
            threads: 4,
            ..Default::default()
        };
        let progress = Arc::new(Progress::silent(camera.image_height() as usize));

        let image = render(&camera, world, &config, &progress).unwrap();
        assert_eq!(image.width, 16);
        assert_eq!(image.height, 8);
        assert_eq!(progress.done(), 8);

        // A corner pixel sees only background; averaging must bring
        // the sums back into the configured radiance
        let corner = image.get(0, 0);
        assert!((corner - Color::new(0.2, 0.4, 0.6)).length() < 1e-4);
    }

    #[test]
    fn seeded_renders_are_reproducible() {
        let world = one_sphere_world(Arc::new(Lambertian::from_color(Color::splat(0.5))));
        let mut camera = Camera::new().with_image(2.0, 8);
        camera.initialize();

        let config = RenderConfig {
            samples_per_pixel: 8,
            max_depth: 10,
            use_sky_gradient: true,
            seed: Some(7),
            threads: 2,
            ..Default::default()
        };
        let progress = Arc::new(Progress::silent(1));

        let a = render(&camera, world.clone(), &config, &progress).unwrap();
        let b = render(&camera, world, &config, &progress).unwrap();
        assert_eq!(a.pixels, b.pixels);
    }
}
