//! lux renderer - CPU path tracing
//!
//! A Monte Carlo path tracer: scenes are built from hittable
//! primitives with shared materials and textures, the camera shoots
//! jittered primary rays, and a fixed thread pool renders one image
//! row per job before the rows are assembled and written out as PPM.

mod bvh;
mod camera;
mod hittable;
mod material;
mod perlin;
mod pool;
pub mod ppm;
mod progress;
mod quad;
mod renderer;
mod sampling;
mod sphere;
mod texture;

pub use bvh::BvhNode;
pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, DiffuseLight, Lambertian, Material, Metal, ScatterResult};
pub use perlin::Perlin;
pub use pool::{PoolError, ThreadPool};
pub use progress::Progress;
pub use quad::{boxed, Quad};
pub use renderer::{ray_color, render, ImageBuffer, RenderConfig, RenderError};
pub use sphere::Sphere;
pub use texture::{CheckerTexture, ImageTexture, NoiseTexture, RasterImage, SolidColor, Texture};

/// Re-export the math types the public API speaks in.
pub use lux_math::{Aabb, Interval, Ray, Vec3};
