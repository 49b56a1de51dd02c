//! Math primitives shared across the lux renderer.
//!
//! `Vec3` comes straight from glam; rays, scalar intervals and
//! bounding boxes are our own.

pub use glam::Vec3;

mod aabb;
mod interval;
mod ray;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;
