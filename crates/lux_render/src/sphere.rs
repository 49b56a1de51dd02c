//! Sphere primitive, stationary or moving over the shutter interval.

use crate::hittable::{HitRecord, Hittable};
use crate::material::Material;
use lux_math::{Aabb, Interval, Ray, Vec3};
use std::f32::consts::PI;
use std::sync::Arc;

/// A sphere whose center may move linearly during the exposure.
///
/// The center is stored as a ray over shutter time: `center.at(0)` is
/// the position at shutter open, `center.at(1)` at shutter close. A
/// stationary sphere is the degenerate case with a zero direction.
pub struct Sphere {
    center: Ray,
    radius: f32,
    material: Arc<dyn Material>,
    bbox: Aabb,
}

impl Sphere {
    pub fn stationary(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vec3::splat(radius);
        Self {
            center: Ray::at_rest(center, Vec3::ZERO),
            radius,
            material,
            bbox: Aabb::from_points(center - rvec, center + rvec),
        }
    }

    /// Sphere moving from `center0` to `center1` over the shutter.
    /// Its box covers both endpoint boxes.
    pub fn moving(center0: Vec3, center1: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vec3::splat(radius);
        let box0 = Aabb::from_points(center0 - rvec, center0 + rvec);
        let box1 = Aabb::from_points(center1 - rvec, center1 + rvec);
        Self {
            center: Ray::at_rest(center0, center1 - center0),
            radius,
            material,
            bbox: Aabb::union(&box0, &box1),
        }
    }

    /// Spherical-angle parameterization of a point on the unit sphere.
    /// u wraps around the Y axis from +X, v runs pole to pole.
    fn sphere_uv(p: Vec3) -> (f32, f32) {
        let theta = (-p.y).acos();
        let phi = (-p.z).atan2(p.x) + PI;
        (phi / (2.0 * PI), theta / PI)
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let current_center = self.center.at(ray.time);
        let oc = current_center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }
        let sqrtd = discriminant.sqrt();

        // Prefer the nearer root, fall back to the farther one
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = ray.at(rec.t);
        let outward_normal = (rec.p - current_center) / self.radius;
        rec.set_face_normal(ray, outward_normal);
        (rec.u, rec.v) = Self::sphere_uv(outward_normal);
        rec.material = self.material.as_ref();

        true
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;

    fn gray() -> Arc<dyn Material> {
        Arc::new(Lambertian::from_color(Vec3::splat(0.5)))
    }

    #[test]
    fn head_on_ray_hits_at_the_near_surface() {
        let sphere = Sphere::stationary(Vec3::new(0.0, 0.0, -2.0), 0.5, gray());
        let ray = Ray::at_rest(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
        assert!((rec.t - 1.5).abs() < 1e-4);
        assert!(rec.front_face);
    }

    #[test]
    fn normal_opposes_the_ray() {
        let sphere = Sphere::stationary(Vec3::new(0.0, 0.0, -2.0), 0.5, gray());

        // From outside
        let ray = Ray::at_rest(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
        assert!(ray.direction.dot(rec.normal) <= 0.0);

        // From inside: the normal must still oppose the ray
        let ray = Ray::at_rest(Vec3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, -1.0));
        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
        assert!(ray.direction.dot(rec.normal) <= 0.0);
        assert!(!rec.front_face);
    }

    #[test]
    fn ray_pointing_away_never_hits() {
        let sphere = Sphere::stationary(Vec3::new(0.0, 0.0, -2.0), 0.5, gray());
        let ray = Ray::at_rest(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

        let mut rec = HitRecord::default();
        assert!(!sphere.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
    }

    #[test]
    fn nearer_root_outside_interval_falls_back_to_farther() {
        let sphere = Sphere::stationary(Vec3::new(0.0, 0.0, -2.0), 0.5, gray());
        let ray = Ray::at_rest(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Window opens past the near surface (t=1.5) but before the far one (t=2.5)
        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, Interval::new(2.0, f32::INFINITY), &mut rec));
        assert!((rec.t - 2.5).abs() < 1e-4);

        // Window past both roots: miss
        let mut rec = HitRecord::default();
        assert!(!sphere.hit(&ray, Interval::new(3.0, f32::INFINITY), &mut rec));
    }

    #[test]
    fn moving_sphere_follows_the_ray_time() {
        let sphere = Sphere::moving(
            Vec3::new(0.0, 0.0, -2.0),
            Vec3::new(4.0, 0.0, -2.0),
            0.5,
            gray(),
        );

        // At t=0 the sphere is at x=0
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 0.0);
        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));

        // At t=1 it has moved to x=4 and the same ray misses
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 1.0);
        let mut rec = HitRecord::default();
        assert!(!sphere.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));

        // The box covers the whole sweep
        let bbox = sphere.bounding_box();
        assert_eq!(bbox.x.min, -0.5);
        assert_eq!(bbox.x.max, 4.5);
    }

    #[test]
    fn uv_poles_and_equator() {
        let (u, v) = Sphere::sphere_uv(Vec3::new(0.0, 1.0, 0.0));
        assert!((v - 1.0).abs() < 1e-5);
        let _ = u; // u is degenerate at the poles

        let (u, v) = Sphere::sphere_uv(Vec3::new(1.0, 0.0, 0.0));
        assert!((u - 0.5).abs() < 1e-5);
        assert!((v - 0.5).abs() < 1e-5);
    }
}
