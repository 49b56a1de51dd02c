//! Hittable trait, hit records and the flat object list.

use crate::material::{Material, ScatterResult};
use lux_math::{Aabb, Interval, Ray, Vec3};
use rand::RngCore;
use std::sync::Arc;

/// Placeholder material for `HitRecord::default()`. Absorbs everything.
struct Absorber;

impl Material for Absorber {
    fn scatter(
        &self,
        _ray_in: &Ray,
        _rec: &HitRecord,
        _rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        None
    }
}

static ABSORBER: Absorber = Absorber;

/// Where a ray met a surface.
///
/// Transient: a fresh record is filled per intersection query and
/// never outlives the traversal that produced it.
#[derive(Clone)]
pub struct HitRecord<'a> {
    /// Hit point.
    pub p: Vec3,
    /// Surface normal, always oriented against the incoming ray.
    pub normal: Vec3,
    /// Material at the hit, borrowed from the primitive.
    pub material: &'a dyn Material,
    /// Surface parameterization.
    pub u: f32,
    pub v: f32,
    /// Ray parameter of the hit.
    pub t: f32,
    /// True when the ray arrived from outside the surface.
    pub front_face: bool,
}

impl<'a> Default for HitRecord<'a> {
    fn default() -> Self {
        Self {
            p: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: &ABSORBER,
            u: 0.0,
            v: 0.0,
            t: 0.0,
            front_face: false,
        }
    }
}

impl<'a> HitRecord<'a> {
    /// Store `outward_normal` flipped against the ray, remembering
    /// which side was hit. `outward_normal` must be unit length.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.front_face = ray.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Anything a ray can intersect.
pub trait Hittable: Send + Sync {
    /// Test for the closest intersection with `ray_t.min < t < ray_t.max`.
    ///
    /// Returns true and fills `rec` on a hit.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool;

    fn bounding_box(&self) -> Aabb;
}

/// A bag of hittables searched left to right.
///
/// The scan keeps the closest hit by shrinking the interval's upper
/// bound to the best `t` found so far.
pub struct HittableList {
    objects: Vec<Arc<dyn Hittable>>,
    bbox: Aabb,
}

impl HittableList {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            bbox: Aabb::EMPTY,
        }
    }

    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.bbox = Aabb::union(&self.bbox, &object.bounding_box());
        self.objects.push(object);
    }

    /// Move the children out, e.g. to rebuild them into a BVH.
    pub fn into_objects(self) -> Vec<Arc<dyn Hittable>> {
        self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if object.hit(ray, Interval::new(ray_t.min, closest_so_far), rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
