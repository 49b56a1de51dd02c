/// A closed scalar range `[min, max]`.
///
/// Used both as the valid-t window of a ray query and as one axis of a
/// bounding box. `EMPTY` is inverted (min = +inf, max = -inf) so that
/// taking the union with anything yields that thing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Smallest interval covering both `a` and `b`.
    pub fn union(a: Interval, b: Interval) -> Self {
        Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Inclusive on both endpoints.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Exclusive on both endpoints.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Grow by `delta / 2` on each side.
    pub fn expand(&self, delta: f32) -> Interval {
        let padding = delta / 2.0;
        Interval::new(self.min - padding, self.max + padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let i = Interval::new(0.0, 1.0);
        assert!(i.contains(0.0));
        assert!(i.contains(1.0));
        assert!(i.contains(0.5));
        assert!(!i.contains(-f32::EPSILON));
        assert!(!i.contains(1.0 + f32::EPSILON));
    }

    #[test]
    fn surrounds_is_exclusive() {
        let i = Interval::new(0.0, 1.0);
        assert!(!i.surrounds(0.0));
        assert!(!i.surrounds(1.0));
        assert!(i.surrounds(0.5));
    }

    #[test]
    fn empty_contains_nothing() {
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(!Interval::EMPTY.contains(f32::INFINITY));
        assert!(Interval::EMPTY.min > Interval::EMPTY.max);
    }

    #[test]
    fn universe_contains_everything() {
        assert!(Interval::UNIVERSE.contains(0.0));
        assert!(Interval::UNIVERSE.contains(-1e30));
        assert!(Interval::UNIVERSE.contains(1e30));
    }

    #[test]
    fn union_covers_both() {
        let u = Interval::union(Interval::new(-1.0, 0.5), Interval::new(0.0, 2.0));
        assert_eq!(u.min, -1.0);
        assert_eq!(u.max, 2.0);

        // Union with EMPTY is the identity
        let u = Interval::union(Interval::EMPTY, Interval::new(3.0, 4.0));
        assert_eq!(u, Interval::new(3.0, 4.0));
    }

    #[test]
    fn expand_pads_symmetrically() {
        let e = Interval::new(0.0, 1.0).expand(0.2);
        assert!((e.min - -0.1).abs() < 1e-6);
        assert!((e.max - 1.1).abs() < 1e-6);
    }

    #[test]
    fn clamp_pins_to_endpoints() {
        let i = Interval::new(0.0, 0.999);
        assert_eq!(i.clamp(-5.0), 0.0);
        assert_eq!(i.clamp(0.5), 0.5);
        assert_eq!(i.clamp(2.0), 0.999);
    }
}
