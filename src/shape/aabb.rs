use crate::{Fp, Vec3};

/// Axis-aligned box stored as a centre and half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    origin: Vec3,
    extents: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Aabb::new(Vec3::ZERO, Vec3::ONE)
    }
}

impl Aabb {
    /// Box centred on `origin` spanning `size` along each axis.
    #[inline]
    pub fn new(origin: Vec3, size: Vec3) -> Aabb {
        Aabb { origin, extents: size * 0.5 }
    }
    #[inline]
    pub fn from_extents(origin: Vec3, extents: Vec3) -> Aabb {
        Aabb { origin, extents }
    }
    pub fn from_min_max(min: Vec3, max: Vec3) -> Aabb {
        assert!(min.cmple(max).all(), "invalid AABB: min > max");
        Aabb { origin: (min + max) * 0.5, extents: (max - min) * 0.5 }
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }
    #[inline]
    pub fn extents(&self) -> Vec3 {
        self.extents
    }
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.extents * 2.0
    }
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.origin - self.extents
    }
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.origin + self.extents
    }

    #[inline]
    pub fn corner(&self, n: usize) -> Vec3 {
        //! Bits 0, 1 and 2 of `n` pick max over min on x, y and z respectively.
        let (min, max) = (self.min(), self.max());
        Vec3::new(
            if n & 1 != 0 { max.x } else { min.x },
            if n & 2 != 0 { max.y } else { min.y },
            if n & 4 != 0 { max.z } else { min.z },
        )
    }
    pub fn vertices(&self) -> [Vec3; 8] {
        let mut verts = [Vec3::ZERO; 8];
        for (n, v) in verts.iter_mut().enumerate() {
            *v = self.corner(n);
        }
        verts
    }

    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        //! Inclusive of the faces.
        point.cmpge(self.min()).all() && point.cmple(self.max()).all()
    }
    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min(), self.max())
    }
    #[inline]
    pub fn distance_sqr(&self, point: Vec3) -> Fp {
        (point - self.closest_point(point)).length_squared()
    }
    #[inline]
    pub fn distance(&self, point: Vec3) -> Fp {
        self.distance_sqr(point).sqrt()
    }

    pub fn normal(&self, point: Vec3) -> Vec3 {
        //! Estimates the face normal at `point` from whichever extent the
        //! point's local coordinate lies closest to.
        let local = point - self.origin;
        let mut best = Fp::MAX;
        let mut normal = Vec3::ZERO;
        for i in 0..3 {
            let dist = Fp::abs(self.extents[i] - local[i].abs());
            if dist < best {
                best = dist;
                normal = Vec3::ZERO;
                normal[i] = if local[i] < 0.0 { -1.0 } else { 1.0 };
            }
        }
        normal
    }

    #[inline]
    pub fn expanded(&self, amount: Fp) -> Aabb {
        //! Grows every extent by `amount`, keeping the centre.
        self.expanded_by(Vec3::splat(amount))
    }
    #[inline]
    pub fn expanded_by(&self, amount: Vec3) -> Aabb {
        Aabb { origin: self.origin, extents: self.extents + amount }
    }
    #[inline]
    pub fn encapsulate_point(&self, point: Vec3) -> Aabb {
        Aabb::from_min_max(self.min().min(point), self.max().max(point))
    }
    #[inline]
    pub fn encapsulate(&self, other: &Aabb) -> Aabb {
        Aabb::from_min_max(self.min().min(other.min()), self.max().max(other.max()))
    }

    pub(crate) fn bounding(points: &[Vec3]) -> Aabb {
        let mut min = Vec3::splat(Fp::MAX);
        let mut max = Vec3::splat(Fp::MIN);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        Aabb::from_min_max(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn derived_bounds() {
        let aabb = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.extents(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.min(), Vec3::new(0.0, -2.0, -3.0));
        assert_eq!(aabb.max(), Vec3::new(2.0, 2.0, 3.0));
        assert_eq!(aabb.size(), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(Aabb::from_min_max(aabb.min(), aabb.max()), aabb);
    }

    #[test]
    fn corners_follow_axis_bits() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(2.0));
        assert_eq!(aabb.corner(0), Vec3::splat(-1.0));
        assert_eq!(aabb.corner(7), Vec3::splat(1.0));
        assert_eq!(aabb.corner(1), Vec3::new(1.0, -1.0, -1.0));
        assert_eq!(aabb.corner(2), Vec3::new(-1.0, 1.0, -1.0));
        assert_eq!(aabb.corner(4), Vec3::new(-1.0, -1.0, 1.0));
        assert_eq!(aabb.corner(6), Vec3::new(-1.0, 1.0, 1.0));

        let verts = aabb.vertices();
        for (i, v) in verts.iter().enumerate() {
            assert!(!verts[i + 1..].contains(v));
        }
    }

    #[test]
    fn point_queries() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(2.0));
        let p = Vec3::new(0.0, 0.0, 1.5);
        assert!(!aabb.contains(p));
        assert!(aabb.contains(Vec3::new(1.0, -1.0, 0.5)));
        assert_eq!(aabb.closest_point(p), Vec3::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(aabb.distance(p), 0.5);
        assert_abs_diff_eq!(aabb.distance_sqr(Vec3::new(2.0, 2.0, 0.0)), 2.0);
        assert_eq!(aabb.distance(Vec3::ZERO), 0.0);
    }

    #[test]
    fn face_normals() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(2.0));
        assert_eq!(aabb.normal(Vec3::new(1.0, 0.2, -0.3)), Vec3::X);
        assert_eq!(aabb.normal(Vec3::new(0.1, -1.0, 0.0)), -Vec3::Y);
        assert_eq!(aabb.normal(Vec3::new(0.0, 0.5, -1.0)), -Vec3::Z);
    }

    #[test]
    fn grow_and_encapsulate() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(2.0)).expanded(0.5);
        assert_eq!(aabb.max(), Vec3::splat(1.5));
        assert_eq!(aabb.size(), Vec3::splat(3.0));

        let grown = Aabb::new(Vec3::ZERO, Vec3::splat(2.0)).encapsulate_point(Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(grown.min(), Vec3::splat(-1.0));
        assert_eq!(grown.max(), Vec3::new(3.0, 1.0, 1.0));

        let other = Aabb::new(Vec3::splat(-4.0), Vec3::splat(1.0));
        let both = grown.encapsulate(&other);
        assert_eq!(both.min(), Vec3::splat(-4.5));
        assert_eq!(both.max(), Vec3::new(3.0, 1.0, 1.0));
    }
}
