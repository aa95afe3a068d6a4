use crate::{error::Error, Fp, Result, Vec3};

use super::{Aabb, Line, Plane, Segment};

/// Half-size along each world axis of a disc of `radius` facing `normal`.
#[inline]
fn disc_extents(normal: Vec3, radius: Fp) -> Vec3 {
    let k = (Vec3::ONE - normal * normal).max(Vec3::ZERO);
    Vec3::new(k.x.sqrt(), k.y.sqrt(), k.z.sqrt()) * radius
}

/// Pulls `point` back within `radius` of `core`, the nearest point of a
/// shape's inner skeleton.
#[inline]
fn inflate(core: Vec3, point: Vec3, radius: Fp) -> Vec3 {
    core + (point - core).clamp_length_max(radius)
}

// ---------- Sphere ---------- //

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: Fp,
}

impl Sphere {
    #[inline]
    pub fn new(origin: Vec3, radius: Fp) -> Sphere {
        Sphere { origin, radius }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_extents(self.origin, Vec3::splat(self.radius))
    }
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.origin).length_squared() <= self.radius * self.radius
    }
    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        //! Points inside the sphere are their own closest point.
        inflate(self.origin, point, self.radius)
    }
    #[inline]
    pub fn distance(&self, point: Vec3) -> Fp {
        Fp::max((point - self.origin).length() - self.radius, 0.0)
    }
}

// ---------- Cylinder ---------- //

/// Capped cylinder centred on `origin`, spanning `height` along the unit
/// `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub origin: Vec3,
    pub direction: Vec3,
    pub height: Fp,
    pub radius: Fp,
}

impl Cylinder {
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3, height: Fp, radius: Fp) -> Cylinder {
        Cylinder { origin, direction, height, radius }
    }

    #[inline]
    pub fn top(&self) -> Vec3 {
        self.origin + self.direction * (self.height * 0.5)
    }
    #[inline]
    pub fn bottom(&self) -> Vec3 {
        self.origin - self.direction * (self.height * 0.5)
    }
    #[inline]
    pub fn caps(&self) -> (Plane, Plane) {
        //! Returns the top and bottom cap planes, both facing outward.
        (
            Plane::from_point(self.direction, self.top()),
            Plane::from_point(-self.direction, self.bottom()),
        )
    }
    #[inline]
    pub fn axis(&self) -> Line {
        Line::new(self.origin, self.direction)
    }

    pub fn aabb(&self) -> Aabb {
        let extents = (self.direction * (self.height * 0.5)).abs()
            + disc_extents(self.direction, self.radius);
        Aabb::from_extents(self.origin, extents)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        let local = point - self.origin;
        let axial = local.dot(self.direction);
        Fp::abs(axial) <= self.height * 0.5
            && (local - self.direction * axial).length_squared() <= self.radius * self.radius
    }
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let half = self.height * 0.5;
        let local = point - self.origin;
        let axial = local.dot(self.direction);
        let radial = (local - self.direction * axial).clamp_length_max(self.radius);
        self.origin + self.direction * axial.clamp(-half, half) + radial
    }
    #[inline]
    pub fn distance(&self, point: Vec3) -> Fp {
        (point - self.closest_point(point)).length()
    }
}

// ---------- Infinite Cylinder ---------- //

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteCylinder {
    pub origin: Vec3,
    pub direction: Vec3,
    pub radius: Fp,
}

impl InfiniteCylinder {
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3, radius: Fp) -> InfiniteCylinder {
        InfiniteCylinder { origin, direction, radius }
    }

    #[inline]
    pub fn axis(&self) -> Line {
        Line::new(self.origin, self.direction)
    }
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        self.axis().distance_point_sqr(point) <= self.radius * self.radius
    }
    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        inflate(self.axis().closest_point(point), point, self.radius)
    }
    #[inline]
    pub fn distance(&self, point: Vec3) -> Fp {
        Fp::max(self.axis().distance_point(point) - self.radius, 0.0)
    }
}

// ---------- Capsule ---------- //

/// Cylinder of `height` along the unit `direction` with hemispherical ends
/// of the same `radius` centred on its axis endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    pub origin: Vec3,
    pub direction: Vec3,
    pub height: Fp,
    pub radius: Fp,
}

impl Capsule {
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3, height: Fp, radius: Fp) -> Capsule {
        Capsule { origin, direction, height, radius }
    }
    pub fn from_endpoints(a: Vec3, b: Vec3, radius: Fp) -> Result<Capsule> {
        //! Capsule whose axis runs from `a` (bottom) to `b` (top).
        if a == b {
            return Err(Error::Degenerate("capsule endpoints coincide"));
        }
        Ok(Capsule::spanning(a, b, radius))
    }
    /// As [`Capsule::from_endpoints`], but coincident endpoints give a sphere
    /// with a zero direction rather than an error.
    #[inline]
    pub(crate) fn spanning(a: Vec3, b: Vec3, radius: Fp) -> Capsule {
        let ab = b - a;
        Capsule {
            origin: (a + b) * 0.5,
            direction: ab.normalize_or_zero(),
            height: ab.length(),
            radius,
        }
    }

    #[inline]
    pub fn top(&self) -> Vec3 {
        self.origin + self.direction * (self.height * 0.5)
    }
    #[inline]
    pub fn bottom(&self) -> Vec3 {
        self.origin - self.direction * (self.height * 0.5)
    }
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.bottom(), self.top())
    }

    pub fn aabb(&self) -> Aabb {
        let r = Vec3::splat(self.radius);
        let (top, bottom) = (self.top(), self.bottom());
        Aabb::from_min_max(top.min(bottom) - r, top.max(bottom) + r)
    }

    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        self.segment().distance_point_sqr(point) <= self.radius * self.radius
    }
    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        inflate(self.segment().closest_point(point), point, self.radius)
    }
    #[inline]
    pub fn distance(&self, point: Vec3) -> Fp {
        Fp::max(self.segment().distance_point(point) - self.radius, 0.0)
    }
}
