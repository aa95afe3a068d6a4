use crate::{error::Error, euler_rotation, Fp, Result, Vec2, Vec3, EPSILON};

use super::Aabb;

/// Plane in implicit form: `normal·x + distance = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: Fp,
}

impl Plane {
    #[inline]
    pub fn new(normal: Vec3, distance: Fp) -> Plane {
        Plane { normal, distance }
    }
    #[inline]
    pub fn from_point(normal: Vec3, point: Vec3) -> Plane {
        //! Plane with `normal` passing through `point`.
        Plane { normal, distance: -normal.dot(point) }
    }
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Result<Plane> {
        //! Plane through three points, facing `(b - a) × (c - a)`.
        let normal = (b - a)
            .cross(c - a)
            .try_normalize()
            .ok_or(Error::Degenerate("plane points are collinear"))?;
        Ok(Plane::from_point(normal, a))
    }

    #[inline]
    pub fn side(&self, point: Vec3) -> Fp {
        //! Signed, unnormalised: positive in front of the plane.
        self.normal.dot(point) + self.distance
    }
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> Fp {
        self.side(point) / self.normal.length()
    }
    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point - self.normal * (self.side(point) / self.normal.length_squared())
    }
    #[inline]
    pub fn same_side(&self, a: Vec3, b: Vec3) -> bool {
        (self.side(a) >= 0.0) == (self.side(b) >= 0.0)
    }

    #[inline]
    pub fn flipped(&self) -> Plane {
        Plane { normal: -self.normal, distance: -self.distance }
    }
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Plane {
        Plane { normal: self.normal, distance: self.distance - self.normal.dot(offset) }
    }
}

/// Bounded rectangle lying in the plane through `origin` facing `up`.
/// `size.x` spans `right`, `size.y` spans `forward`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub origin: Vec3,
    pub size: Vec2,
    pub up: Vec3,
    pub right: Vec3,
    pub forward: Vec3,
}

impl Quad {
    /// Quad facing +y, with `right` along +x and `forward` along +z.
    #[inline]
    pub fn new(origin: Vec3, size: Vec2) -> Quad {
        Quad { origin, size, up: Vec3::Y, right: Vec3::X, forward: Vec3::Z }
    }
    #[inline]
    pub fn with_basis(origin: Vec3, size: Vec2, up: Vec3, right: Vec3, forward: Vec3) -> Quad {
        Quad { origin, size, up, right, forward }
    }
    #[inline]
    pub fn with_rotation(origin: Vec3, size: Vec2, angle: Vec3) -> Quad {
        Quad::new(origin, size).rotated(angle)
    }

    pub fn rotated(&self, angle: Vec3) -> Quad {
        //! Rotates the basis by Euler degrees; the origin stays put.
        let rot = euler_rotation(angle);
        Quad {
            up: rot * self.up,
            right: rot * self.right,
            forward: rot * self.forward,
            ..*self
        }
    }

    #[inline]
    pub fn plane(&self) -> Plane {
        Plane::from_point(self.up, self.origin)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        Fp::abs(self.up.dot(point - self.origin)) <= EPSILON && self.spans(point)
    }
    pub fn spans(&self, point: Vec3) -> bool {
        //! Whether `point` projects inside the quad's extents, ignoring its
        //! offset along `up`.
        let local = point - self.origin;
        Fp::abs(self.right.dot(local)) <= self.size.x * 0.5
            && Fp::abs(self.forward.dot(local)) <= self.size.y * 0.5
    }

    pub fn vertices(&self) -> [Vec3; 4] {
        let r = self.right * (self.size.x * 0.5);
        let f = self.forward * (self.size.y * 0.5);
        [self.origin - r - f, self.origin + r - f, self.origin + r + f, self.origin - r + f]
    }
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::bounding(&self.vertices())
    }
}
