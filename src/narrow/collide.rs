//! Boolean overlap between volumes.

use crate::{
    error::Error, Aabb, Capsule, Cylinder, Fp, InfiniteCylinder, Obb, Range, Result, Shape,
    ShapeKind, Sphere, Vec3,
};

/// Overlap tests against each volume kind. Touching counts as overlapping.
///
/// Every method defaults to [`Error::Unsupported`], so an unimplemented pair
/// can never be mistaken for a miss.
pub trait Collide {
    const KIND: ShapeKind;

    fn aabb_test(&self, _aabb: &Aabb) -> Result<bool> {
        Err(Error::unsupported(Self::KIND, ShapeKind::Aabb))
    }
    fn obb_test(&self, _obb: &Obb) -> Result<bool> {
        Err(Error::unsupported(Self::KIND, ShapeKind::Obb))
    }
    fn sphere_test(&self, _sphere: &Sphere) -> Result<bool> {
        Err(Error::unsupported(Self::KIND, ShapeKind::Sphere))
    }
    fn cylinder_test(&self, _cyl: &Cylinder) -> Result<bool> {
        Err(Error::unsupported(Self::KIND, ShapeKind::Cylinder))
    }
    fn infinite_cylinder_test(&self, _cyl: &InfiniteCylinder) -> Result<bool> {
        Err(Error::unsupported(Self::KIND, ShapeKind::InfiniteCylinder))
    }
    fn capsule_test(&self, _cap: &Capsule) -> Result<bool> {
        Err(Error::unsupported(Self::KIND, ShapeKind::Capsule))
    }

    fn shape_test(&self, other: &Shape) -> Result<bool> {
        match other {
            Shape::Plane(_) | Shape::Quad(_) => Err(Error::unsupported(Self::KIND, other.kind())),
            Shape::Aabb(s) => self.aabb_test(s),
            Shape::Obb(s) => self.obb_test(s),
            Shape::Sphere(s) => self.sphere_test(s),
            Shape::Cylinder(s) => self.cylinder_test(s),
            Shape::InfiniteCylinder(s) => self.infinite_cylinder_test(s),
            Shape::Capsule(s) => self.capsule_test(s),
        }
    }
}

#[inline]
fn within(point: Vec3, closest: Vec3, radius: Fp) -> bool {
    point.distance_squared(closest) <= radius * radius
}

// ---------- Boxes ---------- //

impl Collide for Aabb {
    const KIND: ShapeKind = ShapeKind::Aabb;

    #[inline]
    fn aabb_test(&self, other: &Aabb) -> Result<bool> {
        let gap = (self.origin() - other.origin()).abs();
        Ok(!gap.cmpgt(self.extents() + other.extents()).any())
    }
    #[inline]
    fn obb_test(&self, obb: &Obb) -> Result<bool> {
        Obb::new(self.origin(), self.extents(), Vec3::ZERO).obb_test(obb)
    }
    #[inline]
    fn sphere_test(&self, sphere: &Sphere) -> Result<bool> {
        Ok(self.distance_sqr(sphere.origin) <= sphere.radius * sphere.radius)
    }
}

impl Collide for Obb {
    const KIND: ShapeKind = ShapeKind::Obb;

    #[inline]
    fn aabb_test(&self, aabb: &Aabb) -> Result<bool> {
        self.obb_test(&Obb::new(aabb.origin(), aabb.extents(), Vec3::ZERO))
    }
    fn obb_test(&self, other: &Obb) -> Result<bool> {
        //! Bounding boxes first, then the 15 separating axes: three face
        //! normals per box and the nine cross products between them.
        if !self.aabb().aabb_test(&other.aabb())? {
            return Ok(false);
        }

        let (va, vb) = (self.vertices(), other.vertices());
        let (na, nb) = (self.axes(), other.axes());

        let mut axes = [Vec3::ZERO; 15];
        axes[..3].copy_from_slice(&na);
        axes[3..6].copy_from_slice(&nb);
        for (i, a) in na.iter().enumerate() {
            for (j, b) in nb.iter().enumerate() {
                axes[6 + i * 3 + j] = a.cross(*b);
            }
        }

        // parallel edges give a zero cross product, whose ranges always overlap
        Ok(axes.iter().all(|axis| Range::project(*axis, &va).overlaps(&Range::project(*axis, &vb))))
    }
    #[inline]
    fn sphere_test(&self, sphere: &Sphere) -> Result<bool> {
        Ok(within(sphere.origin, self.closest_point(sphere.origin), sphere.radius))
    }
}

// ---------- Round ---------- //

impl Collide for Sphere {
    const KIND: ShapeKind = ShapeKind::Sphere;

    #[inline]
    fn aabb_test(&self, aabb: &Aabb) -> Result<bool> {
        aabb.sphere_test(self)
    }
    #[inline]
    fn obb_test(&self, obb: &Obb) -> Result<bool> {
        obb.sphere_test(self)
    }
    #[inline]
    fn sphere_test(&self, other: &Sphere) -> Result<bool> {
        Ok(within(self.origin, other.origin, self.radius + other.radius))
    }
    #[inline]
    fn cylinder_test(&self, cyl: &Cylinder) -> Result<bool> {
        Ok(within(self.origin, cyl.closest_point(self.origin), self.radius))
    }
    #[inline]
    fn infinite_cylinder_test(&self, cyl: &InfiniteCylinder) -> Result<bool> {
        Ok(within(self.origin, cyl.axis().closest_point(self.origin), self.radius + cyl.radius))
    }
    #[inline]
    fn capsule_test(&self, cap: &Capsule) -> Result<bool> {
        Ok(within(self.origin, cap.segment().closest_point(self.origin), self.radius + cap.radius))
    }
}

impl Collide for Cylinder {
    const KIND: ShapeKind = ShapeKind::Cylinder;

    #[inline]
    fn sphere_test(&self, sphere: &Sphere) -> Result<bool> {
        sphere.cylinder_test(self)
    }
}
impl Collide for InfiniteCylinder {
    const KIND: ShapeKind = ShapeKind::InfiniteCylinder;

    #[inline]
    fn sphere_test(&self, sphere: &Sphere) -> Result<bool> {
        sphere.infinite_cylinder_test(self)
    }
}
impl Collide for Capsule {
    const KIND: ShapeKind = ShapeKind::Capsule;

    #[inline]
    fn sphere_test(&self, sphere: &Sphere) -> Result<bool> {
        sphere.capsule_test(self)
    }
}

impl Shape {
    pub fn collide(&self, other: &Shape) -> Result<bool> {
        //! Overlap test over any pair of shapes. Pairs without an algorithm,
        //! including everything involving a plane or quad, are errors.
        match self {
            Shape::Plane(_) | Shape::Quad(_) => Err(Error::unsupported(self.kind(), other.kind())),
            Shape::Aabb(s) => s.shape_test(other),
            Shape::Obb(s) => s.shape_test(other),
            Shape::Sphere(s) => s.shape_test(other),
            Shape::Cylinder(s) => s.shape_test(other),
            Shape::InfiniteCylinder(s) => s.shape_test(other),
            Shape::Capsule(s) => s.shape_test(other),
        }
    }
}
