//! Continuous tests for a moving sphere.

use tracing::trace;

use crate::{
    error::Error, Aabb, Capsule, Cast, Fp, InfiniteCylinder, Intersection, Obb, Result, Segment,
    Shape, ShapeKind, Sphere, Vec3,
};

/// First contact of a sphere moving along a displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Fraction of the displacement covered before contact, in `[0, 1]`.
    pub travel: Fp,
    /// Sphere centre at contact.
    pub center: Vec3,
    /// Contact point on the target's surface and the surface normal there.
    pub hit: Intersection,
}

impl Sphere {
    fn sweep_result(&self, displacement: Vec3, raw: Intersection, contact: Vec3) -> Sweep {
        let center = raw.impact;
        Sweep {
            travel: (center - self.origin).dot(displacement) / displacement.length_squared(),
            center,
            hit: Intersection::new(contact, raw.normal),
        }
    }

    pub fn sweep_aabb(&self, aabb: &Aabb, displacement: Vec3) -> Option<Sweep> {
        //! Casts the centre against the box grown by the radius, then corrects
        //! hits on the grown box's square edges and corners with capsules
        //! around the real edges.
        let probe = Segment::new(self.origin, self.origin + displacement);
        let raw = probe.aabb_query(&aabb.expanded(self.radius))?;

        // which sides of the real box the raw hit lies beyond, per axis bit
        let (min, max) = (aabb.min(), aabb.max());
        let (mut u, mut v) = (0usize, 0usize);
        for i in 0..3 {
            if raw.impact[i] < min[i] { u |= 1 << i; }
            if raw.impact[i] > max[i] { v |= 1 << i; }
        }
        let m = u | v;

        let edge = |a: usize, b: usize| {
            probe.capsule_query(&Capsule::spanning(aabb.corner(a), aabb.corner(b), self.radius))
        };
        let center = if m == 7 {
            trace!(u, v, "swept sphere hit a vertex region");
            [1, 2, 4]
                .iter()
                .filter_map(|bit| edge(v, v ^ bit))
                .min_by(|a, b| {
                    a.impact.distance_squared(self.origin).total_cmp(&b.impact.distance_squared(self.origin))
                })?
        } else if m.count_ones() <= 1 {
            trace!(u, v, "swept sphere hit a face region");
            raw
        } else {
            trace!(u, v, "swept sphere hit an edge region");
            edge(u ^ 7, v)?
        };

        Some(self.sweep_result(displacement, center, aabb.closest_point(center.impact)))
    }

    pub fn sweep_obb(&self, obb: &Obb, displacement: Vec3) -> Option<Sweep> {
        let rot = obb.rotation();
        let local = Sphere::new(obb.to_local(rot, self.origin), self.radius);
        let sweep = local.sweep_aabb(&obb.local_aabb(), rot.inverse() * displacement)?;
        Some(Sweep {
            travel: sweep.travel,
            center: rot * sweep.center + obb.origin,
            hit: Intersection::new(rot * sweep.hit.impact + obb.origin, rot * sweep.hit.normal),
        })
    }

    pub fn sweep_sphere(&self, target: &Sphere, displacement: Vec3) -> Option<Sweep> {
        let probe = Segment::new(self.origin, self.origin + displacement);
        let raw = probe.sphere_query(&Sphere::new(target.origin, target.radius + self.radius))?;
        Some(self.sweep_result(displacement, raw, target.origin + raw.normal * target.radius))
    }

    pub fn sweep_capsule(&self, target: &Capsule, displacement: Vec3) -> Option<Sweep> {
        let probe = Segment::new(self.origin, self.origin + displacement);
        let grown = Capsule { radius: target.radius + self.radius, ..*target };
        let raw = probe.capsule_query(&grown)?;
        Some(self.sweep_result(displacement, raw, target.closest_point(raw.impact)))
    }

    pub fn sweep_infinite_cylinder(&self, target: &InfiniteCylinder, displacement: Vec3) -> Option<Sweep> {
        let probe = Segment::new(self.origin, self.origin + displacement);
        let grown = InfiniteCylinder { radius: target.radius + self.radius, ..*target };
        let raw = probe.infinite_cylinder_query(&grown)?;
        Some(self.sweep_result(displacement, raw, target.closest_point(raw.impact)))
    }

    pub fn sweep(&self, target: &Shape, displacement: Vec3) -> Result<Option<Sweep>> {
        match target {
            Shape::Aabb(s) => Ok(self.sweep_aabb(s, displacement)),
            Shape::Obb(s) => Ok(self.sweep_obb(s, displacement)),
            Shape::Sphere(s) => Ok(self.sweep_sphere(s, displacement)),
            Shape::Capsule(s) => Ok(self.sweep_capsule(s, displacement)),
            Shape::InfiniteCylinder(s) => Ok(self.sweep_infinite_cylinder(s, displacement)),
            Shape::Plane(_) | Shape::Quad(_) | Shape::Cylinder(_) => {
                Err(Error::unsupported(ShapeKind::Sphere, target.kind()))
            }
        }
    }
}
