//! Narrowphase data and logic module.
//!
//! Linear probes (rays and segments) are cast against shapes through the
//! [`Cast`] trait; volumes are tested for overlap through [`collide::Collide`];
//! moving spheres are handled in [`swept`].

pub mod collide;
pub mod swept;

use crate::{
    error::Error, Aabb, Capsule, Cylinder, Fp, InfiniteCylinder, Line, Obb, Plane, Quad, Raycast,
    Result, Segment, Shape, ShapeKind, Sphere, Vec3,
};

/// Contact point and surface normal reported by a successful query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intersection {
    pub impact: Vec3,
    pub normal: Vec3,
}

impl Intersection {
    #[inline]
    pub fn new(impact: Vec3, normal: Vec3) -> Intersection {
        Intersection { impact, normal }
    }
}

impl approx::AbsDiffEq for Intersection {
    type Epsilon = Fp;

    #[inline]
    fn default_epsilon() -> Fp {
        Fp::EPSILON
    }
    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Fp) -> bool {
        self.impact.abs_diff_eq(other.impact, epsilon) && self.normal.abs_diff_eq(other.normal, epsilon)
    }
}

/// Parametric probe `origin + t·vector` with `t` restricted to `[lo, hi]`.
///
/// Rays and segments map onto `[0, 1]`; lines are unbounded both ways.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub origin: Vec3,
    pub vector: Vec3,
    pub lo: Fp,
    pub hi: Fp,
}

impl Span {
    #[inline]
    pub fn new(origin: Vec3, vector: Vec3, lo: Fp, hi: Fp) -> Span {
        Span { origin, vector, lo, hi }
    }
    #[inline]
    pub fn at(&self, t: Fp) -> Vec3 {
        self.origin + self.vector * t
    }
    #[inline]
    fn accepts(&self, t: Fp) -> bool {
        t >= self.lo && t <= self.hi
    }

    // ---------- Plane & Quad ---------- //

    pub fn plane(&self, plane: &Plane) -> Option<Intersection> {
        //! The returned normal faces back along the probe.
        let dot = self.vector.dot(plane.normal);
        if dot == 0.0 { return None; } // parallel, or a zero probe

        let t = -(plane.normal.dot(self.origin) + plane.distance) / dot;
        if !self.accepts(t) { return None; }

        let normal = if dot > 0.0 { -plane.normal } else { plane.normal };
        Some(Intersection::new(self.at(t), normal))
    }
    #[inline]
    pub fn quad(&self, quad: &Quad) -> Option<Intersection> {
        //! The plane hit already lies on the quad's plane; only its extents are checked.
        self.plane(&quad.plane()).filter(|hit| quad.spans(hit.impact))
    }

    // ---------- Boxes ---------- //

    pub fn aabb(&self, aabb: &Aabb) -> Option<Intersection> {
        //! Slab test. A probe that starts on or inside the box does not hit it.
        let (min, max) = (aabb.min(), aabb.max());
        let mut tmin = self.lo;
        let mut tmax = self.hi;

        for i in 0..3 {
            let o = self.origin[i];
            let v = self.vector[i];
            if v == 0.0 {
                if o < min[i] || o > max[i] { return None; }
                continue;
            }

            let mut t1 = (min[i] - o) / v;
            let mut t2 = (max[i] - o) / v;
            if t2 < t1 { std::mem::swap(&mut t1, &mut t2); }

            tmin = Fp::max(tmin, t1);
            tmax = Fp::min(tmax, t2);
            if tmin > tmax { return None; }
        }

        if tmin == self.lo { return None; }

        let impact = self.at(tmin);
        Some(Intersection::new(impact, aabb.normal(impact)))
    }
    pub fn obb(&self, obb: &Obb) -> Option<Intersection> {
        let rot = obb.rotation();
        let local = Span {
            origin: obb.to_local(rot, self.origin),
            vector: rot.inverse() * self.vector,
            ..*self
        };
        local
            .aabb(&obb.local_aabb())
            .map(|hit| Intersection::new(rot * hit.impact + obb.origin, rot * hit.normal))
    }

    // ---------- Round ---------- //

    pub fn sphere(&self, sphere: &Sphere) -> Option<Intersection> {
        //! Only the entry root is considered; a probe starting inside misses.
        let a = self.vector.length_squared();
        if a == 0.0 { return None; }

        let w = self.origin - sphere.origin;
        let b = 2.0 * w.dot(self.vector);
        let c = w.length_squared() - sphere.radius * sphere.radius;
        let t = entry_root(a, b, c)?;
        if !self.accepts(t) { return None; }

        let impact = self.at(t);
        Some(Intersection::new(impact, (impact - sphere.origin).normalize_or_zero()))
    }
    pub fn infinite_cylinder(&self, cyl: &InfiniteCylinder) -> Option<Intersection> {
        let vv = self.vector.length_squared();
        let w = self.origin - cyl.origin;
        let vd = self.vector.dot(cyl.direction);
        let wd = w.dot(cyl.direction);

        let a = vv - vd * vd;
        if a <= Fp::EPSILON * vv { return None; } // parallel to the axis, or a zero probe

        let b = 2.0 * w.dot(self.vector) - 2.0 * vd * wd;
        let c = w.length_squared() - wd * wd - cyl.radius * cyl.radius;
        let t = entry_root(a, b, c)?;
        if !self.accepts(t) { return None; }

        let impact = self.at(t);
        let normal = (impact - cyl.axis().closest_point(impact)).normalize_or_zero();
        Some(Intersection::new(impact, normal))
    }
    pub fn cylinder(&self, cyl: &Cylinder) -> Option<Intersection> {
        //! Classifies the probe by the side of the caps it starts on, so bounded
        //! spans only. Side hits count only between the caps.
        let (cap_p, cap_q) = cyl.caps();
        let rr = cyl.radius * cyl.radius;
        for (cap, centre) in [(cap_p, cyl.top()), (cap_q, cyl.bottom())] {
            if cap.side(self.origin) >= 0.0 {
                let hit = self.plane(&cap)?;
                if hit.impact.distance_squared(centre) <= rr { return Some(hit); }
            }
        }

        let half = cyl.height * 0.5;
        let lateral = InfiniteCylinder::new(cyl.origin, cyl.direction, cyl.radius);
        self.infinite_cylinder(&lateral)
            .filter(|hit| Fp::abs((hit.impact - cyl.origin).dot(cyl.direction)) <= half)
    }
    pub fn capsule(&self, cap: &Capsule) -> Option<Intersection> {
        //! Nearest hit among the body and the two end spheres. A probe starting
        //! inside the capsule misses.
        if cap.contains(self.origin) { return None; }

        let body = Cylinder::new(cap.origin, cap.direction, cap.height, cap.radius);
        [
            self.cylinder(&body),
            self.sphere(&Sphere::new(cap.top(), cap.radius)),
            self.sphere(&Sphere::new(cap.bottom(), cap.radius)),
        ]
        .into_iter()
        .flatten()
        .min_by(|a, b| {
            a.impact.distance_squared(self.origin).total_cmp(&b.impact.distance_squared(self.origin))
        })
    }
}

#[inline]
fn entry_root(a: Fp, b: Fp, c: Fp) -> Option<Fp> {
    //! Smaller root of `a·t² + b·t + c`, if real. `a` must be positive.
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 { return None; }
    Some((-b - disc.sqrt()) / (2.0 * a))
}

// ---------- Cast ---------- //

/// A bounded linear probe, cast against each shape kind.
pub trait Cast {
    fn span(&self) -> Span;

    #[inline]
    fn plane_query(&self, plane: &Plane) -> Option<Intersection> {
        self.span().plane(plane)
    }
    #[inline]
    fn quad_query(&self, quad: &Quad) -> Option<Intersection> {
        self.span().quad(quad)
    }
    #[inline]
    fn aabb_query(&self, aabb: &Aabb) -> Option<Intersection> {
        self.span().aabb(aabb)
    }
    #[inline]
    fn obb_query(&self, obb: &Obb) -> Option<Intersection> {
        self.span().obb(obb)
    }
    #[inline]
    fn sphere_query(&self, sphere: &Sphere) -> Option<Intersection> {
        self.span().sphere(sphere)
    }
    #[inline]
    fn cylinder_query(&self, cyl: &Cylinder) -> Option<Intersection> {
        self.span().cylinder(cyl)
    }
    #[inline]
    fn infinite_cylinder_query(&self, cyl: &InfiniteCylinder) -> Option<Intersection> {
        self.span().infinite_cylinder(cyl)
    }
    #[inline]
    fn capsule_query(&self, cap: &Capsule) -> Option<Intersection> {
        self.span().capsule(cap)
    }

    #[inline]
    fn plane_test(&self, plane: &Plane) -> bool {
        self.plane_query(plane).is_some()
    }
    #[inline]
    fn quad_test(&self, quad: &Quad) -> bool {
        self.quad_query(quad).is_some()
    }
    #[inline]
    fn aabb_test(&self, aabb: &Aabb) -> bool {
        self.aabb_query(aabb).is_some()
    }
    #[inline]
    fn obb_test(&self, obb: &Obb) -> bool {
        self.obb_query(obb).is_some()
    }
    #[inline]
    fn sphere_test(&self, sphere: &Sphere) -> bool {
        self.sphere_query(sphere).is_some()
    }
    #[inline]
    fn cylinder_test(&self, cyl: &Cylinder) -> bool {
        self.cylinder_query(cyl).is_some()
    }
    #[inline]
    fn infinite_cylinder_test(&self, cyl: &InfiniteCylinder) -> bool {
        self.infinite_cylinder_query(cyl).is_some()
    }
    #[inline]
    fn capsule_test(&self, cap: &Capsule) -> bool {
        self.capsule_query(cap).is_some()
    }

    fn shape_query(&self, shape: &Shape) -> Option<Intersection> {
        match shape {
            Shape::Plane(s) => self.plane_query(s),
            Shape::Quad(s) => self.quad_query(s),
            Shape::Aabb(s) => self.aabb_query(s),
            Shape::Obb(s) => self.obb_query(s),
            Shape::Sphere(s) => self.sphere_query(s),
            Shape::Cylinder(s) => self.cylinder_query(s),
            Shape::InfiniteCylinder(s) => self.infinite_cylinder_query(s),
            Shape::Capsule(s) => self.capsule_query(s),
        }
    }
    #[inline]
    fn shape_test(&self, shape: &Shape) -> bool {
        self.shape_query(shape).is_some()
    }
}

impl Cast for Segment {
    #[inline]
    fn span(&self) -> Span {
        Span::new(self.a, self.ab(), 0.0, 1.0)
    }
}
impl Cast for Raycast {
    #[inline]
    fn span(&self) -> Span {
        Span::new(self.origin, self.direction * self.max_distance, 0.0, 1.0)
    }
}

// ---------- Line ---------- //

impl Line {
    #[inline]
    fn span(&self) -> Span {
        Span::new(self.origin, self.direction, Fp::NEG_INFINITY, Fp::INFINITY)
    }

    #[inline]
    pub fn plane_query(&self, plane: &Plane) -> Option<Intersection> {
        self.span().plane(plane)
    }
    #[inline]
    pub fn quad_query(&self, quad: &Quad) -> Option<Intersection> {
        self.span().quad(quad)
    }
    #[inline]
    pub fn aabb_query(&self, aabb: &Aabb) -> Option<Intersection> {
        //! Reports where the line enters the box, travelling along `direction`.
        self.span().aabb(aabb)
    }
    #[inline]
    pub fn obb_query(&self, obb: &Obb) -> Option<Intersection> {
        self.span().obb(obb)
    }
    #[inline]
    pub fn sphere_query(&self, sphere: &Sphere) -> Option<Intersection> {
        self.span().sphere(sphere)
    }
    #[inline]
    pub fn infinite_cylinder_query(&self, cyl: &InfiniteCylinder) -> Option<Intersection> {
        self.span().infinite_cylinder(cyl)
    }

    pub fn shape_query(&self, shape: &Shape) -> Result<Option<Intersection>> {
        //! Capped shapes need probe endpoints and are not supported.
        match shape {
            Shape::Plane(s) => Ok(self.plane_query(s)),
            Shape::Quad(s) => Ok(self.quad_query(s)),
            Shape::Aabb(s) => Ok(self.aabb_query(s)),
            Shape::Obb(s) => Ok(self.obb_query(s)),
            Shape::Sphere(s) => Ok(self.sphere_query(s)),
            Shape::InfiniteCylinder(s) => Ok(self.infinite_cylinder_query(s)),
            Shape::Cylinder(_) | Shape::Capsule(_) => Err(Error::unsupported(ShapeKind::Line, shape.kind())),
        }
    }
}
