use crate::{error::Error, Fp, Result, Vec3};

/// Unbounded line through `origin` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Line {
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Line {
        Line { origin, direction }
    }

    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        //! `direction` need not be unit; a zero direction yields `origin`.
        let dd = self.direction.length_squared();
        if dd == 0.0 { return self.origin; }
        self.origin + self.direction * ((point - self.origin).dot(self.direction) / dd)
    }
    #[inline]
    pub fn distance_point_sqr(&self, point: Vec3) -> Fp {
        (point - self.closest_point(point)).length_squared()
    }
    #[inline]
    pub fn distance_point(&self, point: Vec3) -> Fp {
        self.distance_point_sqr(point).sqrt()
    }
}

/// Finite segment from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec3,
    pub b: Vec3,
}

impl Segment {
    #[inline]
    pub fn new(a: Vec3, b: Vec3) -> Segment {
        Segment { a, b }
    }

    #[inline]
    pub fn ab(&self) -> Vec3 {
        self.b - self.a
    }
    #[inline]
    pub fn ba(&self) -> Vec3 {
        self.a - self.b
    }
    pub fn line(&self) -> Result<Line> {
        //! The supporting line through `a`, with a unit direction toward `b`.
        let direction = self.ab().try_normalize().ok_or(Error::Degenerate("segment has zero length"))?;
        Ok(Line::new(self.a, direction))
    }
    #[inline]
    pub fn length_sqr(&self) -> Fp {
        self.ab().length_squared()
    }
    #[inline]
    pub fn length(&self) -> Fp {
        self.ab().length()
    }

    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let ab = self.ab();
        let dd = ab.length_squared();
        if dd == 0.0 { return self.a; }
        let t = ((point - self.a).dot(ab) / dd).clamp(0.0, 1.0);
        self.a + ab * t
    }
    #[inline]
    pub fn distance_point_sqr(&self, point: Vec3) -> Fp {
        (point - self.closest_point(point)).length_squared()
    }
    #[inline]
    pub fn distance_point(&self, point: Vec3) -> Fp {
        self.distance_point_sqr(point).sqrt()
    }
}

/// Ray from `origin` along `direction`, cut off after `max_distance`.
/// `direction` is expected to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raycast {
    pub origin: Vec3,
    pub direction: Vec3,
    pub max_distance: Fp,
}

impl Raycast {
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3, max_distance: Fp) -> Raycast {
        Raycast { origin, direction, max_distance }
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.origin + self.direction * self.max_distance
    }
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.origin, self.target())
    }
}
