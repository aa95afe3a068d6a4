//! Shape value types and the closed `Shape` sum over cast and collision targets.

mod aabb;
mod linear;
mod obb;
mod plane;
mod round;

pub use aabb::Aabb;
pub use linear::{Line, Raycast, Segment};
pub use obb::Obb;
pub use plane::{Plane, Quad};
pub use round::{Capsule, Cylinder, InfiniteCylinder, Sphere};

use std::fmt::{Display, Formatter};

/// Tag for each kind of [`Shape`], plus the linear probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Segment,
    Raycast,
    Plane,
    Quad,
    Aabb,
    Obb,
    Sphere,
    Cylinder,
    InfiniteCylinder,
    Capsule,
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(match self {
            ShapeKind::Line => "line",
            ShapeKind::Segment => "segment",
            ShapeKind::Raycast => "raycast",
            ShapeKind::Plane => "plane",
            ShapeKind::Quad => "quad",
            ShapeKind::Aabb => "aabb",
            ShapeKind::Obb => "obb",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::InfiniteCylinder => "infinite cylinder",
            ShapeKind::Capsule => "capsule",
        })
    }
}

/// Any target a probe can be cast against or a volume can collide with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Quad(Quad),
    Aabb(Aabb),
    Obb(Obb),
    Sphere(Sphere),
    Cylinder(Cylinder),
    InfiniteCylinder(InfiniteCylinder),
    Capsule(Capsule),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Plane(_) => ShapeKind::Plane,
            Shape::Quad(_) => ShapeKind::Quad,
            Shape::Aabb(_) => ShapeKind::Aabb,
            Shape::Obb(_) => ShapeKind::Obb,
            Shape::Sphere(_) => ShapeKind::Sphere,
            Shape::Cylinder(_) => ShapeKind::Cylinder,
            Shape::InfiniteCylinder(_) => ShapeKind::InfiniteCylinder,
            Shape::Capsule(_) => ShapeKind::Capsule,
        }
    }

    pub fn aabb(&self) -> Option<Aabb> {
        //! Returns the bounding box, or `None` for unbounded shapes.
        match self {
            Shape::Plane(_) | Shape::InfiniteCylinder(_) => None,
            Shape::Quad(q) => Some(q.aabb()),
            Shape::Aabb(a) => Some(*a),
            Shape::Obb(o) => Some(o.aabb()),
            Shape::Sphere(s) => Some(s.aabb()),
            Shape::Cylinder(c) => Some(c.aabb()),
            Shape::Capsule(c) => Some(c.aabb()),
        }
    }
}

macro_rules! shape_from {
    ($($kind:ident),*) => {
        $(impl From<$kind> for Shape {
            fn from(shape: $kind) -> Self {
                Shape::$kind(shape)
            }
        })*
    };
}
shape_from!(Plane, Quad, Aabb, Obb, Sphere, Cylinder, InfiniteCylinder, Capsule);
