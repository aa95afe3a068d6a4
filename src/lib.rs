//! Closed-form 3D shapes and the tests between them: ray and segment casts with
//! impact and normal, boolean overlap, and a swept sphere against boxes and
//! rounded shapes.
//!
//! Every query is a pure function of its value-type arguments. A miss is `None`
//! or `false`; a pairing with no algorithm behind it is [`Error::Unsupported`],
//! never a silent `false`.

pub mod error;
pub mod narrow;
pub mod sat;
pub mod shape;

pub use error::{Error, Result};
pub use narrow::{collide::Collide, swept::Sweep, Cast, Intersection};
pub use sat::Range;
pub use shape::{
    Aabb, Capsule, Cylinder, InfiniteCylinder, Line, Obb, Plane, Quad, Raycast, Segment, Shape,
    ShapeKind, Sphere,
};

#[cfg(not(feature = "f64"))]
mod precision {
    pub type Fp = f32;
    pub use glam::{Quat, Vec2, Vec3};
}
#[cfg(feature = "f64")]
mod precision {
    pub type Fp = f64;
    pub use glam::{DQuat as Quat, DVec2 as Vec2, DVec3 as Vec3};
}
pub use precision::*;

/// Tolerance for on-surface checks that can't be exact in floating point.
pub const EPSILON: Fp = 1e-5;

/// Rotation for Euler angles in degrees, applied as `Ry * Rx * Rz`.
#[inline]
pub fn euler_rotation(angle: Vec3) -> Quat {
    Quat::from_euler(
        glam::EulerRot::YXZ,
        angle.y.to_radians(),
        angle.x.to_radians(),
        angle.z.to_radians(),
    )
}
