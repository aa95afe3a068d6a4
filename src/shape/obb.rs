use crate::{euler_rotation, Fp, Quat, Vec3};

use super::Aabb;

/// Oriented box. `angle` holds Euler degrees; the rotation is rebuilt from it
/// on every query, so mutating `angle` needs no further bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    pub origin: Vec3,
    pub extents: Vec3,
    pub angle: Vec3,
}

impl Obb {
    #[inline]
    pub fn new(origin: Vec3, extents: Vec3, angle: Vec3) -> Obb {
        Obb { origin, extents, angle }
    }

    #[inline]
    pub fn rotation(&self) -> Quat {
        euler_rotation(self.angle)
    }
    #[inline]
    pub fn axes(&self) -> [Vec3; 3] {
        //! Returns the box's face normals: the rotated x, y and z axes.
        let rot = self.rotation();
        [rot * Vec3::X, rot * Vec3::Y, rot * Vec3::Z]
    }

    /// The same box in its own frame: centred on zero, unrotated.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_extents(Vec3::ZERO, self.extents)
    }
    pub fn vertices(&self) -> [Vec3; 8] {
        let rot = self.rotation();
        let mut verts = self.local_aabb().vertices();
        for v in verts.iter_mut() {
            *v = rot * *v + self.origin;
        }
        verts
    }
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::bounding(&self.vertices())
    }

    #[inline]
    pub(crate) fn to_local(&self, rot: Quat, point: Vec3) -> Vec3 {
        rot.inverse() * (point - self.origin)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        self.local_aabb().contains(self.to_local(self.rotation(), point))
    }
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let rot = self.rotation();
        let local = self.local_aabb().closest_point(self.to_local(rot, point));
        rot * local + self.origin
    }
    #[inline]
    pub fn distance(&self, point: Vec3) -> Fp {
        (point - self.closest_point(point)).length()
    }
}
