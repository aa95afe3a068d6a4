//! Interval projection for separating-axis tests.

use crate::{Fp, Obb, Vec3};

/// Closed scalar interval of a shape's projection onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: Fp,
    pub max: Fp,
}

impl Range {
    #[inline]
    pub fn new(min: Fp, max: Fp) -> Range {
        Range { min, max }
    }

    pub fn sat(axis: Vec3, obb: &Obb) -> Range {
        //! Projects the box's eight vertices onto `axis`. The axis need not be unit.
        Range::project(axis, &obb.vertices())
    }
    pub(crate) fn project(axis: Vec3, points: &[Vec3]) -> Range {
        points.iter().fold(Range::new(Fp::INFINITY, Fp::NEG_INFINITY), |r, p| {
            let d = axis.dot(*p);
            Range::new(r.min.min(d), r.max.max(d))
        })
    }

    #[inline]
    pub fn overlaps(&self, other: &Range) -> bool {
        //! Touching intervals overlap.
        !(self.max < other.min || self.min > other.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn projects_box_vertices() {
        let obb = Obb::new(Vec3::new(3.0, 0.0, 0.0), Vec3::ONE, Vec3::ZERO);
        assert_eq!(Range::sat(Vec3::X, &obb), Range::new(2.0, 4.0));
        assert_eq!(Range::sat(Vec3::Y, &obb), Range::new(-1.0, 1.0));

        let turned = Obb::new(Vec3::ZERO, Vec3::ONE, Vec3::new(0.0, 45.0, 0.0));
        let r = Range::sat(Vec3::X, &turned);
        assert_abs_diff_eq!(r.max, Fp::sqrt(2.0), epsilon = 1e-5);
        assert_abs_diff_eq!(r.min, -Fp::sqrt(2.0), epsilon = 1e-5);
    }

    #[test]
    fn all_negative_axis_is_well_formed() {
        let obb = Obb::new(Vec3::splat(-10.0), Vec3::ONE, Vec3::ZERO);
        let r = Range::sat(Vec3::X, &obb);
        assert_eq!(r, Range::new(-11.0, -9.0));
    }

    #[test]
    fn overlap_is_inclusive() {
        let a = Range::new(0.0, 1.0);
        assert!(a.overlaps(&Range::new(1.0, 2.0)));
        assert!(a.overlaps(&Range::new(-3.0, 0.0)));
        assert!(a.overlaps(&Range::new(0.2, 0.3)));
        assert!(!a.overlaps(&Range::new(1.01, 2.0)));
        assert!(!Range::new(1.01, 2.0).overlaps(&a));
    }
}
