use crate::math::*;

use anyhow::{ensure, Result};

const PLANARITY_TOLERANCE: f32 = 1e-5;

/// a quadrilateral in world space that the camera rays fan through.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImagePlane {
    pub top_left: Point3,
    pub top_right: Point3,
    pub bottom_left: Point3,
    pub bottom_right: Point3,
}

impl ImagePlane {
    pub fn new(
        top_left: Point3,
        top_right: Point3,
        bottom_left: Point3,
        bottom_right: Point3,
    ) -> Self {
        ImagePlane {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// bilinear blend of the corners. (0, 0) is the top left corner, s grows rightward and t grows downward.
    pub fn point_at(&self, s: f32, t: f32) -> Point3 {
        let top = self.top_left.lerp(self.top_right, s);
        let bottom = self.bottom_left.lerp(self.bottom_right, s);
        top.lerp(bottom, t)
    }

    pub fn center(&self) -> Point3 {
        self.point_at(0.5, 0.5)
    }

    // unnormalized, with length equal to the parallelogram area spanned at the top left corner
    fn area_normal(&self) -> Vec3 {
        (self.top_right - self.top_left).cross(self.bottom_left - self.top_left)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            [
                self.top_left,
                self.top_right,
                self.bottom_left,
                self.bottom_right
            ]
            .iter()
            .all(Point3::is_finite),
            "image plane corners must be finite, got {:?}",
            self
        );
        ensure!(
            self.area_normal().norm_squared() > 0.0,
            "image plane is degenerate (zero area): {:?}",
            self
        );
        // a twisted quad is a curved bilinear patch, which the camera origin check can't cover
        ensure!(
            self.signed_distance(self.bottom_right).abs() <= PLANARITY_TOLERANCE,
            "image plane corners are not coplanar, bottom right corner is {} off the plane: {:?}",
            self.signed_distance(self.bottom_right),
            self
        );
        Ok(())
    }

    /// signed distance from `point` to the plane through the top left, top right and bottom left corners
    pub fn signed_distance(&self, point: Point3) -> f32 {
        (point - self.top_left) * self.area_normal().normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane() -> ImagePlane {
        ImagePlane::new(
            Point3::new(-2.0, 2.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(-2.0, -2.0, 0.0),
            Point3::new(2.0, -2.0, 0.0),
        )
    }

    #[test]
    fn test_corners_and_center() {
        let plane = plane();
        assert_eq!(plane.point_at(0.0, 0.0), plane.top_left);
        assert_eq!(plane.point_at(1.0, 0.0), plane.top_right);
        assert_eq!(plane.point_at(0.0, 1.0), plane.bottom_left);
        assert_eq!(plane.point_at(1.0, 1.0), plane.bottom_right);
        assert_eq!(plane.center(), Point3::ORIGIN);
        assert_eq!(plane.point_at(0.25, 0.75), Point3::new(-1.0, -1.0, 0.0));
    }

    #[test]
    fn test_degenerate_plane_rejected() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert!(ImagePlane::new(p, p, p, p).validate().is_err());
        let collinear = ImagePlane::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        );
        assert!(collinear.validate().is_err());
        assert!(plane().validate().is_ok());
    }

    #[test]
    fn test_twisted_plane_rejected() {
        let mut twisted = plane();
        twisted.bottom_right = Point3::new(2.0, -2.0, 8.0);
        assert!(twisted.validate().is_err());
    }

    #[test]
    fn test_signed_distance() {
        let plane = plane();
        assert!((plane.signed_distance(Point3::new(0.0, 0.0, 4.0)).abs() - 4.0).abs() < 1e-6);
        assert_eq!(plane.signed_distance(Point3::new(1.0, -1.0, 0.0)), 0.0);
    }
}
