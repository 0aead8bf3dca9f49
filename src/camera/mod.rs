mod image_plane;

pub use image_plane::ImagePlane;

use crate::math::*;

use anyhow::{ensure, Result};

/// pinhole camera. every ray starts at `origin` and passes through a point of `image_plane`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Point3,
    pub image_plane: ImagePlane,
}

impl Camera {
    pub fn new(origin: Point3, image_plane: ImagePlane) -> Self {
        Camera {
            origin,
            image_plane,
        }
    }

    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        Ray::through(self.origin, self.image_plane.point_at(s, t))
    }

    // every image plane point is a convex combination of the corners, so keeping the origin off
    // the plane keeps every ray direction non-zero.
    pub fn validate(&self) -> Result<()> {
        self.image_plane.validate()?;
        ensure!(
            self.origin.is_finite(),
            "camera origin must be finite, got {:?}",
            self.origin
        );
        let distance = self.image_plane.signed_distance(self.origin);
        ensure!(
            distance.abs() > 1e-6,
            "camera origin {:?} lies on the image plane, some pixels would have no ray direction",
            self.origin
        );
        Ok(())
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
    fn test_center_ray() {
        let camera = Camera::new(Point3::new(0.0, 0.0, 4.0), plane());
        let r = camera.get_ray(0.5, 0.5);
        assert_eq!(r.origin, camera.origin);
        assert_eq!(r.direction, -Vec3::Z);
        assert!(camera.validate().is_ok());
    }

    #[test]
    fn test_origin_on_plane_rejected() {
        let camera = Camera::new(Point3::new(0.5, 0.5, 0.0), plane());
        assert!(camera.validate().is_err());
        // on the plane but outside the corners still counts
        let camera = Camera::new(Point3::new(10.0, 0.0, 0.0), plane());
        assert!(camera.validate().is_err());
    }

    #[test]
    fn test_origin_on_twisted_patch_rejected() {
        let mut image_plane = plane();
        image_plane.bottom_right = Point3::new(2.0, -2.0, 8.0);
        let camera = Camera::new(Point3::new(0.0, 0.0, 2.0), image_plane);
        // the patch center coincides with the origin
        assert_eq!(image_plane.point_at(0.5, 0.5), camera.origin);
        assert!(camera.validate().is_err());
    }
}
