use crate::camera::{Camera, ImagePlane};
use crate::geometry::Sphere;
use crate::light::PointLight;
use crate::materials::Phong;
use crate::math::*;

use anyhow::{ensure, Context, Result};

/// everything a render needs. built once, read only while rendering.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scene {
    pub sphere: Sphere,
    pub light: PointLight,
    pub camera: Camera,
    pub material: Phong,
    pub background: RGBColor,
}

impl Scene {
    pub fn new(
        sphere: Sphere,
        light: PointLight,
        camera: Camera,
        material: Phong,
        background: RGBColor,
    ) -> Self {
        Scene {
            sphere,
            light,
            camera,
            material,
            background,
        }
    }

    /// red sphere lit from above and in front, filling the middle of a 4x4 image plane at z = 0
    pub fn intersection_demo() -> Self {
        let image_plane = ImagePlane::new(
            Point3::new(-2.0, 2.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(-2.0, -2.0, 0.0),
            Point3::new(2.0, -2.0, 0.0),
        );
        Scene::new(
            Sphere::new(2.0, Point3::new(0.0, 0.0, -4.0)),
            PointLight::new(Point3::new(0.0, 4.0, 0.0)),
            Camera::new(Point3::new(0.0, 0.0, 4.0), image_plane),
            Phong::glossy_red(),
            RGBColor::BLACK,
        )
    }

    /// checks the preconditions the render loop relies on. call once before rendering.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.sphere.radius.is_finite() && self.sphere.radius > 0.0,
            "sphere radius must be positive and finite, got {}",
            self.sphere.radius
        );
        ensure!(
            self.sphere.origin.is_finite(),
            "sphere center must be finite, got {:?}",
            self.sphere.origin
        );
        ensure!(
            self.light.position.is_finite(),
            "light position must be finite, got {:?}",
            self.light.position
        );
        self.camera.validate().context("invalid camera")?;
        self.material.validate().context("invalid material")?;

        if self.sphere.contains(self.light.position) {
            warn!(
                "light at {:?} is inside the sphere, only the ambient term will be visible from outside",
                self.light.position
            );
        }
        if self.sphere.contains(self.camera.origin) {
            info!("camera is inside the sphere, rendering the far wall");
        }
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::intersection_demo()
    }
}
