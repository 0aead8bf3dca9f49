use crate::light::PointLight;
use crate::math::*;

use anyhow::{ensure, Result};

// exponent used by the intersection demo
pub const DEFAULT_SHININESS: f32 = 16.0;

/// ambient + diffuse + specular reflectance for a single point light. no shadowing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Phong {
    pub ambient: RGBColor,
    pub diffuse: RGBColor,
    pub specular: RGBColor,
    pub shininess: f32,
}

impl Phong {
    pub fn new(ambient: RGBColor, diffuse: RGBColor, specular: RGBColor, shininess: f32) -> Self {
        Phong {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// glossy red
    pub fn glossy_red() -> Self {
        Phong::new(
            RGBColor::new(0.1, 0.0, 0.0),
            RGBColor::new(1.0, 0.0, 0.0),
            RGBColor::WHITE,
            DEFAULT_SHININESS,
        )
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.shininess.is_finite() && self.shininess > 0.0,
            "shininess must be positive and finite, got {}",
            self.shininess
        );
        Ok(())
    }

    /// outgoing color at `point` with unit surface `normal`, seen from `eye`.
    /// the result is not clamped and can exceed 1.0 in highlights.
    pub fn shade(&self, eye: Point3, light: &PointLight, point: Point3, normal: Vec3) -> RGBColor {
        let view_dir = (eye - point).normalized();
        let light_dir = light.direction_from(point);
        let cos_light = normal * light_dir;
        let reflected_dir = normal * 2.0 * cos_light - light_dir;

        let specular = self.specular * (reflected_dir * view_dir).max(0.0).powf(self.shininess);
        let diffuse = self.diffuse * cos_light.max(0.0);
        specular + diffuse + self.ambient
    }
}

impl Default for Phong {
    fn default() -> Self {
        Phong::glossy_red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_ambient_floor_when_light_behind_surface() {
        let material = Phong::glossy_red();
        // surface faces +z, light sits behind it
        let light = PointLight::new(Point3::new(0.0, 0.0, -10.0));
        let color = material.shade(
            Point3::new(0.0, 0.0, 5.0),
            &light,
            Point3::ORIGIN,
            Vec3::Z,
        );
        assert_eq!(color, material.ambient);
    }

    #[test]
    fn test_head_on_light_saturates() {
        let material = Phong::glossy_red();
        let eye = Point3::new(0.0, 0.0, 5.0);
        let light = PointLight::new(eye);
        let color = material.shade(eye, &light, Point3::ORIGIN, Vec3::Z);
        // specular 1 + diffuse 1 + ambient 0.1 in red, specular only in green and blue
        assert!((color.r - 2.1).abs() < EPS);
        assert!((color.g - 1.0).abs() < EPS);
        assert!((color.b - 1.0).abs() < EPS);
        assert!(!color.is_in_gamut());
    }

    #[test]
    fn test_grazing_light_is_diffuse_free() {
        let material = Phong::new(RGBColor::BLACK, RGBColor::WHITE, RGBColor::BLACK, 16.0);
        let light = PointLight::new(Point3::new(10.0, 0.0, 0.0));
        let color = material.shade(Point3::new(0.0, 0.0, 5.0), &light, Point3::ORIGIN, Vec3::Z);
        assert!(color.max_channel().abs() < EPS);
    }

    #[test]
    fn test_shininess_tightens_highlight() {
        let eye = Point3::new(0.0, 0.0, 5.0);
        let light = PointLight::new(Point3::new(1.0, 0.0, 5.0));
        let dull = Phong::new(RGBColor::BLACK, RGBColor::BLACK, RGBColor::WHITE, 2.0);
        let sharp = Phong { shininess: 64.0, ..dull };
        let dull_color = dull.shade(eye, &light, Point3::ORIGIN, Vec3::Z);
        let sharp_color = sharp.shade(eye, &light, Point3::ORIGIN, Vec3::Z);
        assert!(sharp_color.r < dull_color.r);
        assert!(sharp_color.r > 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(Phong::glossy_red().validate().is_ok());
        let flat = Phong {
            shininess: 0.0,
            ..Phong::glossy_red()
        };
        assert!(flat.validate().is_err());
    }
}
