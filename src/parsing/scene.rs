use crate::camera::{Camera, ImagePlane};
use crate::geometry::Sphere;
use crate::light::PointLight;
use crate::materials::{Phong, DEFAULT_SHININESS};
use crate::math::*;
use crate::scene::Scene;

use serde::{Deserialize, Serialize};

use super::{Point3Data, RGBData};

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct SphereData {
    pub center: Point3Data,
    pub radius: f32,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct LightData {
    pub position: Point3Data,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct CameraData {
    pub origin: Point3Data,
    pub top_left: Point3Data,
    pub top_right: Point3Data,
    pub bottom_left: Point3Data,
    pub bottom_right: Point3Data,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct MaterialData {
    pub ambient: RGBData,
    pub diffuse: RGBData,
    pub specular: RGBData,
    pub shininess: Option<f32>, // defaults to 16
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct SceneData {
    pub sphere: SphereData,
    pub light: LightData,
    pub camera: CameraData,
    pub material: MaterialData,
    pub background: Option<RGBData>, // defaults to black
}

impl From<SceneData> for Scene {
    fn from(data: SceneData) -> Self {
        let camera = data.camera;
        Scene::new(
            Sphere::new(data.sphere.radius, Point3::from(data.sphere.center)),
            PointLight::new(Point3::from(data.light.position)),
            Camera::new(
                Point3::from(camera.origin),
                ImagePlane::new(
                    Point3::from(camera.top_left),
                    Point3::from(camera.top_right),
                    Point3::from(camera.bottom_left),
                    Point3::from(camera.bottom_right),
                ),
            ),
            Phong::new(
                RGBColor::from(data.material.ambient),
                RGBColor::from(data.material.diffuse),
                RGBColor::from(data.material.specular),
                data.material.shininess.unwrap_or(DEFAULT_SHININESS),
            ),
            data.background
                .map(RGBColor::from)
                .unwrap_or(RGBColor::BLACK),
        )
    }
}
