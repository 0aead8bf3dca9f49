pub use crate::camera::{Camera, ImagePlane};
pub use crate::geometry::Sphere;
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::light::PointLight;
pub use crate::materials::Phong;
pub use crate::math::*;
pub use crate::profile::Profile;
pub use crate::renderer::{construct_renderer, Film, Renderer, Vec2D};
pub use crate::scene::Scene;
