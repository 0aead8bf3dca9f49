mod color;
mod point;
mod vec;

pub use color::{RGBAColor, RGBColor};
pub use point::Point3;
pub use vec::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    /// ray from `origin` passing through `target`. `target` must differ from `origin`.
    pub fn through(origin: Point3, target: Point3) -> Self {
        Ray::new(origin, (target - origin).normalized())
    }

    pub fn point_at_parameter(self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
}
