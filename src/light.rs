use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point3,
}

impl PointLight {
    pub const fn new(position: Point3) -> Self {
        PointLight { position }
    }

    /// unit vector from `point` toward the light
    pub fn direction_from(&self, point: Point3) -> Vec3 {
        (self.position - point).normalized()
    }
}
