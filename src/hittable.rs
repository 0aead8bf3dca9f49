use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub time: f32,
    pub point: Point3,
    pub normal: Vec3,
}

impl HitRecord {
    pub fn new(time: f32, point: Point3, normal: Vec3) -> Self {
        HitRecord {
            time,
            point,
            normal,
        }
    }
}

pub trait Hittable {
    // nearest forward intersection along the ray, if any
    fn hit(&self, r: Ray) -> Option<HitRecord>;
}
