use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Point3,
}

impl Sphere {
    pub fn new(radius: f32, origin: Point3) -> Sphere {
        Sphere { radius, origin }
    }

    /// outward unit normal at a point on the surface
    pub fn normal_at(&self, point: Point3) -> Vec3 {
        (point - self.origin) / self.radius
    }

    pub fn contains(&self, point: Point3) -> bool {
        (point - self.origin).norm_squared() < self.radius * self.radius
    }

    /// intersects the ray that starts at `ray_origin` and passes through `target`.
    /// returns the hit position, or None on a miss.
    pub fn intersect(&self, ray_origin: Point3, target: Point3) -> Option<Point3> {
        self.hit(Ray::through(ray_origin, target))
            .map(|record| record.point)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray) -> Option<HitRecord> {
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction * r.direction;
        let b = 2.0 * (oc * r.direction);
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        let mut t0 = (-b - discriminant_sqrt) / (2.0 * a);
        let mut t1 = (-b + discriminant_sqrt) / (2.0 * a);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        // the near root is behind the origin when the origin is inside the sphere,
        // in which case the far wall is what the ray sees.
        let time = if t0 >= 0.0 {
            t0
        } else if t1 >= 0.0 {
            t1
        } else {
            return None;
        };
        let point = r.point_at_parameter(time);
        Some(HitRecord::new(time, point, self.normal_at(point)))
    }
}
