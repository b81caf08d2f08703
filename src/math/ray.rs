use glam::{Mat4, Vec3};

use crate::math::{bounds::Aabb, plane::Plane};

/// Half-line `origin + direction * t` for `t >= 0`.
///
/// The direction does not have to be normalized; every `t` returned by the
/// intersection methods is expressed in multiples of `direction`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::NEG_Z,
        }
    }
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Maps the ray through `matrix`, e.g. from world space into an object's local space.
    pub fn transform(&self, matrix: &Mat4) -> Ray {
        Ray {
            origin: matrix.transform_point3(self.origin),
            direction: matrix.transform_vector3(self.direction),
        }
    }

    /// Ray parameter at which the ray meets `plane`.
    ///
    /// A ray running parallel to the plane only hits it when its origin already
    /// lies on the plane, in which case the parameter is zero.
    pub fn distance_to_plane(&self, plane: &Plane) -> Option<f32> {
        let denominator = plane.normal.dot(self.direction);

        if denominator == 0.0 {
            if plane.signed_distance_to_point(self.origin) == 0.0 {
                return Some(0.0);
            }

            return None;
        }

        let t = -(self.origin.dot(plane.normal) + plane.distance) / denominator;

        (t >= 0.0).then_some(t)
    }

    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        self.distance_to_plane(plane).map(|t| self.at(t))
    }

    /// Slab test. Returns the entry parameter, or the exit parameter when the
    /// origin is inside the box.
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let direction = self.direction[axis];
            let (min, max) = (aabb.min[axis], aabb.max[axis]);

            if direction == 0.0 {
                if origin < min || origin > max {
                    return None;
                }
                continue;
            }

            let inverse = 1.0 / direction;
            let mut t0 = (min - origin) * inverse;
            let mut t1 = (max - origin) * inverse;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_min = t_min.max(t0);
            t_max = t_max.min(t1);

            if t_min > t_max {
                return None;
            }
        }

        if t_max < 0.0 {
            return None;
        }

        Some(if t_min >= 0.0 { t_min } else { t_max })
    }

    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let to_origin = self.origin - center;
        let a = self.direction.length_squared();
        if a == 0.0 {
            return None;
        }

        let half_b = to_origin.dot(self.direction);
        let c = to_origin.length_squared() - radius * radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = (-half_b - root) / a;
        let far = (-half_b + root) / a;

        if far < 0.0 {
            None
        } else if near >= 0.0 {
            Some(near)
        } else {
            Some(far)
        }
    }

    /// Capped cylinder or cone frustum along Y, centered on the origin.
    /// The radius changes linearly from `radius_bottom` at `-height / 2` to
    /// `radius_top` at `height / 2`.
    pub fn intersect_cylinder(
        &self,
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    ) -> Option<f32> {
        let half_height = height * 0.5;
        let slope = if height > 0.0 {
            (radius_top - radius_bottom) / height
        } else {
            0.0
        };
        let mid_radius = (radius_top + radius_bottom) * 0.5;
        let radius_at = |y: f32| mid_radius + slope * y;

        let (o, d) = (self.origin, self.direction);
        let radius_at_origin = radius_at(o.y);
        let a = d.x * d.x + d.z * d.z - slope * slope * d.y * d.y;
        let half_b = o.x * d.x + o.z * d.z - slope * radius_at_origin * d.y;
        let c = o.x * o.x + o.z * o.z - radius_at_origin * radius_at_origin;

        let mut side = [None, None];
        if a.abs() > f32::EPSILON {
            let discriminant = half_b * half_b - a * c;
            if discriminant >= 0.0 {
                let root = discriminant.sqrt();
                side = [Some((-half_b - root) / a), Some((-half_b + root) / a)];
            }
        } else if half_b != 0.0 {
            side[0] = Some(-c / (2.0 * half_b));
        }

        let on_side = side.into_iter().flatten().filter(|&t| {
            let y = o.y + t * d.y;
            y.abs() <= half_height && radius_at(y) >= 0.0
        });

        let on_caps = [(half_height, radius_top), (-half_height, radius_bottom)]
            .into_iter()
            .filter(|_| d.y != 0.0)
            .filter_map(|(cap_y, cap_radius)| {
                let t = (cap_y - o.y) / d.y;
                let point = self.at(t);
                (point.x * point.x + point.z * point.z <= cap_radius * cap_radius).then_some(t)
            });

        on_side
            .chain(on_caps)
            .filter(|&t| t >= 0.0)
            .min_by(|a, b| a.total_cmp(b))
    }
}
