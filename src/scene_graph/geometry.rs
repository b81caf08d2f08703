use glam::Vec3;
use id_arena::Id;

use crate::math::{Aabb, Plane, Ray};
use crate::path::Shape;

pub type GeometryId = Id<Geometry>;

/// Geometry primitives, centered on the local origin. Flat primitives lie in
/// the local XY plane and are hit from either side.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Box { width: f32, height: f32, depth: f32 },
    Plane { width: f32, height: f32 },
    Sphere { radius: f32 },
    /// Along local Y. A zero radius on one end gives a cone.
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    },
    Circle { radius: f32 },
    Shape(Shape),
}

impl Geometry {
    pub fn bounding_box(&self) -> Option<Aabb> {
        match self {
            Geometry::Box {
                width,
                height,
                depth,
            } => Some(Aabb::from_center_half_extents(
                Vec3::ZERO,
                Vec3::new(*width, *height, *depth) * 0.5,
            )),
            Geometry::Plane { width, height } => Some(Aabb::from_center_half_extents(
                Vec3::ZERO,
                Vec3::new(*width * 0.5, *height * 0.5, 0.0),
            )),
            Geometry::Sphere { radius } => Some(Aabb::from_center_half_extents(
                Vec3::ZERO,
                Vec3::splat(*radius),
            )),
            Geometry::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => {
                let radius = radius_top.max(*radius_bottom);
                Some(Aabb::from_center_half_extents(
                    Vec3::ZERO,
                    Vec3::new(radius, *height * 0.5, radius),
                ))
            }
            Geometry::Circle { radius } => Some(Aabb::from_center_half_extents(
                Vec3::ZERO,
                Vec3::new(*radius, *radius, 0.0),
            )),
            Geometry::Shape(shape) => Aabb::from_points_2d(&shape.points()),
        }
    }

    /// Closest point where a local-space ray meets the surface.
    pub fn raycast_local(&self, ray: &Ray) -> Option<Vec3> {
        match self {
            Geometry::Box { .. } | Geometry::Plane { .. } => {
                let aabb = self.bounding_box()?;
                ray.intersect_aabb(&aabb).map(|t| ray.at(t))
            }
            Geometry::Sphere { radius } => {
                ray.intersect_sphere(Vec3::ZERO, *radius).map(|t| ray.at(t))
            }
            Geometry::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => ray
                .intersect_cylinder(*radius_top, *radius_bottom, *height)
                .map(|t| ray.at(t)),
            Geometry::Circle { radius } => ray
                .intersect_plane(&Plane::XY)
                .filter(|point| point.truncate().length() <= *radius),
            Geometry::Shape(shape) => ray
                .intersect_plane(&Plane::XY)
                .filter(|point| shape.contains_point(point.truncate())),
        }
    }
}
