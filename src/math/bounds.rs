use glam::{Mat4, Vec2, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(point1: Vec3, point2: Vec3) -> Aabb {
        let min = point1.min(point2);
        let max = point1.max(point2);
        Aabb { min, max }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Aabb {
        Aabb::new(center - half_extents, center + half_extents)
    }

    /// Flat box in the XY plane enclosing `points`. `None` for an empty slice.
    pub fn from_points_2d(points: &[Vec2]) -> Option<Aabb> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Aabb::new(first.extend(0.0), first.extend(0.0));
        for point in rest {
            aabb.expand_by_point(point.extend(0.0));
        }
        Some(aabb)
    }

    pub fn expand_by_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn corners(&self) -> [Vec3; 8] {
        [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Box enclosing this box after `transform`.
    pub fn transform(&self, transform: &Mat4) -> Aabb {
        let corners = self
            .corners()
            .map(|corner| transform.transform_point3(corner));

        let mut aabb = Aabb::new(corners[0], corners[0]);
        for corner in &corners[1..] {
            aabb.expand_by_point(*corner);
        }
        aabb
    }
}
