use glam::Vec3;

/// Infinite plane satisfying `normal · p + distance = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    /// The Z=0 ground plane with its normal pointing towards +Z.
    pub const XY: Plane = Plane {
        normal: Vec3::Z,
        distance: 0.0,
    };

    pub fn signed_distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_plane_distance() {
        assert_eq!(Plane::XY.signed_distance_to_point(Vec3::new(3.0, -2.0, 5.0)), 5.0);
        assert_eq!(Plane::XY.signed_distance_to_point(Vec3::new(3.0, -2.0, -1.5)), -1.5);
    }

    #[test]
    fn offset_plane_distance() {
        let plane = Plane {
            normal: Vec3::Y,
            distance: -2.0,
        };
        assert_eq!(plane.signed_distance_to_point(Vec3::new(7.0, 5.0, 1.0)), 3.0);
        assert_eq!(plane.signed_distance_to_point(Vec3::new(0.0, 2.0, 0.0)), 0.0);
    }
}
