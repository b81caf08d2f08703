use glam::{EulerRot, Mat4, Quat, Vec3};
use std::cell::{Cell, Ref, RefCell};

/// Which orientation channel was written last and therefore drives the local matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Quaternion,
    Euler,
}

/// Local transform of a scene node.
///
/// `rotation` (Euler angles in radians, XYZ order) and `quaternion` are
/// independent channels: setting one never rewrites the other. The local
/// matrix uses whichever of the two was set most recently.
#[derive(Debug, Clone)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3,
    quaternion: Quat,
    scale: Vec3,
    orientation: Orientation,

    local_matrix: RefCell<Mat4>,
    local_dirty: Cell<bool>,
    has_changed_since_last_update: Cell<bool>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_position(Vec3::ZERO)
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            quaternion: Quat::IDENTITY,
            scale: Vec3::ONE,
            orientation: Orientation::Quaternion,
            local_matrix: RefCell::new(Mat4::IDENTITY),
            local_dirty: Cell::new(true),
            has_changed_since_last_update: Cell::new(true),
        }
    }

    pub fn get_local_matrix(&self) -> Ref<Mat4> {
        if self.local_dirty.get() {
            let matrix = Mat4::from_scale_rotation_translation(
                self.scale,
                self.orientation(),
                self.position,
            );

            self.local_matrix.replace(matrix);
            self.local_dirty.set(false);
        }

        self.local_matrix.borrow()
    }

    fn invalidate_local(&self) {
        self.local_dirty.set(true);
        self.has_changed_since_last_update.set(true);
    }

    pub fn add_position(&mut self, delta: Vec3) {
        self.position += delta;
        self.invalidate_local();
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.invalidate_local();
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
        self.orientation = Orientation::Euler;
        self.invalidate_local();
    }

    /// Stored as given; the caller is responsible for normalization.
    pub fn set_quaternion(&mut self, quaternion: Quat) {
        self.quaternion = quaternion;
        self.orientation = Orientation::Quaternion;
        self.invalidate_local();
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.invalidate_local();
    }

    pub fn set_transform(&mut self, position: Vec3, scale: Vec3, quaternion: Quat) {
        self.position = position;
        self.scale = scale;
        self.quaternion = quaternion;
        self.orientation = Orientation::Quaternion;
        self.invalidate_local();
    }

    pub fn lerp_position(&mut self, target: Vec3, alpha: f32) {
        self.position = self.position.lerp(target, alpha);
        self.invalidate_local();
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn quaternion(&self) -> Quat {
        self.quaternion
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn orientation_source(&self) -> Orientation {
        self.orientation
    }

    /// Orientation currently used for the local matrix.
    pub fn orientation(&self) -> Quat {
        match self.orientation {
            Orientation::Quaternion => self.quaternion,
            Orientation::Euler => {
                Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
            }
        }
    }

    pub fn reset_flags(&self) {
        self.has_changed_since_last_update.set(false);
    }

    pub fn has_changed(&self) -> bool {
        self.has_changed_since_last_update.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_vec3(rng: &mut impl Rng) -> Vec3 {
        Vec3::new(
            rng.gen_range(-1000.0..1000.0),
            rng.gen_range(-1000.0..1000.0),
            rng.gen_range(-1000.0..1000.0),
        )
    }

    #[test]
    fn set_position_reads_back_exactly() {
        let mut rng = rand::thread_rng();
        let mut transform = Transform::default();

        for _ in 0..100 {
            let position = random_vec3(&mut rng);
            transform.set_position(position);
            assert_eq!(transform.position(), position);
        }
    }

    #[test]
    fn add_position_accumulates() {
        let mut rng = rand::thread_rng();
        let start = random_vec3(&mut rng);
        let mut transform = Transform::from_position(start);

        transform.add_position(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.position(), start + Vec3::new(1.0, 2.0, 3.0));

        transform.add_position(Vec3::new(-1.0, 0.5, 0.0));
        assert_eq!(
            transform.position(),
            start + Vec3::new(1.0, 2.0, 3.0) + Vec3::new(-1.0, 0.5, 0.0)
        );
    }

    #[test]
    fn set_transform_updates_all_channels() {
        let mut transform = Transform::default();
        let quaternion = Quat::from_rotation_y(1.0);
        transform.set_transform(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 2.0, 2.0), quaternion);

        assert_eq!(transform.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.scale(), Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(transform.quaternion(), quaternion);
    }

    #[test]
    fn quaternion_is_not_normalized() {
        let mut transform = Transform::default();
        let raw = Quat::from_xyzw(0.0, 0.0, 0.0, 2.0);
        transform.set_quaternion(raw);
        assert_eq!(transform.quaternion(), raw);
    }

    #[test]
    fn rotation_and_quaternion_are_independent() {
        let mut transform = Transform::default();
        let quaternion = Quat::from_rotation_z(0.5);
        transform.set_quaternion(quaternion);
        transform.set_rotation(Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(transform.quaternion(), quaternion);
        assert_eq!(transform.rotation(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(transform.orientation_source(), Orientation::Euler);

        transform.set_quaternion(quaternion);
        assert_eq!(transform.rotation(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(transform.orientation_source(), Orientation::Quaternion);
    }

    #[test]
    fn local_matrix_follows_last_orientation_write() {
        let mut transform = Transform::default();
        transform.set_rotation(Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2));

        let rotated = transform.get_local_matrix().transform_point3(Vec3::X);
        assert!((rotated - Vec3::Y).length() < 1e-5);

        transform.set_quaternion(Quat::IDENTITY);
        let rotated = transform.get_local_matrix().transform_point3(Vec3::X);
        assert!((rotated - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn lerp_moves_towards_target() {
        let mut transform = Transform::default();
        transform.lerp_position(Vec3::new(10.0, 20.0, 30.0), 0.5);
        assert_eq!(transform.position(), Vec3::new(5.0, 10.0, 15.0));
    }

    #[test]
    fn change_flag_resets_per_frame() {
        let mut transform = Transform::default();
        assert!(transform.has_changed());

        transform.reset_flags();
        assert!(!transform.has_changed());

        transform.set_scale(Vec3::splat(3.0));
        assert!(transform.has_changed());
    }
}
