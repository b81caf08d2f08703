use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera with OpenGL clip conventions: normalized
/// device coordinates span [-1, 1] on every axis, +Y up.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub zoom: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 50.0,
            aspect: 1.0,
            near: 0.1,
            far: 2000.0,
            zoom: 1.0,
        }
    }
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
            ..Default::default()
        }
    }

    pub fn look_at(mut self, eye: Vec3, target: Vec3) -> Self {
        self.eye = eye;
        self.target = target;
        self
    }

    pub fn set_aspect_from_size(&mut self, size: Vec2) {
        self.aspect = size.x / size.y;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let half_fov = (self.fov.to_radians() * 0.5).tan() / self.zoom;
        Mat4::perspective_rh_gl(2.0 * half_fov.atan(), self.aspect, self.near, self.far)
    }

    pub fn get_vp_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World space to normalized device coordinates. Points behind the camera
    /// come out mirrored through the center of the view.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.get_vp_matrix().project_point3(world)
    }

    /// Normalized device coordinates to world space.
    pub fn unproject(&self, ndc: Vec3) -> Vec3 {
        self.get_vp_matrix().inverse().project_point3(ndc)
    }
}
