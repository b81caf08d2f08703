use anyhow::Context;
use glam::{Quat, Vec2, Vec3};
use scene_utils::scene_graph::ObjectId;
use scene_utils::{
    objects_from_hits, screen_position, shape_from_flat_points, Geometry, Material, Object3D,
    PerspectiveCamera, Raycaster, Scene, Viewport, ViewportSize,
};

pub struct DemoState {
    pub camera: PerspectiveCamera,
    pub viewport: Viewport,
    pub scene: Scene,
    raycaster: Raycaster,
    spinner: ObjectId,
    marker: ObjectId,
}

impl DemoState {
    pub fn new() -> anyhow::Result<Self> {
        let viewport = Viewport::new(1280, 720);
        let mut camera =
            PerspectiveCamera::default().look_at(Vec3::new(0.0, -6.0, 12.0), Vec3::ZERO);
        camera.set_aspect_from_size(viewport.size());

        let mut scene = Scene::new();

        let red = scene.add_material(Material::new("red", 0xff0000));
        let grey = scene.add_material(Material::new("grey", 0x808080));

        let cube = scene.add_geometry(Geometry::Box {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        });
        let floor = scene.add_geometry(Geometry::Shape(shape_from_flat_points(&[
            -5.0, -5.0, 5.0, -5.0, 5.0, 5.0, -5.0, 5.0,
        ])?));

        let root = scene.add_object(Object3D::new("root"));
        let ground = scene.add_object(
            Object3D::new("ground")
                .with_geometry(floor)
                .with_material(grey),
        );
        scene.add_object(
            Object3D::new("spinner")
                .with_geometry(cube)
                .with_material(red)
                .with_position(Vec3::new(0.0, 0.0, 0.5)),
        );
        scene.add_object(Object3D::new("marker").with_geometry(cube));

        let spinner = scene
            .get_object_by_name("spinner")
            .context("spinner object not found")?;
        let marker = scene
            .get_object_by_name("marker")
            .context("marker object not found")?;

        for child in [ground, spinner, marker] {
            scene.add_child(root, child)?;
        }
        scene.set_object_scale(marker, Vec3::splat(0.25));

        Ok(Self {
            camera,
            viewport,
            scene,
            raycaster: Raycaster::default(),
            spinner,
            marker,
        })
    }

    /// Simulates one frame with the pointer at `pointer` (pixels).
    pub fn update(&mut self, time: f32, pointer: Vec2) {
        self.scene.begin_frame();

        self.scene
            .set_object_quaternion(self.spinner, Quat::from_axis_angle(Vec3::Z, time * 0.5));

        self.raycaster
            .set_from_camera_and_screen(&self.camera, &self.viewport, pointer);

        match self.raycaster.intersect_ground_plane() {
            Some(target) => self.scene.lerp_object_to(self.marker, target, 0.5),
            None => log::debug!("pointer {pointer} does not reach the ground"),
        }

        let roots: Vec<_> = self.scene.roots().collect();
        let hits = self.raycaster.intersect_objects(&self.scene, &roots, true);
        let hovered = objects_from_hits(&hits);

        for &id in &hovered {
            self.scene.set_user_data(id, "hovered_at", time);
        }

        let names: Vec<&str> = hovered
            .iter()
            .filter_map(|id| self.scene.get_object(*id))
            .map(|object| object.name.as_str())
            .collect();

        log::info!(
            "t={time:.2} pointer={pointer} hovered={names:?} marker on screen at {:?}",
            screen_position(&self.scene, self.marker, &self.camera, &self.viewport)
        );
    }
}
