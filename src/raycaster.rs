use glam::{Vec2, Vec3};

use crate::camera::PerspectiveCamera;
use crate::config::RaycastConfig;
use crate::coords::screen_to_ndc;
use crate::math::{Plane, Ray};
use crate::scene_graph::{Layers, ObjectId, Scene};
use crate::viewport::ViewportSize;

/// A single ray hit against an object's geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Intersection {
    /// World-space distance from the ray origin.
    pub distance: f32,
    pub point: Vec3,
    pub object: ObjectId,
}

#[derive(Debug, Clone)]
pub struct Raycaster {
    pub ray: Ray,
    pub near: f32,
    pub far: f32,
    pub layers: Layers,
}

impl Default for Raycaster {
    fn default() -> Self {
        Self::new(&RaycastConfig::default())
    }
}

impl Raycaster {
    pub fn new(config: &RaycastConfig) -> Self {
        Self {
            ray: Ray::default(),
            near: config.near,
            far: config.far,
            layers: config.layers,
        }
    }

    /// Aims the ray from the camera through a point given in normalized device coordinates.
    pub fn set_from_camera(&mut self, ndc: Vec2, camera: &PerspectiveCamera) {
        let origin = camera.eye;
        let through = camera.unproject(ndc.extend(0.5));
        self.ray = Ray::new(origin, (through - origin).normalize());
    }

    /// Same as [`Raycaster::set_from_camera`] for a pixel position. The viewport
    /// size is read on every call.
    pub fn set_from_camera_and_screen(
        &mut self,
        camera: &PerspectiveCamera,
        viewport: &impl ViewportSize,
        screen: Vec2,
    ) {
        let ndc = screen_to_ndc(screen, viewport.size());
        self.set_from_camera(ndc, camera);
    }

    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        self.ray.intersect_plane(plane)
    }

    /// Where the ray meets the Z=0 ground plane, if it does.
    pub fn intersect_ground_plane(&self) -> Option<Vec3> {
        self.intersect_plane(&Plane::XY)
    }

    pub fn intersect_object(
        &self,
        scene: &Scene,
        object_id: ObjectId,
        recursive: bool,
    ) -> Vec<Intersection> {
        self.intersect_objects(scene, &[object_id], recursive)
    }

    /// Hits against the given objects (and their descendants when `recursive`),
    /// nearest first.
    pub fn intersect_objects(
        &self,
        scene: &Scene,
        object_ids: &[ObjectId],
        recursive: bool,
    ) -> Vec<Intersection> {
        let mut hits = Vec::new();

        for &object_id in object_ids {
            self.raycast_object(scene, object_id, &mut hits);

            if recursive {
                for descendant_id in scene.descendants(object_id) {
                    self.raycast_object(scene, descendant_id, &mut hits);
                }
            }
        }

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        log::trace!(
            "ray {:?} -> {:?}: {} hits",
            self.ray.origin,
            self.ray.direction,
            hits.len()
        );

        hits
    }

    fn raycast_object(&self, scene: &Scene, object_id: ObjectId, hits: &mut Vec<Intersection>) {
        let Some(object) = scene.get_object(object_id) else {
            return;
        };

        if !object.visible || !object.layers.test(&self.layers) {
            return;
        }

        let Some(geometry) = object.geometry.and_then(|id| scene.get_geometry(id)) else {
            return;
        };

        let Some(world_matrix) = scene.world_matrix(object_id) else {
            return;
        };

        if let Some(world_box) = scene.world_bounding_box(object_id) {
            if self.ray.intersect_aabb(&world_box).is_none() {
                return;
            }
        }

        let local_ray = self.ray.transform(&world_matrix.inverse());
        let Some(local_point) = geometry.raycast_local(&local_ray) else {
            return;
        };

        let point = world_matrix.transform_point3(local_point);
        let distance = self.ray.origin.distance(point);

        if distance >= self.near && distance <= self.far {
            hits.push(Intersection {
                distance,
                point,
                object: object_id,
            });
        }
    }
}

/// The objects of `hits`, in the same order and including repeats.
pub fn objects_from_hits(hits: &[Intersection]) -> Vec<ObjectId> {
    hits.iter().map(|hit| hit.object).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::screen_position;
    use crate::scene_graph::{Geometry, Object3D};
    use crate::viewport::Viewport;

    use glam::Quat;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    fn top_down_camera(viewport: &Viewport) -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::default();
        camera.set_aspect_from_size(viewport.size());
        camera
    }

    fn unit_box_scene() -> (Scene, ObjectId, ObjectId) {
        let mut scene = Scene::new();
        let cube = scene.add_geometry(Geometry::Box {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        });
        let far = scene.add_object(Object3D::new("far").with_geometry(cube));
        let near = scene.add_object(
            Object3D::new("near")
                .with_geometry(cube)
                .with_position(Vec3::new(0.0, 0.0, 3.0)),
        );
        (scene, far, near)
    }

    fn center_ray() -> Raycaster {
        let mut raycaster = Raycaster::default();
        raycaster.set_from_camera(Vec2::ZERO, &PerspectiveCamera::default());
        raycaster
    }

    #[test]
    fn ndc_origin_looks_down_the_view_axis() {
        let raycaster = center_ray();
        assert!(approx(raycaster.ray.origin, Vec3::new(0.0, 0.0, 10.0)));
        assert!(approx(raycaster.ray.direction, Vec3::NEG_Z));
        assert!(approx(raycaster.intersect_ground_plane().unwrap(), Vec3::ZERO));
    }

    #[test]
    fn screen_center_matches_ndc_origin() {
        let viewport = Viewport::new(800, 600);
        let camera = top_down_camera(&viewport);

        let mut from_screen = Raycaster::default();
        from_screen.set_from_camera_and_screen(&camera, &viewport, Vec2::new(400.0, 300.0));
        let mut from_ndc = Raycaster::default();
        from_ndc.set_from_camera(Vec2::ZERO, &camera);

        assert!(approx(from_screen.ray.direction, from_ndc.ray.direction));
    }

    #[test]
    fn pointer_to_ground_round_trips_through_projection() {
        let viewport = Viewport::new(800, 600);
        let camera = top_down_camera(&viewport);
        let mut raycaster = Raycaster::default();
        raycaster.set_from_camera_and_screen(&camera, &viewport, Vec2::new(600.0, 150.0));

        let ground = raycaster.intersect_ground_plane().unwrap();
        assert!(ground.x > 0.0 && ground.y > 0.0);
        assert!(ground.z.abs() < 1e-4);

        let mut scene = Scene::new();
        let marker = scene.add_object(Object3D::new("marker").with_position(ground));
        let pixel = screen_position(&scene, marker, &camera, &viewport).unwrap();
        assert!((pixel.x - 600).abs() <= 1);
        assert!((pixel.y - 150).abs() <= 1);
    }

    #[test]
    fn viewport_resize_is_picked_up() {
        let camera = PerspectiveCamera::default();
        let mut viewport = Viewport::new(800, 600);
        let mut raycaster = Raycaster::default();

        raycaster.set_from_camera_and_screen(&camera, &viewport, Vec2::new(400.0, 300.0));
        assert!(approx(raycaster.ray.direction, Vec3::NEG_Z));

        viewport.set_size(1600, 1200);
        raycaster.set_from_camera_and_screen(&camera, &viewport, Vec2::new(800.0, 600.0));
        assert!(approx(raycaster.ray.direction, Vec3::NEG_Z));
    }

    #[test]
    fn ray_parallel_to_ground_has_no_intersection() {
        let mut raycaster = Raycaster::default();
        raycaster.ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X);
        assert_eq!(raycaster.intersect_ground_plane(), None);

        raycaster.ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        assert_eq!(raycaster.intersect_ground_plane(), Some(Vec3::ZERO));
    }

    #[test]
    fn hits_are_sorted_by_distance() {
        let (scene, far, near) = unit_box_scene();
        let hits = center_ray().intersect_objects(&scene, &[far, near], false);

        assert_eq!(objects_from_hits(&hits), vec![near, far]);
        assert!((hits[0].distance - 6.5).abs() < 1e-3);
        assert!(approx(hits[0].point, Vec3::new(0.0, 0.0, 3.5)));
        assert!((hits[1].distance - 9.5).abs() < 1e-3);
    }

    #[test]
    fn far_limit_and_layers_filter_hits() {
        let (mut scene, far, near) = unit_box_scene();

        let mut raycaster = center_ray();
        raycaster.far = 8.0;
        assert_eq!(
            objects_from_hits(&raycaster.intersect_objects(&scene, &[far, near], false)),
            vec![near]
        );

        scene.objects[near].layers.set(4);
        let hits = center_ray().intersect_objects(&scene, &[far, near], false);
        assert_eq!(objects_from_hits(&hits), vec![far]);

        scene.objects[far].visible = false;
        assert!(center_ray().intersect_objects(&scene, &[far, near], false).is_empty());
    }

    #[test]
    fn recursive_search_includes_children() {
        let (mut scene, far, near) = unit_box_scene();
        let group = scene.add_object(Object3D::new("group"));
        scene.add_child(group, far).unwrap();
        scene.add_child(group, near).unwrap();

        let raycaster = center_ray();
        assert!(raycaster.intersect_object(&scene, group, false).is_empty());
        assert_eq!(
            objects_from_hits(&raycaster.intersect_object(&scene, group, true)),
            vec![near, far]
        );
    }

    #[test]
    fn hits_follow_parent_transforms() {
        let (mut scene, far, _) = unit_box_scene();
        let group = scene.add_object(Object3D::new("group"));
        scene.add_child(group, far).unwrap();
        scene.set_object_position(group, Vec3::new(5.0, 0.0, 0.0));

        let raycaster = center_ray();
        assert!(raycaster.intersect_object(&scene, far, false).is_empty());

        scene.set_object_position(group, Vec3::new(0.0, 0.0, 1.0));
        let hits = raycaster.intersect_object(&scene, far, false);
        assert!(approx(hits[0].point, Vec3::new(0.0, 0.0, 1.5)));
    }

    #[test]
    fn cylinder_is_picked_through_its_rotation() {
        let mut scene = Scene::new();
        let cylinder = scene.add_geometry(Geometry::Cylinder {
            radius_top: 1.0,
            radius_bottom: 1.0,
            height: 2.0,
        });
        let cone = scene.add_geometry(Geometry::Cylinder {
            radius_top: 0.0,
            radius_bottom: 1.0,
            height: 2.0,
        });
        let standing = scene.add_object(Object3D::new("standing").with_geometry(cone));
        let lying = scene.add_object(Object3D::new("lying").with_geometry(cylinder));
        scene.set_object_quaternion(lying, Quat::from_rotation_x(std::f32::consts::FRAC_PI_2));

        let raycaster = center_ray();
        let hits = raycaster.intersect_object(&scene, standing, false);
        assert!(approx(hits[0].point, Vec3::new(0.0, 0.0, 0.5)));

        let hits = raycaster.intersect_object(&scene, lying, false);
        assert!(approx(hits[0].point, Vec3::new(0.0, 0.0, 1.0)));

        scene.set_object_position(lying, Vec3::new(3.0, 0.0, 0.0));
        assert!(raycaster.intersect_object(&scene, lying, false).is_empty());
    }

    #[test]
    fn hit_extraction_keeps_order_and_duplicates() {
        let (_, a, b) = unit_box_scene();
        let hit = |object, distance| Intersection {
            distance,
            point: Vec3::ZERO,
            object,
        };

        assert_eq!(objects_from_hits(&[hit(a, 1.0), hit(b, 5.0)]), vec![a, b]);
        assert_eq!(objects_from_hits(&[hit(b, 1.0), hit(b, 2.0), hit(a, 3.0)]), vec![b, b, a]);
        assert!(objects_from_hits(&[]).is_empty());
    }
}
