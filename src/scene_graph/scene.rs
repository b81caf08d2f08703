use glam::{Mat4, Quat, Vec3};
use id_arena::Arena;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::math::Aabb;
use crate::scene_graph::geometry::{Geometry, GeometryId};
use crate::scene_graph::material::{Material, MaterialId};
use crate::scene_graph::object3d::{Object3D, ObjectId};
use crate::scene_graph::transform::Transform;

pub struct Scene {
    pub objects: Arena<Object3D>,
    pub materials: Arena<Material>,
    pub geometries: Arena<Geometry>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Arena::new(),
            materials: Arena::new(),
            geometries: Arena::new(),
        }
    }

    pub fn add_object(&mut self, object: Object3D) -> ObjectId {
        self.objects.alloc(object)
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&Object3D> {
        self.objects.get(id)
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut Object3D> {
        self.objects.get_mut(id)
    }

    pub fn get_object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name == name)
            .map(|(id, _)| id)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.alloc(material)
    }

    pub fn get_material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn set_material_color(&mut self, id: MaterialId, color: u32) {
        if let Some(material) = self.materials.get_mut(id) {
            material.set_color(color);
        }
    }

    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryId {
        self.geometries.alloc(geometry)
    }

    pub fn get_geometry(&self, id: GeometryId) -> Option<&Geometry> {
        self.geometries.get(id)
    }

    /// Objects without a parent.
    pub fn roots(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, object)| object.parent_id.is_none())
            .map(|(id, _)| id)
    }

    /// All descendants of `object_id` in depth-first pre-order, excluding the object itself.
    pub fn descendants(&self, object_id: ObjectId) -> Vec<ObjectId> {
        let mut descendants = Vec::new();
        let mut stack = self.child_ids_reversed(object_id);

        while let Some(id) = stack.pop() {
            descendants.push(id);
            stack.extend(self.child_ids_reversed(id));
        }

        descendants
    }

    fn child_ids_reversed(&self, object_id: ObjectId) -> Vec<ObjectId> {
        self.objects
            .get(object_id)
            .map(|object| object.child_ids.iter().rev().copied().collect())
            .unwrap_or_default()
    }

    /// True when `ancestor_id` is `object_id` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor_id: ObjectId, object_id: ObjectId) -> bool {
        let mut current = Some(object_id);

        while let Some(id) = current {
            if id == ancestor_id {
                return true;
            }
            current = self.objects.get(id).and_then(|object| object.parent_id);
        }

        false
    }

    /// Detaches the object from its current parent (if any), then attaches it to
    /// `new_parent_id`. Passing `None` leaves it as a root.
    pub fn set_object_parent(
        &mut self,
        child_id: ObjectId,
        new_parent_id: Option<ObjectId>,
    ) -> Result<()> {
        if self.objects.get(child_id).is_none() {
            return Err(Error::UnknownObject(child_id));
        }

        if let Some(new_parent_id) = new_parent_id {
            if self.objects.get(new_parent_id).is_none() {
                return Err(Error::UnknownObject(new_parent_id));
            }

            if self.is_ancestor_or_self(child_id, new_parent_id) {
                log::warn!("refusing to attach {child_id:?} below itself");
                return Err(Error::CyclicParent {
                    child: child_id,
                    parent: new_parent_id,
                });
            }
        }

        // Remove from old parent's children list
        let old_parent_id = self.objects[child_id].parent_id.take();
        if let Some(old_parent_id) = old_parent_id {
            if let Some(old_parent) = self.objects.get_mut(old_parent_id) {
                old_parent.child_ids.retain(|&id| id != child_id);
            }
        }

        if let Some(new_parent_id) = new_parent_id {
            self.objects[child_id].parent_id = Some(new_parent_id);
            self.objects[new_parent_id].child_ids.push(child_id);
        }

        log::debug!("moved {child_id:?} from {old_parent_id:?} to {new_parent_id:?}");

        Ok(())
    }

    pub fn reparent(&mut self, child_id: ObjectId, new_parent_id: ObjectId) -> Result<()> {
        self.set_object_parent(child_id, Some(new_parent_id))
    }

    pub fn add_child(&mut self, parent_id: ObjectId, child_id: ObjectId) -> Result<()> {
        self.set_object_parent(child_id, Some(parent_id))
    }

    pub fn remove_from_parent(&mut self, child_id: ObjectId) -> Result<()> {
        self.set_object_parent(child_id, None)
    }

    /// Product of the local matrices from the root down to the object.
    pub fn world_matrix(&self, object_id: ObjectId) -> Option<Mat4> {
        let mut object = self.objects.get(object_id)?;
        let mut world_matrix = *object.transform.get_local_matrix();

        while let Some(parent) = object.parent_id.and_then(|id| self.objects.get(id)) {
            world_matrix = *parent.transform.get_local_matrix() * world_matrix;
            object = parent;
        }

        Some(world_matrix)
    }

    /// World-space box around the object's geometry. `None` without geometry.
    pub fn world_bounding_box(&self, object_id: ObjectId) -> Option<Aabb> {
        let geometry = self
            .get_object(object_id)?
            .geometry
            .and_then(|id| self.geometries.get(id))?;
        let world_matrix = self.world_matrix(object_id)?;
        Some(geometry.bounding_box()?.transform(&world_matrix))
    }

    pub fn world_position(&self, object_id: ObjectId) -> Option<Vec3> {
        self.world_matrix(object_id).map(|matrix| matrix.w_axis.truncate())
    }

    fn with_transform(&mut self, object_id: ObjectId, f: impl FnOnce(&mut Transform)) {
        if let Some(object) = self.objects.get_mut(object_id) {
            f(&mut object.transform);
        }
    }

    pub fn set_object_position(&mut self, object_id: ObjectId, position: Vec3) {
        self.with_transform(object_id, |transform| transform.set_position(position));
    }

    pub fn add_object_position(&mut self, object_id: ObjectId, delta: Vec3) {
        self.with_transform(object_id, |transform| transform.add_position(delta));
    }

    pub fn set_object_rotation(&mut self, object_id: ObjectId, rotation: Vec3) {
        self.with_transform(object_id, |transform| transform.set_rotation(rotation));
    }

    pub fn set_object_quaternion(&mut self, object_id: ObjectId, quaternion: Quat) {
        self.with_transform(object_id, |transform| transform.set_quaternion(quaternion));
    }

    pub fn set_object_scale(&mut self, object_id: ObjectId, scale: Vec3) {
        self.with_transform(object_id, |transform| transform.set_scale(scale));
    }

    pub fn set_object_transform(
        &mut self,
        object_id: ObjectId,
        position: Vec3,
        scale: Vec3,
        quaternion: Quat,
    ) {
        self.with_transform(object_id, |transform| {
            transform.set_transform(position, scale, quaternion)
        });
    }

    pub fn lerp_object_to(&mut self, object_id: ObjectId, target: Vec3, alpha: f32) {
        self.with_transform(object_id, |transform| transform.lerp_position(target, alpha));
    }

    pub fn get_object_transform(&self, object_id: ObjectId) -> Option<&Transform> {
        self.objects.get(object_id).map(|object| &object.transform)
    }

    pub fn user_data(&self, object_id: ObjectId, key: &str) -> Option<&Value> {
        self.objects.get(object_id)?.user_data(key)
    }

    pub fn set_user_data(
        &mut self,
        object_id: ObjectId,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.objects.get_mut(object_id)?.set_user_data(key, value)
    }

    pub fn set_material(&mut self, object_id: ObjectId, material: MaterialId) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.set_material(material);
        }
    }

    pub fn set_material_list(&mut self, object_id: ObjectId, materials: Vec<MaterialId>) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.set_material_list(materials);
        }
    }

    pub fn add_materials(
        &mut self,
        object_id: ObjectId,
        materials: impl IntoIterator<Item = MaterialId>,
    ) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.add_materials(materials);
        }
    }

    pub fn set_geometry(&mut self, object_id: ObjectId, geometry: GeometryId) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.set_geometry(geometry);
        }
    }

    /// Clears per-object change flags at the start of a frame.
    pub fn begin_frame(&mut self) {
        for (_, object) in self.objects.iter() {
            object.transform.reset_flags();
        }
    }

    pub fn changed_objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, object)| object.transform.has_changed())
            .map(|(id, _)| id)
    }
}
