use glam::Vec3;
use id_arena::Id;
use serde_json::Value;
use std::collections::HashMap;

use crate::scene_graph::geometry::GeometryId;
use crate::scene_graph::layers::Layers;
use crate::scene_graph::material::{MaterialId, MaterialSlot};
use crate::scene_graph::scene::Scene;
use crate::scene_graph::transform::Transform;

pub type ObjectId = Id<Object3D>;

pub struct Object3D {
    pub name: String,
    pub transform: Transform,
    pub material: Option<MaterialSlot>,
    pub geometry: Option<GeometryId>,
    pub layers: Layers,
    pub visible: bool,
    pub parent_id: Option<ObjectId>,
    pub child_ids: Vec<ObjectId>,
    user_data: HashMap<String, Value>,
}

impl Object3D {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_geometry(mut self, geometry: GeometryId) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(MaterialSlot::Single(material));
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.set_position(position);
        self
    }

    pub fn parent<'a>(&self, scene: &'a Scene) -> Option<&'a Object3D> {
        self.parent_id.and_then(|id| scene.get_object(id))
    }

    pub fn children<'a, 'b>(&'a self, scene: &'b Scene) -> impl Iterator<Item = &'b Object3D> + 'b
    where
        'a: 'b,
    {
        self.child_ids
            .iter()
            .filter_map(move |id| scene.get_object(*id))
    }

    pub fn user_data(&self, key: &str) -> Option<&Value> {
        self.user_data.get(key)
    }

    /// Returns the value previously stored under `key`.
    pub fn set_user_data(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.user_data.insert(key.into(), value.into())
    }

    pub fn remove_user_data(&mut self, key: &str) -> Option<Value> {
        self.user_data.remove(key)
    }

    pub fn set_material(&mut self, material: MaterialId) {
        self.material = Some(MaterialSlot::Single(material));
    }

    pub fn set_material_list(&mut self, materials: Vec<MaterialId>) {
        self.material = Some(MaterialSlot::List(materials));
    }

    /// Appends without dropping materials already bound to the object.
    pub fn add_materials(&mut self, materials: impl IntoIterator<Item = MaterialId>) {
        match &mut self.material {
            Some(slot) => slot.append(materials),
            None => self.material = Some(MaterialSlot::List(materials.into_iter().collect())),
        }
    }

    pub fn materials(&self) -> &[MaterialId] {
        match &self.material {
            Some(slot) => slot.ids(),
            None => &[],
        }
    }

    pub fn set_geometry(&mut self, geometry: GeometryId) {
        self.geometry = Some(geometry);
    }
}

impl Default for Object3D {
    fn default() -> Self {
        Self {
            name: String::new(),
            transform: Transform::from_position(Vec3::ZERO),
            material: None,
            geometry: None,
            layers: Layers::default(),
            visible: true,
            parent_id: None,
            child_ids: Vec::new(),
            user_data: HashMap::new(),
        }
    }
}
