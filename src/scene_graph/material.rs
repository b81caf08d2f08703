use id_arena::Id;

pub type MaterialId = Id<Material>;

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    /// 0xRRGGBB
    pub color: u32,
}

impl Material {
    pub fn new(name: impl Into<String>, color: u32) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn set_color(&mut self, color: u32) {
        self.color = color & 0x00ff_ffff;
    }
}

/// Materials bound to an object: one material, or one per geometry group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialSlot {
    Single(MaterialId),
    List(Vec<MaterialId>),
}

impl MaterialSlot {
    pub fn ids(&self) -> &[MaterialId] {
        match self {
            MaterialSlot::Single(id) => std::slice::from_ref(id),
            MaterialSlot::List(ids) => ids,
        }
    }

    /// Appends to the slot, promoting a single material to a list that keeps it first.
    pub fn append(&mut self, materials: impl IntoIterator<Item = MaterialId>) {
        match self {
            MaterialSlot::Single(id) => {
                let mut ids = vec![*id];
                ids.extend(materials);
                *self = MaterialSlot::List(ids);
            }
            MaterialSlot::List(ids) => ids.extend(materials),
        }
    }
}
