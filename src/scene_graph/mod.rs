pub mod geometry;
pub mod layers;
pub mod material;
pub mod object3d;
pub mod scene;
pub mod transform;

// Re-export main types for convenience
pub use geometry::{Geometry, GeometryId};
pub use layers::Layers;
pub use material::{Material, MaterialId, MaterialSlot};
pub use object3d::{Object3D, ObjectId};
pub use scene::Scene;
pub use transform::{Orientation, Transform};
