use crate::scene_graph::Layers;

/// Defaults applied to a freshly created [`crate::raycaster::Raycaster`].
#[derive(Debug, Clone)]
pub struct RaycastConfig {
    /// Hits closer than this distance are discarded.
    pub near: f32,
    /// Hits further away than this distance are discarded.
    pub far: f32,
    pub layers: Layers,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            near: 0.0,
            far: f32::INFINITY,
            layers: Layers::default(),
        }
    }
}
