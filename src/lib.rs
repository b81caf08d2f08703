//! Scene-graph helpers for interactive 3D views: transform and metadata
//! mutators, pointer picking against the ground plane or scene geometry,
//! world-to-screen projection and 2D outline construction.
//!
//! ```
//! use glam::Vec2;
//! use scene_utils::{PerspectiveCamera, Raycaster, Viewport};
//!
//! let viewport = Viewport::new(800, 600);
//! let camera = PerspectiveCamera::default();
//! let mut raycaster = Raycaster::default();
//!
//! raycaster.set_from_camera_and_screen(&camera, &viewport, Vec2::new(400.0, 300.0));
//! let ground = raycaster.intersect_ground_plane();
//! assert!(ground.is_some());
//! ```

pub mod camera;
pub mod config;
pub mod coords;
pub mod error;
pub mod math;
pub mod path;
pub mod raycaster;
pub mod scene_graph;
pub mod viewport;

pub use camera::PerspectiveCamera;
pub use config::RaycastConfig;
pub use coords::{ndc_to_screen, screen_position, screen_to_ndc};
pub use error::{Error, Result};
pub use path::{path_from_flat_points, shape_from_flat_points, Path, PathAction, Shape};
pub use raycaster::{objects_from_hits, Intersection, Raycaster};
pub use scene_graph::{Geometry, Layers, Material, Object3D, ObjectId, Scene};
pub use viewport::{Viewport, ViewportSize};
