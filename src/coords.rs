//! Conversions between pixel coordinates (origin top-left, +Y down) and
//! normalized device coordinates (origin center, +Y up, [-1, 1] per axis).

use glam::{IVec2, Vec2};

use crate::camera::PerspectiveCamera;
use crate::scene_graph::{ObjectId, Scene};
use crate::viewport::ViewportSize;

pub fn screen_to_ndc(screen: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        (screen.x / size.x) * 2.0 - 1.0,
        -(screen.y / size.y) * 2.0 + 1.0,
    )
}

pub fn ndc_to_screen(ndc: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        ((ndc.x + 1.0) / 2.0) * size.x,
        ((-ndc.y + 1.0) / 2.0) * size.y,
    )
}

/// Drops the fractional part, rounding toward zero. Values outside the `i32`
/// range saturate and NaN becomes zero.
pub fn to_pixel(screen: Vec2) -> IVec2 {
    screen.as_ivec2()
}

/// Pixel position of an object's world-space origin.
///
/// Coordinates are not clamped to the viewport: objects left of or above the
/// view yield negative values, objects right of or below it exceed the size.
/// `None` when the object is not part of `scene`.
pub fn screen_position(
    scene: &Scene,
    object_id: ObjectId,
    camera: &PerspectiveCamera,
    viewport: &impl ViewportSize,
) -> Option<IVec2> {
    let world = scene.world_position(object_id)?;
    let ndc = camera.project(world);
    Some(to_pixel(ndc_to_screen(ndc.truncate(), viewport.size())))
}
