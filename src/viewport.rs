use glam::{UVec2, Vec2};

/// Anything that knows the current pixel size of the surface being drawn to.
pub trait ViewportSize {
    fn size(&self) -> Vec2;
}

/// Pixel dimensions of the render target. Origin top-left, +Y down.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl ViewportSize for Viewport {
    fn size(&self) -> Vec2 {
        UVec2::new(self.width, self.height).as_vec2()
    }
}

impl ViewportSize for UVec2 {
    fn size(&self) -> Vec2 {
        self.as_vec2()
    }
}
