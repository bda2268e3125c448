// Rendering system
//
// The simulation hands a list of sprites to a `RenderSink`; the window-backed
// sink rasterizes them on the CPU and presents through `pixels`.

mod camera;
mod canvas;
mod surface;

pub use camera::{Camera, Viewport, ViewportConfig, DEFAULT_VIEWPORT};
pub use canvas::{Canvas, ScreenRect};
pub use surface::PixelsRenderer;

use crate::core::math::Rect;
use crate::engine::assets::{AssetId, FrameHandle};

/// Background colour behind the level
pub const CLEAR_COLOR: [u8; 4] = [240, 248, 255, 255];

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Frame {0:?} is not loaded")]
    MissingFrame(AssetId),

    #[error("Surface error: {0}")]
    Surface(#[from] pixels::Error),

    #[error("Resize error: {0}")]
    Resize(#[from] pixels::TextureError),
}

/// One frame drawn at a world-space rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub frame: FrameHandle,
    pub bounds: Rect,
}

impl SpriteDraw {
    pub fn new(frame: FrameHandle, bounds: Rect) -> Self {
        Self { frame, bounds }
    }
}

/// Anything that can put sprites on screen
pub trait RenderSink {
    /// Called only when the viewport actually moved
    fn set_viewport(&mut self, viewport: Viewport);

    /// Draw sprites back to front
    fn draw(&mut self, sprites: &[SpriteDraw]) -> Result<(), RenderError>;
}

/// Map a world rectangle to screen pixels for the given viewport
pub fn world_to_screen_rect(bounds: Rect, viewport: Viewport, screen_height: f32) -> ScreenRect {
    ScreenRect::new(
        bounds.left - viewport.view_left,
        screen_height - (bounds.top() - viewport.view_bottom),
        bounds.width,
        bounds.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_world_to_screen_rect_flips_y() {
        let bounds = Rect::new(100.0, 0.0, 128.0, 128.0);
        let screen = world_to_screen_rect(bounds, Viewport::default(), 900.0);

        assert_relative_eq!(screen.x, 100.0);
        assert_relative_eq!(screen.y, 772.0);
        assert_relative_eq!(screen.width, 128.0);
    }

    #[test]
    fn test_world_to_screen_rect_applies_viewport() {
        let bounds = Rect::new(100.0, 0.0, 128.0, 128.0);
        let screen = world_to_screen_rect(bounds, Viewport::new(50.0, -30.0), 900.0);

        assert_relative_eq!(screen.x, 50.0);
        assert_relative_eq!(screen.y, 742.0);
    }
}
