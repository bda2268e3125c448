// Window-backed renderer

use super::{
    world_to_screen_rect, Canvas, RenderError, RenderSink, SpriteDraw, Viewport, CLEAR_COLOR,
};
use crate::engine::assets::FrameStore;
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use winit::window::Window;

/// Rasterizes sprites into a fixed-size framebuffer scaled to the window
pub struct PixelsRenderer {
    pixels: Pixels<'static>,
    frames: Arc<FrameStore>,
    viewport: Viewport,
    width: u32,
    height: u32,
}

impl PixelsRenderer {
    /// `width` and `height` are the logical screen size in world units;
    /// the surface stretches it over the window
    pub fn new(
        window: Arc<Window>,
        frames: Arc<FrameStore>,
        width: u32,
        height: u32,
    ) -> Result<Self, RenderError> {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface)?;

        log::info!(
            "Renderer ready: {}x{} buffer on {}x{} surface",
            width,
            height,
            size.width,
            size.height
        );

        Ok(Self {
            pixels,
            frames,
            viewport: Viewport::default(),
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)?;
        Ok(())
    }
}

impl RenderSink for PixelsRenderer {
    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn draw(&mut self, sprites: &[SpriteDraw]) -> Result<(), RenderError> {
        let screen_height = self.height as f32;
        let mut canvas = Canvas::new(self.pixels.frame_mut(), self.width, self.height);
        canvas.clear(CLEAR_COLOR);

        for sprite in sprites {
            let image = self
                .frames
                .get(sprite.frame)
                .ok_or(RenderError::MissingFrame(sprite.frame.id()))?;
            let dest = world_to_screen_rect(sprite.bounds, self.viewport, screen_height);
            canvas.blit(image, dest);
        }

        self.pixels.render()?;
        Ok(())
    }
}
