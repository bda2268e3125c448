// Scrolling camera for the 2D world

use crate::core::math::Rect;

/// Fixed size of the visible window and the scroll margins inside it
///
/// Margins are measured in world units from each screen edge. The right
/// margin is narrower than the others, which leaves more lead room ahead of
/// a character running to the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
}

pub const DEFAULT_VIEWPORT: ViewportConfig = ViewportConfig {
    screen_width: 1600.0,
    screen_height: 900.0,
    left_margin: 240.0,
    right_margin: 150.0,
    top_margin: 240.0,
    bottom_margin: 240.0,
};

impl Default for ViewportConfig {
    fn default() -> Self {
        DEFAULT_VIEWPORT
    }
}

/// Scroll offsets of the visible world window
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub view_left: f32,
    pub view_bottom: f32,
}

impl Viewport {
    pub fn new(view_left: f32, view_bottom: f32) -> Self {
        Self {
            view_left,
            view_bottom,
        }
    }
}

/// Keeps the character inside the margin-bounded region of the screen
#[derive(Debug, Clone)]
pub struct Camera {
    viewport: Viewport,
    config: ViewportConfig,
}

impl Camera {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            viewport: Viewport::default(),
            config,
        }
    }

    /// Current scroll offsets
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Scroll so `bounds` sits inside the margins
    ///
    /// The four edge checks are independent, so horizontal and vertical
    /// scrolling can both happen in one call. Returns the new viewport only
    /// if it moved.
    pub fn update(&mut self, bounds: Rect) -> Option<Viewport> {
        let mut changed = false;

        // Scroll left
        let left_boundary = self.viewport.view_left + self.config.left_margin;
        if bounds.left < left_boundary {
            self.viewport.view_left -= left_boundary - bounds.left;
            changed = true;
        }

        // Scroll right
        let right_boundary =
            self.viewport.view_left + self.config.screen_width - self.config.right_margin;
        if bounds.right() > right_boundary {
            self.viewport.view_left += bounds.right() - right_boundary;
            changed = true;
        }

        // Scroll up
        let top_boundary =
            self.viewport.view_bottom + self.config.screen_height - self.config.top_margin;
        if bounds.top() > top_boundary {
            self.viewport.view_bottom += bounds.top() - top_boundary;
            changed = true;
        }

        // Scroll down
        let bottom_boundary = self.viewport.view_bottom + self.config.bottom_margin;
        if bounds.bottom < bottom_boundary {
            self.viewport.view_bottom -= bottom_boundary - bounds.bottom;
            changed = true;
        }

        if changed {
            log::trace!(
                "Viewport scrolled to ({:.1}, {:.1})",
                self.viewport.view_left,
                self.viewport.view_bottom
            );
            Some(self.viewport)
        } else {
            None
        }
    }

    /// World-space rectangle currently on screen
    pub fn visible_rect(&self) -> Rect {
        Rect::new(
            self.viewport.view_left,
            self.viewport.view_bottom,
            self.config.screen_width,
            self.config.screen_height,
        )
    }
}
