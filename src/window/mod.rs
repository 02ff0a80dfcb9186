mod geometry;
mod registry;

use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, TASKBAR_HEIGHT};

pub use geometry::GeometryController;
pub use registry::{
    ContentSpec, OpenRequest, Phase, StaticPane, WindowContent, WindowId, WindowRecord,
    WindowRegistry, WindowView,
};

/// Floating window rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FloatGeometry {
    /// Clamp the size up to the fixed window minimums, leaving the
    /// origin untouched.
    pub fn clamped_min(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
            ..self
        }
    }
}

/// Host viewport the shell renders into. Read at window creation and at
/// each maximize/restore, never cached by a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// The rect a maximized window fills: the whole viewport minus the
    /// taskbar strip along the bottom.
    pub fn maximized_geometry(&self) -> FloatGeometry {
        FloatGeometry {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height - TASKBAR_HEIGHT,
        }
    }
}
