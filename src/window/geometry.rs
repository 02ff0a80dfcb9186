use super::{FloatGeometry, Viewport};
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::placement::PlacementJitter;

/// Floating geometry and the maximize/restore toggle for one window.
///
/// The saved rect doubles as the maximize marker: it is present exactly
/// while the window is maximized, and holds the floating geometry
/// captured immediately before the maximize, so the two states can
/// never drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryController {
    current: FloatGeometry,
    saved: Option<FloatGeometry>,
}

impl GeometryController {
    /// Place a new window near the top middle of the viewport, nudged
    /// by a jitter offset sampled once and held for the window's life.
    ///
    /// The result is advisory; the drag/resize collaborator keeps the
    /// window inside the parent afterward.
    pub fn open_at(
        viewport: Viewport,
        jitter: &mut dyn PlacementJitter,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Self {
        let (jx, jy) = jitter.sample();
        let current = FloatGeometry {
            x: (viewport.width + jx) / 2.0,
            y: (100.0 + jy) / 2.0,
            width: width.unwrap_or(DEFAULT_WINDOW_WIDTH),
            height: height.unwrap_or(DEFAULT_WINDOW_HEIGHT),
        }
        .clamped_min();
        Self {
            current,
            saved: None,
        }
    }

    pub fn geometry(&self) -> FloatGeometry {
        self.current
    }

    pub fn is_maximized(&self) -> bool {
        self.saved.is_some()
    }

    pub fn saved_geometry(&self) -> Option<FloatGeometry> {
        self.saved
    }

    /// Replace the floating geometry wholesale, as reported by the
    /// drag/resize collaborator. Dropped while maximized so the saved
    /// floating rect cannot be corrupted mid-maximize.
    pub fn update_geometry(&mut self, next: FloatGeometry) {
        if self.saved.is_some() {
            return;
        }
        self.current = next.clamped_min();
    }

    /// Flip between floating and maximized.
    ///
    /// Maximizing captures the floating rect and fills the viewport
    /// (minus the taskbar); restoring puts the captured rect back
    /// field for field, so two toggles are an exact inverse.
    pub fn toggle_maximize(&mut self, viewport: Viewport) {
        match self.saved.take() {
            Some(saved) => {
                self.current = saved;
            }
            None => {
                self.saved = Some(self.current);
                self.current = viewport.maximized_geometry();
            }
        }
    }

    /// Re-fill an already-maximized window after a viewport resize.
    /// Floating windows are left alone.
    pub(super) fn refill_maximized(&mut self, viewport: Viewport) {
        if self.saved.is_some() {
            self.current = viewport.maximized_geometry();
        }
    }
}
