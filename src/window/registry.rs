use std::collections::BTreeMap;

use super::{FloatGeometry, GeometryController, Viewport};
use crate::constants::{CLOSE_DELAY_TICKS, INITIAL_TAB_ADDRESS};
use crate::event_loop::EventLoop;
use crate::placement::{PlacementJitter, RandomJitter};
use crate::tabs::{TabId, TabbedPane};

/// Registry-unique window identifier, never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

/// Lifecycle phase of one window record.
///
/// `Open -> Closing -> Closed`, driven by [`WindowRegistry::request_close`]
/// and the deferred commit it schedules. Closed records stay in the
/// registry, addressable for relaunch or focus restoration, but drop out
/// of the visible projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Open,
    Closing,
    Closed,
}

/// What kind of content pane an open request asks for.
#[derive(Debug, Clone)]
pub enum ContentSpec {
    /// Tabbed browser pane; `None` seeds the first tab at the stock
    /// start address.
    Browser { initial_address: Option<String> },
    /// Read-only informational pane; the lines are opaque to the core.
    Static { lines: Vec<String> },
}

impl Default for ContentSpec {
    fn default() -> Self {
        ContentSpec::Static { lines: Vec::new() }
    }
}

/// Window-open request from the surrounding shell.
#[derive(Debug, Clone, Default)]
pub struct OpenRequest {
    pub title: String,
    pub icon: String,
    pub app_id: String,
    /// Show a back affordance in the titlebar instead of the app icon.
    pub show_back: bool,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub content: ContentSpec,
}

impl OpenRequest {
    pub fn browser(title: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            app_id: app_id.into(),
            content: ContentSpec::Browser {
                initial_address: None,
            },
            ..Self::default()
        }
    }

    pub fn static_pane(
        title: impl Into<String>,
        app_id: impl Into<String>,
        lines: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            app_id: app_id.into(),
            content: ContentSpec::Static { lines },
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// Read-only informational pane content.
#[derive(Debug, Clone, Default)]
pub struct StaticPane {
    pub lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum WindowContent {
    Tabbed(TabbedPane),
    Static(StaticPane),
}

/// Authoritative state for one window: identity, lifecycle phase,
/// stacking position, geometry, and content.
#[derive(Debug, Clone)]
pub struct WindowRecord {
    id: WindowId,
    title: String,
    icon: String,
    app_id: String,
    show_back: bool,
    phase: Phase,
    z_order: u64,
    geometry: GeometryController,
    content: WindowContent,
}

impl WindowRecord {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn show_back(&self) -> bool {
        self.show_back
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// A window stays active (and visible) through the close animation;
    /// only the committed `Closed` phase deactivates it.
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Stacking position; higher is in front, ties are impossible.
    pub fn z_order(&self) -> u64 {
        self.z_order
    }

    pub fn geometry(&self) -> &GeometryController {
        &self.geometry
    }

    pub fn content(&self) -> &WindowContent {
        &self.content
    }

    pub fn tabs(&self) -> Option<&TabbedPane> {
        match &self.content {
            WindowContent::Tabbed(pane) => Some(pane),
            WindowContent::Static(_) => None,
        }
    }

    fn tabs_mut(&mut self) -> Option<&mut TabbedPane> {
        match &mut self.content {
            WindowContent::Tabbed(pane) => Some(pane),
            WindowContent::Static(_) => None,
        }
    }
}

/// Per-window projection for the rendering layer, derived from the
/// committed record state.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowView {
    pub id: WindowId,
    pub title: String,
    pub geometry: FloatGeometry,
    pub maximized: bool,
    pub z_order: u64,
    /// `None` for windows without a tabbed pane.
    pub active_tab: Option<usize>,
    pub address: Option<String>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Process-wide directory of all windows: identity, activity, stacking
/// order, geometry, and content. The only component the surrounding
/// shell talks to; every operation on an unknown window id is a silent
/// no-op.
pub struct WindowRegistry {
    windows: BTreeMap<WindowId, WindowRecord>,
    viewport: Viewport,
    jitter: Box<dyn PlacementJitter>,
    next_window_seq: u64,
}

impl WindowRegistry {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_jitter(viewport, Box::new(RandomJitter::from_entropy()))
    }

    /// Build a registry with an injected placement source, so tests can
    /// pin initial window coordinates down.
    pub fn with_jitter(viewport: Viewport, jitter: Box<dyn PlacementJitter>) -> Self {
        Self {
            windows: BTreeMap::new(),
            viewport,
            jitter,
            next_window_seq: 0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Propagate a host viewport resize. Maximized windows are refilled
    /// to the new viewport; floating windows keep their rects.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for window in self.windows.values_mut() {
            window.geometry.refill_maximized(viewport);
        }
    }

    /// Stacking slot above every currently known window.
    fn next_z(&self) -> u64 {
        self.windows
            .values()
            .map(|w| w.z_order)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Open a new window on top of the stack. Never fails.
    pub fn open(&mut self, request: OpenRequest) -> WindowId {
        let id = WindowId(self.next_window_seq);
        self.next_window_seq += 1;
        let z_order = self.next_z();
        let geometry = GeometryController::open_at(
            self.viewport,
            self.jitter.as_mut(),
            request.width,
            request.height,
        );
        let content = match request.content {
            ContentSpec::Browser { initial_address } => WindowContent::Tabbed(TabbedPane::new(
                initial_address.as_deref().unwrap_or(INITIAL_TAB_ADDRESS),
            )),
            ContentSpec::Static { lines } => WindowContent::Static(StaticPane { lines }),
        };
        tracing::debug!(window_id = ?id, app_id = %request.app_id, z_order, "opened window");
        self.windows.insert(
            id,
            WindowRecord {
                id,
                title: request.title,
                icon: request.icon,
                app_id: request.app_id,
                show_back: request.show_back,
                phase: Phase::Open,
                z_order,
                geometry,
                content,
            },
        );
        id
    }

    /// Raise `id` above every other window. Only its z slot changes.
    pub fn focus(&mut self, id: WindowId) {
        let z_order = self.next_z();
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        window.z_order = z_order;
        tracing::debug!(window_id = ?id, z_order, "focused window");
    }

    /// Begin closing `id`: the window enters `Closing` now and commits
    /// to `Closed` once the scheduled delay elapses. Repeated requests
    /// while closing, and requests for closed or unknown windows, are
    /// ignored, so exactly one transition runs per close.
    pub fn request_close(&mut self, id: WindowId, timers: &mut EventLoop<WindowRegistry>) {
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        if window.phase != Phase::Open {
            return;
        }
        window.phase = Phase::Closing;
        tracing::debug!(window_id = ?id, "window closing");
        timers.schedule(CLOSE_DELAY_TICKS, move |registry: &mut WindowRegistry| {
            registry.commit_close(id);
        });
    }

    fn commit_close(&mut self, id: WindowId) {
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        if window.phase != Phase::Closing {
            return;
        }
        window.phase = Phase::Closed;
        tracing::debug!(window_id = ?id, "window closed");
    }

    /// Route a drag/resize geometry update to `id`.
    pub fn update_geometry(&mut self, id: WindowId, next: FloatGeometry) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.geometry.update_geometry(next);
        }
    }

    /// Toggle maximize for `id` against the current viewport.
    pub fn toggle_maximize(&mut self, id: WindowId) {
        let viewport = self.viewport;
        if let Some(window) = self.windows.get_mut(&id) {
            window.geometry.toggle_maximize(viewport);
        }
    }

    /// Append a tab seeded at `initial` to `id`'s pane and make it
    /// active. `None` for windows without a tabbed pane.
    pub fn add_tab(&mut self, id: WindowId, initial: &str) -> Option<TabId> {
        self.windows
            .get_mut(&id)
            .and_then(WindowRecord::tabs_mut)
            .map(|pane| pane.add_tab(initial))
    }

    pub fn switch_tab(&mut self, id: WindowId, index: usize) {
        if let Some(pane) = self.windows.get_mut(&id).and_then(WindowRecord::tabs_mut) {
            pane.switch_tab(index);
        }
    }

    /// Navigate the active tab of `id`.
    pub fn navigate(&mut self, id: WindowId, raw: &str) {
        if let Some(pane) = self.windows.get_mut(&id).and_then(WindowRecord::tabs_mut) {
            pane.active_history_mut().navigate(raw);
        }
    }

    pub fn back(&mut self, id: WindowId) -> Option<&str> {
        self.windows
            .get_mut(&id)
            .and_then(WindowRecord::tabs_mut)
            .map(|pane| pane.active_history_mut().back())
    }

    pub fn forward(&mut self, id: WindowId) -> Option<&str> {
        self.windows
            .get_mut(&id)
            .and_then(WindowRecord::tabs_mut)
            .map(|pane| pane.active_history_mut().forward())
    }

    pub fn reload(&self, id: WindowId) -> Option<&str> {
        self.windows
            .get(&id)
            .and_then(WindowRecord::tabs)
            .map(|pane| pane.active_history().reload())
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.get(&id)
    }

    /// Read-only whole-state view for the rendering layer. The clone is
    /// taken after the mutation that triggered the re-read committed,
    /// so no partial state is ever observable.
    pub fn snapshot(&self) -> BTreeMap<WindowId, WindowRecord> {
        self.windows.clone()
    }

    /// Windows that still render: everything not yet `Closed`.
    pub fn visible(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.values().filter(|w| w.is_active())
    }

    /// Derived per-window view: geometry, maximize flag, active tab and
    /// address, back/forward availability.
    pub fn window_view(&self, id: WindowId) -> Option<WindowView> {
        let window = self.windows.get(&id)?;
        let tabs = window.tabs();
        let history = tabs.map(TabbedPane::active_history);
        Some(WindowView {
            id: window.id,
            title: window.title.clone(),
            geometry: window.geometry.geometry(),
            maximized: window.geometry.is_maximized(),
            z_order: window.z_order,
            active_tab: tabs.map(TabbedPane::active_index),
            address: history.map(|h| h.current().to_string()),
            can_go_back: history.is_some_and(|h| h.can_go_back()),
            can_go_forward: history.is_some_and(|h| h.can_go_forward()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::FixedJitter;

    fn registry() -> WindowRegistry {
        WindowRegistry::with_jitter(
            Viewport {
                width: 1280.0,
                height: 720.0,
            },
            Box::new(FixedJitter(0.0, 0.0)),
        )
    }

    #[test]
    fn unknown_ids_are_silent_noops() {
        let mut reg = registry();
        let mut timers = EventLoop::new();
        let ghost = WindowId(99);

        reg.focus(ghost);
        reg.request_close(ghost, &mut timers);
        reg.toggle_maximize(ghost);
        reg.switch_tab(ghost, 0);
        reg.navigate(ghost, "https://nowhere");

        assert_eq!(timers.pending(), 0);
        assert!(reg.window(ghost).is_none());
        assert!(reg.window_view(ghost).is_none());
    }

    #[test]
    fn tab_operations_skip_static_panes() {
        let mut reg = registry();
        let id = reg.open(OpenRequest::static_pane(
            "Files",
            "explorer",
            vec!["Documents".into(), "Downloads".into()],
        ));

        assert!(reg.add_tab(id, "https://a").is_none());
        assert!(reg.back(id).is_none());
        assert!(reg.reload(id).is_none());

        let view = reg.window_view(id).unwrap();
        assert_eq!(view.active_tab, None);
        assert_eq!(view.address, None);
        assert!(!view.can_go_back);
    }

    #[test]
    fn browser_windows_seed_the_stock_start_address() {
        let mut reg = registry();
        let id = reg.open(OpenRequest::browser("Edge", "browser"));
        let view = reg.window_view(id).unwrap();
        assert_eq!(view.active_tab, Some(0));
        assert_eq!(view.address.as_deref(), Some(INITIAL_TAB_ADDRESS));
    }
}
