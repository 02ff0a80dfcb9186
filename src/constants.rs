//! Shared crate-wide constants.

/// Minimum width a floating window may be opened or resized at.
pub const MIN_WINDOW_WIDTH: f64 = 300.0;

/// Minimum height a floating window may be opened or resized at.
pub const MIN_WINDOW_HEIGHT: f64 = 300.0;

/// Default width for windows whose open request does not specify one.
pub const DEFAULT_WINDOW_WIDTH: f64 = 320.0;

/// Default height for windows whose open request does not specify one.
pub const DEFAULT_WINDOW_HEIGHT: f64 = 300.0;

/// Height of the shell taskbar. Maximized geometry stops above it so a
/// maximized window never covers the taskbar.
pub const TASKBAR_HEIGHT: f64 = 50.0;

/// Delay, in event-loop ticks, between a close request and the window
/// leaving the visible set. Covers the close animation the rendering
/// layer plays while the record is still `Closing`.
pub const CLOSE_DELAY_TICKS: u64 = 100;

/// Scheme prepended to navigated addresses that do not carry one.
pub const DEFAULT_SCHEME: &str = "https://";

/// Address every fresh browser tab starts on.
pub const INITIAL_TAB_ADDRESS: &str = "https://www.example.com";
