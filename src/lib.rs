//! Headless window manager for a simulated desktop shell.
//!
//! The crate models the state machines behind a desktop of floating,
//! maximizable application windows, each optionally hosting a tabbed
//! browser pane with back/forward history. Nothing here renders: the
//! shell feeds discrete user actions into [`window::WindowRegistry`]
//! and re-reads snapshots after every mutation. Drag/resize mechanics
//! live outside the crate and arrive as plain geometry updates.

pub mod constants;
pub mod event_loop;
pub mod history;
pub mod placement;
pub mod tabs;
pub mod tracing_sub;
pub mod window;
