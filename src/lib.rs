//! Hardware back button integration for frame-driven game UIs.
//!
//! Bridges a mobile host's back button into in-game navigation: open menus
//! receive their cancel action, the title screen keeps the host's default
//! back-to-exit behavior, and the main play surface raises a two-option
//! exit confirmation dialog.
//!
//! Hosts plug in through the [`host::HostBridge`] capability trait
//! ([`host::SharedBridge`] is a ready-made adapter for flag-polling hosts);
//! builds without a host degrade to a silent no-op. The game drives
//! everything through one [`BackBridge`] object: `enter_root`/`enter_play`
//! on navigation transitions, `on_frame` once per frame with the focused
//! selectable, `handle_key` while the dialog is up, `update_scene` for the
//! play surface, and `render` after drawing its own frame.

pub mod config;
pub mod core;
pub mod host;
pub mod plugin;
pub mod ui;

pub use config::BridgeConfig;
pub use self::core::{BackPressRouter, NavigationContext, RouteDecision, SurfaceKind};
pub use host::{DetachedBridge, HostBridge, HostHandle, SharedBridge};
pub use plugin::{BackBridge, SceneUpdate};
pub use ui::{DialogState, ExitChoice, ExitDialog, Selectable};
