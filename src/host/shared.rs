//! Shared-flag host adapter
//!
//! Real hosts report back presses from the platform thread while the game
//! thread polls: the same shape as an activity flipping a boolean that the
//! embedded runtime reads. `SharedBridge` is the game-facing side,
//! `HostHandle` the platform-facing side; they share two atomic flags.

use super::HostBridge;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What the host-facing actions mean on this platform.
///
/// The default exit action terminates the process; vibration and toasts are
/// ignored unless the embedder plugs in real hardware hooks.
pub struct HostCallbacks {
    /// Invoked by `force_exit`. Expected not to return on real hosts.
    pub exit: Box<dyn Fn() + Send + Sync>,

    /// Invoked by `vibrate` with the pulse duration in milliseconds.
    pub vibrate: Option<Box<dyn Fn(u64) + Send + Sync>>,

    /// Invoked by `pop_toast` with the message text.
    pub toast: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

impl Default for HostCallbacks {
    fn default() -> Self {
        Self {
            exit: Box::new(|| std::process::exit(0)),
            vibrate: None,
            toast: None,
        }
    }
}

/// Flags shared between the game-side bridge and the host-side handle.
struct BridgeFlags {
    /// Edge flag: a press happened since the last consume.
    back_pressed: AtomicBool,

    /// Whether the host's own back action (exit) currently applies.
    default_back: AtomicBool,
}

/// Ready-made `HostBridge` implementation backed by shared atomic flags.
pub struct SharedBridge {
    flags: Arc<BridgeFlags>,
    callbacks: HostCallbacks,
}

impl SharedBridge {
    /// Bridge whose exit action terminates the process.
    pub fn new() -> Self {
        Self::with_callbacks(HostCallbacks::default())
    }

    /// Bridge with custom platform actions (real hardware, or observers in
    /// tests).
    pub fn with_callbacks(callbacks: HostCallbacks) -> Self {
        Self {
            flags: Arc::new(BridgeFlags {
                back_pressed: AtomicBool::new(false),
                // Until the game says otherwise, back exits the app. An
                // un-integrated host must never trap the user.
                default_back: AtomicBool::new(true),
            }),
            callbacks,
        }
    }

    /// Handle for the platform side to report presses through.
    pub fn handle(&self) -> HostHandle {
        HostHandle {
            flags: Arc::clone(&self.flags),
        }
    }
}

impl Default for SharedBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBridge for SharedBridge {
    fn is_available(&self) -> bool {
        true
    }

    fn take_back_press(&self) -> bool {
        self.flags.back_pressed.swap(false, Ordering::SeqCst)
    }

    fn set_default_back_enabled(&self, enabled: bool) {
        tracing::debug!("default back navigation set to {}", enabled);
        self.flags.default_back.store(enabled, Ordering::SeqCst);
    }

    fn force_exit(&self) {
        tracing::info!("forced exit requested through host bridge");
        (self.callbacks.exit)();
    }

    fn vibrate(&self, ms: u64) {
        if let Some(vibrate) = &self.callbacks.vibrate {
            vibrate(ms);
        }
    }

    fn pop_toast(&self, text: &str) {
        if let Some(toast) = &self.callbacks.toast {
            toast(text);
        }
    }
}

/// Host-side view of the shared flags.
///
/// The platform's back handler calls `press_back` and runs its default
/// action (exit) only when that returns true.
#[derive(Clone)]
pub struct HostHandle {
    flags: Arc<BridgeFlags>,
}

impl HostHandle {
    /// Record a hardware back press.
    ///
    /// The press is recorded unconditionally; the return value tells the
    /// host whether its default back action should run instead of leaving
    /// the press to the game.
    pub fn press_back(&self) -> bool {
        self.flags.back_pressed.store(true, Ordering::SeqCst);
        self.flags.default_back.load(Ordering::SeqCst)
    }

    /// Current state of the default-back toggle.
    pub fn default_back_enabled(&self) -> bool {
        self.flags.default_back.load(Ordering::SeqCst)
    }
}
