//! Host capability boundary
//!
//! The platform host (an Android activity, an iOS scene, ...) owns the
//! hardware back button and process control. The game side only ever talks
//! to it through the `HostBridge` trait; a build without a host degrades to
//! "back button does nothing" via `DetachedBridge`.

pub mod shared;

pub use shared::{HostCallbacks, HostHandle, SharedBridge};

/// Capabilities the platform host exposes to the game.
///
/// All calls are synchronous and non-blocking. The bridge is shared with
/// the platform thread on real hosts, hence `Send + Sync`.
pub trait HostBridge: Send + Sync {
    /// True iff a platform host is attached.
    ///
    /// Every other capability is meaningless when this returns false;
    /// callers must short-circuit instead of relying on no-op behavior.
    fn is_available(&self) -> bool;

    /// Read-and-clear the pending back press flag.
    ///
    /// Returns true at most once per physical press.
    fn take_back_press(&self) -> bool;

    /// Toggle whether the host's own back action (exit the app) applies.
    fn set_default_back_enabled(&self, enabled: bool);

    /// End the hosting process unconditionally.
    ///
    /// Real hosts do not return from this; test doubles record the call
    /// instead.
    fn force_exit(&self);

    /// Pulse the device vibrator for `ms` milliseconds.
    fn vibrate(&self, _ms: u64) {}

    /// Pop a short toast message on the device.
    fn pop_toast(&self, _text: &str) {}
}

/// Stand-in bridge for builds without a platform host (desktop, CI).
///
/// The availability probe fails, so every entry point short-circuits and
/// the back button simply does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedBridge;

impl HostBridge for DetachedBridge {
    fn is_available(&self) -> bool {
        false
    }

    fn take_back_press(&self) -> bool {
        false
    }

    fn set_default_back_enabled(&self, _enabled: bool) {}

    fn force_exit(&self) {}
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_bridge_is_inert() {
        let bridge = DetachedBridge;
        assert!(!bridge.is_available());
        assert!(!bridge.take_back_press());
        // No-ops by contract; must not panic.
        bridge.set_default_back_enabled(true);
        bridge.force_exit();
        bridge.vibrate(40);
        bridge.pop_toast("hello");
    }
}
