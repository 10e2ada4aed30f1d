//! Back press routing
//!
//! One poll per frame: consume the edge flag, look at the navigation
//! context, decide. Surface transitions are reported here too, so the
//! host's default-back toggle flips exactly once per transition.

use crate::core::nav::{NavigationContext, SurfaceKind};
use crate::core::route::RouteDecision;
use crate::host::HostBridge;
use std::sync::Arc;

/// Routes hardware back presses for the embedding game.
pub struct BackPressRouter {
    bridge: Arc<dyn HostBridge>,

    /// Last surface the game announced; None until the first transition.
    surface: Option<SurfaceKind>,
}

impl BackPressRouter {
    pub fn new(bridge: Arc<dyn HostBridge>) -> Self {
        Self {
            bridge,
            surface: None,
        }
    }

    /// The injected host bridge.
    pub fn bridge(&self) -> &Arc<dyn HostBridge> {
        &self.bridge
    }

    /// Surface currently governing root-vs-play decisions.
    ///
    /// A fresh app that has announced nothing yet is sitting on its title
    /// screen, so this defaults to `Root`.
    pub fn surface(&self) -> SurfaceKind {
        self.surface.unwrap_or(SurfaceKind::Root)
    }

    /// Record a surface transition and flip the host's default-back toggle.
    ///
    /// Repeated announcements of the same surface make no further
    /// capability calls; a missing bridge skips the toggle entirely.
    pub fn enter_surface(&mut self, surface: SurfaceKind) {
        if self.surface == Some(surface) {
            return;
        }
        self.surface = Some(surface);

        if self.bridge.is_available() {
            let default_back = surface == SurfaceKind::Root;
            tracing::debug!(
                "entered {:?} surface, default back {}",
                surface,
                default_back
            );
            self.bridge.set_default_back_enabled(default_back);
        }
    }

    /// Per-frame poll: consume a pending press and route it.
    pub fn poll(&mut self, ctx: NavigationContext) -> RouteDecision {
        if !self.bridge.is_available() {
            return RouteDecision::Unavailable;
        }
        if !self.bridge.take_back_press() {
            return RouteDecision::Idle;
        }

        let decision = match ctx {
            NavigationContext::Modal | NavigationContext::Widget { cancelable: true } => {
                RouteDecision::ForwardCancel
            }
            NavigationContext::Root => RouteDecision::DefaultBack,
            NavigationContext::Widget { cancelable: false } => RouteDecision::RaisePrompt,
        };
        tracing::debug!("back press in {:?} routed as {:?}", ctx, decision);
        decision
    }
}
