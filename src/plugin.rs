//! Composition root
//!
//! `BackBridge` is the object a game registers its hooks on: surface
//! transitions, the per-frame poll (which doubles as cancel interception
//! for the focused menu), dialog key input, the play-surface update seam,
//! and rendering. It owns the router, the dialog, and the configuration;
//! the host bridge is injected at construction.

use crate::config::BridgeConfig;
use crate::core::nav::NavigationContext;
use crate::core::route::RouteDecision;
use crate::core::router::BackPressRouter;
use crate::core::SurfaceKind;
use crate::host::HostBridge;
use crate::ui::exit_confirm::ExitChoice;
use crate::ui::exit_dialog::{DialogState, ExitDialog};
use crate::ui::selectable::Selectable;
use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use std::sync::Arc;

/// Frame-update seam for the play surface.
///
/// While the exit dialog is awaiting a choice only `update_base` runs, so
/// world state does not advance behind the modal.
pub trait SceneUpdate {
    /// Full per-frame update including world simulation.
    fn update_world(&mut self);

    /// Minimal update that keeps UI and timers alive without advancing the
    /// world.
    fn update_base(&mut self);
}

/// Hardware back button integration for one game session.
pub struct BackBridge {
    config: BridgeConfig,
    router: BackPressRouter,
    dialog: ExitDialog,
}

impl BackBridge {
    pub fn new(bridge: Arc<dyn HostBridge>, config: BridgeConfig) -> Self {
        let dialog = ExitDialog::new(&config.prompt);
        Self {
            router: BackPressRouter::new(bridge),
            dialog,
            config,
        }
    }

    /// Announce the title screen: the host's default back-to-exit applies.
    pub fn enter_root(&mut self) {
        self.router.enter_surface(SurfaceKind::Root);
    }

    /// Announce the main play surface: back is owned by the game from here.
    pub fn enter_play(&mut self) {
        self.router.enter_surface(SurfaceKind::Play);
    }

    /// Announce an arbitrary surface transition.
    pub fn enter_surface(&mut self, surface: SurfaceKind) {
        self.router.enter_surface(surface);
    }

    /// Per-frame hook.
    ///
    /// `focused` is whatever selectable currently holds input focus, if
    /// any; an open, active one consumes a pending press as its cancel
    /// action. With the dialog already up, the press cancels the dialog
    /// instead of raising it twice.
    pub fn on_frame(&mut self, focused: Option<&mut dyn Selectable>) -> RouteDecision {
        let focused_cancelable = focused.as_ref().map_or(false, |w| w.is_open_and_active());
        let ctx = NavigationContext::derive(
            self.router.surface(),
            focused_cancelable,
            self.dialog.is_open_and_active(),
        );

        let decision = self.router.poll(ctx);
        match decision {
            RouteDecision::ForwardCancel => {
                if ctx == NavigationContext::Modal {
                    self.dialog.process_cancel();
                } else if let Some(widget) = focused {
                    widget.process_cancel();
                }
            }
            RouteDecision::RaisePrompt => {
                self.dialog.raise();
                if let Some(ms) = self.config.haptics.prompt_pulse_ms {
                    self.router.bridge().vibrate(ms);
                }
            }
            RouteDecision::Unavailable | RouteDecision::Idle | RouteDecision::DefaultBack => {}
        }
        decision
    }

    /// Key hook while the dialog is up. Returns true when the key was
    /// consumed; the modal swallows everything while awaiting a choice.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.dialog.state() != DialogState::AwaitingChoice {
            return false;
        }
        match self.dialog.handle_key(key) {
            Some(ExitChoice::Confirm) => {
                tracing::info!("exit confirmed, terminating through host");
                self.router.bridge().force_exit();
            }
            Some(ExitChoice::Cancel) | None => {}
        }
        true
    }

    /// True while gameplay must not advance behind the modal.
    pub fn blocks_world_update(&self) -> bool {
        self.dialog.state() == DialogState::AwaitingChoice
    }

    /// Drive the play surface's frame update, substituting the base update
    /// while the dialog is up.
    pub fn update_scene(&mut self, scene: &mut dyn SceneUpdate) {
        if self.blocks_world_update() {
            scene.update_base();
        } else {
            scene.update_world();
        }
    }

    /// Paint the dialog over the finished frame.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        self.dialog.render(area, buf);
    }

    /// Dialog access for host-side state checks.
    pub fn dialog(&self) -> &ExitDialog {
        &self.dialog
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }
}
