//! Per-frame navigation context
//!
//! Recomputed from live UI state on every poll; nothing here is persisted.

/// Top-level navigation surfaces the game announces on transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Title screen: the host's default back-to-exit behavior applies.
    Root,

    /// Main play surface: back is owned by the game.
    Play,
}

/// Which driver governs the interpretation of a back press this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationContext {
    /// On the root surface with nothing to cancel.
    Root,

    /// On the play surface; `cancelable` says whether an open, active
    /// selectable currently holds focus.
    Widget { cancelable: bool },

    /// The exit confirmation dialog is up and owns the press.
    Modal,
}

impl NavigationContext {
    /// Derive the governing context from live UI state.
    ///
    /// The dialog wins over everything; an open menu wins over the surface.
    pub fn derive(surface: SurfaceKind, focused_cancelable: bool, modal_open: bool) -> Self {
        if modal_open {
            NavigationContext::Modal
        } else if focused_cancelable {
            NavigationContext::Widget { cancelable: true }
        } else {
            match surface {
                SurfaceKind::Root => NavigationContext::Root,
                SurfaceKind::Play => NavigationContext::Widget { cancelable: false },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_wins_derivation() {
        assert_eq!(
            NavigationContext::derive(SurfaceKind::Play, true, true),
            NavigationContext::Modal
        );
        assert_eq!(
            NavigationContext::derive(SurfaceKind::Root, false, true),
            NavigationContext::Modal
        );
    }

    #[test]
    fn test_open_menu_wins_over_surface() {
        assert_eq!(
            NavigationContext::derive(SurfaceKind::Root, true, false),
            NavigationContext::Widget { cancelable: true }
        );
        assert_eq!(
            NavigationContext::derive(SurfaceKind::Play, true, false),
            NavigationContext::Widget { cancelable: true }
        );
    }

    #[test]
    fn test_bare_surfaces() {
        assert_eq!(
            NavigationContext::derive(SurfaceKind::Root, false, false),
            NavigationContext::Root
        );
        assert_eq!(
            NavigationContext::derive(SurfaceKind::Play, false, false),
            NavigationContext::Widget { cancelable: false }
        );
    }
}
