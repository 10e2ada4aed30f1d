//! Routing outcome vocabulary
//!
//! The router decides what a back press means and hands the decision back;
//! the caller applies the side effects. This keeps the router unaware of
//! any concrete widget or dialog type.

/// What a single per-frame poll of the back button resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// No host bridge attached; the poll was a pure no-op.
    Unavailable,

    /// Bridge attached, no press pending this frame.
    Idle,

    /// Press consumed as a cancel for the focused selectable (an open
    /// menu, or the exit dialog itself while it is up).
    ForwardCancel,

    /// Press left to the host's default back handling (root surface).
    DefaultBack,

    /// Press should raise the exit confirmation dialog.
    RaisePrompt,
}

impl RouteDecision {
    /// True when a physical press was consumed this frame.
    pub fn consumed_press(&self) -> bool {
        !matches!(self, RouteDecision::Unavailable | RouteDecision::Idle)
    }

    /// True when the caller has nothing to apply.
    pub fn is_noop(&self) -> bool {
        matches!(
            self,
            RouteDecision::Unavailable | RouteDecision::Idle | RouteDecision::DefaultBack
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumed_press() {
        assert!(!RouteDecision::Unavailable.consumed_press());
        assert!(!RouteDecision::Idle.consumed_press());
        assert!(RouteDecision::ForwardCancel.consumed_press());
        assert!(RouteDecision::DefaultBack.consumed_press());
        assert!(RouteDecision::RaisePrompt.consumed_press());
    }

    #[test]
    fn test_noop_decisions() {
        assert!(RouteDecision::DefaultBack.is_noop());
        assert!(!RouteDecision::ForwardCancel.is_noop());
        assert!(!RouteDecision::RaisePrompt.is_noop());
    }
}
