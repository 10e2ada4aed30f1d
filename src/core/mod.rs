//! Core routing logic
//!
//! Decides what each back press means. No rendering code here: the router
//! hands decisions back and the plugin layer applies them.

pub mod nav;
pub mod route;
pub mod router;

pub use nav::{NavigationContext, SurfaceKind};
pub use route::RouteDecision;
pub use router::BackPressRouter;
