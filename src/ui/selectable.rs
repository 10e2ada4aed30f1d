//! Cancelable-surface capability
//!
//! The one seam between this crate and the game's own menu system.

/// Capability shared by every cancelable interactive surface.
///
/// Game menus implement this so a hardware back press can close them the
/// same way their own cancel key does; the exit dialog implements it so a
/// second press dismisses the dialog instead of raising it again.
pub trait Selectable {
    /// True while the surface is open and accepting input.
    fn is_open_and_active(&self) -> bool;

    /// Handle a cancel action (close the menu, dismiss the dialog, ...).
    fn process_cancel(&mut self);
}
