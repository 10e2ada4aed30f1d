//! Dialog widgets and the selectable capability.

pub mod exit_confirm;
pub mod exit_dialog;
pub mod exit_prompt;
pub mod selectable;

pub use exit_confirm::{ExitChoice, ExitConfirmWindow};
pub use exit_dialog::{DialogState, ExitDialog};
pub use exit_prompt::ExitPromptPanel;
pub use selectable::Selectable;
