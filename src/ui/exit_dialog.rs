//! Exit confirmation dialog
//!
//! Two widgets working as one modal: the full-width prompt panel and the
//! YES/NO confirm window floating over it. The dialog owns the lifecycle
//! state machine; what a confirmed exit *does* stays with the caller, which
//! holds the host bridge.

use crate::config::PromptConfig;
use crate::ui::exit_confirm::{ExitChoice, ExitConfirmWindow, CANCEL_INDEX};
use crate::ui::exit_prompt::ExitPromptPanel;
use crate::ui::selectable::Selectable;
use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Lifecycle of the dialog, derived from the widget pair's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Not shown; back presses route elsewhere.
    Hidden,

    /// Panels shown but choice input deactivated.
    VisibleInactive,

    /// Shown and waiting for YES/NO.
    AwaitingChoice,
}

/// The two-widget exit confirmation modal.
pub struct ExitDialog {
    prompt: ExitPromptPanel,
    confirm: ExitConfirmWindow,

    /// Set once a Confirm choice has been emitted. The process is on its
    /// way out, so further choice input is dead.
    choice_locked: bool,
}

impl ExitDialog {
    pub fn new(config: &PromptConfig) -> Self {
        Self {
            prompt: ExitPromptPanel::new(config.text.clone()),
            confirm: ExitConfirmWindow::new(config.yes_label.clone(), config.no_label.clone()),
            choice_locked: false,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DialogState {
        if !self.prompt.is_visible() && !self.confirm.is_visible() {
            DialogState::Hidden
        } else if self.confirm.is_open_and_active() {
            DialogState::AwaitingChoice
        } else {
            DialogState::VisibleInactive
        }
    }

    /// Show the dialog with the cursor on the cancel column.
    ///
    /// A no-op while already visible.
    pub fn raise(&mut self) {
        if self.state() != DialogState::Hidden {
            tracing::debug!("exit dialog already visible, raise ignored");
            return;
        }
        tracing::info!("raising exit confirmation dialog");
        self.prompt.show();
        self.confirm.show();
        self.confirm.activate();
        self.confirm.select(CANCEL_INDEX);
    }

    /// Hide both widgets and drop choice input.
    pub fn dismiss(&mut self) {
        self.prompt.hide();
        self.confirm.hide();
        self.confirm.deactivate();
    }

    /// Suspend choice input without hiding (another modal took over).
    pub fn deactivate(&mut self) {
        self.confirm.deactivate();
    }

    /// Resume choice input after `deactivate`.
    pub fn activate(&mut self) {
        if self.confirm.is_visible() {
            self.confirm.activate();
        }
    }

    /// Cursor column in the confirm window (0 = confirm, 1 = cancel).
    pub fn selected(&self) -> usize {
        self.confirm.selected()
    }

    /// Route a key into the confirm window.
    ///
    /// A committed cancel is applied here (the dialog hides itself); a
    /// confirm is handed back so the caller can invoke host termination.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ExitChoice> {
        if self.choice_locked {
            return None;
        }
        match self.confirm.handle_key(key)? {
            ExitChoice::Cancel => {
                tracing::debug!("exit dialog cancelled");
                self.dismiss();
                Some(ExitChoice::Cancel)
            }
            ExitChoice::Confirm => {
                self.choice_locked = true;
                Some(ExitChoice::Confirm)
            }
        }
    }

    /// Paint the panel first, then the confirm window over it.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        self.prompt.render(area, buf);
        self.confirm.render(area, buf);
    }
}

impl Selectable for ExitDialog {
    fn is_open_and_active(&self) -> bool {
        self.state() == DialogState::AwaitingChoice
    }

    fn process_cancel(&mut self) {
        tracing::debug!("exit dialog dismissed by cancel");
        self.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::exit_confirm::CONFIRM_INDEX;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dialog() -> ExitDialog {
        ExitDialog::new(&PromptConfig::default())
    }

    #[test]
    fn test_raise_transitions_to_awaiting_choice() {
        let mut dialog = dialog();
        assert_eq!(dialog.state(), DialogState::Hidden);

        dialog.raise();
        assert_eq!(dialog.state(), DialogState::AwaitingChoice);
        assert_eq!(dialog.selected(), CANCEL_INDEX);
        assert!(dialog.is_open_and_active());
    }

    #[test]
    fn test_raise_is_idempotent() {
        let mut dialog = dialog();
        dialog.raise();
        dialog.handle_key(key(KeyCode::Left));
        assert_eq!(dialog.selected(), CONFIRM_INDEX);

        // A second raise must not reset the cursor or otherwise restart.
        dialog.raise();
        assert_eq!(dialog.selected(), CONFIRM_INDEX);
        assert_eq!(dialog.state(), DialogState::AwaitingChoice);
    }

    #[test]
    fn test_cancel_choice_hides_both_widgets() {
        let mut dialog = dialog();
        dialog.raise();

        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), Some(ExitChoice::Cancel));
        assert_eq!(dialog.state(), DialogState::Hidden);
        assert!(!dialog.is_open_and_active());
    }

    #[test]
    fn test_confirm_choice_locks_further_input() {
        let mut dialog = dialog();
        dialog.raise();
        dialog.handle_key(key(KeyCode::Left));

        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)),
            Some(ExitChoice::Confirm)
        );
        // A non-terminating host leaves us alive; the dialog must not emit
        // a second choice.
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), None);
        assert_eq!(dialog.handle_key(key(KeyCode::Esc)), None);
    }

    #[test]
    fn test_deactivate_yields_visible_inactive() {
        let mut dialog = dialog();
        dialog.raise();
        dialog.deactivate();
        assert_eq!(dialog.state(), DialogState::VisibleInactive);
        assert!(!dialog.is_open_and_active());

        dialog.activate();
        assert_eq!(dialog.state(), DialogState::AwaitingChoice);
    }

    #[test]
    fn test_process_cancel_dismisses() {
        let mut dialog = dialog();
        dialog.raise();
        dialog.process_cancel();
        assert_eq!(dialog.state(), DialogState::Hidden);
    }

    #[test]
    fn test_reraise_after_cancel_resets_cursor() {
        let mut dialog = dialog();
        dialog.raise();
        dialog.handle_key(key(KeyCode::Left));
        dialog.handle_key(key(KeyCode::Esc));
        assert_eq!(dialog.state(), DialogState::Hidden);

        dialog.raise();
        assert_eq!(dialog.selected(), CANCEL_INDEX);
    }
}
