use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Widget};

/// Outcome of a committed selection in the exit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    /// "YES": terminate the app.
    Confirm,

    /// "NO": dismiss the dialog and resume.
    Cancel,
}

/// Index of the confirm ("YES") column.
pub const CONFIRM_INDEX: usize = 0;

/// Index of the cancel ("NO") column, the default cursor position.
pub const CANCEL_INDEX: usize = 1;

/// Horizontal two-column YES/NO selector rendered over the prompt panel.
///
/// Draws no background of its own: the labels land directly on the backing
/// panel's fill.
#[derive(Debug, Clone)]
pub struct ExitConfirmWindow {
    yes_label: String,
    no_label: String,
    visible: bool,
    active: bool,
    selected: usize,
}

impl ExitConfirmWindow {
    pub fn new(yes_label: impl Into<String>, no_label: impl Into<String>) -> Self {
        Self {
            yes_label: yes_label.into(),
            no_label: no_label.into(),
            visible: false,
            active: false,
            selected: CANCEL_INDEX,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_open_and_active(&self) -> bool {
        self.visible && self.active
    }

    /// Move the cursor to the given column (0 = confirm, 1 = cancel).
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(CANCEL_INDEX);
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Translate a key into a cursor move or a committed choice.
    ///
    /// Ignored entirely while the window is not open and active.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ExitChoice> {
        if !self.is_open_and_active() {
            return None;
        }
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.selected = CANCEL_INDEX - self.selected;
                None
            }
            KeyCode::Enter => Some(if self.selected == CONFIRM_INDEX {
                ExitChoice::Confirm
            } else {
                ExitChoice::Cancel
            }),
            KeyCode::Esc => Some(ExitChoice::Cancel),
            _ => None,
        }
    }

    /// Window rectangle: one quarter of the width, horizontally centered,
    /// one row at the vertical midpoint.
    pub fn layout(area: Rect) -> Rect {
        let width = (area.width / 4).max(2).min(area.width);
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;
        let height = u16::from(area.height > 0);
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if !self.visible {
            return;
        }
        let win = Self::layout(area);
        if win.height == 0 || win.width < 2 {
            return;
        }

        let col_width = win.width / 2;
        let columns = [
            (CONFIRM_INDEX, &self.yes_label, win.x, col_width),
            (
                CANCEL_INDEX,
                &self.no_label,
                win.x + col_width,
                win.width - col_width,
            ),
        ];
        for (index, label, x, width) in columns {
            let style = if index == self.selected && self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Rgb(255, 215, 0))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).bg(Color::Black)
            };
            let col = Rect {
                x,
                y: win.y,
                width,
                height: 1,
            };
            Paragraph::new(label.as_str())
                .alignment(Alignment::Center)
                .style(style)
                .render(col, buf);
        }
    }
}
