//! Backing panel for the exit confirmation dialog.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Widget};

/// Panel height in rows: the prompt line plus room for the choice row
/// below it.
const PANEL_HEIGHT: u16 = 3;

/// Full-width dimmed panel carrying the exit prompt text.
///
/// Terminal cells cannot alpha-blend, so the scrim is a plain dark fill
/// over whatever the play surface drew this frame.
#[derive(Debug, Clone)]
pub struct ExitPromptPanel {
    text: String,
    visible: bool,
}

impl ExitPromptPanel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Panel rectangle: full width, fixed height, vertically centered.
    pub fn layout(area: Rect) -> Rect {
        let height = PANEL_HEIGHT.min(area.height);
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if !self.visible {
            return;
        }
        let panel = Self::layout(area);
        if panel.height == 0 || panel.width == 0 {
            return;
        }

        // Dark fill standing in for the semi-transparent scrim
        for y in panel.y..panel.y + panel.height {
            for x in panel.x..panel.x + panel.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_style(Style::default().bg(Color::Black).fg(Color::White));
                }
            }
        }

        // Prompt sits on the top row; the choice window lands lower down.
        let text_row = Rect {
            x: panel.x,
            y: panel.y,
            width: panel.width,
            height: 1,
        };
        Paragraph::new(self.text.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .render(text_row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_row(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn test_layout_is_vertically_centered() {
        let panel = ExitPromptPanel::layout(Rect::new(0, 0, 40, 21));
        assert_eq!(panel, Rect::new(0, 9, 40, 3));
    }

    #[test]
    fn test_hidden_panel_renders_nothing() {
        let panel = ExitPromptPanel::new("Quit?");
        let area = Rect::new(0, 0, 20, 9);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_visible_panel_centers_prompt_text() {
        let mut panel = ExitPromptPanel::new("Quit?");
        panel.show();
        let area = Rect::new(0, 0, 21, 9);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);

        // Panel occupies rows 3..6; the prompt is on its top row.
        let row = buffer_row(&buf, 3, area.width);
        assert!(row.trim() == "Quit?", "unexpected row: {:?}", row);
        assert_eq!(buffer_row(&buf, 2, area.width).trim(), "");
    }
}
