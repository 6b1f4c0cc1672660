//! Help popup widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::AppMode;

/// Help popup that shows keyboard shortcuts
pub struct HelpPopup;

impl HelpPopup {
    pub fn draw(frame: &mut Frame, area: Rect, mode: AppMode) {
        // Calculate popup area (centered, 60% width, 70% height)
        let popup_width = (area.width as f32 * 0.6) as u16;
        let popup_height = (area.height as f32 * 0.7) as u16;
        let popup_x = area.x + (area.width - popup_width) / 2;
        let popup_y = area.y + (area.height - popup_height) / 2;

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: popup_width,
            height: popup_height,
        };

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let heading = match mode {
            AppMode::Schedule => "Schedule Creator Shortcuts",
            AppMode::Email => "Email Draft Generator Shortcuts",
        };

        let shortcuts = [
            ("↑/↓", "Previous / next field"),
            ("Tab", "Next field"),
            ("←/→", "Change tone or length"),
            ("Bksp", "Delete a character"),
            ("Ctrl+J", "New line in a text field (also Alt+Enter)"),
            ("Enter", "Generate"),
            ("PgUp", "Scroll output up"),
            ("PgDn", "Scroll output down"),
            ("F2", "Switch schedule / email"),
            ("F1", "Show this help"),
            ("Esc", "Quit application"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(heading, Style::default().fg(Color::Cyan).bold())),
            Line::from(""),
        ];
        help_text.extend(shortcuts.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:<8}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        }));
        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )));

        let help = Paragraph::new(help_text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

        frame.render_widget(help, popup_area);
    }
}
