//! Output pane - shows the generated draft or the failure message

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};

/// Lifecycle of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputState {
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

/// Output pane state
pub struct OutputPane {
    state: OutputState,
    scroll_offset: usize,
    content_height: usize,
}

impl Default for OutputPane {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPane {
    pub fn new() -> Self {
        Self {
            state: OutputState::Idle,
            scroll_offset: 0,
            content_height: 0,
        }
    }

    pub fn state(&self) -> &OutputState {
        &self.state
    }

    pub fn set_state(&mut self, state: OutputState) {
        self.state = state;
        self.scroll_offset = 0;
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, title: &str) {
        let (lines, border_color): (Vec<Line>, Color) = match &self.state {
            OutputState::Idle => (
                vec![Line::from(Span::styled(
                    "Press [Enter] to generate",
                    Style::default().fg(Color::DarkGray),
                ))],
                Color::DarkGray,
            ),
            OutputState::Pending => (
                vec![Line::from(Span::styled(
                    "✨ Generating...",
                    Style::default().fg(Color::Yellow),
                ))],
                Color::Yellow,
            ),
            OutputState::Succeeded(text) => (text.lines().map(Line::from).collect(), Color::Green),
            OutputState::Failed(message) => (
                vec![Line::from(Span::styled(
                    message.as_str(),
                    Style::default().fg(Color::Red),
                ))],
                Color::Red,
            ),
        };

        self.content_height = lines.len();
        let visible_height = area.height.saturating_sub(2) as usize;

        let output = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0))
            .block(
                Block::default()
                    .title(format!(" {} ", title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );
        frame.render_widget(output, area);

        if self.content_height > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(self.content_height)
                .position(self.scroll_offset)
                .viewport_content_length(visible_height);

            frame.render_stateful_widget(
                scrollbar,
                area.inner(Margin {
                    horizontal: 0,
                    vertical: 1,
                }),
                &mut scrollbar_state,
            );
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    pub fn page_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 10).min(self.content_height.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_resets_scroll() {
        let mut pane = OutputPane::new();
        pane.content_height = 40;
        pane.page_down();
        pane.page_down();
        assert_eq!(pane.scroll_offset, 20);

        pane.set_state(OutputState::Pending);
        assert_eq!(pane.scroll_offset, 0);
        assert_eq!(pane.state(), &OutputState::Pending);
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut pane = OutputPane::new();
        pane.content_height = 5;
        pane.page_down();
        assert_eq!(pane.scroll_offset, 4);
        pane.page_up();
        assert_eq!(pane.scroll_offset, 0);
    }
}
