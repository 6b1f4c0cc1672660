//! Main TUI application state and logic

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::config::Settings;
use crate::llm::{display_outcome, generate_draft, TextGenerator};
use crate::prompt::{EmailRequest, ScheduleRequest};
use crate::tui::screens::{
    email_form, email_request, schedule_form, schedule_request, FormScreen,
};
use crate::tui::widgets::{HelpPopup, OutputPane, OutputState};

/// Drafting mode; only one form is visible at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Schedule,
    Email,
}

impl AppMode {
    fn from_setting(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "email" => AppMode::Email,
            _ => AppMode::Schedule,
        }
    }

    fn toggled(self) -> Self {
        match self {
            AppMode::Schedule => AppMode::Email,
            AppMode::Email => AppMode::Schedule,
        }
    }
}

/// Main application state
pub struct App {
    generator: Box<dyn TextGenerator>,
    mode: AppMode,
    show_help: bool,

    // Screen states
    schedule: FormScreen,
    email: FormScreen,

    // One output pane per mode so switching keeps the last result
    schedule_output: OutputPane,
    email_output: OutputPane,
}

impl App {
    /// Create a new app instance
    pub fn new(settings: &Settings, generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator,
            mode: AppMode::from_setting(&settings.tui.start_mode),
            show_help: false,
            schedule: schedule_form(&ScheduleRequest::default()),
            email: email_form(&EmailRequest::default()),
            schedule_output: OutputPane::new(),
            email_output: OutputPane::new(),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Draw the current mode
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let form_height = match self.mode {
            AppMode::Schedule => self.schedule.height(),
            AppMode::Email => self.email.height(),
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Mode tabs
                Constraint::Length(form_height), // Form
                Constraint::Min(5),     // Output
                Constraint::Length(1),  // Help
            ])
            .split(area);

        let selected_tab = match self.mode {
            AppMode::Schedule => 0,
            AppMode::Email => 1,
        };
        let tabs = Tabs::new(vec!["📅 Schedule Creator", "✉️ Email Draft Generator"])
            .select(selected_tab)
            .highlight_style(Style::default().fg(Color::Cyan).bold())
            .block(
                Block::default()
                    .title(format!(" draftdesk · {} ", self.generator.model()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(tabs, chunks[0]);

        let focused = !self.show_help;
        match self.mode {
            AppMode::Schedule => {
                self.schedule.draw(frame, chunks[1], focused);
                self.schedule_output.draw(frame, chunks[2], "Generated Invite");
            }
            AppMode::Email => {
                self.email.draw(frame, chunks[1], focused);
                self.email_output.draw(frame, chunks[2], "Generated Email");
            }
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" ↑/↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Field  "),
            Span::styled(" ←/→ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Option  "),
            Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Generate  "),
            Span::styled(" Ctrl+J ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" New line  "),
            Span::styled(" F2 ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Switch  "),
            Span::styled(" F1 ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Help  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[3]);

        // Draw help popup if active
        if self.show_help {
            HelpPopup::draw(frame, area, self.mode);
        }
    }

    /// Handle a key press, including modifier chords.
    ///
    /// Ctrl+J and Alt+Enter start a new line in the selected text field. Other
    /// Ctrl/Alt chords are ignored so they never type into a field.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_newline();
            }
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert_newline();
            }
            KeyCode::Char(_) if chord => {}
            code => self.handle_key(code),
        }
    }

    /// Start a new line in the selected text field
    pub fn insert_newline(&mut self) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        self.form_mut().insert_newline();
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        match key {
            KeyCode::F(2) => {
                self.mode = self.mode.toggled();
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.form_mut().previous();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_mut().next();
            }
            KeyCode::PageUp => {
                self.output_mut().page_up();
            }
            KeyCode::PageDown => {
                self.output_mut().page_down();
            }
            KeyCode::Enter => {
                self.output_mut().set_state(OutputState::Pending);
            }
            _ => {
                self.form_mut().handle_key(key);
            }
        }
    }

    /// True between a submit and its result; the caller redraws, then calls `complete_pending`.
    pub fn is_pending(&self) -> bool {
        self.output().state() == &OutputState::Pending
    }

    /// Run the pending submission to completion.
    ///
    /// Bad form input is reported in the output pane without contacting the service.
    pub async fn complete_pending(&mut self) {
        if !self.is_pending() {
            return;
        }

        let result = match self.mode {
            AppMode::Schedule => match schedule_request(&self.schedule) {
                Ok(request) => generate_draft(self.generator.as_ref(), &request).await,
                Err(e) => {
                    let message = format!("Error: {}", e);
                    self.output_mut().set_state(OutputState::Failed(message));
                    return;
                }
            },
            AppMode::Email => {
                let request = email_request(&self.email);
                generate_draft(self.generator.as_ref(), &request).await
            }
        };

        let state = match &result {
            Ok(_) => OutputState::Succeeded(display_outcome(&result)),
            Err(_) => OutputState::Failed(display_outcome(&result)),
        };
        self.output_mut().set_state(state);
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        !self.show_help
    }

    /// Handle back navigation
    pub fn handle_back(&mut self) {
        self.show_help = false;
    }

    /// Toggle help popup
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn output(&self) -> &OutputPane {
        match self.mode {
            AppMode::Schedule => &self.schedule_output,
            AppMode::Email => &self.email_output,
        }
    }

    fn output_mut(&mut self) -> &mut OutputPane {
        match self.mode {
            AppMode::Schedule => &mut self.schedule_output,
            AppMode::Email => &mut self.email_output,
        }
    }

    fn form_mut(&mut self) -> &mut FormScreen {
        match self.mode {
            AppMode::Schedule => &mut self.schedule,
            AppMode::Email => &mut self.email,
        }
    }
}
