//! Form screen - editable fields for one drafting mode

use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Value held by a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice {
        options: Vec<&'static str>,
        index: usize,
    },
}

/// A single labeled field
#[derive(Debug, Clone)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
}

impl FormField {
    pub fn text(key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            label,
            value: FieldValue::Text(value.into()),
        }
    }

    pub fn choice(
        key: &'static str,
        label: &'static str,
        options: Vec<&'static str>,
        index: usize,
    ) -> Self {
        Self {
            key,
            label,
            value: FieldValue::Choice { options, index },
        }
    }

    fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { options, index } => {
                format!("◀ {} ▶", options.get(*index).copied().unwrap_or(""))
            }
        }
    }

    /// Rows the field takes on screen.
    fn line_count(&self) -> usize {
        match &self.value {
            FieldValue::Text(s) => s.split('\n').count(),
            FieldValue::Choice { .. } => 1,
        }
    }
}

/// Form screen state
pub struct FormScreen {
    title: &'static str,
    fields: Vec<FormField>,
    state: ListState,
}

impl FormScreen {
    pub fn new(title: &'static str, fields: Vec<FormField>) -> Self {
        let mut state = ListState::default();
        if !fields.is_empty() {
            state.select(Some(0));
        }

        Self {
            title,
            fields,
            state,
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let label_width = self
            .fields
            .iter()
            .map(|f| f.label.len())
            .max()
            .unwrap_or(0);
        let selected = self.state.selected();

        let items: Vec<ListItem> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let mut value = field.display_value();
                if focused && selected == Some(i) && matches!(field.value, FieldValue::Text(_)) {
                    value.push('█');
                }

                // Continuation lines sit under the first value line.
                let lines: Vec<Line> = value
                    .split('\n')
                    .enumerate()
                    .map(|(n, part)| {
                        let label = if n == 0 { field.label } else { "" };
                        Line::from(vec![
                            Span::styled(
                                format!("{:<width$}  ", label, width = label_width),
                                Style::default().fg(Color::Cyan),
                            ),
                            Span::styled(part.to_string(), Style::default().fg(Color::White)),
                        ])
                    })
                    .collect();

                ListItem::new(lines)
            })
            .collect();

        let border_color = if focused { Color::Blue } else { Color::DarkGray };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.state);
    }

    /// Height needed to show every field, borders included.
    pub fn height(&self) -> u16 {
        let rows: usize = self.fields.iter().map(FormField::line_count).sum();
        u16::try_from(rows + 2).unwrap_or(u16::MAX)
    }

    pub fn next(&mut self) {
        if self.fields.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) if i + 1 < self.fields.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.fields.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(0) | None => self.fields.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn selected(&self) -> Option<&FormField> {
        self.state.selected().and_then(|i| self.fields.get(i))
    }

    /// Edit the selected field.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(field) = self.state.selected().and_then(|i| self.fields.get_mut(i)) else {
            return;
        };

        match (&mut field.value, key) {
            (FieldValue::Text(s), KeyCode::Char(c)) => s.push(c),
            (FieldValue::Text(s), KeyCode::Backspace) => {
                s.pop();
            }
            (FieldValue::Choice { options, index }, KeyCode::Right | KeyCode::Char(' ')) => {
                *index = (*index + 1) % options.len().max(1);
            }
            (FieldValue::Choice { options, index }, KeyCode::Left) => {
                *index = if *index == 0 {
                    options.len().saturating_sub(1)
                } else {
                    *index - 1
                };
            }
            _ => {}
        }
    }

    /// Start a new line in the selected text field.
    pub fn insert_newline(&mut self) {
        if let Some(FieldValue::Text(s)) = self
            .state
            .selected()
            .and_then(|i| self.fields.get_mut(i))
            .map(|f| &mut f.value)
        {
            s.push('\n');
        }
    }

    /// Current text of a text field; empty if the key is unknown.
    pub fn text(&self, key: &str) -> &str {
        match self.fields.iter().find(|f| f.key == key).map(|f| &f.value) {
            Some(FieldValue::Text(s)) => s.as_str(),
            _ => "",
        }
    }

    /// Selected option index of a choice field.
    pub fn choice(&self, key: &str) -> usize {
        match self.fields.iter().find(|f| f.key == key).map(|f| &f.value) {
            Some(FieldValue::Choice { index, .. }) => *index,
            _ => 0,
        }
    }
}
