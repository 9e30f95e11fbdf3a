//! Login and registration forms.

use crate::session::AuthRequest;
use crate::ui::throbber::spinner_char;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

impl AuthField {
    fn label(self) -> &'static str {
        match self {
            AuthField::Name => "Name",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
        }
    }
}

const LOGIN_FIELDS: &[AuthField] = &[AuthField::Email, AuthField::Password];
const REGISTER_FIELDS: &[AuthField] = &[AuthField::Name, AuthField::Email, AuthField::Password];

pub struct AuthScreen {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub focus: usize,
    pub validation_error: Option<String>,
}

impl AuthScreen {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            focus: 0,
            validation_error: None,
        }
    }

    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => LOGIN_FIELDS,
            AuthMode::Register => REGISTER_FIELDS,
        }
    }

    pub fn focused_field(&self) -> AuthField {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    fn value_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    pub fn handle_char_input(&mut self, c: char) {
        let field = self.focused_field();
        self.value_mut(field).push(c);
        self.validation_error = None;
    }

    pub fn handle_backspace(&mut self) {
        let field = self.focused_field();
        self.value_mut(field).pop();
        self.validation_error = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Required-field check. Credentials are never verified.
    pub fn validate(&self) -> Result<(), String> {
        for &field in self.fields() {
            if self.value(field).trim().is_empty() {
                return Err(format!("{} is required", field.label()));
            }
        }
        if !self.email.contains('@') {
            return Err("Email must contain @".to_string());
        }
        Ok(())
    }

    /// Validate and build the request, recording any error for display.
    pub fn submit(&mut self) -> Option<AuthRequest> {
        if let Err(e) = self.validate() {
            self.validation_error = Some(e);
            return None;
        }
        self.validation_error = None;
        Some(match self.mode {
            AuthMode::Login => AuthRequest::Login {
                email: self.email.trim().to_string(),
                password: self.password.clone(),
            },
            AuthMode::Register => AuthRequest::Register {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                password: self.password.clone(),
            },
        })
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, loading: bool) {
        let field_count = self.fields().len();
        let mut constraints = vec![
            Constraint::Length(3), // Title
            Constraint::Length(1), // Spacer
        ];
        constraints.extend(std::iter::repeat(Constraint::Length(4)).take(field_count));
        constraints.extend([
            Constraint::Length(2), // Validation / loading
            Constraint::Min(0),    // Filler
            Constraint::Length(3), // Controls
        ]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints(constraints)
            .split(area);

        let heading = match self.mode {
            AuthMode::Login => "Login",
            AuthMode::Register => "Create an Account",
        };
        let title = Paragraph::new(heading)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        for (i, &field) in self.fields().iter().enumerate() {
            let slot = chunks[2 + i];
            let focused = i == self.focus && !loading;

            f.render_widget(Paragraph::new(format!("{}:", field.label())), slot);

            let shown = match field {
                AuthField::Password => "*".repeat(self.password.chars().count()),
                other => self.value(other).to_string(),
            };
            let text = if focused { format!("{}_", shown) } else { shown };
            let border = if focused { Color::Cyan } else { Color::DarkGray };

            let input = Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border)),
                )
                .style(Style::default().fg(Color::White));
            f.render_widget(
                input,
                Rect {
                    y: slot.y + 1,
                    height: 3,
                    ..slot
                },
            );
        }

        let status_slot = chunks[2 + field_count];
        let status = if loading {
            let verb = match self.mode {
                AuthMode::Login => "Logging in",
                AuthMode::Register => "Creating account",
            };
            Line::from(Span::styled(
                format!("{} {}...", spinner_char(), verb),
                Style::default().fg(Color::Yellow),
            ))
        } else if let Some(error) = &self.validation_error {
            Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from("")
        };
        f.render_widget(Paragraph::new(status), status_slot);

        let submit_label = match self.mode {
            AuthMode::Login => "[Enter] Login",
            AuthMode::Register => "[Enter] Register",
        };
        let controls = Paragraph::new(format!("{}    [Tab] Next field    [Esc] Back", submit_label))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[chunks.len() - 1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(screen: &mut AuthScreen, s: &str) {
        for c in s.chars() {
            screen.handle_char_input(c);
        }
    }

    #[test]
    fn test_register_fields_and_focus_wrap() {
        let mut screen = AuthScreen::new(AuthMode::Register);
        assert_eq!(screen.focused_field(), AuthField::Name);
        screen.focus_prev();
        assert_eq!(screen.focused_field(), AuthField::Password);
        screen.focus_next();
        assert_eq!(screen.focused_field(), AuthField::Name);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut screen = AuthScreen::new(AuthMode::Register);
        type_str(&mut screen, "Rooster");
        screen.focus_next();
        type_str(&mut screen, "r@x");
        screen.handle_backspace();
        assert_eq!(screen.name, "Rooster");
        assert_eq!(screen.email, "r@");
    }

    #[test]
    fn test_validation_messages() {
        let mut screen = AuthScreen::new(AuthMode::Register);
        assert_eq!(screen.validate(), Err("Name is required".to_string()));

        screen.name = "Ace".to_string();
        screen.email = "ace".to_string();
        screen.password = "pw".to_string();
        assert_eq!(screen.validate(), Err("Email must contain @".to_string()));

        screen.email = "ace@sky".to_string();
        assert!(screen.validate().is_ok());
    }

    #[test]
    fn test_submit_register_trims() {
        let mut screen = AuthScreen::new(AuthMode::Register);
        screen.name = "  Ace ".to_string();
        screen.email = " ace@sky ".to_string();
        screen.password = " pw ".to_string();
        assert_eq!(
            screen.submit(),
            Some(AuthRequest::Register {
                name: "Ace".to_string(),
                email: "ace@sky".to_string(),
                password: " pw ".to_string(),
            })
        );
    }

    #[test]
    fn test_failed_submit_sets_error() {
        let mut screen = AuthScreen::new(AuthMode::Login);
        assert!(screen.submit().is_none());
        assert_eq!(screen.validation_error.as_deref(), Some("Email is required"));
        screen.handle_char_input('a');
        assert!(screen.validation_error.is_none());
    }
}
