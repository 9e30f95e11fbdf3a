use crate::input::HomeResult;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MENU: [(&str, HomeResult); 2] = [
    ("Login", HomeResult::GoToLogin),
    ("Register", HomeResult::GoToRegister),
];

pub struct HomeScreen {
    pub selected_index: usize,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < MENU.len() {
            self.selected_index += 1;
        }
    }

    pub fn selected_result(&self) -> HomeResult {
        MENU[self.selected_index.min(MENU.len() - 1)].1
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(2), // Tagline
                Constraint::Length(4), // Menu
                Constraint::Length(2), // Hint
                Constraint::Length(7), // How to play
                Constraint::Min(0),    // Filler
                Constraint::Length(1), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Flappy Bird")
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(title, chunks[0]);

        let tagline = Paragraph::new("A terminal remake")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(tagline, chunks[1]);

        let menu: Vec<Line> = MENU
            .iter()
            .enumerate()
            .map(|(i, (label, _))| {
                if i == self.selected_index {
                    Line::from(Span::styled(
                        format!("> {} <", label),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {}  ", label),
                        Style::default().fg(Color::White),
                    ))
                }
            })
            .collect();
        f.render_widget(Paragraph::new(menu).alignment(Alignment::Center), chunks[2]);

        let hint = Paragraph::new("Login or register to play and save your high scores!")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hint, chunks[3]);

        let how_to = vec![
            Line::from(Span::styled(
                "How to Play:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("• Click or press Space to make the bird fly"),
            Line::from("• Navigate through the pipes"),
            Line::from("• Each pipe passed gives you 1 point"),
            Line::from("• Try to beat your high score!"),
        ];
        let how_to = Paragraph::new(how_to)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(how_to, chunks[4]);

        let controls = Paragraph::new("[↑↓] Select  [Enter] Confirm  [L] Login  [R] Register  [Q] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[6]);
    }
}
