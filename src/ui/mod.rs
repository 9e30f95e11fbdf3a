pub mod auth_screen;
pub mod flappy_scene;
pub mod game_common;
pub mod home_screen;
pub mod throbber;

use crate::app::{App, Screen};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw whichever screen the app is on.
pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.size();

    match app.screen {
        Screen::Home => app.home.draw(frame, size),
        Screen::Login | Screen::Register => app.auth.draw(frame, size, app.is_pending()),
        Screen::Game => match (app.runner(), app.session.user()) {
            (Some(runner), Some(user)) => {
                let unsaved = app.session.is_in_memory_only();
                let play = flappy_scene::render_flappy(frame, size, runner, user, unsaved);
                app.set_play_area(play);
            }
            _ => draw_loading(frame),
        },
    }
}

/// Placeholder shown while the session is still being resolved.
fn draw_loading(frame: &mut Frame) {
    let size = frame.size();
    let text = format!("{} Loading...", throbber::spinner_char());
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, game_common::centered_rect(size, 30, 3));
}
