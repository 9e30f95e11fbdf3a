//! UI rendering for the game screen.

use crate::game::{FlappyGame, GameRunner, Phase};
use crate::session::UserProfile;
use crate::ui::game_common::{render_panel, render_status_bar};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SKY: Color = Color::Rgb(112, 197, 206);
const GRASS: Color = Color::Rgb(84, 168, 55);
const PIPE: Color = Color::Rgb(100, 170, 40);
const BIRD: Color = Color::Rgb(249, 226, 90);
const DIRT: Color = Color::Rgb(210, 185, 110);

/// What occupies one cell of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Ground,
    Pipe,
    Bird,
}

/// Render the game screen and return the play surface it was drawn in.
///
/// `unsaved` adds a notice that the profile only lives in memory.
pub fn render_flappy(
    frame: &mut Frame,
    area: Rect,
    runner: &GameRunner,
    user: &UserProfile,
    unsaved: bool,
) -> Rect {
    let game = runner.game();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if unsaved { 3 } else { 2 }), // Header
            Constraint::Min(6),    // Play area
            Constraint::Length(2), // Status bar
        ])
        .split(inner);

    render_header(frame, chunks[0], game, user, unsaved);
    let play = fit_play_area(chunks[1], game);
    render_play_area(frame, play, game);
    render_status_bar_content(frame, chunks[2], game);

    match game.phase {
        Phase::Idle => render_panel(
            frame,
            play,
            "Flappy Bird",
            Color::Yellow,
            vec![
                Line::from("Click or press Space to start"),
                Line::from(Span::styled(
                    "Tap to fly, avoid the pipes!",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        ),
        Phase::Over => {
            let mut body = vec![
                Line::from(format!("Score: {}", game.score)),
                Line::from(format!("High Score: {}", user.high_score)),
            ];
            if runner.is_new_high_score() {
                body.push(Line::from(Span::styled(
                    "New high score!",
                    Style::default().fg(Color::Yellow),
                )));
            }
            body.push(Line::from(""));
            body.push(Line::from(Span::styled(
                "[Enter] Play Again",
                Style::default().fg(Color::Green),
            )));
            render_panel(frame, play, "Game Over", Color::Red, body);
        }
        Phase::Running => {}
    }

    play
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    game: &FlappyGame,
    user: &UserProfile,
    unsaved: bool,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    frame.render_widget(Paragraph::new(welcome_lines(user, unsaved)), halves[0]);

    let scores = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("High Score: {}", user.high_score),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Current: {}", game.score)),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(scores, halves[1]);
}

fn welcome_lines(user: &UserProfile, unsaved: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Flappy Bird",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Welcome, {}!", user.name)),
    ];
    if unsaved {
        lines.push(Line::from(Span::styled(
            "Profile not saved: storage unavailable",
            Style::default().fg(Color::Red),
        )));
    }
    lines
}

/// Largest area with the playfield's proportions, centered horizontally.
/// Terminal cells are about twice as tall as wide.
fn fit_play_area(area: Rect, game: &FlappyGame) -> Rect {
    let cfg = &game.config;
    let ideal_width = (area.height as f64 * cfg.width / cfg.height * 2.0).round() as u16;
    let width = ideal_width.clamp(1, area.width.max(1));
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        width,
        ..area
    }
}

/// Classify the cell at (`col`, `row`) of a `cols` x `rows` grid laid over
/// the playfield. Each cell is sampled at its center.
pub fn cell_at(game: &FlappyGame, col: u16, row: u16, cols: u16, rows: u16) -> Cell {
    let cfg = &game.config;
    let x = (col as f64 + 0.5) * cfg.width / cols.max(1) as f64;
    let y = (row as f64 + 0.5) * cfg.height / rows.max(1) as f64;

    if y >= cfg.ground_y() {
        return Cell::Ground;
    }

    let bird = &game.bird;
    if x >= cfg.bird_x
        && x < cfg.bird_x + cfg.bird_width
        && y >= bird.y
        && y < bird.y + cfg.bird_height
    {
        return Cell::Bird;
    }

    let in_pipe = game.pipes.iter().any(|pipe| {
        x >= pipe.x
            && x < pipe.x + cfg.pipe_width
            && (y < pipe.top_height || y >= pipe.gap_bottom(cfg))
    });
    if in_pipe {
        Cell::Pipe
    } else {
        Cell::Sky
    }
}

/// Bird glyph by tilt.
fn bird_glyph(rotation: f64) -> &'static str {
    if rotation < -10.0 {
        "▲"
    } else if rotation > 30.0 {
        "▼"
    } else {
        "►"
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let glyph = bird_glyph(game.bird.rotation);
    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let spans: Vec<Span> = (0..area.width)
                .map(|col| match cell_at(game, col, row, area.width, area.height) {
                    Cell::Sky => Span::styled(" ", Style::default().bg(SKY)),
                    Cell::Ground => Span::styled("▒", Style::default().fg(GRASS).bg(DIRT)),
                    Cell::Pipe => Span::styled("█", Style::default().fg(PIPE)),
                    Cell::Bird => Span::styled(
                        glyph,
                        Style::default()
                            .fg(BIRD)
                            .bg(SKY)
                            .add_modifier(Modifier::BOLD),
                    ),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    match game.phase {
        Phase::Idle => render_status_bar(
            frame,
            area,
            "Click or press Space to jump",
            Color::Yellow,
            &[("[Space/Click]", "Start"), ("[L]", "Logout"), ("[Q]", "Quit")],
        ),
        Phase::Running => render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.score),
            Color::Green,
            &[("[Space/Click]", "Flap"), ("[L]", "Logout"), ("[Q]", "Quit")],
        ),
        Phase::Over => render_status_bar(
            frame,
            area,
            "Game Over",
            Color::Red,
            &[("[Enter/R]", "Play Again"), ("[L]", "Logout"), ("[Q]", "Quit")],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Pipe;

    #[test]
    fn test_cells_on_default_layout() {
        // 40x60 grid: one cell = 10x10 logical pixels.
        let mut game = FlappyGame::default();
        game.pipes.push(Pipe::new(200.0, 150.0));

        // Bird at x 60..120, y 250..295.
        assert_eq!(cell_at(&game, 6, 25, 40, 60), Cell::Bird);
        assert_eq!(cell_at(&game, 12, 25, 40, 60), Cell::Sky);
        // Pipe top segment and gap.
        assert_eq!(cell_at(&game, 20, 5, 40, 60), Cell::Pipe);
        assert_eq!(cell_at(&game, 20, 20, 40, 60), Cell::Sky);
        // Bottom segment starts at 350, ground at 520.
        assert_eq!(cell_at(&game, 20, 40, 40, 60), Cell::Pipe);
        assert_eq!(cell_at(&game, 20, 55, 40, 60), Cell::Ground);
    }

    #[test]
    fn test_unsaved_notice_in_header() {
        let user = UserProfile::new("ace", "ace@sky");
        assert_eq!(welcome_lines(&user, false).len(), 2);

        let lines = welcome_lines(&user, true);
        assert_eq!(lines.len(), 3);
        let text = |line: &Line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>();
        assert_eq!(text(&lines[1]), "Welcome, ace!");
        assert!(text(&lines[2]).contains("not saved"));
    }

    #[test]
    fn test_bird_glyph() {
        assert_eq!(bird_glyph(-30.0), "▲");
        assert_eq!(bird_glyph(0.0), "►");
        assert_eq!(bird_glyph(90.0), "▼");
    }
}
