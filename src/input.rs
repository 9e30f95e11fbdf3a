//! UI-agnostic input handling for the home, sign-in and game screens.
//!
//! Terminal events are first reduced to `AppInput`, then each screen's
//! `process_*` function turns them into a result the app acts on.

use crate::session::AuthRequest;
use crate::ui::auth_screen::AuthScreen;
use crate::ui::home_screen::HomeScreen;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

/// Input events, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    /// Character typed (Space included)
    Char(char),
    Backspace,
    Enter,
    /// Tab or Down
    Next,
    /// Shift-Tab or Up
    Prev,
    Esc,
    /// Primary pointer click at a terminal cell
    Click { column: u16, row: u16 },
}

/// Reduce a terminal event. Key releases, repeats and everything else that
/// has no meaning here map to `None`.
pub fn map_event(event: &Event) -> Option<AppInput> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char(c) => Some(AppInput::Char(c)),
            KeyCode::Backspace => Some(AppInput::Backspace),
            KeyCode::Enter => Some(AppInput::Enter),
            KeyCode::Tab | KeyCode::Down => Some(AppInput::Next),
            KeyCode::BackTab | KeyCode::Up => Some(AppInput::Prev),
            KeyCode::Esc => Some(AppInput::Esc),
            _ => None,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(AppInput::Click {
                column: mouse.column,
                row: mouse.row,
            })
        }
        _ => None,
    }
}

/// Result of processing home screen input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeResult {
    Continue,
    GoToLogin,
    GoToRegister,
    Quit,
}

/// Result of processing sign-in form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Continue,
    /// Form is valid; start the request.
    Submit(AuthRequest),
    /// Back to the home screen
    Cancelled,
}

/// Actions on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start, flap, or (after game over) play again
    Jump,
    Restart,
    Logout,
    Quit,
    None,
}

pub fn process_home_input(screen: &mut HomeScreen, input: AppInput) -> HomeResult {
    match input {
        AppInput::Prev => {
            screen.move_up();
            HomeResult::Continue
        }
        AppInput::Next => {
            screen.move_down();
            HomeResult::Continue
        }
        AppInput::Enter => screen.selected_result(),
        AppInput::Char('l') | AppInput::Char('L') => HomeResult::GoToLogin,
        AppInput::Char('r') | AppInput::Char('R') => HomeResult::GoToRegister,
        AppInput::Char('q') | AppInput::Esc => HomeResult::Quit,
        _ => HomeResult::Continue,
    }
}

pub fn process_auth_input(screen: &mut AuthScreen, input: AppInput) -> AuthResult {
    match input {
        AppInput::Char(c) => {
            screen.handle_char_input(c);
            AuthResult::Continue
        }
        AppInput::Backspace => {
            screen.handle_backspace();
            AuthResult::Continue
        }
        AppInput::Next => {
            screen.focus_next();
            AuthResult::Continue
        }
        AppInput::Prev => {
            screen.focus_prev();
            AuthResult::Continue
        }
        AppInput::Enter => match screen.submit() {
            Some(request) => AuthResult::Submit(request),
            None => AuthResult::Continue,
        },
        AppInput::Esc => AuthResult::Cancelled,
        AppInput::Click { .. } => AuthResult::Continue,
    }
}

/// Map game screen input. `game_over` selects the play-again bindings.
/// Clicks only count inside `play_area`, the last drawn play surface.
pub fn process_game_input(input: AppInput, game_over: bool, play_area: Rect) -> GameAction {
    match input {
        AppInput::Char(' ') => GameAction::Jump,
        AppInput::Click { column, row } if contains(play_area, column, row) => GameAction::Jump,
        AppInput::Enter | AppInput::Char('r') | AppInput::Char('R') if game_over => {
            GameAction::Restart
        }
        AppInput::Char('l') | AppInput::Char('L') => GameAction::Logout,
        AppInput::Char('q') | AppInput::Char('Q') => GameAction::Quit,
        _ => GameAction::None,
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
