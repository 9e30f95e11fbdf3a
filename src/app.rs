//! Screen routing and event dispatch.
//!
//! The app owns the session store and, while the game screen is showing, a
//! game runner. It forwards input to whichever screen is active and
//! redirects between screens as the session changes: the game screen needs
//! a signed-in user, and a signed-in user skips the home screen.

use crate::config::AppConfig;
use crate::game::{GameConfig, GameRunner, Phase};
use crate::input::{
    process_auth_input, process_game_input, process_home_input, AppInput, AuthResult, GameAction,
    HomeResult,
};
use crate::session::{FileStorage, PendingAuth, SessionStore};
use crate::ui::auth_screen::{AuthMode, AuthScreen};
use crate::ui::home_screen::HomeScreen;
use crate::utils::persistence;
use rand::Rng;
use ratatui::layout::Rect;
use std::cell::Cell;
use std::time::Duration;

/// Poll timeout when no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Login,
    Register,
    Game,
}

pub struct App {
    pub screen: Screen,
    pub session: SessionStore,
    pub home: HomeScreen,
    pub auth: AuthScreen,
    runner: Option<GameRunner>,
    pending: Option<PendingAuth>,
    login_latency: Duration,
    game_config: GameConfig,
    /// Play surface from the last draw; clicks outside it are ignored.
    play_area: Cell<Rect>,
    should_quit: bool,
}

impl App {
    pub fn new(session: SessionStore, login_latency: Duration, game_config: GameConfig) -> Self {
        Self {
            screen: Screen::Home,
            session,
            home: HomeScreen::new(),
            auth: AuthScreen::new(AuthMode::Login),
            runner: None,
            pending: None,
            login_latency,
            game_config,
            play_area: Cell::new(Rect::default()),
            should_quit: false,
        }
    }

    pub fn from_config(session: SessionStore, config: &AppConfig) -> Self {
        Self::new(session, config.login_latency(), GameConfig::default())
    }

    /// Open the profile file under `config.data_dir` and restore the session.
    ///
    /// An unusable data directory is only a warning; the session store then
    /// falls back to memory when it first touches the file.
    pub fn open(config: &AppConfig) -> Self {
        if let Err(err) = persistence::ensure_dir(&config.data_dir) {
            tracing::warn!(
                error = %err,
                data_dir = %config.data_dir.display(),
                "Data directory unavailable"
            );
        }
        let session = SessionStore::new(FileStorage::new(config.profile_path()));
        let mut app = Self::from_config(session, config);
        app.start();
        app
    }

    /// Restore the saved session and pick the first screen.
    pub fn start(&mut self) {
        self.session.restore();
        self.route();
    }

    pub fn runner(&self) -> Option<&GameRunner> {
        self.runner.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Remember where the play surface was drawn. Called while rendering.
    pub fn set_play_area(&self, area: Rect) {
        self.play_area.set(area);
    }

    pub fn play_area(&self) -> Rect {
        self.play_area.get()
    }

    /// How long the main loop may block waiting for input.
    pub fn poll_timeout(&self) -> Duration {
        self.runner
            .as_ref()
            .and_then(|r| r.until_next_tick())
            .map_or(IDLE_POLL, |d| d.min(IDLE_POLL))
    }

    pub fn handle_input(&mut self, input: AppInput) {
        // Interaction is disabled while a sign-in is in flight.
        if self.pending.is_some() {
            return;
        }

        match self.screen {
            Screen::Home => match process_home_input(&mut self.home, input) {
                HomeResult::Continue => {}
                HomeResult::GoToLogin => self.open_form(AuthMode::Login),
                HomeResult::GoToRegister => self.open_form(AuthMode::Register),
                HomeResult::Quit => self.should_quit = true,
            },
            Screen::Login | Screen::Register => {
                match process_auth_input(&mut self.auth, input) {
                    AuthResult::Continue => {}
                    AuthResult::Submit(request) => {
                        self.pending = Some(PendingAuth::start(
                            request,
                            self.login_latency,
                            &mut self.session,
                        ));
                    }
                    AuthResult::Cancelled => self.screen = Screen::Home,
                }
            }
            Screen::Game => self.handle_game_input(input),
        }
        self.route();
    }

    fn handle_game_input(&mut self, input: AppInput) {
        let Some(runner) = self.runner.as_mut() else {
            return;
        };
        let game_over = runner.phase() == Phase::Over;

        match process_game_input(input, game_over, self.play_area.get()) {
            GameAction::Jump => {
                runner.on_jump();
            }
            GameAction::Restart => {
                runner.on_restart();
            }
            GameAction::Logout => self.logout(),
            GameAction::Quit => self.should_quit = true,
            GameAction::None => {}
        }
    }

    /// Advance pending sign-in and the simulation by `elapsed`.
    pub fn update<R: Rng>(&mut self, elapsed: Duration, rng: &mut R) {
        if let Some(pending) = self.pending.as_mut() {
            if pending.poll(elapsed, &mut self.session).is_some() {
                self.pending = None;
                self.auth = AuthScreen::new(self.auth.mode);
            }
        }

        if let Some(runner) = self.runner.as_mut() {
            runner.advance(elapsed, rng, &mut self.session);
        }

        self.route();
    }

    pub fn logout(&mut self) {
        if let Some(mut runner) = self.runner.take() {
            runner.teardown();
        }
        self.session.logout();
        self.route();
    }

    fn open_form(&mut self, mode: AuthMode) {
        self.auth = AuthScreen::new(mode);
        self.screen = match mode {
            AuthMode::Login => Screen::Login,
            AuthMode::Register => Screen::Register,
        };
    }

    /// Redirect based on the session. Nothing moves while it is loading.
    fn route(&mut self) {
        if self.session.is_loading() {
            return;
        }

        let signed_in = self.session.is_authenticated();
        match (self.screen, signed_in) {
            (Screen::Game, false) => {
                if let Some(mut runner) = self.runner.take() {
                    runner.teardown();
                }
                self.play_area.set(Rect::default());
                self.screen = Screen::Home;
            }
            (Screen::Home | Screen::Login | Screen::Register, true) => {
                self.runner = Some(GameRunner::new(self.game_config));
                self.screen = Screen::Game;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, ScoreSink, UserProfile};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn app_with(storage: MemoryStorage, latency_ms: u64) -> App {
        let mut app = App::new(
            SessionStore::new(storage),
            Duration::from_millis(latency_ms),
            GameConfig::default(),
        );
        app.start();
        app
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_input(AppInput::Char(c));
        }
    }

    #[test]
    fn test_anonymous_start_shows_home() {
        let app = app_with(MemoryStorage::new(), 0);
        assert_eq!(app.screen, Screen::Home);
        assert!(app.runner().is_none());
    }

    #[test]
    fn test_saved_session_goes_straight_to_game() {
        let mut storage = MemoryStorage::new();
        crate::session::ProfileStorage::save(&mut storage, &UserProfile::new("ace", "ace@sky"))
            .unwrap();
        let app = app_with(storage, 0);
        assert_eq!(app.screen, Screen::Game);
        assert_eq!(app.runner().map(|r| r.phase()), Some(Phase::Idle));
    }

    #[test]
    fn test_login_flow_with_latency() {
        let mut app = app_with(MemoryStorage::new(), 500);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        app.handle_input(AppInput::Enter);
        assert_eq!(app.screen, Screen::Login);

        type_str(&mut app, "jester@topgun.mil");
        app.handle_input(AppInput::Next);
        type_str(&mut app, "pw");
        app.handle_input(AppInput::Enter);
        assert!(app.is_pending());
        assert!(app.session.is_loading());

        // Input is ignored while pending.
        app.handle_input(AppInput::Esc);
        assert_eq!(app.screen, Screen::Login);

        app.update(Duration::from_millis(499), &mut rng);
        assert_eq!(app.screen, Screen::Login);

        app.update(Duration::from_millis(1), &mut rng);
        assert!(!app.is_pending());
        assert_eq!(app.screen, Screen::Game);
        assert_eq!(app.session.user().map(|u| u.name.as_str()), Some("jester"));
    }

    #[test]
    fn test_game_over_records_high_score() {
        let mut app = app_with(MemoryStorage::new(), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        app.session.login("a@b", "");
        app.update(Duration::ZERO, &mut rng);
        assert_eq!(app.screen, Screen::Game);

        app.handle_input(AppInput::Char(' '));
        {
            let runner = app.runner.as_mut().unwrap();
            runner.game_mut().score = 6;
            runner.game_mut().bird.y = 474.0;
            runner.game_mut().bird.velocity = 2.0;
        }
        app.update(Duration::from_millis(20), &mut rng);

        assert_eq!(app.runner().unwrap().phase(), Phase::Over);
        assert_eq!(app.session.high_score(), 6);
        assert!(!app.session.record_score_if_higher(6));
    }

    #[test]
    fn test_logout_returns_home_and_clears_record() {
        let mut app = app_with(MemoryStorage::new(), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        app.session.login("a@b", "");
        app.update(Duration::ZERO, &mut rng);
        app.handle_input(AppInput::Char(' '));

        app.handle_input(AppInput::Char('l'));
        assert_eq!(app.screen, Screen::Home);
        assert!(app.runner().is_none());
        assert!(!app.session.is_authenticated());
    }

    #[test]
    fn test_game_screen_without_session_redirects() {
        let mut app = app_with(MemoryStorage::new(), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        app.screen = Screen::Game;
        app.update(Duration::ZERO, &mut rng);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_click_starts_run_only_on_play_surface() {
        let mut app = app_with(MemoryStorage::new(), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        app.session.login("a@b", "");
        app.update(Duration::ZERO, &mut rng);
        app.set_play_area(Rect::new(20, 4, 26, 20));

        // Outer border of the game screen.
        app.handle_input(AppInput::Click { column: 0, row: 0 });
        assert_eq!(app.runner().map(|r| r.phase()), Some(Phase::Idle));

        app.handle_input(AppInput::Click { column: 30, row: 10 });
        assert_eq!(app.runner().map(|r| r.phase()), Some(Phase::Running));
    }

    #[test]
    fn test_leaving_game_forgets_play_area() {
        let mut app = app_with(MemoryStorage::new(), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        app.session.login("a@b", "");
        app.update(Duration::ZERO, &mut rng);
        app.set_play_area(Rect::new(20, 4, 26, 20));

        app.logout();
        assert_eq!(app.play_area(), Rect::default());
    }

    #[test]
    fn test_quit() {
        let mut app = app_with(MemoryStorage::new(), 0);
        app.handle_input(AppInput::Char('q'));
        assert!(app.should_quit());
    }
}
