use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::config::{parse_args, Command, HELP_TEXT};
use flappy::input::map_event;
use flappy::logging::init_logging;
use flappy::utils::build_info;
use flappy::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

fn main() -> io::Result<()> {
    let command = match parse_args(std::env::args().skip(1), |key| std::env::var(key).ok()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    let config = match command {
        Command::Run(config) => config,
        Command::Version => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Command::Help => {
            println!("{}", HELP_TEXT);
            return Ok(());
        }
    };

    // Neither failure is fatal: logs are dropped and the profile stays in memory.
    if let Some(e) = init_logging(&config) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::info!(data_dir = %config.data_dir.display(), "Starting flappy");

    let mut app = App::open(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Exited with error");
    } else {
        tracing::info!("Exited");
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut last_update = Instant::now();

    loop {
        terminal.draw(|frame| flappy::ui::draw(frame, app))?;

        if event::poll(app.poll_timeout())? {
            if let Some(input) = map_event(&event::read()?) {
                app.handle_input(input);
            }
        }

        let now = Instant::now();
        app.update(now.duration_since(last_update), &mut rng);
        last_update = now;

        if app.should_quit() {
            return Ok(());
        }
    }
}
