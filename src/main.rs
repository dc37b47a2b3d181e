extern crate clap;
extern crate crossterm;
extern crate flexi_logger;
extern crate log;
extern crate ratatui;

mod app_state;
mod input;
mod report;
mod selection;
mod session;
mod telemetry;
mod ui;
mod utils;

use app_state::AppState;
use clap::{value_parser, Arg, ArgAction, Command};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use flexi_logger::{FileSpec, Logger, WriteMode};
use input::{handle_key, KeyAction};
use log::{error, info};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use selection::Tab;
use session::{Session, TokenSession};
use std::error::Error;
use std::io::stdout;
use std::time::{Duration, Instant};
use telemetry::client::{HttpService, SystemStateService};
use telemetry::poller::Poller;

struct Config {
    url: String,
    interval: Duration,
    timeout: Duration,
    initial_tab: Tab,
    token: Option<String>,
    once: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let matches = Command::new("monwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Polls a remote endpoint for temperature and pressure readings")
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("System state endpoint")
                .default_value("http://localhost:8080/system/state"),
        )
        .arg(
            Arg::new("watch")
                .short('w')
                .long("watch")
                .value_name("MILLISECONDS")
                .help("Delay between polls in milliseconds")
                .value_parser(value_parser!(u64))
                .default_value("2000"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout-ms")
                .value_name("MILLISECONDS")
                .help("Request timeout in milliseconds")
                .value_parser(value_parser!(u64))
                .default_value("10000"),
        )
        .arg(
            Arg::new("tab")
                .short('t')
                .long("tab")
                .value_name("TAB")
                .help("Tab shown at startup")
                .value_parser(["temperature", "pressure"])
                .default_value("temperature"),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .value_name("TOKEN")
                .help("Bearer token sent with every request"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level written to the log file")
                .default_value("info"),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Fetch a single snapshot, print it and exit")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Both lookups have defaults, so they are always present.
    let watch_ms = matches.get_one::<u64>("watch").copied().unwrap_or(2000);
    let timeout_ms = matches.get_one::<u64>("timeout").copied().unwrap_or(10_000);
    let config = Config {
        url: matches
            .get_one::<String>("url")
            .cloned()
            .unwrap_or_default(),
        interval: Duration::from_millis(watch_ms),
        timeout: Duration::from_millis(timeout_ms),
        initial_tab: match matches.get_one::<String>("tab").map(String::as_str) {
            Some("pressure") => Tab::Pressure,
            _ => Tab::Temperature,
        },
        token: matches.get_one::<String>("token").cloned(),
        once: matches.get_flag("once"),
    };
    let log_level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("info");

    let _logger = Logger::try_with_str(log_level)?
        .log_to_file(FileSpec::default())
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;
    info!("Starting monwatch against {}", config.url);

    let mut session = TokenSession::new(config.token.clone());
    let service = HttpService::new(
        config.url.clone(),
        session.token().map(str::to_string),
        config.timeout,
    )?;

    if config.once {
        let state = service.get_system_state()?;
        print!("{}", report::render_report(&state));
        return Ok(());
    }

    let poller = Poller::spawn(service, config.interval)?;
    let mut app_state = AppState::new(config.initial_tab);

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    enable_raw_mode()?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app_state, &poller);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result {
        Ok(KeyAction::Logout) => session.logout(),
        Ok(_) => {}
        Err(e) => {
            error!("UI loop failed: {}", e);
            return Err(e);
        }
    }

    info!("Shutting down");
    Ok(())
}

/// Runs the UI loop until the user quits or logs out, returning which.
fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    poller: &Poller,
) -> Result<KeyAction, Box<dyn Error>> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match handle_key(app_state, key) {
                    KeyAction::None => {}
                    action => return Ok(action),
                }
            }
        }

        while let Some(outcome) = poller.try_next() {
            app_state.apply_poll(outcome, Instant::now());
        }
        app_state.tick(Instant::now());

        terminal.draw(|f| ui::render::ui(f, app_state))?;
    }
}
