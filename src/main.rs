use seatbook::app::App;
use seatbook::cli::{parse_args, run_cli_command, CliCommand};
use seatbook::config::AppConfig;
use seatbook::hall::Hall;
use seatbook::input::{translate_event, KeybindingConfig};
use seatbook::logging::init_logging;
use seatbook::store::{JsonFileStore, SeatStore};
use seatbook::terminal::{setup_panic_hook, TerminalManager};
use seatbook::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }

    color_eyre::install()?;

    let mut config = AppConfig::from_env();
    if let CliCommand::RunTui {
        data_file: Some(path),
    } = command
    {
        config = config.with_data_file(path);
    }
    config.validate()?;

    if !init_logging(&config.log_file()) {
        eprintln!(
            "Warning: logging disabled, cannot open {}",
            config.log_file().display()
        );
    }
    tracing::info!("Starting seatbook with data file {}", config.data_file.display());

    let store = JsonFileStore::new(config.data_file.clone());
    let (hall, outcome) = Hall::open(config.grid.clone(), config.viewport.clone(), store)?;
    let mut app = App::new(hall, outcome);

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    // One logical actor: events are handled one at a time on this thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));
    term_manager.restore()?;

    if let Some(status) = app.status() {
        eprintln!("{}", status);
    }
    result?;

    let code = app.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

async fn run_app<S: SeatStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    let bindings = KeybindingConfig::new();
    let mut event_stream = EventStream::new();

    while !app.should_quit() {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        match event_stream.next().await {
            Some(Ok(event)) => {
                if let Some(command) = translate_event(&event, &bindings) {
                    app.handle_command(command);
                }
            }
            Some(Err(err)) => {
                let _ = app.quit();
                return Err(err.into());
            }
            None => break,
        }
    }

    // Input closed without a quit key: still leave with a final save.
    if !app.should_quit() {
        let _ = app.quit();
    }
    Ok(())
}
