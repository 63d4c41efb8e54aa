//! drill-tui - terminal playground for UI-testing practice
//!
//! Entry point: parses flags, loads the optional config file, sets up
//! file-based logging (the terminal itself is the UI), and runs the
//! event loop until the user quits with `q` or Ctrl+C.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, size};
use tracing::info;
use tracing_subscriber::EnvFilter;

use drill_tui::state::convert_key_event;
use drill_tui::state::TimerTick;
use drill_tui::{ui, App, AppEvent, Config, DiffRenderer, FrameBuffer};

#[derive(Parser, Debug)]
#[command(
    name = "drill-tui",
    version,
    about = "Terminal playground for UI-testing practice",
    long_about = "One page, three widgets: a validated form, an editable user table \
                  with search, and a stepped counter with auto-increment. Tab moves \
                  focus, Enter/Space activates, q or Ctrl+C quits."
)]
struct Cli {
    /// Color theme (terminal, dracula, nord)
    #[arg(long)]
    theme: Option<String>,

    /// Log file path (defaults to drill-tui.log in the temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Render without the alternate screen buffer (debugging-friendly)
    #[arg(long)]
    no_alt_screen: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    if !cli.quiet {
        init_logging(&config.resolve_log_file(cli.log_file.as_deref()))?;
    }

    let theme = config.resolve_theme(cli.theme.as_deref())?;
    let alt_screen = config.resolve_alt_screen(cli.no_alt_screen);
    info!(theme = %theme.name, alt_screen, "starting");

    let (tick_tx, tick_rx) = channel();
    let mut app = App::new(tick_tx, theme);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut renderer = DiffRenderer::new(alt_screen);
    if let Err(e) = renderer.setup() {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to set up the terminal");
    }

    let result = run_loop(&mut app, &mut renderer, &tick_rx);

    // Restore the terminal even when the loop failed.
    let teardown = renderer.teardown();
    let raw = disable_raw_mode();

    result?;
    teardown.context("Failed to restore the terminal")?;
    raw.context("Failed to disable raw mode")?;
    Ok(())
}

/// Structured logs go to a file; stdout belongs to the renderer.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// The single-threaded dispatch point: draw, drain queued timer ticks,
/// then poll for one input event. Timer clocks run on background threads
/// but their ticks only take effect here.
fn run_loop(app: &mut App, renderer: &mut DiffRenderer, tick_rx: &Receiver<TimerTick>) -> Result<()> {
    let (width, height) = size().context("Failed to query terminal size")?;
    let mut buffer = FrameBuffer::new(width, height);

    loop {
        ui::draw(app, &mut buffer)?;
        renderer.render(&buffer)?;

        loop {
            match tick_rx.try_recv() {
                Ok(tick) => app.handle_event(AppEvent::Tick(tick)),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if event::poll(Duration::from_millis(16)).context("Failed to poll input")? {
            match event::read().context("Failed to read input")? {
                Event::Key(key) => {
                    if let Some(converted) = convert_key_event(key) {
                        app.handle_event(AppEvent::Key(converted));
                    }
                }
                Event::Resize(new_width, new_height) => {
                    buffer.resize(new_width, new_height);
                    renderer.invalidate();
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
