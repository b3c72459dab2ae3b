use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

use toast_provider::ToastError;
use toast_provider::app::{App, AppOptions};
use toast_provider::config::{self, ConfigResult};
use toast_provider::toast::ToastConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Demo of a single-toast notification provider
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file to use instead of ~/.config/toast-provider/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Auto-dismiss delay in milliseconds for the shortcut toasts
    #[arg(long, value_name = "MS")]
    timeout: Option<u64>,

    /// Toast shown at startup, as a JSON object (e.g. '{"kind":"info","title":"Hi"}')
    #[arg(long, value_name = "JSON")]
    toast: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();

    // Validate input before touching the terminal
    let initial_toast = args
        .toast
        .as_deref()
        .map(ToastConfig::from_json)
        .transpose()
        .map_err(|e| ToastError::InvalidConfig(e.to_string()))?;

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    let app = App::new(
        &config,
        AppOptions {
            initial_toast,
            default_timeout_ms: args.timeout,
            config_warning: warning,
        },
    )?;

    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    let mut needs_redraw = true;

    loop {
        if app.take_dirty() || needs_redraw {
            terminal.draw(|frame| app.render(frame))?;
            needs_redraw = false;
        }

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            needs_redraw = app.handle_event(&event) || matches!(event, Event::Resize(_, _));
        }

        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::File;

    let path = std::env::temp_dir().join("toast-provider.log");
    let Ok(file) = File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
