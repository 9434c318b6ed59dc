use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use smart_alec::adapters::FilePreferenceStore;
use smart_alec::api::ApiClient;
use smart_alec::app::{App, AppMessage};
use smart_alec::cli::{parse_args, run_cli_command, CliCommand};
use smart_alec::config::AppConfig;
use smart_alec::input::CommandRegistry;
use smart_alec::observability::init_logging;
use smart_alec::state::theme::platform_prefers_dark;
use smart_alec::state::{AppContext, ThemeState};
use smart_alec::terminal::{setup_panic_hook, TerminalManager};
use smart_alec::ui;

/// Animation tick, roughly 60 frames per second.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }
    let options = match command {
        CliCommand::RunTui(options) => options,
        _ => return Ok(()),
    };

    color_eyre::install()?;

    let config = options.apply(AppConfig::from_env());
    init_logging(&config);
    tracing::info!(api = %config.api_base_url, "starting smart-alec {}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(FilePreferenceStore::new(config.preferences_path.clone()));
    let theme = ThemeState::init(store, platform_prefers_dark());
    let client = Arc::new(ApiClient::with_reqwest(config.api_base_url.clone()));
    let context = AppContext::new(config, theme);

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(context, client))
}

async fn run(context: AppContext, client: Arc<ApiClient>) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(context, client);
    app.start();

    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore();
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();

    // The loop owns the receiver so it can be polled inside select!.
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(&registry, key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}
