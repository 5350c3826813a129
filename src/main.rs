use pizza_party::app::App;
use pizza_party::cli::{parse_args, run_cli_command};
use pizza_party::logging::init_logging;
use pizza_party::terminal::{setup_panic_hook, TerminalManager};
use pizza_party::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::time::MissedTickBehavior;

fn main() -> Result<()> {
    // Handle CLI flags before any initialization
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(if e.is_usage_error() { 2 } else { 1 });
        }
    };
    let config = run_cli_command(command);

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    // A broken log dir should not keep the app from starting.
    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: {}", e.user_message());
    }

    let runtime = tokio::runtime::Runtime::new()?;

    let mut app = App::with_config(&config);
    let mut term_manager = TerminalManager::new()?;
    let size = term_manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app, config.tick_rate()));

    term_manager.restore()?;
    tracing::info!("Exited after {} ticks", app.tick_count);

    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // Draw only when something changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &app.view_state()))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Event stream error: {}", e);
                        return Err(e.into());
                    }
                    // Stream closed: stdin is gone
                    None => return Ok(()),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
