mod app;
mod config;
mod listing;
mod logging;
mod network;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::network::fetcher::CampaignFetcher;
use crate::network::http::HttpNetworkingService;
use crate::network::request::CampaignListingRequest;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        tracing::info!(path = %path.display(), "logging started");
    }

    // Validate the endpoint before taking over the terminal
    let service = HttpNetworkingService::new(&cfg.api)?;
    let endpoint = service.resolve(&cfg.api.listing_path)?;
    tracing::info!(url = %endpoint, "campaign endpoint");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, Arc::new(service)).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    service: Arc<HttpNetworkingService>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(1));
    let mut state = AppState::new(&cfg);
    let request = CampaignListingRequest::new(cfg.api.listing_path.clone());
    let mut fetcher = CampaignFetcher::new(service, request, event_tx.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // The listing is the first screen
    let actions = state.show_listing();
    apply_actions(&mut state, &mut fetcher, actions);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);
        apply_actions(&mut state, &mut fetcher, actions);

        if state.should_quit {
            if let Some(session) = fetcher.in_flight() {
                tracing::debug!(session, "abandoning fetch on quit");
            }
            let _ = state.listing.teardown(&mut state.dialogs);
            fetcher.cancel();
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

fn apply_actions(state: &mut AppState, fetcher: &mut CampaignFetcher, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::FetchCampaigns { session } => fetcher.fetch(session),
            Action::CancelFetch => fetcher.cancel(),
            Action::Quit => state.should_quit = true,
        }
    }
}
