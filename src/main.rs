mod animation;
mod app;
mod config;
mod contact;
mod effects;
mod logging;
mod ui;

use crate::animation::caret::CaretBlink;
use crate::animation::hero::HeroAnimation;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::contact::{ContactRelay, EmailJsRelay};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::process::{Command as ProcessCommand, Stdio};
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;

    match logging::init(&cfg.logging) {
        Ok(Some(path)) => tracing::info!(log = %path.display(), "folio starting"),
        Ok(None) => {}
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "folio exited with an error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!("folio stopped");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Carries out the side effects that handlers ask for.
struct Runtime {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    relay: Arc<dyn ContactRelay>,
    caret: CaretBlink,
    hero: Option<HeroAnimation>,
}

impl Runtime {
    fn dispatch(&mut self, state: &mut AppState, action: Action) {
        match action {
            Action::MountHero { generation } => {
                match HeroAnimation::mount(
                    generation,
                    &state.config.hero,
                    &self.caret,
                    self.event_tx.clone(),
                ) {
                    // Replacing a previous mount drops and cancels it
                    Ok(hero) => self.hero = Some(hero),
                    Err(e) => {
                        tracing::error!(error = %e, "hero animation not started");
                        state.status_message = Some(format!("Hero animation disabled: {}", e));
                        state.dirty = true;
                    }
                }
            }
            Action::UnmountHero => {
                if let Some(mut hero) = self.hero.take() {
                    hero.unmount();
                }
            }
            Action::SubmitContact(payload) => {
                let relay = Arc::clone(&self.relay);
                let tx = self.event_tx.clone();
                tokio::spawn(async move {
                    let event = match relay.submit(&payload).await {
                        Ok(()) => AppEvent::ContactSent,
                        Err(e) => AppEvent::ContactFailed {
                            error: e.to_string(),
                        },
                    };
                    let _ = tx.send(event);
                });
            }
            Action::OpenLink { url } => {
                if let Err(e) = open_url(&url) {
                    tracing::warn!(%url, error = %e, "failed to open link");
                    state.status_message = Some(format!("Could not open {}: {}", url, e));
                    state.dirty = true;
                }
            }
            Action::Quit => {
                state.should_quit = true;
            }
        }
    }

    fn shutdown(&mut self) {
        if let Some(mut hero) = self.hero.take() {
            hero.unmount();
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let relay = EmailJsRelay::new(&cfg.contact).context("Failed to build contact relay")?;
    if !relay.is_configured() {
        tracing::warn!("contact relay has no credentials; submissions will be rejected");
    }

    let mut state = AppState::new(cfg.clone());
    let size = terminal.size()?;
    state.resize(size.width, size.height);

    let mut runtime = Runtime {
        event_tx: event_tx.clone(),
        relay: Arc::new(relay),
        caret: CaretBlink::new(cfg.ui.caret_period()),
        hero: None,
    };

    // Persist the theme whenever it changes
    let mut theme_rx = state.store.theme.subscribe();
    tokio::spawn(async move {
        while theme_rx.changed().await.is_ok() {
            let theme = *theme_rx.borrow_and_update();
            if let Err(e) = config::save_theme(theme) {
                tracing::warn!(error = %e, "failed to save theme");
            }
        }
    });

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
                Some(Err(e)) => {
                    tracing::error!(error = %e, "terminal input failed");
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    let tick_rate = cfg.ui.tick_rate();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });
    drop(event_tx);

    for action in state.start() {
        runtime.dispatch(&mut state, action);
    }

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            runtime.dispatch(&mut state, action);
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    runtime.shutdown();
    Ok(())
}

fn open_url(url: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut cmd = ProcessCommand::new("open");
        cmd.arg(url);
        cmd
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut cmd = ProcessCommand::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut cmd = ProcessCommand::new("xdg-open");
        cmd.arg(url);
        cmd
    };

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}
