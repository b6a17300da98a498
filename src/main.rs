mod app;
mod ballot;
mod config;
mod error;
mod logging;
mod officer;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::*;
use crate::ballot::submission::{spawn_auto_reset, spawn_submission};
use crate::logging::AuditLogger;
use crate::officer::lookup::{spawn_lookup, RosterDirectory, VoterDirectory};
use crate::officer::timer::SessionTimer;
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opt {
    /// Which kiosk to run
    #[clap(value_enum, default_value = "officer")]
    mode: KioskMode,

    /// Config file (defaults to the platform config dir)
    #[clap(long)]
    config: Option<PathBuf>,

    /// Write the effective configuration to the config path and exit
    #[clap(long)]
    write_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();
    let config_path = opt.config.clone().unwrap_or_else(config::default_config_path);
    let cfg = config::load_config(&config_path)?;

    if opt.write_config {
        config::save_config(&cfg, &config_path)?;
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    logging::init_tracing(&cfg.logging)?;
    tracing::info!(mode = ?opt.mode, config = %config_path.display(), "starting pollstation");

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, opt.mode).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "kiosk stopped with an error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    mode: KioskMode,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let directory: Arc<dyn VoterDirectory> = Arc::new(RosterDirectory::new(
        cfg.officer.voters.clone(),
        cfg.officer.lookup_delay(),
    ));
    let mut session_timer = SessionTimer::new(event_tx.clone());
    let mut audit_logger = AuditLogger::new(&cfg.logging);
    let submit_delay = cfg.voting.submit_delay();
    let reset_delay = cfg.voting.reset_delay();

    let mut state = AppState::new(cfg, mode);
    if mode == KioskMode::Officer {
        state
            .officer
            .audit
            .record("Portal initialized - Concurrent operations enabled");
    }

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

    // Housekeeping tick for status message expiry
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Mirror fresh audit entries to disk
        for entry in state.officer.audit.drain_unsynced() {
            audit_logger.log_entry(&entry);
        }

        // Process actions
        for action in actions {
            match action {
                Action::LookupVoter { request_id, nic } => {
                    spawn_lookup(directory.clone(), request_id, nic, event_tx.clone());
                }
                Action::StartSessionTimer { generation } => {
                    session_timer.start(generation);
                }
                Action::StopSessionTimer => {
                    session_timer.stop();
                }
                Action::SubmitVote { generation } => {
                    spawn_submission(generation, submit_delay, event_tx.clone());
                }
                Action::ScheduleReset { generation } => {
                    spawn_auto_reset(generation, reset_delay, event_tx.clone());
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            session_timer.stop();
            tracing::info!("shutting down");
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
