//! Strictly Timetravel - headless driver
//!
//! Stands in for a presentation surface: forwards actions to a game
//! session and prints the derived state after each one.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Format};
use serde::Serialize;
use std::io::{BufRead, Write};
use strictly_timetravel::{Action, ActionOutcome, GameSession, GameView, HistoryError};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_filter.as_deref());

    let mut session = GameSession::new("terminal");
    if cli.descending {
        session
            .apply(Action::ToggleSort)
            .context("Failed to set initial sort order")?;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_view(&mut out, cli.format, None, &session)?;

    match cli.actions {
        Some(script) => {
            for line in script.split([';', '\n']) {
                handle_line(&mut out, cli.format, &mut session, line)?;
            }
        }
        None => {
            for line in std::io::stdin().lock().lines() {
                let line = line.context("Failed to read action from stdin")?;
                handle_line(&mut out, cli.format, &mut session, &line)?;
            }
        }
    }

    info!(session_id = session.id(), "Session finished");
    Ok(())
}

fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses one action line and applies it; blank lines are skipped.
fn handle_line(
    out: &mut impl Write,
    format: Format,
    session: &mut GameSession,
    line: &str,
) -> Result<()> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(());
    }
    match line.parse::<Action>() {
        Ok(action) => step(out, format, session, action),
        Err(e) => report(out, e),
    }
}

/// Applies one action and prints the result.
#[instrument(skip(out, session))]
fn step(
    out: &mut impl Write,
    format: Format,
    session: &mut GameSession,
    action: Action,
) -> Result<()> {
    match session.apply(action) {
        Ok(outcome) => print_view(out, format, Some(&outcome), session),
        Err(e) => report(out, e),
    }
}

/// Rejected actions are reported and the session continues; a corrupted
/// history ends it.
fn report(out: &mut impl Write, e: HistoryError) -> Result<()> {
    if e.is_fatal() {
        error!(error = %e, "History corrupted");
        bail!(e)
    }
    writeln!(out, "error: {e}")?;
    Ok(())
}

#[derive(Serialize)]
struct Report<'a> {
    outcome: Option<&'a ActionOutcome>,
    #[serde(flatten)]
    view: GameView,
}

fn print_view(
    out: &mut impl Write,
    format: Format,
    outcome: Option<&ActionOutcome>,
    session: &GameSession,
) -> Result<()> {
    let view = session.view().map_err(fatal)?;

    match format {
        Format::Json => {
            let report = Report { outcome, view };
            serde_json::to_writer(&mut *out, &report).context("Failed to encode state")?;
            writeln!(out)?;
        }
        Format::Text => {
            if let Some(ActionOutcome::Ignored(reason)) = outcome {
                writeln!(out, "(ignored: {reason:?})")?;
            }
            writeln!(out, "{}", view.status_text)?;
            writeln!(out, "{}", view.board.display())?;
            writeln!(out, "{}  [{}]", view.cursor_label, view.sort_toggle_label)?;
            for item in &view.history {
                let marker = if *item.is_current() { '>' } else { ' ' };
                writeln!(out, "{marker} {}. {}", item.move_number(), item.label())?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn fatal(e: HistoryError) -> anyhow::Error {
    error!(error = %e, "History corrupted");
    anyhow::Error::new(e).context("Cannot render session")
}
