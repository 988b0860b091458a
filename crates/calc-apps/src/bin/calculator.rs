//! Calculator Terminal Front End
//!
//! Line-oriented driver for the calculator app. Each input line is split on
//! whitespace; tokens that name a keypad button (`AC`, `DEL`, ...) are
//! pressed as buttons, anything else is typed key by key.
//!
//! ```text
//! $ echo "12 + 30 =" | calculator
//! 42
//! ```
//!
//! Options:
//! - `--json`           print each view as JSON
//! - `--config <path>`  load a JSON config file
//! - `--help`           generated usage
//!
//! Logging goes to stderr, filtered by `RUST_LOG` (default `warn`).

use calc_apps::keymap::command_for_button;
use calc_apps::{CalculatorApp, CalculatorConfig, CalculatorState, InputEvent, Key};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "calculator")]
#[command(about = "Four-function calculator driven from stdin")]
struct Args {
    /// Print each view as JSON
    #[arg(long)]
    json: bool,

    /// Load a JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

/// Events for one input line.
fn events_for_line(line: &str) -> Vec<InputEvent> {
    let mut events = Vec::new();
    for token in line.split_whitespace() {
        if token.chars().count() > 1 && command_for_button(token).is_some() {
            events.push(InputEvent::button(token));
        } else {
            events.extend(token.chars().map(|c| InputEvent::key(Key::from_char(c))));
        }
    }
    events
}

fn print_state(out: &mut impl Write, state: &CalculatorState, json: bool) -> io::Result<()> {
    if json {
        let line = serde_json::to_string(state).map_err(io::Error::other)?;
        writeln!(out, "{}", line)
    } else {
        if !state.history.is_empty() {
            writeln!(out, "{}", state.history)?;
        }
        writeln!(out, "{}", state.display)
    }
}

fn run(args: Args) -> io::Result<()> {
    let config = match &args.config {
        Some(path) => CalculatorConfig::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default config");
            CalculatorConfig::default()
        }),
        None => CalculatorConfig::default(),
    };
    let mut app = CalculatorApp::new(config);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut state = app.render();
        for event in events_for_line(&line) {
            state = app.handle_input(&event);
        }
        print_state(&mut out, &state, args.json)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "I/O failure");
            ExitCode::FAILURE
        }
    }
}
