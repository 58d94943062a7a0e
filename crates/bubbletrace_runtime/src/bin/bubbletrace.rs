//! Bubbletrace CLI entry point.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use bubbletrace_debug::{PlaybackConfig, SpeedLevel};
use bubbletrace_foundation::Result;
use bubbletrace_runtime::{RenderConfig, Renderer, Repl, Session, export};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "bubbletrace",
    about = "Step through bubble sort one source line at a time",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Comma-separated integers to sort (at most 20 are used)
    #[arg(long, short)]
    input: Option<String>,

    /// Sort 20 random values in 0-100 instead of the given input
    #[arg(long, conflicts_with = "input")]
    random: bool,

    /// Seed for --random and the `random` command
    #[arg(long)]
    seed: Option<u64>,

    /// Auto-play speed, 1 (slowest) to 10 (fastest)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    speed: u8,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Chart height in rows
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u16).range(4..=40))]
    height: u16,

    /// Print every frame and exit instead of starting the REPL
    #[arg(long, short)]
    batch: bool,

    /// Print the trace as JSON and exit
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. `debug` or `bubbletrace_debug=trace` (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr without ANSI so they never mix with frame colors.
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = PlaybackConfig::new().with_speed(SpeedLevel::new(cli.speed));
    let mut session = Session::with_config(config);
    if let Some(seed) = cli.seed {
        session = session.with_seed(seed);
    }

    if let Some(input) = &cli.input {
        session.set_input(input.clone());
    } else if cli.random {
        session.randomize_input();
    }

    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    let renderer = Renderer::new(
        RenderConfig::new()
            .with_height(usize::from(cli.height))
            .with_color(color),
    );

    if cli.json {
        session.generate();
        return export::write_json(session.trace(), &mut stdout.lock());
    }

    if cli.batch {
        return print_all(&mut session, &renderer, &mut stdout.lock());
    }

    let record_now = cli.input.is_some() || cli.random;
    let mut repl = Repl::new()?.with_session(session).with_renderer(renderer);
    if cli.no_banner {
        repl = repl.without_banner();
    }
    if record_now {
        repl.eval("gen")?;
    }

    info!("starting REPL");
    repl.run()
}

/// Writes every frame of the trace, then its summary.
fn print_all(session: &mut Session, renderer: &Renderer, out: &mut dyn Write) -> Result<()> {
    session.generate();
    let total = session.trace().len();

    for index in 0..total {
        let playback = session.goto(isize::try_from(index).unwrap_or(isize::MAX));
        writeln!(out, "{}\n", renderer.frame(playback, total))?;
    }

    if total == 0 {
        writeln!(out, "{}", renderer.frame(session.current(), 0))?;
    } else {
        writeln!(out, "{}", session.trace().summary())?;
    }
    Ok(())
}
