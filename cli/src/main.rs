mod script;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pinchzoom::options::ZoomOptions;
use tracing::info;

use crate::script::{ReplayError, Script};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    ReadScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("replay failed: {0}")]
    Replay(#[from] ReplayError),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "pinchzoom-cli", about = "Replay recorded touch input through the pinch-zoom engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON script and print one JSON line per frame and notification.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(help = "Script file: options, content, container and events")]
    script: PathBuf,

    #[arg(long, env = "PINCHZOOM_FRAME_MS", default_value_t = 16.0)]
    frame_ms: f64,

    #[arg(long, env = "PINCHZOOM_MAX_ZOOM")]
    max_zoom: Option<f64>,

    #[arg(long, env = "PINCHZOOM_MIN_ZOOM")]
    min_zoom: Option<f64>,

    #[arg(long, env = "PINCHZOOM_TAP_ZOOM_FACTOR")]
    tap_zoom_factor: Option<f64>,

    #[arg(long, env = "PINCHZOOM_ANIMATION_DURATION_MS")]
    animation_duration_ms: Option<f64>,

    #[arg(long, env = "PINCHZOOM_LOCK_DRAG_AXIS", default_value_t = false)]
    lock_drag_axis: bool,
}

impl ReplayArgs {
    /// Layer command-line overrides on top of the script's options.
    fn apply(&self, options: &mut ZoomOptions) {
        if let Some(max_zoom) = self.max_zoom {
            options.max_zoom = max_zoom;
        }
        if let Some(min_zoom) = self.min_zoom {
            options.min_zoom = min_zoom;
        }
        if let Some(factor) = self.tap_zoom_factor {
            options.tap_zoom_factor = factor;
        }
        if let Some(duration) = self.animation_duration_ms {
            options.animation_duration_ms = duration;
        }
        if self.lock_drag_axis {
            options.lock_drag_axis = true;
        }
    }
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Replay(args) => run_replay(&args),
    }
}

fn run_replay(args: &ReplayArgs) -> Result<(), CliError> {
    let raw = fs::read_to_string(&args.script)
        .map_err(|source| CliError::ReadScript { path: args.script.clone(), source })?;
    let mut script = Script::from_json(&raw)?;
    args.apply(&mut script.options);
    info!(events = script.events.len(), frame_ms = args.frame_ms, "replaying script");

    let lines = script::replay(&script, args.frame_ms)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        serde_json::to_writer(&mut out, line)?;
        writeln!(out)?;
    }
    info!(lines = lines.len(), "replay finished");
    Ok(())
}
