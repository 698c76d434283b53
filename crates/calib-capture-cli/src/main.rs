//! `calib-capture` command line tool.
//!
//! `rehearse` dry-runs the full dual-arm capture sequence over a target
//! feed with scripted arms; `inspect` reads a sample store back. Real
//! robot drivers integrate through the `Arm` trait in
//! `calib-capture-core` rather than through this binary.

mod gate;
mod script;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use calib_capture_core::{init_with_level, FeedError, SinkError, TargetFeed};
use calib_capture_session::{run_session, SessionError};
use calib_capture_store::SampleStore;

use gate::{AckMode, ConsoleGate};
use script::{RehearsalScript, ScriptError, ScriptedArm};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("failed to load target feed: {0}")]
    Feed(#[from] FeedError),
    #[error("failed to load reference image: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to load rehearsal script: {0}")]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Store(#[from] SinkError),
    #[error("failed to render store contents: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(
    name = "calib-capture",
    about = "Dual-arm pixel-to-robot calibration capture",
    version
)]
struct Cli {
    /// Log at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dry-run the capture sequence with scripted arms.
    Rehearse {
        /// Target feed JSON produced by the marker detection step.
        #[arg(long)]
        targets: PathBuf,
        /// Reference image of the calibration surface.
        #[arg(long)]
        image: PathBuf,
        /// Store file to append record pairs to.
        #[arg(long)]
        store: PathBuf,
        /// Rehearsal script with the pose sequence for each arm.
        #[arg(long)]
        script: PathBuf,
        /// Directory for the per-target overlay previews (defaults to the
        /// store's directory).
        #[arg(long)]
        preview_dir: Option<PathBuf>,
        /// Acknowledgment mode.
        #[arg(long, value_enum, default_value = "enter")]
        ack: AckMode,
    },
    /// Read a store back and report its contents.
    Inspect {
        /// Store file to read.
        store: PathBuf,
        /// Dump the pairs as pretty JSON instead of a summary line.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = init_with_level(level);

    if let Err(err) = run(cli.command) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Rehearse {
            targets,
            image,
            store,
            script,
            preview_dir,
            ack,
        } => rehearse(targets, image, store, script, preview_dir, ack),
        Command::Inspect { store, json } => inspect(store, json),
    }
}

fn rehearse(
    targets_path: PathBuf,
    image_path: PathBuf,
    store_path: PathBuf,
    script_path: PathBuf,
    preview_dir: Option<PathBuf>,
    ack: AckMode,
) -> Result<(), CliError> {
    let feed = TargetFeed::load_json(&targets_path)?;
    let reference = image::open(&image_path)?.to_rgb8();
    let script = RehearsalScript::load_json(&script_path)?;

    let preview_dir = preview_dir.unwrap_or_else(|| {
        store_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    });
    fs::create_dir_all(&preview_dir)?;

    let mut arm1 = ScriptedArm::new("PSM1", script.arm1);
    let mut arm2 = ScriptedArm::new("PSM2", script.arm2);
    let mut gate = ConsoleGate::new(preview_dir, ack);
    let mut store = SampleStore::open(&store_path)?;

    let summary = run_session(
        feed.as_slice(),
        &reference,
        &mut arm1,
        &mut arm2,
        &mut gate,
        &mut store,
    )?;
    info!(
        "rehearsal complete: {} record pairs appended to {}",
        summary.pairs_appended,
        store_path.display()
    );
    Ok(())
}

fn inspect(store_path: PathBuf, json: bool) -> Result<(), CliError> {
    let pairs = SampleStore::read_pairs(&store_path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
    } else {
        println!("{}: {} record pairs", store_path.display(), pairs.len());
    }
    Ok(())
}
