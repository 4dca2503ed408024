use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cogex_core::{Color, resolve_color};
use cogex_experiment::{
    ResponseLogConfig, ResumePoint, Subject, continue_log_auto, next_free_filename,
    subject_index_used,
};
use cogex_timing::{TimeShuffle, time_shuffle};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde_json::{Value, json};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cogex", about = "Helpers for cogex experiment data folders")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report whether a response log is absent, finished or should resume.
    Resume(ResumeArgs),
    /// Print the next free `<symbol>_NN` file stem in a data directory.
    NextFile {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long)]
        symbol: String,
    },
    /// Check whether a subject number is already taken.
    CheckSubject {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        index: u32,
    },
    /// Generate a balanced, shuffled list of timing values.
    TimeShuffle(TimeShuffleArgs),
    /// Resolve a color name such as `seaborn_green`.
    Color { name: String },
}

#[derive(Args, Debug)]
struct ResumeArgs {
    #[arg(long)]
    dir: PathBuf,
    #[arg(long)]
    file: String,
    /// JSON file overriding the integer column list.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TimeShuffleArgs {
    #[arg(long, default_value_t = 1.5)]
    start: f64,
    #[arg(long, default_value_t = 5.0)]
    end: f64,
    #[arg(long, default_value_t = 0.05)]
    every: f64,
    #[arg(long, default_value_t = 6)]
    times: usize,
    #[arg(long)]
    no_shuffle: bool,
    /// Seed for a reproducible order.
    #[arg(long)]
    seed: Option<u64>,
}

pub struct App {
    cli: Cli,
}

impl App {
    pub fn new() -> Result<Self> {
        let cli = Cli::parse();
        init_tracing(cli.verbose);
        Ok(Self { cli })
    }

    pub fn run(self) -> Result<()> {
        let output = execute(&self.cli.command)?;
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn execute(command: &Command) -> Result<Value> {
    debug!(?command, "executing");
    match command {
        Command::Resume(args) => resume(args),
        Command::NextFile { dir, symbol } => {
            let free = next_free_filename(dir, symbol)
                .with_context(|| format!("listing {}", dir.display()))?;
            Ok(serde_json::to_value(free)?)
        }
        Command::CheckSubject { dir, symbol, index } => {
            let subject = Subject {
                symbol: symbol.clone(),
                index: *index,
            };
            let used = subject_index_used(dir, &subject)
                .with_context(|| format!("listing {}", dir.display()))?;
            Ok(json!({ "used": used }))
        }
        Command::TimeShuffle(args) => {
            let plan = TimeShuffle {
                start: args.start,
                end: args.end,
                every: args.every,
                times: args.times,
                shuffle: !args.no_shuffle,
            };
            let mut rng: Box<dyn RngCore> = match args.seed {
                Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
                None => Box::new(rand::rng()),
            };
            Ok(json!(time_shuffle(&plan, rng.as_mut())?))
        }
        Command::Color { name } => {
            let color = resolve_color(Color::Named(name.clone()))?;
            Ok(serde_json::to_value(color)?)
        }
    }
}

fn resume(args: &ResumeArgs) -> Result<Value> {
    let config = match &args.config {
        Some(path) => ResponseLogConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ResponseLogConfig::default(),
    };
    let point = continue_log_auto(&args.dir, &args.file, &config)
        .with_context(|| format!("checking {}", args.dir.join(&args.file).display()))?;
    Ok(match &point {
        ResumePoint::Resume { table, row } => json!({
            "status": point.status(),
            "row": row,
            "rows": table.n_rows(),
        }),
        _ => json!({ "status": point.status() }),
    })
}
