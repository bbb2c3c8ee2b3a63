//! Load value predictor CLI.
//!
//! This binary replays a stream of resolved loads through the Address
//! Prediction Table and reports its accuracy. It performs:
//! 1. **Trace replay:** Read `<pc> <value> [size]` records from a text trace.
//! 2. **Synthetic replay:** Generate a deterministic load stream (constant, stride, ...).
//! 3. **Config dump:** Print the effective configuration as JSON.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dlvp_core::config::{Config, WorkloadKind};
use dlvp_core::sim::{LoadRecord, SyntheticWorkload, trace};
use dlvp_core::stats::STATS_SECTIONS;
use dlvp_core::{AptPredictor, LoadDriver};

#[derive(Parser, Debug)]
#[command(
    name = "dlvp",
    author,
    version,
    about = "Path-history indexed load value predictor",
    long_about = "Replay loads through a 1024-entry Address Prediction Table and report prediction accuracy.\n\nExamples:\n  dlvp run --trace loads.txt\n  dlvp run --workload constant --loads 20000\n  dlvp run --config run.json --stats summary,confidence\n  dlvp config --config run.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a trace file or a synthetic workload.
    Run {
        /// Trace of resolved loads (`<pc> <value> [size]` per line).
        #[arg(short, long, conflicts_with = "workload")]
        trace: Option<PathBuf>,

        /// Synthetic workload (constant, stride, alternating, pointer-chase).
        #[arg(short, long)]
        workload: Option<WorkloadKind>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Load budget (overrides `general.max_loads`).
        #[arg(short = 'n', long)]
        loads: Option<u64>,

        /// Print the report once this many predictions were issued.
        #[arg(long)]
        report_at: Option<u64>,

        /// Comma-separated stats sections (summary, table, confidence); all when omitted.
        #[arg(long, value_delimiter = ',')]
        stats: Vec<String>,

        /// Print the final path history register in binary.
        #[arg(long)]
        show_history: bool,
    },

    /// Print the effective configuration as JSON.
    Config {
        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            trace,
            workload,
            config,
            loads,
            report_at,
            stats,
            show_history,
        } => {
            let mut config = load_config(config.as_deref());
            if let Some(n) = loads {
                config.general.max_loads = n;
            }
            if let Some(kind) = workload {
                config.workload.kind = kind;
            }
            if let Err(e) = config.validate() {
                eprintln!("Error: {e}");
                process::exit(1);
            }
            if let Some(bad) = stats
                .iter()
                .find(|s| !STATS_SECTIONS.contains(&s.as_str()))
            {
                eprintln!(
                    "Error: unknown stats section `{bad}` (expected: {})",
                    STATS_SECTIONS.join(", ")
                );
                process::exit(1);
            }
            cmd_run(&config, trace.as_deref(), report_at, &stats, show_history);
        }
        Commands::Config { config } => {
            let config = load_config(config.as_deref());
            match serde_json::to_string_pretty(&config) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
    }
}

/// Loads the configuration file, or the defaults when none is given.
///
/// Exits with code 1 when the file is unreadable or invalid.
fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    Config::from_file(path).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    })
}

/// Replays the selected load stream and prints the statistics.
fn cmd_run(
    config: &Config,
    trace_path: Option<&Path>,
    report_at: Option<u64>,
    sections: &[String],
    show_history: bool,
) {
    let predictor = AptPredictor::new(&config.predictor);
    let mut driver = LoadDriver::new(predictor, &config.general);
    if let Some(limit) = report_at {
        driver = driver.with_report_limit(limit);
    }

    println!(
        "Configuration: max_loads={} hit_threshold={} access_size={}",
        config.general.max_loads,
        config.predictor.hit_threshold,
        config.predictor.default_access_size
    );

    let summary = if let Some(path) = trace_path {
        let records: Vec<LoadRecord> = trace::load_trace(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        });
        println!("[*] Trace replay: {} ({} loads)", path.display(), records.len());
        driver.run(records)
    } else {
        println!("[*] Synthetic workload: {}", config.workload.kind);
        driver.run(SyntheticWorkload::new(&config.workload))
    };
    info!(
        loads = summary.loads,
        predictions = summary.predictions,
        correct = summary.correct,
        "replay finished"
    );

    let predictor = driver.into_predictor();
    predictor.stats().print_sections(sections);
    println!(
        "apt_occupancy            {} / {}",
        predictor.occupancy(),
        predictor.table_size()
    );
    if show_history {
        println!("path_history             {:b}", predictor.path_history());
    }
}
