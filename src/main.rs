//! Bookworm Solver - CLI
//!
//! Finds the strongest words for a rack of letter tiles, with TUI and CLI modes.

use anyhow::{Result, bail};
use bookworm_solver::{
    commands::{BenchmarkConfig, analyze_word, run_benchmark, run_simple, solve_rack},
    lexicon::DEFAULT_MIN_LENGTH,
    output::{print_analysis_result, print_benchmark_result, print_load_failures, print_solve_result},
    solver::{DEFAULT_LIMIT, DictionaryRegistry, Solver, SolverConfig},
    wordlists::{LoadError, loader::parse_source_arg},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bookworm_solver",
    about = "Find the strongest words you can spell from a rack of letter tiles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Words kept per dictionary
    #[arg(short, long, global = true, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Shortest word worth reporting
    #[arg(short, long, global = true, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Extra dictionary as NAME=PATH or PATH to a JSON word list (repeatable)
    #[arg(short, long = "dictionary", global = true, value_parser = parse_source_arg)]
    dictionaries: Vec<(String, PathBuf)>,

    /// Skip the bundled dictionaries
    #[arg(long, global = true)]
    no_builtin: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one rack per line, no TUI)
    Simple,

    /// Solve a single rack
    Solve {
        /// The rack letters
        letters: String,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Break down the strength of a word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance on random racks
    Benchmark {
        /// Number of random racks to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Letters per rack
        #[arg(short, long, default_value = "16")]
        rack_size: usize,

        /// Seed for reproducible racks
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise verbosity picks the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the dictionary registry from bundled lists and `--dictionary` files
///
/// Dictionaries that fail to load are skipped and returned for reporting.
fn load_registry(cli: &Cli) -> Result<(DictionaryRegistry, Vec<LoadError>)> {
    let (mut registry, mut failures) = if cli.no_builtin {
        (DictionaryRegistry::new(), Vec::new())
    } else {
        DictionaryRegistry::builtin()
    };

    for (name, path) in &cli.dictionaries {
        if let Err(err) = registry.load_file(name, path) {
            failures.push(err);
        }
    }

    if registry.is_empty() {
        print_load_failures(&failures);
        bail!("no dictionaries available");
    }

    info!(dictionaries = registry.len(), failed = failures.len(), "registry ready");
    Ok((registry, failures))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (registry, failures) = load_registry(&cli)?;
    let config = SolverConfig {
        min_length: cli.min_length,
        limit: cli.limit,
    };
    let solver = Solver::with_config(&registry, config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI reports load failures in its messages panel
    if !matches!(command, Commands::Play) {
        print_load_failures(&failures);
    }

    match command {
        Commands::Play => run_play_command(solver, &failures),
        Commands::Simple => run_simple(&solver).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { letters, json } => run_solve_command(&letters, json, &solver),
        Commands::Analyze { word } => run_analyze_command(&word, &registry),
        Commands::Benchmark {
            count,
            rack_size,
            seed,
        } => {
            run_benchmark_command(
                BenchmarkConfig {
                    count,
                    rack_size,
                    seed,
                },
                &solver,
            );
            Ok(())
        }
    }
}

fn run_solve_command(letters: &str, json: bool, solver: &Solver) -> Result<()> {
    let result = solve_rack(letters, solver)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.results)?);
    } else {
        print_solve_result(&result);
    }
    Ok(())
}

fn run_analyze_command(word: &str, registry: &DictionaryRegistry) -> Result<()> {
    let result = analyze_word(word, registry).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(config: BenchmarkConfig, solver: &Solver) {
    match config.seed {
        Some(seed) => println!(
            "Running benchmark on {} random racks of {} letters (seed {seed})...",
            config.count, config.rack_size
        ),
        None => println!(
            "Running benchmark on {} random racks of {} letters...",
            config.count, config.rack_size
        ),
    }

    let result = run_benchmark(solver, config);
    print_benchmark_result(&result);
}

fn run_play_command(solver: Solver, failures: &[LoadError]) -> Result<()> {
    use bookworm_solver::interactive::{App, run_tui};

    let app = App::new(solver, failures);
    run_tui(app)
}
