use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use sieve_io::{ConsoleReporter, DatasetReader, Format};
use sieve_nn::{Dataset, FeatureSubset, ScoredSubset, default_rate, score, z_normalize};
use sieve_search::{Direction, LogReporter, SearchConfig, SearchResult};

#[derive(Parser)]
#[command(name = "sieve")]
#[command(about = "Greedy feature-subset search scored by leave-one-out nearest-neighbor accuracy")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Number of threads for parallel evaluation (defaults to all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,
}

/// How to load the dataset.
#[derive(Args, Debug, Clone)]
struct DataArgs {
    /// Path to the dataset file (class label first on every row)
    #[arg(long)]
    data: PathBuf,

    /// File layout: "whitespace" or "csv"
    #[arg(long, default_value = "whitespace")]
    format: String,

    /// Skip the first row of a CSV file
    #[arg(long, default_value_t = false)]
    has_headers: bool,

    /// Z-normalize every feature column before searching
    #[arg(long, default_value_t = false)]
    normalize: bool,
}

/// How to run the search.
#[derive(Args, Debug, Clone)]
struct SearchArgs {
    /// Score each round's candidates in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Stop after this many seconds and report the best subset so far
    #[arg(long)]
    deadline_secs: Option<f64>,

    /// Print a JSON summary on stdout instead of the text trace
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Forward selection: start empty, add the best feature each round
    Forward {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Backward elimination: start with every feature, remove one each round
    Backward {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Score a single feature subset
    Evaluate {
        #[command(flatten)]
        data: DataArgs,

        /// Comma-separated one-based feature numbers, e.g. "1,3" (empty for none)
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        features: Vec<usize>,

        /// Print a JSON summary on stdout
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct SubsetOutput {
    features: Vec<usize>,
    accuracy: f64,
}

impl From<&ScoredSubset> for SubsetOutput {
    fn from(scored: &ScoredSubset) -> Self {
        Self {
            features: scored.subset.iter().map(|i| i + 1).collect(),
            accuracy: scored.accuracy.value(),
        }
    }
}

#[derive(Serialize)]
struct SearchOutput {
    direction: &'static str,
    n_instances: usize,
    n_features: usize,
    default_rate: f64,
    best: SubsetOutput,
    best_round: usize,
    warned_at: Option<usize>,
    completed: bool,
    n_evaluations: usize,
    trace: Vec<SubsetOutput>,
}

#[derive(Serialize)]
struct EvaluateOutput {
    n_instances: usize,
    n_features: usize,
    default_rate: f64,
    subset: SubsetOutput,
}

fn parse_format(s: &str, has_headers: bool) -> Result<Format> {
    match s {
        "whitespace" => Ok(Format::Whitespace),
        "csv" => Ok(Format::Csv { has_headers }),
        other => anyhow::bail!("unknown format: {other} (expected whitespace or csv)"),
    }
}

fn load_dataset(args: &DataArgs) -> Result<Dataset> {
    let format = parse_format(&args.format, args.has_headers)?;
    let dataset = DatasetReader::new(&args.data)
        .with_format(format)
        .read()
        .with_context(|| format!("failed to read dataset {}", args.data.display()))?;

    if args.normalize {
        let normalized = z_normalize(&dataset).context("z-normalization failed")?;
        info!(n_features = normalized.n_features(), "z-normalized features");
        return Ok(normalized);
    }
    Ok(dataset)
}

/// Convert one-based feature numbers as printed back to column indices.
fn parse_features(features: &[usize]) -> Result<FeatureSubset> {
    let indices = features
        .iter()
        .map(|&f| {
            f.checked_sub(1)
                .with_context(|| format!("feature numbers start at 1, got {f}"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(FeatureSubset::new(indices))
}

fn run_search(direction: Direction, data: &DataArgs, args: &SearchArgs) -> Result<()> {
    let dataset = load_dataset(data)?;

    let mut config = SearchConfig::new(direction).with_parallel(args.parallel);
    if let Some(secs) = args.deadline_secs {
        let deadline = Duration::try_from_secs_f64(secs)
            .with_context(|| format!("invalid --deadline-secs {secs}"))?;
        config = config.with_deadline(deadline);
    }

    if args.json {
        let result = config
            .run(&dataset, &mut LogReporter)
            .context("search failed")?;
        let output = search_output(&dataset, &result);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let mut reporter = ConsoleReporter::new(std::io::stdout().lock());
        config.run(&dataset, &mut reporter).context("search failed")?;
        reporter.finish().context("failed to write search trace")?;
    }
    Ok(())
}

fn search_output(dataset: &Dataset, result: &SearchResult) -> SearchOutput {
    SearchOutput {
        direction: result.direction.as_str(),
        n_instances: dataset.n_instances(),
        n_features: dataset.n_features(),
        default_rate: default_rate(dataset).value(),
        best: SubsetOutput::from(&result.best),
        best_round: result.best_round,
        warned_at: result.warned_at,
        completed: result.completed,
        n_evaluations: result.n_evaluations,
        trace: std::iter::once(&result.initial)
            .chain(result.rounds.iter().map(|r| &r.selected))
            .map(SubsetOutput::from)
            .collect(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Configure Rayon thread pool
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
        info!(threads, "thread pool configured");
    }

    match cli.command {
        Command::Forward { data, search } => run_search(Direction::Forward, &data, &search)?,

        Command::Backward { data, search } => run_search(Direction::Backward, &data, &search)?,

        Command::Evaluate {
            data,
            features,
            json,
        } => {
            let dataset = load_dataset(&data)?;
            let subset = parse_features(&features)?;
            let scored = score(&dataset, subset).context("evaluation failed")?;
            info!(
                subset = %scored.subset,
                accuracy = scored.accuracy.value(),
                "subset evaluated"
            );

            if json {
                let output = EvaluateOutput {
                    n_instances: dataset.n_instances(),
                    n_features: dataset.n_features(),
                    default_rate: default_rate(&dataset).value(),
                    subset: SubsetOutput::from(&scored),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!(
                    "features set {} with accuracy: {}",
                    scored.subset, scored.accuracy
                );
            }
        }
    }

    Ok(())
}
