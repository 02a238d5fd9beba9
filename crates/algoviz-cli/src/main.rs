//! Algoviz command-line runner.
//!
//! Provides the `algoviz` binary, which runs one algorithm offline: it reads
//! a JSON request (the same body the HTTP endpoint accepts) from a file or
//! stdin and prints the JSON response to stdout.
//!
//! Uses the same [`AlgorithmService`] and `ALGOVIZ_MAX_*` limits as the HTTP
//! server, so validation and response shapes are identical from both entry
//! points.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use algoviz_core::graph::TraversalAlgorithm;
use algoviz_server::config::ServerConfig;
use algoviz_server::schema::dp::{KnapsackRequest, LcsRequest};
use algoviz_server::schema::graph::GraphRequest;
use algoviz_server::schema::greedy::{ActivitySelectionRequest, CoinChangeRequest};
use algoviz_server::schema::mst::MstRequest;
use algoviz_server::schema::search::SearchRequest;
use algoviz_server::schema::sorting::{ArrayRequest, SortingRequest};
use algoviz_server::service::AlgorithmService;

/// Run instrumented algorithms and print their step traces.
#[derive(Parser)]
#[command(name = "algoviz", about = "Run instrumented algorithms and print their step traces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every algorithm with its complexity and HTTP route.
    List {
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Run one algorithm on a JSON request.
    Run {
        /// Which endpoint's request shape to read.
        kind: Kind,

        /// Request file (default: stdin).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

/// Request kinds, named after the HTTP routes that accept them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Sorting,
    Search,
    Bfs,
    Dfs,
    Mst,
    Knapsack,
    Lcs,
    CoinChange,
    ActivitySelection,
    MergeSort,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::from_env()?;
    let service = AlgorithmService::new(config.limits);

    let (output, pretty) = match cli.command {
        Commands::List { pretty } => (serde_json::to_value(service.catalog())?, pretty),
        Commands::Run {
            kind,
            input,
            pretty,
        } => {
            let request = read_request(input.as_deref())?;
            (run_request(&service, kind, &request)?, pretty)
        }
    };

    println!("{}", render(&output, pretty)?);
    Ok(())
}

/// Reads the request body from `path`, or stdin when no path is given.
fn read_request(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request file '{}'", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            Ok(buf)
        }
    }
}

/// Parses `body` as the request for `kind` and runs it through the service.
fn run_request(service: &AlgorithmService, kind: Kind, body: &str) -> anyhow::Result<Value> {
    let value = match kind {
        Kind::Sorting => {
            let req: SortingRequest = parse(body)?;
            serde_json::to_value(service.sort(&req.algorithm, &req.array)?)?
        }
        Kind::Search => {
            let req: SearchRequest = parse(body)?;
            serde_json::to_value(service.search(&req)?)?
        }
        Kind::Bfs | Kind::Dfs => {
            let req: GraphRequest = parse(body)?;
            let algorithm = if kind == Kind::Bfs {
                TraversalAlgorithm::Bfs
            } else {
                TraversalAlgorithm::Dfs
            };
            serde_json::to_value(service.traverse(algorithm, &req)?)?
        }
        Kind::Mst => {
            let req: MstRequest = parse(body)?;
            let algorithm = req.algorithm.clone().unwrap_or_default();
            serde_json::to_value(service.mst(&algorithm, &req)?)?
        }
        Kind::Knapsack => {
            let req: KnapsackRequest = parse(body)?;
            serde_json::to_value(service.knapsack(&req)?)?
        }
        Kind::Lcs => {
            let req: LcsRequest = parse(body)?;
            serde_json::to_value(service.lcs(&req)?)?
        }
        Kind::CoinChange => {
            let req: CoinChangeRequest = parse(body)?;
            serde_json::to_value(service.coin_change(&req)?)?
        }
        Kind::ActivitySelection => {
            let req: ActivitySelectionRequest = parse(body)?;
            serde_json::to_value(service.activity_selection(&req)?)?
        }
        Kind::MergeSort => {
            let req: ArrayRequest = parse(body)?;
            serde_json::to_value(service.merge_sort(&req.array)?)?
        }
    };
    Ok(value)
}

fn parse<T: serde::de::DeserializeOwned>(body: &str) -> anyhow::Result<T> {
    serde_json::from_str(body).context("request is not valid JSON for this algorithm")
}

fn render(value: &Value, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
