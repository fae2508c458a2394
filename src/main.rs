//! `influence`: print per-vertex influence counts and the max influencers of a digraph file.
//!
//! ```text
//! influence digraph.txt            # nothing excluded
//! influence digraph.txt 1 2 3 8    # remove vertices 1, 2, 3 and 8 first
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `warn`); the report goes to stdout.

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use influence::{load_digraph, top_k, AllExcludedPolicy, InfluenceConfig, InfluenceEngine};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "influence", version, about = "Exclusion-aware influence counts for a directed graph")]
struct Cli {
    /// Digraph file: vertex count, edge count, then one `v w` pair per edge.
    graph: PathBuf,

    /// Vertex ids to remove from the graph before counting.
    excluded: Vec<usize>,

    /// Print the K most influential vertices instead of the max set.
    #[arg(long, value_name = "K")]
    top: Option<usize>,

    /// What to report as max influencers when every vertex is excluded.
    #[arg(long, value_enum, default_value_t = AllExcluded::Everyone)]
    all_excluded: AllExcluded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AllExcluded {
    Everyone,
    Nobody,
}

impl From<AllExcluded> for AllExcludedPolicy {
    fn from(value: AllExcluded) -> Self {
        match value {
            AllExcluded::Everyone => AllExcludedPolicy::Everyone,
            AllExcluded::Nobody => AllExcludedPolicy::Nobody,
        }
    }
}

fn write_report<W: Write>(
    out: &mut W,
    engine: &InfluenceEngine,
    excluded: &HashSet<usize>,
    top: Option<usize>,
    config: &InfluenceConfig,
) -> io::Result<()> {
    let counts = engine.influence_counts(excluded);
    for (v, count) in counts.iter().enumerate() {
        writeln!(out, "vertex {v}, influence count: {count}")?;
    }

    match top {
        Some(k) => {
            writeln!(out, "Top {k} influencers:")?;
            for (v, count) in top_k(&counts, k) {
                writeln!(out, "vertex {v}, influence count: {count}")?;
            }
        }
        None => {
            let ids: Vec<String> = engine
                .max_influencers_with(excluded, config)
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(out, "Here are the max influencers:")?;
            writeln!(out, "{}", ids.join(", "))?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let graph = load_digraph(&cli.graph)
        .with_context(|| format!("reading digraph: {}", cli.graph.display()))?;

    let excluded: HashSet<usize> = cli.excluded.iter().copied().collect();
    let node_count = graph.node_count();
    for &id in excluded.iter().filter(|&&id| id >= node_count) {
        warn!(id, node_count, "excluded id is not a vertex of this graph; ignoring");
    }

    let engine = InfluenceEngine::from(graph);
    let config = InfluenceConfig { all_excluded: cli.all_excluded.into() };

    let mut out = io::stdout().lock();
    write_report(&mut out, &engine, &excluded, cli.top, &config).context("writing report")?;
    out.flush().context("writing report")?;
    Ok(())
}
