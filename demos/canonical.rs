//! Builds a weighted digraph, runs Prim and/or Dijkstra from one source, and
//! prints the path to every vertex.
//!
//! With no `--edge` flags the canonical seven-vertex graph is used.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use densegraph::{Graph, VertexId};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const CANONICAL_VERTICES: std::ops::RangeInclusive<VertexId> = 1..=7;

const CANONICAL_EDGES: &[(VertexId, VertexId, f64)] = &[
    (1, 2, 5.0),
    (1, 3, 3.0),
    (2, 3, 2.0),
    (2, 5, 3.0),
    (2, 7, 1.0),
    (3, 4, 7.0),
    (3, 5, 7.0),
    (4, 1, 2.0),
    (4, 6, 6.0),
    (5, 4, 2.0),
    (5, 6, 1.0),
    (7, 5, 1.0),
];

#[derive(Parser)]
#[command(name = "densegraph-demo")]
#[command(about = "Minimum spanning paths and shortest paths on a weighted digraph", long_about = None)]
struct Cli {
    /// Source vertex for both traversals
    #[arg(long, default_value_t = 2)]
    source: VertexId,

    /// Which traversal(s) to run
    #[arg(long, value_enum, default_value_t = Mode::Both)]
    algorithm: Mode,

    /// Edge as SRC,DEST[,WEIGHT]; repeat to replace the canonical graph
    #[arg(long = "edge", value_name = "SRC,DEST[,WEIGHT]")]
    edges: Vec<String>,

    /// Log mutations and traversal summaries to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Explicit log filter, e.g. `debug` or `densegraph=trace`
    #[arg(long, env = "DENSEGRAPH_LOG")]
    log_level: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Prim,
    Dijkstra,
    Both,
}

fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<()> {
    let directive = match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("densegraph={level}"),
        (true, None) => "densegraph=debug".to_string(),
        (false, None) => "densegraph=warn".to_string(),
    };
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter `{directive}`"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stderr)
                .with_ansi(false),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}

fn parse_edge(arg: &str) -> Result<(VertexId, VertexId, f64)> {
    let parts: Vec<&str> = arg.split(',').map(str::trim).collect();
    let (src, dest, weight) = match parts.as_slice() {
        [src, dest] => (src, dest, "1"),
        [src, dest, weight] => (src, dest, *weight),
        _ => bail!("edge `{arg}` must look like SRC,DEST or SRC,DEST,WEIGHT"),
    };
    Ok((
        src.parse().with_context(|| format!("bad source id in `{arg}`"))?,
        dest.parse().with_context(|| format!("bad destination id in `{arg}`"))?,
        weight.parse().with_context(|| format!("bad weight in `{arg}`"))?,
    ))
}

/// Adds `vertices` in order, then each edge, creating any endpoint not yet
/// present. Dense order (and so tie-breaking) follows that insertion order.
fn build_graph(
    vertices: impl IntoIterator<Item = VertexId>,
    edges: &[(VertexId, VertexId, f64)],
) -> Result<Graph> {
    let mut graph = Graph::new();
    for id in vertices {
        graph.try_add_vertex(id)?;
    }
    for &(src, dest, weight) in edges {
        for id in [src, dest] {
            if !graph.contains_vertex(id) {
                graph.try_add_vertex(id)?;
            }
        }
        graph
            .try_add_edge(src, dest, weight)
            .with_context(|| format!("cannot add edge {src} -> {dest}"))?;
    }
    Ok(graph)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_level.as_deref())?;

    let mut graph = if cli.edges.is_empty() {
        build_graph(CANONICAL_VERTICES, CANONICAL_EDGES)?
    } else {
        let edges = cli.edges.iter().map(|e| parse_edge(e)).collect::<Result<Vec<_>>>()?;
        build_graph(std::iter::empty(), &edges)?
    };
    if !graph.contains_vertex(cli.source) {
        bail!("source vertex {} is not in the graph", cli.source);
    }

    let mut ids: Vec<VertexId> = graph.vertex_ids().collect();
    ids.sort_unstable();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "G has {} vertices", graph.vertex_count())?;
    writeln!(out, "G has {} edges", graph.edge_count())?;

    if matches!(cli.algorithm, Mode::Prim | Mode::Both) {
        writeln!(out)?;
        writeln!(out, "compute mst path from {}", cli.source)?;
        graph.prim(cli.source);
        for &id in &ids {
            writeln!(out, "minimum spanning path from {} to {id}", cli.source)?;
            write!(out, "  ")?;
            graph.print_path(id, &mut out)?;
        }
    }

    if matches!(cli.algorithm, Mode::Dijkstra | Mode::Both) {
        writeln!(out)?;
        writeln!(out, "compute shortest path from {}", cli.source)?;
        graph.dijkstra(cli.source);
        for &id in &ids {
            writeln!(out, "shortest path from {} to {id}", cli.source)?;
            write!(out, "  ")?;
            graph.print_shortest_path(id, &mut out)?;
        }
    }

    Ok(())
}
