use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::graph::edge::NodeId;

/// Per-year statistics for dated correspondence networks.
///
/// correspondence-graph reads a dated edge list (source, target, id, year) and
/// reports edge and node counts, degrees, and pairwise letter counts per year.
#[derive(Parser, Debug)]
#[command(
    name = "correspondence-graph",
    version,
    about,
    long_about = None,
    propagate_version = true,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for query results.
#[derive(Clone, Debug, ValueEnum, Default)]
pub enum OutputFormat {
    /// One `year value` line per entry followed by a summary line (default).
    #[default]
    Compact,
    /// Human-readable columnar table with a bold header when stdout is a terminal.
    Table,
    /// Pretty-printed JSON array in year order.
    Json,
}

/// Arguments shared by every query.
#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Path to the edge list CSV.
    pub path: PathBuf,

    /// Field delimiter (overrides correspondence.toml; default ';').
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Compact)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Number of edges per year, zero-filled over the dataset's year range.
    Edges {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Number of distinct nodes per year, zero-filled over the dataset's year range.
    Nodes {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Outgoing and incoming degree of one node per year.
    Degree {
        /// Node id.
        #[arg(allow_negative_numbers = true)]
        node: NodeId,

        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Deduplicated correspondents of one node per year.
    ///
    /// An edge and its same-year reciprocal count as one relationship; the first
    /// record seen represents it.
    Correspondents {
        /// Node id.
        #[arg(allow_negative_numbers = true)]
        node: NodeId,

        /// Report only the number of distinct correspondents per year, zero-filled
        /// over the dataset's year range.
        #[arg(long)]
        counts: bool,

        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Letters exchanged between two nodes per year, in either direction.
    ///
    /// The year range spans the years in which NODE_A has any correspondence.
    Correspondence {
        /// First node id; its correspondence years define the range.
        #[arg(allow_negative_numbers = true)]
        node_a: NodeId,

        /// Second node id.
        #[arg(allow_negative_numbers = true)]
        node_b: NodeId,

        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Dataset overview: counts, year range, busiest year and most connected nodes.
    Stats {
        /// Number of most connected nodes to list.
        #[arg(long, default_value_t = 5)]
        top: usize,

        #[command(flatten)]
        dataset: DatasetArgs,
    },
}
