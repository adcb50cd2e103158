mod cli;
mod config;
mod error;
mod graph;
mod loader;
mod logging;
mod query;
mod series;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands, DatasetArgs};
use config::DatasetConfig;
use graph::EdgeIndex;
use graph::edge::Edge;
use query::correspondence::{
    correspondence_per_year, correspondents_per_year, individual_correspondents,
};
use query::output::{
    render_correspondents, render_count_series, render_degree_series, render_stats,
};
use query::stats::dataset_stats;

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let rendered = match cli.command {
        Commands::Edges { dataset } => {
            let index = EdgeIndex::build(&load(&dataset)?)?;
            render_count_series(&index.edges_per_year(), "edges", &dataset.format)
        }
        Commands::Nodes { dataset } => {
            let index = EdgeIndex::build(&load(&dataset)?)?;
            render_count_series(&index.nodes_per_year(), "nodes", &dataset.format)
        }
        Commands::Degree { node, dataset } => {
            let index = EdgeIndex::build(&load(&dataset)?)?;
            render_degree_series(&index.individual_degree(node), node, &dataset.format)
        }
        Commands::Correspondents {
            node,
            counts,
            dataset,
        } => {
            let edges = load(&dataset)?;
            // Rejects empty edge lists and supplies the global year range.
            let index = EdgeIndex::build(&edges)?;
            let buckets = individual_correspondents(&edges, node);
            if counts {
                let series = correspondents_per_year(&buckets, index.year_range());
                render_count_series(&series, "correspondents", &dataset.format)
            } else {
                render_correspondents(&buckets, node, &dataset.format)
            }
        }
        Commands::Correspondence {
            node_a,
            node_b,
            dataset,
        } => {
            let edges = load(&dataset)?;
            let buckets = individual_correspondents(&edges, node_a);
            let series = correspondence_per_year(&buckets, node_a, node_b)
                .with_context(|| format!("no correspondence years for node {node_a}"))?;
            render_count_series(&series, "letters", &dataset.format)
        }
        Commands::Stats { top, dataset } => {
            let index = EdgeIndex::build(&load(&dataset)?)?;
            render_stats(&dataset_stats(&index, top), &dataset.format)
        }
    };

    print!("{rendered}");
    Ok(())
}

/// Load the edge list named by `args`, applying `correspondence.toml` from its directory.
fn load(args: &DatasetArgs) -> Result<Vec<Edge>> {
    let dir = args
        .path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let mut config = DatasetConfig::load(dir);
    if let Some(delimiter) = args.delimiter {
        config.delimiter = delimiter;
    }
    let edges = loader::load_edges_csv(&args.path, &config)
        .with_context(|| format!("failed to load {}", args.path.display()))?;
    Ok(edges)
}
