use std::fmt::Write;
use std::io::IsTerminal;

use crate::cli::OutputFormat;
use crate::graph::edge::NodeId;
use crate::graph::node::DegreeRecord;
use crate::query::correspondence::Correspondents;
use crate::query::stats::DatasetStats;
use crate::series::YearSeries;

/// Render a `year -> count` series. `label` names the value column.
pub fn render_count_series(
    series: &YearSeries<usize>,
    label: &str,
    format: &OutputFormat,
) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Compact => {
            for (year, count) in series {
                let _ = writeln!(out, "{year} {count}");
            }
            let total: usize = series.values().sum();
            let _ = writeln!(out, "{} years, {} {} total", series.len(), total, label);
        }

        OutputFormat::Table => {
            let value_w = label.len().max(
                series
                    .values()
                    .map(|c| c.to_string().len())
                    .max()
                    .unwrap_or(0),
            );
            write_header(
                &mut out,
                &format!("{:<6}  {:>value_w$}", "YEAR", label.to_uppercase()),
            );
            let _ = writeln!(out, "{}", "-".repeat(8 + value_w));
            for (year, count) in series {
                let _ = writeln!(out, "{year:<6}  {count:>value_w$}");
            }
        }

        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = series
                .iter()
                .map(|(year, count)| {
                    let mut row = serde_json::Map::new();
                    row.insert("year".to_owned(), serde_json::json!(year));
                    row.insert(label.to_owned(), serde_json::json!(count));
                    serde_json::Value::Object(row)
                })
                .collect();
            write_json(&mut out, &rows);
        }
    }
    out
}

/// Render a node's per-year degree series.
pub fn render_degree_series(
    series: &YearSeries<DegreeRecord>,
    node: NodeId,
    format: &OutputFormat,
) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Compact => {
            for (year, d) in series {
                let _ = writeln!(out, "{year} out {} in {}", d.outgoing, d.incoming);
            }
            let outgoing: usize = series.values().map(|d| d.outgoing).sum();
            let incoming: usize = series.values().map(|d| d.incoming).sum();
            let _ = writeln!(out, "node {node}: {outgoing} outgoing, {incoming} incoming");
        }

        OutputFormat::Table => {
            write_header(
                &mut out,
                &format!("{:<6}  {:>8}  {:>8}", "YEAR", "OUTGOING", "INCOMING"),
            );
            let _ = writeln!(out, "{}", "-".repeat(28));
            for (year, d) in series {
                let _ = writeln!(out, "{year:<6}  {:>8}  {:>8}", d.outgoing, d.incoming);
            }
        }

        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = series
                .iter()
                .map(|(year, d)| serde_json::json!({ "year": year, "degree": d.as_pair() }))
                .collect();
            write_json(&mut out, &rows);
        }
    }
    out
}

/// Render the deduplicated correspondents of `node`, one year per block.
pub fn render_correspondents(
    buckets: &Correspondents,
    node: NodeId,
    format: &OutputFormat,
) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Compact => {
            for (year, bucket) in buckets {
                let pairs: Vec<String> = bucket
                    .tallies()
                    .iter()
                    .map(|t| format!("{}x{}", t.representative, t.occurrences))
                    .collect();
                let _ = writeln!(out, "{year} {}", pairs.join(" "));
            }
            let relationships: usize = buckets.values().map(|b| b.relationships()).sum();
            let _ = writeln!(
                out,
                "node {node}: {relationships} relationships over {} years",
                buckets.len()
            );
        }

        OutputFormat::Table => {
            write_header(
                &mut out,
                &format!("{:<6}  {:<12}  {:>10}  {:>7}", "YEAR", "EDGE", "PARTNER", "LETTERS"),
            );
            let _ = writeln!(out, "{}", "-".repeat(41));
            for (year, bucket) in buckets {
                for t in bucket.tallies() {
                    let partner = t
                        .representative
                        .other_end(node)
                        .map(|p| p.to_string())
                        .unwrap_or_default();
                    let _ = writeln!(
                        out,
                        "{year:<6}  {:<12}  {partner:>10}  {:>7}",
                        t.representative.to_string(),
                        t.occurrences
                    );
                }
            }
        }

        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = buckets
                .iter()
                .map(|(year, bucket)| {
                    let tallies: Vec<serde_json::Value> = bucket
                        .tallies()
                        .iter()
                        .map(|t| {
                            serde_json::json!({
                                "source": t.representative.source(),
                                "target": t.representative.target(),
                                "id": t.representative.id(),
                                "occurrences": t.occurrences,
                            })
                        })
                        .collect();
                    serde_json::json!({
                        "year": year,
                        "letters": bucket.letters(),
                        "correspondents": tallies,
                    })
                })
                .collect();
            write_json(&mut out, &rows);
        }
    }
    out
}

/// Render the dataset overview.
pub fn render_stats(stats: &DatasetStats, format: &OutputFormat) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Compact => {
            let _ = writeln!(out, "edges {}", stats.edge_count);
            let _ = writeln!(out, "nodes {}", stats.node_count);
            let _ = writeln!(
                out,
                "years {}-{} ({} spanned, {} active)",
                stats.year_range.first,
                stats.year_range.last,
                stats.year_range.span(),
                stats.active_years
            );
            let _ = writeln!(
                out,
                "busiest {} ({} edges)",
                stats.busiest_year, stats.busiest_year_edges
            );
            for n in &stats.top_nodes {
                let _ = writeln!(
                    out,
                    "node {} out {} in {}",
                    n.node, n.degree.outgoing, n.degree.incoming
                );
            }
        }

        OutputFormat::Table => {
            let rows = [
                ("Edges", stats.edge_count.to_string()),
                ("Nodes", stats.node_count.to_string()),
                (
                    "Year range",
                    format!("{}-{}", stats.year_range.first, stats.year_range.last),
                ),
                ("Active years", stats.active_years.to_string()),
                (
                    "Busiest year",
                    format!("{} ({} edges)", stats.busiest_year, stats.busiest_year_edges),
                ),
            ];
            for (label, value) in rows {
                let _ = writeln!(out, "{label:<14}  {value}");
            }
            if !stats.top_nodes.is_empty() {
                let _ = writeln!(out);
                write_header(
                    &mut out,
                    &format!("{:>10}  {:>8}  {:>8}", "NODE", "OUTGOING", "INCOMING"),
                );
                let _ = writeln!(out, "{}", "-".repeat(30));
                for n in &stats.top_nodes {
                    let _ = writeln!(
                        out,
                        "{:>10}  {:>8}  {:>8}",
                        n.node, n.degree.outgoing, n.degree.incoming
                    );
                }
            }
        }

        OutputFormat::Json => {
            let value = serde_json::to_value(stats).unwrap_or_default();
            write_json(&mut out, &value);
        }
    }
    out
}

/// Header line, bold when stdout is a terminal.
fn write_header(out: &mut String, header: &str) {
    if std::io::stdout().is_terminal() {
        let _ = writeln!(out, "\x1b[1m{header}\x1b[0m");
    } else {
        let _ = writeln!(out, "{header}");
    }
}

fn write_json<T: serde::Serialize + ?Sized>(out: &mut String, value: &T) {
    let _ = writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}
