pub mod edge;
pub mod node;

use std::collections::{BTreeMap, HashMap};

use petgraph::Directed;
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::series::{YearRange, YearSeries, densify};

use edge::{Edge, NodeId, Year};
use node::DegreeRecord;

/// Degree records keyed by year, then by node. Only years with edges appear.
pub type DegreeIndex = BTreeMap<Year, BTreeMap<NodeId, DegreeRecord>>;

/// The in-memory correspondence network: a directed, year-stamped multigraph with
/// per-year degree accumulated once at build time.
///
/// Built from an immutable edge list and never mutated afterwards, so every query
/// is a pure read.
pub struct EdgeIndex {
    /// One graph node per participant; one graph edge per input record, in input order.
    pub graph: StableGraph<NodeId, Edge, Directed>,
    /// Maps participant ids to their graph node for O(1) lookup.
    pub node_index: HashMap<NodeId, NodeIndex>,
    range: YearRange,
    degrees: DegreeIndex,
}

impl EdgeIndex {
    /// Build the index. Fails with `EmptyDataset` when `edges` is empty, since no year
    /// range can be derived.
    pub fn build(edges: &[Edge]) -> Result<Self> {
        let range = YearRange::spanning(edges.iter().map(Edge::year)).ok_or_else(|| {
            GraphError::EmptyDataset("edge list contains no edges".to_owned())
        })?;

        let mut graph: StableGraph<NodeId, Edge, Directed> = StableGraph::new();
        let mut node_index: HashMap<NodeId, NodeIndex> = HashMap::new();
        let mut degrees = DegreeIndex::new();

        for edge in edges {
            let src = *node_index
                .entry(edge.source())
                .or_insert_with(|| graph.add_node(edge.source()));
            let dst = *node_index
                .entry(edge.target())
                .or_insert_with(|| graph.add_node(edge.target()));
            graph.add_edge(src, dst, *edge);

            let year = degrees.entry(edge.year()).or_default();
            year.entry(edge.source()).or_default().outgoing += 1;
            year.entry(edge.target()).or_default().incoming += 1;
        }

        debug!(
            edges = edges.len(),
            nodes = node_index.len(),
            first_year = range.first,
            last_year = range.last,
            "built edge index"
        );

        Ok(Self {
            graph,
            node_index,
            range,
            degrees,
        })
    }

    /// Global `[min, max]` year span of the dataset.
    pub fn year_range(&self) -> YearRange {
        self.range
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of distinct participants across all years.
    pub fn node_count(&self) -> usize {
        self.node_index.len()
    }

    /// Iterate the stored edges in input order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_weight(e))
    }

    /// Years with at least one edge, ascending.
    pub fn active_years(&self) -> Vec<Year> {
        self.degrees.keys().copied().collect()
    }

    /// Edge count per year, dense over the global range.
    pub fn edges_per_year(&self) -> YearSeries<usize> {
        let mut counts: HashMap<Year, usize> = HashMap::new();
        for edge in self.edges() {
            *counts.entry(edge.year()).or_insert(0) += 1;
        }
        densify(self.range, 0, |year| counts.get(&year).copied())
    }

    /// Per-year degree of every node seen that year. Sparse: years without edges are absent.
    pub fn degree_per_year(&self) -> &DegreeIndex {
        &self.degrees
    }

    /// Distinct nodes per year, dense over the global range.
    pub fn nodes_per_year(&self) -> YearSeries<usize> {
        densify(self.range, 0, |year| {
            self.degree_per_year().get(&year).map(BTreeMap::len)
        })
    }

    /// Degree of `node` for every year in the global range; `(0, 0)` where it has none.
    pub fn individual_degree(&self, node: NodeId) -> YearSeries<DegreeRecord> {
        densify(self.range, DegreeRecord::default(), |year| {
            self.degrees
                .get(&year)
                .and_then(|nodes| nodes.get(&node))
                .copied()
        })
    }

    /// Degree of `node` summed over all years, read from the graph adjacency.
    /// Unknown nodes have degree `(0, 0)`.
    pub fn total_degree(&self, node: NodeId) -> DegreeRecord {
        match self.node_index.get(&node) {
            Some(&idx) => DegreeRecord::new(
                self.graph.edges_directed(idx, Direction::Outgoing).count(),
                self.graph.edges_directed(idx, Direction::Incoming).count(),
            ),
            None => DegreeRecord::default(),
        }
    }
}
