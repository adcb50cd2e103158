use crate::graph::EdgeIndex;
use crate::graph::edge::{NodeId, Year};
use crate::graph::node::DegreeRecord;
use crate::series::YearRange;

/// Aggregated dataset statistics derived from an `EdgeIndex`.
#[derive(Debug, serde::Serialize)]
pub struct DatasetStats {
    pub edge_count: usize,
    pub node_count: usize,
    pub year_range: YearRange,
    /// Years with at least one edge.
    pub active_years: usize,
    /// Year with the most edges; the earliest such year on ties.
    pub busiest_year: Year,
    pub busiest_year_edges: usize,
    /// Most connected nodes by total degree, descending.
    pub top_nodes: Vec<NodeDegree>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NodeDegree {
    pub node: NodeId,
    pub degree: DegreeRecord,
}

/// Compute dataset statistics, keeping the `top` most connected nodes.
pub fn dataset_stats(index: &EdgeIndex, top: usize) -> DatasetStats {
    let per_year = index.edges_per_year();

    // BTreeMap iterates ascending, so the first maximum is the earliest year.
    let (busiest_year, busiest_year_edges) = per_year.iter().fold(
        (index.year_range().first, 0usize),
        |best, (&year, &count)| if count > best.1 { (year, count) } else { best },
    );

    let mut top_nodes: Vec<NodeDegree> = index
        .node_index
        .keys()
        .map(|&node| NodeDegree {
            node,
            degree: index.total_degree(node),
        })
        .collect();
    top_nodes.sort_by(|a, b| {
        b.degree
            .total()
            .cmp(&a.degree.total())
            .then(a.node.cmp(&b.node))
    });
    top_nodes.truncate(top);

    DatasetStats {
        edge_count: index.edge_count(),
        node_count: index.node_count(),
        year_range: index.year_range(),
        active_years: index.active_years().len(),
        busiest_year,
        busiest_year_edges,
        top_nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge::Edge;

    #[test]
    fn test_stats_concrete() {
        let edges = vec![
            Edge::new(27, 53, 1, 1637),
            Edge::new(53, 27, 2, 1637),
            Edge::new(27, 56, 3, 1638),
            Edge::new(56, 60, 4, 1641),
        ];
        let index = EdgeIndex::build(&edges).unwrap();
        let stats = dataset_stats(&index, 2);

        assert_eq!(stats.edge_count, 4);
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.year_range, YearRange { first: 1637, last: 1641 });
        assert_eq!(stats.active_years, 3);
        assert_eq!(stats.busiest_year, 1637);
        assert_eq!(stats.busiest_year_edges, 2);

        assert_eq!(stats.top_nodes.len(), 2);
        assert_eq!(stats.top_nodes[0].node, 27);
        assert_eq!(stats.top_nodes[0].degree, DegreeRecord::new(2, 1));
        // 53 and 56 both have total degree 2; the smaller id wins.
        assert_eq!(stats.top_nodes[1].node, 53);
    }

    #[test]
    fn test_busiest_year_tie_picks_earliest() {
        let edges = vec![Edge::new(1, 2, 1, 1700), Edge::new(1, 2, 2, 1690)];
        let index = EdgeIndex::build(&edges).unwrap();
        let stats = dataset_stats(&index, 5);
        assert_eq!(stats.busiest_year, 1690);
        assert_eq!(stats.busiest_year_edges, 1);
        assert_eq!(stats.top_nodes.len(), 2, "top is capped by node count");
    }
}
