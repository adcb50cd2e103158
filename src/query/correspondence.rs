use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::edge::{Edge, NodeId, Year};
use crate::series::{YearRange, YearSeries, densify};

/// A representative edge and the number of records collapsed into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Tally {
    /// First edge seen for this relationship. Never replaced by later records.
    pub representative: Edge,
    pub occurrences: usize,
}

/// Deduplicated relationships of one node within one year, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct CorrespondenceBucket {
    tallies: Vec<Tally>,
}

impl CorrespondenceBucket {
    /// Count `edge` against the first representative it corresponds with, or open a
    /// new relationship with it as representative.
    pub fn record(&mut self, edge: Edge) {
        match self
            .tallies
            .iter_mut()
            .find(|t| edge.corresponds_with(&t.representative))
        {
            Some(tally) => tally.occurrences += 1,
            None => self.tallies.push(Tally {
                representative: edge,
                occurrences: 1,
            }),
        }
    }

    /// The relationship `edge` belongs to, in either direction.
    pub fn lookup(&self, edge: &Edge) -> Option<&Tally> {
        self.tallies
            .iter()
            .find(|t| edge.corresponds_with(&t.representative))
    }

    pub fn tallies(&self) -> &[Tally] {
        &self.tallies
    }

    /// Number of distinct relationships in this year.
    pub fn relationships(&self) -> usize {
        self.tallies.len()
    }

    /// Total records collapsed into this bucket.
    pub fn letters(&self) -> usize {
        self.tallies.iter().map(|t| t.occurrences).sum()
    }
}

/// Per-year buckets for one node. Years without incident edges are absent.
pub type Correspondents = BTreeMap<Year, CorrespondenceBucket>;

/// Group the edges incident to `node` by year, collapsing each edge with its
/// equal or reciprocal records.
///
/// Edges are scanned in input order so the first record of a relationship becomes
/// its permanent representative.
pub fn individual_correspondents(edges: &[Edge], node: NodeId) -> Correspondents {
    let mut buckets = Correspondents::new();
    for edge in edges.iter().filter(|e| e.has_node(node)) {
        buckets.entry(edge.year()).or_default().record(*edge);
    }
    buckets
}

/// Letters exchanged between `node_a` and `node_b` per year, dense over the span of
/// years present in `buckets`.
///
/// Fails with `EmptyDataset` if `buckets` is empty.
pub fn correspondence_per_year(
    buckets: &Correspondents,
    node_a: NodeId,
    node_b: NodeId,
) -> Result<YearSeries<usize>> {
    let range = bucket_range(buckets)?;
    Ok(densify(range, 0, |year| {
        let probe = Edge::new(node_a, node_b, 0, year);
        buckets
            .get(&year)
            .and_then(|bucket| bucket.lookup(&probe))
            .map(|tally| tally.occurrences)
    }))
}

/// Distinct relationships per year over `range`; zero where the node had none.
pub fn correspondents_per_year(buckets: &Correspondents, range: YearRange) -> YearSeries<usize> {
    densify(range, 0, |year| buckets.get(&year).map(CorrespondenceBucket::relationships))
}

/// The `[min, max]` span of the years the buckets are keyed by.
pub fn bucket_range(buckets: &Correspondents) -> Result<YearRange> {
    YearRange::spanning(buckets.keys().copied()).ok_or_else(|| {
        GraphError::EmptyDataset("node has no incident edges in the dataset".to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Edge> {
        vec![
            Edge::new(27, 53, 1, 1637),
            Edge::new(53, 27, 2, 1637),
            Edge::new(27, 56, 3, 1638),
        ]
    }

    #[test]
    fn test_reciprocal_edges_collapse() {
        let edges = vec![Edge::new(1, 2, 10, 1700), Edge::new(2, 1, 11, 1700)];
        let buckets = individual_correspondents(&edges, 1);
        let bucket = &buckets[&1700];
        assert_eq!(bucket.relationships(), 1, "reciprocal edges must share one representative");
        assert_eq!(bucket.tallies()[0].occurrences, 2);
    }

    #[test]
    fn test_first_seen_edge_stays_representative() {
        let edges = vec![
            Edge::new(1, 2, 1, 1700),
            Edge::new(2, 1, 2, 1700),
            Edge::new(1, 2, 3, 1700),
        ];
        let buckets = individual_correspondents(&edges, 1);
        let tallies = buckets[&1700].tallies();
        assert_eq!(tallies.len(), 1);
        assert_eq!(tallies[0].representative.id(), 1);
        assert_eq!(tallies[0].occurrences, 3);
    }

    #[test]
    fn test_non_incident_edges_are_skipped() {
        let edges = vec![
            Edge::new(1, 2, 1, 1700),
            Edge::new(3, 4, 2, 1701),
            Edge::new(2, 1, 3, 1702),
        ];
        let buckets = individual_correspondents(&edges, 1);
        assert_eq!(
            buckets.keys().copied().collect::<Vec<_>>(),
            vec![1700, 1702],
            "1701 has no edge incident to node 1 and must be absent"
        );
    }

    #[test]
    fn test_distinct_partners_stay_separate() {
        let edges = vec![
            Edge::new(1, 2, 1, 1700),
            Edge::new(3, 1, 2, 1700),
            Edge::new(1, 3, 3, 1700),
            Edge::new(2, 1, 4, 1700),
            Edge::new(2, 1, 5, 1700),
        ];
        let buckets = individual_correspondents(&edges, 1);
        let bucket = &buckets[&1700];
        assert_eq!(bucket.relationships(), 2);
        assert_eq!(bucket.tallies()[0].representative.id(), 1);
        assert_eq!(bucket.tallies()[0].occurrences, 3);
        assert_eq!(bucket.tallies()[1].representative.id(), 2);
        assert_eq!(bucket.tallies()[1].occurrences, 2);
        assert_eq!(bucket.letters(), 5);
    }

    #[test]
    fn test_correspondence_per_year_concrete() {
        let buckets = individual_correspondents(&sample(), 27);
        let series = correspondence_per_year(&buckets, 27, 53).unwrap();
        let pairs: Vec<(Year, usize)> = series.into_iter().collect();
        assert_eq!(pairs, vec![(1637, 2), (1638, 0)]);
    }

    #[test]
    fn test_correspondence_range_is_inclusive_and_dense() {
        let edges = vec![
            Edge::new(1, 2, 1, 1700),
            Edge::new(1, 3, 2, 1702),
            Edge::new(2, 1, 3, 1704),
        ];
        let buckets = individual_correspondents(&edges, 1);
        let series = correspondence_per_year(&buckets, 1, 2).unwrap();
        let pairs: Vec<(Year, usize)> = series.into_iter().collect();
        assert_eq!(
            pairs,
            vec![(1700, 1), (1701, 0), (1702, 0), (1703, 0), (1704, 1)]
        );
    }

    #[test]
    fn test_correspondence_range_follows_bucket_years_only() {
        let edges = vec![
            Edge::new(5, 6, 1, 1600),
            Edge::new(1, 2, 2, 1650),
            Edge::new(1, 2, 3, 1651),
            Edge::new(5, 6, 4, 1700),
        ];
        let buckets = individual_correspondents(&edges, 1);
        let series = correspondence_per_year(&buckets, 1, 2).unwrap();
        assert_eq!(series.keys().copied().collect::<Vec<_>>(), vec![1650, 1651]);
    }

    #[test]
    fn test_correspondence_is_symmetric() {
        let edges = vec![
            Edge::new(1, 2, 1, 1700),
            Edge::new(2, 1, 2, 1700),
            Edge::new(2, 1, 3, 1701),
            Edge::new(1, 3, 4, 1702),
            Edge::new(2, 4, 5, 1703),
            Edge::new(1, 2, 6, 1703),
        ];
        let from_a =
            correspondence_per_year(&individual_correspondents(&edges, 1), 1, 2).unwrap();
        let from_b =
            correspondence_per_year(&individual_correspondents(&edges, 2), 2, 1).unwrap();
        for year in 1700..=1703 {
            assert_eq!(
                from_a.get(&year).copied().unwrap_or(0),
                from_b.get(&year).copied().unwrap_or(0),
                "counts differ in {year}"
            );
        }
        assert_eq!(from_a[&1700], 2);
        assert_eq!(from_a[&1701], 1);
        assert_eq!(from_a[&1703], 1);
    }

    #[test]
    fn test_empty_buckets_are_rejected() {
        let buckets = individual_correspondents(&sample(), 999);
        assert!(buckets.is_empty());
        let err = correspondence_per_year(&buckets, 999, 27).unwrap_err();
        assert!(matches!(err, GraphError::EmptyDataset(_)), "got {err:?}");
    }

    #[test]
    fn test_correspondents_per_year_over_global_range() {
        let edges = vec![
            Edge::new(1, 2, 1, 1700),
            Edge::new(1, 3, 2, 1700),
            Edge::new(3, 1, 3, 1700),
            Edge::new(4, 5, 4, 1702),
        ];
        let buckets = individual_correspondents(&edges, 1);
        let range = YearRange {
            first: 1700,
            last: 1702,
        };
        let series = correspondents_per_year(&buckets, range);
        let pairs: Vec<(Year, usize)> = series.into_iter().collect();
        assert_eq!(pairs, vec![(1700, 2), (1701, 0), (1702, 0)]);
    }
}
