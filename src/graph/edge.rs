use std::fmt;

/// Identifier of a correspondence participant. Any integer is a valid node.
pub type NodeId = i64;
/// Identifier carried by the raw edge record.
pub type EdgeId = i64;
/// Calendar year an edge is stamped with.
pub type Year = i32;

/// One directed, dated correspondence record between two nodes.
///
/// The derived `PartialEq` compares every field including `id`. The relation used
/// for aggregation ignores the id and is exposed as [`Edge::matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    id: EdgeId,
    year: Year,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId, id: EdgeId, year: Year) -> Self {
        Self {
            source,
            target,
            id,
            year,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn year(&self) -> Year {
        self.year
    }

    /// Same source, target and year. The id is not compared.
    pub fn matches(&self, other: &Edge) -> bool {
        self.source == other.source && self.target == other.target && self.year == other.year
    }

    /// Source and target swapped relative to `other`, same year.
    pub fn is_reciprocal(&self, other: &Edge) -> bool {
        self.source == other.target && self.target == other.source && self.year == other.year
    }

    /// Whether both records describe the same yearly correspondence, in either direction.
    pub fn corresponds_with(&self, other: &Edge) -> bool {
        self.matches(other) || self.is_reciprocal(other)
    }

    /// True if `node` is the source or the target.
    pub fn has_node(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    /// The endpoint opposite `node`, if `node` is incident to this edge.
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ignores_id() {
        let a = Edge::new(27, 53, 1, 1637);
        let b = Edge::new(27, 53, 9, 1637);
        assert!(a.matches(&b));
        assert_ne!(a, b, "derived equality still distinguishes ids");
    }

    #[test]
    fn test_matches_requires_same_year() {
        let a = Edge::new(27, 53, 1, 1637);
        let b = Edge::new(27, 53, 1, 1638);
        assert!(!a.matches(&b));
        assert!(!a.corresponds_with(&b));
    }

    #[test]
    fn test_reciprocal_is_symmetric() {
        let a = Edge::new(27, 53, 1, 1637);
        let b = Edge::new(53, 27, 2, 1637);
        assert!(a.is_reciprocal(&b));
        assert!(b.is_reciprocal(&a));
        assert!(!a.matches(&b));
        assert!(a.corresponds_with(&b));
    }

    #[test]
    fn test_self_loop_is_its_own_reciprocal() {
        let a = Edge::new(4, 4, 1, 1700);
        assert!(a.is_reciprocal(&a));
    }

    #[test]
    fn test_has_node_and_other_end() {
        let e = Edge::new(27, 56, 3, 1638);
        assert!(e.has_node(27));
        assert!(e.has_node(56));
        assert!(!e.has_node(53));
        assert_eq!(e.other_end(27), Some(56));
        assert_eq!(e.other_end(56), Some(27));
        assert_eq!(e.other_end(53), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Edge::new(27, 53, 1, 1637).to_string(), "27-53");
    }
}
