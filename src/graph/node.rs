/// Per (year, node) degree, split by direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DegreeRecord {
    /// Edges where the node is the source.
    pub outgoing: usize,
    /// Edges where the node is the target.
    pub incoming: usize,
}

impl DegreeRecord {
    pub fn new(outgoing: usize, incoming: usize) -> Self {
        Self { outgoing, incoming }
    }

    pub fn total(&self) -> usize {
        self.outgoing + self.incoming
    }

    /// The `[outgoing, incoming]` pair handed to reporting sinks.
    pub fn as_pair(&self) -> [usize; 2] {
        [self.outgoing, self.incoming]
    }
}
