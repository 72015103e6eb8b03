use derive_more::Display;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::space::Cost;
use crate::space::NodeId;

/// One traversal entry out of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<N, C>
where
    N: NodeId,
    C: Cost,
{
    pub to: N,
    pub cost: C,
}

/// How a decomposition edge connects a child to its parent.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Connector {
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
}

/// One decomposition edge of the AND-OR graph.
///
/// The connector is carried for rendering and future use; none of the
/// searches consult it (see [`crate::algorithms::ao_star`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decomposition<N>
where
    N: NodeId,
{
    pub child: N,
    pub connector: Connector,
}

/// Adjacency lists are short in the intended domain.
pub type Adjacency<N, C> = SmallVec<[Edge<N, C>; 4]>;

/// A weighted undirected graph with a node-heuristic table and a separate
/// AND-OR decomposition adjacency.
///
/// Pure data: construction happens up front through the `add_*`/`set_*`
/// calls, after which the searches only read. Duplicate edges are kept as
/// parallel entries, not deduplicated.
///
/// ```
/// use informed_search::algorithms::astar::a_star_search;
/// use informed_search::graph::InformedGraph;
///
/// let mut g = InformedGraph::<&str, u32>::new();
/// g.add_edge("A", "B", 2);
/// g.add_edge("B", "C", 2);
/// g.set_heuristic("A", 4);
/// g.set_heuristic("B", 2);
/// g.set_heuristic("C", 0);
///
/// let path = a_star_search(&g, &"A", &"C").unwrap();
/// assert_eq!(path.nodes, vec!["A", "B", "C"]);
/// assert_eq!(path.cost, 4);
/// ```
#[derive(Clone, Debug)]
pub struct InformedGraph<N, C>
where
    N: NodeId,
    C: Cost,
{
    edges: FxHashMap<N, Adjacency<N, C>>,
    heuristics: FxHashMap<N, C>,
    decompositions: FxHashMap<N, Vec<Decomposition<N>>>,
}

impl<N, C> InformedGraph<N, C>
where
    N: NodeId,
    C: Cost,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            edges: FxHashMap::default(),
            heuristics: FxHashMap::default(),
            decompositions: FxHashMap::default(),
        }
    }

    /// Adds an undirected edge: both traversal directions, same cost.
    pub fn add_edge(&mut self, u: N, v: N, cost: C) {
        self.edges.entry(u.clone()).or_default().push(Edge {
            to: v.clone(),
            cost,
        });
        self.edges.entry(v).or_default().push(Edge { to: u, cost });
    }

    /// Adds an undirected edge of cost one.
    pub fn add_unit_edge(&mut self, u: N, v: N) {
        self.add_edge(u, v, C::one());
    }

    /// Sets `h(node)`, overwriting any previous value.
    pub fn set_heuristic(&mut self, node: N, value: C) {
        self.heuristics.insert(node, value);
    }

    /// Appends one decomposition edge to `parent`'s ordered sequence.
    ///
    /// The AND-OR adjacency is independent of the weighted edges; it is
    /// directed, parent to child.
    pub fn add_decomposition(&mut self, parent: N, child: N, connector: Connector) {
        self.decompositions
            .entry(parent)
            .or_default()
            .push(Decomposition { child, connector });
    }

    /// `h(node)`: the stored estimate, or the `C::max_value()` sentinel for
    /// nodes absent from the table.
    ///
    /// The sentinel sorts last in a min-ordered frontier, so a node with an
    /// unknown heuristic is never preferentially expanded, yet it can still
    /// be reached as a neighbour.
    #[inline(always)]
    #[must_use]
    pub fn heuristic(&self, node: &N) -> C {
        match self.heuristics.get(node) {
            Some(h) => *h,
            None => C::max_value(),
        }
    }

    /// The traversal entries out of `node`; empty for unknown nodes.
    #[inline(always)]
    #[must_use]
    pub fn neighbours(&self, node: &N) -> &[Edge<N, C>] {
        match self.edges.get(node) {
            Some(adjacency) => adjacency.as_slice(),
            None => &[],
        }
    }

    /// The decomposition edges out of `node`, in insertion order; empty for
    /// unknown nodes.
    #[inline(always)]
    #[must_use]
    pub fn decomposition(&self, node: &N) -> &[Decomposition<N>] {
        match self.decompositions.get(node) {
            Some(children) => children.as_slice(),
            None => &[],
        }
    }

    /// Nodes that have at least one traversal entry.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Directed traversal entries; each `add_edge` contributes two.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(SmallVec::len).sum()
    }

    /// Iterates over every adjacency list, in map order.
    ///
    /// Map order is arbitrary; only the content is meaningful.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &[Edge<N, C>])> {
        self.edges.iter().map(|(n, a)| (n, a.as_slice()))
    }
}

impl<N, C> Default for InformedGraph<N, C>
where
    N: NodeId,
    C: Cost,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic dump of the weighted adjacency, one node per line:
/// `A -> [(B, 1), (C, 3)]`. Line order follows map order.
impl<N, C> std::fmt::Display for InformedGraph<N, C>
where
    N: NodeId,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (node, adjacency) in self.iter() {
            write!(f, "{node} -> [")?;
            for (i, e) in adjacency.iter().enumerate() {
                if i != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "({}, {})", e.to, e.cost)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_dump_lines(g: &InformedGraph<&'static str, u32>) -> Vec<String> {
        let mut lines: Vec<String> = g.to_string().lines().map(str::to_owned).collect();
        lines.sort();
        lines
    }

    #[test]
    fn edges_are_undirected() {
        let mut g = InformedGraph::<&str, u32>::new();
        g.add_edge("A", "B", 3);

        assert_eq!(g.neighbours(&"A"), &[Edge { to: "B", cost: 3 }]);
        assert_eq!(g.neighbours(&"B"), &[Edge { to: "A", cost: 3 }]);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn duplicate_edges_accumulate() {
        let mut g = InformedGraph::<&str, u32>::new();
        g.add_edge("A", "B", 3);
        g.add_edge("A", "B", 5);

        assert_eq!(
            g.neighbours(&"A"),
            &[Edge { to: "B", cost: 3 }, Edge { to: "B", cost: 5 }]
        );
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn unit_edges_cost_one() {
        let mut g = InformedGraph::<&str, u32>::new();
        g.add_unit_edge("A", "B");
        assert_eq!(g.neighbours(&"A"), &[Edge { to: "B", cost: 1 }]);
    }

    #[test]
    fn unknown_node_has_empty_adjacency() {
        let g = InformedGraph::<&str, u32>::new();
        assert!(g.neighbours(&"nowhere").is_empty());
        assert!(g.decomposition(&"nowhere").is_empty());
    }

    #[test]
    fn missing_heuristic_falls_back_to_sentinel() {
        let mut g = InformedGraph::<&str, u32>::new();
        g.set_heuristic("A", 7);

        assert_eq!(g.heuristic(&"A"), 7);
        assert_eq!(g.heuristic(&"B"), u32::MAX);
    }

    #[test]
    fn set_heuristic_overwrites() {
        let mut g = InformedGraph::<&str, u32>::new();
        g.set_heuristic("A", 7);
        g.set_heuristic("A", 2);
        assert_eq!(g.heuristic(&"A"), 2);
    }

    #[test]
    fn decompositions_keep_insertion_order() {
        let mut g = InformedGraph::<&str, u32>::new();
        g.add_decomposition("A", "B", Connector::And);
        g.add_decomposition("A", "C", Connector::Or);

        assert_eq!(
            g.decomposition(&"A"),
            &[
                Decomposition {
                    child: "B",
                    connector: Connector::And
                },
                Decomposition {
                    child: "C",
                    connector: Connector::Or
                },
            ]
        );
        // The decomposition adjacency is directed and separate from the
        // weighted edges.
        assert!(g.decomposition(&"B").is_empty());
        assert!(g.neighbours(&"A").is_empty());
    }

    #[test]
    fn dump_lists_every_adjacency() {
        let mut g = InformedGraph::<&str, u32>::new();
        g.add_edge("A", "B", 1);
        g.add_edge("A", "C", 3);

        let lines = collect_dump_lines(&g);
        assert_eq!(lines, vec!["A -> [(B, 1), (C, 3)]", "B -> [(A, 1)]", "C -> [(A, 3)]"]);
    }

    #[test]
    fn dump_is_stable_without_mutation() {
        let mut g = InformedGraph::<&str, u32>::new();
        g.add_edge("A", "B", 1);
        g.add_edge("B", "C", 2);
        g.add_edge("C", "A", 3);

        assert_eq!(collect_dump_lines(&g), collect_dump_lines(&g));
    }

    #[test]
    fn connector_renders_for_diagnostics() {
        assert_eq!(Connector::And.to_string(), "AND");
        assert_eq!(Connector::Or.to_string(), "OR");
    }
}
