//! The classic five-node demonstration scenario and the textual scenario
//! specs accepted by the CLI.

use std::str::FromStr;

use thiserror::Error;

use crate::graph::Connector;
use crate::graph::InformedGraph;

pub const DEFAULT_START: &str = "A";
pub const DEFAULT_GOAL: &str = "E";

/// Builds the reference five-node graph:
///
/// - Edges A-B:1, A-C:3, B-D:3, C-D:1, B-E:6, D-E:1
/// - Heuristics A=7, B=6, C=2, D=1, E=0
/// - Decomposition A-B&, A-C|, B-D|, C-D&, B-E&, D-E|
#[must_use]
pub fn reference_graph() -> InformedGraph<String, u32> {
    let mut g = InformedGraph::new();

    for (u, v, cost) in [
        ("A", "B", 1),
        ("A", "C", 3),
        ("B", "D", 3),
        ("C", "D", 1),
        ("B", "E", 6),
        ("D", "E", 1),
    ] {
        g.add_edge(u.to_owned(), v.to_owned(), cost);
    }

    for (n, h) in [("A", 7), ("B", 6), ("C", 2), ("D", 1), ("E", 0)] {
        g.set_heuristic(n.to_owned(), h);
    }

    for (p, c, connector) in [
        ("A", "B", Connector::And),
        ("A", "C", Connector::Or),
        ("B", "D", Connector::Or),
        ("C", "D", Connector::And),
        ("B", "E", Connector::And),
        ("D", "E", Connector::Or),
    ] {
        g.add_decomposition(p.to_owned(), c.to_owned(), connector);
    }

    g
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseSpecError {
    #[error("expected 'U-V[:COST]', got '{0}'")]
    MalformedEdge(String),
    #[error("invalid edge cost '{0}'")]
    InvalidCost(String),
    #[error("expected 'NODE=VALUE', got '{0}'")]
    MalformedHeuristic(String),
    #[error("invalid heuristic value '{0}'")]
    InvalidHeuristic(String),
    #[error("expected 'PARENT-CHILD[:and|or]', got '{0}'")]
    MalformedDecomposition(String),
    #[error("unknown connector '{0}', expected 'and' or 'or'")]
    UnknownConnector(String),
}

/// A weighted undirected edge spec, `U-V[:COST]`; the cost defaults to 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub cost: u32,
}

impl FromStr for EdgeSpec {
    type Err = ParseSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pair, cost) = match s.split_once(':') {
            Some((pair, cost)) => {
                let cost = cost
                    .parse::<u32>()
                    .map_err(|_| ParseSpecError::InvalidCost(cost.to_owned()))?;
                (pair, cost)
            }
            None => (s, 1),
        };
        let (from, to) = pair
            .split_once('-')
            .ok_or_else(|| ParseSpecError::MalformedEdge(s.to_owned()))?;
        if from.is_empty() || to.is_empty() {
            return Err(ParseSpecError::MalformedEdge(s.to_owned()));
        }
        Ok(Self {
            from: from.to_owned(),
            to: to.to_owned(),
            cost,
        })
    }
}

/// A heuristic table entry spec, `NODE=VALUE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeuristicSpec {
    pub node: String,
    pub value: u32,
}

impl FromStr for HeuristicSpec {
    type Err = ParseSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (node, value) = s
            .split_once('=')
            .ok_or_else(|| ParseSpecError::MalformedHeuristic(s.to_owned()))?;
        if node.is_empty() {
            return Err(ParseSpecError::MalformedHeuristic(s.to_owned()));
        }
        let value = value
            .parse::<u32>()
            .map_err(|_| ParseSpecError::InvalidHeuristic(value.to_owned()))?;
        Ok(Self {
            node: node.to_owned(),
            value,
        })
    }
}

/// A decomposition edge spec, `PARENT-CHILD[:and|or]`; defaults to `and`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecompositionSpec {
    pub parent: String,
    pub child: String,
    pub connector: Connector,
}

impl FromStr for DecompositionSpec {
    type Err = ParseSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pair, connector) = match s.split_once(':') {
            Some((pair, "and")) => (pair, Connector::And),
            Some((pair, "or")) => (pair, Connector::Or),
            Some((_, other)) => return Err(ParseSpecError::UnknownConnector(other.to_owned())),
            None => (s, Connector::And),
        };
        let (parent, child) = pair
            .split_once('-')
            .ok_or_else(|| ParseSpecError::MalformedDecomposition(s.to_owned()))?;
        if parent.is_empty() || child.is_empty() {
            return Err(ParseSpecError::MalformedDecomposition(s.to_owned()));
        }
        Ok(Self {
            parent: parent.to_owned(),
            child: child.to_owned(),
            connector,
        })
    }
}
