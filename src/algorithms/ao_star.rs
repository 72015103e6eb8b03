use log::debug;
use log::trace;
use rustc_hash::FxHashMap;

use crate::frontier::MinFrontier;
use crate::graph::InformedGraph;
use crate::space::Cost;
use crate::space::NodeId;
use crate::space::Path;

/// AO* Search over the decomposition adjacency.
///
/// Deliberately NOT a solution-graph AND-OR algorithm: every decomposition
/// edge costs one step and the AND/OR connector never gates expansion, so
/// this is uniform-cost shortest-path expansion over the decomposition
/// edges. The connector is carried in the graph for rendering only.
/// Substituting "true" AND-OR semantics (all children of an AND node) would
/// be a different algorithm.
///
/// The returned `Path::cost` is the number of steps taken. The backward
/// walk ends at the start node, the only reached node without a
/// predecessor entry.
pub fn ao_star_search<N, C>(graph: &InformedGraph<N, C>, start: &N, goal: &N) -> Option<Path<N, C>>
where
    N: NodeId,
    C: Cost,
{
    let mut open = MinFrontier::new();
    let mut best_cost = FxHashMap::<N, C>::default();
    let mut parent = FxHashMap::<N, N>::default();

    best_cost.insert(start.clone(), C::zero());
    open.push((C::zero(), start.clone()));

    while let Some((cost, current)) = open.pop() {
        if current == *goal {
            trace!("popped goal {current} (steps={cost})");
            let steps = best_cost[&current];
            return Some(reconstruct(&parent, current, steps));
        }

        // Freshest recorded cost, as in A*: stale pops re-read it and then
        // cannot improve any child.
        let g = best_cost[&current];
        debug!("expanding {current} (steps={g})");

        for d in graph.decomposition(&current) {
            let candidate = g.saturating_add(&C::one());
            let improves = match best_cost.get(&d.child) {
                Some(best) => candidate < *best,
                None => true,
            };
            if improves {
                best_cost.insert(d.child.clone(), candidate);
                parent.insert(d.child.clone(), current.clone());
                open.push((candidate, d.child.clone()));
            }
        }
    }

    None
}

fn reconstruct<N, C>(parent: &FxHashMap<N, N>, goal: N, steps: C) -> Path<N, C>
where
    N: NodeId,
    C: Cost,
{
    let mut cursor = goal;
    let mut nodes = vec![cursor.clone()];
    while let Some(prev) = parent.get(&cursor) {
        cursor = prev.clone();
        nodes.push(cursor.clone());
    }
    nodes.reverse();
    Path { nodes, cost: steps }
}
