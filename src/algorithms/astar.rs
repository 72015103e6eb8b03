use log::debug;
use log::trace;
use rustc_hash::FxHashMap;

use crate::frontier::MinFrontier;
use crate::graph::InformedGraph;
use crate::space::Cost;
use crate::space::NodeId;
use crate::space::Path;

/// A* Search: a min-frontier keyed on `(f, g, node)` with
/// `f = g + h` (saturating, so the heuristic sentinel never wraps).
///
/// Relaxation is re-insertion based: improving a node's `g` pushes a fresh
/// frontier entry and leaves the stale one behind. Stale entries may still
/// be popped when the heuristic is inconsistent; they are harmless because
/// expansion always re-reads the authoritative `g_cost` table rather than
/// the `g` embedded in the popped tuple, so a stale pop cannot improve
/// anything.
///
/// Optimality holds for admissible heuristics (never enforced here);
/// `h == 0` everywhere degrades to uniform-cost search.
pub fn a_star_search<N, C>(graph: &InformedGraph<N, C>, start: &N, goal: &N) -> Option<Path<N, C>>
where
    N: NodeId,
    C: Cost,
{
    let mut open = MinFrontier::new();
    let mut g_cost = FxHashMap::<N, C>::default();
    let mut came_from = FxHashMap::<N, N>::default();

    g_cost.insert(start.clone(), C::zero());
    open.push((graph.heuristic(start), C::zero(), start.clone()));

    while let Some((f, _g, current)) = open.pop() {
        if current == *goal {
            trace!("popped goal {current} (f={f})");
            let cost = g_cost[&current];
            return Some(reconstruct(&came_from, current, cost));
        }

        // Authoritative cost: every frontier node has a `g_cost` entry
        // recorded before its push, and it only ever improves.
        let g = g_cost[&current];
        debug!("expanding {current} (f={f}, g={g})");

        for edge in graph.neighbours(&current) {
            let candidate = g.saturating_add(&edge.cost);
            let improves = match g_cost.get(&edge.to) {
                Some(best) => candidate < *best,
                None => true,
            };
            if improves {
                g_cost.insert(edge.to.clone(), candidate);
                came_from.insert(edge.to.clone(), current.clone());
                let f = candidate.saturating_add(&graph.heuristic(&edge.to));
                open.push((f, candidate, edge.to.clone()));
            }
        }
    }

    None
}

/// Walks the predecessor links from `goal` back to the start, then reverses.
///
/// No cycles are possible: a node's predecessor is only reassigned by an
/// improving relaxation.
fn reconstruct<N, C>(came_from: &FxHashMap<N, N>, goal: N, cost: C) -> Path<N, C>
where
    N: NodeId,
    C: Cost,
{
    let mut cursor = goal;
    let mut nodes = vec![cursor.clone()];
    while let Some(prev) = came_from.get(&cursor) {
        cursor = prev.clone();
        nodes.push(cursor.clone());
    }
    nodes.reverse();
    Path { nodes, cost }
}
