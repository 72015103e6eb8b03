use log::debug;
use log::trace;
use rustc_hash::FxHashSet;

use crate::frontier::MinFrontier;
use crate::graph::InformedGraph;
use crate::space::Cost;
use crate::space::NodeId;

/// Greedy Best-First Search: a min-frontier keyed purely on `h(n)`.
///
/// Edge costs are ignored entirely, so the result is the visitation trace
/// (expanded nodes in pop order, ending at `goal`), not a cost-optimal path.
/// Returns `None` when the frontier drains without popping `goal`.
///
/// Goal detection happens at pop time; a node may sit in the frontier several
/// times before being recognised as the goal.
pub fn best_first_search<N, C>(graph: &InformedGraph<N, C>, start: &N, goal: &N) -> Option<Vec<N>>
where
    N: NodeId,
    C: Cost,
{
    let mut open = MinFrontier::new();
    let mut visited = FxHashSet::default();
    let mut expansions = Vec::new();

    open.push((graph.heuristic(start), start.clone()));

    while let Some((h, current)) = open.pop() {
        if current == *goal {
            trace!("popped goal {current} (h={h})");
            expansions.push(current);
            return Some(expansions);
        }

        // Lazy deletion: stale duplicate entries surface here and are skipped.
        if !visited.insert(current.clone()) {
            continue;
        }

        debug!("expanding {current} (h={h})");
        expansions.push(current.clone());

        for edge in graph.neighbours(&current) {
            if !visited.contains(&edge.to) {
                open.push((graph.heuristic(&edge.to), edge.to.clone()));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn follows_heuristic_through_reference_graph() {
        let g = demo::reference_graph();
        let trace = best_first_search(&g, &"A".to_owned(), &"E".to_owned()).unwrap();
        // h(C)=2 beats h(B)=6, so the greedy route goes A, C, D, E even
        // though A-B is the cheaper first edge.
        assert_eq!(trace, vec!["A", "C", "D", "E"]);
    }

    #[test]
    fn order_depends_on_heuristic_not_cost() {
        // Cheapest-cost route S-A-G (cost 2) diverges from the
        // lowest-heuristic route S-B-G (cost 20).
        let mut g = InformedGraph::<&str, u32>::new();
        g.add_edge("S", "A", 1);
        g.add_edge("A", "G", 1);
        g.add_edge("S", "B", 10);
        g.add_edge("B", "G", 10);
        g.set_heuristic("S", 5);
        g.set_heuristic("A", 4);
        g.set_heuristic("B", 1);
        g.set_heuristic("G", 0);

        let trace = best_first_search(&g, &"S", &"G").unwrap();
        assert_eq!(trace, vec!["S", "B", "G"]);
    }

    #[test]
    fn start_equal_to_goal_pops_immediately() {
        let mut g = InformedGraph::<&str, u32>::new();
        g.add_edge("A", "B", 1);
        g.set_heuristic("A", 0);

        assert_eq!(best_first_search(&g, &"A", &"A"), Some(vec!["A"]));
    }

    #[test]
    fn unreachable_goal_reports_none() {
        let mut g = InformedGraph::<&str, u32>::new();
        g.add_edge("A", "B", 1);
        g.add_edge("X", "Y", 1);
        g.set_heuristic("A", 1);
        g.set_heuristic("B", 0);

        assert_eq!(best_first_search(&g, &"A", &"X"), None);
    }

    #[test]
    fn unknown_start_degrades_to_not_reachable() {
        let mut g = InformedGraph::<&str, u32>::new();
        g.add_edge("A", "B", 1);

        // "Z" was never inserted: sentinel heuristic, empty neighbour set.
        assert_eq!(best_first_search(&g, &"Z", &"A"), None);
    }

    #[test]
    fn missing_heuristics_are_visited_last_not_fatal() {
        // "M" has no heuristic entry; it still gets expanded once every
        // finite-h alternative is exhausted.
        let mut g = InformedGraph::<&str, u32>::new();
        g.add_edge("S", "M", 1);
        g.add_edge("M", "G", 1);
        g.set_heuristic("S", 2);
        g.set_heuristic("G", 0);

        let trace = best_first_search(&g, &"S", &"G").unwrap();
        assert_eq!(trace, vec!["S", "M", "G"]);
    }
}
