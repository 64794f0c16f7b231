use super::NodeMap;
use crate::collections::FxIndexMap;

use indexmap::map::Entry::{Occupied, Vacant};
use num_traits::Zero;
use std::{cmp::Ordering, collections::BinaryHeap, hash::Hash};

/// Explore the graph from `start` using Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Repeatedly expands the cheapest frontier entry until `goal_fn` matches
/// or the frontier is exhausted. Returns the node map of everything
/// explored plus the goal's index in it when the goal was reached.
/// Early exit at the goal is sound because edge costs are non-negative.
pub(crate) fn explore<N, C, IT, NN, G>(
    start: N,
    neighbors: NN,
    goal_fn: G,
) -> (NodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy,
    G: Fn(&N) -> bool, // returns true once the goal is met
{
    // Frontier - discovered but not yet finalized nodes, cheapest first.
    // The sequence counter makes equal-cost entries pop in insertion order,
    // so tie-breaking is stable across runs.
    let mut frontier: BinaryHeap<FrontierEntry<C>> = BinaryHeap::new();
    let mut sequence: usize = 0;

    // (parent_index, cost) per node, indexed by discovery order
    // usize::MAX marks the start node's missing parent
    let mut node_map: NodeMap<N, C> = FxIndexMap::default();

    let start_index = node_map.insert_full(start, (usize::MAX, Zero::zero())).0;
    frontier.push(FrontierEntry {
        index: start_index,
        cost: Zero::zero(),
        sequence,
    });

    while let Some(FrontierEntry { index, cost, .. }) = frontier.pop() {
        // current best cost for this node
        let (node, &(_, best)) = node_map.get_index(index).unwrap();

        // A cheaper entry for this node was already expanded
        if cost > best {
            continue;
        }

        if goal_fn(node) {
            return (node_map, Some(index));
        }

        for (neighbor, edge_cost) in neighbors(node).into_iter() {
            let candidate = edge_cost + best;

            let neighbor_index = match node_map.entry(neighbor) {
                Vacant(entry) => {
                    let neighbor_index = entry.index();
                    entry.insert((index, candidate));
                    neighbor_index
                }
                Occupied(mut entry) => {
                    if entry.get().1 > candidate {
                        let neighbor_index = entry.index();
                        entry.insert((index, candidate));
                        neighbor_index
                    } else {
                        // the existing route is at least as good
                        continue;
                    }
                }
            };

            sequence += 1;
            frontier.push(FrontierEntry {
                index: neighbor_index,
                cost: candidate,
                sequence,
            });
        }
    }

    (node_map, None)
}

/// Frontier entry
/// Ordered by (cost, insertion sequence) so the binary heap pops the
/// cheapest entry first and resolves cost ties in FIFO order
#[derive(Debug)]
struct FrontierEntry<C> {
    index: usize,
    cost: C,
    sequence: usize,
}

impl<C: Ord> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
impl<C: Ord> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialEq> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.sequence == other.sequence
    }
}
impl<C: PartialEq> Eq for FrontierEntry<C> {}
