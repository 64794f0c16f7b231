mod dijkstra;
mod reconstruct;

use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::graph::{Graph, Location};

use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::ops::Add;

/// Per-query node bookkeeping
/// The tuple is (parent_index, cost from the start); the start node's
/// parent is the usize::MAX sentinel
pub(crate) type NodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Cost of reaching each location from a fixed start
/// Locations absent from the map are unreachable
pub type CostMap = FxIndexMap<String, f64>;

/// Computed route: the full location sequence from start to end, structural
/// junctions included, plus the accumulated edge weight
/// Produced fresh per query and never stored on the graph
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub locations: Vec<Location>,
    pub cost: f64,
}

/// Edge cost wrapper giving f64 the total order the frontier heap requires
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Cost(pub f64);

impl Eq for Cost {}
impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Add for Cost {
    type Output = Cost;
    fn add(self, other: Cost) -> Cost {
        Cost(self.0 + other.0)
    }
}
impl Zero for Cost {
    fn zero() -> Self {
        Cost(0.0)
    }
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

/// Lowest-cost route between two named locations
///
/// Both identifiers must exist in the graph; an unknown id is a caller
/// error. An end location that exists but cannot be reached is a normal
/// outcome reported as `Ok(None)`. The graph is never mutated, and a failed
/// query leaves it fully usable for the next one.
pub fn shortest_path(
    graph: &Graph,
    start: &str,
    end: &str,
) -> Result<Option<Route>, GraphError> {
    let start_id = located(graph, start)?;
    let end_id = located(graph, end)?;

    let (node_map, goal_index) =
        dijkstra::explore(start_id, neighbor_fn(graph), |id| *id == end_id);

    let Some(goal_index) = goal_index else {
        debug!("no route from `{start}` to `{end}`");
        return Ok(None);
    };

    let ids = reconstruct::trace(&node_map, goal_index);
    // A chain that does not bottom out at the start is no route at all
    if ids.first().copied() != Some(start_id) {
        return Ok(None);
    }

    let (_, &(_, Cost(cost))) = node_map.get_index(goal_index).unwrap();
    let locations = ids
        .iter()
        .map(|id| graph.location(id).unwrap().clone())
        .collect();

    debug!("route `{start}` -> `{end}`: {} hops, cost {cost:.2}", ids.len());
    Ok(Some(Route { locations, cost }))
}

/// Cost of reaching every location from `start`
/// Exhausts the frontier instead of stopping at a goal; locations missing
/// from the result are unreachable
pub fn costs_from(graph: &Graph, start: &str) -> Result<CostMap, GraphError> {
    let start_id = located(graph, start)?;

    let (node_map, _) = dijkstra::explore(start_id, neighbor_fn(graph), |_| false);

    Ok(node_map
        .into_iter()
        .map(|(id, (_, Cost(cost)))| (id.to_string(), cost))
        .collect())
}

/// Neighbor function over the graph's adjacency for the Dijkstra core
fn neighbor_fn<'g>(graph: &'g Graph) -> impl Fn(&&'g str) -> Vec<(&'g str, Cost)> {
    move |id| {
        graph
            .adjacent(id)
            .map(|(neighbor, weight)| (neighbor, Cost(weight)))
            .collect()
    }
}

fn located<'g>(graph: &'g Graph, id: &str) -> Result<&'g str, GraphError> {
    graph
        .location(id)
        .map(|location| location.id.as_str())
        .ok_or_else(|| GraphError::UnknownLocation(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::LocationKind;

    const TOLERANCE: f64 = 1e-9;

    // 3-4-5 right triangle with a direct hypotenuse edge
    fn triangle(direct_multiplier: f64) -> Graph {
        let mut graph = Graph::new();
        graph
            .add_location("Start", 0.0, 0.0, LocationKind::Addressable)
            .unwrap();
        graph
            .add_location("Mid", 3.0, 0.0, LocationKind::Structural)
            .unwrap();
        graph
            .add_location("End", 3.0, 4.0, LocationKind::Addressable)
            .unwrap();
        graph.connect("Start", "Mid").unwrap();
        graph.connect("Mid", "End").unwrap();
        graph
            .connect_weighted("Start", "End", direct_multiplier)
            .unwrap();
        graph
    }

    fn ids(route: &Route) -> Vec<&str> {
        route.locations.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn direct_edge_wins_when_cheaper() {
        let graph = triangle(1.0);
        let route = shortest_path(&graph, "Start", "End").unwrap().unwrap();

        // 5.0 beats the 3.0 + 4.0 detour through Mid
        assert_eq!(ids(&route), ["Start", "End"]);
        assert!((route.cost - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn penalized_direct_edge_redirects_through_midpoint() {
        // the direct edge now costs 50, the detour 7
        let graph = triangle(10.0);
        let route = shortest_path(&graph, "Start", "End").unwrap().unwrap();

        assert_eq!(ids(&route), ["Start", "Mid", "End"]);
        assert!((route.cost - 7.0).abs() < TOLERANCE);
    }

    #[test]
    fn route_cost_matches_sum_of_edge_weights() {
        let graph = triangle(10.0);
        let route = shortest_path(&graph, "Start", "End").unwrap().unwrap();

        let mut total = 0.0;
        for pair in route.locations.windows(2) {
            let weights = graph.neighbors(&pair[0].id).unwrap();
            total += weights[&pair[1].id];
        }
        assert!((route.cost - total).abs() < TOLERANCE);
    }

    #[test]
    fn route_endpoints_are_the_query_endpoints() {
        let graph = triangle(10.0);
        let route = shortest_path(&graph, "Start", "End").unwrap().unwrap();

        assert_eq!(route.locations.first().unwrap().id, "Start");
        assert_eq!(route.locations.last().unwrap().id, "End");
    }

    #[test]
    fn cost_is_symmetric() {
        let graph = triangle(10.0);
        let out = shortest_path(&graph, "Start", "End").unwrap().unwrap();
        let back = shortest_path(&graph, "End", "Start").unwrap().unwrap();
        assert!((out.cost - back.cost).abs() < TOLERANCE);
    }

    #[test]
    fn structural_locations_stay_in_the_route() {
        let graph = triangle(10.0);
        let route = shortest_path(&graph, "Start", "End").unwrap().unwrap();

        // presentation may hide junctions, the engine never does
        assert!(
            route
                .locations
                .iter()
                .any(|l| l.kind == LocationKind::Structural)
        );
    }

    #[test]
    fn start_equals_end_is_a_zero_cost_route() {
        let graph = triangle(1.0);
        let route = shortest_path(&graph, "Start", "Start").unwrap().unwrap();

        assert_eq!(ids(&route), ["Start"]);
        assert_eq!(route.cost, 0.0);
    }

    #[test]
    fn unreachable_location_is_not_an_error() {
        let mut graph = triangle(1.0);
        graph
            .add_location("Annex", 50.0, 50.0, LocationKind::Addressable)
            .unwrap();

        assert_eq!(shortest_path(&graph, "Start", "Annex").unwrap(), None);
        assert_eq!(shortest_path(&graph, "Annex", "Start").unwrap(), None);
    }

    #[test]
    fn unknown_location_is_an_error() {
        let graph = triangle(1.0);

        assert_eq!(
            shortest_path(&graph, "DoesNotExist", "Start").unwrap_err(),
            GraphError::UnknownLocation("DoesNotExist".into())
        );
        assert_eq!(
            shortest_path(&graph, "Start", "DoesNotExist").unwrap_err(),
            GraphError::UnknownLocation("DoesNotExist".into())
        );

        // a failed query leaves the graph usable
        assert!(shortest_path(&graph, "Start", "End").unwrap().is_some());
    }

    #[test]
    fn raising_a_used_edge_multiplier_never_lowers_the_cost() {
        let mut previous = f64::NEG_INFINITY;
        for multiplier in [0.5, 1.0, 2.0, 10.0, 100.0] {
            let graph = triangle(multiplier);
            let route = shortest_path(&graph, "Start", "End").unwrap().unwrap();
            assert!(route.cost >= previous - TOLERANCE);
            previous = route.cost;
        }

        // once the detour is cheaper the cost plateaus at 7
        let route = shortest_path(&triangle(100.0), "Start", "End")
            .unwrap()
            .unwrap();
        assert!((route.cost - 7.0).abs() < TOLERANCE);
    }

    #[test]
    fn triangle_property_holds_between_all_pairs() {
        let graph = triangle(1.0);
        let ids = ["Start", "Mid", "End"];

        for a in ids {
            let from_a = costs_from(&graph, a).unwrap();
            for b in ids {
                let from_b = costs_from(&graph, b).unwrap();
                for c in ids {
                    assert!(from_a[c] <= from_a[b] + from_b[c] + TOLERANCE);
                }
            }
        }
    }

    #[test]
    fn costs_from_reports_every_reachable_location() {
        let mut graph = triangle(1.0);
        graph
            .add_location("Annex", 50.0, 50.0, LocationKind::Addressable)
            .unwrap();

        let costs = costs_from(&graph, "Start").unwrap();
        assert_eq!(costs["Start"], 0.0);
        assert!((costs["Mid"] - 3.0).abs() < TOLERANCE);
        assert!((costs["End"] - 5.0).abs() < TOLERANCE);
        assert!(!costs.contains_key("Annex"));
    }

    #[test]
    fn costs_from_rejects_unknown_start() {
        let graph = triangle(1.0);
        assert_eq!(
            costs_from(&graph, "Nowhere").unwrap_err(),
            GraphError::UnknownLocation("Nowhere".into())
        );
    }
}
