use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::geometry::{Point, euclidean};

use log::debug;

/// Neighbor id -> edge weight, in edge installation order
pub type WeightMap = FxIndexMap<String, f64>;

/// Classification of a map location
/// Addressable locations (rooms, doors, entrances, named corridors) are
/// meaningful route endpoints; structural locations are unnamed junctions
/// that only shape the corridor topology
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationKind {
    Addressable,
    Structural,
}

/// Named point on the fixed map
/// The id is unique within a graph and the position never changes after
/// creation
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub id: String,
    pub position: Point,
    pub kind: LocationKind,
}

impl Location {
    pub fn is_addressable(&self) -> bool {
        self.kind == LocationKind::Addressable
    }
}

/// Declarative connection rule: two endpoint ids plus a weight multiplier
/// applied to their Euclidean distance
/// - multiplier < 1.0 marks a preferred shortcut
/// - multiplier > 1.0 penalizes a link that exists only for physical
///   connectivity
/// - multiplier = 1.0 is a neutral corridor segment
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub a: String,
    pub b: String,
    pub multiplier: f64,
}

/// Weighted undirected graph of the fixed map
///
/// Owns every [`Location`] and stores adjacency per location as a mapping
/// from neighbor id to edge weight. The adjacency mappings are the single
/// source of truth for connectivity: every edge is mirrored in both
/// endpoints' mappings with the identical weight.
///
/// The topology itself is data: each `connect` call records a [`Connection`]
/// rule, and [`Graph::rebuild_topology`] can replay the full ordered rule
/// list at any time to re-derive the adjacency from scratch.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    locations: FxIndexMap<String, Location>,
    adjacency: FxIndexMap<String, WeightMap>,
    rules: Vec<Connection>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location on the map
    /// Fails if the id is already taken - construction must stop on a
    /// duplicate rather than silently replace the earlier location
    pub fn add_location(
        &mut self,
        id: impl Into<String>,
        x: f64,
        y: f64,
        kind: LocationKind,
    ) -> Result<&Location, GraphError> {
        let id = id.into();
        if self.locations.contains_key(&id) {
            return Err(GraphError::DuplicateLocation(id));
        }

        self.adjacency.insert(id.clone(), WeightMap::default());
        let location = Location {
            id: id.clone(),
            position: Point { x, y },
            kind,
        };
        let (index, _) = self.locations.insert_full(id, location);
        Ok(&self.locations[index])
    }

    /// Connect two locations with a neutral corridor segment
    pub fn connect(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        self.connect_weighted(a, b, 1.0)
    }

    /// Connect two locations, scaling their Euclidean distance by
    /// `multiplier` to derive the edge weight
    ///
    /// The edge is installed symmetrically in both adjacency mappings.
    /// Reconnecting an already connected pair overwrites the previous
    /// weight - the last rule for a pair wins, weights never sum, so the
    /// final topology is independent of how often it is rebuilt.
    pub fn connect_weighted(
        &mut self,
        a: &str,
        b: &str,
        multiplier: f64,
    ) -> Result<(), GraphError> {
        if !self.locations.contains_key(a) {
            return Err(GraphError::UnknownLocation(a.to_string()));
        }
        if !self.locations.contains_key(b) {
            return Err(GraphError::UnknownLocation(b.to_string()));
        }
        debug_assert!(multiplier.is_finite() && multiplier >= 0.0);

        let rule = Connection {
            a: a.to_string(),
            b: b.to_string(),
            multiplier,
        };
        self.install(&rule);
        self.rules.push(rule);
        Ok(())
    }

    /// Drop every edge, then replay the full ordered rule list
    /// Identical rules and coordinates reproduce bit-identical weights, so
    /// rebuilding any number of times yields the same topology
    pub fn rebuild_topology(&mut self) {
        for adjacent in self.adjacency.values_mut() {
            adjacent.clear();
        }

        // rule endpoints were validated when the rules were recorded and
        // locations are never removed
        let rules = std::mem::take(&mut self.rules);
        for rule in &rules {
            self.install(rule);
        }
        self.rules = rules;

        debug!(
            "rebuilt topology: {} locations, {} rules",
            self.locations.len(),
            self.rules.len()
        );
    }

    /// Derive the edge weight for a rule and mirror it in both endpoints'
    /// adjacency mappings, overwriting any previous weight for the pair
    fn install(&mut self, rule: &Connection) {
        let a = self.locations[&rule.a].position.clone();
        let b = self.locations[&rule.b].position.clone();
        let weight = euclidean(a.x, a.y, b.x, b.y) * rule.multiplier;

        self.adjacency[&rule.a].insert(rule.b.clone(), weight);
        self.adjacency[&rule.b].insert(rule.a.clone(), weight);
    }

    /// Read-only view of a location's neighbors and edge weights
    pub fn neighbors(&self, id: &str) -> Result<&WeightMap, GraphError> {
        self.adjacency
            .get(id)
            .ok_or_else(|| GraphError::UnknownLocation(id.to_string()))
    }

    /// Look up a location by id
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    /// All locations in registration order
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// The ordered rule list defining the topology
    pub fn rules(&self) -> &[Connection] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Neighbor ids and edge weights for the route engine
    pub(crate) fn adjacent(&self, id: &str) -> impl Iterator<Item = (&str, f64)> {
        self.adjacency
            .get(id)
            .into_iter()
            .flatten()
            .map(|(neighbor, weight)| (neighbor.as_str(), *weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Right triangle: the A-C hypotenuse is exactly 5
    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph
            .add_location("A", 0.0, 0.0, LocationKind::Addressable)
            .unwrap();
        graph
            .add_location("B", 3.0, 0.0, LocationKind::Structural)
            .unwrap();
        graph
            .add_location("C", 3.0, 4.0, LocationKind::Addressable)
            .unwrap();
        graph
    }

    #[test]
    fn add_location_rejects_duplicate_id() {
        let mut graph = triangle();
        let result = graph.add_location("A", 9.0, 9.0, LocationKind::Structural);
        assert_eq!(result.unwrap_err(), GraphError::DuplicateLocation("A".into()));
        // the original location is untouched
        assert_eq!(graph.location("A").unwrap().position, Point { x: 0.0, y: 0.0 });
    }

    #[test]
    fn connect_rejects_unknown_location() {
        let mut graph = triangle();
        let result = graph.connect("A", "Missing");
        assert_eq!(
            result.unwrap_err(),
            GraphError::UnknownLocation("Missing".into())
        );
    }

    #[test]
    fn connect_installs_symmetric_weights() {
        let mut graph = triangle();
        graph.connect("A", "C").unwrap();

        assert_eq!(graph.neighbors("A").unwrap().get("C"), Some(&5.0));
        assert_eq!(graph.neighbors("C").unwrap().get("A"), Some(&5.0));
    }

    #[test]
    fn multiplier_scales_the_distance() {
        let mut graph = triangle();
        graph.connect_weighted("A", "C", 10.0).unwrap();
        assert_eq!(graph.neighbors("A").unwrap().get("C"), Some(&50.0));

        graph.connect_weighted("A", "B", 0.5).unwrap();
        assert_eq!(graph.neighbors("A").unwrap().get("B"), Some(&1.5));
    }

    #[test]
    fn reconnecting_a_pair_overwrites_instead_of_summing() {
        let mut graph = triangle();
        graph.connect("A", "C").unwrap();
        graph.connect_weighted("A", "C", 2.0).unwrap();

        // last rule wins: 5 * 2, not 5 + 10
        assert_eq!(graph.neighbors("A").unwrap().get("C"), Some(&10.0));
        assert_eq!(graph.neighbors("C").unwrap().get("A"), Some(&10.0));
    }

    #[test]
    fn rebuild_topology_is_idempotent() {
        let mut graph = triangle();
        graph.connect("A", "B").unwrap();
        graph.connect_weighted("B", "C", 5.0).unwrap();
        graph.connect_weighted("A", "C", 0.5).unwrap();

        let first = graph.adjacency.clone();
        graph.rebuild_topology();
        assert_eq!(graph.adjacency, first);
        graph.rebuild_topology();
        assert_eq!(graph.adjacency, first);
    }

    #[test]
    fn rebuild_replays_overrides_in_order() {
        let mut graph = triangle();
        graph.connect_weighted("A", "C", 20.0).unwrap();
        graph.connect("A", "C").unwrap();

        graph.rebuild_topology();
        // the later neutral rule still wins after a rebuild
        assert_eq!(graph.neighbors("A").unwrap().get("C"), Some(&5.0));
    }

    #[test]
    fn neighbors_rejects_unknown_location() {
        let graph = triangle();
        assert_eq!(
            graph.neighbors("Missing").unwrap_err(),
            GraphError::UnknownLocation("Missing".into())
        );
    }

    #[test]
    fn unconnected_location_has_no_neighbors() {
        let graph = triangle();
        assert!(graph.neighbors("A").unwrap().is_empty());
    }
}
