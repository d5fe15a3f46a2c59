use std::collections::HashMap;

use crate::error::{FringeError, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use crate::traversal::{Action, Traversal, Visitor};

use super::map::{Location, Roads};

/// A* bookkeeping: relaxes roads on admission and halts at the destination.
struct RouteVisitor {
    destination: VertexId,
    via: HashMap<VertexId, EdgeId>,
    reached: bool,
}

impl Visitor<Roads> for RouteVisitor {
    fn pre_visit(&mut self, graph: &Roads, edge: EdgeId, from: VertexId) -> Action {
        let next = graph.other_end(edge, from);
        let through = graph.vertex_label(from).distance.get() + graph.edge_label(edge).length;
        let known = &graph.vertex_label(next).distance;
        if through < known.get() {
            known.set(through);
            self.via.insert(next, edge);
            Action::Proceed
        } else {
            Action::Reject
        }
    }

    fn visit(&mut self, _graph: &Roads, vertex: VertexId) -> Action {
        if vertex == self.destination {
            self.reached = true;
            Action::Stop
        } else {
            Action::Proceed
        }
    }
}

/// Shortest sequence of roads from `from` to `to`.
///
/// Resets every location's `distance` first; afterwards each settled
/// location holds its distance from `from`.
pub fn shortest_path(graph: &Roads, from: VertexId, to: VertexId) -> Result<Vec<EdgeId>> {
    for vertex in graph.vertices() {
        graph.vertex_label(vertex).distance.set(f64::INFINITY);
    }
    graph.vertex_label(from).distance.set(0.0);
    if from == to {
        return Ok(Vec::new());
    }

    let goal = graph.vertex_label(to);
    let (goal_x, goal_y) = (goal.x, goal.y);
    let estimate = move |location: &Location| {
        location.distance.get() + (location.x - goal_x).hypot(location.y - goal_y)
    };

    let mut visitor = RouteVisitor {
        destination: to,
        via: HashMap::new(),
        reached: false,
    };
    Traversal::new(&mut visitor).traverse_ordered(graph, from, move |a: &Location, b: &Location| {
        estimate(a).total_cmp(&estimate(b))
    });

    if !visitor.reached {
        return Err(FringeError::Unreachable {
            from: graph.vertex_label(from).name.clone(),
            to: goal.name.clone(),
        });
    }

    let mut path = Vec::new();
    let mut at = to;
    while at != from {
        let Some(&edge) = visitor.via.get(&at) else {
            break;
        };
        path.push(edge);
        at = graph.other_end(edge, at);
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::map::RoadMap;

    fn distance(map: &RoadMap, name: &str) -> f64 {
        map.graph()
            .vertex_label(map.location(name).unwrap())
            .distance
            .get()
    }

    fn road_names(map: &RoadMap, path: &[EdgeId]) -> Vec<String> {
        path.iter()
            .map(|&edge| map.graph().edge_label(edge).name.clone())
            .collect()
    }

    // S-A 1, S-B 4, A-B 2, A-T 6, B-T 3: Dijkstra gives A=1, B=3, T=6
    const SQUARE: &str = "\
L S 0 0
L A 1 0
L B 1 1
L T 2 1
R S sa 1.0 EW A
R S sb 4.0 EW B
R A ab 2.0 SN B
R A at 6.0 EW T
R B bt 3.0 EW T
";

    #[test]
    fn test_matches_dijkstra_on_small_graph() {
        let map = RoadMap::parse("Map", SQUARE).unwrap();
        let from = map.location("S").unwrap();
        let to = map.location("T").unwrap();

        let path = shortest_path(map.graph(), from, to).unwrap();

        assert_eq!(road_names(&map, &path), vec!["sa", "ab", "bt"]);
        assert_eq!(distance(&map, "T"), 6.0);
        assert_eq!(distance(&map, "B"), 3.0);
        assert_eq!(distance(&map, "A"), 1.0);
    }

    #[test]
    fn test_roads_are_two_way() {
        let map = RoadMap::parse("Map", SQUARE).unwrap();
        let path = shortest_path(
            map.graph(),
            map.location("T").unwrap(),
            map.location("S").unwrap(),
        )
        .unwrap();
        assert_eq!(road_names(&map, &path), vec!["bt", "ab", "sa"]);
    }

    #[test]
    fn test_same_origin_and_destination() {
        let map = RoadMap::parse("Map", SQUARE).unwrap();
        let s = map.location("S").unwrap();
        assert!(shortest_path(map.graph(), s, s).unwrap().is_empty());
    }

    #[test]
    fn test_repeated_searches_reset_distances() {
        let map = RoadMap::parse("Map", SQUARE).unwrap();
        let (s, t) = (map.location("S").unwrap(), map.location("T").unwrap());
        shortest_path(map.graph(), s, t).unwrap();
        let path = shortest_path(map.graph(), t, s).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(distance(&map, "S"), 6.0);
    }

    #[test]
    fn test_unreachable_destination() {
        let map = RoadMap::parse("Map", "L A 0 0\nL B 5 5\n").unwrap();
        let err = shortest_path(
            map.graph(),
            map.location("A").unwrap(),
            map.location("B").unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "no route from A to B");
    }
}
