//! Driving directions over a road map
//!
//! Each leg of a trip is an A* search run as an ordered traversal: the
//! comparator ranks locations by distance so far plus straight-line distance
//! to the leg's destination, and the visitor halts once it is reached.

mod directions;
mod map;
mod request;
mod route;

use std::path::Path;
use std::time::Instant;

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::trace_time;

pub use directions::{Directions, Leg, Step};
pub use map::{Heading, Location, Road, RoadMap, Roads};
pub use request::parse_request;
pub use route::shortest_path;

/// Directions visiting `waypoints` in order
pub fn plan(map: &RoadMap, waypoints: &[VertexId]) -> Result<Directions> {
    let graph = map.graph();
    let start = waypoints
        .first()
        .map(|&vertex| graph.vertex_label(vertex).name.clone())
        .unwrap_or_default();
    let mut directions = Directions::new(start);

    for (leg, pair) in waypoints.windows(2).enumerate() {
        let began = Instant::now();
        let (from, to) = (pair[0], pair[1]);
        let path = shortest_path(graph, from, to)?;
        directions.push_leg(graph, from, to, &path);
        trace_time!(began, "plan_leg", leg = leg);
    }

    Ok(directions)
}

/// Load the map at `map_path` and plan the trip described by `request`
#[tracing::instrument(skip(request), fields(map = %map_path.display()))]
pub fn trip(map_path: &Path, request: &str) -> Result<Directions> {
    let map = RoadMap::load(map_path)?;
    let waypoints = parse_request(&map, request)?;
    plan(&map, &waypoints)
}
