use std::fmt::Write as _;

use serde::Serialize;

use crate::graph::{EdgeId, Graph, VertexId};

use super::map::{Heading, Roads};

/// One instruction: follow a road in a fixed heading for a distance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Position in the whole trip, starting at 1
    pub number: usize,
    pub road: String,
    pub heading: Heading,
    pub length: f64,
}

/// Directions between two consecutive waypoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub steps: Vec<Step>,
}

/// Directions for a whole trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directions {
    pub start: String,
    pub legs: Vec<Leg>,
}

impl Directions {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            legs: Vec::new(),
        }
    }

    /// Number the next step gets
    fn next_number(&self) -> usize {
        self.legs.iter().map(|leg| leg.steps.len()).sum::<usize>() + 1
    }

    /// Append a leg following `path` from `origin`.
    ///
    /// Consecutive roads with the same name travelled in the same heading
    /// collapse into one step.
    pub fn push_leg(&mut self, graph: &Roads, origin: VertexId, destination: VertexId, path: &[EdgeId]) {
        let mut number = self.next_number();
        let mut steps: Vec<Step> = Vec::new();
        let mut at = origin;

        for &edge in path {
            let road = graph.edge_label(edge);
            let heading = road.heading_from(at);
            at = graph.other_end(edge, at);

            match steps.last_mut() {
                Some(step) if step.road == road.name && step.heading == heading => {
                    step.length += road.length;
                }
                _ => {
                    steps.push(Step {
                        number,
                        road: road.name.clone(),
                        heading,
                        length: road.length,
                    });
                    number += 1;
                }
            }
        }

        self.legs.push(Leg {
            from: graph.vertex_label(origin).name.clone(),
            to: graph.vertex_label(destination).name.clone(),
            distance: steps.iter().map(|step| step.length).sum(),
            steps,
        });
    }

    /// Human-readable directions, distances labelled with `units`
    pub fn render(&self, units: &str) -> String {
        let mut out = String::new();
        let _ = write!(out, "From {}:\n\n", self.start);
        for leg in &self.legs {
            let last = leg.steps.len();
            for (idx, step) in leg.steps.iter().enumerate() {
                let _ = write!(
                    out,
                    "{}. Take {} {} for {:.1} {}",
                    step.number, step.road, step.heading, step.length, units
                );
                if idx + 1 == last {
                    let _ = write!(out, " to {}", leg.to);
                }
                out.push_str(".\n");
            }
        }
        out
    }
}
