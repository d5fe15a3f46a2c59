use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::bail_parse;
use crate::error::{FringeError, Result};
use crate::graph::{Graph, UndirectedGraph, VertexId};

/// Undirected road network
pub type Roads = UndirectedGraph<Location, Road>;

/// Named point on the map.
///
/// `distance` is the best known distance from the current search origin;
/// searches reset and update it in place.
#[derive(Debug)]
pub struct Location {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub distance: Cell<f64>,
}

impl Location {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            distance: Cell::new(f64::INFINITY),
        }
    }

    /// Euclidean distance between two locations
    pub fn straight_line_to(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Compass heading of travel along a road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Heading::North),
            'S' => Some(Heading::South),
            'E' => Some(Heading::East),
            'W' => Some(Heading::West),
            _ => None,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heading::North => write!(f, "north"),
            Heading::South => write!(f, "south"),
            Heading::East => write!(f, "east"),
            Heading::West => write!(f, "west"),
        }
    }
}

/// A road segment between two locations.
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    pub name: String,
    pub length: f64,
    /// Location the segment was declared from
    pub from: VertexId,
    /// `[heading when leaving to, heading when leaving from]`
    direction: [Heading; 2],
}

impl Road {
    /// Parse a direction code such as `NS`: leaving `from` heads toward the
    /// second letter, leaving the other end toward the first.
    fn direction(code: &str) -> Option<[Heading; 2]> {
        match code {
            "NS" | "SN" | "EW" | "WE" => {
                let mut letters = code.chars().filter_map(Heading::from_letter);
                Some([letters.next()?, letters.next()?])
            }
            _ => None,
        }
    }

    /// Heading when travelling this road away from `origin`
    pub fn heading_from(&self, origin: VertexId) -> Heading {
        if origin == self.from {
            self.direction[1]
        } else {
            self.direction[0]
        }
    }
}

/// Locations and roads loaded from a map file.
///
/// Format, one declaration per line:
/// ```text
/// L Berkeley 122.2 37.87
/// R Berkeley I-80 12.5 NS Oakland
/// ```
#[derive(Debug)]
pub struct RoadMap {
    graph: Roads,
    index: HashMap<String, VertexId>,
}

impl RoadMap {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| FringeError::io_operation("read", path.display(), e))?;
        Self::parse(&path.display().to_string(), &text)
    }

    pub fn parse(source: &str, text: &str) -> Result<Self> {
        let mut map = RoadMap {
            graph: Roads::new(),
            index: HashMap::new(),
        };

        for (offset, line) in text.lines().enumerate() {
            let line_no = offset + 1;
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [] => continue,
                ["L", name, x, y] => {
                    let x = parse_number(source, line_no, x)?;
                    let y = parse_number(source, line_no, y)?;
                    map.add_location(source, line_no, name, x, y)?;
                }
                ["R", from, road, length, direction, to] => {
                    map.add_road(source, line_no, from, road, length, direction, to)?;
                }
                _ => bail_parse!(source, line_no, "unrecognized map line `{}`", line.trim()),
            }
        }

        tracing::debug!(
            source,
            locations = map.graph.vertex_count(),
            roads = map.graph.edge_count(),
            "loaded map"
        );
        Ok(map)
    }

    fn add_location(&mut self, source: &str, line: usize, name: &str, x: f64, y: f64) -> Result<()> {
        if self.index.contains_key(name) {
            bail_parse!(source, line, "location `{}` declared twice", name);
        }
        let vertex = self.graph.add_vertex(Location::new(name, x, y));
        self.index.insert(name.to_string(), vertex);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn add_road(
        &mut self,
        source: &str,
        line: usize,
        from: &str,
        road: &str,
        length: &str,
        direction: &str,
        to: &str,
    ) -> Result<()> {
        let endpoint = |name: &str| {
            self.location(name).ok_or_else(|| {
                FringeError::parse(source, line, format!("road `{}` names unknown location `{}`", road, name))
            })
        };
        let (start, end) = (endpoint(from)?, endpoint(to)?);

        let length = parse_number(source, line, length)?;
        if length < 0.0 {
            bail_parse!(source, line, "negative road length {}", length);
        }
        let Some(direction) = Road::direction(direction) else {
            bail_parse!(source, line, "invalid direction `{}` (expected NS, SN, EW or WE)", direction);
        };

        self.graph.add_edge(
            start,
            end,
            Road {
                name: road.to_string(),
                length,
                from: start,
                direction,
            },
        );
        Ok(())
    }

    pub fn graph(&self) -> &Roads {
        &self.graph
    }

    /// Vertex of the location called `name`
    pub fn location(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }
}

fn parse_number(source: &str, line: usize, text: &str) -> Result<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FringeError::parse(
            source,
            line,
            format!("invalid number `{}`", text),
        )),
    }
}
