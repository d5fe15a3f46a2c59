use crate::bail_usage;
use crate::error::{FringeError, Result};
use crate::graph::VertexId;

use super::map::RoadMap;

/// Resolve a trip request into its waypoints.
///
/// The request is a whitespace-separated list of location names; commas are
/// ignored, so `Berkeley, Oakland, Richmond` works too.
pub fn parse_request(map: &RoadMap, text: &str) -> Result<Vec<VertexId>> {
    let names: Vec<String> = text
        .split_whitespace()
        .map(|word| word.replace(',', ""))
        .filter(|name| !name.is_empty())
        .collect();

    if names.len() < 2 {
        bail_usage!("trip request needs an origin and a destination");
    }

    names
        .iter()
        .map(|name| {
            map.location(name)
                .ok_or_else(|| FringeError::not_found("location", name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> RoadMap {
        RoadMap::parse("Map", "L A 0 0\nL B 1 0\nL C 2 0\n").unwrap()
    }

    #[test]
    fn test_commas_are_stripped() {
        let map = map();
        let waypoints = parse_request(&map, "A, B,\nC").unwrap();
        assert_eq!(
            waypoints,
            vec![
                map.location("A").unwrap(),
                map.location("B").unwrap(),
                map.location("C").unwrap()
            ]
        );
    }

    #[test]
    fn test_single_name_is_rejected() {
        let err = parse_request(&map(), "A\n").unwrap_err();
        assert!(matches!(err, FringeError::UsageError(_)));
    }

    #[test]
    fn test_lone_commas_do_not_count() {
        let err = parse_request(&map(), "A , ,").unwrap_err();
        assert!(matches!(err, FringeError::UsageError(_)));
    }

    #[test]
    fn test_unknown_location_is_rejected() {
        let err = parse_request(&map(), "A Z").unwrap_err();
        assert_eq!(err.to_string(), "location not found: Z");
    }
}
