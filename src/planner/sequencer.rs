//! Greedy nearest-neighbour ordering of one day's visits
//!
//! Reorders a day's selected places into a visiting sequence. The tour
//! starts from the first visit in allocation order; each step appends
//! the closest remaining visit by great-circle distance. Days hold
//! single-digit stop counts, so the quadratic scan is fine.

use crate::geo::distance_km;
use crate::models::PlaceVisit;

/// Reorder a day's visits into a nearest-neighbour tour
///
/// Applies only when every visit has coordinates and there are at least
/// two of them; otherwise the input order is returned unchanged. The
/// output is always a permutation of the input. Distance ties keep the
/// earlier visit in scan order.
#[must_use]
pub fn sequence_day(visits: Vec<PlaceVisit>) -> Vec<PlaceVisit> {
    if visits.len() < 2 || visits.iter().any(|v| v.coordinates.is_none()) {
        return visits;
    }

    let mut remaining = visits;
    let mut tour = vec![remaining.remove(0)];

    while !remaining.is_empty() {
        let Some(last) = tour.last().and_then(|v| v.coordinates) else {
            // Unreachable given the guard above; keep remaining order
            tour.append(&mut remaining);
            break;
        };

        let mut nearest = 0;
        let mut best = f64::INFINITY;
        for (idx, candidate) in remaining.iter().enumerate() {
            let Some(coords) = candidate.coordinates else {
                continue;
            };
            let d = distance_km(&last, &coords);
            if d < best {
                best = d;
                nearest = idx;
            }
        }

        tour.push(remaining.remove(nearest));
    }

    tour
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, CostTier, Explanation, Setting};
    use std::collections::HashSet;

    fn visit(name: &str, coordinates: Option<(f64, f64)>) -> PlaceVisit {
        PlaceVisit {
            name: name.to_string(),
            duration: 2,
            category: "Culture Seeker".to_string(),
            cost_tier: CostTier::Budget,
            rating: 4,
            setting: Setting::Outdoor,
            coordinates: coordinates.map(|(latitude, longitude)| Coordinates {
                latitude,
                longitude,
            }),
            timing: None,
            weather: None,
            explanation: Explanation {
                reasons: Vec::new(),
                confidence: 0.8,
                algorithm: "test".to_string(),
            },
        }
    }

    #[test]
    fn test_tour_starts_at_first_and_walks_nearest() {
        // A(0,0) - B(0,1) - C(0,10) on a line, input order [C, A, B]:
        // start at C, B is nearer to C than A, then A
        let input = vec![
            visit("C", Some((0.0, 10.0))),
            visit("A", Some((0.0, 0.0))),
            visit("B", Some((0.0, 1.0))),
        ];
        let tour = sequence_day(input);
        let names: Vec<&str> = tour.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_output_is_permutation_of_input() {
        let input = vec![
            visit("A", Some((6.0, 80.0))),
            visit("B", Some((7.5, 80.8))),
            visit("C", Some((6.1, 81.2))),
            visit("D", Some((7.0, 79.9))),
        ];
        let input_names: HashSet<String> = input.iter().map(|v| v.name.clone()).collect();
        let tour = sequence_day(input);
        let tour_names: HashSet<String> = tour.iter().map(|v| v.name.clone()).collect();
        assert_eq!(tour.len(), 4);
        assert_eq!(input_names, tour_names);
    }

    #[test]
    fn test_missing_coordinates_leave_order_unchanged() {
        let input = vec![
            visit("A", Some((6.0, 80.0))),
            visit("B", None),
            visit("C", Some((6.1, 81.2))),
        ];
        let tour = sequence_day(input);
        let names: Vec<&str> = tour.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_single_visit_unchanged() {
        let input = vec![visit("A", Some((6.0, 80.0)))];
        let tour = sequence_day(input);
        assert_eq!(tour.len(), 1);
        assert_eq!(tour[0].name, "A");
    }

    #[test]
    fn test_distance_ties_keep_scan_order() {
        // B and C are equidistant from A; B appears first in the input
        let input = vec![
            visit("A", Some((0.0, 0.0))),
            visit("B", Some((0.0, 1.0))),
            visit("C", Some((0.0, -1.0))),
        ];
        let tour = sequence_day(input);
        let names: Vec<&str> = tour.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
