//! Candidate pool construction with progressive constraint relaxation
//!
//! Narrows the full place catalog to a working set for one trip request.
//! The district filter is mandatory; the traveler-type and budget filters
//! are modeled as an ordered list of stages, each reporting whether its
//! result was accepted, so a filter that would starve the pool is simply
//! not applied.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::models::{Place, TripRequest};

/// A filter stage keeps at least `MIN_POOL_FACTOR * days` places to hold
pub const MIN_POOL_FACTOR: u32 = 2;

/// Result of one filter stage: the narrowed set and whether it replaces
/// the stage's input
struct StageOutcome<'a> {
    places: Vec<&'a Place>,
    accepted: bool,
}

/// Build the de-duplicated, rating-sorted candidate pool for one request
///
/// An empty catalog or a district with no places yields an empty pool;
/// the allocator degrades to empty days rather than failing.
#[must_use]
pub fn build_pool<'a>(
    catalog: &'a [Place],
    request: &TripRequest,
    traveler_type: &str,
) -> Vec<&'a Place> {
    let in_district: Vec<&Place> = catalog
        .iter()
        .filter(|p| p.destination == request.district)
        .collect();
    debug!(
        district = %request.district,
        count = in_district.len(),
        "district filter applied"
    );

    if in_district.is_empty() {
        warn!(district = %request.district, "no places in requested district");
        return Vec::new();
    }

    let min_pool = (MIN_POOL_FACTOR * request.days) as usize;

    let stages: [&dyn Fn(&[&'a Place]) -> StageOutcome<'a>; 2] = [
        &|places| filter_by_traveler_type(places, traveler_type, min_pool),
        &|places| filter_by_budget(places, request, min_pool),
    ];

    let mut pool = in_district;
    for stage in stages {
        let outcome = stage(&pool);
        if outcome.accepted {
            pool = outcome.places;
        }
    }

    // Stable sort keeps catalog order among equal ratings
    pool.sort_by(|a, b| b.rating.cmp(&a.rating));
    dedup_by_name(pool)
}

/// Keep places whose category contains the traveler-type label
///
/// Accepted whenever any place matches; a thin match below the preferred
/// minimum is kept anyway with a diagnostic. Zero matches leave the
/// district set untouched.
fn filter_by_traveler_type<'a>(
    places: &[&'a Place],
    traveler_type: &str,
    min_pool: usize,
) -> StageOutcome<'a> {
    let matches: Vec<&Place> = places
        .iter()
        .copied()
        .filter(|p| p.category_contains(traveler_type))
        .collect();

    if matches.is_empty() {
        debug!(
            traveler_type,
            "no category matches, keeping unfiltered district set"
        );
        return StageOutcome {
            places: Vec::new(),
            accepted: false,
        };
    }

    if matches.len() < min_pool {
        warn!(
            traveler_type,
            matched = matches.len(),
            preferred_minimum = min_pool,
            "thin traveler-type pool, proceeding with all matches"
        );
    }

    StageOutcome {
        places: matches,
        accepted: true,
    }
}

/// Keep places within the budget's allowed cost tiers
///
/// Only accepted when the narrowed set still meets the minimum pool size;
/// otherwise the stage is skipped entirely.
fn filter_by_budget<'a>(
    places: &[&'a Place],
    request: &TripRequest,
    min_pool: usize,
) -> StageOutcome<'a> {
    let allowed = request.budget.allowed_cost_tiers();
    let within: Vec<&Place> = places
        .iter()
        .copied()
        .filter(|p| allowed.contains(&p.cost_tier))
        .collect();

    let accepted = within.len() >= min_pool;
    if !accepted {
        debug!(
            budget = %request.budget,
            within_budget = within.len(),
            preferred_minimum = min_pool,
            "budget filter too strict, skipping"
        );
    }

    StageOutcome {
        places: within,
        accepted,
    }
}

/// De-duplicate by place name, keeping the first (highest-rated) instance
fn dedup_by_name(pool: Vec<&Place>) -> Vec<&Place> {
    let mut seen: HashSet<&str> = HashSet::new();
    pool.into_iter()
        .filter(|p| seen.insert(p.name.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetTier, CostTier, Setting};

    fn place(name: &str, district: &str, category: &str, cost: CostTier, rating: u8) -> Place {
        Place {
            name: name.to_string(),
            destination: district.to_string(),
            category: category.to_string(),
            cost_tier: cost,
            setting: Setting::Outdoor,
            rating,
            duration_hours: Some(2),
            coordinates: None,
            timing: None,
        }
    }

    fn request(district: &str, days: u32, budget: BudgetTier) -> TripRequest {
        TripRequest {
            district: district.to_string(),
            days,
            budget,
            travel_with: None,
        }
    }

    #[test]
    fn test_district_filter_is_mandatory() {
        let catalog = vec![
            place("Fort", "Galle", "Culture Seeker", CostTier::Budget, 5),
            place("Temple", "Kandy", "Culture Seeker", CostTier::Budget, 5),
        ];
        let pool = build_pool(&catalog, &request("Galle", 1, BudgetTier::Luxury), "Culture Seeker");
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].name, "Fort");
    }

    #[test]
    fn test_empty_catalog_yields_empty_pool() {
        let pool = build_pool(&[], &request("Galle", 2, BudgetTier::Moderate), "Foodie");
        assert!(pool.is_empty());
    }

    #[test]
    fn test_traveler_type_filter_keeps_matches_when_plentiful() {
        let mut catalog: Vec<Place> = (0..4)
            .map(|i| place(&format!("Food {i}"), "Colombo", "Foodie", CostTier::Budget, 3))
            .collect();
        catalog.push(place("Park", "Colombo", "Nature Lover", CostTier::Budget, 5));

        let pool = build_pool(&catalog, &request("Colombo", 2, BudgetTier::Luxury), "Foodie");
        assert_eq!(pool.len(), 4);
        assert!(pool.iter().all(|p| p.category.contains("Foodie")));
    }

    #[test]
    fn test_traveler_type_filter_keeps_thin_matches() {
        // One match is below the 2-per-day preference but is still used
        let catalog = vec![
            place("Market", "Colombo", "Foodie", CostTier::Budget, 3),
            place("Park", "Colombo", "Nature Lover", CostTier::Budget, 5),
            place("Museum", "Colombo", "Culture Seeker", CostTier::Budget, 4),
        ];
        let pool = build_pool(&catalog, &request("Colombo", 3, BudgetTier::Luxury), "Foodie");
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].name, "Market");
    }

    #[test]
    fn test_traveler_type_filter_relaxes_on_zero_matches() {
        let catalog = vec![
            place("Park", "Colombo", "Nature Lover", CostTier::Budget, 5),
            place("Museum", "Colombo", "Culture Seeker", CostTier::Budget, 4),
        ];
        let pool = build_pool(&catalog, &request("Colombo", 1, BudgetTier::Luxury), "Foodie");
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_budget_filter_applies_when_pool_stays_large() {
        let catalog = vec![
            place("A", "Colombo", "Foodie", CostTier::Budget, 5),
            place("B", "Colombo", "Foodie", CostTier::Budget, 4),
            place("C", "Colombo", "Foodie", CostTier::MidRange, 3),
            place("D", "Colombo", "Foodie", CostTier::Premium, 2),
        ];
        let pool = build_pool(&catalog, &request("Colombo", 1, BudgetTier::Limited), "Foodie");
        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|p| p.cost_tier == CostTier::Budget));
    }

    #[test]
    fn test_budget_filter_skipped_when_too_strict() {
        let catalog = vec![
            place("A", "Colombo", "Foodie", CostTier::Premium, 5),
            place("B", "Colombo", "Foodie", CostTier::Premium, 4),
            place("C", "Colombo", "Foodie", CostTier::Budget, 3),
        ];
        // Limited budget keeps only one of three; below 2 x days, so skipped
        let pool = build_pool(&catalog, &request("Colombo", 1, BudgetTier::Limited), "Foodie");
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_pool_sorted_by_rating_descending() {
        let catalog = vec![
            place("Low", "Colombo", "Foodie", CostTier::Budget, 1),
            place("High", "Colombo", "Foodie", CostTier::Budget, 5),
            place("Mid", "Colombo", "Foodie", CostTier::Budget, 3),
        ];
        let pool = build_pool(&catalog, &request("Colombo", 1, BudgetTier::Luxury), "Foodie");
        let names: Vec<&str> = pool.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn test_dedup_keeps_highest_rated_instance() {
        let catalog = vec![
            place("Fort", "Galle", "Culture Seeker", CostTier::Budget, 2),
            place("Fort", "Galle", "Culture Seeker", CostTier::Budget, 5),
        ];
        let pool = build_pool(&catalog, &request("Galle", 1, BudgetTier::Luxury), "Culture Seeker");
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].rating, 5);
    }
}
