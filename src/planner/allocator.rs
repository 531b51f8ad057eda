//! Weather-aware daily place allocation
//!
//! Walks the trip days in order, selecting places from the candidate
//! pool under the per-day time budget and food-category cap. A used-name
//! set threads through the loop as an accumulator, so a place scheduled
//! on day k is never offered to day k+1 — this is what enforces the
//! itinerary-wide no-repeat invariant.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{Itinerary, Place, PlaceVisit, TripRequest, WeatherDay};
use crate::planner::explain::explain_selection;
use crate::planner::sequencer::sequence_day;

/// Hours of sightseeing one day can hold
pub const DAILY_HOUR_BUDGET: u32 = 8;

/// A day stops accepting once it holds the target count and this many hours
const EARLY_STOP_HOURS: u32 = 4;

/// Floor for the per-day target when the pool covers every day
const MIN_PLACES_PER_DAY: usize = 2;

/// Traveler type whose label also tags food places in the catalog
pub const FOOD_LABEL: &str = "Foodie";

/// Allocate the pool across all trip days
///
/// Every day 1..=days appears in the returned itinerary, possibly with
/// no visits; each day's selection is handed to the route sequencer
/// before being stored.
#[must_use]
pub fn allocate_days(
    pool: &[&Place],
    request: &TripRequest,
    traveler_type: &str,
    forecast: &[WeatherDay],
) -> Itinerary {
    let target = places_per_day(pool.len(), request.days);
    let mut itinerary = Itinerary::new();
    let mut used: HashSet<String> = HashSet::new();

    for day in 1..=request.days {
        let weather = forecast.get(day as usize - 1);
        let day_pool = day_local_pool(pool, day, weather);

        let (visits, next_used) = select_for_day(
            &day_pool,
            request,
            traveler_type,
            weather,
            day,
            target,
            used,
        );
        used = next_used;

        debug!(
            day,
            selected = visits.len(),
            hours = visits.iter().map(|v| v.duration).sum::<u32>(),
            "day allocation complete"
        );

        itinerary.push_day(format!("Day {day}"), sequence_day(visits));
    }

    itinerary
}

/// Target number of places for each day
fn places_per_day(pool_size: usize, days: u32) -> usize {
    if pool_size >= days as usize {
        (pool_size / days as usize).max(MIN_PLACES_PER_DAY)
    } else {
        1
    }
}

/// Narrow the pool by the day's weather, unless that would empty it
fn day_local_pool<'a>(pool: &[&'a Place], day: u32, weather: Option<&WeatherDay>) -> Vec<&'a Place> {
    let Some(weather) = weather else {
        return pool.to_vec();
    };

    if weather.condition.favours_indoor() {
        let sheltered: Vec<&Place> = pool
            .iter()
            .copied()
            .filter(|p| p.setting.has_indoor_option())
            .collect();
        if !sheltered.is_empty() {
            debug!(
                day,
                condition = %weather.condition,
                count = sheltered.len(),
                "restricting to indoor and covered places"
            );
            return sheltered;
        }
    } else if weather.condition.favours_outdoor() {
        let open_air: Vec<&Place> = pool
            .iter()
            .copied()
            .filter(|p| p.setting.has_outdoor_option())
            .collect();
        if !open_air.is_empty() {
            debug!(
                day,
                condition = %weather.condition,
                count = open_air.len(),
                "restricting to outdoor and flexible places"
            );
            return open_air;
        }
    }

    pool.to_vec()
}

/// Select one day's visits, threading the used-name set through
///
/// The first candidate of a day is accepted regardless of duration; after
/// that, a place is only accepted when it keeps the day's running total
/// within the hour budget. Food places beyond the day's cap are skipped
/// without being marked used, so a later day can still pick them up.
fn select_for_day(
    day_pool: &[&Place],
    request: &TripRequest,
    traveler_type: &str,
    weather: Option<&WeatherDay>,
    day_number: u32,
    target: usize,
    mut used: HashSet<String>,
) -> (Vec<PlaceVisit>, HashSet<String>) {
    let food_cap = if traveler_type == FOOD_LABEL { 2 } else { 1 };
    let mut visits: Vec<PlaceVisit> = Vec::new();
    let mut day_hours = 0u32;
    let mut food_count = 0usize;

    for place in day_pool {
        if used.contains(&place.name) {
            continue;
        }

        let duration = place.visit_duration();
        let is_food = place.category_contains(FOOD_LABEL);
        if is_food && food_count >= food_cap {
            continue;
        }

        if !visits.is_empty() && day_hours + duration > DAILY_HOUR_BUDGET {
            continue;
        }

        let explanation =
            explain_selection(place, traveler_type, request.budget, weather, day_number);
        visits.push(PlaceVisit::new(place, weather.cloned(), explanation));
        used.insert(place.name.clone());
        day_hours += duration;
        if is_food {
            food_count += 1;
        }

        if visits.len() >= target && day_hours >= EARLY_STOP_HOURS {
            break;
        }
    }

    (visits, used)
}
