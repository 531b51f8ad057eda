//! Itinerary construction engine
//!
//! The engine turns a catalog, a trip request, and a traveler profile
//! into a multi-day itinerary:
//!
//! 1. `pool` narrows the catalog to a candidate pool, relaxing the
//!    traveler-type and budget filters when they would starve it.
//! 2. `allocator` distributes the pool across the trip days under the
//!    daily hour budget, the food cap, and the day's weather bias,
//!    attaching an explanation (`explain`) to every accepted place.
//! 3. `sequencer` orders each day's stops into a nearest-neighbour tour.
//!
//! The engine is synchronous and pure over its inputs: the weather
//! forecast is fetched by the caller beforehand, the catalog is
//! read-only, and all mutable state (pool, used-name set, itinerary) is
//! scoped to one invocation. It never fails — empty catalogs, missing
//! weather, and missing place attributes all degrade instead.

pub mod allocator;
pub mod explain;
pub mod pool;
pub mod sequencer;

use serde::Serialize;
use tracing::info;

use crate::models::{Itinerary, Place, TravelerProfile, TripRequest, WeatherDay};

pub use allocator::{DAILY_HOUR_BUDGET, FOOD_LABEL, allocate_days};
pub use explain::{ALGORITHM_TAG, explain_selection};
pub use pool::{MIN_POOL_FACTOR, build_pool};
pub use sequencer::sequence_day;

/// A planned trip: the itinerary plus the forecast it consumed
///
/// The forecast is passed through for inclusion in the response payload.
#[derive(Debug, Clone, Serialize)]
pub struct TripPlan {
    pub itinerary: Itinerary,
    pub forecast: Vec<WeatherDay>,
}

/// Plan a complete trip from a catalog, request, profile, and forecast
///
/// The returned itinerary always holds exactly `request.days` day keys,
/// each possibly empty; no place name appears twice across the trip.
/// Structural validation of the request belongs to the caller — the
/// engine assumes well-formed input.
#[must_use]
pub fn plan_trip(
    catalog: &[Place],
    request: &TripRequest,
    profile: &TravelerProfile,
    forecast: Vec<WeatherDay>,
) -> TripPlan {
    let pool = pool::build_pool(catalog, request, &profile.traveler_type);
    info!(
        district = %request.district,
        days = request.days,
        traveler_type = %profile.traveler_type,
        pool_size = pool.len(),
        "candidate pool ready"
    );

    let itinerary = allocator::allocate_days(&pool, request, &profile.traveler_type, &forecast);
    info!(
        total_places = itinerary.total_places(),
        total_hours = itinerary.total_duration(),
        "itinerary assembled"
    );

    TripPlan { itinerary, forecast }
}
