//! End-to-end behaviour tests for the itinerary planner

use std::collections::HashSet;

use rstest::rstest;
use tripweaver::models::{
    BudgetTier, Coordinates, CostTier, Place, Setting, TravelerProfile, TripRequest,
    WeatherCondition, WeatherDay,
};
use tripweaver::plan_trip;

fn place(name: &str, district: &str, category: &str, rating: u8, setting: Setting) -> Place {
    Place {
        name: name.to_string(),
        destination: district.to_string(),
        category: category.to_string(),
        cost_tier: CostTier::Budget,
        setting,
        rating,
        duration_hours: Some(2),
        coordinates: None,
        timing: None,
    }
}

fn request(district: &str, days: u32) -> TripRequest {
    TripRequest {
        district: district.to_string(),
        days,
        budget: BudgetTier::Luxury,
        travel_with: None,
    }
}

fn profile(traveler_type: &str) -> TravelerProfile {
    TravelerProfile {
        traveler_type: traveler_type.to_string(),
        confidence: 0.9,
        description: None,
        recommendations: None,
    }
}

fn weather(day: u32, condition: WeatherCondition) -> WeatherDay {
    WeatherDay {
        day,
        condition,
        temp: 27.0,
        description: "test conditions".to_string(),
        humidity: 75,
    }
}

/// Foodie pool of six rated places over two days: the per-day food cap
/// limits each day to two stops and the rest spill into later days with
/// no repeats
#[test]
fn test_foodie_pool_respects_daily_food_cap() {
    let catalog: Vec<Place> = (0..6u8)
        .map(|i| {
            place(
                &format!("Food {i}"),
                "X",
                "Foodie",
                5 - i,
                Setting::Both,
            )
        })
        .collect();

    let plan = plan_trip(&catalog, &request("X", 2), &profile("Foodie"), Vec::new());
    let days = plan.itinerary.days();
    assert_eq!(days.len(), 2);

    // Foodie travelers get at most two food stops per day
    for day in days {
        let food_stops = day
            .visits
            .iter()
            .filter(|v| v.category.contains("Foodie"))
            .count();
        assert!(food_stops <= 2, "{} food stops on {}", food_stops, day.label);
    }

    // Highest-rated places go first, nothing repeats
    let day1: Vec<&str> = days[0].visits.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(day1, vec!["Food 0", "Food 1"]);
    let day2: Vec<&str> = days[1].visits.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(day2, vec!["Food 2", "Food 3"]);
}

/// A district with no catalog entries still produces every day key,
/// each with an empty visit list
#[rstest]
#[case(1)]
#[case(3)]
#[case(7)]
fn test_unknown_district_yields_empty_days(#[case] days: u32) {
    let catalog = vec![place("Fort", "Galle", "Culture Seeker", 5, Setting::Both)];
    let plan = plan_trip(
        &catalog,
        &request("Atlantis", days),
        &profile("Culture Seeker"),
        Vec::new(),
    );

    assert_eq!(plan.itinerary.days().len(), days as usize);
    for day in plan.itinerary.days() {
        assert!(day.visits.is_empty());
    }
    // Labels run "Day 1" .. "Day N"
    assert_eq!(plan.itinerary.days()[0].label, "Day 1");
    assert!(plan.itinerary.day(&format!("Day {days}")).is_some());
}

/// Rain on day one restricts that day to indoor places while the pool
/// still holds any
#[test]
fn test_rainy_first_day_prefers_indoor_places() {
    let catalog = vec![
        place("Museum", "Colombo", "Culture Seeker", 4, Setting::Indoor),
        place("Gallery", "Colombo", "Culture Seeker", 3, Setting::Indoor),
        place("Park", "Colombo", "Culture Seeker", 5, Setting::Outdoor),
        place("Beach", "Colombo", "Culture Seeker", 5, Setting::Outdoor),
        place("Garden", "Colombo", "Culture Seeker", 4, Setting::Outdoor),
    ];
    let forecast = vec![weather(1, WeatherCondition::Rain)];

    let plan = plan_trip(
        &catalog,
        &request("Colombo", 2),
        &profile("Culture Seeker"),
        forecast,
    );

    let day1 = &plan.itinerary.days()[0].visits;
    assert!(!day1.is_empty());
    assert!(day1.iter().all(|v| v.setting == Setting::Indoor));

    // Day two has no forecast entry and draws from the remaining pool
    let day2 = &plan.itinerary.days()[1].visits;
    assert!(day2.iter().all(|v| v.weather.is_none()));
}

/// Coordinates on every stop trigger nearest-neighbour ordering within
/// the day
#[test]
fn test_day_route_walks_nearest_neighbour() {
    let mut far = place("Far", "Line", "Nature Lover", 5, Setting::Outdoor);
    far.coordinates = Some(Coordinates {
        latitude: 0.0,
        longitude: 10.0,
    });
    let mut origin = place("Origin", "Line", "Nature Lover", 4, Setting::Outdoor);
    origin.coordinates = Some(Coordinates {
        latitude: 0.0,
        longitude: 0.0,
    });
    let mut near = place("Near", "Line", "Nature Lover", 3, Setting::Outdoor);
    near.coordinates = Some(Coordinates {
        latitude: 0.0,
        longitude: 1.0,
    });

    // Rating order puts Far first; the tour then hops to its closest
    // remaining neighbour rather than following rating order
    let catalog = vec![far, origin, near];
    let plan = plan_trip(
        &catalog,
        &request("Line", 1),
        &profile("Nature Lover"),
        Vec::new(),
    );

    let names: Vec<&str> = plan.itinerary.days()[0]
        .visits
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(names, vec!["Far", "Near", "Origin"]);
}

/// No place name ever repeats across the whole itinerary, and each visit
/// carries a bounded confidence score
#[test]
fn test_no_repeats_and_confidence_bounds_across_long_trip() {
    let catalog: Vec<Place> = (0..20u8)
        .map(|i| {
            place(
                &format!("Stop {i}"),
                "Kandy",
                if i % 3 == 0 { "Foodie" } else { "Culture Seeker" },
                i % 6,
                if i % 2 == 0 { Setting::Indoor } else { Setting::Outdoor },
            )
        })
        .collect();
    let forecast = vec![
        weather(1, WeatherCondition::Rain),
        weather(2, WeatherCondition::Clear),
        weather(3, WeatherCondition::Thunderstorm),
    ];

    let plan = plan_trip(&catalog, &request("Kandy", 5), &profile("Foodie"), forecast);

    let mut seen = HashSet::new();
    for day in plan.itinerary.days() {
        for visit in &day.visits {
            assert!(seen.insert(visit.name.clone()), "{} repeated", visit.name);
            assert!((0.0..=1.0).contains(&visit.explanation.confidence));
            assert!(!visit.explanation.reasons.is_empty());
        }
    }
}

/// The consumed forecast passes through the plan for the response payload
#[test]
fn test_forecast_passes_through() {
    let catalog = vec![place("Fort", "Galle", "Culture Seeker", 5, Setting::Both)];
    let forecast = vec![
        weather(1, WeatherCondition::Clouds),
        weather(2, WeatherCondition::Rain),
    ];

    let plan = plan_trip(
        &catalog,
        &request("Galle", 2),
        &profile("Culture Seeker"),
        forecast.clone(),
    );
    assert_eq!(plan.forecast, forecast);

    // Day one's visit records the day's weather
    let day1 = &plan.itinerary.days()[0].visits;
    assert_eq!(
        day1[0].weather.as_ref().map(|w| w.condition),
        Some(WeatherCondition::Clouds)
    );
}

/// After the unconditional first stop, a day's hours stay within budget
#[test]
fn test_daily_hours_respect_budget_after_first_stop() {
    let catalog: Vec<Place> = (0..5u8)
        .map(|i| {
            let mut p = place(
                &format!("Long {i}"),
                "Ella",
                "Adventure Seeker",
                5 - i,
                Setting::Outdoor,
            );
            p.duration_hours = Some(3);
            p
        })
        .collect();

    let plan = plan_trip(
        &catalog,
        &request("Ella", 1),
        &profile("Adventure Seeker"),
        Vec::new(),
    );

    let day1 = &plan.itinerary.days()[0].visits;
    let total: u32 = day1.iter().map(|v| v.duration).sum();
    assert!(total <= 8, "day exceeded the hour budget: {total}");
}
