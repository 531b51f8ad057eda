//! Explainability scoring for selected places
//!
//! Pure function producing the justification lines and confidence score
//! attached to every scheduled visit. Five signals contribute up to one
//! point each; the sum is divided by the constant maximum of five. When
//! no weather context exists the fifth signal never runs, so the highest
//! attainable confidence drops to 0.8 — this asymmetry is intentional
//! and kept for compatibility with existing consumers of the scores.

use crate::models::{BudgetTier, Explanation, Place, Setting, WeatherDay};

/// Tag describing the planning approach, attached to every explanation
pub const ALGORITHM_TAG: &str = "constraint filtering + weather-aware selection + nearest-neighbour routing";

const MAX_SCORE: f64 = 5.0;

/// Score one place against the trip context and the day's weather
#[must_use]
pub fn explain_selection(
    place: &Place,
    traveler_type: &str,
    budget: BudgetTier,
    weather: Option<&WeatherDay>,
    day_number: u32,
) -> Explanation {
    let mut reasons = Vec::new();
    let mut score = 0.0;

    // 1. Traveler-type match: full label, any label token, or nothing
    if place.category_contains(traveler_type) {
        reasons.push(format!(
            "Strong match for '{traveler_type}' traveler type"
        ));
        score += 1.0;
    } else if traveler_type
        .split_whitespace()
        .any(|token| place.category.contains(token))
    {
        reasons.push(format!("Partial match for '{traveler_type}' interests"));
        score += 0.5;
    }

    // 2. Budget fit: filtering upstream already enforced it
    reasons.push(format!(
        "Fits {budget} budget (place cost: {})",
        place.cost_tier
    ));
    score += 1.0;

    // 3. Popularity
    if place.rating >= 4 {
        reasons.push(format!("Highly rated: {}/5 stars", place.rating));
        score += 1.0;
    } else if place.rating >= 2 {
        reasons.push(format!("Rated: {}/5 stars", place.rating));
        score += 0.5;
    } else {
        reasons.push(format!("Modestly rated: {}/5 stars", place.rating));
    }

    // 4. Duration fit (advisory)
    reasons.push(format!(
        "Duration: {}hrs fits Day {day_number} schedule",
        place.visit_duration()
    ));
    score += 1.0;

    // 5. Weather fit, only when a condition is known for the day
    if let Some(weather) = weather {
        if weather.condition.favours_indoor() && place.setting == Setting::Indoor {
            reasons.push("Weather-smart: indoor venue for wet conditions".to_string());
            score += 1.0;
        } else if weather.condition.favours_outdoor() && place.setting == Setting::Outdoor {
            reasons.push(format!(
                "Weather-perfect: outdoor activity for {} conditions",
                weather.condition
            ));
            score += 1.0;
        } else {
            reasons.push(format!("Weather-aware: {} venue", place.setting));
            score += 0.5;
        }
    }

    Explanation {
        reasons,
        confidence: round2(score / MAX_SCORE),
        algorithm: ALGORITHM_TAG.to_string(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
