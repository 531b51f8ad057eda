//! Itinerary output model: per-day visit plans with explanations

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::place::{Coordinates, CostTier, Place, Setting};
use super::weather::WeatherDay;

/// Justification attached to one selected place
///
/// Immutable once produced; `confidence` is always within [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    /// Ranked human-readable justification lines
    pub reasons: Vec<String>,
    /// Confidence score in [0, 1], rounded to two decimals
    pub confidence: f64,
    /// Name of the planning approach that produced this selection
    pub algorithm: String,
}

/// One scheduled stop: a place snapshot plus that day's weather and
/// the explanation for selecting it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceVisit {
    pub name: String,
    /// Visit duration in hours
    pub duration: u32,
    pub category: String,
    pub cost_tier: CostTier,
    pub rating: u8,
    pub setting: Setting,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
    /// Weather for the day this visit is scheduled on, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherDay>,
    pub explanation: Explanation,
}

impl PlaceVisit {
    /// Snapshot a catalog place into a scheduled visit
    #[must_use]
    pub fn new(place: &Place, weather: Option<WeatherDay>, explanation: Explanation) -> Self {
        Self {
            name: place.name.clone(),
            duration: place.visit_duration(),
            category: place.category.clone(),
            cost_tier: place.cost_tier,
            rating: place.rating,
            setting: place.setting,
            coordinates: place.coordinates,
            timing: place.timing.clone(),
            weather,
            explanation,
        }
    }
}

/// One day of the itinerary: a label ("Day 1"...) and its ordered visits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub label: String,
    pub visits: Vec<PlaceVisit>,
}

/// A complete multi-day itinerary
///
/// Days are kept in trip order and every day of the request is present,
/// possibly with no visits. No place name appears in more than one visit
/// across the whole itinerary. Serializes as a JSON object mapping day
/// labels to visit lists, preserving day order.
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// Create an empty itinerary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a day's visits under the given label
    pub fn push_day(&mut self, label: String, visits: Vec<PlaceVisit>) {
        self.days.push(ItineraryDay { label, visits });
    }

    /// All days in trip order
    #[must_use]
    pub fn days(&self) -> &[ItineraryDay] {
        &self.days
    }

    /// Visits for a given day label, if present
    #[must_use]
    pub fn day(&self, label: &str) -> Option<&[PlaceVisit]> {
        self.days
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.visits.as_slice())
    }

    /// Total number of scheduled visits across all days
    #[must_use]
    pub fn total_places(&self) -> usize {
        self.days.iter().map(|d| d.visits.len()).sum()
    }

    /// Total scheduled hours across all days
    #[must_use]
    pub fn total_duration(&self) -> u32 {
        self.days
            .iter()
            .flat_map(|d| d.visits.iter())
            .map(|v| v.duration)
            .sum()
    }
}

impl Serialize for Itinerary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.label, &day.visits)?;
        }
        map.end()
    }
}
