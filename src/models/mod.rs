//! Data models for the TripWeaver application
//!
//! This module contains the core domain models organized by concern:
//! - Place: catalog entries with cost, setting, and rating metadata
//! - Trip: trip requests and traveler profiles
//! - Weather: daily forecast entries and condition classification
//! - Itinerary: per-day visit plans with explanations

pub mod itinerary;
pub mod place;
pub mod trip;
pub mod weather;

// Re-export all public types for convenient access
pub use itinerary::{Explanation, Itinerary, ItineraryDay, PlaceVisit};
pub use place::{Coordinates, CostTier, Place, Setting};
pub use trip::{BudgetTier, TravelerProfile, TripRequest};
pub use weather::{WeatherCondition, WeatherDay};
