//! `TripWeaver` - Constraint-aware multi-day trip itinerary planning
//!
//! This library provides the core functionality for building multi-day
//! travel itineraries: candidate pool filtering with progressive
//! constraint relaxation, weather-aware daily place allocation, greedy
//! nearest-neighbour route sequencing, and explainable recommendation
//! scoring, along with the service plumbing around the engine.

pub mod api;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod planner;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use catalog::Catalog;
pub use classifier::{ClassifierClient, QuizAnswers};
pub use config::TripWeaverConfig;
pub use error::TripWeaverError;
pub use models::{
    BudgetTier, CostTier, Explanation, Itinerary, Place, PlaceVisit, Setting, TravelerProfile,
    TripRequest, WeatherCondition, WeatherDay,
};
pub use planner::{TripPlan, plan_trip};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripWeaverError>;
