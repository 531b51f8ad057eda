//! Trip request and traveler profile models

use serde::{Deserialize, Serialize};

use super::place::CostTier;
use crate::TripWeaverError;

/// Requested spending level for a trip
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetTier {
    Limited,
    Moderate,
    Luxury,
}

impl BudgetTier {
    /// Cost tiers a place may carry under this budget
    #[must_use]
    pub fn allowed_cost_tiers(&self) -> &'static [CostTier] {
        match self {
            Self::Limited => &[CostTier::Budget],
            Self::Moderate => &[CostTier::Budget, CostTier::MidRange],
            Self::Luxury => &[CostTier::Budget, CostTier::MidRange, CostTier::Premium],
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Limited => "LIMITED",
            Self::Moderate => "MODERATE",
            Self::Luxury => "LUXURY",
        };
        f.write_str(label)
    }
}

/// One trip planning request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination district; must exact-match a place's destination field
    pub district: String,
    /// Number of trip days
    pub days: u32,
    /// Requested budget tier
    pub budget: BudgetTier,
    /// Travel companions (advisory only, not filtered on)
    #[serde(rename = "travelWith", default)]
    pub travel_with: Option<String>,
}

impl TripRequest {
    /// Check the structural fields the planner assumes are present
    pub fn validate(&self) -> Result<(), TripWeaverError> {
        if self.district.trim().is_empty() {
            return Err(TripWeaverError::validation("district cannot be empty"));
        }
        if self.days == 0 {
            return Err(TripWeaverError::validation("days must be at least 1"));
        }
        Ok(())
    }
}

/// Traveler profile produced by the upstream classifier
///
/// The classifier is a black box to this service; only its label and
/// confidence are consumed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelerProfile {
    /// Traveler type label, matched against place categories
    #[serde(rename = "travelerType")]
    pub traveler_type: String,
    /// Classifier confidence in [0, 1]
    pub confidence: f64,
    /// Classifier description of the traveler type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Suggested destinations for this traveler type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
}

impl TravelerProfile {
    /// Check the structural fields the planner assumes are present
    pub fn validate(&self) -> Result<(), TripWeaverError> {
        if self.traveler_type.trim().is_empty() {
            return Err(TripWeaverError::validation("travelerType cannot be empty"));
        }
        Ok(())
    }
}
