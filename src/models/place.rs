//! Place catalog model: points of interest and their metadata

use serde::{Deserialize, Serialize};

/// Default visit length in hours when a place carries no duration
pub const DEFAULT_VISIT_HOURS: u32 = 2;

/// Geographic coordinates of a place
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// Ordered cost classification of a place
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum CostTier {
    Budget,
    #[serde(rename = "Mid-range")]
    MidRange,
    Premium,
}

impl CostTier {
    /// Parse a dataset label, falling back to `Budget` for unknown values
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Mid-range" | "Mid-Range" => Self::MidRange,
            "Premium" | "Luxury" => Self::Premium,
            _ => Self::Budget,
        }
    }

    /// Dataset label for this tier
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::MidRange => "Mid-range",
            Self::Premium => "Premium",
        }
    }
}

impl std::fmt::Display for CostTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Indoor/outdoor affinity of a place
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    Indoor,
    Outdoor,
    Both,
}

impl Setting {
    /// Parse a dataset label, falling back to `Outdoor` for unknown values
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "indoor" => Self::Indoor,
            "both" => Self::Both,
            _ => Self::Outdoor,
        }
    }

    /// Whether this place can be visited under cover
    #[must_use]
    pub fn has_indoor_option(&self) -> bool {
        matches!(self, Self::Indoor | Self::Both)
    }

    /// Whether this place offers an open-air visit
    #[must_use]
    pub fn has_outdoor_option(&self) -> bool {
        matches!(self, Self::Outdoor | Self::Both)
    }
}

impl std::fmt::Display for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
            Self::Both => "both",
        };
        f.write_str(label)
    }
}

/// A point of interest from the place catalog
///
/// Places are immutable once loaded; the planner only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Place name, unique within the catalog
    pub name: String,
    /// Destination city or district this place belongs to
    pub destination: String,
    /// Free-form category tags (may contain a traveler-type label)
    pub category: String,
    /// Cost classification
    pub cost_tier: CostTier,
    /// Indoor/outdoor affinity
    pub setting: Setting,
    /// Popularity rating, 0-5
    pub rating: u8,
    /// Visit duration in hours, when known
    pub duration_hours: Option<u32>,
    /// Coordinates, when known; absence disables route sequencing
    pub coordinates: Option<Coordinates>,
    /// Advisory timing hint (e.g. "morning", "sunset")
    pub timing: Option<String>,
}

impl Place {
    /// Effective visit duration in hours
    #[must_use]
    pub fn visit_duration(&self) -> u32 {
        self.duration_hours.unwrap_or(DEFAULT_VISIT_HOURS)
    }

    /// Whether the category tags contain the given label as a substring
    #[must_use]
    pub fn category_contains(&self, label: &str) -> bool {
        self.category.contains(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_tier_from_label() {
        assert_eq!(CostTier::from_label("Budget"), CostTier::Budget);
        assert_eq!(CostTier::from_label("Mid-range"), CostTier::MidRange);
        assert_eq!(CostTier::from_label("Premium"), CostTier::Premium);
        assert_eq!(CostTier::from_label("Luxury"), CostTier::Premium);
        assert_eq!(CostTier::from_label("something else"), CostTier::Budget);
    }

    #[test]
    fn test_cost_tier_ordering() {
        assert!(CostTier::Budget < CostTier::MidRange);
        assert!(CostTier::MidRange < CostTier::Premium);
    }

    #[test]
    fn test_setting_options() {
        assert!(Setting::Indoor.has_indoor_option());
        assert!(!Setting::Indoor.has_outdoor_option());
        assert!(Setting::Both.has_indoor_option());
        assert!(Setting::Both.has_outdoor_option());
        assert_eq!(Setting::from_label("BOTH"), Setting::Both);
        assert_eq!(Setting::from_label("unknown"), Setting::Outdoor);
    }

    #[test]
    fn test_visit_duration_default() {
        let place = Place {
            name: "Tea House".to_string(),
            destination: "Kandy".to_string(),
            category: "Foodie".to_string(),
            cost_tier: CostTier::Budget,
            setting: Setting::Indoor,
            rating: 3,
            duration_hours: None,
            coordinates: None,
            timing: None,
        };
        assert_eq!(place.visit_duration(), DEFAULT_VISIT_HOURS);

        let timed = Place {
            duration_hours: Some(4),
            ..place
        };
        assert_eq!(timed.visit_duration(), 4);
    }
}
