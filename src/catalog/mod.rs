//! Place catalog loading and merging
//!
//! The catalog is assembled from three CSV datasets sharing a
//! `place_name` key: the core place list, a metadata file carrying the
//! indoor/outdoor setting and popularity rating, and a coordinates file.
//! Metadata and coordinates are optional per place — missing rows
//! degrade to defaults (rating 0, outdoor setting, no coordinates)
//! rather than dropping the place.
//!
//! Loaded once at startup and shared read-only across requests.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::{Coordinates, CostTier, Place, Setting};

const PLACES_FILE: &str = "places_dataset.csv";
const METADATA_FILE: &str = "place_metadata.csv";
const COORDINATES_FILE: &str = "place_coordinates.csv";

/// Row of the core place dataset
#[derive(Debug, Deserialize)]
struct PlaceRow {
    place_name: String,
    destination_city: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    cost_category: Option<String>,
    #[serde(default)]
    duration_hours: Option<u32>,
    #[serde(default)]
    timing: Option<String>,
}

/// Row of the metadata dataset
#[derive(Debug, Deserialize)]
struct MetadataRow {
    place_name: String,
    #[serde(default)]
    indoor_outdoor: Option<String>,
    #[serde(default)]
    popularity_rating: Option<u8>,
}

/// Row of the coordinates dataset
#[derive(Debug, Deserialize)]
struct CoordinateRow {
    place_name: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

/// The immutable, process-wide place catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<Place>,
    /// When this catalog was read from disk
    loaded_at: DateTime<Utc>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            places: Vec::new(),
            loaded_at: Utc::now(),
        }
    }
}

impl Catalog {
    /// Build a catalog from already-merged places (primarily for tests)
    #[must_use]
    pub fn from_places(places: Vec<Place>) -> Self {
        Self {
            places,
            loaded_at: Utc::now(),
        }
    }

    /// Load and merge the three CSV datasets from a data directory
    ///
    /// A missing core dataset yields an empty catalog with a warning —
    /// a legal but degraded state. Missing metadata or coordinate files
    /// only cost their respective columns.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let places_path = data_dir.join(PLACES_FILE);
        if !places_path.exists() {
            warn!(
                path = %places_path.display(),
                "place dataset not found, starting with an empty catalog"
            );
            return Ok(Self::default());
        }

        let rows = read_rows::<PlaceRow>(&places_path)?;
        let metadata = read_optional_rows::<MetadataRow>(&data_dir.join(METADATA_FILE));
        let coordinates = read_optional_rows::<CoordinateRow>(&data_dir.join(COORDINATES_FILE));

        let catalog = Self {
            places: merge_rows(rows, &metadata, &coordinates),
            loaded_at: Utc::now(),
        };
        info!(
            places = catalog.len(),
            dir = %data_dir.display(),
            "place catalog loaded"
        );
        Ok(catalog)
    }

    /// All places in catalog order
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// When this catalog was read from disk
    #[must_use]
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open dataset {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T =
            record.with_context(|| format!("Malformed row in {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Read a supplementary dataset, tolerating its absence entirely
fn read_optional_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Vec<T> {
    if !path.exists() {
        warn!(path = %path.display(), "supplementary dataset not found, skipping");
        return Vec::new();
    }
    match read_rows(path) {
        Ok(rows) => rows,
        Err(err) => {
            warn!(path = %path.display(), error = %format!("{err:#}"), "failed to read dataset, skipping");
            Vec::new()
        }
    }
}

/// Left-join metadata and coordinates onto the core place rows
fn merge_rows(
    rows: Vec<PlaceRow>,
    metadata: &[MetadataRow],
    coordinates: &[CoordinateRow],
) -> Vec<Place> {
    let metadata_by_name: HashMap<&str, &MetadataRow> = metadata
        .iter()
        .map(|m| (m.place_name.as_str(), m))
        .collect();
    let coordinates_by_name: HashMap<&str, &CoordinateRow> = coordinates
        .iter()
        .map(|c| (c.place_name.as_str(), c))
        .collect();

    rows.into_iter()
        .map(|row| {
            let meta = metadata_by_name.get(row.place_name.as_str());
            let coords = coordinates_by_name.get(row.place_name.as_str());

            let setting = meta
                .and_then(|m| m.indoor_outdoor.as_deref())
                .map(Setting::from_label)
                .unwrap_or(Setting::Outdoor);
            let rating = meta.and_then(|m| m.popularity_rating).unwrap_or(0);
            let coordinates = coords.and_then(|c| match (c.latitude, c.longitude) {
                (Some(latitude), Some(longitude)) => Some(Coordinates {
                    latitude,
                    longitude,
                }),
                _ => None,
            });

            Place {
                name: row.place_name,
                destination: row.destination_city,
                category: row.category.unwrap_or_default(),
                cost_tier: row
                    .cost_category
                    .as_deref()
                    .map(CostTier::from_label)
                    .unwrap_or(CostTier::Budget),
                setting,
                rating: rating.min(5),
                duration_hours: row.duration_hours,
                coordinates,
                timing: row.timing,
            }
        })
        .collect()
}
