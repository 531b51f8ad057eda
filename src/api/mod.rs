//! HTTP API surface for the itinerary service
//!
//! Request validation happens here, before the planner runs: the engine
//! assumes well-formed input, so structurally missing fields (district,
//! days, budget, traveler type) are rejected with 400 at this boundary.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::error;

use crate::catalog::Catalog;
use crate::classifier::{ClassifierClient, QuizAnswers};
use crate::config::TripWeaverConfig;
use crate::models::{BudgetTier, Itinerary, TravelerProfile, TripRequest, WeatherDay};
use crate::{TripWeaverError, planner, weather};

/// Shared, read-only state behind every request handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<TripWeaverConfig>,
    pub http: reqwest::Client,
    pub classifier: ClassifierClient,
}

impl AppState {
    /// Assemble the shared state from loaded config and catalog
    pub fn new(catalog: Catalog, config: TripWeaverConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(u64::from(
                config.weather.timeout_seconds,
            )))
            .build()?;
        let classifier = ClassifierClient::new(&config.classifier)?;

        Ok(Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            http,
            classifier,
        })
    }
}

/// Trip generation request: the trip parameters plus the traveler profile
/// produced upstream by the classifier
#[derive(Debug, Deserialize)]
pub struct GenerateTripRequest {
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(rename = "latestTrip")]
    pub latest_trip: TripRequest,
    #[serde(rename = "travelerProfile")]
    pub traveler_profile: TravelerProfile,
}

/// Summary statistics for a generated trip
#[derive(Debug, Serialize)]
pub struct TripStats {
    #[serde(rename = "totalPlaces")]
    pub total_places: usize,
    #[serde(rename = "totalDuration")]
    pub total_duration: u32,
    #[serde(rename = "averagePlacesPerDay")]
    pub average_places_per_day: f64,
}

/// Full trip generation response payload
#[derive(Debug, Serialize)]
pub struct GenerateTripResponse {
    pub success: bool,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub district: String,
    pub days: u32,
    pub budget: BudgetTier,
    #[serde(rename = "travelWith", skip_serializing_if = "Option::is_none")]
    pub travel_with: Option<String>,
    #[serde(rename = "travelerType")]
    pub traveler_type: String,
    #[serde(rename = "weatherForecast")]
    pub weather_forecast: Vec<WeatherDay>,
    pub itinerary: Itinerary,
    pub stats: TripStats,
}

/// Error response carrying a status code and a JSON body
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_gateway<S: Into<String>>(message: S) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }
}

impl From<TripWeaverError> for ApiError {
    fn from(err: TripWeaverError) -> Self {
        let status = match &err {
            TripWeaverError::Validation { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.user_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generate-trip", post(generate_trip))
        .route("/classify", post(classify))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "TripWeaver",
        "places_loaded": !state.catalog.is_empty(),
        "places_count": state.catalog.len(),
        "catalog_loaded_at": state.catalog.loaded_at().to_rfc3339(),
        "weather_api_configured": state.config.weather.api_key.is_some(),
        "features": [
            "traveler-type classification",
            "constraint-based place selection",
            "weather-aware daily planning",
            "nearest-neighbour route ordering",
            "explainable recommendations",
        ],
    }))
}

async fn generate_trip(
    State(state): State<AppState>,
    Json(payload): Json<GenerateTripRequest>,
) -> Result<Json<GenerateTripResponse>, ApiError> {
    payload.latest_trip.validate().map_err(ApiError::from)?;
    payload.traveler_profile.validate().map_err(ApiError::from)?;

    let trip = &payload.latest_trip;
    let forecast = weather::fetch_forecast(
        &state.http,
        &state.config.weather,
        &trip.district,
        trip.days,
    )
    .await;

    let plan = planner::plan_trip(
        state.catalog.places(),
        trip,
        &payload.traveler_profile,
        forecast,
    );

    let total_places = plan.itinerary.total_places();
    let stats = TripStats {
        total_places,
        total_duration: plan.itinerary.total_duration(),
        average_places_per_day: round1(total_places as f64 / f64::from(trip.days)),
    };

    Ok(Json(GenerateTripResponse {
        success: true,
        user_id: payload.user_id,
        district: trip.district.clone(),
        days: trip.days,
        budget: trip.budget,
        travel_with: trip.travel_with.clone(),
        traveler_type: payload.traveler_profile.traveler_type.clone(),
        weather_forecast: plan.forecast,
        itinerary: plan.itinerary,
        stats,
    }))
}

async fn classify(
    State(state): State<AppState>,
    Json(answers): Json<QuizAnswers>,
) -> Result<Json<TravelerProfile>, ApiError> {
    match state.classifier.classify(&answers).await {
        Ok(profile) => Ok(Json(profile)),
        Err(err) => {
            error!(error = %format!("{err:#}"), "classifier call failed");
            Err(ApiError::bad_gateway(
                "Traveler classification service is unavailable",
            ))
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
