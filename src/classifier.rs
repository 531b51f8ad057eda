//! Traveler-type classifier client
//!
//! The classifier is a supervised text model trained and served
//! elsewhere; this module only knows its HTTP contract. Quiz answers go
//! in, a traveler-type label with a confidence number comes out. The
//! planner consumes the label verbatim — nothing here interprets it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClassifierConfig;
use crate::models::TravelerProfile;

/// Quiz answers submitted for traveler-type classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub q1_activity: String,
    pub q2_destination: String,
    pub q3_pace: String,
    pub q4_accommodation: String,
    pub q5_souvenir: String,
    pub q6_evening: String,
    pub q7_motivation: String,
}

/// HTTP client for the external classifier service
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    client: reqwest::Client,
    base_url: String,
}

impl ClassifierClient {
    /// Create a client against the configured classifier service
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(u64::from(
                config.timeout_seconds,
            )))
            .build()
            .with_context(|| "Failed to create classifier HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Classify quiz answers into a traveler profile
    pub async fn classify(&self, answers: &QuizAnswers) -> Result<TravelerProfile> {
        let url = format!("{}/predict", self.base_url);
        debug!(url = %url, "requesting traveler classification");

        let response = self
            .client
            .post(&url)
            .json(answers)
            .send()
            .await
            .with_context(|| "Classifier request failed")?
            .error_for_status()
            .with_context(|| "Classifier returned an error status")?;

        let profile: TravelerProfile = response
            .json()
            .await
            .with_context(|| "Failed to parse classifier response")?;

        debug!(
            traveler_type = %profile.traveler_type,
            confidence = profile.confidence,
            "traveler classified"
        );
        Ok(profile)
    }
}
