use crate::ai::error::{DescriptionGenerationFailed, GeminiError, RankingUnavailable};
use crate::ai::traits::{DescriptionService, RankingService};
use crate::ai::types::{DescriptionRequest, RankedIds, RankingRequest};
use crate::config::Config;
use crate::models::Listing;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Gemini `generateContent` client used for both ranking and copywriting
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        Some(text).filter(|t| !t.is_empty())
    }
}

impl GeminiClient {
    /// Create a client from application config
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Single generateContent round trip. No retries.
    async fn generate(
        &self,
        prompt: String,
        generation_config: Option<GenerationConfig>,
    ) -> std::result::Result<Option<String>, GeminiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GeminiError::Config("No Gemini API key configured".into()))?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config,
        };

        let start = Instant::now();
        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api(format!("Gemini returned {}: {}", status, error_text)));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        debug!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini generateContent"
        );

        Ok(body.text())
    }
}

/// JSON schema forcing `{ "ids": [string, ...] }`
pub fn ranking_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "ids": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Ordered list of matching listing IDs"
            }
        },
        "required": ["ids"]
    })
}

pub fn ranking_prompt(request: &RankingRequest) -> std::result::Result<String, GeminiError> {
    let database = serde_json::to_string(&request.listings)
        .map_err(|e| GeminiError::Parse(format!("Failed to serialize listings: {}", e)))?;

    Ok(format!(
        "You are a helpful travel assistant for campervan owners.\n\
         The user is searching for a parking spot with this query: \"{}\"\n\n\
         Here is the database of available spots:\n\
         {}\n\n\
         Rank the spots based on how well they match the user's intent.\n\
         Return a JSON object containing an array of IDs in order of relevance.\n\
         Only return the JSON.",
        request.query, database
    ))
}

pub fn description_prompt(request: &DescriptionRequest) -> String {
    format!(
        "You are a professional copywriter for a premium camping and parking rental site (like Airbnb for campervans).\n\
         Write a short, inviting, and warm description (max 80 words) for a parking space with the following details:\n\
         - Location: {}\n\
         - Type: {}\n\
         - Key Features: {}\n\
         - Desired Vibe: {}\n\n\
         Do not use hashtags. Focus on the experience.",
        request.location,
        request.spot_type,
        request.features.join(", "),
        request.vibe
    )
}

/// Strictly parse model output as `{ "ids": [string, ...] }`
pub fn parse_ranked_ids(text: &str) -> std::result::Result<Vec<String>, GeminiError> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| GeminiError::Parse(format!("Ranking output is not JSON: {}", e)))?;

    if !value.is_object() {
        return Err(GeminiError::Parse(format!(
            "Ranking output is not an object: {}",
            value
        )));
    }

    let ranked: RankedIds = serde_json::from_value(value)
        .map_err(|e| GeminiError::Parse(format!("Ranking output has wrong shape: {}", e)))?;

    Ok(ranked.ids)
}

#[async_trait]
impl RankingService for GeminiClient {
    async fn rank(
        &self,
        query: &str,
        listings: &[Listing],
    ) -> std::result::Result<Vec<String>, RankingUnavailable> {
        if !self.has_credentials() {
            return Err(RankingUnavailable::new("No Gemini API key configured"));
        }

        let request = RankingRequest::new(query, listings);
        let prompt = ranking_prompt(&request)?;

        info!(query = %query, candidates = listings.len(), "Requesting ranking from Gemini");

        let text = self
            .generate(
                prompt,
                Some(GenerationConfig {
                    response_mime_type: "application/json".to_string(),
                    response_schema: ranking_schema(),
                }),
            )
            .await?
            .ok_or_else(|| RankingUnavailable::new("Gemini returned no ranking text"))?;

        let ids = parse_ranked_ids(&text)?;
        debug!(ranked = ids.len(), "Gemini ranking parsed");
        Ok(ids)
    }

    fn name(&self) -> &'static str {
        "Gemini"
    }
}

#[async_trait]
impl DescriptionService for GeminiClient {
    async fn describe(
        &self,
        request: &DescriptionRequest,
    ) -> std::result::Result<String, DescriptionGenerationFailed> {
        if !self.has_credentials() {
            return Err(DescriptionGenerationFailed::MissingCredentials);
        }

        info!(location = %request.location, spot_type = %request.spot_type, "Generating listing description");

        self.generate(description_prompt(request), None)
            .await?
            .ok_or(DescriptionGenerationFailed::EmptyResponse)
    }
}
