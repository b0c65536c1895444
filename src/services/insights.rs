//! Narrative summaries of the report collection from the Gemini
//! `generateContent` API.
//!
//! A summary never fails from the caller's point of view. A missing key,
//! a transport error or an empty reply each degrade to a fixed sentinel
//! text, and [`InsightOutcome`] keeps the distinction so a sentinel is
//! never mistaken for generated content.

use crate::config::insights::InsightsConfig;
use crate::error::{AppError, AppResult};
use crate::models::SchoolReport;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, RwLock,
};
use utoipa::ToSchema;

pub const UNAVAILABLE_MESSAGE: &str = "AI Insights unavailable: Missing API Key.";
pub const FAILED_MESSAGE: &str = "Error generating AI insights. Please check connection.";
pub const EMPTY_MESSAGE: &str = "No insights could be generated.";

const PROMPT_TEMPLATE: &str = "As a UNICEF Pakistan Education Specialist, analyze these school issue reports:
{reports}

Please provide:
1. A executive summary of the most critical trends across provinces.
2. Specific recommendations for UNICEF field teams.
3. Suggested priorities for government engagement.
Keep the tone professional and action-oriented.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightOutcome {
    Generated(String),
    /// No API key configured; no request was made
    Unavailable,
    /// The service answered without any text
    Empty,
    /// Transport or remote error, with diagnostic detail
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InsightStatus {
    Generated,
    Unavailable,
    Empty,
    Failed,
}

impl InsightOutcome {
    /// Text shown to the reader: the narrative, or the matching sentinel.
    pub fn text(&self) -> &str {
        match self {
            InsightOutcome::Generated(text) => text,
            InsightOutcome::Unavailable => UNAVAILABLE_MESSAGE,
            InsightOutcome::Empty => EMPTY_MESSAGE,
            InsightOutcome::Failed(_) => FAILED_MESSAGE,
        }
    }

    pub fn status(&self) -> InsightStatus {
        match self {
            InsightOutcome::Generated(_) => InsightStatus::Generated,
            InsightOutcome::Unavailable => InsightStatus::Unavailable,
            InsightOutcome::Empty => InsightStatus::Empty,
            InsightOutcome::Failed(_) => InsightStatus::Failed,
        }
    }
}

/// Fill the prompt template with the JSON form of the report collection.
pub fn build_prompt(reports: &[SchoolReport]) -> serde_json::Result<String> {
    let serialized = serde_json::to_string(reports)?;
    Ok(PROMPT_TEMPLATE.replace("{reports}", &serialized))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, thought parts skipped.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter(|p| !p.thought)
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct InsightsClient {
    http: reqwest::Client,
    config: InsightsConfig,
}

impl InsightsClient {
    pub fn new(config: InsightsConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client for insights")?;
        Ok(Self { http, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub async fn summarize(&self, reports: &[SchoolReport]) -> InsightOutcome {
        let Some(api_key) = self.config.api_key.as_deref() else {
            tracing::warn!("Gemini API key not configured, skipping insight generation");
            return InsightOutcome::Unavailable;
        };

        let prompt = match build_prompt(reports) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::error!("Failed to serialize reports for prompt: {:?}", e);
                return InsightOutcome::Failed(e.to_string());
            }
        };

        match self.generate(api_key, &prompt).await {
            Ok(text) if text.is_empty() => {
                tracing::warn!("Gemini returned no text");
                InsightOutcome::Empty
            }
            Ok(text) => InsightOutcome::Generated(text),
            Err(e) => {
                tracing::error!("Gemini error: {:#}", e);
                InsightOutcome::Failed(format!("{:#}", e))
            }
        }
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> anyhow::Result<String> {
        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "Requesting insights");

        let resp = self
            .http
            .post(self.config.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await
            .context("request to Gemini failed")?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Gemini returned {}: {}", status, detail));
        }

        let parsed: GenerateContentResponse = resp
            .json()
            .await
            .context("invalid Gemini response body")?;
        Ok(parsed.text())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InsightRecord {
    pub status: InsightStatus,
    /// Narrative text, or the sentinel for a degraded outcome
    pub text: String,
    pub model: String,
    /// Size of the report snapshot the analysis was run over
    pub report_count: u64,
    pub generated_at: DateTime<Utc>,
}

/// Clears the busy flag when dropped, including when the request future is
/// cancelled mid-call.
struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag: flag.clone() })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Runs summaries one at a time and remembers the most recent result.
#[derive(Clone)]
pub struct InsightsService {
    client: InsightsClient,
    busy: Arc<AtomicBool>,
    latest: Arc<RwLock<Option<InsightRecord>>>,
}

impl InsightsService {
    pub fn new(client: InsightsClient) -> Self {
        Self {
            client,
            busy: Arc::new(AtomicBool::new(false)),
            latest: Arc::new(RwLock::new(None)),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn latest(&self) -> Option<InsightRecord> {
        self.latest
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Summarize a report snapshot. A second call while one is pending is
    /// rejected with [`AppError::Busy`] and never reaches the client.
    pub async fn generate(&self, reports: Vec<SchoolReport>) -> AppResult<InsightRecord> {
        let _guard = BusyGuard::acquire(&self.busy).ok_or(AppError::Busy)?;

        let outcome = self.client.summarize(&reports).await;
        let record = InsightRecord {
            status: outcome.status(),
            text: outcome.text().to_string(),
            model: self.client.model().to_string(),
            report_count: reports.len() as u64,
            generated_at: Utc::now(),
        };

        *self
            .latest
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(record.clone());

        tracing::info!(status = ?record.status, reports = record.report_count, "Insight analysis finished");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed;

    #[test]
    fn prompt_embeds_serialized_reports() {
        let reports = seed::initial_reports();
        let prompt = build_prompt(&reports).unwrap();

        assert!(prompt.starts_with("As a UNICEF Pakistan Education Specialist"));
        assert!(prompt.contains("\"school_name\":\"Govt High School No. 1\""));
        assert!(prompt.contains("\"category\":\"WASH\""));
        assert!(!prompt.contains("{reports}"));
    }

    #[test]
    fn prompt_for_empty_collection() {
        let prompt = build_prompt(&[]).unwrap();
        assert!(prompt.contains("reports:\n[]\n"));
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::new("hello")).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(
            body["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            0
        );
    }

    #[test]
    fn response_text_joins_parts_and_skips_thoughts() {
        let resp: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "planning", "thought": true },
                        { "text": "Summary. " },
                        { "text": "Recommendations." }
                    ]
                },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(resp.text(), "Summary. Recommendations.");
    }

    #[test]
    fn response_without_candidates_is_empty() {
        let resp: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "promptFeedback": {} })).unwrap();
        assert!(resp.text().is_empty());
    }

    #[test]
    fn sentinels_per_outcome() {
        assert_eq!(InsightOutcome::Unavailable.text(), UNAVAILABLE_MESSAGE);
        assert_eq!(InsightOutcome::Empty.text(), EMPTY_MESSAGE);
        assert_eq!(
            InsightOutcome::Failed("timeout".into()).text(),
            FAILED_MESSAGE
        );
        assert_eq!(InsightOutcome::Generated("ok".into()).text(), "ok");
        assert_eq!(
            InsightOutcome::Failed(String::new()).status(),
            InsightStatus::Failed
        );
    }

    #[tokio::test]
    async fn unconfigured_client_is_unavailable() {
        let client = InsightsClient::new(InsightsConfig::default()).unwrap();
        let outcome = client.summarize(&seed::initial_reports()).await;
        assert_eq!(outcome, InsightOutcome::Unavailable);
    }

    #[test]
    fn busy_guard_is_exclusive_and_released_on_drop() {
        let flag = Arc::new(AtomicBool::new(false));
        let guard = BusyGuard::acquire(&flag).unwrap();
        assert!(BusyGuard::acquire(&flag).is_none());
        drop(guard);
        assert!(BusyGuard::acquire(&flag).is_some());
    }

    #[tokio::test]
    async fn service_records_latest_outcome() {
        let client = InsightsClient::new(InsightsConfig::default()).unwrap();
        let service = InsightsService::new(client);
        assert!(service.latest().is_none());

        let record = service.generate(seed::initial_reports()).await.unwrap();
        assert_eq!(record.status, InsightStatus::Unavailable);
        assert_eq!(record.text, UNAVAILABLE_MESSAGE);
        assert_eq!(record.report_count, 3);
        assert!(!service.is_busy());
        assert_eq!(service.latest().unwrap().status, InsightStatus::Unavailable);
    }
}
