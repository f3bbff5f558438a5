use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::NarrativeSettings;
use crate::errors::internal::NarrativeError;
use crate::errors::InternalError;
use crate::types::db::{application, cadet};
use crate::types::internal::narrative::{NarrativeAnalysis, StructuredAssessment};

pub const APPLICATION_FALLBACK: &str = "Analysis could not be completed";
pub const CADET_FALLBACK: &str = "Insights could not be generated";

/// Single-turn text completion against a language model
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Whether credentials are present; reported by the health check
    fn is_configured(&self) -> bool;

    /// Returns `None` when the model produced no content
    async fn complete(&self, prompt: &str) -> Result<Option<String>, InternalError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatReply>,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// OpenAI-compatible chat-completions client
pub struct ChatCompletionsClient {
    http_client: reqwest::Client,
    settings: NarrativeSettings,
    api_key: Option<String>,
}

impl ChatCompletionsClient {
    pub fn new(settings: NarrativeSettings, api_key: Option<String>) -> Result<Self, InternalError> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|source| NarrativeError::Request { source })?;

        Ok(Self {
            http_client,
            settings,
            api_key,
        })
    }
}

#[async_trait]
impl NarrativeGenerator for ChatCompletionsClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, prompt: &str) -> Result<Option<String>, InternalError> {
        let api_key = self.api_key.as_deref().ok_or(NarrativeError::NotConfigured)?;

        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!("Requesting completion from {} ({})", self.settings.api_url, self.settings.model);

        let response = self
            .http_client
            .post(&self.settings.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|source| NarrativeError::Request { source })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(NarrativeError::Status { status, body }.into());
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|source| NarrativeError::Decode { source })?;

        Ok(reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty()))
    }
}

/// Builds staff-facing prompts and shapes the model's reply
pub struct NarrativeProvider {
    generator: Arc<dyn NarrativeGenerator>,
}

impl NarrativeProvider {
    pub fn new(generator: Arc<dyn NarrativeGenerator>) -> Self {
        Self { generator }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_configured()
    }

    pub async fn analyze_application(&self, application: &application::Model) -> Result<NarrativeAnalysis, InternalError> {
        let prompt = application_prompt(application);
        let reply = self.generator.complete(&prompt).await?;
        Ok(shape_reply(reply, APPLICATION_FALLBACK))
    }

    pub async fn cadet_insights(&self, cadet: &cadet::Model) -> Result<NarrativeAnalysis, InternalError> {
        let prompt = cadet_prompt(cadet);
        let reply = self.generator.complete(&prompt).await?;
        Ok(shape_reply(reply, CADET_FALLBACK))
    }
}

const JSON_INSTRUCTIONS: &str = "Reply with a single JSON object using these keys: \
\"suitability_score\" (number from 1 to 10), \"summary\" (string), \"strengths\", \
\"risk_factors\", \"recommendations\" and \"mentorship_focus\" (arrays of strings).";

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or(placeholder)
}

pub(crate) fn application_prompt(app: &application::Model) -> String {
    format!(
        "Assess this Youth Challenge Academy application for staff review: the applicant's \
suitability, likely challenges, and what would help them succeed.\n\n\
Applicant: {} {}\n\
Date of birth: {}\n\
Location: {}, {}\n\
Current school: {}\n\
Grade level: {}\n\n\
Reason for applying:\n{}\n\n\
Previous challenges:\n{}\n\n\
Goals:\n{}\n\n{}",
        app.first_name,
        app.last_name,
        app.date_of_birth,
        app.city,
        app.state,
        or_placeholder(&app.current_school, "Not specified"),
        or_placeholder(&app.grade_level, "Not specified"),
        or_placeholder(&app.reason_for_applying, "Not provided"),
        or_placeholder(&app.previous_challenges, "Not provided"),
        or_placeholder(&app.goals, "Not provided"),
        JSON_INSTRUCTIONS,
    )
}

pub(crate) fn cadet_prompt(cadet: &cadet::Model) -> String {
    let class = cadet
        .class_number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "Unassigned".to_string());

    format!(
        "Write development insights for this Youth Challenge Academy cadet: overall \
assessment, strengths, areas to improve, concrete actions, mentorship suggestions and \
risks to monitor.\n\n\
Cadet: {} {}\n\
Class: {}\n\
Campus: {}\n\
Status: {}\n\n\
Progress:\n\
- Academic: {}%\n\
- Physical fitness: {}%\n\
- Leadership: {}%\n\
- Community service hours: {}\n\n\
Notes:\n{}\n\n{}",
        cadet.first_name,
        cadet.last_name,
        class,
        cadet.campus,
        cadet.status,
        cadet.academic_progress.unwrap_or(0.0),
        cadet.fitness_progress.unwrap_or(0.0),
        cadet.leadership_progress.unwrap_or(0.0),
        cadet.service_hours.unwrap_or(0),
        or_placeholder(&cadet.notes, "No additional notes"),
        JSON_INSTRUCTIONS,
    )
}

/// Best-effort extraction of the JSON object embedded in a reply
pub(crate) fn parse_reply(text: &str) -> NarrativeAnalysis {
    let candidate = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => return NarrativeAnalysis::Raw(text.to_string()),
    };

    match serde_json::from_str::<StructuredAssessment>(candidate) {
        Ok(assessment) if assessment != StructuredAssessment::default() => {
            NarrativeAnalysis::Structured(assessment)
        }
        Ok(_) => NarrativeAnalysis::Raw(text.to_string()),
        Err(e) => {
            tracing::debug!("Narrative reply is not structured: {}", e);
            NarrativeAnalysis::Raw(text.to_string())
        }
    }
}

fn shape_reply(reply: Option<String>, fallback: &str) -> NarrativeAnalysis {
    match reply {
        Some(text) => parse_reply(&text),
        None => NarrativeAnalysis::Raw(fallback.to_string()),
    }
}

#[cfg(test)]
#[path = "narrative_provider_test.rs"]
mod narrative_provider_test;
