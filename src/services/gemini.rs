use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::GeminiSettings;
use crate::content::quests::Quest;
use crate::errors::internal::AssistantError;
use crate::types::internal::assistant::{ChatReply, ChatTurn, CodeEvaluation, Hint, Roadmap};

/// Abstraction over the generative model API, enabling test doubles
///
/// One call is one request: retries, backoff, and streaming are all outside
/// the design.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Generate a JSON document conforming to `response_schema` from the
    /// given prompt, returned as raw text
    async fn generate(
        &self,
        prompt: &str,
        response_schema: serde_json::Value,
    ) -> Result<String, AssistantError>;
}

/// HTTP client for the Google Generative Language API
pub struct GeminiClient {
    http: reqwest::Client,
    settings: GeminiSettings,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Result<Self, AssistantError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { http, settings })
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        response_schema: serde_json::Value,
    ) -> Result<String, AssistantError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        );

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema,
            }
        });

        tracing::debug!(model = %self.settings.model, "Sending generateContent request");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.settings.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = serde_json::from_str(&response.text().await?)?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(AssistantError::EmptyResponse)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Thin wrapper functions over the model API for each learner-facing action
///
/// Each builds a prompt plus response schema, performs one call, and parses
/// the JSON text. Hint and chat degrade to a canned fallback on failure;
/// code evaluation and roadmap generation propagate the error.
pub struct GeminiService {
    client: Arc<dyn GenerativeClient>,
}

impl GeminiService {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    /// Grade a code submission against the quest objective
    pub async fn evaluate_code(
        &self,
        quest: &Quest,
        code: &str,
    ) -> Result<CodeEvaluation, AssistantError> {
        let prompt = format!(
            "You are grading a learner's Python submission for the quest \
             \"{title}\".\n\nObjective: {objective}\n\nSubmission:\n```python\n{code}\n```\n\n\
             Decide whether the submission satisfies the objective. Be strict about \
             correctness but ignore style. Give feedback in 2-3 sentences addressed \
             to the learner.",
            title = quest.title,
            objective = quest.objective,
            code = code,
        );

        let schema = json!({
            "type": "object",
            "properties": {
                "passed": { "type": "boolean" },
                "feedback": { "type": "string" }
            },
            "required": ["passed", "feedback"]
        });

        let text = self.client.generate(&prompt, schema).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Generate a hint for a stuck learner; degrades to a canned hint when
    /// the model call fails
    pub async fn generate_hint(&self, quest: &Quest, code: &str) -> Hint {
        match self.try_generate_hint(quest, code).await {
            Ok(hint) => hint,
            Err(e) => {
                tracing::error!(quest_id = quest.id, error = %e, "Hint generation failed");
                Hint {
                    hint: format!(
                        "Re-read the lesson for \"{}\" and compare your code against the \
                         objective step by step.",
                        quest.title
                    ),
                }
            }
        }
    }

    async fn try_generate_hint(&self, quest: &Quest, code: &str) -> Result<Hint, AssistantError> {
        let prompt = format!(
            "A learner is stuck on the quest \"{title}\".\n\nObjective: {objective}\n\n\
             Their current code:\n```python\n{code}\n```\n\n\
             Give one specific, encouraging hint that moves them forward without \
             revealing the full solution.",
            title = quest.title,
            objective = quest.objective,
            code = code,
        );

        let schema = json!({
            "type": "object",
            "properties": {
                "hint": { "type": "string" }
            },
            "required": ["hint"]
        });

        let text = self.client.generate(&prompt, schema).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Generate a career roadmap as an ordered tech-tree of stages
    pub async fn generate_roadmap(
        &self,
        goal: &str,
        experience_level: &str,
    ) -> Result<Roadmap, AssistantError> {
        let prompt = format!(
            "Design a learning roadmap toward the career goal \"{goal}\" for someone \
             at the \"{level}\" level. Produce 4 to 6 ordered stages; each stage has \
             a title, a one-paragraph description, and 3 to 5 concrete skills.",
            goal = goal,
            level = experience_level,
        );

        let schema = json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "stages": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "description": { "type": "string" },
                            "skills": {
                                "type": "array",
                                "items": { "type": "string" }
                            }
                        },
                        "required": ["title", "description", "skills"]
                    }
                }
            },
            "required": ["title", "stages"]
        });

        let text = self.client.generate(&prompt, schema).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Answer a free-form learner question; degrades to a canned reply when
    /// the model call fails
    pub async fn chat(&self, message: &str, history: &[ChatTurn]) -> ChatReply {
        match self.try_chat(message, history).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "Chat reply failed");
                ChatReply {
                    reply: "I couldn't reach the assistant just now. Please try again in a \
                            moment."
                        .to_string(),
                }
            }
        }
    }

    async fn try_chat(
        &self,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<ChatReply, AssistantError> {
        let mut transcript = String::new();
        for turn in history {
            transcript.push_str(&format!("{}: {}\n", turn.role, turn.content));
        }

        let prompt = format!(
            "You are PyQuest's study assistant for machine-learning learners. Keep \
             answers short and concrete.\n\nConversation so far:\n{transcript}\n\
             user: {message}\n\nReply to the last user message.",
            transcript = transcript,
            message = message,
        );

        let schema = json!({
            "type": "object",
            "properties": {
                "reply": { "type": "string" }
            },
            "required": ["reply"]
        });

        let text = self.client.generate(&prompt, schema).await?;
        Ok(serde_json::from_str(&text)?)
    }
}
