mod prompt;

use crate::error::{Error, Result};
use entity::exercises;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{env, time::Duration};

/// Pause between items of a batch grading run.
pub const BATCH_DELAY: Duration = Duration::from_millis(1000);

pub struct GradingCriteria<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub rubric: Option<&'a str>,
    pub kind: exercises::Kind,
    pub max_score: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AiGrade {
    pub score: f64,
    pub feedback: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub detailed_analysis: String,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

pub struct AiClient {
    enabled: bool,
    api_key: Option<String>,
    base_url: String,
    model: String,
    http: reqwest::Client,
}

impl AiClient {
    pub fn from_env() -> Self {
        Self {
            enabled: matches!(
                env::var("AI_GRADING_ENABLED").as_deref(),
                Ok("1") | Ok("true")
            ),
            api_key: env::var("AI_API_KEY").ok(),
            base_url: env::var("AI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_owned()),
            model: env::var("AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_owned()),
            http: reqwest::Client::new(),
        }
    }

    /// Single chat-completions round trip. Fails fast on every obstacle,
    /// surfacing the provider reason to the caller.
    pub async fn grade(
        &self,
        content: &str,
        extension: Option<&str>,
        criteria: &GradingCriteria<'_>,
    ) -> Result<AiGrade> {
        if !self.enabled {
            return Err(Error::ai_grading("AI grading is disabled"));
        }

        let Some(api_key) = &self.api_key else {
            return Err(Error::ai_grading("API key is not configured"));
        };

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt::SYSTEM },
                { "role": "user", "content": prompt::build(content, extension, criteria) },
            ],
            "response_format": { "type": "json_object" },
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(Error::ai_grading)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::ai_grading(format!(
                "provider returned {status}: {text}"
            )));
        }

        let completion = response
            .json::<ChatCompletion>()
            .await
            .map_err(Error::ai_grading)?;

        let Some(choice) = completion.choices.into_iter().next() else {
            return Err(Error::ai_grading("provider returned no choices"));
        };

        let mut grade = serde_json::from_str::<AiGrade>(&choice.message.content)
            .map_err(|err| Error::ai_grading(format!("unparsable model output: {err}")))?;

        grade.score = grade.score.clamp(0.0, criteria.max_score);
        grade.confidence = grade.confidence.clamp(0.0, 1.0);

        Ok(grade)
    }
}
