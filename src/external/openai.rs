use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::error::{credential_error, invalid_input_error, upstream_error, Error};

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Clone, Debug)]
pub struct OpenAi {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl OpenAi {
    pub fn new(api_key: String, api_base: String, model: String) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(OpenAi {
            client,
            api_key,
            api_base,
            model,
        })
    }

    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var("OPENAI_API_KEY")?;
        let api_base = env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        Self::new(api_key, api_base, model)
    }

    /// Single-turn chat completion: one system message, one user message.
    #[tracing::instrument(skip(self, system, user))]
    pub async fn chat(&self, system: &str, user: &str, temperature: f32) -> Result<String, Error> {
        let url = format!("{}/chat/completions", self.api_base);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
        };

        let res = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code == 401 || status_code == 403 {
            return Err(credential_error());
        } else if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: ChatResponse = res.json().await?;

        let content = data
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| upstream_error())?;

        Ok(content.trim().to_string())
    }
}
