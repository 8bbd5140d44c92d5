//! HfTextGenerator -- concrete [`TextGenerator`] implementation for
//! Hugging Face Inference API endpoints.
//!
//! Sends requests to `POST {base_url}/models/{model}` with an optional
//! bearer token. The token is wrapped in [`secrecy::SecretString`] and is
//! never logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use banter_core::generate::generator::TextGenerator;
use banter_types::config::GeneratorConfig;
use banter_types::generate::{GenerateError, GenerationParams};

use super::types::{
    EndpointErrorBody, GenerateRequest, GeneratedSequence, RequestOptions, RequestParameters,
};

/// Environment variable holding the optional API token.
pub const TOKEN_ENV_VAR: &str = "HF_API_TOKEN";

/// Hosted text-generation backend speaking the Hugging Face Inference
/// API convention.
///
/// # Token Security
///
/// The API token is stored as a [`SecretString`] and is only exposed when
/// constructing the Authorization header. It never appears in Debug
/// output, Display output, or tracing logs.
pub struct HfTextGenerator {
    client: reqwest::Client,
    token: Option<SecretString>,
    base_url: String,
    model: String,
}

impl HfTextGenerator {
    /// Create a backend from configuration, reading the optional token
    /// from the `HF_API_TOKEN` environment variable.
    ///
    /// Public models work without a token; a token raises rate limits and
    /// unlocks gated models.
    pub fn new(config: &GeneratorConfig) -> Self {
        let token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .map(SecretString::from);
        Self::with_token(config, token)
    }

    /// Create a backend with an explicit (possibly absent) token.
    pub fn with_token(config: &GeneratorConfig, token: Option<SecretString>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            token,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    /// Override the base URL (useful for tests against a local server).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Whether a bearer token will be attached to requests.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }
}

// HfTextGenerator intentionally does NOT derive Debug so the bearer token
// can never leak through debug formatting.

impl TextGenerator for HfTextGenerator {
    fn name(&self) -> &str {
        "huggingface"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerateError> {
        let body = GenerateRequest {
            inputs: prompt.to_string(),
            parameters: RequestParameters {
                sampling: params.clone(),
                return_full_text: true,
            },
            options: RequestOptions {
                wait_for_model: false,
            },
        };

        let mut request = self.client.post(self.url()).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| GenerateError::Http(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => GenerateError::AuthenticationFailed,
                429 => GenerateError::RateLimited,
                503 => map_service_unavailable(&error_body),
                _ => GenerateError::Endpoint {
                    status: status.as_u16(),
                    message: error_body,
                },
            });
        }

        let sequences: Vec<GeneratedSequence> = response.json().await.map_err(|e| {
            GenerateError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        let first = sequences
            .into_iter()
            .next()
            .ok_or(GenerateError::NoSequences)?;
        tracing::debug!(raw_len = first.generated_text.len(), "generation complete");
        Ok(first.generated_text)
    }
}

/// Classify a 503 body. The model-loading response carries an
/// `estimated_time`; a 503 without one is a plain endpoint error.
fn map_service_unavailable(body: &str) -> GenerateError {
    match serde_json::from_str::<EndpointErrorBody>(body)
        .ok()
        .and_then(|b| b.estimated_time)
    {
        Some(estimated_seconds) => GenerateError::ModelLoading { estimated_seconds },
        None => GenerateError::Endpoint {
            status: 503,
            message: body.to_string(),
        },
    }
}
