//! Hugging Face Inference API wire types.
//!
//! These are the request/response structures for HTTP communication with
//! a hosted text-generation endpoint. They are NOT the generic types from
//! banter-types -- `GenerationParams` is flattened into the request's
//! `parameters` object alongside endpoint-only switches.

use serde::{Deserialize, Serialize};

use banter_types::generate::GenerationParams;

/// Request body for `POST /models/{model}`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub inputs: String,
    pub parameters: RequestParameters,
    pub options: RequestOptions,
}

/// The `parameters` object: the fixed sampling set plus endpoint switches.
#[derive(Debug, Clone, Serialize)]
pub struct RequestParameters {
    #[serde(flatten)]
    pub sampling: GenerationParams,
    /// Ask the endpoint to echo the prompt ahead of the continuation;
    /// the cleanup pipeline strips the echo afterwards.
    pub return_full_text: bool,
}

/// The `options` object controlling endpoint behavior.
#[derive(Debug, Clone, Serialize)]
pub struct RequestOptions {
    /// Fail fast with 503 while the model loads instead of blocking.
    pub wait_for_model: bool,
}

/// One generated sequence in a successful response array.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedSequence {
    pub generated_text: String,
}

/// Error body returned by the endpoint, e.g. while the model is loading.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointErrorBody {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_serialization() {
        let req = GenerateRequest {
            inputs: "tell me about rust".to_string(),
            parameters: RequestParameters {
                sampling: GenerationParams::default(),
                return_full_text: true,
            },
            options: RequestOptions {
                wait_for_model: false,
            },
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["inputs"], "tell me about rust");
        // The sampling parameters flatten into `parameters`.
        assert_eq!(json["parameters"]["max_length"], 50);
        assert_eq!(json["parameters"]["temperature"], 0.7);
        assert_eq!(json["parameters"]["pad_token_id"], 50256);
        assert_eq!(json["parameters"]["return_full_text"], true);
        assert_eq!(json["options"]["wait_for_model"], false);
    }

    #[test]
    fn test_generated_sequence_deserialization() {
        let body = r#"[{"generated_text": "tell me about rust It is fast."}]"#;
        let sequences: Vec<GeneratedSequence> = serde_json::from_str(body).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(
            sequences[0].generated_text,
            "tell me about rust It is fast."
        );
    }

    #[test]
    fn test_generated_sequence_ignores_extra_fields() {
        // Endpoints may return more than generated_text; only that field
        // is contracted.
        let body = r#"[{"generated_text": "hi there", "details": {"tokens": 3}}]"#;
        let sequences: Vec<GeneratedSequence> = serde_json::from_str(body).unwrap();
        assert_eq!(sequences[0].generated_text, "hi there");
    }

    #[test]
    fn test_endpoint_error_body_with_estimate() {
        let body = r#"{"error": "Model microsoft/DialoGPT-medium is currently loading", "estimated_time": 20.5}"#;
        let parsed: EndpointErrorBody = serde_json::from_str(body).unwrap();
        assert!(parsed.error.contains("loading"));
        assert_eq!(parsed.estimated_time, Some(20.5));
    }

    #[test]
    fn test_endpoint_error_body_without_estimate() {
        let body = r#"{"error": "Internal server error"}"#;
        let parsed: EndpointErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error, "Internal server error");
        assert!(parsed.estimated_time.is_none());
    }
}
