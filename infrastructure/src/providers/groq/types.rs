//! Wire types for the chat completions API and their conversion to
//! domain and port types.

use examgen_application::ports::llm_gateway::GatewayError;
use examgen_domain::core::string::truncate;
use examgen_domain::{Answer, Model, TokenUsage};
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// A request carrying the prompt as the only (user-role) message.
    pub fn single_user_message(model: &'a str, temperature: f32, content: &'a str) -> Self {
        Self {
            model,
            temperature,
            messages: vec![ChatMessage {
                role: "user",
                content,
            }],
        }
    }
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// ─── API → Domain ────────────────────────────────────────────────

/// Parse a successful response body into an [`Answer`].
pub fn convert_response(body: &str, model: &Model) -> Result<Answer, GatewayError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedResponse(format!("Invalid JSON: {}", e)))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| GatewayError::MalformedResponse("No message content in response".to_string()))?;

    let answer = Answer::new(content, model.clone());
    Ok(match response.usage {
        Some(usage) => answer.with_usage(TokenUsage {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }),
        None => answer,
    })
}

/// Upper bound on raw (non-JSON) error bodies carried into messages.
const MAX_ERROR_BODY_BYTES: usize = 500;

/// Map a non-success HTTP status and its body to a gateway error.
pub fn convert_status_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| truncate(body.trim(), MAX_ERROR_BODY_BYTES));
    let detail = format!("HTTP {}: {}", status, message);

    match status {
        401 | 403 => GatewayError::Authentication(detail),
        429 => GatewayError::RateLimited(detail),
        _ => GatewayError::RequestFailed(detail),
    }
}

/// Map a transport-level failure to a gateway error.
pub fn convert_transport_error(e: &reqwest::Error) -> GatewayError {
    if e.is_connect() || e.is_timeout() {
        GatewayError::ConnectionError(e.to_string())
    } else if e.is_decode() {
        GatewayError::MalformedResponse(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = ChatRequest::single_user_message("llama-3.1-8b-instant", 0.2, "prompt");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama-3.1-8b-instant");
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "prompt");
        assert!((json["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_convert_response_with_usage() {
        let body = r#"{
            "id": "chatcmpl-1",
            "model": "llama-3.1-8b-instant",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "- TCP is reliable"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 120, "completion_tokens": 30, "total_tokens": 150}
        }"#;
        let answer = convert_response(body, &Model::Llama31_8bInstant).unwrap();
        assert_eq!(answer.content, "- TCP is reliable");
        assert_eq!(answer.model, Model::Llama31_8bInstant);
        assert_eq!(answer.usage.unwrap().total_tokens, 150);
    }

    #[test]
    fn test_convert_response_without_choices() {
        let err = convert_response(r#"{"choices": []}"#, &Model::default()).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));

        let err = convert_response("not json", &Model::default()).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[test]
    fn test_status_error_mapping() {
        let body = r#"{"error": {"message": "Invalid API Key", "type": "invalid_request_error"}}"#;
        let err = convert_status_error(401, body);
        assert!(matches!(err, GatewayError::Authentication(_)));
        assert_eq!(err.to_string(), "Authentication failed: HTTP 401: Invalid API Key");

        assert!(matches!(
            convert_status_error(429, "slow down"),
            GatewayError::RateLimited(_)
        ));
        let err = convert_status_error(503, "  upstream unavailable\n");
        assert_eq!(err.to_string(), "Request failed: HTTP 503: upstream unavailable");
    }

    #[test]
    fn test_html_error_page_is_capped() {
        let page = format!("<html><body>{}</body></html>", "Bad Gateway ".repeat(200));
        let err = convert_status_error(502, &page);
        let GatewayError::RequestFailed(detail) = &err else {
            panic!("expected RequestFailed, got {:?}", err);
        };
        let message = detail.strip_prefix("HTTP 502: ").unwrap();
        assert_eq!(message.len(), MAX_ERROR_BODY_BYTES);
        assert!(message.starts_with("<html><body>Bad Gateway"));
        assert!(message.ends_with("..."));
    }
}
