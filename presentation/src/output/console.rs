//! Console output formatter for generated answers

use colored::Colorize;
use examgen_application::GenerateAnswerError;
use examgen_domain::{Answer, TokenUsage};
use serde::Serialize;

/// Serializable summary of one answer-generation run
#[derive(Debug, Serialize)]
pub struct AnswerReport<'a> {
    pub question: &'a str,
    pub marks: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> AnswerReport<'a> {
    pub fn new(
        question: &'a str,
        marks: &'a str,
        result: &'a Result<Answer, GenerateAnswerError>,
    ) -> Self {
        match result {
            Ok(answer) => Self {
                question,
                marks,
                model: Some(answer.model.to_string()),
                answer: Some(answer.content.as_str()),
                usage: answer.usage,
                error: None,
            },
            Err(e) => Self {
                question,
                marks,
                model: None,
                answer: None,
                usage: None,
                error: Some(e.warning_message()),
            },
        }
    }
}

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn ANSI colors off globally when `enabled` is false
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// The answer text exactly as the model returned it
    pub fn format_answer(answer: &Answer) -> String {
        answer.content.clone()
    }

    /// Warning line for a failed run
    pub fn format_error(error: &GenerateAnswerError) -> String {
        error.warning_message().yellow().bold().to_string()
    }

    /// Text output for either outcome
    pub fn format_text(result: &Result<Answer, GenerateAnswerError>) -> String {
        match result {
            Ok(answer) => Self::format_answer(answer),
            Err(e) => Self::format_error(e),
        }
    }

    /// Short dimmed line with model and token usage, for verbose runs
    pub fn format_usage(answer: &Answer) -> String {
        let usage = match answer.usage {
            Some(u) => format!(
                "{} prompt + {} completion = {} tokens",
                u.prompt_tokens, u.completion_tokens, u.total_tokens
            ),
            None => "usage not reported".to_string(),
        };
        format!("[{}] {}", answer.model, usage).dimmed().to_string()
    }

    /// Format as JSON
    pub fn format_json(report: &AnswerReport<'_>) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use examgen_application::GatewayError;
    use examgen_domain::Model;

    #[test]
    fn test_answer_is_unmodified() {
        let answer = Answer::new("  - point one\n- point two\n", Model::default());
        assert_eq!(ConsoleFormatter::format_text(&Ok(answer)), "  - point one\n- point two\n");
    }

    #[test]
    fn test_error_carries_warning_message() {
        let result = Err(GenerateAnswerError::Configuration(GatewayError::NotConfigured(
            "GROQ_API_KEY not found".to_string(),
        )));
        let text = ConsoleFormatter::format_text(&result);
        assert!(text.contains("⚠️ LLM initialization error: GROQ_API_KEY not found"));
    }

    #[test]
    fn test_json_report_for_answer() {
        let result = Ok(Answer::new("Layered model", Model::Llama31_8bInstant).with_usage(
            TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            },
        ));
        let report = AnswerReport::new("Define OSI model", "10", &result);
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&report)).unwrap();
        assert_eq!(json["question"], "Define OSI model");
        assert_eq!(json["marks"], "10");
        assert_eq!(json["model"], "llama-3.1-8b-instant");
        assert_eq!(json["answer"], "Layered model");
        assert_eq!(json["usage"]["total_tokens"], 15);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_json_report_for_error() {
        let result = Err(GenerateAnswerError::Invocation(GatewayError::RateLimited(
            "HTTP 429: slow down".to_string(),
        )));
        let report = AnswerReport::new("What is TCP?", "5", &result);
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&report)).unwrap();
        assert_eq!(
            json["error"],
            "⚠️ Error generating answer: Rate limited: HTTP 429: slow down"
        );
        assert!(json.get("answer").is_none());
    }
}
