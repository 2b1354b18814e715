//! Generate Answer use case.
//!
//! Turns a question, its retrieved context, and a marks label into one
//! exam-style answer:
//!
//! 1. Construct a session through the [`LlmGateway`] (no network)
//! 2. Join the context documents (or use the fallback sentence)
//! 3. Render the [`ExamPromptTemplate`]
//! 4. Send the prompt once as a single user message
//!
//! No retries, no streaming. [`generate_answer`] wraps the typed result into
//! the warning-string form expected by callers that only handle text.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use examgen_domain::core::string::truncate;
use examgen_domain::{Answer, ContextDocument, ExamPromptTemplate, Model, PageContent};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Prefix of every error string returned by [`generate_answer`].
pub const WARNING_MARKER: &str = "⚠️";

/// Errors that can occur while generating an answer.
///
/// The display texts are relied on by string-matching callers; keep them.
#[derive(Error, Debug)]
pub enum GenerateAnswerError {
    /// Session construction failed; nothing was sent.
    #[error("LLM initialization error: {0}")]
    Configuration(GatewayError),

    /// The single model invocation failed.
    #[error("Error generating answer: {0}")]
    Invocation(GatewayError),
}

impl GenerateAnswerError {
    /// Render the error as a warning-prefixed line.
    pub fn warning_message(&self) -> String {
        format!("{} {}", WARNING_MARKER, self)
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerateAnswerError::Configuration(_))
    }

    fn kind(&self) -> &'static str {
        match self {
            GenerateAnswerError::Configuration(_) => "configuration",
            GenerateAnswerError::Invocation(_) => "invocation",
        }
    }
}

/// Input for the [`GenerateAnswerUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateAnswerInput {
    /// The exam question, passed through verbatim.
    pub question: String,
    /// Retrieved context, in the order it should appear in the prompt.
    pub documents: Vec<ContextDocument>,
    /// Target length/style label, e.g. "5" or "10".
    pub marks: String,
    /// Model override; `None` uses the gateway's default.
    pub model: Option<Model>,
}

impl GenerateAnswerInput {
    pub fn new(question: impl Into<String>, marks: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            documents: Vec::new(),
            marks: marks.into(),
            model: None,
        }
    }

    /// Attach context documents.
    ///
    /// Accepts any iterable of [`PageContent`] items, keeping their order.
    pub fn with_documents<I>(mut self, docs: I) -> Self
    where
        I: IntoIterator,
        I::Item: PageContent,
    {
        self.documents = docs
            .into_iter()
            .map(|doc| ContextDocument::new(doc.page_content()))
            .collect();
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }
}

/// Use case for generating one exam-style answer.
pub struct GenerateAnswerUseCase {
    gateway: Arc<dyn LlmGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for GenerateAnswerUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl GenerateAnswerUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute the use case, returning the typed result.
    pub async fn execute(&self, input: GenerateAnswerInput) -> Result<Answer, GenerateAnswerError> {
        info!(
            "Generating answer for {} marks: {}",
            input.marks,
            truncate(&input.question, 100)
        );

        let model = input
            .model
            .clone()
            .unwrap_or_else(|| self.gateway.default_model().clone());

        let session = match self.gateway.create_session(&model).await {
            Ok(session) => session,
            Err(e) => {
                let error = GenerateAnswerError::Configuration(e);
                self.log_failure(&input, &model, &error);
                return Err(error);
            }
        };

        let context = ExamPromptTemplate::context_from_documents(&input.documents);
        let prompt = ExamPromptTemplate::render(&input.question, &context, &input.marks);

        debug!(
            "Rendered prompt for {}: {} documents, {} bytes",
            session.model(),
            input.documents.len(),
            prompt.len()
        );
        self.conversation_logger.log(ConversationEvent::new(
            "prompt_rendered",
            serde_json::json!({
                "model": session.model().to_string(),
                "marks": input.marks,
                "documents": input.documents.len(),
                "prompt": prompt,
            }),
        ));

        match session.send(&prompt).await {
            Ok(answer) => {
                info!(
                    "Answer generated by {} ({} bytes)",
                    answer.model,
                    answer.content.len()
                );
                self.conversation_logger.log(ConversationEvent::new(
                    "answer_generated",
                    serde_json::json!({
                        "model": answer.model.to_string(),
                        "question": input.question,
                        "marks": input.marks,
                        "answer": answer.content,
                        "usage": answer.usage,
                    }),
                ));
                Ok(answer)
            }
            Err(e) => {
                let error = GenerateAnswerError::Invocation(e);
                self.log_failure(&input, &model, &error);
                Err(error)
            }
        }
    }

    fn log_failure(&self, input: &GenerateAnswerInput, model: &Model, error: &GenerateAnswerError) {
        warn!("{}", error);
        self.conversation_logger.log(ConversationEvent::new(
            "answer_failed",
            serde_json::json!({
                "model": model.to_string(),
                "question": input.question,
                "marks": input.marks,
                "kind": error.kind(),
                "error": error.to_string(),
            }),
        ));
    }
}

/// Generate an answer and collapse the outcome into a single string.
///
/// `docs` of `None` and an empty sequence both mean "no context". Success
/// yields the model's text unmodified. Failures yield a line starting with
/// [`WARNING_MARKER`]; this function never fails.
pub async fn generate_answer<I>(
    gateway: Arc<dyn LlmGateway>,
    question: &str,
    docs: Option<I>,
    marks: &str,
) -> String
where
    I: IntoIterator,
    I::Item: PageContent,
{
    let input =
        GenerateAnswerInput::new(question, marks).with_documents(docs.into_iter().flatten());
    match GenerateAnswerUseCase::new(gateway).execute(input).await {
        Ok(answer) => answer.content,
        Err(e) => e.warning_message(),
    }
}
