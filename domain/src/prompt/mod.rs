//! Prompt domain
//!
//! The fixed exam-answer template and the context assembly that feeds it.

mod template;

pub use template::{ExamPromptTemplate, NO_CONTEXT_FALLBACK};
