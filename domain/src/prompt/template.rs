//! Prompt template for exam-style answers

use crate::context::PageContent;

/// Context substituted when no documents were supplied.
pub const NO_CONTEXT_FALLBACK: &str = "No relevant context found.";

/// Template for generating exam answers
///
/// The bullet-point and heading thresholds are instructions to the model.
/// Rendering never branches on the value of `marks`.
pub struct ExamPromptTemplate;

impl ExamPromptTemplate {
    /// Render the prompt for a question, its context, and the marks label
    pub fn render(question: &str, context: &str, marks: &str) -> String {
        format!(
            r#"
You are a VTU university exam answer generator.

Instructions:
- Write strictly for {marks} marks
- Use simple academic English
- Be concise and exam-oriented
- If marks ≥ 5 → use bullet points
- If marks ≥ 10 → use headings and conclusion
- Avoid unnecessary explanations

Context:
{context}

Question:
{question}

Answer:
"#
        )
    }

    /// Join document texts with newlines, in order.
    ///
    /// Falls back to [`NO_CONTEXT_FALLBACK`] for an empty sequence.
    pub fn context_from_documents<D: PageContent>(docs: &[D]) -> String {
        if docs.is_empty() {
            return NO_CONTEXT_FALLBACK.to_string();
        }

        docs.iter()
            .map(|doc| doc.page_content())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextDocument;

    /// Everything between "Context:\n" and "\n\nQuestion:".
    fn context_section(prompt: &str) -> &str {
        let start = prompt.find("Context:\n").unwrap() + "Context:\n".len();
        let end = prompt.rfind("\n\nQuestion:\n").unwrap();
        &prompt[start..end]
    }

    #[test]
    fn test_render_exact_layout() {
        let prompt = ExamPromptTemplate::render("What is TCP?", "TCP is reliable.", "5");
        let expected = "\nYou are a VTU university exam answer generator.\n\
\n\
Instructions:\n\
- Write strictly for 5 marks\n\
- Use simple academic English\n\
- Be concise and exam-oriented\n\
- If marks ≥ 5 → use bullet points\n\
- If marks ≥ 10 → use headings and conclusion\n\
- Avoid unnecessary explanations\n\
\n\
Context:\n\
TCP is reliable.\n\
\n\
Question:\n\
What is TCP?\n\
\n\
Answer:\n";
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_question_and_marks_verbatim() {
        let question = "Explain {braces} and \"quotes\" in  spacing";
        let marks = "ten (10)";
        let prompt = ExamPromptTemplate::render(question, "ctx", marks);
        assert!(prompt.contains(question));
        assert!(prompt.contains("Write strictly for ten (10) marks"));
    }

    #[test]
    fn test_instruction_block_independent_of_marks() {
        let a = ExamPromptTemplate::render("Q", "C", "2");
        let b = ExamPromptTemplate::render("Q", "C", "15");
        assert_eq!(
            a.replace("for 2 marks", "for {} marks"),
            b.replace("for 15 marks", "for {} marks")
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = ExamPromptTemplate::render("Define OSI model", "Layers", "10");
        let second = ExamPromptTemplate::render("Define OSI model", "Layers", "10");
        assert_eq!(first, second);
    }

    #[test]
    fn test_context_joined_in_order() {
        let docs = vec![
            ContextDocument::new("first"),
            ContextDocument::new("second"),
            ContextDocument::new("third"),
        ];
        let context = ExamPromptTemplate::context_from_documents(&docs);
        assert_eq!(context, "first\nsecond\nthird");

        let prompt = ExamPromptTemplate::render("Q", &context, "5");
        assert_eq!(context_section(&prompt), "first\nsecond\nthird");
    }

    #[test]
    fn test_empty_documents_use_fallback() {
        let docs: Vec<ContextDocument> = Vec::new();
        let context = ExamPromptTemplate::context_from_documents(&docs);
        assert_eq!(context, NO_CONTEXT_FALLBACK);

        let prompt = ExamPromptTemplate::render("Q", &context, "5");
        assert_eq!(context_section(&prompt), "No relevant context found.");
    }

    #[test]
    fn test_plain_strings_as_documents() {
        let context = ExamPromptTemplate::context_from_documents(&["a", "b"]);
        assert_eq!(context, "a\nb");
    }
}
