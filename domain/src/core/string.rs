//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("What is TCP?", 20), "What is TCP?");
        assert_eq!(truncate("Define OSI model", 9), "Define...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // "≥" is three bytes; the cut must not split it
        assert_eq!(truncate("marks ≥ 10 apply", 10), "marks ...");
    }
}
