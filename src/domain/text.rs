//! Content metrics: word and character counts, previews, writing tips

/// Number of characters kept in a list preview
pub const PREVIEW_CHARS: usize = 200;

/// Appended to truncated previews
pub const ELLIPSIS: &str = "...";

/// Whitespace-delimited, non-empty tokens of the trimmed content
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Length of the raw content, whitespace included, in characters
pub fn char_count(content: &str) -> usize {
    content.chars().count()
}

/// First [`PREVIEW_CHARS`] characters plus [`ELLIPSIS`] when the content is longer
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}

/// Whether [`preview`] cuts this content short
pub fn is_truncated(content: &str) -> bool {
    content.chars().nth(PREVIEW_CHARS).is_some()
}

/// Encouragement shown next to the editor, picked by word count
pub fn writing_tip(words: usize) -> &'static str {
    match words {
        0 => "Start with how you're feeling right now...",
        1..=49 => "You're off to a great start! Keep going...",
        50..=99 => "Beautiful thoughts! Add more details...",
        _ => "Wonderful entry! Your future self will love reading this.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t"), 0);
        assert_eq!(word_count("  a  b   c "), 3);
        assert_eq!(word_count("line one\nline two"), 4);
    }

    #[test]
    fn test_char_count_includes_whitespace() {
        assert_eq!(char_count("ab c"), 4);
        assert_eq!(char_count("  "), 2);
        assert_eq!(char_count("héllo"), 5);
    }

    #[test]
    fn test_preview_truncates_long_content() {
        let content = "x".repeat(250);
        let p = preview(&content);
        assert_eq!(p.len(), 203);
        assert!(p.ends_with("..."));
        assert!(content.starts_with(&p[..200]));
        assert!(is_truncated(&content));
    }

    #[test]
    fn test_preview_keeps_short_content() {
        let exact = "y".repeat(200);
        assert_eq!(preview(&exact), exact);
        assert!(!is_truncated(&exact));
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let content = "é".repeat(201);
        let p = preview(&content);
        assert_eq!(p.chars().count(), 203);
    }

    #[test]
    fn test_writing_tip_thresholds() {
        assert!(writing_tip(0).starts_with("Start"));
        assert!(writing_tip(49).contains("great start"));
        assert!(writing_tip(50).contains("Beautiful"));
        assert!(writing_tip(100).contains("Wonderful"));
    }
}
