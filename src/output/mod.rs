// Output formatting — terminal display of scores, sentiment, and trends.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..20]`), this respects UTF-8 character boundaries
/// and will never panic on Arabic text or emoji.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Render a fixed-width bar for a 0-100 percentage.
pub fn percent_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_arabic() {
        assert_eq!(truncate_chars("#السعودية", 4), "#الس...");
        assert_eq!(truncate_chars("#نيوم", 10), "#نيوم");
    }

    #[test]
    fn test_percent_bar_width() {
        assert_eq!(percent_bar(0, 10), "..........");
        assert_eq!(percent_bar(100, 10), "##########");
        assert_eq!(percent_bar(45, 10), "#####.....");
    }
}
