/// Discord's maximum length of an embed field value.
pub const EMBED_FIELD_LIMIT: usize = 1024;
/// Discord's maximum length of an embed description.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;
/// Discord's maximum length of an autocomplete choice name.
pub const CHOICE_NAME_LIMIT: usize = 100;

const ELLIPSIS: &str = "...";

/// Shortens text to at most `max_chars` characters, ending with `...` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn cuts_long_text_with_ellipsis() {
        let cut = truncate("abcdefghijkl", 10);

        assert_eq!(cut, "abcdefg...");
        assert_eq!(cut.chars().count(), 10);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(truncate("→→→→→→", 5), "→→...");
    }
}
