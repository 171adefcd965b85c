/// Build the fragment anchor for a heading's text.
///
/// Lowercases, turns each whitespace run into a single `-` and removes every
/// character that is not an ASCII word character or `-`.
pub fn heading_anchor(text: &str) -> String {
    let mut anchor = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                anchor.push('-');
                in_space = true;
            }
            continue;
        }
        in_space = false;
        for lower in c.to_lowercase() {
            if lower.is_ascii_alphanumeric() || lower == '_' || lower == '-' {
                anchor.push(lower);
            }
        }
    }
    anchor
}

#[cfg(test)]
mod tests {
    use super::heading_anchor;

    #[test]
    fn collapses_whitespace_and_strips_punctuation() {
        assert_eq!(
            heading_anchor("1. Executive Summary & Project Charter"),
            "1-executive-summary--project-charter"
        );
        assert_eq!(heading_anchor("Work  Breakdown (WBS)"), "work-breakdown-wbs");
    }

    #[test]
    fn keeps_existing_dashes() {
        assert_eq!(heading_anchor("a - b"), "a---b");
    }
}
