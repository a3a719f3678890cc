//! Display-only text transforms. Nothing here is written back to the document.

const BULLET_MARKER: char = '•';

/// Empty once surrounding whitespace is removed.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// `https://www.linkedin.com/in/x` → `linkedin.com/in/x`
pub fn display_linkedin(url: &str) -> &str {
    url.strip_prefix("https://www.").unwrap_or(url)
}

/// `https://github.com/x` → `github.com/x`
pub fn display_github(url: &str) -> &str {
    url.strip_prefix("https://").unwrap_or(url)
}

/// Splits a free-text description into bullet entries: one per line, leading
/// `•` and surrounding whitespace removed, blank lines dropped.
pub fn bullet_lines(description: &str) -> Vec<String> {
    description
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix(BULLET_MARKER).unwrap_or(line).trim()
}

/// Joins the non-blank parts with `sep`.
pub fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_skip_blank_lines() {
        assert_eq!(bullet_lines("• First\n\nSecond"), vec!["First", "Second"]);
    }

    #[test]
    fn test_bullets_handle_crlf_and_marker_only_lines() {
        assert_eq!(
            bullet_lines("  •  Shipped v2 \r\n•\r\n   \r\n• Cut costs 20%"),
            vec!["Shipped v2", "Cut costs 20%"]
        );
    }

    #[test]
    fn test_bullet_marker_only_stripped_at_start() {
        assert_eq!(bullet_lines("Used • as separator"), vec!["Used • as separator"]);
    }

    #[test]
    fn test_empty_description_has_no_bullets() {
        assert!(bullet_lines("").is_empty());
    }

    #[test]
    fn test_link_prefixes() {
        assert_eq!(
            display_linkedin("https://www.linkedin.com/in/ada"),
            "linkedin.com/in/ada"
        );
        assert_eq!(display_linkedin("linkedin.com/in/ada"), "linkedin.com/in/ada");
        assert_eq!(display_github("https://github.com/ada"), "github.com/ada");
        assert_eq!(display_github("http://github.com/ada"), "http://github.com/ada");
    }

    #[test]
    fn test_join_present_omits_blank_parts() {
        assert_eq!(join_present(&["B.Sc.", "3.8"], " - "), "B.Sc. - 3.8");
        assert_eq!(join_present(&["B.Sc.", "  "], " - "), "B.Sc.");
        assert_eq!(join_present(&["", ""], " - "), "");
    }
}
