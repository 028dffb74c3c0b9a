use regex::Regex;
use std::sync::LazyLock;

static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern is a valid regex")
});

/// An ATX heading found in a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 for `#`, up to 6 for `######`.
    pub level: u8,
    /// Heading text, trimmed and never empty.
    pub text: String,
}

/// Collects the ATX headings of `text` whose level is at most `max_depth`.
///
/// Headings come back in document order. Deeper headings are skipped
/// rather than clamped, and setext headings are not recognised. Trailing
/// `#` runs are kept as part of the text.
pub fn extract_headings(text: &str, max_depth: u8) -> Vec<Heading> {
    let max_depth = crate::settings::clamp_heading_depth(max_depth);

    text.lines()
        .filter_map(|line| {
            let caps = HEADING_LINE.captures(line)?;
            let level = u8::try_from(caps[1].len()).ok()?;
            if level > max_depth {
                return None;
            }

            let text = caps[2].trim();
            if text.is_empty() {
                return None;
            }

            Some(Heading {
                level,
                text: text.to_string(),
            })
        })
        .collect()
}
