//! Line classification for assistant replies
//!
//! Recognised line shapes, checked in this order:
//! ```text
//! **Title**              header
//! **Label:** rest        labeled header
//! - item / • item        bullet
//! 12. step               numbered item
//! ⚠️ careful             warning (also any line mentioning "warning")
//!                        blank
//! anything else          plain
//! ```

use serde::Serialize;

/// Bold marker used by headers and labels
const BOLD_MARKER: &str = "**";

/// Warning glyph as usually emitted (with emoji presentation selector)
const WARNING_GLYPH: &str = "\u{26A0}\u{FE0F}";

/// Bare warning sign without the presentation selector
const WARNING_SIGN: char = '\u{26A0}';

const BULLET_PREFIXES: [&str; 2] = ["- ", "• "];

// =========================================================================
// Fragment Types
// =========================================================================

/// One classified line of a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    /// Whole line wrapped in bold markers
    Header { text: String },
    /// Bold label followed by trailing text
    LabeledHeader { label: String, trailing: String },
    /// `- ` or `• ` list entry
    BulletItem { text: String },
    /// `N. ` list entry, `index` keeps the digits as written
    NumberedItem { index: String, text: String },
    /// Warning callout with the glyph removed
    Warning { text: String },
    Blank,
    /// Anything else, verbatim
    Plain { text: String },
}

impl Fragment {
    /// Short name of the variant, used in debug logs
    pub fn kind(&self) -> &'static str {
        match self {
            Fragment::Header { .. } => "header",
            Fragment::LabeledHeader { .. } => "labeled_header",
            Fragment::BulletItem { .. } => "bullet",
            Fragment::NumberedItem { .. } => "numbered",
            Fragment::Warning { .. } => "warning",
            Fragment::Blank => "blank",
            Fragment::Plain { .. } => "plain",
        }
    }
}

// =========================================================================
// Rule Table
// =========================================================================

type Rule = fn(&str) -> Option<Fragment>;

/// Classification rules in priority order; the first match wins.
const RULES: [Rule; 6] = [
    header,
    labeled_header,
    bullet_item,
    numbered_item,
    warning,
    blank,
];

fn header(line: &str) -> Option<Fragment> {
    let trimmed = line.trim();
    if trimmed.starts_with(BOLD_MARKER) && trimmed.ends_with(BOLD_MARKER) {
        return Some(Fragment::Header {
            text: trimmed.replace(BOLD_MARKER, ""),
        });
    }
    None
}

fn labeled_header(line: &str) -> Option<Fragment> {
    if !line.contains(BOLD_MARKER) || !line.contains(':') {
        return None;
    }

    let mut segments = line.split(BOLD_MARKER).skip(1);
    let label = segments.next().unwrap_or_default().to_string();
    let trailing = segments.next().unwrap_or_default().to_string();

    Some(Fragment::LabeledHeader { label, trailing })
}

fn bullet_item(line: &str) -> Option<Fragment> {
    BULLET_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
        .map(|rest| Fragment::BulletItem {
            text: rest.to_string(),
        })
}

fn numbered_item(line: &str) -> Option<Fragment> {
    let digits_end = line
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)?;
    if digits_end == 0 {
        return None;
    }

    let after_digits = line[digits_end..].strip_prefix('.')?;
    let separator = after_digits.chars().next().filter(|c| c.is_whitespace())?;

    Some(Fragment::NumberedItem {
        index: line[..digits_end].to_string(),
        text: after_digits[separator.len_utf8()..].to_string(),
    })
}

fn warning(line: &str) -> Option<Fragment> {
    let has_glyph = line.contains(WARNING_SIGN);
    if !has_glyph && !line.to_lowercase().contains("warning") {
        return None;
    }

    let text = line
        .replace(WARNING_GLYPH, "")
        .replace(WARNING_SIGN, "")
        .trim()
        .to_string();

    Some(Fragment::Warning { text })
}

fn blank(line: &str) -> Option<Fragment> {
    line.trim().is_empty().then_some(Fragment::Blank)
}

// =========================================================================
// Classification Functions
// =========================================================================

/// Classify a single line. Total over every input, including the empty string.
pub fn classify_line(line: &str) -> Fragment {
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or_else(|| Fragment::Plain {
            text: line.to_string(),
        })
}

/// Classify every line of a reply, preserving order
///
/// Lines are separated by `\n`; a trailing `\r` is dropped so CRLF input
/// classifies the same as LF input.
pub fn classify_content(content: &str) -> Vec<Fragment> {
    let fragments: Vec<Fragment> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(classify_line)
        .collect();

    if log::log_enabled!(log::Level::Debug) {
        let kinds: Vec<&str> = fragments.iter().map(Fragment::kind).collect();
        log::debug!("Classified {} lines: {}", fragments.len(), kinds.join(", "));
    }

    fragments
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod classifier_tests;
