//! Text-level parsers for the profile table cells.

use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

use crate::profile::Standing;

static DECIMAL_PTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d,]+\.?\d*)\s*pts").expect("static regex"));
static INTEGER_PTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d,]+)\s*pts").expect("static regex"));
static PLACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"in\s*([\d,]+)").expect("static regex"));

/// Parses a race ranking cell such as `220.49 pts in 5,477th`.
///
/// Points and place are matched independently; either may be `None`.
pub fn parse_race_ranking(text: &str) -> Standing<f64> {
    Standing {
        points: capture(&DECIMAL_PTS, text).and_then(|s| strip_separators(s).parse().ok()),
        place: capture(&PLACE, text).and_then(parse_count),
    }
}

/// Parses a ZPoints cell such as `7,875 pts in 2001st`.
pub fn parse_zpoints(text: &str) -> Standing<u32> {
    Standing {
        points: capture(&INTEGER_PTS, text).and_then(parse_count),
        place: capture(&PLACE, text).and_then(parse_count),
    }
}

fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str())
}

fn strip_separators(s: &str) -> String {
    s.replace(',', "")
}

/// Integer with optional thousands separators (`5,477`).
pub(crate) fn parse_count(s: &str) -> Option<u32> {
    strip_separators(s.trim()).parse().ok()
}

/// Text fragments of an element, each trimmed, concatenated.
pub(crate) fn cell_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).collect()
}
