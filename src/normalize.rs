//! Input normalization.
//!
//! Runs once, before any extraction pass, so that offsets recorded by
//! later stages are always over the normalized buffer.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // [YYYY年MM月新番] / ★MM月新番★ — Japanese "new season" marketing markers.
    static ref NEW_SEASON_MARKER_RE: Regex =
        Regex::new(r"(?:\[\d{4}年\d{1,2}月新番\]|★\d{1,2}月新番★)").unwrap();
    // [N.NG] / [NG] — size annotations.
    static ref SIZE_ANNOTATION_RE: Regex = Regex::new(r"\[\d+(\.\d+)?[gG]\]").unwrap();
}

/// Maps full-width punctuation to its ASCII equivalent, collapses
/// marketing markers and size annotations, and surrounds the result
/// with sentinel spaces, in order.
pub fn normalize(input: &str) -> String {
    let mut s = input.to_string();

    // 1. Full-width CJK brackets -> ASCII brackets.
    s = s.replace('【', "[").replace('】', "]");

    // 2. Full-width parens, angle brackets, '@', and "精校" -> '.'.
    for ch in ['（', '）', '＜', '＞', '@'] {
        s = s.replace(ch, ".");
    }
    s = s.replace("精校", ".");

    // 3. Marketing "new season" markers -> '.'.
    s = NEW_SEASON_MARKER_RE.replace_all(&s, ".").into_owned();

    // 4. Size annotations -> '.'.
    s = SIZE_ANNOTATION_RE.replace_all(&s, ".").into_owned();

    // 5. Underscores and full-width quotation/parenthesis marks -> '.'.
    for ch in ['_', '（', '）', '《', '》'] {
        s = s.replace(ch, ".");
    }

    // 6. Sentinel spaces so boundary-anchored patterns match at either end.
    crate::boundary::sentinelize(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_full_width_brackets() {
        let out = normalize("【Group】Show.mkv");
        assert!(out.contains('['));
        assert!(out.contains(']'));
    }

    #[test]
    fn collapses_new_season_marker() {
        let out = normalize("[2024年10月新番]Show.01.mkv");
        assert!(!out.contains("新番"));
    }

    #[test]
    fn collapses_size_annotation() {
        let out = normalize("Show.01[1.5G].mkv");
        assert!(!out.contains('G'));
    }

    #[test]
    fn sentinelizes() {
        let out = normalize("a");
        assert_eq!(out, " a ");
    }
}
