//! Title extraction.
//!
//! Runs last against `name`, once every other descriptor pass has
//! excised its match. A leading bracketed tag (`[Group]`, `[字幕组]`)
//! is almost always a fansub/release group rather than part of the
//! title, so it is peeled off first and stashed as a release-group
//! candidate rather than discarded — `stages::release_group` prefers
//! it over its own tail scan when present. What remains is split on
//! `/` into parallel-language title segments, each run through the
//! script-based language detector, and any bare "第N季" season marker
//! text is dropped since the season number is already captured
//! structurally.

use crate::model::{MediaInfo, MediaTitle};
use crate::parser::{detect_language_spans, Working};
use crate::patterns::TITLE_SEASON_MARKER_RE;

const SEPARATORS: &[char] = &['.', '_', '[', ']', '(', ')', '{', '}'];

pub(crate) fn extract(w: &mut Working, info: &mut MediaInfo) {
    let mut text = w.name.trim().to_string();

    text = peel_leading_group(&mut *w, text);

    text = TITLE_SEASON_MARKER_RE.replace_all(&text, "").into_owned();
    let text = text
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect::<String>();

    for segment in text.split('/') {
        let segment = collapse_whitespace(segment.trim());
        if segment.is_empty() {
            continue;
        }
        if segment.chars().all(|c| c.is_ascii_digit()) {
            info.titles.push(MediaTitle::new(segment, Some("en".to_string())));
            continue;
        }
        for (title, language) in language_spans(&segment) {
            info.titles.push(MediaTitle::new(title, language));
        }
    }
}

/// Strips a leading `[...]` tag from `text` (after trimming) and
/// records it as a release-group candidate, unless doing so would
/// leave nothing behind.
fn peel_leading_group(w: &mut Working, text: String) -> String {
    let trimmed = text.trim_start();
    if !trimmed.starts_with('[') {
        return text;
    }
    let Some(close) = trimmed.find(']') else {
        return text;
    };
    let candidate = trimmed[1..close].trim().to_string();
    let rest = trimmed[close + 1..].trim().to_string();
    if candidate.is_empty() || rest.is_empty() {
        return text;
    }
    w.title_group_candidate = Some(candidate);
    rest
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Partitions `segment` into one `(title, language)` pair per
/// language-coherent span the detector returns. A segment the detector
/// finds no spans in (e.g. pure punctuation) is dropped entirely.
fn language_spans(segment: &str) -> Vec<(String, Option<String>)> {
    detect_language_spans(segment)
        .into_iter()
        .map(|s| (segment[s.start..s.end].to_string(), Some(s.language)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn strips_leading_group_and_extracts_title() {
        let mut info = MediaInfo::default();
        let mut w = Working::new(normalize("[GROUP].Some.Movie"));
        w.name = w.name.trim().to_string();
        extract(&mut w, &mut info);
        assert_eq!(w.title_group_candidate.as_deref(), Some("GROUP"));
        assert_eq!(info.titles.len(), 1);
        assert_eq!(info.titles[0].title, "Some Movie");
        assert_eq!(info.titles[0].language.as_deref(), Some("en"));
    }

    #[test]
    fn splits_multi_language_titles_on_slash() {
        let mut info = MediaInfo::default();
        let mut w = Working::new(String::new());
        w.name = "某动画/Some Anime".to_string();
        extract(&mut w, &mut info);
        assert_eq!(info.titles.len(), 2);
        assert_eq!(info.titles[0].language.as_deref(), Some("zh"));
        assert_eq!(info.titles[1].language.as_deref(), Some("en"));
    }

    #[test]
    fn strips_season_marker_text() {
        let mut info = MediaInfo::default();
        let mut w = Working::new(String::new());
        w.name = "Show 第二季".to_string();
        extract(&mut w, &mut info);
        assert_eq!(info.titles[0].title, "Show");
    }

    #[test]
    fn pure_digit_segment_is_an_english_title() {
        let mut info = MediaInfo::default();
        let mut w = Working::new(String::new());
        w.name = "2046".to_string();
        extract(&mut w, &mut info);
        assert_eq!(info.titles.len(), 1);
        assert_eq!(info.titles[0].title, "2046");
        assert_eq!(info.titles[0].language.as_deref(), Some("en"));
    }

    #[test]
    fn mixed_language_single_segment_emits_one_title_per_span() {
        let mut info = MediaInfo::default();
        let mut w = Working::new(String::new());
        w.name = "某动画 Some Anime".to_string();
        extract(&mut w, &mut info);
        assert_eq!(info.titles.len(), 2);
        assert_eq!(info.titles[0].title, "某动画");
        assert_eq!(info.titles[0].language.as_deref(), Some("zh"));
        assert_eq!(info.titles[1].title, "Some Anime");
        assert_eq!(info.titles[1].language.as_deref(), Some("en"));
    }
}
