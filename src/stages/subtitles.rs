//! Subtitle language-hint tail scan.
//!
//! Scans the lowercased trailing buffer for the handful of tokens
//! fansub groups use to flag which subtitle languages a release
//! carries, independent of whether the release itself classified as
//! `FileType::Subtitle`. A release can ship multiple subtitle tracks,
//! so every distinct hint found is kept, in table order (Simplified
//! before Traditional).

use crate::model::MediaInfo;
use crate::parser::Working;

const HINTS: &[(&str, &str)] = &[
    ("简", "zh-CN"),
    ("chs", "zh-CN"),
    ("gb", "zh-CN"),
    ("zh-hans", "zh-CN"),
    ("繁", "zh-TW"),
    ("cht", "zh-TW"),
    ("big5", "zh-TW"),
    ("zh-hant", "zh-TW"),
];

pub(crate) fn extract(w: &Working, info: &mut MediaInfo) {
    let haystack = w.other.to_lowercase();
    let mut seen = std::collections::HashSet::new();

    for (keyword, tags) in HINTS {
        if !haystack.contains(keyword) {
            continue;
        }
        for tag in tags.split(',') {
            if seen.insert(tag.to_string()) {
                info.subtitles.push(tag.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_simplified_and_traditional_hints() {
        let mut info = MediaInfo::default();
        let mut w = Working::new(String::new());
        w.other = "CHS&CHT.ass".to_string();
        extract(&w, &mut info);
        assert_eq!(info.subtitles, vec!["zh-CN", "zh-TW"]);
    }

    #[test]
    fn detects_cjk_literal_hints() {
        let mut info = MediaInfo::default();
        let mut w = Working::new(String::new());
        w.other = "简繁内封.mkv".to_string();
        extract(&w, &mut info);
        assert_eq!(info.subtitles, vec!["zh-CN", "zh-TW"]);
    }

    #[test]
    fn no_hint_leaves_subtitles_empty() {
        let mut info = MediaInfo::default();
        let w = Working::new(String::new());
        extract(&w, &mut info);
        assert!(info.subtitles.is_empty());
    }
}
