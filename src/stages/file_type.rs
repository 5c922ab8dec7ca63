//! File-type classification and the structural tail split.
//!
//! Runs first, directly against the raw (pre-normalization) input,
//! since the extension and a trailing `-GROUP` scene-release suffix
//! are always the outermost structural envelope around a release name
//! rather than content a later descriptor pass should ever see. A
//! release group expressed as a leading `[Group]` bracket tag instead
//! (the fansub convention) is handled separately by `stages::title`,
//! which takes priority over the suffix found here when both are
//! present.

use crate::model::FileType;
use crate::patterns::{QUALITY_RE, TMDB_ID_RE};
use crate::tables::{SUBTITLE_EXTENSIONS, VIDEO_EXTENSIONS};

/// Splits `raw` into `(core, extension, file_type, trailing_group)`.
/// `core` is what remains once the extension and any `-GROUP` suffix
/// immediately before it have been stripped; it is what the rest of
/// the pipeline normalizes and parses.
pub(crate) fn split_tail(raw: &str) -> (String, Option<String>, Option<FileType>, Option<String>) {
    let trimmed = raw.trim();
    let Some(dot) = trimmed.rfind('.') else {
        return (trimmed.to_string(), None, None, None);
    };

    let ext = trimmed[dot..].to_lowercase();
    let file_type = if VIDEO_EXTENSIONS.contains(ext.as_str()) {
        FileType::Video
    } else if SUBTITLE_EXTENSIONS.contains(ext.as_str()) {
        FileType::Subtitle
    } else {
        return (trimmed.to_string(), None, None, None);
    };

    let (core, group) = split_trailing_group(&trimmed[..dot]);
    (core, Some(ext), Some(file_type), group)
}

/// Looks for a `-GROUP` suffix at the very tail of `text`: the last
/// `-` in the string, with a non-empty, purely alphanumeric tag after
/// it and non-empty text before it. Rejects anything else (an episode
/// range like `01-12` inside brackets, a hyphenated title word, or a
/// compound token like `WEB-DL`/`tmdb-123456` whose hyphen belongs to
/// a single descriptor rather than separating a release group).
fn split_trailing_group(text: &str) -> (String, Option<String>) {
    let Some(dash) = text.rfind('-') else {
        return (text.to_string(), None);
    };
    let candidate = &text[dash + 1..];
    let rest = &text[..dash];
    if candidate.is_empty() || rest.is_empty() || !candidate.chars().all(|c| c.is_ascii_alphanumeric()) {
        return (text.to_string(), None);
    }

    let segment_start = rest.rfind(['.', ' ']).map(|i| i + 1).unwrap_or(0);
    let full_token = format!("{}-{}", &rest[segment_start..], candidate);
    if QUALITY_RE.is_match(&full_token) || TMDB_ID_RE.is_match(&full_token) {
        return (text.to_string(), None);
    }

    (rest.to_string(), Some(candidate.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_extension_and_scene_group() {
        let (core, ext, ft, group) =
            split_tail("The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv");
        assert_eq!(core, "The.Matrix.1999.1080p.BluRay.x264");
        assert_eq!(ext.as_deref(), Some(".mkv"));
        assert_eq!(ft, Some(FileType::Video));
        assert_eq!(group.as_deref(), Some("GROUP"));
    }

    #[test]
    fn leaves_bracketed_episode_range_untouched() {
        let (core, _, _, group) = split_tail("[Group] Some Anime [01-12][1080p].mkv");
        assert_eq!(group, None);
        assert!(core.contains("01-12"));
    }

    #[test]
    fn unknown_extension_is_not_classified() {
        let (core, ext, ft, _) = split_tail("readme.nfo");
        assert_eq!(ext, None);
        assert_eq!(ft, None);
        assert_eq!(core, "readme.nfo");
    }

    #[test]
    fn directory_name_without_extension() {
        let (core, ext, ft, _) = split_tail("The.Matrix.1999.1080p.BluRay-GROUP");
        assert_eq!(ext, None);
        assert_eq!(ft, None);
        assert_eq!(core, "The.Matrix.1999.1080p.BluRay-GROUP");
    }

    #[test]
    fn web_dl_quality_token_is_not_treated_as_group() {
        let (core, _, _, group) = split_tail("Show.Name.S02E05.1080p.WEB-DL.mkv");
        assert_eq!(group, None);
        assert!(core.ends_with("WEB-DL"));
    }

    #[test]
    fn tmdb_suffix_is_not_treated_as_group() {
        let (core, _, _, group) = split_tail("Movie.Name.2020.tmdb-123456.1080p.mkv");
        assert_eq!(group, None);
        assert!(core.contains("tmdb-123456"));
    }
}
