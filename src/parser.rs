//! The extraction pipeline and the public entry point.
//!
//! `parse` drives a fixed sequence of passes over a mutable working
//! buffer. Each pass locates its descriptor with
//! `boundary::find_last_bounded` (last match wins), records it on the
//! output `MediaInfo`, and excises its span with `boundary::splice`.
//! Passes run in a fixed order so that narrowing the buffer in an
//! earlier pass never lets a later pass misfire on a descriptor's
//! leftover text.

use regex::Captures;

use crate::boundary::{find_all_bounded, find_last_bounded, splice};
use crate::language;
use crate::language::LanguageDetector;
use crate::model::MediaInfo;
use crate::normalize::normalize;
use crate::patterns::*;
use crate::stages;
use crate::tables::{
    normalize_audio_codec, normalize_hdr, normalize_quality, normalize_video_codec, parse_digits,
};

/// Mutable state threaded through the extraction pipeline for a single
/// `parse` call. Never shared across calls.
pub(crate) struct Working {
    pub(crate) name: String,
    pub(crate) other: String,
    pub(crate) title_index_end: Option<usize>,
    pub(crate) year_index_start: Option<usize>,
    pub(crate) title_group_candidate: Option<String>,
}

impl Working {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            other: String::new(),
            title_index_end: None,
            year_index_start: None,
            title_group_candidate: None,
        }
    }

    /// Records that a successful extraction crossed out buffer content
    /// starting at byte offset `start`. `title_index_end` only ever
    /// moves leftward once it is first set.
    pub(crate) fn mark(&mut self, start: usize) {
        self.title_index_end = Some(match self.title_index_end {
            Some(existing) => existing.min(start),
            None => start,
        });
    }

    /// Splits the working buffer at `[start, end)`: everything before
    /// becomes the remaining title buffer (`name`), everything after
    /// becomes the trailing descriptor buffer (`other`).
    pub(crate) fn split_at(&mut self, start: usize, end: usize) {
        self.other = self.name[end..].to_string();
        self.name.truncate(start);
    }
}

/// Parses a single filename or directory name into a `MediaInfo`
/// record. Never panics; malformed or absent descriptors simply leave
/// their field unset.
pub fn parse(input: &str) -> MediaInfo {
    let mut info = MediaInfo::default();
    if input.trim().is_empty() {
        return info;
    }

    let (core, extension, file_type, tail_group) = stages::file_type::split_tail(input);
    info.extension = extension;
    info.file_type = file_type;

    let mut w = Working::new(normalize(&core));
    w.title_group_candidate = tail_group;

    extract_tmdb_id(&mut w, &mut info);
    extract_frame_rate(&mut w, &mut info);
    extract_quality(&mut w, &mut info);
    extract_hdr(&mut w, &mut info);
    extract_video_codec(&mut w, &mut info);
    extract_audio_codec(&mut w, &mut info);
    extract_resolution(&mut w, &mut info);
    extract_year(&mut w, &mut info);
    stages::season_episode::extract(&mut w, &mut info);

    stages::title::extract(&mut w, &mut info);
    stages::subtitles::extract(&w, &mut info);
    stages::release_group::extract(&mut w, &mut info);

    info
}

fn excise(w: &mut Working, start: usize, end: usize) {
    w.mark(start);
    w.name = splice(&w.name, start, end);
}

/// Pass 1 — TmdbID.
fn extract_tmdb_id(w: &mut Working, info: &mut MediaInfo) {
    let Some(caps) = find_last_bounded(&TMDB_ID_RE, &w.name) else {
        return;
    };
    info.tmdb_id = Some(caps[1].to_string());
    let m = caps.get(0).expect("group 0 always present");
    excise(w, m.start(), m.end());
}

/// Pass 2 — FrameRate.
fn extract_frame_rate(w: &mut Working, info: &mut MediaInfo) {
    let Some(caps) = find_last_bounded(&FRAME_RATE_RE, &w.name) else {
        return;
    };
    info.frame_rate = Some(format!("{}fps", &caps[1]));
    let m = caps.get(0).expect("group 0 always present");
    excise(w, m.start(), m.end());
}

/// Pass 3 — Quality.
fn extract_quality(w: &mut Working, info: &mut MediaInfo) {
    let Some(caps) = find_last_bounded(&QUALITY_RE, &w.name) else {
        return;
    };
    info.quality = Some(normalize_quality(&caps[1]));
    let m = caps.get(0).expect("group 0 always present");
    excise(w, m.start(), m.end());
}

/// Pass 4 — HDR.
fn extract_hdr(w: &mut Working, info: &mut MediaInfo) {
    let Some(caps) = find_last_bounded(&HDR_RE, &w.name) else {
        return;
    };
    info.hdr = Some(normalize_hdr(&caps[1]));
    let m = caps.get(0).expect("group 0 always present");
    excise(w, m.start(), m.end());
}

/// Pass 5 — VideoCodec.
fn extract_video_codec(w: &mut Working, info: &mut MediaInfo) {
    let Some(caps) = find_last_bounded(&VIDEO_CODEC_RE, &w.name) else {
        return;
    };
    info.video_codec = Some(normalize_video_codec(&caps[1]));
    let m = caps.get(0).expect("group 0 always present");
    excise(w, m.start(), m.end());
}

/// Pass 6 — AudioCodec.
fn extract_audio_codec(w: &mut Working, info: &mut MediaInfo) {
    let Some(caps) = find_last_bounded(&AUDIO_CODEC_RE, &w.name) else {
        return;
    };
    let m0 = caps.get(0).expect("group 0 always present");
    let raw = m0.as_str().to_string();
    let (start, end) = (m0.start(), m0.end());
    info.audio_codec = Some(normalize_audio_codec(&raw));
    excise(w, start, end);
}

/// Pass 7 — Resolution. Tries `WxH` and `NNNNp|Nk` and takes whichever
/// match is rightmost, per the shared "last match wins" rule.
fn extract_resolution(w: &mut Working, info: &mut MediaInfo) {
    let wxh = find_last_bounded(&RESOLUTION_WXH_RE, &w.name);
    let pk = find_last_bounded(&RESOLUTION_PK_RE, &w.name);

    let (caps, is_wxh) = match (wxh, pk) {
        (Some(a), Some(b)) => {
            if a.get(0).unwrap().start() >= b.get(0).unwrap().start() {
                (a, true)
            } else {
                (b, false)
            }
        }
        (Some(a), None) => (a, true),
        (None, Some(b)) => (b, false),
        (None, None) => return,
    };

    if is_wxh {
        info.resolution = Some(format!("{}p", &caps[2]));
    } else {
        let raw = caps[1].to_lowercase();
        info.resolution = Some(if raw == "4k" {
            "2160p".to_string()
        } else {
            raw
        });
    }
    let m = caps.get(0).expect("group 0 always present");
    excise(w, m.start(), m.end());
}

/// Pass 8 — Year. A year immediately followed by `)` is accepted on
/// sight; otherwise the rightmost bounded match wins.
fn extract_year(w: &mut Working, info: &mut MediaInfo) {
    let matches = find_all_bounded(&YEAR_RE, &w.name);
    if matches.is_empty() {
        return;
    }

    let chosen_idx = matches
        .iter()
        .position(|caps| {
            let m = caps.get(0).unwrap();
            w.name[m.end()..].starts_with(')')
        })
        .unwrap_or(matches.len() - 1);

    let m = matches[chosen_idx].get(0).unwrap();
    let (start, end) = (m.start(), m.end());
    info.year = Some(m.as_str().to_string());
    w.year_index_start = Some(start);
    w.mark(start);
    w.name = splice(&w.name, start, end);
}

pub(crate) fn capture_u32(caps: &Captures, idx: usize) -> Option<u32> {
    caps.get(idx).and_then(|m| parse_digits(m.as_str()))
}

pub(crate) fn detect_language_spans(text: &str) -> Vec<language::LanguageSpan> {
    language::ScriptLanguageDetector::new().detect(text)
}
