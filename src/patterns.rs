//! The regex catalogue for every content descriptor.
//!
//! Every pattern here matches a descriptor's content only; the shared
//! boundary discipline is enforced separately by
//! `boundary::find_last_bounded`, not baked into these patterns, since
//! the `regex` crate has no lookaround support.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref TMDB_ID_RE: Regex = Regex::new(r"(?i)tmdb[-=](\d+)").unwrap();

    pub static ref FRAME_RATE_RE: Regex = Regex::new(r"(?i)(\d{2,3})fps").unwrap();

    pub static ref QUALITY_RE: Regex = Regex::new(
        r"(?i)(WEB-?DL|Blu-?Ray(?:[.\s-]?Remux)?|Remux|WEB-?Rip|BR-?Rip|BD-?Rip)"
    )
    .unwrap();

    pub static ref HDR_RE: Regex =
        Regex::new(r"(?i)(HDR10\+?|HDR|Dolby[ .-]?Vision|HLG|DoVi|DV)").unwrap();

    pub static ref VIDEO_CODEC_RE: Regex =
        Regex::new(r"(?i)([hx]\.?26[45]|AVC|HEVC|AV1|VP-?9)").unwrap();

    pub static ref AUDIO_CODEC_RE: Regex = Regex::new(
        r"(?i)(DTS-HD|DTS|TrueHD|Dolby\s?Digital\s?Plus|DDP|DD\+|Dolby\s?Digital|DD|AAC|FLAC)(?:[.\s-]?(?:\d\.\d|MA|Atmos))*"
    )
    .unwrap();

    pub static ref RESOLUTION_WXH_RE: Regex = Regex::new(r"(\d{3,4})[xX](\d{3,4})").unwrap();
    pub static ref RESOLUTION_PK_RE: Regex = Regex::new(r"(?i)(\d{1,4}[pk])").unwrap();

    pub static ref YEAR_RE: Regex = Regex::new(r"(19\d{2}|20\d{2})").unwrap();

    pub static ref SEASON_EPISODE_RE: Regex = Regex::new(
        r"(?i)S(?:eason)?\s*(\d{1,2})(?:\s*[E#\-\[]\s*(\d{1,4})(?:-(\d{1,4}))?)?"
    )
    .unwrap();
    pub static ref EPISODE_ONLY_RE: Regex =
        Regex::new(r"(?i)(?:[#第E])?\s*(\d{1,4})(?:-(\d{1,4}))?\s*集?").unwrap();

    pub static ref TITLE_SEASON_MARKER_RE: Regex = Regex::new(r"第[^季]*季").unwrap();

    pub static ref BRACKETED_GROUP_RE: Regex = Regex::new(r"\[([^\[\]]*-[^\[\]]*)\]").unwrap();
}
