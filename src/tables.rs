//! Character-class tables: extension sets and canonicalization maps.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Known video container/codec extensions, from
    /// https://en.wikipedia.org/wiki/Video_file_format (as the reference
    /// comments it).
    pub static ref VIDEO_EXTENSIONS: HashSet<&'static str> = [
        ".3g2", ".3gp", ".3gp2", ".asf", ".avi", ".divx", ".flv",
        ".iso", ".m4v", ".mk2", ".mk3d", ".mka", ".mkv", ".mov",
        ".mp4", ".mp4a", ".mpeg", ".mpg", ".ogg", ".ogm", ".ogv",
        ".qt", ".ra", ".ram", ".rm", ".ts", ".m2ts", ".vob", ".wav",
        ".webm", ".wma", ".wmv",
    ]
    .into_iter()
    .collect();

    /// Known subtitle extensions.
    pub static ref SUBTITLE_EXTENSIONS: HashSet<&'static str> =
        [".srt", ".sub", ".idx", ".ass", ".ssa"].into_iter().collect();

    static ref AUDIO_CHANNELS_RE: Regex = Regex::new(r"\d\.\d").unwrap();
}

/// Parses a digit-only capture into a `u32`. Malformed digits never
/// panic or bubble an error — the field is simply left absent.
pub fn parse_digits(s: &str) -> Option<u32> {
    s.parse::<u32>().ok()
}

/// Canonicalizes a quality/source token to its canonical display form.
pub fn normalize_quality(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace('.', "");
    if lowered.contains("remux") {
        return "Remux".to_string();
    }
    match lowered.as_str() {
        "web-dl" | "webdl" => "WEB-DL".to_string(),
        "web-rip" | "webrip" => "WEBRip".to_string(),
        "bluray" | "blu-ray" => "BluRay".to_string(),
        "bdrip" | "bd-rip" => "BDRip".to_string(),
        "brrip" | "br-rip" => "BRRip".to_string(),
        _ => lowered,
    }
}

/// Canonicalizes a video codec token to its canonical display form.
pub fn normalize_video_codec(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace(['.', '-'], "");
    match lowered.as_str() {
        "x264" | "h264" | "avc" => "H264".to_string(),
        "x265" | "h265" | "hevc" => "H265".to_string(),
        _ => raw.to_uppercase(),
    }
}

/// Canonicalizes an HDR token to its canonical display form.
pub fn normalize_hdr(raw: &str) -> String {
    let upper = raw.to_uppercase().replace('-', "");
    if upper.contains("DOLBY") || upper == "DOVI" {
        "DV".to_string()
    } else {
        upper
    }
}

/// Canonicalizes an audio codec token to its canonical display form.
///
/// Uppercases the token, finds the first `N.N` channel-count substring,
/// and splits into `[prefix | channels | suffix]`, rewriting known
/// sub-tokens (`TRUEHD` -> `TrueHD`, `ATMOS` -> `Atmos`, `DTSHD` ->
/// `DTS-HD`) before rejoining with `.`.
pub fn normalize_audio_codec(raw: &str) -> String {
    let upper = raw.to_uppercase();
    let Some(m) = AUDIO_CHANNELS_RE.find(&upper) else {
        return rewrite_audio_token(&upper);
    };

    let prefix = rewrite_side(&upper[..m.start()]);
    let suffix = rewrite_side(&upper[m.end()..]);
    let channels = &upper[m.start()..m.end()];

    let mut parts = Vec::new();
    if !prefix.is_empty() {
        parts.push(prefix);
    }
    parts.push(channels.to_string());
    if !suffix.is_empty() {
        parts.push(suffix);
    }
    parts.join(".")
}

fn rewrite_side(side: &str) -> String {
    side.split(['.', ' '])
        .filter(|tok| !tok.is_empty())
        .map(rewrite_audio_token)
        .collect::<Vec<_>>()
        .join(".")
}

fn rewrite_audio_token(tok: &str) -> String {
    match tok {
        "TRUEHD" => "TrueHD".to_string(),
        "ATMOS" => "Atmos".to_string(),
        "DTSHD" => "DTS-HD".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_normalization() {
        assert_eq!(normalize_quality("WEB-DL"), "WEB-DL");
        assert_eq!(normalize_quality("webrip"), "WEBRip");
        assert_eq!(normalize_quality("Blu-Ray"), "BluRay");
        assert_eq!(normalize_quality("BluRay.Remux"), "Remux");
    }

    #[test]
    fn video_codec_normalization() {
        assert_eq!(normalize_video_codec("x264"), "H264");
        assert_eq!(normalize_video_codec("HEVC"), "H265");
        assert_eq!(normalize_video_codec("VP9"), "VP9");
    }

    #[test]
    fn hdr_normalization() {
        assert_eq!(normalize_hdr("HDR10+"), "HDR10+");
        assert_eq!(normalize_hdr("Dolby-Vision"), "DV");
        assert_eq!(normalize_hdr("DoVi"), "DV");
    }

    #[test]
    fn audio_codec_normalization() {
        assert_eq!(normalize_audio_codec("DDP5.1.Atmos"), "DDP.5.1.Atmos");
        assert_eq!(normalize_audio_codec("DTS-HD.MA.7.1"), "DTS-HD.MA.7.1");
        assert_eq!(normalize_audio_codec("TrueHD.7.1"), "TrueHD.7.1");
        assert_eq!(normalize_audio_codec("AAC"), "AAC");
    }
}
