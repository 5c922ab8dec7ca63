//! Release-group tail scan.
//!
//! Prefers the bracketed tag the title stage already peeled off
//! (`title_group_candidate`), since a leading `[Group]` is the
//! strongest signal. Failing that, looks for a trailing
//! `[name-group]`-style bracket anywhere left in the buffers, and
//! finally falls back to a bare `-GROUP` suffix at the tail of
//! whatever text remains, the classic Western scene-release
//! convention.

use crate::boundary::find_last_bounded;
use crate::model::MediaInfo;
use crate::parser::Working;
use crate::patterns::BRACKETED_GROUP_RE;

pub(crate) fn extract(w: &mut Working, info: &mut MediaInfo) {
    if let Some(candidate) = w.title_group_candidate.take() {
        info.release_group = Some(candidate);
        return;
    }

    if let Some(caps) = find_last_bounded(&BRACKETED_GROUP_RE, &w.other) {
        let group = caps[1].trim();
        if !group.is_empty() {
            info.release_group = Some(group.to_string());
            return;
        }
    }

    let trimmed = w.other.trim_end_matches(|c: char| c == '.' || c.is_whitespace());
    if let Some(idx) = trimmed.rfind('-') {
        let tail = trimmed[idx + 1..].trim();
        if !tail.is_empty() && tail.chars().all(|c| c.is_alphanumeric()) {
            info.release_group = Some(tail.to_string());
        }
    }
}
