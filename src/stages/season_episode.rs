//! Pass 9 — Season/Episode, and the title/other split.
//!
//! A successful match, in either form, splits the working buffer: the
//! portion before the match becomes the remaining title text (`name`);
//! everything from the match onward becomes the trailing descriptor
//! buffer (`other`) that the file-type, subtitle, and release-group
//! stages scan.
//!
//! The bare `EPISODE_ONLY_RE` form (a lone number, optionally
//! range-suffixed) is far more permissive than `SEASON_EPISODE_RE` and
//! would otherwise snag stray digits in a plain title. It is rejected
//! in two cases: when a year was found and the match's start offset is
//! before `year_index_start` — a bare number appearing before the year
//! is almost certainly part of the title (`"007.Show.2020.mkv"` must
//! not read `007` as an episode) — or when no year and no other
//! descriptor ever anchored the buffer at all (a name with nothing
//! else recognized and a trailing bare number is more likely an
//! edition/part marker than an episode, as in `"01.mkv"`). A rejected
//! match still splits the buffer at `title_index_end`, if one was ever
//! recorded, so the title/other boundary established by earlier passes
//! is preserved.

use crate::boundary::find_last_bounded;
use crate::model::MediaInfo;
use crate::parser::{capture_u32, Working};
use crate::patterns::{EPISODE_ONLY_RE, SEASON_EPISODE_RE};

pub(crate) fn extract(w: &mut Working, info: &mut MediaInfo) {
    if let Some(caps) = find_last_bounded(&SEASON_EPISODE_RE, &w.name) {
        let m = caps.get(0).expect("group 0 always present");
        let (start, end) = (m.start(), m.end());
        info.season_number = capture_u32(&caps, 1);
        info.episode_number = capture_u32(&caps, 2);
        info.second_episode_number = capture_u32(&caps, 3);
        w.mark(start);
        w.split_at(start, end);
        return;
    }

    let Some(caps) = find_last_bounded(&EPISODE_ONLY_RE, &w.name) else {
        return;
    };
    let m = caps.get(0).expect("group 0 always present");
    let start = m.start();

    let rejected = match w.year_index_start {
        Some(year_start) => start < year_start,
        None => w.title_index_end.is_none(),
    };
    if rejected {
        if let Some(title_end) = w.title_index_end {
            w.split_at(title_end, title_end);
        }
        return;
    }

    let end = m.end();
    info.episode_number = capture_u32(&caps, 1);
    info.second_episode_number = capture_u32(&caps, 2);
    w.mark(start);
    w.split_at(start, end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn working(input: &str) -> Working {
        Working::new(normalize(input))
    }

    #[test]
    fn season_episode_form_splits_buffer() {
        let mut info = MediaInfo::default();
        let mut w = working("Show.S02E05.1080p");
        extract(&mut w, &mut info);
        assert_eq!(info.season_number, Some(2));
        assert_eq!(info.episode_number, Some(5));
        assert!(w.other.contains("1080p"));
    }

    #[test]
    fn bare_episode_rejected_with_no_other_anchor() {
        let mut info = MediaInfo::default();
        let mut w = working("01");
        extract(&mut w, &mut info);
        assert_eq!(info.episode_number, None);
    }

    #[test]
    fn bare_episode_accepted_when_year_anchored() {
        let mut info = MediaInfo::default();
        let mut w = working("Show.01");
        w.year_index_start = Some(0);
        extract(&mut w, &mut info);
        assert_eq!(info.episode_number, Some(1));
    }

    #[test]
    fn bare_episode_accepted_when_no_year_but_other_anchor_present() {
        let mut info = MediaInfo::default();
        let mut w = working("Some.Anime.01.1080p");
        w.title_index_end = Some(w.name.find("1080p").unwrap());
        extract(&mut w, &mut info);
        assert_eq!(info.episode_number, Some(1));
    }

    #[test]
    fn bare_number_before_year_is_not_an_episode() {
        let mut info = MediaInfo::default();
        // "007.Show.2020.mkv" with the year already excised by the
        // year pass, leaving its recorded start offset pointing past
        // the leading "007".
        let mut w = working("007.Show");
        w.year_index_start = Some(5);
        extract(&mut w, &mut info);
        assert_eq!(info.episode_number, None);
    }
}
