//! Boundary discipline shared by every descriptor extraction pass.
//!
//! Every pattern used by a pass matches only its descriptor's content —
//! the surrounding boundary-class check is applied once, generically,
//! by `find_last_bounded` rather than baked into each
//! regex, since the `regex` crate has no lookaround support. A
//! successful match is excised from the working buffer by `splice`,
//! which replaces the match (plus one boundary character on each side)
//! with a single `.`. This keeps the buffer boundary-matchable for
//! neighbouring passes without ever re-inserting characters.

use regex::{Captures, Regex};

/// True if `c` is a boundary character on the left side of a descriptor:
/// `.`, space, `-`, `[`, `{`, `(`, `@`.
pub fn is_left_boundary(c: char) -> bool {
    matches!(c, '.' | ' ' | '\t' | '-' | '[' | '{' | '(' | '@')
}

/// True if `c` is a boundary character on the right side of a
/// descriptor: `.`, space, `-`, `]`, `}`, `)`, `@`.
pub fn is_right_boundary(c: char) -> bool {
    matches!(c, '.' | ' ' | '\t' | '-' | ']' | '}' | ')' | '@')
}

/// Surrounds `s` with sentinel spaces so descriptors at either end of the
/// buffer still have a matchable boundary on both sides.
pub fn sentinelize(s: &str) -> String {
    format!(" {s} ")
}

fn is_bounded(haystack: &str, start: usize, end: usize) -> bool {
    let left_ok = start == 0
        || haystack[..start]
            .chars()
            .next_back()
            .map(is_left_boundary)
            .unwrap_or(true);
    let right_ok = end == haystack.len()
        || haystack[end..]
            .chars()
            .next()
            .map(is_right_boundary)
            .unwrap_or(true);
    left_ok && right_ok
}

/// The last (rightmost) boundary-anchored match of `re` in `haystack`,
/// per the "last match wins" tie-break shared by every descriptor pass.
pub fn find_last_bounded<'h>(re: &Regex, haystack: &'h str) -> Option<Captures<'h>> {
    re.captures_iter(haystack)
        .filter(|c| {
            let m = c.get(0).expect("group 0 always present");
            is_bounded(haystack, m.start(), m.end())
        })
        .last()
}

/// All boundary-anchored matches of `re` in `haystack`, in input order.
pub fn find_all_bounded<'h>(re: &Regex, haystack: &'h str) -> Vec<Captures<'h>> {
    re.captures_iter(haystack)
        .filter(|c| {
            let m = c.get(0).expect("group 0 always present");
            is_bounded(haystack, m.start(), m.end())
        })
        .collect()
}

/// Excises `[start, end)` from `buf`, extending the removed span by one
/// boundary character on each side (if present), and replaces it with a
/// single `.` so that adjacent boundary-anchored patterns still match
/// their neighbours.
pub fn splice(buf: &str, start: usize, end: usize) -> String {
    let mut left = start;
    if left > 0 {
        if let Some(c) = buf[..left].chars().next_back() {
            if is_left_boundary(c) {
                left -= c.len_utf8();
            }
        }
    }

    let mut right = end;
    if right < buf.len() {
        if let Some(c) = buf[right..].chars().next() {
            if is_right_boundary(c) {
                right += c.len_utf8();
            }
        }
    }

    format!("{}.{}", &buf[..left], &buf[right..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splice_consumes_one_boundary_each_side() {
        let buf = " Movie.1080p.BluRay.mkv ";
        let re = Regex::new(r"1080p").unwrap();
        let m = re.find(buf).unwrap();
        let spliced = splice(buf, m.start(), m.end());
        assert_eq!(spliced, " Movie.BluRay.mkv ");
    }

    #[test]
    fn find_last_bounded_picks_rightmost() {
        let re = Regex::new(r"\d{4}").unwrap();
        let caps = find_last_bounded(&re, " Movie.2020.2021.mkv ").unwrap();
        assert_eq!(&caps[0], "2021");
    }

    #[test]
    fn find_last_bounded_rejects_unbounded_match() {
        // "264" is embedded in "x264" without a left boundary before it.
        let re = Regex::new(r"264").unwrap();
        assert!(find_last_bounded(&re, " movie.x264.mkv ").is_none());
    }
}
