//! Multi-language title segmentation.
//!
//! The parser depends on a multilingual detector behind one narrow
//! interface: given a string, partition it into `(start, end,
//! language)` spans in input order. No statistical language-ID model
//! is available here, so detection falls back to Unicode script-range
//! classification, restricted to the three languages the parser cares
//! about: Chinese, Japanese, English.

/// One language-coherent span of a title segment. `start`/`end` are
/// byte offsets into the segment that was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSpan {
    pub start: usize,
    pub end: usize,
    pub language: String,
}

/// Narrow interface to a multilingual detection backend.
pub trait LanguageDetector: Send + Sync {
    /// Partitions `text` into language-coherent spans, in input order.
    /// An empty or whitespace-only input yields no spans.
    fn detect(&self, text: &str) -> Vec<LanguageSpan>;
}

/// Output language tag.
pub const LANG_CHINESE: &str = "zh";
pub const LANG_JAPANESE: &str = "ja";
pub const LANG_ENGLISH: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Chinese,
    Japanese,
    Latin,
    Other,
}

fn classify(c: char) -> Script {
    match c as u32 {
        // Hiragana, Katakana.
        0x3040..=0x309F | 0x30A0..=0x30FF => Script::Japanese,
        // CJK Unified Ideographs — shared by Chinese and Japanese; only
        // counted as Chinese when no kana co-occurs in the run (see
        // `majority_script`).
        0x4E00..=0x9FFF => Script::Chinese,
        _ if c.is_ascii_alphabetic() => Script::Latin,
        _ => Script::Other,
    }
}

fn script_tag(script: Script) -> &'static str {
    match script {
        Script::Chinese => LANG_CHINESE,
        Script::Japanese => LANG_JAPANESE,
        Script::Latin => LANG_ENGLISH,
        Script::Other => LANG_ENGLISH,
    }
}

/// Script-range based detector: walks the text char by char, grouping
/// consecutive characters of a compatible script into one span, and
/// resolving Han-only runs to Chinese (since kana already wins
/// Japanese whenever it is present in the same run).
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptLanguageDetector;

impl ScriptLanguageDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for ScriptLanguageDetector {
    fn detect(&self, text: &str) -> Vec<LanguageSpan> {
        let mut spans: Vec<LanguageSpan> = Vec::new();
        let mut cur_start = 0usize;
        let mut cur_script: Option<Script> = None;
        let mut has_kana_in_run = false;

        let push_span = |spans: &mut Vec<LanguageSpan>,
                          start: usize,
                          end: usize,
                          script: Script,
                          has_kana: bool| {
            if start == end {
                return;
            }
            let resolved = if script == Script::Chinese && has_kana {
                Script::Japanese
            } else {
                script
            };
            spans.push(LanguageSpan {
                start,
                end,
                language: script_tag(resolved).to_string(),
            });
        };

        for (idx, c) in text.char_indices() {
            if c.is_whitespace() {
                continue;
            }
            let script = classify(c);
            if script == Script::Other {
                continue;
            }
            let is_kana = matches!(c as u32, 0x3040..=0x309F | 0x30A0..=0x30FF);

            match cur_script {
                None => {
                    cur_start = idx;
                    cur_script = Some(script);
                    has_kana_in_run = is_kana;
                }
                Some(s) if compatible(s, script) => {
                    has_kana_in_run |= is_kana;
                    // Japanese is the more specific classification; once
                    // seen, it sticks for the remainder of the run.
                    if is_kana {
                        cur_script = Some(Script::Japanese);
                    }
                }
                Some(s) => {
                    push_span(&mut spans, cur_start, idx, s, has_kana_in_run);
                    cur_start = idx;
                    cur_script = Some(script);
                    has_kana_in_run = is_kana;
                }
            }
        }

        if let Some(s) = cur_script {
            push_span(&mut spans, cur_start, text.len(), s, has_kana_in_run);
        }

        spans
    }
}

/// CJK (Han/kana) and Latin scripts never belong to the same run; Han
/// and kana do, since mixed Chinese/Japanese runs should resolve to one
/// language rather than fragmenting into single-character spans.
fn compatible(a: Script, b: Script) -> bool {
    matches!(
        (a, b),
        (Script::Chinese, Script::Chinese)
            | (Script::Chinese, Script::Japanese)
            | (Script::Japanese, Script::Chinese)
            | (Script::Japanese, Script::Japanese)
            | (Script::Latin, Script::Latin)
    )
}
