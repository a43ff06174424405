// File: src/render.rs
use crate::core::types::{MatchInfo, MatchResult};

/// A slice of a matched word, highlighted when it belongs to a sub-match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Splits a word into alternating plain and highlighted slices that together
/// cover the whole word, tail included.
pub fn segments(info: &MatchInfo) -> Vec<Segment<'_>> {
    let source: &str = &info.source;
    let mut out = Vec::with_capacity(info.sub_matches.len() * 2 + 1);
    let mut last = 0;

    for span in &info.sub_matches {
        if span.start > last {
            out.push(Segment { text: &source[last..span.start], highlighted: false });
        }
        out.push(Segment { text: &source[span.start..span.end], highlighted: true });
        last = span.end;
    }
    if last < source.len() {
        out.push(Segment { text: &source[last..], highlighted: false });
    }
    out
}

/// Segments for any result; a plain result is a single unhighlighted slice.
pub fn result_segments(result: &MatchResult) -> Vec<Segment<'_>> {
    match result {
        MatchResult::Plain { word } => vec![Segment { text: word, highlighted: false }],
        MatchResult::Colorized(info) => segments(info),
    }
}

/// Text-only rendering with highlighted parts wrapped in `open`/`close`.
pub fn marked_text(result: &MatchResult, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(result.word().len() + 8);
    for seg in result_segments(result) {
        if seg.highlighted {
            out.push_str(open);
            out.push_str(seg.text);
            out.push_str(close);
        } else {
            out.push_str(seg.text);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{SubMatchSpan, Word};

    fn info(word: &str, spans: &[(usize, usize)]) -> MatchInfo {
        MatchInfo {
            source: Word::from(word),
            sub_matches: spans.iter().map(|&(start, end)| SubMatchSpan { start, end }).collect(),
        }
    }

    #[test]
    fn keeps_the_final_character_of_the_tail() {
        let info = info("plastic", &[(2, 4)]);
        let texts: Vec<&str> = segments(&info).iter().map(|s| s.text).collect();
        assert_eq!(texts, ["pl", "as", "tic"]);
    }

    #[test]
    fn adjacent_spans() {
        let r = MatchResult::Colorized(info("aa", &[(0, 1), (1, 2)]));
        assert_eq!(marked_text(&r, "[", "]"), "[a][a]");
    }

    #[test]
    fn plain_result_is_one_segment() {
        let r = MatchResult::Plain { word: Word::from("coding") };
        assert_eq!(marked_text(&r, "[", "]"), "coding");
    }
}
