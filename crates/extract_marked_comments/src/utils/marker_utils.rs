// src/utils/marker_utils.rs

/// Iterates over the lines of `content`, treating `\r\n`, `\n` and a lone
/// `\r` as line terminators. Terminators are never part of a yielded line.
///
/// A trailing terminator does not produce an extra empty line, matching
/// `str::lines`.
pub fn split_lines(content: &str) -> SplitLines<'_> {
    SplitLines { rest: content }
}

/// Iterator returned by [`split_lines`].
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(|c: char| c == '\n' || c == '\r') {
            Some(idx) => {
                let line = &self.rest[..idx];
                let bytes = self.rest.as_bytes();
                let terminator_len = if bytes[idx] == b'\r' && bytes.get(idx + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[idx + terminator_len..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Returns the documentation text of a single line: everything after the
/// first occurrence of `marker`, with surrounding whitespace trimmed.
///
/// Returns `None` when the line does not contain the marker. A line whose
/// marker is followed only by whitespace yields `Some("")`.
pub fn extract_comment<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.split_once(marker).map(|(_code, comment)| comment.trim())
}

/// Extracts every marked comment from `content`, in line order.
pub fn extract_comments_from_str(content: &str, marker: &str) -> Vec<String> {
    split_lines(content)
        .filter_map(|line| extract_comment(line, marker))
        .map(str::to_string)
        .collect()
}
