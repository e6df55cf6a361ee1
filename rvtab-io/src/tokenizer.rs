use std::io::{self, BufRead};

use bstr::ByteSlice;

use crate::consts::DEFAULT_SEPARATORS;

///
/// One non-blank input line split into tokens.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the input, blank lines included.
    pub number: usize,
    pub tokens: Vec<String>,
}

impl Line {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

///
/// Splits each line of a reader on a set of separator characters. Runs of separators count as
/// one, and lines with no tokens are skipped. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD instead of failing the read.
///
pub struct LineTokenizer<R> {
    reader: R,
    separators: Vec<char>,
    buf: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> LineTokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self::with_separators(reader, DEFAULT_SEPARATORS)
    }

    pub fn with_separators(reader: R, separators: &str) -> Self {
        LineTokenizer {
            reader,
            separators: separators.chars().collect(),
            buf: Vec::new(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for LineTokenizer<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
            self.line_number += 1;

            let content = self.buf.trim_end_with(|c| c == '\n' || c == '\r');
            let tokens: Vec<String> = content
                .fields_with(|c| self.separators.contains(&c))
                .map(|t| t.to_str_lossy().into_owned())
                .collect();

            if !tokens.is_empty() {
                return Some(Ok(Line {
                    number: self.line_number,
                    tokens,
                }));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn tokenize(input: &str, separators: &str) -> Vec<Line> {
        LineTokenizer::with_separators(Cursor::new(input.to_string()), separators)
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[rstest]
    fn test_collapses_mixed_whitespace() {
        let lines = tokenize("FID  IID\tM1 \t M2\n", DEFAULT_SEPARATORS);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].tokens, vec!["FID", "IID", "M1", "M2"]);
    }

    #[rstest]
    fn test_blank_lines_are_skipped_but_counted() {
        let lines = tokenize("a b\n\n   \nc d\r\n", DEFAULT_SEPARATORS);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[1].number, 4);
        assert_eq!(lines[1].tokens, vec!["c", "d"]);
    }

    #[rstest]
    fn test_last_line_without_newline() {
        let lines = tokenize("x\ty", "\t");
        assert_eq!(lines[0].tokens, vec!["x", "y"]);
    }

    #[rstest]
    fn test_invalid_utf8_is_replaced() {
        let input: &[u8] = b"P1 1\nJos\xE9 3\nP3 5\n";
        let lines = LineTokenizer::new(input)
            .collect::<io::Result<Vec<_>>>()
            .unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].tokens, vec!["Jos\u{FFFD}", "3"]);
        assert_eq!(lines[2].tokens, vec!["P3", "5"]);
    }

    #[rstest]
    fn test_custom_separators() {
        let lines = tokenize("a,b;c d\n", ",;");
        assert_eq!(lines[0].tokens, vec!["a", "b", "c d"]);
    }
}
