//! Line scanning: physical-line reading with a bounded growable
//! buffer, comment and blank filtering, and 1-based line numbering.

use std::io::BufRead;

use crate::error::ParseError;

/// Initial capacity of the scanner's line buffer.
pub const INITIAL_LINE_CAPACITY: usize = 64 * 1024;

/// Default hard ceiling on the length of a single physical line, in
/// bytes. Field values can legitimately run to hundreds of kilobytes;
/// the ceiling exists to bound memory on malformed input.
pub const MAX_LINE_LEN: usize = 1024 * 1024;

/// Reserved prefix marking a line as HTTP-only cookie data rather than
/// a comment. Case-sensitive.
pub(crate) const HTTP_ONLY_PREFIX: &str = "#HttpOnly_";

/// A trimmed, non-blank, non-comment line eligible for field parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLine {
    /// 1-based physical line number, counting skipped lines, so error
    /// messages reference the true source line.
    pub number: u64,
    /// The line text, trimmed of surrounding whitespace.
    pub text: String,
}

/// Iterator over the candidate lines of a cookies.txt stream.
///
/// Blank lines are skipped. Lines starting with `#` are skipped as
/// comments unless they start with the exact `#HttpOnly_` prefix,
/// which marks cookie data. Each scanner owns its buffer; no state is
/// shared across instances.
pub struct LineScanner<R> {
    reader: R,
    buf: Vec<u8>,
    line: u64,
    max_line_len: usize,
    done: bool,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self::with_max_line_len(reader, MAX_LINE_LEN)
    }

    /// Scanner with a custom per-line ceiling, for inputs known to
    /// carry larger values than [`MAX_LINE_LEN`] allows.
    pub fn with_max_line_len(reader: R, max_line_len: usize) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(INITIAL_LINE_CAPACITY.min(max_line_len)),
            line: 0,
            max_line_len,
            done: false,
        }
    }

    /// Read one physical line (without its terminator) into the
    /// internal buffer. Returns `Ok(false)` at end of input.
    fn fill_line(&mut self) -> Result<bool, ParseError> {
        self.buf.clear();
        loop {
            let (consumed, reached_newline) = {
                let available = self.reader.fill_buf()?;
                if available.is_empty() {
                    return Ok(!self.buf.is_empty());
                }
                match available.iter().position(|&b| b == b'\n') {
                    Some(pos) => {
                        self.buf.extend_from_slice(&available[..pos]);
                        (pos + 1, true)
                    }
                    None => {
                        self.buf.extend_from_slice(available);
                        (available.len(), false)
                    }
                }
            };
            self.reader.consume(consumed);

            if self.buf.len() > self.max_line_len {
                return Err(ParseError::LineTooLong {
                    line: self.line + 1,
                    limit: self.max_line_len,
                });
            }
            if reached_newline {
                return Ok(true);
            }
        }
    }

    fn next_candidate(&mut self) -> Result<Option<CandidateLine>, ParseError> {
        loop {
            if !self.fill_line()? {
                return Ok(None);
            }
            self.line += 1;

            // Invalid UTF-8 is carried through lossily rather than
            // rejected; the format itself is ASCII-delimited.
            let text = String::from_utf8_lossy(&self.buf);
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('#') && !trimmed.starts_with(HTTP_ONLY_PREFIX) {
                tracing::trace!(line = self.line, "skipping comment line");
                continue;
            }

            return Ok(Some(CandidateLine {
                number: self.line,
                text: trimmed.to_string(),
            }));
        }
    }
}

impl<R: BufRead> Iterator for LineScanner<R> {
    type Item = Result<CandidateLine, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_candidate() {
            Ok(Some(candidate)) => Some(Ok(candidate)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn scan(input: &str) -> Vec<CandidateLine> {
        LineScanner::new(input.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_skips_blanks_and_comments() {
        let candidates = scan(
            "# comment\n\n   \n.netscape.com\tTRUE\t/\tFALSE\t0\tid\tv\n# trailing\n",
        );
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].number, 4);
        assert_eq!(candidates[0].text, ".netscape.com\tTRUE\t/\tFALSE\t0\tid\tv");
    }

    #[test]
    fn test_http_only_prefix_is_not_a_comment() {
        let candidates = scan("#HttpOnly_.netscape.com TRUE / FALSE 0 id v\n");
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].text.starts_with(HTTP_ONLY_PREFIX));

        // Prefix matching is case-sensitive.
        let candidates = scan("#httponly_.netscape.com TRUE / FALSE 0 id v\n");
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_line_numbers_count_skipped_lines() {
        let candidates = scan("#a\n#b\n\nx 1 / 1 0 n v\n\ny 0 / 0 0 n v");
        assert_eq!(candidates[0].number, 4);
        assert_eq!(candidates[1].number, 6);
    }

    #[test]
    fn test_last_line_without_newline() {
        let candidates = scan("x 1 / 1 0 n v");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].number, 1);
    }

    #[test]
    fn test_crlf_terminators_are_trimmed() {
        let candidates = scan("x 1 / 1 0 n v\r\n");
        assert_eq!(candidates[0].text, "x 1 / 1 0 n v");
    }

    #[test]
    fn test_long_line_within_ceiling() {
        let value = "v".repeat(200_000);
        let input = format!(".netscape.com 1 / 1 0 name {value}\n");
        let candidates = scan(&input);
        assert!(candidates[0].text.ends_with(&value));
    }

    #[test]
    fn test_line_over_ceiling_fails() {
        let input = format!("x 1 / 1 0 n {}\n", "v".repeat(64));
        let err = LineScanner::with_max_line_len(input.as_bytes(), 32)
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::LineTooLong { line: 1, limit: 32 }
        ));
    }

    #[test]
    fn test_stream_read_error_passes_through() {
        struct FailingReader;
        impl io::Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "boom"))
            }
        }

        let reader = io::BufReader::new(FailingReader);
        let err = LineScanner::new(reader)
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
