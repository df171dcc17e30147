//! Structural classification of source bytes.
//!
//! Bracket and brace counting must ignore delimiters that sit inside string
//! literals or comments (`path: 'a[0]'`, `// ]`). One forward pass marks every
//! byte as code or not; all scans consult the mask.

pub(crate) struct CodeMask {
    code: Vec<bool>,
}

impl CodeMask {
    pub(crate) fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let len = bytes.len();
        let mut code = vec![true; len];
        let mut i = 0;

        while i < len {
            let end = match bytes[i] {
                b'/' if bytes.get(i + 1) == Some(&b'/') => bytes[i..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(len, |p| i + p),
                b'/' if bytes.get(i + 1) == Some(&b'*') => text[i + 2..]
                    .find("*/")
                    .map_or(len, |p| i + 2 + p + 2),
                quote @ (b'\'' | b'"' | b'`') => string_end(bytes, i, quote),
                _ => {
                    i += 1;
                    continue;
                }
            };
            code[i..end].fill(false);
            i = end;
        }

        CodeMask { code }
    }

    pub(crate) fn is_code(&self, offset: usize) -> bool {
        self.code.get(offset).copied().unwrap_or(false)
    }

    /// Offset of the delimiter closing the one at `open`, or `None` when the
    /// text ends first.
    pub(crate) fn matching_close(&self, text: &str, open: usize, open_b: u8, close_b: u8) -> Option<usize> {
        let mut depth = 0usize;
        for (i, &b) in text.as_bytes().iter().enumerate().skip(open) {
            if !self.is_code(i) {
                continue;
            }
            if b == open_b {
                depth += 1;
            } else if b == close_b {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
        }
        None
    }

    /// Walk backward from `from` to the `{` that encloses it.
    pub(crate) fn enclosing_brace(&self, text: &str, from: usize) -> Option<usize> {
        let bytes = text.as_bytes();
        let mut depth = 0usize;
        for i in (0..from.min(bytes.len())).rev() {
            if !self.is_code(i) {
                continue;
            }
            match bytes[i] {
                b'}' => depth += 1,
                b'{' if depth == 0 => return Some(i),
                b'{' => depth -= 1,
                _ => {}
            }
        }
        None
    }

    /// Number of unclosed `[`, `{` and `(` before `offset`.
    pub(crate) fn nesting_at(&self, text: &str, offset: usize) -> usize {
        let mut depth = 0usize;
        for (i, &b) in text.as_bytes()[..offset].iter().enumerate() {
            if !self.is_code(i) {
                continue;
            }
            match b {
                b'[' | b'{' | b'(' => depth += 1,
                b']' | b'}' | b')' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        depth
    }

    /// Offset just past the last code byte that is not whitespace in
    /// `from..to`, or `from` when the range holds only whitespace and comments.
    pub(crate) fn content_end(&self, text: &str, from: usize, to: usize) -> usize {
        let bytes = text.as_bytes();
        (from..to)
            .rev()
            .find(|&i| self.is_code(i) && !bytes[i].is_ascii_whitespace())
            .map_or(from, |i| i + 1)
    }
}

/// `"\r\n"` when the text already uses CRLF line endings, `"\n"` otherwise.
pub(crate) fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

fn string_end(bytes: &[u8], open: usize, quote: u8) -> usize {
    let mut j = open + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b if b == quote => return j + 1,
            b'\n' if quote != b'`' => return j,
            _ => j += 1,
        }
    }
    bytes.len()
}
