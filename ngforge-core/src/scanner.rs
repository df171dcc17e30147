//! Locating a declared array literal.
//!
//! The declaration pattern identifies where the array starts, e.g.
//! `export\s+const\s+routes\s*:\s*Routes\s*=\s*\[`. From the `[` that ends
//! the match the scanner counts bracket depth forward until it returns to
//! zero. Matching `\n\];` or the first `]` instead breaks as soon as an entry
//! contains a nested array such as `children: [...]`.

use regex::Regex;

use crate::lexical::CodeMask;
use crate::span::{Located, Span};

/// Find the first array declared by `declaration` and its matching `]`.
///
/// Returns [`Located::NotFound`] when the pattern does not match in code, when
/// the match does not end at `[`, or when the array is never closed.
pub fn locate_array(text: &str, declaration: &Regex) -> Located {
    locate_array_from(text, declaration, 0)
}

/// Same as [`locate_array`], ignoring matches that start before `from`.
pub fn locate_array_from(text: &str, declaration: &Regex, from: usize) -> Located {
    let mask = CodeMask::new(text);
    locate_with_mask(text, &mask, declaration, from)
}

pub(crate) fn locate_with_mask(text: &str, mask: &CodeMask, declaration: &Regex, from: usize) -> Located {
    let mut at = from;

    while at <= text.len() {
        let Some(m) = declaration.find_at(text, at) else {
            break;
        };

        if mask.is_code(m.start()) && m.as_str().ends_with('[') && mask.is_code(m.end() - 1) {
            let open = m.end() - 1;
            let located = mask
                .matching_close(text, open, b'[', b']')
                .map(|close| Span::new(open, close));
            if located.is_none() {
                tracing::debug!(open, "array declaration found but never closed");
            }
            return located.into();
        }

        at = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
    }

    Located::NotFound
}
