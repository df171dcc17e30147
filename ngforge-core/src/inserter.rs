//! Splicing a new entry into a located array literal.
//!
//! The entry always lands on its own line directly after the last existing
//! element, so whatever whitespace preceded the sentinel or the closing
//! bracket is carried over untouched.
//!
//! Comma rule: look at the last non-whitespace code character before the
//! insertion point. Anything other than `,` or the array's own `[` needs a
//! separating comma. With a sentinel the new entry also gets a trailing comma,
//! since the sentinel follows it.

use crate::lexical::{line_ending, CodeMask};
use crate::span::Span;

/// Where and how an entry will be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionPlan {
    /// Offset at which the new text is spliced in.
    pub target_offset: usize,
    /// Offset from which the original text resumes after the new text.
    /// Equal to `target_offset` unless a whitespace-only gap is replaced.
    pub resume_offset: usize,
    pub indentation: String,
    pub needs_leading_comma: bool,
    pub needs_trailing_comma: bool,
    /// When set, a line break plus this indentation follows the entry, so the
    /// sentinel or closing bracket that was on the same line moves to its own.
    pub trailing_break: Option<String>,
}

impl InsertionPlan {
    /// Splice `entry` into `text`. New line breaks follow the text's own
    /// line endings.
    pub fn apply(&self, text: &str, entry: &str) -> String {
        let eol = line_ending(text);
        let mut out = String::with_capacity(text.len() + entry.len() + self.indentation.len() + 8);
        out.push_str(&text[..self.target_offset]);
        if self.needs_leading_comma {
            out.push(',');
        }
        out.push_str(eol);
        out.push_str(&self.indentation);
        out.push_str(entry);
        if self.needs_trailing_comma {
            out.push(',');
        }
        if let Some(indent) = &self.trailing_break {
            out.push_str(eol);
            out.push_str(indent);
        }
        out.push_str(&text[self.resume_offset..]);
        out
    }
}

/// Compute the insertion of one entry into `array`.
///
/// `sentinel` must be given in absolute offsets and lie inside `array`.
pub fn plan_insertion(text: &str, array: Span, sentinel: Option<Span>, indent: &str) -> InsertionPlan {
    let mask = CodeMask::new(text);
    let body_start = array.start + 1;
    let boundary = sentinel.map_or(array.end, |s| s.start);

    let target_offset = mask.content_end(text, body_start, boundary);
    let preceding = text.as_bytes()[target_offset - 1];
    let needs_leading_comma = preceding != b',' && preceding != b'[';

    let gap = &text[target_offset..boundary];
    let (trailing_break, resume_offset) = if gap.contains('\n') {
        (None, target_offset)
    } else {
        let break_indent = match sentinel {
            Some(_) => indent.to_string(),
            None => line_indent(text, array.start).to_string(),
        };
        let resume = if gap.trim().is_empty() { boundary } else { target_offset };
        (Some(break_indent), resume)
    };

    InsertionPlan {
        target_offset,
        resume_offset,
        indentation: indent.to_string(),
        needs_leading_comma,
        needs_trailing_comma: sentinel.is_some(),
        trailing_break,
    }
}

/// Insert `entry` into `array`, before `sentinel` when given, otherwise last.
///
/// Callers decide beforehand whether the entry is already present; this
/// function always inserts.
pub fn insert(text: &str, array: Span, sentinel: Option<Span>, entry: &str, indent: &str) -> String {
    plan_insertion(text, array, sentinel, indent).apply(text, entry)
}

/// Indentation of the first element of `array`, if it starts on its own line.
pub fn detect_indent(text: &str, array: Span) -> Option<String> {
    let mask = CodeMask::new(text);
    let bytes = text.as_bytes();
    let first = array
        .body()
        .find(|&i| mask.is_code(i) && !bytes[i].is_ascii_whitespace())?;
    let line_start = text[..first].rfind('\n')? + 1;
    if line_start <= array.start {
        return None;
    }
    let indent = &text[line_start..first];
    indent.chars().all(|c| c == ' ' || c == '\t').then(|| indent.to_string())
}

/// Indentation for a new entry: the existing elements' indentation, or the
/// declaration line's indentation plus one `unit` for an empty array.
pub fn entry_indent(text: &str, array: Span, unit: &str) -> String {
    detect_indent(text, array).unwrap_or_else(|| format!("{}{unit}", line_indent(text, array.start)))
}

/// Leading whitespace of the line containing `offset`.
pub fn line_indent(text: &str, offset: usize) -> &str {
    let line_start = text[..offset].rfind('\n').map_or(0, |p| p + 1);
    let line = &text[line_start..];
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..width]
}
