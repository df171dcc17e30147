//! Import statement deduplication.

use crate::lexical::{line_ending, CodeMask};

/// Whether `symbol` occurs in `text` as a whole identifier.
///
/// Identifier characters are ASCII alphanumerics, `_` and `$`, so
/// `USERS_ROUTES` does not match inside `ADMIN_USERS_ROUTES`. Occurrences in
/// comments and strings still count: a mention anywhere is treated as
/// already imported.
pub fn contains_identifier(text: &str, symbol: &str) -> bool {
    if symbol.is_empty() {
        return false;
    }
    let bytes = text.as_bytes();
    text.match_indices(symbol).any(|(pos, _)| {
        let before = pos.checked_sub(1).map(|i| bytes[i]);
        let after = bytes.get(pos + symbol.len()).copied();
        !before.is_some_and(is_ident_byte) && !after.is_some_and(is_ident_byte)
    })
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Add `statement` after the last import unless `symbol` is already present.
///
/// Without any import in the file the statement is prepended, followed by a
/// blank line. Applying the same call twice yields the same text as once.
/// Import lines inside comments are not imports. The added line breaks use
/// the file's own line endings.
pub fn ensure_import(text: &str, symbol: &str, statement: &str) -> String {
    if contains_identifier(text, symbol) {
        return text.to_string();
    }

    let eol = line_ending(text);
    match last_import_end(text) {
        Some(end) => {
            let mut out = String::with_capacity(text.len() + statement.len() + 4);
            out.push_str(&text[..end]);
            if !out.ends_with('\n') {
                out.push_str(eol);
            }
            out.push_str(statement);
            out.push_str(eol);
            out.push_str(&text[end..]);
            out
        }
        None => format!("{statement}{eol}{eol}{text}"),
    }
}

/// Offset just past the newline that terminates the last import statement.
///
/// Only lines whose `import` keyword is code count. A statement whose
/// `{ ... }` clause spans several lines ends on the line where the code
/// braces balance again.
fn last_import_end(text: &str) -> Option<usize> {
    let mask = CodeMask::new(text);
    let mut last_start = None;
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let keyword = offset + (line.len() - trimmed.len());
        if (trimmed.starts_with("import ") || trimmed.starts_with("import{")) && mask.is_code(keyword) {
            last_start = Some(offset);
        }
        offset += line.len();
    }

    let start = last_start?;
    let mut depth = 0i32;
    let mut end = start;
    for line in text[start..].split_inclusive('\n') {
        for (i, b) in line.bytes().enumerate() {
            if !mask.is_code(end + i) {
                continue;
            }
            match b {
                b'{' => depth += 1,
                b'}' => depth -= 1,
                _ => {}
            }
        }
        end += line.len();
        if depth <= 0 {
            break;
        }
    }
    Some(end)
}
