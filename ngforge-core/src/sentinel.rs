//! Locating a designated entry, typically the catch-all route, inside an array body.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexical::CodeMask;
use crate::span::{Located, Span};

static WILDCARD_ROUTE: LazyLock<Regex> =
    LazyLock::new(|| route_path_anchor("**"));

fn route_path_anchor(path: &str) -> Regex {
    let path = regex::escape(path);
    Regex::new(&format!(r#"\bpath\s*:\s*(?:'{path}'|"{path}")"#))
        .expect("escaped route path always forms a valid pattern")
}

/// Predicate identifying the entry that must stay last in an array.
///
/// The predicate is an anchor pattern; the entry is the object literal whose
/// braces enclose the anchor.
#[derive(Debug, Clone)]
pub struct Sentinel {
    anchor: Regex,
}

impl Sentinel {
    pub fn from_anchor(anchor: Regex) -> Self {
        Sentinel { anchor }
    }

    /// The `{ path: '**', ... }` catch-all route.
    pub fn wildcard_route() -> Self {
        Sentinel {
            anchor: WILDCARD_ROUTE.clone(),
        }
    }

    /// Any route object whose `path` is exactly `path`.
    pub fn route_path(path: &str) -> Self {
        Sentinel {
            anchor: route_path_anchor(path),
        }
    }
}

/// Find the top-level entry of `array_body` matching `sentinel`.
///
/// Scans anchor matches left to right. For each, walks backward to the
/// enclosing `{` and accepts it only when that brace sits directly in the
/// array body; an anchor nested inside another entry's `children` belongs
/// to that inner array and is passed over. The span is relative to
/// `array_body`.
pub fn locate_sentinel(array_body: &str, sentinel: &Sentinel) -> Located {
    let mask = CodeMask::new(array_body);
    let mut at = 0;

    while at <= array_body.len() {
        let Some(m) = sentinel.anchor.find_at(array_body, at) else {
            break;
        };
        at = m.start() + array_body[m.start()..].chars().next().map_or(1, char::len_utf8);

        if !mask.is_code(m.start()) {
            continue;
        }
        let Some(open) = mask.enclosing_brace(array_body, m.start()) else {
            continue;
        };
        if mask.nesting_at(array_body, open) != 0 {
            continue;
        }

        return mask
            .matching_close(array_body, open, b'{', b'}')
            .map(|close| Span::new(open, close))
            .into();
    }

    Located::NotFound
}
