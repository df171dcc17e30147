use std::ops::Range;

/// A balanced bracket or brace region inside a source text.
///
/// `start` is the byte offset of the opening delimiter and `end` the byte
/// offset of the delimiter that closes it, so `text[start..=end]` is the whole
/// region and [`Span::body`] is the content between the delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "span must cover both delimiters");
        Span { start, end }
    }

    /// Offsets of the content between the delimiters.
    pub fn body(&self) -> Range<usize> {
        self.start + 1..self.end
    }

    pub fn body_text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body()]
    }

    /// The region including both delimiters.
    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..=self.end]
    }

    /// Translate a span found in a slice back into offsets of the enclosing text.
    pub fn shift(self, by: usize) -> Span {
        Span {
            start: self.start + by,
            end: self.end + by,
        }
    }
}

/// Result of every locate-style lookup.
///
/// A missing declaration or sentinel is an expected outcome, not an error:
/// callers branch on it to decide between patching and printing manual steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Located {
    Found(Span),
    NotFound,
}

impl Located {
    pub fn span(self) -> Option<Span> {
        match self {
            Located::Found(span) => Some(span),
            Located::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Located::Found(_))
    }

    pub fn shift(self, by: usize) -> Located {
        match self {
            Located::Found(span) => Located::Found(span.shift(by)),
            Located::NotFound => Located::NotFound,
        }
    }
}

impl From<Option<Span>> for Located {
    fn from(span: Option<Span>) -> Self {
        span.map_or(Located::NotFound, Located::Found)
    }
}

impl From<Located> for Option<Span> {
    fn from(located: Located) -> Self {
        located.span()
    }
}
