use std::cmp::{max, min};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::rc::Rc;

#[cfg(test)]
use serde::{Serialize, Serializer};

/// A slice of source code. Compared and hashed by its text, not by its position, so two ranges
/// spelling the same name are equal wherever they occur. This is what lets a range be used
/// directly as a name key.
#[derive(Clone)]
pub struct SourceRange {
    pub source: Source,
    pub start: usize,
    pub end: usize,
}

impl SourceRange {
    pub fn new(source: Source, start: usize, end: usize) -> SourceRange {
        debug_assert!(start <= end);
        SourceRange { source, start, end }
    }

    pub fn anonymous<T: Into<Vec<u8>>>(code: T) -> SourceRange {
        let code = code.into();
        let end = code.len();
        SourceRange {
            source: Source::new(code),
            start: 0,
            end,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.source.code()[self.start..self.end]
    }

    pub fn as_str(&self) -> &str {
        // The lexer only ever splits on ASCII boundaries.
        std::str::from_utf8(self.as_slice()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn extend(&mut self, other: &SourceRange) {
        self.start = min(self.start, other.start);
        self.end = max(self.end, other.end);
    }
}

impl Add for &SourceRange {
    type Output = SourceRange;

    fn add(self, rhs: Self) -> Self::Output {
        SourceRange {
            source: self.source.clone(),
            start: min(self.start, rhs.start),
            end: max(self.end, rhs.end),
        }
    }
}

impl Debug for SourceRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`[{}:{}]", self.as_str(), self.start, self.end)
    }
}

impl Eq for SourceRange {}

impl Hash for SourceRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl PartialEq for SourceRange {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<str> for SourceRange {
    fn eq(&self, other: &str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

#[cfg(test)]
impl Serialize for SourceRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct SourceData {
    code: Vec<u8>,
}

#[derive(Clone)]
pub struct Source(Rc<SourceData>);

impl Source {
    pub fn new(code: Vec<u8>) -> Source {
        Source(Rc::new(SourceData { code }))
    }

    pub fn code(&self) -> &[u8] {
        &self.0.code
    }
}
