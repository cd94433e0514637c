use std::fmt;

use serde::Serialize;
use sugbo_protocol::{Stem, TagSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Literal carried by a token: the word as written, a digit run, or
/// nothing at all for end of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(i64),
    Empty,
}

impl Value {
    pub fn text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
            Value::Empty => Ok(()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub span: Span,
    pub tags: TagSet,
    pub value: Value,
    /// Stemmer output for open-class words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem: Option<Box<Stem>>,
}

impl Token {
    pub fn new(span: Span, tags: TagSet, value: Value) -> Self {
        Self { span, tags, value, stem: None }
    }

    pub fn eof(at: usize) -> Self {
        Self::new(Span::new(at, at), TagSet::EOF, Value::Empty)
    }

    /// True if the token may play any of the given roles.
    pub fn is(&self, tags: TagSet) -> bool {
        self.tags.intersects(tags)
    }

    pub fn is_eof(&self) -> bool {
        self.tags.contains(TagSet::EOF)
    }

    pub fn text(&self) -> Option<&str> {
        self.value.text()
    }
}
