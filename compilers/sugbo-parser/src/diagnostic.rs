use std::fmt;

use serde::Serialize;

use crate::token::Value;

/// A grammar problem found while parsing. Parsing carries on after one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    /// What should have been there instead.
    pub fix: String,
    /// The offending literal.
    pub value: Value,
    /// Concrete replacements, when there is a closed set of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, fix: impl Into<String>, value: Value) -> Self {
        Self {
            message: message.into(),
            fix: fix.into(),
            value,
            alternatives: None,
        }
    }

    pub fn with_alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives = Some(alternatives.into_iter().map(Into::into).collect());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (value: {}; fix: {})", self.message, self.value, self.fix)?;
        if let Some(alternatives) = &self.alternatives {
            write!(f, " [{}]", alternatives.join(", "))?;
        }
        Ok(())
    }
}
