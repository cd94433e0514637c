use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A surface word split into `{prefix, root, suffix}`.
///
/// Either affix may be empty; the root never is for a non-empty word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Stem {
    pub prefix: String,
    pub root: String,
    pub suffix: String,
}

impl Stem {
    pub fn new(prefix: &str, root: &str, suffix: &str) -> Self {
        Self {
            prefix: prefix.into(),
            root: root.into(),
            suffix: suffix.into(),
        }
    }

    /// A word that carries no affixes.
    pub fn bare(word: &str) -> Self {
        Self::new("", word, "")
    }

    pub fn prefix(&self) -> Option<&str> {
        (!self.prefix.is_empty()).then_some(self.prefix.as_str())
    }

    pub fn suffix(&self) -> Option<&str> {
        (!self.suffix.is_empty()).then_some(self.suffix.as_str())
    }

    /// Glue the pieces back together.
    pub fn surface(&self) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.root.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&self.root);
        out.push_str(&self.suffix);
        out
    }
}
