use sugbo_morph::MorphError;
use thiserror::Error;

/// Fatal failures. Grammar problems are never reported through this type;
/// they come back as [`crate::Diagnostic`]s next to the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid character {ch:?} at byte {offset}")]
    InvalidCharacter { ch: char, offset: usize },

    #[error("stemmer failed: {0}")]
    Stemmer(#[from] MorphError),
}

pub type Result<T> = std::result::Result<T, Error>;
