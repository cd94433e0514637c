#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::vec::Vec;

use sugbo_protocol::{RootLookup, Stem};

use core::fmt;

/// Verb and adjective prefixes, longest first.
pub const PREFIXES: &[&str] = &[
    "nagpa", "nagka", "magpa", "magka", "naka", "maka", "naga", "maga", "nang", "mang", "nag",
    "mag", "pag", "gi", "mo", "ni", "na", "ma", "i",
];

/// Suffixes, longest first. `ng` is the enclitic linker glued to a word.
pub const SUFFIXES: &[&str] = &["hon", "han", "on", "an", "ng", "a", "i"];

/// Shortest root (in chars) a blind prefix strip may leave behind.
pub const MIN_ROOT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MorphError {
    EmptyWord,
}

impl fmt::Display for MorphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorphError::EmptyWord => write!(f, "cannot stem an empty word"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MorphError {}

/// The stemmer collaborator: surface word -> `{prefix, root, suffix}`.
pub trait Stemmer {
    fn stem(&self, word: &str) -> Result<Stem, MorphError>;
}

impl<T: Stemmer + ?Sized> Stemmer for &T {
    fn stem(&self, word: &str) -> Result<Stem, MorphError> {
        (**self).stem(word)
    }
}

/// Affix stripper that trusts the root dictionary.
///
/// 1. A word that is itself a known root is returned bare.
/// 2. Otherwise, among all prefix/suffix splits whose root is known, the one
///    with the longest root wins (ties go to the longer prefix).
/// 3. Otherwise the longest prefix that leaves at least `MIN_ROOT` chars is
///    stripped, and no suffix.
/// 4. Otherwise the word is returned bare.
#[derive(Debug, Clone)]
pub struct AffixStemmer<D> {
    roots: D,
}

impl<D: RootLookup> AffixStemmer<D> {
    pub fn new(roots: D) -> Self {
        Self { roots }
    }
}

impl<D: RootLookup> Stemmer for AffixStemmer<D> {
    fn stem(&self, word: &str) -> Result<Stem, MorphError> {
        if word.is_empty() {
            return Err(MorphError::EmptyWord);
        }
        if self.roots.contains(word) {
            return Ok(Stem::bare(word));
        }

        let mut best: Option<Stem> = None;
        for split in splits(word) {
            if !self.roots.contains(&split.root) {
                continue;
            }
            let longer = best
                .as_ref()
                .map_or(true, |b| split.root.chars().count() > b.root.chars().count());
            if longer {
                best = Some(split);
            }
        }
        if let Some(found) = best {
            return Ok(found);
        }

        let blind = PREFIXES.iter().find_map(|prefix| {
            let root = word.strip_prefix(prefix)?;
            (root.chars().count() >= MIN_ROOT).then(|| Stem::new(prefix, root, ""))
        });
        Ok(blind.unwrap_or_else(|| Stem::bare(word)))
    }
}

/// Every affixed decomposition of `word` with a non-empty root, longest
/// prefix first and, within a prefix, longest suffix first.
fn splits(word: &str) -> Vec<Stem> {
    let mut out = vec![];
    for prefix in PREFIXES.iter().copied().chain([""]) {
        let Some(rest) = word.strip_prefix(prefix) else { continue };
        for suffix in SUFFIXES.iter().copied().chain([""]) {
            if prefix.is_empty() && suffix.is_empty() {
                continue;
            }
            let Some(root) = rest.strip_suffix(suffix) else { continue };
            if !root.is_empty() {
                out.push(Stem::new(prefix, root, suffix));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use proptest::prelude::*;
    use sugbo_protocol::{Dictionary, PartOfSpeech};

    fn roots(words: &[&str]) -> Dictionary {
        let mut dict = Dictionary::new(1);
        for w in words {
            dict.insert(w, &[PartOfSpeech::Verb]);
        }
        dict
    }

    #[test]
    fn test_known_root_wins() {
        let stemmer = AffixStemmer::new(roots(&["kaon", "ka", "maayo", "ayo"]));

        assert_eq!(stemmer.stem("nagkaon").unwrap(), Stem::new("nag", "kaon", ""));
        assert_eq!(stemmer.stem("kaonon").unwrap(), Stem::new("", "kaon", "on"));
        assert_eq!(stemmer.stem("maayong").unwrap(), Stem::new("", "maayo", "ng"));
        assert_eq!(stemmer.stem("kaon").unwrap(), Stem::bare("kaon"));
    }

    #[test]
    fn test_unknown_word_strips_prefix_only() {
        let stemmer = AffixStemmer::new(roots(&[]));

        assert_eq!(stemmer.stem("nagdula").unwrap(), Stem::new("nag", "dula", ""));
        // "na" + "ko" would leave a two-letter root
        assert_eq!(stemmer.stem("nako").unwrap(), Stem::bare("nako"));
    }

    #[test]
    fn test_empty_word_is_an_error() {
        let stemmer = AffixStemmer::new(roots(&[]));
        assert_eq!(stemmer.stem(""), Err(MorphError::EmptyWord));
    }

    proptest! {
        #[test]
        fn test_stem_is_a_split(word in "[a-z]{1,12}") {
            let stemmer = AffixStemmer::new(roots(&["kaon", "dula", "laba"]));
            let stem = stemmer.stem(&word).unwrap();
            prop_assert_eq!(stem.surface(), word);
            prop_assert!(!stem.root.is_empty());
        }

        #[test]
        fn test_nag_prefix_recovers_root(root in "[bdklprst][aeiou][bdklprst][aeiou][bdklprst]") {
            let stemmer = AffixStemmer::new(roots(&[root.as_str()]));
            let word: String = format!("nag{}", root);
            prop_assert_eq!(stemmer.stem(&word).unwrap(), Stem::new("nag", &root, ""));
        }
    }
}
