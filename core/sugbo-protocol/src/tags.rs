use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

bitflags! {
    /// Every grammatical category a token may plausibly belong to.
    ///
    /// Cebuano words are categorically ambiguous ("sa" is a determiner, a
    /// preposition and a possessive linker at once), so a token carries a
    /// set of these and the grammar asks membership questions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct TagSet: u64 {
        // Open classes (Bits 0-6)
        const NOUN = 1 << 0;
        const VERB = 1 << 1;
        const ADJ = 1 << 2;
        const ADV = 1 << 3;
        const ADV_SPE = 1 << 4;
        const PLACE = 1 << 5;
        const CONJ = 1 << 6;

        // Punctuation, clitics, end of input (Bits 7-11)
        const NUM = 1 << 7;
        const COMMA = 1 << 8;
        const CLIT_Y = 1 << 9;
        const CLIT_NG = 1 << 10;
        const EOF = 1 << 11;

        // Reserved words (Bits 12-17)
        const MGA = 1 << 12;
        const NGA = 1 << 13;
        const IKA = 1 << 14;
        const NIAGING = 1 << 15;
        const SUNOD = 1 << 16;
        const KARONG = 1 << 17;

        // Calendar and clock (Bits 18-24)
        const MONTH = 1 << 18;
        const HOUR = 1 << 19;
        const TIME_OF_DAY = 1 << 20;
        const TIME = 1 << 21;
        const TIME_NOUN = 1 << 22;
        const TIME_NOUN_A = 1 << 23;
        const INT = 1 << 24;

        // Determiners, prepositions, linkers (Bits 25-28)
        const DET = 1 << 25;
        const DET_PLURAL = 1 << 26;
        const PREP = 1 << 27;
        const POS_LINK = 1 << 28;

        // Pronouns (Bits 29-37)
        const PRON_DEM = 1 << 29;
        const PRON_PER = 1 << 30;
        const PRON_PER_PLURAL = 1 << 31;
        const PRON_POS = 1 << 32;
        const PRON_POS_PLURAL = 1 << 33;
        const PRON_POS_N = 1 << 34;
        const PRON_POS_PLURAL_N = 1 << 35;
        const PRON_POS_NG = 1 << 36;
        const PRON_POS_PLURAL_NG = 1 << 37;

        // Roles only assigned by the parser (Bits 38-43)
        const KA = 1 << 38;
        const AN = 1 << 39;
        const DASH = 1 << 40;
        const DAY = 1 << 41;
        const YEAR = 1 << 42;
        const NG_LINKER = 1 << 43;
        const AFFIX = 1 << 44;
    }
}

impl fmt::Display for TagSet {
    /// Comma separated tag names in declaration order, e.g. `DET, PREP, POS_LINK`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

/// Part of speech as recorded by the root dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum PartOfSpeech {
    Noun = 0,
    Verb = 1,
    Adjective = 2,
    Adverb = 3,
    Place = 4,
    Conjunction = 5,
    Determiner = 6,
    Preposition = 7,
    Pronoun = 8,
    Interrogative = 9,
    Specifier = 10,
}

impl PartOfSpeech {
    pub const fn tag(self) -> TagSet {
        match self {
            PartOfSpeech::Noun => TagSet::NOUN,
            PartOfSpeech::Verb => TagSet::VERB,
            PartOfSpeech::Adjective => TagSet::ADJ,
            PartOfSpeech::Adverb => TagSet::ADV,
            PartOfSpeech::Place => TagSet::PLACE,
            PartOfSpeech::Conjunction => TagSet::CONJ,
            PartOfSpeech::Determiner => TagSet::DET,
            PartOfSpeech::Preposition => TagSet::PREP,
            PartOfSpeech::Pronoun => TagSet::PRON_PER,
            PartOfSpeech::Interrogative => TagSet::INT,
            PartOfSpeech::Specifier => TagSet::ADV_SPE,
        }
    }

    /// Union of the tags of several parts of speech.
    pub fn tags_of(parts: &[PartOfSpeech]) -> TagSet {
        parts
            .iter()
            .fold(TagSet::empty(), |acc, part| acc | part.tag())
    }
}
