//! Closed-class vocabulary: every function word the grammar knows by heart.
//!
//! Open-class words (nouns, verbs, adjectives...) come from the root
//! dictionary instead; see [`crate::Lexer`].

use std::collections::HashMap;

use once_cell::sync::Lazy;
use sugbo_protocol::TagSet;

pub const MONTHS: &[&str] = &[
    "enero", "pebrero", "marso", "abril", "mayo", "hunyo", "hulyo", "agosto", "septiyembre",
    "oktubre", "nubiyembre", "disyembre",
];

pub const HOURS: &[&str] = &[
    "uno", "dos", "tres", "kwatro", "singko", "sais", "siete", "otso", "nuwebe", "diyes", "onse",
    "dose",
];

pub const TIMES_OF_DAY: &[&str] = &["ka-adlawon", "buntag", "udto", "hapon", "gabi-i"];

pub const INTERROGATIVES: &[&str] = &[
    "unsa", "kinsa", "ngano", "kanusa", "asa", "hain", "diin", "kon", "samtang", "pila", "ginusa",
    "unsaon", "tagpila",
];

pub const PREPOSITIONS: &[&str] = &[
    "sa", "kang", "kay", "batok", "de", "gawas", "gikan", "imbes", "kapin", "minos", "mura",
    "ngadto", "nganha", "para", "puyra", "pwera", "sulod", "supak", "tungod", "tupad", "uban",
    "ubos",
];

pub const TIME_NOUNS: &[&str] = &["adlaw", "tuig", "semana"];
pub const TIME_NOUNS_A: &[&str] = &["adlawa", "tuiga", "semanaha"];
pub const TIMES: &[&str] = &["kagahapon", "karon", "ugma", "kaganina"];

pub const DEMONSTRATIVES: &[&str] = &[
    "kiri", "kini", "kana", "kadto", "niiri", "niini", "niani", "niari", "niana", "niadto",
];

pub const DETERMINERS: &[&str] = &["sa", "ang"];
pub const PLURAL_DETERMINERS: &[&str] = &["sina", "mga"];
pub const POSSESSIVE_LINKERS: &[&str] = &["ni", "sa"];

pub const POSSESSIVES: &[&str] = &["ako", "imo", "iya", "nako", "nimo", "niya"];
pub const POSSESSIVES_N: &[&str] = &["nako", "nimo", "niya"];
pub const PERSONALS: &[&str] = &["ikaw", "ka", "siya", "ko"];

pub const PLURAL_POSSESSIVES: &[&str] = &["amo", "ato", "inyo", "ila", "namo", "nato", "ninyo", "nila"];
pub const PLURAL_POSSESSIVES_N: &[&str] = &["namo", "nato", "ninyo", "nila"];
pub const PLURAL_PERSONALS: &[&str] = &["kami", "kita", "kamo", "sila", "ta", "mi"];

pub const SPECIFIERS: &[&str] = &["na", "pa", "man", "ba"];
pub const CONJUNCTIONS: &[&str] = &["ug", "o", "apan", "pero"];
pub const NUMERAL_PARTICLES: &[&str] = &["an"];

static LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::new);

/// Word -> closed-class tags. Built once, shared by every lexer.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashMap<String, TagSet>,
}

impl Lexicon {
    pub fn new() -> Self {
        let mut lexicon = Self::default();

        let tables: &[(&[&str], TagSet)] = &[
            (MONTHS, TagSet::MONTH),
            (HOURS, TagSet::HOUR),
            (TIMES_OF_DAY, TagSet::TIME_OF_DAY),
            (DETERMINERS, TagSet::DET),
            (INTERROGATIVES, TagSet::INT),
            (PREPOSITIONS, TagSet::PREP),
            (TIME_NOUNS, TagSet::TIME_NOUN),
            (TIME_NOUNS_A, TagSet::TIME_NOUN_A),
            (TIMES, TagSet::TIME),
            (DEMONSTRATIVES, TagSet::PRON_DEM),
            (PLURAL_DETERMINERS, TagSet::DET_PLURAL),
            (POSSESSIVE_LINKERS, TagSet::POS_LINK),
            (POSSESSIVES, TagSet::PRON_POS),
            (POSSESSIVES_N, TagSet::PRON_POS_N),
            // Possessives double as personal pronouns.
            (POSSESSIVES, TagSet::PRON_PER),
            (PERSONALS, TagSet::PRON_PER),
            (PLURAL_POSSESSIVES, TagSet::PRON_POS_PLURAL),
            (PLURAL_POSSESSIVES_N, TagSet::PRON_POS_PLURAL_N),
            (PLURAL_POSSESSIVES, TagSet::PRON_PER_PLURAL),
            (PLURAL_PERSONALS, TagSet::PRON_PER_PLURAL),
            (SPECIFIERS, TagSet::ADV_SPE),
            (CONJUNCTIONS, TagSet::CONJ),
            (NUMERAL_PARTICLES, TagSet::AN),
        ];
        for (words, tag) in tables {
            for word in words.iter() {
                lexicon.add(word, *tag);
            }
        }

        // `akong`, `among`: possessive with the `ng` linker fused on.
        for word in POSSESSIVES {
            lexicon.add(&format!("{word}ng"), TagSet::PRON_POS_NG);
        }
        for word in PLURAL_POSSESSIVES {
            lexicon.add(&format!("{word}ng"), TagSet::PRON_POS_PLURAL_NG);
        }

        lexicon
    }

    /// The process-wide instance.
    pub fn global() -> &'static Lexicon {
        &LEXICON
    }

    fn add(&mut self, word: &str, tag: TagSet) {
        *self.words.entry(word.to_string()).or_insert(TagSet::empty()) |= tag;
    }

    /// Every closed-class tag of `word`; empty if the word is open-class.
    pub fn tags_of(&self, word: &str) -> TagSet {
        self.words.get(word).copied().unwrap_or(TagSet::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_sa() {
        let tags = Lexicon::global().tags_of("sa");
        assert_eq!(tags, TagSet::DET | TagSet::PREP | TagSet::POS_LINK);
    }

    #[test]
    fn test_pronoun_layers() {
        let lexicon = Lexicon::global();
        assert!(lexicon.tags_of("nako").contains(TagSet::PRON_POS | TagSet::PRON_POS_N | TagSet::PRON_PER));
        assert!(lexicon.tags_of("nila").contains(TagSet::PRON_PER_PLURAL | TagSet::PRON_POS_PLURAL_N));
        assert_eq!(lexicon.tags_of("akong"), TagSet::PRON_POS_NG);
        assert_eq!(lexicon.tags_of("atong"), TagSet::PRON_POS_PLURAL_NG);
    }

    #[test]
    fn test_times_of_day_are_separate_words() {
        let lexicon = Lexicon::global();
        assert_eq!(lexicon.tags_of("hapon"), TagSet::TIME_OF_DAY);
        assert_eq!(lexicon.tags_of("gabi-i"), TagSet::TIME_OF_DAY);
        assert!(lexicon.tags_of("hapongabi-i").is_empty());
    }

    #[test]
    fn test_open_class_word_is_unknown() {
        assert!(Lexicon::global().tags_of("balay").is_empty());
    }
}
