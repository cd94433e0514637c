//! Semantic rules. Each takes the pieces it needs and returns the
//! diagnostics it finds; the parser decides when to run them.

use sugbo_protocol::TagSet;

use crate::ast::{NounPhrasePart, Number, VerbComplex};
use crate::diagnostic::Diagnostic;
use crate::token::{Token, Value};

pub const PRESENT_PREFIXES: &[&str] = &["nag", "na", "gi", "i", "naga", "nang"];
pub const PAST_PREFIXES: &[&str] = &["ni", "nag", "naka", "na", "gi", "naga", "nang"];
pub const FUTURE_PREFIXES: &[&str] = &["mo", "mag", "maka", "ma", "i", "maga", "mang"];
pub const PRESENT_SUFFIXES: &[&str] = &["mo", "mag", "maka", "ma", "i"];
pub const PAST_SUFFIXES: &[&str] = &["an"];
pub const FUTURE_SUFFIXES: &[&str] = &["on", "hon", "an"];
pub const IMPERATIVE_PREFIX: &str = "pag";

pub const SINGULAR_VERB_PREFIXES: &[&str] = &["nag", "naga", "mag", "maga"];
pub const PLURAL_VERB_PREFIXES: &[&str] = &["nang", "mang"];

const THIRTY_ONE_DAY_MONTHS: &[&str] = &[
    "enero", "marso", "mayo", "hulyo", "agosto", "oktubre", "disyembre",
];
const THIRTY_DAY_MONTHS: &[&str] = &["abril", "hunyo", "septiyembre", "nubiyembre"];

const SMALL_HOURS: &[&str] = &["uno", "dos", "tres", "kwatro", "singko"];
const LATE_HOURS: &[&str] = &["sais", "siete", "otso", "nuwebe", "diyes", "onse"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Past,
    Present,
    Future,
}

impl Tense {
    /// The tense a time word points at: `niaging`, `karon`, `ugma`...
    pub fn of_marker(word: &str) -> Option<Tense> {
        match word {
            "niaging" | "kaganina" | "kagahapon" => Some(Tense::Past),
            "karong" | "karon" => Some(Tense::Present),
            "sunod" | "ugma" => Some(Tense::Future),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tense::Past => "PAST",
            Tense::Present => "PRESENT",
            Tense::Future => "FUTURE",
        }
    }

    pub fn prefixes(self) -> &'static [&'static str] {
        match self {
            Tense::Past => PAST_PREFIXES,
            Tense::Present => PRESENT_PREFIXES,
            Tense::Future => FUTURE_PREFIXES,
        }
    }

    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            Tense::Past => PAST_SUFFIXES,
            Tense::Present => PRESENT_SUFFIXES,
            Tense::Future => FUTURE_SUFFIXES,
        }
    }
}

/// Role of a verb prefix: every tense category that lists it, or plain
/// `PREFIX` if none does.
pub fn prefix_role(prefix: &str) -> String {
    let mut roles = Vec::new();
    if PAST_PREFIXES.contains(&prefix) {
        roles.push("PAST_PREFIX");
    }
    if FUTURE_PREFIXES.contains(&prefix) {
        roles.push("FUTURE_PREFIX");
    }
    if prefix == IMPERATIVE_PREFIX {
        roles.push("IMPERATIVE");
    }
    if PRESENT_PREFIXES.contains(&prefix) {
        roles.push("PRESENT_PREFIX");
    }
    if roles.is_empty() {
        "PREFIX".to_string()
    } else {
        roles.join(", ")
    }
}

pub fn suffix_role(suffix: &str) -> String {
    let mut roles = Vec::new();
    if PAST_SUFFIXES.contains(&suffix) {
        roles.push("PAST_SUFFIX");
    }
    if FUTURE_SUFFIXES.contains(&suffix) {
        roles.push("FUTURE_SUFFIX");
    }
    if PRESENT_SUFFIXES.contains(&suffix) {
        roles.push("PRESENT_SUFFIX");
    }
    if roles.is_empty() {
        "SUFFIX".to_string()
    } else {
        roles.join(", ")
    }
}

/// Verb affixes against the tense a time adverb sets. Prefix and suffix
/// are judged independently, so a verb may earn two diagnostics.
pub fn tense_agreement(tense: Tense, verb: &VerbComplex) -> Vec<Diagnostic> {
    let root = verb.root.text().unwrap_or_default();
    let mut found = Vec::new();

    let affixes = [
        (&verb.prefix, tense.prefixes(), "PREFIX"),
        (&verb.suffix, tense.suffixes(), "SUFFIX"),
    ];
    for (affix, allowed, kind) in affixes {
        let Some(text) = affix.text() else {
            continue;
        };
        if allowed.contains(&text) {
            continue;
        }
        found.push(
            Diagnostic::new(
                format!("{} from root {}", affix.role, root),
                format!("{}_{}", tense.name(), kind),
                Value::from(text),
            )
            .with_alternatives(allowed.iter().copied()),
        );
    }
    found
}

/// `nang-`/`mang-` want a plural subject, `nag-`/`mag-` a singular one.
/// A noun list joined by a conjunction counts as plural.
pub fn verb_number(verb: &VerbComplex, nouns: &NounPhrasePart) -> Option<Diagnostic> {
    let prefix = verb.prefix.text()?;
    let left = nouns.left.as_ref()?;
    let number = left.number();
    let listed = nouns.conj.is_some();

    if PLURAL_VERB_PREFIXES.contains(&prefix) && number == Some(Number::Singular) && !listed {
        return Some(
            Diagnostic::new(
                "Using a plural prefix for a singular noun",
                "Use a singular prefix",
                Value::Text(format!("{prefix}-")),
            )
            .with_alternatives(["nag-", "naga-", "mag-", "maga-"]),
        );
    }
    if SINGULAR_VERB_PREFIXES.contains(&prefix) && (number == Some(Number::Plural) || listed) {
        return Some(
            Diagnostic::new(
                "Using a singular prefix for a plural noun",
                "Use a plural prefix",
                Value::Text(format!("{prefix}-")),
            )
            .with_alternatives(["nang-", "mang-"]),
        );
    }
    None
}

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day of month against the month's length. February is only checked
/// when the year is given, taking 29 days in a leap year.
pub fn date_range(month: &str, day: i64, year: Option<i64>) -> Option<Diagnostic> {
    let value = Value::Number(day);
    let out_of_range = |fix: &str| {
        Some(Diagnostic::new(
            format!("Way beyond the number of dates for {month}"),
            fix,
            value.clone(),
        ))
    };

    if THIRTY_ONE_DAY_MONTHS.contains(&month) {
        if !(1..=31).contains(&day) {
            return out_of_range("Should be between 1 and 31");
        }
    } else if THIRTY_DAY_MONTHS.contains(&month) {
        if !(1..=30).contains(&day) {
            return out_of_range("Should be between 1 and 30");
        }
    } else if month == "pebrero" {
        let Some(year) = year else {
            return None;
        };
        let leap = is_leap_year(year);
        if leap && !(1..=29).contains(&day) {
            return out_of_range("Should be between 1 and 29 in a leap year");
        }
        if !leap && !(1..=28).contains(&day) {
            return out_of_range("Should be between 1 and 28");
        }
    }
    None
}

/// Part of day a clock hour may be said with.
pub fn day_parts_for(hour: &str) -> &'static [&'static str] {
    if SMALL_HOURS.contains(&hour) {
        &["ka-adlawon", "hapon"]
    } else if LATE_HOURS.contains(&hour) {
        &["gabi-i", "buntag"]
    } else {
        &["udto"]
    }
}

pub fn hour_day_part(hour: &str, part: &str) -> Option<Diagnostic> {
    let allowed = day_parts_for(hour);
    if allowed.contains(&part) {
        return None;
    }
    Some(
        Diagnostic::new(
            "Wrong part of day for a particular hour",
            format!("Should be {}", allowed.join(", or ")),
            Value::from(part),
        )
        .with_alternatives(allowed.iter().copied()),
    )
}

/// An hour names its part of day through `sa`.
pub fn hour_preposition(found: &Token) -> Diagnostic {
    Diagnostic::new("Preposition is not sa", "Preposition should be sa", found.value.clone())
        .with_alternatives(["sa"])
}

/// `ika-5 sa marso`: the day and month are joined by `sa`.
pub fn date_preposition(found: &Token) -> Diagnostic {
    Diagnostic::new("Misuse of preposition", "Use preposition sa", found.value.clone())
}

/// `ni` links a single person; a plural possessor goes through `sa`.
pub fn possessive_linker(link: &str, plural_follows: bool) -> Option<Diagnostic> {
    (link == "ni" && plural_follows).then(|| {
        Diagnostic::new(
            "Misappropriate use of possessive linker",
            "Should use sa",
            Value::from(link),
        )
    })
}

pub fn missing_prep_object(found: &Token) -> Diagnostic {
    Diagnostic::new(
        format!("No noun phrase after preposition; type of speech found: {}", found.tags),
        "Must be a noun phrase after preposition",
        found.value.clone(),
    )
}

/// A token whose tags miss the one the grammar required here.
pub fn wrong_syntax(found: &Token, expected: TagSet) -> Diagnostic {
    Diagnostic::new(
        format!("Wrong syntax: {}", found.tags),
        expected.to_string(),
        found.value.clone(),
    )
}

pub fn too_deep(max_depth: usize, found: &Token) -> Diagnostic {
    Diagnostic::new(
        format!("Sentence nests deeper than {max_depth} phrases"),
        "Split the sentence",
        found.value.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Word;
    use crate::token::Span;

    fn verb(prefix: Option<&str>, root: &str, suffix: Option<&str>) -> VerbComplex {
        let affix = |text: Option<&str>, role: String| match text {
            Some(text) => Word::labelled(
                role,
                Some(Token::new(Span::default(), TagSet::AFFIX, Value::from(text))),
            ),
            None => Word::labelled(role, None),
        };
        VerbComplex {
            prefix: affix(prefix, prefix.map_or("PREFIX".into(), prefix_role)),
            root: Word::new(
                TagSet::VERB,
                Token::new(Span::default(), TagSet::VERB, Value::from(root)),
            ),
            suffix: affix(suffix, suffix.map_or("SUFFIX".into(), suffix_role)),
            clitic: None,
        }
    }

    #[test]
    fn test_affix_roles() {
        assert_eq!(prefix_role("nag"), "PAST_PREFIX, PRESENT_PREFIX");
        assert_eq!(prefix_role("i"), "FUTURE_PREFIX, PRESENT_PREFIX");
        assert_eq!(prefix_role("pag"), "IMPERATIVE");
        assert_eq!(prefix_role("nagpa"), "PREFIX");
        assert_eq!(suffix_role("an"), "PAST_SUFFIX, FUTURE_SUFFIX");
        assert_eq!(suffix_role("ng"), "SUFFIX");
    }

    #[test]
    fn test_tense_prefix_mismatch() {
        let found = tense_agreement(Tense::Future, &verb(Some("nag"), "kaon", None));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].message, "PAST_PREFIX, PRESENT_PREFIX from root kaon");
        assert_eq!(found[0].fix, "FUTURE_PREFIX");
        assert_eq!(found[0].value, Value::from("nag"));
        assert_eq!(
            found[0].alternatives.as_deref(),
            Some(&["mo", "mag", "maka", "ma", "i", "maga", "mang"].map(String::from)[..])
        );
    }

    #[test]
    fn test_tense_affixes_judged_independently() {
        let found = tense_agreement(Tense::Present, &verb(Some("mo"), "kaon", Some("on")));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].fix, "PRESENT_PREFIX");
        assert_eq!(found[1].fix, "PRESENT_SUFFIX");
    }

    #[test]
    fn test_tense_without_affixes_is_fine() {
        assert!(tense_agreement(Tense::Past, &verb(None, "kaon", None)).is_empty());
        assert!(tense_agreement(Tense::Future, &verb(Some("mo"), "kaon", Some("on"))).is_empty());
    }

    #[test]
    fn test_date_ranges() {
        assert!(date_range("pebrero", 29, Some(2024)).is_none());
        assert!(date_range("enero", 31, None).is_none());
        assert!(date_range("abril", 30, None).is_none());

        let feb = date_range("pebrero", 29, Some(2023)).unwrap();
        assert_eq!(feb.message, "Way beyond the number of dates for pebrero");
        assert_eq!(feb.fix, "Should be between 1 and 28");
        assert_eq!(feb.value, Value::Number(29));

        let leap = date_range("pebrero", 30, Some(2000)).unwrap();
        assert_eq!(leap.fix, "Should be between 1 and 29 in a leap year");

        assert_eq!(date_range("abril", 31, None).unwrap().fix, "Should be between 1 and 30");
        assert_eq!(date_range("marso", 0, None).unwrap().fix, "Should be between 1 and 31");
        assert!(date_range("pebrero", 29, None).is_none());
        assert!(date_range("pebrero", 31, None).is_none());
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_hour_parts() {
        assert!(hour_day_part("uno", "hapon").is_none());
        assert!(hour_day_part("sais", "buntag").is_none());
        assert!(hour_day_part("dose", "udto").is_none());

        let wrong = hour_day_part("uno", "gabi-i").unwrap();
        assert_eq!(wrong.fix, "Should be ka-adlawon, or hapon");
        assert_eq!(
            wrong.alternatives,
            Some(vec!["ka-adlawon".to_string(), "hapon".to_string()])
        );
        assert_eq!(hour_day_part("dose", "buntag").unwrap().fix, "Should be udto");
    }

    #[test]
    fn test_possessive_linker() {
        assert!(possessive_linker("ni", true).is_some());
        assert!(possessive_linker("ni", false).is_none());
        assert!(possessive_linker("sa", true).is_none());
    }
}
