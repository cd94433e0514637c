pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod lexer;
pub mod lexicon;
pub mod parser;
pub mod scanner;
pub mod token;
pub mod visit;

#[cfg(test)]
mod fixtures;

pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use lexer::Lexer;
pub use lexicon::Lexicon;
pub use parser::{parse, Parsed, Parser, ParserOptions};
pub use token::{Span, Token, Value};
pub use visit::{render, DisplayChild, DisplayNode, Node, TreeRenderer, Visitor};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{NounPhrase, PredicateContent, VerbObject};
    use proptest::prelude::*;
    use sugbo_morph::AffixStemmer;

    fn check(text: &str) -> Parsed {
        check_with(text, ParserOptions::default())
    }

    fn check_with(text: &str, options: ParserOptions) -> Parsed {
        let dict = fixtures::dictionary();
        let stemmer = AffixStemmer::new(&dict);
        Parser::new(&stemmer, &dict)
            .with_options(options)
            .parse(text)
            .unwrap()
    }

    fn messages(parsed: &Parsed) -> Vec<&str> {
        parsed.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    #[test]
    fn test_clean_sentence() {
        let parsed = check("nagkaon ang bata sa balay");
        assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);
        let verb = parsed.tree.left.pred_phrase.verb_phrase.as_ref().unwrap();
        assert_eq!(verb.verb.root.text(), Some("kaon"));
        assert_eq!(verb.verb.prefix.text(), Some("nag"));
        assert_eq!(verb.verb.prefix.role, "PAST_PREFIX, PRESENT_PREFIX");
        assert!(matches!(verb.object, Some(VerbObject::Nouns(_))));
    }

    #[test]
    fn test_tense_mismatch() {
        let parsed = check("nagkaon ako ugma");
        assert_eq!(parsed.diagnostics.len(), 1);
        let diagnostic = &parsed.diagnostics[0];
        assert_eq!(diagnostic.message, "PAST_PREFIX, PRESENT_PREFIX from root kaon");
        assert_eq!(diagnostic.fix, "FUTURE_PREFIX");
        assert_eq!(diagnostic.value, Value::from("nag"));

        assert!(check("mokaon ako ugma").diagnostics.is_empty());
        assert!(check("nagkaon ako kagahapon").diagnostics.is_empty());
    }

    #[test]
    fn test_tense_from_adverb_before_verb() {
        // Only the adverb in front of the verb says when.
        let parsed = check("ugma nagkaon ako");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].fix, "FUTURE_PREFIX");
    }

    #[test]
    fn test_niaging_time() {
        assert!(check("nagkaon ako niaging semana").diagnostics.is_empty());
        let parsed = check("mokaon ako niaging 2 ka semana");
        assert_eq!(messages(&parsed), vec!["FUTURE_PREFIX from root kaon"]);
    }

    #[test]
    fn test_hour_and_part_of_day() {
        let parsed = check("nagkaon ako alas uno sa gabi-i");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].message, "Wrong part of day for a particular hour");
        assert_eq!(
            parsed.diagnostics[0].alternatives,
            Some(vec!["ka-adlawon".to_string(), "hapon".to_string()])
        );

        // Clock times say nothing about tense.
        assert!(check("mokaon ako alas uno sa hapon").diagnostics.is_empty());
    }

    #[test]
    fn test_hour_without_sa() {
        let parsed = check("nagkaon ako alas uno hapon");
        assert_eq!(messages(&parsed), vec!["Preposition is not sa"]);
        assert!(parsed.unparsed.is_empty());
    }

    #[test]
    fn test_possessive_linker() {
        let parsed = check("nagkaon ang iring ni mga bata");
        assert_eq!(messages(&parsed), vec!["Misappropriate use of possessive linker"]);
        assert_eq!(parsed.diagnostics[0].fix, "Should use sa");

        assert!(check("nagkaon ang iring sa mga bata").diagnostics.is_empty());
        assert!(check("nagkaon ang iring ni nanay").diagnostics.is_empty());
    }

    #[test]
    fn test_verb_number_agreement() {
        let parsed = check("nanglaba ang bata");
        assert_eq!(messages(&parsed), vec!["Using a plural prefix for a singular noun"]);
        assert_eq!(parsed.diagnostics[0].value, Value::from("nang-"));

        let parsed = check("naglaba ang mga bata");
        assert_eq!(messages(&parsed), vec!["Using a singular prefix for a plural noun"]);

        assert!(check("nanglaba ang mga bata").diagnostics.is_empty());
    }

    #[test]
    fn test_conjoined_subject_is_plural() {
        let parsed = check("naglaba ang bata ug ang nanay");
        assert_eq!(messages(&parsed), vec!["Using a singular prefix for a plural noun"]);
    }

    #[test]
    fn test_missing_token_is_not_fatal() {
        let parsed = check("nagkaon ako niaging bata");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].message, "Wrong syntax: NOUN");
        assert_eq!(parsed.diagnostics[0].fix, "TIME_NOUN");
        assert!(parsed.unparsed.is_empty());
    }

    #[test]
    fn test_preposition_needs_object() {
        let parsed = check("naglakaw ngadto");
        assert_eq!(
            messages(&parsed),
            vec!["No noun phrase after preposition; type of speech found: EOF"]
        );
        assert_eq!(parsed.diagnostics[0].value, Value::Empty);
    }

    #[test]
    fn test_english_date() {
        assert!(check("pebrero 29, 2024").diagnostics.is_empty());

        let parsed = check("pebrero 29, 2023");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].fix, "Should be between 1 and 28");

        let parsed = check("abril 31");
        assert_eq!(parsed.diagnostics[0].fix, "Should be between 1 and 30");
    }

    #[test]
    fn test_february_without_year_is_unchecked() {
        assert!(check("pebrero 29").is_clean());
        assert!(check("pebrero 31").is_clean());
        assert_eq!(check("pebrero 31, 2023").diagnostics.len(), 1);
    }

    #[test]
    fn test_oversized_number_is_not_fatal() {
        let parsed = check("ang 99999999999999999999 ka bata");
        assert!(parsed.diagnostics.iter().all(|d| !d.message.starts_with("Way beyond")));

        let parsed = check("marso 99999999999999999999");
        assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);
    }

    #[test]
    fn test_spanish_date() {
        let parsed = check("ika-5 sa marso, 2024");
        assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);
        let tree = render(&parsed.tree);
        let labels = tree.labels();
        assert!(labels.contains(&"Spanish Date"));
        assert!(labels.contains(&"IKA->ika"));
        assert!(labels.contains(&"DAY->5"));

        let parsed = check("ika-5 marso");
        assert_eq!(messages(&parsed), vec!["Misuse of preposition"]);
    }

    #[test]
    fn test_ordinal_noun() {
        let parsed = check("ika-2 nga bata");
        assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);
        let content = parsed.tree.left.pred_phrase.predicate.as_ref().unwrap().content.as_ref();
        let Some(PredicateContent::Nouns(nouns)) = content else {
            panic!("expected a noun predicate");
        };
        assert!(matches!(nouns.left.as_deref(), Some(NounPhrase::Counted(_))));
    }

    #[test]
    fn test_sentence_conjunction() {
        let parsed = check("nagkaon ako ugma ug mokaon siya karon");
        assert!(parsed.tree.conj.is_some());
        assert!(parsed.tree.right.is_some());
        assert!(parsed.unparsed.is_empty());
        // One mismatch per clause.
        assert_eq!(parsed.diagnostics.len(), 2);
    }

    #[test]
    fn test_adjective_chain() {
        let parsed = check("nagpalit ako sa dako nga pula nga libro");
        assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);
        let tree = render(&parsed.tree).to_string();
        assert!(tree.contains("|-->ADJ->dako"));
        assert!(tree.contains("|-->NGA->nga"));
        assert!(tree.contains("|-->ADJ->pula"));
    }

    #[test]
    fn test_fused_ng_linker() {
        let parsed = check("nagpalit ako sa dakong pula nga libro");
        assert!(parsed.is_clean(), "{:?}", parsed.diagnostics);
        let tree = render(&parsed.tree).to_string();
        assert!(tree.contains("|-->ADJ->dakong"));
        assert!(tree.contains("|-->NG_LINKER->ng"));
        assert!(tree.contains("|-->NGA->nga"));
    }

    #[test]
    fn test_unparsed_tail() {
        // The second time word has nowhere to go.
        let parsed = check("nagkaon ugma ugma");
        assert_eq!(parsed.unparsed.len(), 1);
        assert_eq!(parsed.unparsed[0].text(), Some("ugma"));
        assert!(!parsed.is_clean());
    }

    #[test]
    fn test_empty_input() {
        let parsed = check("");
        assert!(parsed.is_clean());
        assert!(parsed.tree.left.noun_phrase.left.is_none());
    }

    #[test]
    fn test_invalid_character_is_fatal() {
        let dict = fixtures::dictionary();
        let stemmer = AffixStemmer::new(&dict);
        let err = parse("nagkaon ako!", &stemmer, &dict).unwrap_err();
        assert_eq!(err, Error::InvalidCharacter { ch: '!', offset: 11 });
    }

    #[test]
    fn test_depth_limit() {
        let text = vec!["bata"; 20].join(" sa ");
        let parsed = check_with(&text, ParserOptions { max_depth: 4 });
        let too_deep = parsed
            .diagnostics
            .iter()
            .filter(|d| d.message.starts_with("Sentence nests deeper"))
            .count();
        assert_eq!(too_deep, 1);
    }

    #[test]
    fn test_long_nga_chain_stays_on_the_stack() {
        let text = vec!["bata"; 400].join(" nga ");
        // Spawned threads get the default 2 MiB stack.
        let too_deep = std::thread::spawn(move || {
            let parsed = check(&text);
            parsed
                .diagnostics
                .iter()
                .filter(|d| d.message.starts_with("Sentence nests deeper"))
                .count()
        })
        .join()
        .unwrap();
        assert_eq!(too_deep, 1);
    }

    #[test]
    fn test_render_layout() {
        let parsed = check("nagkaon ako");
        let text = render(&parsed.tree).to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Sentence Part"));
        assert_eq!(lines.next(), Some("    |-->Sentence"));
        assert_eq!(lines.next(), Some("        |-->Predicate Phrase"));
        assert_eq!(lines.next(), Some("            |-->Empty"));
        assert!(text.contains("|-->Complex Verb"));
        assert!(text.contains("|-->VERB->kaon"));
        assert!(text.contains("|-->PRON_PER->ako"));
    }

    #[test]
    fn test_parsers_share_the_lexicon_across_threads() {
        let dict = fixtures::dictionary();
        let stemmer = AffixStemmer::new(&dict);
        let texts = ["nagkaon ako ugma", "nanglaba ang bata", "pebrero 30, 2000"];

        let counts: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = texts
                .iter()
                .map(|text| {
                    let (stemmer, dict) = (&stemmer, &dict);
                    scope.spawn(move || parse(text, stemmer, dict).unwrap().diagnostics.len())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(counts, vec![1, 1, 1]);
    }

    const VOCABULARY: &[&str] = &[
        "ang", "sa", "ni", "mga", "nga", "ika-", "ako", "siya", "kami", "kana", "'ng", "'y", ",",
        "ug", "o", "ka", "an", "niaging", "sunod", "karong", "ugma", "kagahapon", "semana",
        "adlawa", "uno", "dose", "hapon", "gabi-i", "alas", "dili", "na", "ba", "didto", "pebrero",
        "29", "2024", "3", "unsa", "ngadto", "nagkaon", "mokaon", "nanglaba", "bata", "iring",
        "dako", "dakong", "akong", "nako", "nila",
    ];

    fn sentence() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(VOCABULARY), 0..14).prop_map(|w| w.join(" "))
    }

    proptest! {
        #[test]
        fn test_parse_is_deterministic(text in sentence()) {
            let first = check(&text);
            let second = check(&text);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_known_words_never_fail(text in sentence()) {
            let dict = fixtures::dictionary();
            let stemmer = AffixStemmer::new(&dict);
            prop_assert!(parse(&text, &stemmer, &dict).is_ok());
        }

        #[test]
        fn test_every_tree_renders(text in sentence()) {
            let parsed = check(&text);
            let tree = render(&parsed.tree);
            prop_assert_eq!(tree.label.as_str(), "Sentence Part");
            prop_assert!(tree.to_string().starts_with("Sentence Part\n"));
        }
    }
}
