//! What `sugbo check` prints.

use serde::Serialize;
use sugbo_parser::{render, Diagnostic, DisplayNode, Parsed, Token};

/// Machine-readable form of a parse.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub diagnostics: &'a [Diagnostic],
    pub tree: DisplayNode,
    pub unparsed: &'a [Token],
}

impl<'a> Report<'a> {
    pub fn new(parsed: &'a Parsed) -> Self {
        Self {
            diagnostics: &parsed.diagnostics,
            tree: render(&parsed.tree),
            unparsed: &parsed.unparsed,
        }
    }
}

pub fn text(parsed: &Parsed) -> String {
    let mut out = String::new();

    if parsed.diagnostics.is_empty() {
        out.push_str("No errors\n");
    }
    for (i, diagnostic) in parsed.diagnostics.iter().enumerate() {
        let n = i + 1;
        out.push_str(&format!("Error #{n}\n{}\n", diagnostic.message));
        out.push_str(&format!("Error value: {}\n", diagnostic.value));
        out.push_str(&format!("Solution #{n}\n{}\n", diagnostic.fix));
        if let Some(alternatives) = &diagnostic.alternatives {
            out.push_str(&format!("Right values: {}\n", alternatives.join(", ")));
        }
        out.push('\n');
    }

    if !parsed.unparsed.is_empty() {
        let words: Vec<String> = parsed.unparsed.iter().map(|t| t.value.to_string()).collect();
        out.push_str(&format!("Unparsed: {}\n\n", words.join(" ")));
    }

    out.push_str(&render(&parsed.tree).to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{DictionarySource, SAMPLE};
    use sugbo_morph::AffixStemmer;
    use sugbo_parser::parse;

    fn check(text: &str) -> Parsed {
        let dict = DictionarySource::from_json(SAMPLE).unwrap().into_dictionary();
        let stemmer = AffixStemmer::new(&dict);
        parse(text, &stemmer, &dict).unwrap()
    }

    #[test]
    fn test_clean_report() {
        let out = text(&check("nagkaon ang bata"));
        assert!(out.starts_with("No errors\nSentence Part\n"));
    }

    #[test]
    fn test_error_report() {
        let out = text(&check("nagkaon ako alas uno sa gabi-i"));
        assert!(out.starts_with(
            "Error #1\nWrong part of day for a particular hour\nError value: gabi-i\n\
             Solution #1\nShould be ka-adlawon, or hapon\nRight values: ka-adlawon, hapon\n"
        ));
        assert!(out.contains("Sentence Part"));
    }

    #[test]
    fn test_json_report() {
        let parsed = check("nagkaon ako ugma");
        let json = serde_json::to_value(Report::new(&parsed)).unwrap();

        assert_eq!(json["diagnostics"][0]["fix"], "FUTURE_PREFIX");
        assert_eq!(json["diagnostics"][0]["value"], "nag");
        assert_eq!(json["tree"]["label"], "Sentence Part");
        assert_eq!(json["unparsed"], serde_json::json!([]));
    }
}
