use sugbo_morph::Stemmer;
use sugbo_protocol::{RootLookup, Stem, TagSet};

use super::checks::{self, Tense};
use super::{Parser, NOUN_PHRASE_START};
use crate::ast::{
    Adverb, Descriptive, PredPhrase, Predicate, PredicateContent, Sentence, SentencePart,
    VerbComplex, VerbObject, VerbPhrase, Word,
};
use crate::token::{Token, Value};

const PREDICATE_START: TagSet = NOUN_PHRASE_START.union(TagSet::ADJ);
const DESCRIPTIVE_START: TagSet = TagSet::PLACE
    .union(TagSet::ADJ)
    .union(TagSet::ADV)
    .union(TagSet::ADV_SPE);

impl<'a, S, D> Parser<'a, S, D>
where
    S: Stemmer + ?Sized,
    D: RootLookup + ?Sized,
{
    pub(crate) fn sentence_part(&mut self) -> SentencePart {
        let left = self.sentence();
        let tag = if self.at(TagSet::CONJ) {
            TagSet::CONJ
        } else if self.at(TagSet::COMMA) {
            TagSet::COMMA
        } else {
            return SentencePart { left, conj: None, right: None };
        };

        let conj = self.take_as(tag, TagSet::CONJ);
        let right = self.descend(Self::sentence_part).map(Box::new);
        SentencePart { left, conj: Some(conj), right }
    }

    /// A clause past the depth limit comes back empty.
    pub(crate) fn sentence(&mut self) -> Sentence {
        self.descend(Self::sentence_inner).unwrap_or_default()
    }

    fn sentence_inner(&mut self) -> Sentence {
        let pred_phrase = self.pred_phrase();
        let noun_phrase = self.noun_phrase_part();

        if let Some(verb) = &pred_phrase.verb_phrase {
            // The verb's own object is its subject when it has one.
            let nouns = match &verb.object {
                Some(VerbObject::Nouns(nouns)) => nouns,
                _ => &noun_phrase,
            };
            if let Some(diagnostic) = checks::verb_number(&verb.verb, nouns) {
                self.report(diagnostic);
            }
        }

        Sentence { pred_phrase, noun_phrase }
    }

    fn pred_phrase(&mut self) -> PredPhrase {
        self.descend(Self::pred_phrase_inner).unwrap_or_default()
    }

    fn pred_phrase_inner(&mut self) -> PredPhrase {
        if self.at(TagSet::VERB) {
            let verb_phrase = self.verb_phrase();
            let end_adverb = self.adverb();
            self.check_tense(&verb_phrase, end_adverb.as_ref(), None);
            return PredPhrase {
                predicate: None,
                mid_adverb: None,
                verb_phrase: Some(verb_phrase),
                end_adverb,
            };
        }

        let predicate = self.predicate();
        let mid_adverb = self.adverb();
        let verb_phrase = if self.at(TagSet::VERB) {
            Some(self.verb_phrase())
        } else {
            None
        };
        let end_adverb = self.adverb();
        if let Some(verb) = &verb_phrase {
            self.check_tense(verb, end_adverb.as_ref(), mid_adverb.as_ref());
        }
        PredPhrase {
            predicate: Some(predicate),
            mid_adverb,
            verb_phrase,
            end_adverb,
        }
    }

    /// The trailing adverb sets the tense; the one before the verb is only
    /// consulted when the trailing one carries no time. Clock hours say
    /// nothing about tense.
    fn check_tense(&mut self, verb: &VerbPhrase, end: Option<&Adverb>, mid: Option<&Adverb>) {
        let Some(time) = end.and_then(Adverb::time).or_else(|| mid.and_then(Adverb::time)) else {
            return;
        };
        let Some(lead) = time.lead.first() else {
            return;
        };
        if lead.tags().contains(TagSet::HOUR) {
            return;
        }
        let Some(tense) = lead.text().and_then(Tense::of_marker) else {
            return;
        };
        self.report_all(checks::tense_agreement(tense, &verb.verb));
    }

    fn predicate(&mut self) -> Predicate {
        let content = if self.at(PREDICATE_START) {
            Some(PredicateContent::Nouns(self.noun_phrase_part()))
        } else if self.at(DESCRIPTIVE_START) {
            self.descriptive().map(PredicateContent::Descriptive)
        } else if self.at(TagSet::PREP) {
            self.prep_phrase().map(PredicateContent::Prep)
        } else if self.at(TagSet::INT) {
            Some(PredicateContent::Interrogative(self.take(TagSet::INT)))
        } else {
            None
        };
        Predicate { content }
    }

    fn descriptive(&mut self) -> Option<Descriptive> {
        if self.at(TagSet::ADJ) {
            return Some(Descriptive::Adjective(self.take(TagSet::ADJ)));
        }
        self.adverb().map(Descriptive::Adverb)
    }

    fn verb_phrase(&mut self) -> VerbPhrase {
        let verb = self.verb_complex();
        let object = if self.at(NOUN_PHRASE_START) {
            Some(VerbObject::Nouns(self.noun_phrase_part()))
        } else if self.at(TagSet::PREP) {
            self.prep_phrase().map(VerbObject::Prep)
        } else {
            None
        };
        VerbPhrase { verb, object }
    }

    /// Splits the verb into affixes and root. The root leaf carries the
    /// dictionary form.
    fn verb_complex(&mut self) -> VerbComplex {
        let mut token = self.current().clone();
        self.expect(TagSet::VERB);

        let stem = token
            .stem
            .as_deref()
            .cloned()
            .unwrap_or_else(|| Stem::bare(token.text().unwrap_or_default()));
        let span = token.span;
        token.value = Value::Text(stem.root.clone());

        let affix = |text: Option<&str>, role: String| {
            let token = text.map(|t| Token::new(span, TagSet::AFFIX, Value::from(t)));
            Word::labelled(role, token)
        };
        let prefix = affix(
            stem.prefix(),
            stem.prefix().map_or_else(|| "PREFIX".to_string(), checks::prefix_role),
        );
        let suffix = affix(
            stem.suffix(),
            stem.suffix().map_or_else(|| "SUFFIX".to_string(), checks::suffix_role),
        );
        let clitic = self.optional(TagSet::CLIT_Y);

        VerbComplex {
            prefix,
            root: Word::new(TagSet::VERB, token),
            suffix,
            clitic,
        }
    }
}
