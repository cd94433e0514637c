use sugbo_morph::Stemmer;
use sugbo_protocol::{RootLookup, TagSet};

use super::checks;
use super::{Parser, SA_PHRASE_START};
use crate::ast::{
    AdjNum, AdjOrd, Adjective, ComplexNounPhrase, CompoundNoun, CompoundTail, DemPronoun,
    GroupHead, Noun, NounGroup, NounHead, NounPhrase, NounPhraseTail, NounPhrasePart, Number,
    Possess, PossessKind, Possession, PrepPhrase, Quantity, Word,
};
use crate::token::Token;

const SINGULAR_START: TagSet = TagSet::DET
    .union(TagSet::PRON_POS)
    .union(TagSet::PRON_PER)
    .union(TagSet::NOUN)
    .union(TagSet::PRON_POS_NG);

const PLURAL_START: TagSet = TagSet::DET_PLURAL
    .union(TagSet::PRON_POS_PLURAL)
    .union(TagSet::PRON_POS_PLURAL_NG)
    .union(TagSet::PRON_PER_PLURAL)
    .union(TagSet::MGA);

/// Adjectives carrying a fused `ng` linker, as in `dakong`.
fn ng_linked(token: &Token) -> bool {
    token.stem.as_ref().is_some_and(|stem| stem.suffix == "ng")
}

impl<'a, S, D> Parser<'a, S, D>
where
    S: Stemmer + ?Sized,
    D: RootLookup + ?Sized,
{
    /// A list of noun phrases. The list only goes on after a phrase was
    /// actually found, so a stray separator is left for the sentence level.
    pub(crate) fn noun_phrase_part(&mut self) -> NounPhrasePart {
        let left = self.noun_phrase();
        if left.is_none() {
            return NounPhrasePart::empty();
        }

        if self.at(TagSet::COMMA) {
            let comma = self.take(TagSet::COMMA);
            let right = self
                .descend(Self::noun_phrase_part)
                .map(|rest| Box::new(NounPhraseTail::More(rest)));
            return NounPhrasePart { left, conj: Some(comma), right };
        }

        if self.at(TagSet::CONJ) {
            let conj = self.take(TagSet::CONJ);
            let last = self.noun_phrase();
            return NounPhrasePart {
                left,
                conj: Some(conj),
                right: Some(Box::new(NounPhraseTail::Last(last))),
            };
        }

        NounPhrasePart { left, conj: None, right: None }
    }

    pub(crate) fn noun_phrase(&mut self) -> Option<Box<NounPhrase>> {
        self.descend(Self::noun_phrase_inner).flatten().map(Box::new)
    }

    fn noun_phrase_inner(&mut self) -> Option<NounPhrase> {
        if self.at(TagSet::IKA) {
            let marker = self.take(TagSet::IKA);
            let dash = self.dash();
            let number = self.current().clone();
            self.expect(TagSet::NUM);
            if self.at(TagSet::NGA) {
                let nga = self.take(TagSet::NGA);
                let ordinal = AdjOrd {
                    marker,
                    dash,
                    number: Word::new(TagSet::NUM, number),
                    nga,
                };
                return Some(NounPhrase::Counted(self.counted_group(Some(ordinal))));
            }
            let day = Word::new(TagSet::DAY, number);
            return Some(NounPhrase::Date(self.spanish_date(marker, dash, day)));
        }

        if self.at(TagSet::MONTH) {
            return Some(NounPhrase::Date(self.date()));
        }

        if self.at(TagSet::DET) && self.at_word("ang") {
            let group = self.ang_group();
            return Some(self.complex_noun_phrase(NounHead::Group(group)));
        }

        if self.at(TagSet::NUM | TagSet::ADJ) {
            return Some(NounPhrase::Counted(self.counted_group(None)));
        }

        if self.at(SINGULAR_START) {
            let group = self.singular_group();
            return Some(self.complex_noun_phrase(NounHead::Group(group)));
        }

        if self.at(PLURAL_START) {
            let group = self.plural_group();
            return Some(self.complex_noun_phrase(NounHead::Group(group)));
        }

        if self.at(TagSet::PRON_DEM) {
            let dem = self.dem_pronoun();
            return Some(self.complex_noun_phrase(NounHead::Demonstrative(dem)));
        }

        None
    }

    /// The `-` of `ika-5`, which the scanner glues onto `ika`.
    fn dash(&self) -> Word {
        Word::synthetic(TagSet::DASH, "-", self.current().span)
    }

    fn complex_noun_phrase(&mut self, head: NounHead) -> NounPhrase {
        let (nga, clause) = if self.at(TagSet::NGA) {
            let nga = self.take(TagSet::NGA);
            let clause = self.descend(Self::sentence).map(Box::new);
            (Some(nga), clause)
        } else {
            (None, None)
        };
        let prep_phrase = self.prep_phrase().map(Box::new);
        NounPhrase::Complex(ComplexNounPhrase { head, prep_phrase, nga, clause })
    }

    /// A group led by a number, an adjective or an ordinal.
    fn counted_group(&mut self, ordinal: Option<AdjOrd>) -> NounGroup {
        let quantity = self.adj_num();
        let noun = self.noun_any();
        NounGroup {
            number: noun.number,
            start: None,
            possessor: None,
            ordinal,
            quantity,
            head: GroupHead::Noun(noun),
            clitic: None,
        }
    }

    fn singular_group(&mut self) -> NounGroup {
        if self.at(TagSet::PRON_PER) {
            let pronoun = self.take(TagSet::PRON_PER);
            let clitic = self.optional(TagSet::CLIT_Y);
            return NounGroup {
                number: Number::Singular,
                start: None,
                possessor: None,
                ordinal: None,
                quantity: None,
                head: GroupHead::Pronoun(pronoun),
                clitic,
            };
        }

        if self.at(TagSet::PRON_POS_NG) {
            let possessive = self.take(TagSet::PRON_POS_NG);
            let noun = self.noun_any();
            return NounGroup {
                number: Number::Singular,
                start: Some(possessive),
                possessor: None,
                ordinal: None,
                quantity: None,
                head: GroupHead::Noun(noun),
                clitic: None,
            };
        }

        let det = self.optional(TagSet::DET);
        let ordinal = self.ordinal();
        let quantity = self.adj_num();
        let noun = self.noun(Number::Singular, false);
        NounGroup {
            number: Number::Singular,
            start: det,
            possessor: None,
            ordinal,
            quantity,
            head: GroupHead::Noun(noun),
            clitic: None,
        }
    }

    fn plural_group(&mut self) -> NounGroup {
        if self.at(TagSet::PRON_PER_PLURAL) {
            let pronoun = self.take(TagSet::PRON_PER_PLURAL);
            let clitic = self.optional(TagSet::CLIT_Y);
            return NounGroup {
                number: Number::Plural,
                start: None,
                possessor: None,
                ordinal: None,
                quantity: None,
                head: GroupHead::Pronoun(pronoun),
                clitic,
            };
        }

        if self.at(TagSet::PRON_POS_PLURAL_NG) {
            let possessive = self.take(TagSet::PRON_POS_PLURAL_NG);
            let noun = self.noun_any();
            return NounGroup {
                number: Number::Plural,
                start: Some(possessive),
                possessor: None,
                ordinal: None,
                quantity: None,
                head: GroupHead::Noun(noun),
                clitic: None,
            };
        }

        let det = self.optional(TagSet::DET_PLURAL);
        let ordinal = self.ordinal();
        let quantity = self.adj_num();
        // `sina` already marks the plural; otherwise `mga` must.
        let noun = self.noun(Number::Plural, det.is_none());
        NounGroup {
            number: Number::Plural,
            start: det,
            possessor: None,
            ordinal,
            quantity,
            head: GroupHead::Noun(noun),
            clitic: None,
        }
    }

    /// `ang [akong] [ika-2 nga] [3 ka] noun`
    fn ang_group(&mut self) -> NounGroup {
        let ang = self.take(TagSet::DET);
        let possessor = if self.at(TagSet::PRON_POS_NG) {
            Some(self.take(TagSet::PRON_POS_NG))
        } else {
            self.optional(TagSet::PRON_POS_PLURAL_NG)
        };
        let ordinal = self.ordinal();
        let quantity = if self.at(TagSet::NUM) || self.at_word("ka") {
            self.adj_num()
        } else {
            None
        };
        let noun = self.noun_any();
        NounGroup {
            number: noun.number,
            start: Some(ang),
            possessor,
            ordinal,
            quantity,
            head: GroupHead::Noun(noun),
            clitic: None,
        }
    }

    /// `kana`, or `kana'ng [ika-2 nga] [3 ka] noun`
    fn dem_pronoun(&mut self) -> DemPronoun {
        let pronoun = self.take(TagSet::PRON_DEM);
        if !self.at(TagSet::CLIT_NG) {
            return DemPronoun {
                number: None,
                pronoun,
                clitic: None,
                ordinal: None,
                quantity: None,
                noun: None,
            };
        }

        let clitic = self.take(TagSet::CLIT_NG);
        let ordinal = self.ordinal();
        let quantity = self.adj_num();
        let noun = self.noun_any();
        DemPronoun {
            number: Some(noun.number),
            pronoun,
            clitic: Some(clitic),
            ordinal,
            quantity,
            noun: Some(noun),
        }
    }

    /// Plural if `mga` is next, singular otherwise.
    fn noun_any(&mut self) -> Noun {
        if self.at(TagSet::MGA) {
            self.noun(Number::Plural, true)
        } else {
            self.noun(Number::Singular, false)
        }
    }

    fn noun(&mut self, number: Number, with_mga: bool) -> Noun {
        let mga = if with_mga { Some(self.take(TagSet::MGA)) } else { None };
        let adjective = if self.at(TagSet::ADJ) {
            Some(self.adjective())
        } else {
            None
        };
        let mut nouns = Vec::new();
        while self.at(TagSet::NOUN) {
            nouns.push(self.take(TagSet::NOUN));
        }
        let possession = self.descend(Self::possession).flatten().map(Box::new);
        Noun { number, mga, adjective, nouns, possession }
    }

    fn possession(&mut self) -> Option<Possession> {
        if self.at(TagSet::PRON_POS_N) {
            let link = self.take(TagSet::PRON_POS_N);
            return Some(Possession::Linked(Possess {
                kind: PossessKind::Singular,
                link,
                nouns: None,
            }));
        }
        if self.at(TagSet::PRON_POS_PLURAL_N) {
            let link = self.take(TagSet::PRON_POS_PLURAL_N);
            return Some(Possession::Linked(Possess {
                kind: PossessKind::Plural,
                link,
                nouns: None,
            }));
        }
        if !self.at(TagSet::POS_LINK) {
            return None;
        }

        let token = self.current().clone();
        self.expect(TagSet::POS_LINK);
        let link = token.text().unwrap_or_default();

        // `sa` in front of a full noun phrase is a preposition.
        if link == "sa" && self.at(SA_PHRASE_START) {
            let prep = Word::new(TagSet::PREP, token);
            return Some(Possession::Prepositional(self.prep_phrase_rest(prep)));
        }

        if let Some(diagnostic) = checks::possessive_linker(link, self.at(TagSet::MGA)) {
            self.report(diagnostic);
        }
        let nouns = self.compound_noun();
        Some(Possession::Linked(Possess {
            kind: PossessKind::General,
            link: Word::new(TagSet::POS_LINK, token),
            nouns: Some(nouns),
        }))
    }

    fn compound_noun(&mut self) -> CompoundNoun {
        let noun = self.noun_any();

        if self.at(TagSet::COMMA) {
            let comma = self.take(TagSet::COMMA);
            let other = self
                .descend(Self::compound_noun)
                .map(|rest| Box::new(CompoundTail::More(rest)));
            return CompoundNoun { noun, conj: Some(comma), other };
        }

        if self.at(TagSet::CONJ) && self.at_word("ug") {
            let conj = self.take(TagSet::CONJ);
            let last = self.noun_any();
            return CompoundNoun {
                noun,
                conj: Some(conj),
                other: Some(Box::new(CompoundTail::Last(last))),
            };
        }

        CompoundNoun { noun, conj: None, other: None }
    }

    fn ordinal(&mut self) -> Option<AdjOrd> {
        if !self.at(TagSet::IKA) {
            return None;
        }
        let marker = self.take(TagSet::IKA);
        let dash = self.dash();
        let number = self.take(TagSet::NUM);
        let nga = self.take(TagSet::NGA);
        Some(AdjOrd { marker, dash, number, nga })
    }

    /// `3`, `3 ka`, or `ka 20 an [ug 5]`.
    pub(crate) fn adj_num(&mut self) -> Option<Quantity> {
        if self.at(TagSet::NUM) {
            let number = self.take(TagSet::NUM);
            if !self.at(TagSet::PRON_PER) {
                return Some(Quantity::Number(number));
            }
            let ka = self.take_as(TagSet::PRON_PER, TagSet::KA);
            return Some(Quantity::Numeral(AdjNum { parts: vec![number], conj: None, ka }));
        }

        if !self.at_word("ka") {
            return None;
        }
        let mut parts = vec![self.take_as(TagSet::PRON_PER, TagSet::KA)];
        parts.push(self.take(TagSet::NUM));
        parts.push(self.take(TagSet::AN));
        let conj = if self.at(TagSet::CONJ) && self.at_word("ug") {
            let conj = self.take(TagSet::CONJ);
            parts.push(self.take(TagSet::NUM));
            Some(conj)
        } else {
            None
        };
        let ka = self.take_as(TagSet::PRON_PER, TagSet::KA);
        Some(Quantity::Numeral(AdjNum { parts, conj, ka }))
    }

    /// Adjectives chained by `nga` or a fused `ng`.
    fn adjective(&mut self) -> Adjective {
        let first = self.current().clone();
        self.expect(TagSet::ADJ);
        let mut linked = ng_linked(&first);
        let mut adjectives = vec![Word::new(TagSet::ADJ, first)];
        let mut linkers = Vec::new();

        loop {
            if self.at(TagSet::NGA) {
                linkers.push(self.take(TagSet::NGA));
            } else if linked {
                linkers.push(Word::synthetic(TagSet::NG_LINKER, "ng", self.current().span));
            } else {
                break;
            }
            if !self.at(TagSet::ADJ) {
                break;
            }
            let next = self.current().clone();
            self.expect(TagSet::ADJ);
            linked = ng_linked(&next);
            adjectives.push(Word::new(TagSet::ADJ, next));
        }

        Adjective { adjectives, linkers }
    }

    pub(crate) fn prep_phrase(&mut self) -> Option<PrepPhrase> {
        if !self.at(TagSet::PREP) {
            return None;
        }
        let prep = self.take(TagSet::PREP);
        Some(self.prep_phrase_rest(prep))
    }

    /// Everything after the preposition: `[second prep] nouns [specifier]
    /// [further prepositional phrase]`.
    fn prep_phrase_rest(&mut self, prep: Word) -> PrepPhrase {
        let second = self.optional(TagSet::PREP);
        let noun_phrase = self.noun_phrase_part();
        if noun_phrase.left.is_none() {
            let diagnostic = checks::missing_prep_object(self.current());
            self.report(diagnostic);
        }
        let specifier = self.optional(TagSet::ADV_SPE);
        let extra = if self.at(TagSet::PREP) {
            self.descend(Self::prep_phrase).flatten().map(Box::new)
        } else {
            None
        };
        PrepPhrase { prep, second, noun_phrase, specifier, extra }
    }
}
