//! The parse tree.
//!
//! Every grammatical slot that may be missing is an `Option`, and a leaf
//! whose token was never found is a [`Word`] with no token. Nothing here is
//! ever "half built": a node exists once its production has run.

use sugbo_protocol::TagSet;

use crate::token::{Span, Token, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub fn label(self) -> &'static str {
        match self {
            Number::Singular => "Singular",
            Number::Plural => "Plural",
        }
    }
}

/// A leaf: a token under the grammatical role it plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub role: String,
    pub token: Option<Token>,
}

impl Word {
    pub fn new(role: TagSet, token: Token) -> Self {
        Self::labelled(role.to_string(), Some(token))
    }

    pub fn labelled(role: impl Into<String>, token: Option<Token>) -> Self {
        Self { role: role.into(), token }
    }

    /// A slot the grammar wanted filled but found nothing for.
    pub fn absent(role: TagSet) -> Self {
        Self::labelled(role.to_string(), None)
    }

    /// A word the parser supplies itself, such as the dash of `ika-5`.
    pub fn synthetic(role: TagSet, text: &str, span: Span) -> Self {
        Self::new(role, Token::new(span, role, Value::from(text)))
    }

    pub fn text(&self) -> Option<&str> {
        self.token.as_ref().and_then(Token::text)
    }

    pub fn number(&self) -> Option<i64> {
        self.token.as_ref().and_then(|t| t.value.number())
    }

    pub fn tags(&self) -> TagSet {
        self.token.as_ref().map_or(TagSet::empty(), |t| t.tags)
    }
}

/// Sentences joined by a conjunction or comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePart {
    pub left: Sentence,
    pub conj: Option<Word>,
    pub right: Option<Box<SentencePart>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    pub pred_phrase: PredPhrase,
    pub noun_phrase: NounPhrasePart,
}

/// `predicate` is `None` when the sentence opens with its verb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredPhrase {
    pub predicate: Option<Predicate>,
    pub mid_adverb: Option<Adverb>,
    pub verb_phrase: Option<VerbPhrase>,
    pub end_adverb: Option<Adverb>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub content: Option<PredicateContent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateContent {
    Nouns(NounPhrasePart),
    Descriptive(Descriptive),
    Prep(PrepPhrase),
    Interrogative(Word),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptive {
    Adjective(Word),
    Adverb(Adverb),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adverb {
    pub head: AdverbPart,
    pub addition: Option<AdverbPart>,
}

impl Adverb {
    /// The time expression this adverb carries, if any.
    pub fn time(&self) -> Option<&Time> {
        match (&self.head, &self.addition) {
            (AdverbPart::Time(time), _) | (_, Some(AdverbPart::Time(time))) => Some(time),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdverbPart {
    Word(Word),
    Time(Time),
}

/// `kagahapon`, `niaging 2 ka semana`, `uno sa hapon`...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Time {
    pub lead: Vec<Word>,
    pub quantity: Option<Quantity>,
    pub day: Option<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    Numeral(AdjNum),
    Number(Word),
}

/// `2 ka`, or the spelled-out `ka 20 an ug 5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjNum {
    pub parts: Vec<Word>,
    pub conj: Option<Word>,
    pub ka: Word,
}

/// `ika-5 nga`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjOrd {
    pub marker: Word,
    pub dash: Word,
    pub number: Word,
    pub nga: Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `marso 5, 2024`
    English,
    /// `ika-5 sa marso, 2024`
    Spanish,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Date {
    pub style: DateStyle,
    /// `ika` and the dash; empty for English dates.
    pub ordinal: Vec<Word>,
    pub day: Word,
    pub sa: Option<Word>,
    pub month: Word,
    pub comma: Option<Word>,
    pub year: Option<Word>,
}

/// Noun phrases joined by commas and a final conjunction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NounPhrasePart {
    pub left: Option<Box<NounPhrase>>,
    pub conj: Option<Word>,
    pub right: Option<Box<NounPhraseTail>>,
}

impl NounPhrasePart {
    pub fn empty() -> Self {
        Self { left: None, conj: None, right: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NounPhraseTail {
    /// After a comma the list goes on.
    More(NounPhrasePart),
    /// After a conjunction exactly one phrase follows.
    Last(Option<Box<NounPhrase>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NounPhrase {
    Complex(ComplexNounPhrase),
    Counted(NounGroup),
    Date(Date),
}

impl NounPhrase {
    /// Grammatical number, where the phrase has one.
    pub fn number(&self) -> Option<Number> {
        match self {
            NounPhrase::Complex(complex) => match &complex.head {
                NounHead::Group(group) => Some(group.number),
                NounHead::Demonstrative(dem) => dem.number,
            },
            NounPhrase::Counted(group) => Some(group.number),
            NounPhrase::Date(_) => None,
        }
    }
}

/// A noun group with its trailing prepositional phrase and `nga` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexNounPhrase {
    pub head: NounHead,
    pub prep_phrase: Option<Box<PrepPhrase>>,
    pub nga: Option<Word>,
    pub clause: Option<Box<Sentence>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NounHead {
    Group(NounGroup),
    Demonstrative(DemPronoun),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounGroup {
    pub number: Number,
    /// Determiner or fused possessive that opens the group.
    pub start: Option<Word>,
    /// Possessive after `ang`.
    pub possessor: Option<Word>,
    pub ordinal: Option<AdjOrd>,
    pub quantity: Option<Quantity>,
    pub head: GroupHead,
    pub clitic: Option<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupHead {
    Pronoun(Word),
    Noun(Noun),
}

/// `kana'ng dakong balay`. Without the `'ng` clitic only the pronoun is set
/// and the number is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemPronoun {
    pub number: Option<Number>,
    pub pronoun: Word,
    pub clitic: Option<Word>,
    pub ordinal: Option<AdjOrd>,
    pub quantity: Option<Quantity>,
    pub noun: Option<Noun>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Noun {
    pub number: Number,
    pub mga: Option<Word>,
    pub adjective: Option<Adjective>,
    pub nouns: Vec<Word>,
    pub possession: Option<Box<Possession>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Possession {
    Linked(Possess),
    /// `sa` followed by a full noun phrase.
    Prepositional(PrepPhrase),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PossessKind {
    General,
    Singular,
    Plural,
}

impl PossessKind {
    pub fn label(self) -> &'static str {
        match self {
            PossessKind::General => "General",
            PossessKind::Singular => "Singular",
            PossessKind::Plural => "Plural",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Possess {
    pub kind: PossessKind,
    pub link: Word,
    pub nouns: Option<CompoundNoun>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundNoun {
    pub noun: Noun,
    pub conj: Option<Word>,
    pub other: Option<Box<CompoundTail>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompoundTail {
    More(CompoundNoun),
    Last(Noun),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepPhrase {
    pub prep: Word,
    pub second: Option<Word>,
    pub noun_phrase: NounPhrasePart,
    pub specifier: Option<Word>,
    pub extra: Option<Box<PrepPhrase>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbPhrase {
    pub verb: VerbComplex,
    pub object: Option<VerbObject>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerbObject {
    Nouns(NounPhrasePart),
    Prep(PrepPhrase),
}

/// A verb split into affixes and root. The affix roles name every tense the
/// affix can mark, e.g. `PAST_PREFIX, PRESENT_PREFIX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbComplex {
    pub prefix: Word,
    pub root: Word,
    pub suffix: Word,
    pub clitic: Option<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjective {
    pub adjectives: Vec<Word>,
    pub linkers: Vec<Word>,
}
