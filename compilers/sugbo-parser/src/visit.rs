//! Tree traversal and the indented tree printout.
//!
//! Every node shape has its own `visit_*` method and no defaults, so a
//! visitor that forgets a shape does not compile.

use std::fmt;

use serde::Serialize;

use crate::ast::{
    AdjNum, AdjOrd, Adjective, Adverb, AdverbPart, ComplexNounPhrase, CompoundNoun, CompoundTail,
    Date, DateStyle, DemPronoun, Descriptive, GroupHead, Noun, NounGroup, NounHead, NounPhrase,
    NounPhrasePart, NounPhraseTail, Possess, Possession, PredPhrase, Predicate, PredicateContent,
    PrepPhrase, Quantity, Sentence, SentencePart, Time, VerbComplex, VerbObject, VerbPhrase, Word,
};

pub trait Visitor {
    type Output;

    fn visit_sentence_part(&mut self, node: &SentencePart) -> Self::Output;
    fn visit_sentence(&mut self, node: &Sentence) -> Self::Output;
    fn visit_pred_phrase(&mut self, node: &PredPhrase) -> Self::Output;
    fn visit_predicate(&mut self, node: &Predicate) -> Self::Output;
    fn visit_descriptive(&mut self, node: &Descriptive) -> Self::Output;
    fn visit_adverb(&mut self, node: &Adverb) -> Self::Output;
    fn visit_time(&mut self, node: &Time) -> Self::Output;
    fn visit_date(&mut self, node: &Date) -> Self::Output;
    fn visit_noun_phrase_part(&mut self, node: &NounPhrasePart) -> Self::Output;
    fn visit_complex_noun_phrase(&mut self, node: &ComplexNounPhrase) -> Self::Output;
    fn visit_noun_group(&mut self, node: &NounGroup) -> Self::Output;
    fn visit_dem_pronoun(&mut self, node: &DemPronoun) -> Self::Output;
    fn visit_noun(&mut self, node: &Noun) -> Self::Output;
    fn visit_possess(&mut self, node: &Possess) -> Self::Output;
    fn visit_compound_noun(&mut self, node: &CompoundNoun) -> Self::Output;
    fn visit_prep_phrase(&mut self, node: &PrepPhrase) -> Self::Output;
    fn visit_verb_phrase(&mut self, node: &VerbPhrase) -> Self::Output;
    fn visit_verb_complex(&mut self, node: &VerbComplex) -> Self::Output;
    fn visit_adjective(&mut self, node: &Adjective) -> Self::Output;
    fn visit_adj_ord(&mut self, node: &AdjOrd) -> Self::Output;
    fn visit_adj_num(&mut self, node: &AdjNum) -> Self::Output;
    fn visit_word(&mut self, node: &Word) -> Self::Output;
    /// A slot the parse left unfilled.
    fn visit_empty(&mut self) -> Self::Output;
}

pub trait Node {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output;
}

impl<T: Node> Node for Option<T> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Some(node) => node.accept(visitor),
            None => visitor.visit_empty(),
        }
    }
}

impl<T: Node + ?Sized> Node for Box<T> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        (**self).accept(visitor)
    }
}

macro_rules! leaf_nodes {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl Node for $ty {
                fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
                    visitor.$method(self)
                }
            }
        )*
    };
}

leaf_nodes! {
    SentencePart => visit_sentence_part,
    Sentence => visit_sentence,
    PredPhrase => visit_pred_phrase,
    Predicate => visit_predicate,
    Descriptive => visit_descriptive,
    Adverb => visit_adverb,
    Time => visit_time,
    Date => visit_date,
    NounPhrasePart => visit_noun_phrase_part,
    ComplexNounPhrase => visit_complex_noun_phrase,
    NounGroup => visit_noun_group,
    DemPronoun => visit_dem_pronoun,
    Noun => visit_noun,
    Possess => visit_possess,
    CompoundNoun => visit_compound_noun,
    PrepPhrase => visit_prep_phrase,
    VerbPhrase => visit_verb_phrase,
    VerbComplex => visit_verb_complex,
    Adjective => visit_adjective,
    AdjOrd => visit_adj_ord,
    AdjNum => visit_adj_num,
    Word => visit_word,
}

// Sum types dispatch to whichever shape they hold.

impl Node for PredicateContent {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            PredicateContent::Nouns(node) => node.accept(visitor),
            PredicateContent::Descriptive(node) => node.accept(visitor),
            PredicateContent::Prep(node) => node.accept(visitor),
            PredicateContent::Interrogative(node) => node.accept(visitor),
        }
    }
}

impl Node for AdverbPart {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            AdverbPart::Word(node) => node.accept(visitor),
            AdverbPart::Time(node) => node.accept(visitor),
        }
    }
}

impl Node for Quantity {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Quantity::Numeral(node) => node.accept(visitor),
            Quantity::Number(node) => node.accept(visitor),
        }
    }
}

impl Node for NounPhraseTail {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            NounPhraseTail::More(node) => node.accept(visitor),
            NounPhraseTail::Last(node) => node.accept(visitor),
        }
    }
}

impl Node for NounPhrase {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            NounPhrase::Complex(node) => node.accept(visitor),
            NounPhrase::Counted(node) => node.accept(visitor),
            NounPhrase::Date(node) => node.accept(visitor),
        }
    }
}

impl Node for NounHead {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            NounHead::Group(node) => node.accept(visitor),
            NounHead::Demonstrative(node) => node.accept(visitor),
        }
    }
}

impl Node for GroupHead {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            GroupHead::Pronoun(node) => node.accept(visitor),
            GroupHead::Noun(node) => node.accept(visitor),
        }
    }
}

impl Node for Possession {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Possession::Linked(node) => node.accept(visitor),
            Possession::Prepositional(node) => node.accept(visitor),
        }
    }
}

impl Node for CompoundTail {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            CompoundTail::More(node) => node.accept(visitor),
            CompoundTail::Last(node) => node.accept(visitor),
        }
    }
}

impl Node for VerbObject {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            VerbObject::Nouns(node) => node.accept(visitor),
            VerbObject::Prep(node) => node.accept(visitor),
        }
    }
}

/// A rendered tree node: a label and children, where a child may be a
/// whole sequence (the nouns of a noun group, the lead words of a time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNode {
    pub label: String,
    pub children: Vec<DisplayChild>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DisplayChild {
    Node(DisplayNode),
    List(Vec<DisplayNode>),
}

impl DisplayNode {
    pub const EMPTY: &'static str = "Empty";

    pub fn new(label: impl Into<String>, children: Vec<DisplayChild>) -> Self {
        Self { label: label.into(), children }
    }

    pub fn leaf(label: impl Into<String>) -> Self {
        Self::new(label, Vec::new())
    }

    pub fn empty() -> Self {
        Self::leaf(Self::EMPTY)
    }

    /// Depth-first labels, list members included.
    pub fn labels(&self) -> Vec<&str> {
        let mut out = vec![self.label.as_str()];
        for child in &self.children {
            match child {
                DisplayChild::Node(node) => out.extend(node.labels()),
                DisplayChild::List(nodes) => nodes.iter().for_each(|n| out.extend(n.labels())),
            }
        }
        out
    }

    fn write_at(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        let indent = "    ".repeat(level);
        let arrow = if level > 0 { "|-->" } else { "" };
        writeln!(f, "{indent}{arrow}{}", self.label)?;
        for child in &self.children {
            match child {
                DisplayChild::Node(node) => node.write_at(f, level + 1)?,
                DisplayChild::List(nodes) => {
                    for node in nodes {
                        node.write_at(f, level + 1)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for DisplayNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_at(f, 0)
    }
}

/// Builds a [`DisplayNode`] tree out of any parse-tree node.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeRenderer;

impl TreeRenderer {
    fn one<N: Node + ?Sized>(&mut self, node: &N) -> DisplayChild {
        DisplayChild::Node(node.accept(self))
    }

    fn many<N: Node>(&mut self, nodes: &[N]) -> DisplayChild {
        DisplayChild::List(nodes.iter().map(|n| n.accept(self)).collect())
    }

    fn empty(&mut self) -> DisplayChild {
        DisplayChild::Node(DisplayNode::empty())
    }
}

impl Visitor for TreeRenderer {
    type Output = DisplayNode;

    fn visit_sentence_part(&mut self, node: &SentencePart) -> DisplayNode {
        let children = vec![self.one(&node.left), self.one(&node.conj), self.one(&node.right)];
        DisplayNode::new("Sentence Part", children)
    }

    fn visit_sentence(&mut self, node: &Sentence) -> DisplayNode {
        let children = vec![self.one(&node.pred_phrase), self.one(&node.noun_phrase)];
        DisplayNode::new("Sentence", children)
    }

    fn visit_pred_phrase(&mut self, node: &PredPhrase) -> DisplayNode {
        let children = vec![
            self.one(&node.predicate),
            self.one(&node.mid_adverb),
            self.one(&node.verb_phrase),
            self.one(&node.end_adverb),
        ];
        DisplayNode::new("Predicate Phrase", children)
    }

    fn visit_predicate(&mut self, node: &Predicate) -> DisplayNode {
        let children = vec![self.one(&node.content)];
        DisplayNode::new("Predicate", children)
    }

    fn visit_descriptive(&mut self, node: &Descriptive) -> DisplayNode {
        let child = match node {
            Descriptive::Adjective(word) => self.one(word),
            Descriptive::Adverb(adverb) => self.one(adverb),
        };
        DisplayNode::new("Descriptive", vec![child])
    }

    fn visit_adverb(&mut self, node: &Adverb) -> DisplayNode {
        let children = vec![self.one(&node.head), self.one(&node.addition)];
        DisplayNode::new("Adverb", children)
    }

    fn visit_time(&mut self, node: &Time) -> DisplayNode {
        let children = vec![
            self.many(&node.lead),
            self.one(&node.quantity),
            self.one(&node.day),
        ];
        DisplayNode::new("Time", children)
    }

    fn visit_date(&mut self, node: &Date) -> DisplayNode {
        let label = match node.style {
            DateStyle::English => "English Date",
            DateStyle::Spanish => "Spanish Date",
        };
        let mut children = Vec::new();
        if node.style == DateStyle::Spanish {
            children.push(self.many(&node.ordinal));
            children.push(self.one(&node.day));
            children.push(self.one(&node.sa));
            children.push(self.one(&node.month));
        } else {
            children.push(self.one(&node.month));
            children.push(self.one(&node.day));
        }
        children.push(self.one(&node.comma));
        children.push(self.one(&node.year));
        DisplayNode::new(label, children)
    }

    fn visit_noun_phrase_part(&mut self, node: &NounPhrasePart) -> DisplayNode {
        let children = vec![self.one(&node.left), self.one(&node.conj), self.one(&node.right)];
        DisplayNode::new("Noun Phrase Part", children)
    }

    fn visit_complex_noun_phrase(&mut self, node: &ComplexNounPhrase) -> DisplayNode {
        let children = vec![
            self.one(&node.head),
            self.one(&node.prep_phrase),
            self.one(&node.nga),
            self.one(&node.clause),
        ];
        DisplayNode::new("Noun Phrase", children)
    }

    fn visit_noun_group(&mut self, node: &NounGroup) -> DisplayNode {
        let label = format!("{} Noun Phrase", node.number.label());
        let children = vec![
            self.one(&node.start),
            self.one(&node.possessor),
            self.one(&node.ordinal),
            self.one(&node.quantity),
            self.one(&node.head),
            self.one(&node.clitic),
        ];
        DisplayNode::new(label, children)
    }

    fn visit_dem_pronoun(&mut self, node: &DemPronoun) -> DisplayNode {
        let label = match node.number {
            Some(number) => format!("{} Demonstrative Phrase", number.label()),
            None => "Demonstrative Phrase".to_string(),
        };
        let children = vec![
            self.one(&node.pronoun),
            self.one(&node.clitic),
            self.one(&node.ordinal),
            self.one(&node.quantity),
            self.one(&node.noun),
        ];
        DisplayNode::new(label, children)
    }

    fn visit_noun(&mut self, node: &Noun) -> DisplayNode {
        let label = format!("{} Noun", node.number.label());
        let nouns = if node.nouns.is_empty() {
            self.empty()
        } else {
            self.many(&node.nouns)
        };
        let children = vec![
            self.one(&node.mga),
            self.one(&node.adjective),
            nouns,
            self.one(&node.possession),
        ];
        DisplayNode::new(label, children)
    }

    fn visit_possess(&mut self, node: &Possess) -> DisplayNode {
        let label = format!("{} Possessive Phrase", node.kind.label());
        let children = vec![self.one(&node.link), self.one(&node.nouns)];
        DisplayNode::new(label, children)
    }

    fn visit_compound_noun(&mut self, node: &CompoundNoun) -> DisplayNode {
        let children = vec![self.one(&node.noun), self.one(&node.conj), self.one(&node.other)];
        DisplayNode::new("Compound Noun", children)
    }

    fn visit_prep_phrase(&mut self, node: &PrepPhrase) -> DisplayNode {
        let children = vec![
            self.one(&node.prep),
            self.one(&node.second),
            self.one(&node.noun_phrase),
            self.one(&node.specifier),
            self.one(&node.extra),
        ];
        DisplayNode::new("Prepositional Phrase", children)
    }

    fn visit_verb_phrase(&mut self, node: &VerbPhrase) -> DisplayNode {
        let children = vec![self.one(&node.verb), self.one(&node.object)];
        DisplayNode::new("Verb Phrase", children)
    }

    fn visit_verb_complex(&mut self, node: &VerbComplex) -> DisplayNode {
        let children = vec![
            self.one(&node.prefix),
            self.one(&node.root),
            self.one(&node.suffix),
            self.one(&node.clitic),
        ];
        DisplayNode::new("Complex Verb", children)
    }

    fn visit_adjective(&mut self, node: &Adjective) -> DisplayNode {
        let children = vec![self.many(&node.adjectives), self.many(&node.linkers)];
        DisplayNode::new("Adjective", children)
    }

    fn visit_adj_ord(&mut self, node: &AdjOrd) -> DisplayNode {
        let children = vec![
            self.one(&node.marker),
            self.one(&node.dash),
            self.one(&node.number),
            self.one(&node.nga),
        ];
        DisplayNode::new("Ordinal Adjective", children)
    }

    fn visit_adj_num(&mut self, node: &AdjNum) -> DisplayNode {
        let children = vec![self.many(&node.parts), self.one(&node.conj), self.one(&node.ka)];
        DisplayNode::new("Numerical Adjective", children)
    }

    fn visit_word(&mut self, node: &Word) -> DisplayNode {
        match &node.token {
            Some(token) => DisplayNode::leaf(format!("{}->{}", node.role, token.value)),
            None => DisplayNode::empty(),
        }
    }

    fn visit_empty(&mut self) -> DisplayNode {
        DisplayNode::empty()
    }
}

/// Render any node with [`TreeRenderer`].
pub fn render<N: Node + ?Sized>(node: &N) -> DisplayNode {
    node.accept(&mut TreeRenderer)
}
