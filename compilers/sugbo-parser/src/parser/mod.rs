//! Error-tolerant recursive descent over a single sentence.
//!
//! A missing token never aborts the parse: [`Parser::expect`] records a
//! diagnostic and leaves the cursor where it is, so the next production
//! gets a chance at the same token.

pub mod checks;
mod noun;
mod sentence;
mod time;

use std::mem;

use sugbo_morph::Stemmer;
use sugbo_protocol::{RootLookup, TagSet};
use tracing::{debug, instrument};

use crate::ast::{SentencePart, Word};
use crate::diagnostic::Diagnostic;
use crate::error::Result;
use crate::lexer::Lexer;
use crate::token::Token;

/// Tokens that can open a noun phrase.
const NOUN_PHRASE_START: TagSet = TagSet::DET
    .union(TagSet::DET_PLURAL)
    .union(TagSet::PRON_DEM)
    .union(TagSet::PRON_PER)
    .union(TagSet::PRON_PER_PLURAL)
    .union(TagSet::PRON_POS)
    .union(TagSet::PRON_POS_PLURAL)
    .union(TagSet::PRON_POS_NG)
    .union(TagSet::PRON_POS_PLURAL_NG)
    .union(TagSet::IKA)
    .union(TagSet::NUM)
    .union(TagSet::NOUN)
    .union(TagSet::MONTH)
    .union(TagSet::MGA);

/// Tokens after which `sa` reads as a preposition rather than a linker.
const SA_PHRASE_START: TagSet = NOUN_PHRASE_START
    .difference(TagSet::MGA)
    .union(TagSet::ADJ)
    .union(TagSet::PREP);

const TIME_START: TagSet = TagSet::TIME
    .union(TagSet::NIAGING)
    .union(TagSet::SUNOD)
    .union(TagSet::KARONG);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Deepest nesting of phrases before the parser stops descending.
    /// Every sentence, predicate phrase and noun phrase counts one level,
    /// so a `nga` clause costs four. The default stays well inside a
    /// 2 MiB thread stack.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { max_depth: 32 }
    }
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub diagnostics: Vec<Diagnostic>,
    pub tree: SentencePart,
    /// Tokens left over after the sentence, EOF excluded.
    pub unparsed: Vec<Token>,
}

impl Parsed {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.unparsed.is_empty()
    }
}

pub struct Parser<'a, S: ?Sized, D: ?Sized> {
    stemmer: &'a S,
    dictionary: &'a D,
    options: ParserOptions,
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
    diagnostics: Vec<Diagnostic>,
    depth: usize,
    too_deep: bool,
}

impl<'a, S, D> Parser<'a, S, D>
where
    S: Stemmer + ?Sized,
    D: RootLookup + ?Sized,
{
    pub fn new(stemmer: &'a S, dictionary: &'a D) -> Self {
        Self {
            stemmer,
            dictionary,
            options: ParserOptions::default(),
            tokens: Vec::new(),
            pos: 0,
            eof: Token::eof(0),
            diagnostics: Vec::new(),
            depth: 0,
            too_deep: false,
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse one sentence. Only lexical failures are errors; everything
    /// the grammar objects to comes back in [`Parsed::diagnostics`].
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub fn parse(&mut self, text: &str) -> Result<Parsed> {
        self.tokens = Lexer::new(text, self.stemmer, self.dictionary).tokenize()?;
        self.eof = Token::eof(text.len());
        self.pos = 0;
        self.depth = 0;
        self.too_deep = false;
        self.diagnostics.clear();

        let tree = self.sentence_part();
        let unparsed: Vec<Token> = self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|t| !t.is_eof())
            .cloned()
            .collect();
        if !unparsed.is_empty() {
            debug!(count = unparsed.len(), "tokens left after the sentence");
        }

        Ok(Parsed {
            diagnostics: mem::take(&mut self.diagnostics),
            tree,
            unparsed,
        })
    }

    pub(crate) fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Current token may play any of `tags`.
    pub(crate) fn at(&self, tags: TagSet) -> bool {
        self.current().is(tags)
    }

    pub(crate) fn at_word(&self, word: &str) -> bool {
        self.current().text() == Some(word)
    }

    /// Advance past the current token if it carries `tag`; otherwise record
    /// a diagnostic and stay put.
    pub(crate) fn expect(&mut self, tag: TagSet) -> bool {
        if self.current().tags.contains(tag) {
            self.advance();
            return true;
        }
        let diagnostic = checks::wrong_syntax(self.current(), tag);
        self.report(diagnostic);
        false
    }

    /// The current token as a leaf, expecting `tag`. The leaf is built
    /// even if the expectation fails.
    pub(crate) fn take(&mut self, tag: TagSet) -> Word {
        self.take_as(tag, tag)
    }

    /// Like [`Parser::take`] but labels the leaf with a different role.
    pub(crate) fn take_as(&mut self, tag: TagSet, role: TagSet) -> Word {
        let token = self.current().clone();
        self.expect(tag);
        Word::new(role, token)
    }

    pub(crate) fn optional(&mut self, tag: TagSet) -> Option<Word> {
        if self.at(tag) {
            Some(self.take(tag))
        } else {
            None
        }
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        debug!(message = %diagnostic.message, value = %diagnostic.value, "diagnostic");
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn report_all(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.report(diagnostic);
        }
    }

    /// Run a nested production unless that would pass `max_depth`. The
    /// first refusal is reported; the subtree is then left out.
    pub(crate) fn descend<T>(&mut self, production: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if self.depth >= self.options.max_depth {
            if !self.too_deep {
                self.too_deep = true;
                let diagnostic = checks::too_deep(self.options.max_depth, self.current());
                self.report(diagnostic);
            }
            return None;
        }
        self.depth += 1;
        let out = production(self);
        self.depth -= 1;
        Some(out)
    }
}

/// Parse `text` with default options.
pub fn parse<S, D>(text: &str, stemmer: &S, dictionary: &D) -> Result<Parsed>
where
    S: Stemmer + ?Sized,
    D: RootLookup + ?Sized,
{
    Parser::new(stemmer, dictionary).parse(text)
}
