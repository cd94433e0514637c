use sugbo_morph::Stemmer;
use sugbo_protocol::{RootLookup, TagSet};
use tracing::trace;

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::scanner::{Raw, Scanner};
use crate::token::{Span, Token, Value};

/// Words the grammar treats as keywords. They bypass the lexicon, the
/// stemmer and the dictionary.
pub const RESERVED: &[(&str, TagSet)] = &[
    ("mga", TagSet::MGA),
    ("nga", TagSet::NGA),
    ("ika-", TagSet::IKA),
    ("niaging", TagSet::NIAGING),
    ("sunod", TagSet::SUNOD),
    ("karong", TagSet::KARONG),
];

pub fn reserved(word: &str) -> Option<TagSet> {
    RESERVED
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, tag)| *tag)
}

/// Turns text into classified tokens.
///
/// A word's tags are the union of its closed-class tags and the parts of
/// speech the dictionary records for its root; a word known to neither is
/// assumed to be a noun.
pub struct Lexer<'a, S: ?Sized, D: ?Sized> {
    scanner: Scanner<'a>,
    lexicon: &'static Lexicon,
    stemmer: &'a S,
    dictionary: &'a D,
}

impl<'a, S, D> Lexer<'a, S, D>
where
    S: Stemmer + ?Sized,
    D: RootLookup + ?Sized,
{
    pub fn new(input: &'a str, stemmer: &'a S, dictionary: &'a D) -> Self {
        Self {
            scanner: Scanner::new(input),
            lexicon: Lexicon::global(),
            stemmer,
            dictionary,
        }
    }

    /// The next token. Once the input is exhausted this keeps returning EOF.
    pub fn next_token(&mut self) -> Result<Token> {
        let Some((span, raw)) = self.scanner.next_raw()? else {
            return Ok(Token::eof(self.scanner.end()));
        };

        let token = match raw {
            Raw::Word(word) => self.classify(word, span)?,
            // Digit runs past 64 bits stay text; numeric checks skip them.
            Raw::Number(digits) => {
                let value = digits
                    .parse::<i64>()
                    .map_or_else(|_| Value::from(digits), Value::Number);
                Token::new(span, TagSet::NUM, value)
            }
            Raw::Comma => Token::new(span, TagSet::COMMA, Value::from(",")),
            Raw::CliticY => Token::new(span, TagSet::CLIT_Y, Value::from("'y")),
            Raw::CliticNg => Token::new(span, TagSet::CLIT_NG, Value::from("'ng")),
        };
        trace!(tags = %token.tags, value = %token.value, "token");
        Ok(token)
    }

    /// Every token up to and including the first EOF.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn classify(&self, word: &str, span: Span) -> Result<Token> {
        let word = word.to_lowercase();
        if let Some(tag) = reserved(&word) {
            return Ok(Token::new(span, tag, Value::Text(word)));
        }

        let stem = self.stemmer.stem(&word)?;
        let mut tags = self.lexicon.tags_of(&word);
        if let Some(parts) = self.dictionary.lookup(&stem.root) {
            tags |= parts;
        }
        if tags.is_empty() {
            tags = TagSet::NOUN;
        }

        let mut token = Token::new(span, tags, Value::Text(word));
        token.stem = Some(Box::new(stem));
        Ok(token)
    }
}
