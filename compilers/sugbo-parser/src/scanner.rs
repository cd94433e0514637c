//! Raw scanning: splits input into words, digit runs, commas and the two
//! apostrophe clitics. Classification happens later, in the lexer.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, digit1, multispace0, satisfy},
    combinator::{map, recognize},
    sequence::pair,
    IResult,
};

use crate::error::{Error, Result};
use crate::token::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Raw<'a> {
    Word(&'a str),
    Number(&'a str),
    Comma,
    CliticY,
    CliticNg,
}

fn word(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(char::is_alphabetic),
        take_while(|c: char| c.is_alphabetic() || c == '-'),
    ))(input)
}

fn raw(input: &str) -> IResult<&str, Raw<'_>> {
    alt((
        map(word, Raw::Word),
        map(digit1, Raw::Number),
        map(char(','), |_| Raw::Comma),
        map(tag("'y"), |_| Raw::CliticY),
        map(tag("'ng"), |_| Raw::CliticNg),
    ))(input)
}

pub struct Scanner<'a> {
    input: &'a str,
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, rest: input }
    }

    fn offset(&self) -> usize {
        self.input.len() - self.rest.len()
    }

    /// Next raw token and its span, or `None` once only whitespace is left.
    pub fn next_raw(&mut self) -> Result<Option<(Span, Raw<'a>)>> {
        if let Ok((rest, _)) = multispace0::<&str, ()>(self.rest) {
            self.rest = rest;
        }
        let start = self.offset();
        let Some(ch) = self.rest.chars().next() else {
            return Ok(None);
        };

        match raw(self.rest) {
            Ok((rest, token)) => {
                self.rest = rest;
                Ok(Some((Span::new(start, self.offset()), token)))
            }
            Err(_) => Err(Error::InvalidCharacter { ch, offset: start }),
        }
    }

    /// Byte offset where the input ends.
    pub fn end(&self) -> usize {
        self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> Result<Vec<Raw<'_>>> {
        let mut scanner = Scanner::new(input);
        let mut out = Vec::new();
        while let Some((_, raw)) = scanner.next_raw()? {
            out.push(raw);
        }
        Ok(out)
    }

    #[test]
    fn test_scan_mixed() {
        let raws = scan("  Ika-3 sa marso, 2024 ako'y kana'ng\n").unwrap();
        assert_eq!(
            raws,
            vec![
                Raw::Word("Ika-"),
                Raw::Number("3"),
                Raw::Word("sa"),
                Raw::Word("marso"),
                Raw::Comma,
                Raw::Number("2024"),
                Raw::Word("ako"),
                Raw::CliticY,
                Raw::Word("kana"),
                Raw::CliticNg,
            ]
        );
    }

    #[test]
    fn test_hyphenated_word() {
        assert_eq!(scan("gabi-i").unwrap(), vec![Raw::Word("gabi-i")]);
    }

    #[test]
    fn test_invalid_character() {
        let err = scan("kaon!").unwrap_err();
        assert_eq!(err, Error::InvalidCharacter { ch: '!', offset: 4 });
    }

    #[test]
    fn test_spans_point_into_input() {
        let mut scanner = Scanner::new("ang  bata");
        let (first, _) = scanner.next_raw().unwrap().unwrap();
        let (second, _) = scanner.next_raw().unwrap().unwrap();
        assert_eq!(first, Span::new(0, 3));
        assert_eq!(second, Span::new(5, 9));
        assert!(scanner.next_raw().unwrap().is_none());
        assert_eq!(scanner.end(), 9);
    }
}
