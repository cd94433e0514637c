use sugbo_morph::Stemmer;
use sugbo_protocol::{RootLookup, TagSet};

use super::checks;
use super::{Parser, TIME_START};
use crate::ast::{Adverb, AdverbPart, Date, DateStyle, Time, Word};
use crate::token::Value;

impl<'a, S, D> Parser<'a, S, D>
where
    S: Stemmer + ?Sized,
    D: RootLookup + ?Sized,
{
    pub(crate) fn adverb(&mut self) -> Option<Adverb> {
        if self.at(TagSet::PLACE) {
            let place = self.take(TagSet::PLACE);
            let addition = if self.at(TIME_START) {
                self.time().map(AdverbPart::Time)
            } else {
                None
            };
            return Some(Adverb { head: AdverbPart::Word(place), addition });
        }

        if self.at(TagSet::ADV_SPE) {
            let specifier = self.take(TagSet::ADV_SPE);
            return Some(Adverb { head: AdverbPart::Word(specifier), addition: None });
        }

        if self.at(TIME_START.union(TagSet::HOUR)) {
            let time = self.time()?;
            let addition = self.optional(TagSet::ADV_SPE).map(AdverbPart::Word);
            return Some(Adverb { head: AdverbPart::Time(time), addition });
        }

        if self.at(TagSet::ADV) {
            let head = self.take(TagSet::ADV);
            let addition = match head.text() {
                Some("alas") => self.time().map(AdverbPart::Time),
                Some("dili") => self.optional(TagSet::ADV_SPE).map(AdverbPart::Word),
                _ => None,
            };
            return Some(Adverb { head: AdverbPart::Word(head), addition });
        }

        None
    }

    pub(crate) fn time(&mut self) -> Option<Time> {
        if self.at(TagSet::TIME) {
            let word = self.take(TagSet::TIME);
            return Some(Time { lead: vec![word], quantity: None, day: None });
        }

        if self.at(TagSet::NIAGING) {
            let niaging = self.take(TagSet::NIAGING);
            let quantity = self.adj_num();
            let day = self.take(TagSet::TIME_NOUN);
            return Some(Time { lead: vec![niaging], quantity, day: Some(day) });
        }

        if self.at(TagSet::SUNOD) {
            let sunod = self.take(TagSet::SUNOD);
            let nga = self.take(TagSet::NGA);
            let quantity = self.adj_num();
            let day = self.take(TagSet::TIME_NOUN);
            return Some(Time { lead: vec![sunod, nga], quantity, day: Some(day) });
        }

        if self.at(TagSet::KARONG) {
            let karong = self.take(TagSet::KARONG);
            let day = self.take(TagSet::TIME_NOUN_A);
            return Some(Time { lead: vec![karong], quantity: None, day: Some(day) });
        }

        if self.at(TagSet::HOUR) {
            return Some(self.clock_time());
        }

        None
    }

    /// `uno sa hapon`
    fn clock_time(&mut self) -> Time {
        let hour = self.take(TagSet::HOUR);
        let sa = if self.at(TagSet::PREP) && self.at_word("sa") {
            self.take(TagSet::PREP)
        } else {
            let diagnostic = checks::hour_preposition(self.current());
            self.report(diagnostic);
            Word::absent(TagSet::PREP)
        };
        let part = self.take(TagSet::TIME_OF_DAY);

        if let (Some(h), Some(p)) = (hour.text(), part.text()) {
            if part.tags().contains(TagSet::TIME_OF_DAY) {
                if let Some(diagnostic) = checks::hour_day_part(h, p) {
                    self.report(diagnostic);
                }
            }
        }

        Time { lead: vec![hour, sa], quantity: None, day: Some(part) }
    }

    /// `marso 5` or `marso 5, 2024`
    pub(crate) fn date(&mut self) -> Date {
        let month = self.take(TagSet::MONTH);
        let day = self.take_as(TagSet::NUM, TagSet::DAY);
        let (comma, year) = self.date_year();
        self.check_date(&month, &day, year.as_ref());
        Date {
            style: DateStyle::English,
            ordinal: Vec::new(),
            day,
            sa: None,
            month,
            comma,
            year,
        }
    }

    /// `ika-5 sa marso, 2024`, entered once `ika-5` has been read.
    pub(crate) fn spanish_date(&mut self, mut marker: Word, dash: Word, day: Word) -> Date {
        if let Some(token) = marker.token.as_mut() {
            token.value = Value::from("ika");
        }
        let sa = if self.at(TagSet::PREP) && self.at_word("sa") {
            Some(self.take(TagSet::PREP))
        } else {
            let diagnostic = checks::date_preposition(self.current());
            self.report(diagnostic);
            None
        };
        let month = self.take(TagSet::MONTH);
        let (comma, year) = self.date_year();
        self.check_date(&month, &day, year.as_ref());
        Date {
            style: DateStyle::Spanish,
            ordinal: vec![marker, dash],
            day,
            sa,
            month,
            comma,
            year,
        }
    }

    fn date_year(&mut self) -> (Option<Word>, Option<Word>) {
        if !self.at(TagSet::COMMA) {
            return (None, None);
        }
        let comma = self.take(TagSet::COMMA);
        let year = self.take_as(TagSet::NUM, TagSet::YEAR);
        (Some(comma), Some(year))
    }

    fn check_date(&mut self, month: &Word, day: &Word, year: Option<&Word>) {
        if !month.tags().contains(TagSet::MONTH) {
            return;
        }
        let (Some(month), Some(day)) = (month.text(), day.number()) else {
            return;
        };
        if let Some(diagnostic) = checks::date_range(month, day, year.and_then(Word::number)) {
            self.report(diagnostic);
        }
    }
}
