//! # Duration Formatting
//!
//! A duration is turned into a string by filling in a *template*: a string
//! where runs of unit letters are replaced by that unit’s value or label,
//! and everything else is copied across, in the style of Moment.js.
//!
//! | Code        | Output                                        |
//! |-------------|-----------------------------------------------|
//! | `d`, `dd`   | days, with `dd` zero-padded to two digits     |
//! | `h`, `hh`   | hours, likewise                               |
//! | `m`, `mm`   | minutes, likewise                             |
//! | `s`, `ss`   | seconds, likewise                             |
//! | `i`, `iii`  | milliseconds, with `iii` padded to three      |
//! | `D` … `I`   | the unit’s abbreviation, such as `d` or `ms`  |
//! | `DD` … `II` | the unit’s name, such as `day` or `days`      |
//! | `[text]`    | `text`, untouched                             |
//!
//! Letters are case-sensitive and matched greedily, so `ddd` is a padded
//! day count followed by an unpadded one. Padding is a minimum width: a
//! hundred days under `dd` is still `100`.
//!
//! Formatting never fails. A run that isn’t a code, such as `ii`, renders
//! as nothing at all, and any other character is passed through.
//!
//! ```rust
//! use timespan::Duration;
//!
//! let lap = Duration::from_millis(91_814);
//! assert_eq!(lap.format("mm:ss.iii"), "01:31.814");
//! ```
//!
//! A template can be parsed once up front and used for many durations:
//!
//! ```rust
//! use timespan::{Duration, DurationFormat};
//!
//! let formatter = DurationFormat::parse("h HH [left]");
//! assert_eq!(formatter.format(&Duration::zero().hours(1)), "1 hour left");
//! assert_eq!(formatter.format(&Duration::zero().hours(3)), "3 hours left");
//! ```

use std::fmt::Display;
use std::str::CharIndices;

use num_traits::PrimInt;
use pad::{PadStr, Alignment};

use duration::Duration;
use units::Unit;


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Number(Unit, NumArguments),

    Abbreviation(Unit),
    Label(Unit),
}

impl<'a> Field<'a> {
    fn format(&self, duration: &Duration, w: &mut String) {
        match *self {
            Field::Literal(s)            => w.push_str(s),
            Field::Number(unit, a)       => a.format(w, duration.field(unit)),
            Field::Abbreviation(unit)    => w.push_str(unit.abbreviation()),
            Field::Label(unit)           => w.push_str(unit.label(duration.field(unit))),
        }
    }
}


/// A parsed template, ready to render any number of durations.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DurationFormat<'a> {
    pub fields: Vec<Field<'a>>,
    source: &'a str,
}

impl<'a> DurationFormat<'a> {

    /// Splits a template into its fields. Every string is a valid
    /// template, so this can’t fail.
    pub fn parse(input: &'a str) -> DurationFormat<'a> {
        let mut parser = FormatParser::new(input);
        parser.parse_format_string();

        DurationFormat { fields: parser.fields, source: input }
    }

    /// The template this was parsed from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn format(&self, duration: &Duration) -> String {
        let mut buf = String::new();

        for field in &self.fields {
            field.format(duration, &mut buf);
        }

        buf
    }

    /// The unit of the first number in this template, which is the one a
    /// sentence looks at to decide whether the fragment is worth keeping.
    pub fn leading_unit(&self) -> Option<Unit> {
        self.fields.iter().filter_map(|field| match *field {
            Field::Number(unit, _) => Some(unit),
            _                      => None,
        }).next()
    }
}


pub type Width = usize;
pub type Pos = usize;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NumArguments {
    pub width: Option<Width>,
}

impl NumArguments {
    pub fn unpadded() -> NumArguments {
        NumArguments { width: None }
    }

    pub fn padded(width: Width) -> NumArguments {
        NumArguments { width: Some(width) }
    }

    fn format<N: PrimInt + Display>(self, w: &mut String, number: N) {
        let string = number.to_string();
        let width  = self.width.unwrap_or(0);

        // Pad the digits, not the sign, so -5 under `dd` is "-05".
        if string.starts_with('-') {
            w.push('-');
            w.push_str(&string[1..].pad(width, '0', Alignment::Right, false));
        }
        else {
            w.push_str(&string.pad(width, '0', Alignment::Right, false));
        }
    }
}


/// The field a run of `count` copies of `letter` stands for, if any.
fn field_for_run<'a>(letter: char, count: usize) -> Option<Field<'a>> {
    let unit = Unit::from_symbol(letter)?;

    if letter.is_ascii_uppercase() {
        return match count {
            1 => Some(Field::Abbreviation(unit)),
            _ => Some(Field::Label(unit)),
        };
    }

    match (unit, count) {
        (_, 1)                  => Some(Field::Number(unit, NumArguments::unpadded())),
        (Unit::Millisecond, 3)  => Some(Field::Number(unit, NumArguments::padded(3))),
        (Unit::Millisecond, _)  => None,
        (_, _)                  => Some(Field::Number(unit, NumArguments::padded(2))),
    }
}

/// The longest run of one letter that makes up a single code.
fn longest_run(letter: char) -> usize {
    if letter == 'i' { 3 } else { 2 }
}


struct FormatParser<'a> {
    iter:   CharIndices<'a>,
    fields: Vec<Field<'a>>,
    input:  &'a str,
    anchor: Option<Pos>,
    peekee: Option<Option<(Pos, char)>>,
}

impl<'a> FormatParser<'a> {
    fn new(input: &'a str) -> FormatParser<'a> {
        FormatParser {
            iter:   input.char_indices(),
            fields: Vec::new(),
            input,
            anchor: None,
            peekee: None,
        }
    }

    fn next(&mut self) -> Option<(Pos, char)> {
        match self.peekee {
            Some(p) => {
                self.peekee = None;
                p
            },
            None => { self.iter.next() },
        }
    }

    fn peek(&mut self) -> Option<(Pos, char)> {
        match self.peekee {
            Some(thing) => thing,
            None => {
                self.peekee = Some(self.iter.next());
                self.peek()
            }
        }
    }

    fn collect_up_to_anchor(&mut self, position: Option<Pos>) {
        if let Some(pos) = self.anchor {
            self.anchor = None;
            let text = match position {
                Some(new_pos) => &self.input[pos..new_pos],
                None          => &self.input[pos..],
            };
            self.fields.push(Field::Literal(text));
        }
    }

    fn parse_format_string(&mut self) {
        loop {
            match self.next() {
                Some((open_pos, '[')) => {
                    match self.escape_end(open_pos) {
                        Some(close_pos) => {
                            self.collect_up_to_anchor(Some(open_pos));
                            self.skip_to(close_pos);

                            if close_pos > open_pos + 1 {
                                self.fields.push(Field::Literal(&self.input[open_pos + 1 .. close_pos]));
                            }
                        },
                        None => self.mark(open_pos),
                    }
                },
                Some((pos, c)) if Unit::from_symbol(c).is_some() => {
                    let count = self.parse_run(c);

                    match field_for_run(c, count) {
                        Some(field) => {
                            self.collect_up_to_anchor(Some(pos));
                            self.fields.push(field);
                        },
                        None => {
                            // An unknown run renders as nothing, so close
                            // off any literal text before it and move on.
                            self.collect_up_to_anchor(Some(pos));
                        },
                    }
                },
                Some((pos, _)) => self.mark(pos),
                None => break,
            }
        }

        // Finally, collect any literal characters after the last unit
        // field that haven't been turned into a Literal field yet.
        self.collect_up_to_anchor(None);
    }

    fn mark(&mut self, pos: Pos) {
        if self.anchor.is_none() {
            self.anchor = Some(pos);
        }
    }

    /// Counts how many more copies of `letter` follow the one just read,
    /// up to the longest code for that letter, consuming them.
    fn parse_run(&mut self, letter: char) -> usize {
        let mut count = 1;

        while count < longest_run(letter) {
            match self.peek() {
                Some((_, c)) if c == letter => {
                    let _ = self.next();
                    count += 1;
                },
                _ => break,
            }
        }

        count
    }

    // An escape runs from its opening bracket to the *last* closing
    // bracket before the next opening one, so "[a]b]" escapes "a]b".
    // Without any closing bracket the opening one is just a character.
    fn escape_end(&self, open_pos: Pos) -> Option<Pos> {
        let mut close = None;

        for (offset, c) in self.input[open_pos + 1 ..].char_indices() {
            match c {
                ']' => close = Some(open_pos + 1 + offset),
                '[' => break,
                _   => {},
            }
        }

        close
    }

    fn skip_to(&mut self, close_pos: Pos) {
        while let Some((pos, _)) = self.next() {
            if pos == close_pos {
                break;
            }
        }
    }
}


/// Anything a duration can be rendered through: a single template, or a
/// list of them joined into a sentence.
pub trait Template {
    fn render(&self, duration: &Duration) -> String;
}

impl Template for str {
    fn render(&self, duration: &Duration) -> String {
        DurationFormat::parse(self).format(duration)
    }
}

impl Template for String {
    fn render(&self, duration: &Duration) -> String {
        self.as_str().render(duration)
    }
}

impl<'a> Template for DurationFormat<'a> {
    fn render(&self, duration: &Duration) -> String {
        self.format(duration)
    }
}

impl Duration {

    /// Renders this duration through a template, or through a list of
    /// templates joined into a sentence.
    ///
    /// ### Examples
    ///
    /// ```
    /// use timespan::Duration;
    ///
    /// let d = Duration::zero().seconds(43).minutes(12);
    /// assert_eq!(d.format("mm MM [and] ss SS"), "12 minutes and 43 seconds");
    /// assert_eq!(d.format(&["h HH", "m MM", "s SS"]), "12 minutes and 43 seconds");
    /// ```
    pub fn format<T: Template + ?Sized>(&self, template: &T) -> String {
        template.render(self)
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::{DurationFormat, Field, NumArguments};
    pub(crate) use super::Field::*;
    pub(crate) use units::Unit::*;
    pub(crate) use duration::Duration;

    mod parse {
        use super::*;

        macro_rules! test {
            ($name: ident: $input: expr => $result: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(DurationFormat::parse($input).fields, $result)
                }
            };
        }

        test!(empty_string: ""                  => Vec::<Field>::new());
        test!(entirely_literal: "Lap!"          => vec![ Literal("Lap!") ]);
        test!(single_number: "d"                => vec![ Number(Day, NumArguments::unpadded()) ]);
        test!(padded_number: "hh"               => vec![ Number(Hour, NumArguments::padded(2)) ]);
        test!(milliseconds: "iii"               => vec![ Number(Millisecond, NumArguments::padded(3)) ]);
        test!(surrounded: "(m)"                 => vec![ Literal("("), Number(Minute, NumArguments::unpadded()), Literal(")") ]);
        test!(abbreviation: "sS"                => vec![ Number(Second, NumArguments::unpadded()), Abbreviation(Second) ]);
        test!(label: "DD"                       => vec![ Label(Day) ]);
        test!(greedy: "ddd"                     => vec![ Number(Day, NumArguments::padded(2)), Number(Day, NumArguments::unpadded()) ]);
        test!(four_is: "iiii"                   => vec![ Number(Millisecond, NumArguments::padded(3)), Number(Millisecond, NumArguments::unpadded()) ]);
        test!(two_is: "a ii b"                  => vec![ Literal("a "), Literal(" b") ]);
        test!(a_bunch_of_elements: "mm:ss.iii"  => vec![ Number(Minute, NumArguments::padded(2)), Literal(":"), Number(Second, NumArguments::padded(2)), Literal("."), Number(Millisecond, NumArguments::padded(3)) ]);

        mod escapes {
            use super::*;

            test!(escaped_code: "[MM]"          => vec![ Literal("MM") ]);
            test!(empty_escape: "[]"            => Vec::<Field>::new());
            test!(between_codes: "m[m]m"        => vec![ Number(Minute, NumArguments::unpadded()), Literal("m"), Number(Minute, NumArguments::unpadded()) ]);
            test!(unclosed: "[ss"               => vec![ Literal("["), Number(Second, NumArguments::padded(2)) ]);
            test!(last_close_wins: "[a]b] s"    => vec![ Literal("a]b"), Literal(" "), Number(Second, NumArguments::unpadded()) ]);
            test!(stops_at_next_open: "[a][b]"  => vec![ Literal("a"), Literal("b") ]);
            test!(reopened: "[a[b]"             => vec![ Literal("[a"), Literal("b") ]);
        }
    }

    mod render {
        use super::*;

        macro_rules! test {
            ($name: ident: $duration: expr, $input: expr => $result: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(DurationFormat::parse($input).format(&$duration), $result)
                }
            };
        }

        test!(pad_minimum: Duration::zero().days(100), "dd"       => "100");
        test!(negative_pad: Duration::zero().seconds(-5), "ss"    => "-05");
        test!(unknown_run: Duration::zero().milliseconds(7), "ii" => "");
        test!(multibyte: Duration::zero().minutes(2), "m′ → M"    => "2′ → m");
        test!(ms_label: Duration::zero().milliseconds(1), "i II"  => "1 millisecond");
        test!(ms_abbr: Duration::zero().milliseconds(40), "iI"    => "40ms");
    }

    mod leading_unit {
        use super::*;

        #[test]
        fn first_number() {
            assert_eq!(DurationFormat::parse("DD: h, m").leading_unit(), Some(Hour));
        }

        #[test]
        fn no_numbers() {
            assert_eq!(DurationFormat::parse("[h] HH").leading_unit(), None);
        }
    }
}
