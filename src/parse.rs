//! Reading a duration back out of a string that was formatted with a
//! known template.

use std::error::Error as ErrorTrait;
use std::fmt;

use duration::Duration;
use format::{DurationFormat, Field};


impl<'a> DurationFormat<'a> {

    /// Reads a duration out of text rendered through this template.
    ///
    /// Literal text and unit labels have to appear exactly where the
    /// template puts them. Numbers are runs of ASCII digits at least as
    /// long as the code’s padding; a number followed directly by another
    /// number takes only that minimum, so `hhmm` reads `0130` as one hour
    /// and thirty minutes. The values go straight into the duration
    /// without being carried into bigger units.
    pub fn parse_duration(&self, text: &str) -> Result<Duration, Error> {
        let mismatch = || {
            trace!("{:?} does not match template {:?}", text, self.source());
            Error::FormatMismatch { text: text.to_owned(), template: self.source().to_owned() }
        };

        let mut duration = Duration::zero();
        let mut rest = text;

        for (index, field) in self.fields.iter().enumerate() {
            rest = match *field {
                Field::Literal(s)          => rest.strip_prefix(s).ok_or_else(&mismatch)?,
                Field::Abbreviation(unit)  => rest.strip_prefix(unit.abbreviation()).ok_or_else(&mismatch)?,
                Field::Label(unit)         => rest.strip_prefix(unit.plural())
                                                  .or_else(|| rest.strip_prefix(unit.singular()))
                                                  .ok_or_else(&mismatch)?,
                Field::Number(unit, args)  => {
                    let minimum = args.width.unwrap_or(1);
                    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
                    if digits < minimum {
                        return Err(mismatch());
                    }

                    let length = match self.fields.get(index + 1) {
                        Some(&Field::Number(..)) => minimum,
                        _                        => digits,
                    };

                    let value = rest[.. length].parse::<i64>().map_err(|_| mismatch())?;
                    duration.set(unit, value);
                    &rest[length ..]
                },
            };
        }

        if rest.is_empty() {
            Ok(duration)
        }
        else {
            Err(mismatch())
        }
    }
}

impl Duration {

    /// Reads a duration out of text that was formatted with the given
    /// template.
    ///
    /// ### Examples
    ///
    /// ```
    /// use timespan::Duration;
    ///
    /// let lap = Duration::parse("1:29.659", "m:ss.iii").unwrap();
    /// assert_eq!(lap.to_millis(), 89_659);
    ///
    /// assert!(Duration::parse("–", "m:ss.iii").is_err());
    /// ```
    pub fn parse(text: &str, template: &str) -> Result<Duration, Error> {
        DurationFormat::parse(template).parse_duration(text)
    }
}


#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Error {
    FormatMismatch { text: String, template: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::FormatMismatch { ref text, ref template } => write!(f, "Invalid format: {} does not match {}", text, template),
        }
    }
}

impl ErrorTrait for Error {
}
