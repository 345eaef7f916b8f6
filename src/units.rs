//! The fixed unit sizes a duration is split into.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::FromStr;


/// Number of milliseconds in a day.
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Number of milliseconds in an hour.
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Number of milliseconds in a minute.
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;

/// Number of milliseconds in a second.
pub const MS_PER_SECOND: u64 = 1000;


/// One of the five units a duration is made out of.
///
/// The discriminants are the positions of each unit in a duration’s
/// array form, which runs from the finest unit to the coarsest.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Unit {
    Millisecond = 0,
    Second      = 1,
    Minute      = 2,
    Hour        = 3,
    Day         = 4,
}

use self::Unit::*;

/// Units with a tabled size, largest first. Milliseconds are the
/// leftover after the last division.
pub(crate) static TABLE: [Unit; 4] = [ Day, Hour, Minute, Second ];

impl Unit {

    /// Every unit, finest first, in the same order as `Duration::to_array`.
    pub fn all() -> [Unit; 5] {
        [ Millisecond, Second, Minute, Hour, Day ]
    }

    /// How many milliseconds one of this unit lasts.
    pub fn millis(self) -> u64 {
        match self {
            Day          => MS_PER_DAY,
            Hour         => MS_PER_HOUR,
            Minute       => MS_PER_MINUTE,
            Second       => MS_PER_SECOND,
            Millisecond  => 1,
        }
    }

    /// The one-letter symbol used for this unit in format templates and
    /// by `Duration::get`. Milliseconds use `i`, as `m` is taken.
    pub fn symbol(self) -> char {
        match self {
            Day          => 'd',
            Hour         => 'h',
            Minute       => 'm',
            Second       => 's',
            Millisecond  => 'i',
        }
    }

    /// The short label rendered by the single upper-case format code.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Day          => "d",
            Hour         => "h",
            Minute       => "m",
            Second       => "s",
            Millisecond  => "ms",
        }
    }

    /// The long label for exactly one of this unit.
    pub fn singular(self) -> &'static str {
        match self {
            Day          => "day",
            Hour         => "hour",
            Minute       => "minute",
            Second       => "second",
            Millisecond  => "millisecond",
        }
    }

    /// The long label for any amount of this unit other than one.
    pub fn plural(self) -> &'static str {
        match self {
            Day          => "days",
            Hour         => "hours",
            Minute       => "minutes",
            Second       => "seconds",
            Millisecond  => "milliseconds",
        }
    }

    /// The long label for the given amount of this unit: singular for
    /// exactly one, plural for everything else, zero included.
    pub fn label(self, amount: i64) -> &'static str {
        if amount == 1 { self.singular() } else { self.plural() }
    }

    /// The unit a template letter refers to, ignoring case.
    pub fn from_symbol(symbol: char) -> Option<Unit> {
        match symbol.to_ascii_lowercase() {
            'd' => Some(Day),
            'h' => Some(Hour),
            'm' => Some(Minute),
            's' => Some(Second),
            'i' => Some(Millisecond),
            _   => None,
        }
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut chars = input.chars();

        let unit = match (chars.next(), chars.next()) {
            (Some(c), None) => Unit::from_symbol(c),
            _ => None,
        };

        unit.ok_or_else(|| {
            debug!("rejected unit symbol {:?}", input);
            Error::InvalidUnitSymbol(input.to_owned())
        })
    }
}


/// Splits a number of milliseconds into whole days, hours, minutes,
/// seconds, and leftover milliseconds, returned finest first.
///
/// The sign is dropped: a negative count gives the same pieces as its
/// magnitude. Countdown displays rely on this.
pub fn decompose(total_ms: i64) -> [i64; 5] {
    let mut pieces = [0; 5];
    let mut remainder = total_ms.unsigned_abs();

    for unit in TABLE.iter() {
        pieces[*unit as usize] = (remainder / unit.millis()) as i64;
        remainder %= unit.millis();
    }

    pieces[Millisecond as usize] = remainder as i64;
    pieces
}

/// Joins unit pieces, finest first, back into a number of milliseconds.
/// Saturates at the bounds of `i64` rather than overflowing.
pub fn recompose(pieces: &[i64; 5]) -> i64 {
    Unit::all().iter().fold(0_i64, |total, unit| {
        let amount = pieces[*unit as usize].saturating_mul(unit.millis() as i64);
        total.saturating_add(amount)
    })
}


#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Error {
    InvalidUnitSymbol(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidUnitSymbol(ref symbol) => write!(f, "invalid format: {:?} is not a unit symbol", symbol),
        }
    }
}

impl ErrorTrait for Error {
}
