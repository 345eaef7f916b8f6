//! Lengths of time, split into units.

use std::time::Duration as StdDuration;

use units::{self, Unit, MS_PER_SECOND};


/// A **duration** is a length of time split into days, hours, minutes,
/// seconds, and milliseconds.
///
/// A duration built from a number of milliseconds always has its units
/// in their natural ranges (0 to 999 milliseconds, 0 to 59 seconds, and
/// so on). One built field by field keeps whatever it was given, so
/// `Duration::zero().minutes(90)` really is ninety minutes, not an hour
/// and a half.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct Duration {
    milliseconds: i64,
    seconds: i64,
    minutes: i64,
    hours: i64,
    days: i64,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Create a new duration from a number of milliseconds, split into
    /// units. Negative counts are treated as their magnitude.
    ///
    /// ### Examples
    ///
    /// ```
    /// use timespan::Duration;
    ///
    /// let lap = Duration::from_millis(91_814);
    /// assert_eq!(lap.to_array(), [814, 31, 1, 0, 0]);
    /// ```
    pub fn from_millis(milliseconds: i64) -> Self {
        Self::from_array(units::decompose(milliseconds))
    }

    /// Create a new duration from a fractional number of milliseconds,
    /// truncating toward zero. `NaN` gives a zero duration, and the
    /// infinities saturate.
    pub fn from_millis_f64(milliseconds: f64) -> Self {
        Self::from_millis(milliseconds as i64)
    }

    /// Create a new duration from a number of seconds, leaving the
    /// milliseconds at zero.
    pub fn from_seconds(seconds: i64) -> Self {
        Self::from_millis(seconds.saturating_mul(MS_PER_SECOND as i64))
    }

    /// Create a new duration from its units, finest first.
    pub fn from_array(pieces: [i64; 5]) -> Self {
        Self {
            milliseconds: pieces[0],
            seconds:      pieces[1],
            minutes:      pieces[2],
            hours:        pieces[3],
            days:         pieces[4],
        }
    }

    /// Create a new duration from however many units are given, finest
    /// first. Units past the end of the slice are zero, and anything
    /// after the fifth value is ignored.
    pub fn from_slice(pieces: &[i64]) -> Self {
        let mut array = [0; 5];
        for (slot, value) in array.iter_mut().zip(pieces) {
            *slot = *value;
        }

        Self::from_array(array)
    }

    /// Create a new duration from a record of units. Units that are
    /// `None` are zero; a unit that is `Some(0)` is zero too.
    pub fn from_fields(fields: DurationFields) -> Self {
        Self {
            milliseconds: fields.milliseconds.unwrap_or(0),
            seconds:      fields.seconds.unwrap_or(0),
            minutes:      fields.minutes.unwrap_or(0),
            hours:        fields.hours.unwrap_or(0),
            days:         fields.days.unwrap_or(0),
        }
    }

    /// Replaces the milliseconds portion, leaving the other units alone.
    pub fn milliseconds(mut self, milliseconds: i64) -> Self {
        self.milliseconds = milliseconds;
        self
    }

    /// Replaces the seconds portion, leaving the other units alone.
    pub fn seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Replaces the minutes portion, leaving the other units alone.
    pub fn minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    /// Replaces the hours portion, leaving the other units alone.
    pub fn hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    /// Replaces the number of whole days, leaving the other units alone.
    pub fn days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    /// Overwrite a single unit in place.
    pub fn set(&mut self, unit: Unit, value: i64) {
        match unit {
            Unit::Millisecond  => self.milliseconds = value,
            Unit::Second       => self.seconds = value,
            Unit::Minute       => self.minutes = value,
            Unit::Hour         => self.hours = value,
            Unit::Day          => self.days = value,
        }
    }

    /// The amount of the given unit in this duration. This is only that
    /// unit’s portion, not the whole length measured in that unit.
    pub fn field(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Millisecond  => self.milliseconds,
            Unit::Second       => self.seconds,
            Unit::Minute       => self.minutes,
            Unit::Hour         => self.hours,
            Unit::Day          => self.days,
        }
    }

    /// The amount of the unit with the given symbol (`d`, `h`, `m`, `s`,
    /// or `i`, in either case).
    ///
    /// ### Examples
    ///
    /// ```
    /// use timespan::Duration;
    ///
    /// let wait = Duration::zero().hours(3);
    /// assert_eq!(wait.get("H"), Ok(3));
    /// assert!(wait.get("y").is_err());
    /// ```
    pub fn get(&self, symbol: &str) -> Result<i64, units::Error> {
        let unit = symbol.parse::<Unit>()?;
        Ok(self.field(unit))
    }

    /// Return the units as a 5-element array, finest first:
    /// milliseconds, seconds, minutes, hours, days.
    pub fn to_array(&self) -> [i64; 5] {
        [ self.milliseconds, self.seconds, self.minutes, self.hours, self.days ]
    }

    /// Return the units as a record with every field present.
    pub fn to_fields(&self) -> DurationFields {
        DurationFields {
            days:          Some(self.days),
            hours:         Some(self.hours),
            minutes:       Some(self.minutes),
            seconds:       Some(self.seconds),
            milliseconds:  Some(self.milliseconds),
        }
    }

    /// The whole length of this duration in milliseconds. This is the
    /// inverse of `from_millis` for non-negative counts.
    pub fn to_millis(&self) -> i64 {
        units::recompose(&self.to_array())
    }

    /// The whole length of this duration in seconds, dropping any
    /// leftover milliseconds.
    pub fn to_seconds(&self) -> i64 {
        self.to_millis() / MS_PER_SECOND as i64
    }

    /// Converts to a standard library duration. Lengths below zero
    /// become zero.
    pub fn to_std(&self) -> StdDuration {
        let millis = self.to_millis();
        if millis <= 0 { StdDuration::from_millis(0) }
                  else { StdDuration::from_millis(millis as u64) }
    }

    /// Whether every unit lies in the range it would have after
    /// splitting a number of milliseconds.
    pub fn is_normalized(&self) -> bool {
        (0 .. 1000).contains(&self.milliseconds)
            && (0 .. 60).contains(&self.seconds)
            && (0 .. 60).contains(&self.minutes)
            && (0 .. 24).contains(&self.hours)
            && self.days >= 0
    }

    /// Carries overflowing units into the next one up, so ninety minutes
    /// becomes an hour and thirty minutes.
    pub fn normalized(&self) -> Self {
        Self::from_millis(self.to_millis())
    }
}

impl From<StdDuration> for Duration {
    fn from(duration: StdDuration) -> Self {
        let millis = duration.as_millis();
        if millis > i64::max_value() as u128 { Self::from_millis(i64::max_value()) }
                                        else { Self::from_millis(millis as i64) }
    }
}


/// A record of a duration’s units, any of which may be missing.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct DurationFields {
    pub days: Option<i64>,
    pub hours: Option<i64>,
    pub minutes: Option<i64>,
    pub seconds: Option<i64>,
    pub milliseconds: Option<i64>,
}

impl From<DurationFields> for Duration {
    fn from(fields: DurationFields) -> Self {
        Self::from_fields(fields)
    }
}
