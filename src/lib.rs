#![crate_name = "timespan"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Lengths of time split into days, hours, minutes, seconds, and
//! milliseconds, with [Moment.js-style](https://momentjs.com/) templates
//! for turning them into strings.
//!
//! # Examples
//!
//! ```
//! use timespan::Duration;
//!
//! let remaining = Duration::from_millis(91_814);
//! assert_eq!(remaining.format("mm:ss.iii"), "01:31.814");
//!
//! let uptime = Duration::zero().days(18).minutes(21).seconds(23);
//! assert_eq!(uptime.format(&["d DD", "h HH", "m MM", "s SS"]),
//!            "18 days, 21 minutes and 23 seconds");
//! ```

#[macro_use] extern crate log;

#[cfg(feature="format")] extern crate num_traits;
#[cfg(feature="format")] extern crate pad;
#[cfg(feature="serde")] extern crate serde;
#[cfg(all(test, feature="serde"))] extern crate serde_json;

pub mod duration;
pub mod units;
#[cfg(feature="format")] pub mod format;
#[cfg(feature="format")] pub mod sentence;
#[cfg(feature="parse")] pub mod parse;

pub use duration::{Duration, DurationFields};
pub use units::Unit;
pub use units::Error as UnitError;

#[cfg(feature="format")] pub use format::{DurationFormat, Template};
#[cfg(feature="format")] pub use sentence::SentenceOptions;

#[cfg(feature="parse")] pub use parse::Error as ParseError;
