extern crate timespan;
pub use timespan::{Duration, SentenceOptions};

const UNITS: [&str; 4] = [ "d DD", "h HH", "m MM", "s SS" ];


#[test]
fn hours_minutes_seconds() {
    let d = Duration::zero().seconds(23).minutes(21).hours(2);
    assert_eq!(d.format(&UNITS), "2 hours, 21 minutes and 23 seconds")
}

#[test]
fn days_hours_minutes_seconds() {
    let d = Duration::zero().seconds(23).minutes(21).hours(2).days(18);
    assert_eq!(d.format(&UNITS), "18 days, 2 hours, 21 minutes and 23 seconds")
}

#[test]
fn zero_hours() {
    let d = Duration::zero().days(18).minutes(21).seconds(23);
    assert_eq!(d.format(&UNITS), "18 days, 21 minutes and 23 seconds")
}

#[test]
fn a_bunch_of_zeroes() {
    let d = Duration::zero().seconds(23).minutes(0).hours(0).days(18);
    assert_eq!(d.format(&UNITS), "18 days and 23 seconds")
}

#[test]
fn one_value() {
    assert_eq!(Duration::zero().minutes(12).format(&UNITS), "12 minutes")
}

#[test]
fn one_template() {
    let d = Duration::zero().minutes(12).hours(20);
    assert_eq!(d.format(&["h HH"]), "20 hours")
}

#[test]
fn vec_of_strings() {
    let templates = vec![ String::from("m MM"), String::from("s SS") ];
    assert_eq!(Duration::from_seconds(61).format(&templates), "1 minute and 1 second")
}

#[test]
fn from_millis() {
    let d = Duration::from_millis(24 * 3600 * 1000 + 14 * 3600 * 1000 + 3 * 60 * 1000 + 12 * 1000);
    assert_eq!(d.format(&UNITS), "1 day, 14 hours, 3 minutes and 12 seconds")
}

#[test]
fn keeping_zeroes() {
    let options = SentenceOptions { ignore_zero: false };
    assert_eq!(Duration::zero().hours(1).format_sentence_with(&["h HH", "m MM"], options), "1 hour and 0 minutes")
}
