extern crate timespan;
#[macro_use] extern crate proptest;

use proptest::prelude::*;
use timespan::{Duration, Unit};


proptest! {
    #[test]
    fn millis_round_trip(n in 0_i64 .. i64::max_value()) {
        prop_assert_eq!(Duration::from_millis(n).to_millis(), n);
    }

    #[test]
    fn decomposition_is_normalized(n in any::<i64>()) {
        let d = Duration::from_millis(n);
        prop_assert!(d.is_normalized());

        let [ms, s, m, h, days] = d.to_array();
        prop_assert!(ms >= 0 && ms <= 999);
        prop_assert!(s >= 0 && s <= 59);
        prop_assert!(m >= 0 && m <= 59);
        prop_assert!(h >= 0 && h <= 23);
        prop_assert!(days >= 0);
    }

    #[test]
    fn sign_is_dropped(n in (i64::min_value() + 1) .. 0) {
        prop_assert_eq!(Duration::from_millis(n), Duration::from_millis(-n));
    }

    #[test]
    fn singular_only_for_one(value in any::<i64>()) {
        let rendered = Duration::zero().hours(value).format("HH");
        prop_assert_eq!(rendered == "hour", value == 1);
    }

    #[test]
    fn padding_is_a_minimum(value in 0_i64 .. 100_000) {
        let rendered = Duration::zero().milliseconds(value).format("iii");
        prop_assert_eq!(rendered.len(), ::std::cmp::max(3, value.to_string().len()));
        prop_assert_eq!(rendered.parse::<i64>().ok(), Some(value));
    }

    #[test]
    fn every_unit_reads_back(value in 0_i64 .. 1_000_000, unit_index in 0_usize .. 5) {
        let unit = Unit::all()[unit_index];
        let mut d = Duration::zero();
        d.set(unit, value);
        prop_assert_eq!(d.field(unit), value);
        prop_assert_eq!(d.get(&unit.symbol().to_string()), Ok(value));
    }
}
