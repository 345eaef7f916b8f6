extern crate timespan;
use timespan::{Duration, DurationFormat};

use std::env;

fn main() {
    let clock = DurationFormat::parse("d[d] hh:mm:ss.iii");
    let sentence = [ "d DD", "h HH", "m MM", "s SS" ];

    for arg in env::args().skip(1) {
        let millis = match arg.parse::<i64>() {
            Ok(ms) => ms,
            Err(e) => { println!("{}: {}", arg, e); continue },
        };

        let remaining = Duration::from_millis(millis);
        println!("{} → {} ({})", arg, clock.format(&remaining), remaining.format(&sentence));
    }
}
