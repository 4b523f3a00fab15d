//! Print the picker option tables for every unit and interval kind.

use cronstate::{capitalize_first, options_for, IntervalKind, TimeUnit};

fn main() {
    for unit in TimeUnit::ALL {
        println!("{}", capitalize_first(unit.label()));
        for kind in IntervalKind::ALL {
            let options = options_for(unit, kind);
            let (first, last) = (&options[0], &options[options.len() - 1]);
            println!(
                "  {:<8} {} options: {} .. {}",
                kind.label(),
                options.len(),
                first.label,
                last.label
            );
        }
    }
}
