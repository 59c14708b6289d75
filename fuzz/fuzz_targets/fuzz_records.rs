#![no_main]
use benchtable::aggregate::{Aggregation, MissingPolicy};
use benchtable::input::parse_records;
use benchtable::report::{ReportConfig, render};
use libfuzzer_sys::fuzz_target;

// Feed arbitrary bytes through record decoding, aggregation, and report
// rendering. Errors are fine; panics are bugs.
fuzz_target!(|data: &[u8]| {
    let Ok(records) = parse_records(data, "fuzz") else {
        return;
    };
    let Ok(agg) = Aggregation::from_records(&records) else {
        return;
    };
    for missing in [MissingPolicy::Error, MissingPolicy::Blank] {
        let config = ReportConfig {
            missing,
            ..ReportConfig::default()
        };
        let _ = render(&agg, &config);
    }
});
