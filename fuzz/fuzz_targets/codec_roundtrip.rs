#![no_main]

use codec::{Presentation, compare, format, round, strip};
use libfuzzer_sys::fuzz_target;
use policy::{FormatOptions, FormatPolicy};
use std::cmp::Ordering;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(raw) = codec::canonicalize(text) else {
        return;
    };
    for options in [FormatOptions::dollar(), FormatOptions::euro(), FormatOptions::integer()] {
        let Ok(policy) = FormatPolicy::resolve(&options) else {
            continue;
        };
        let precision = &policy.precision;
        let rounded = round(&raw, precision.focused_places(), precision.rounding, false);
        let display = format(&rounded, &policy, Presentation::Focused);
        let back = strip(&display, &policy).raw;
        assert_eq!(
            compare(&back, &rounded).ok(),
            Some(Ordering::Equal),
            "{raw:?} rounded to {rounded:?} showed as {display:?} and stripped to {back:?}"
        );
    }
});
