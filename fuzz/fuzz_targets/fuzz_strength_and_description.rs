//! Fuzz target: the two fallible core parsers.
//!
//! `Strength` parsing and `Description` construction must reject without
//! panicking for any input, including non-ASCII and embedded NULs.

#![no_main]

use libfuzzer_sys::fuzz_target;

use roster_core::{Description, Strength};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = text.parse::<Strength>();
        let _ = Description::new(text);
    }
});
