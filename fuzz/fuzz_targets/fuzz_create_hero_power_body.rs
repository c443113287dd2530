//! Fuzz target: JSON deserialization of `CreateHeroPowerBody`.
//!
//! Verifies that arbitrary byte sequences fed to the JSON parser
//! never cause panics, UB, or unbounded resource consumption.

#![no_main]

use libfuzzer_sys::fuzz_target;

use roster_gateway::routes::CreateHeroPowerBody;

fuzz_target!(|data: &[u8]| {
    // Errors are expected and fine; only panics count.
    let _ = serde_json::from_slice::<CreateHeroPowerBody>(data);
});
