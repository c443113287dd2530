//! Fuzz target: JSON deserialization of `UpdatePowerBody`.

#![no_main]

use libfuzzer_sys::fuzz_target;

use roster_gateway::routes::UpdatePowerBody;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<UpdatePowerBody>(data);
});
