#![no_main]

use libfuzzer_sys::fuzz_target;
use luthier_theory::Pitch;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(pitch) = serde_json::from_str::<Pitch>(text) {
            // A parsed pitch must re-serialize losslessly.
            let json = serde_json::to_string(&pitch).unwrap();
            let back: Pitch = serde_json::from_str(&json).unwrap();
            assert_eq!(back, pitch);
        }
    }
});
