#![no_main]

use libfuzzer_sys::fuzz_target;
use tinypack::{Codec, RunLengthCodec, SlidingWindowCodec};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the decoders, only return errors
    let _ = RunLengthCodec::new().decode(data);

    if let Ok(decoded) = SlidingWindowCodec::default().decode(data) {
        // Each token yields at most 255 bytes per 2 input bytes
        assert!(decoded.len() <= data.len() / 2 * 255);
    }
});
