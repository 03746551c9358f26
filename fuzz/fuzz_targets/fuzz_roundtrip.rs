#![no_main]

use libfuzzer_sys::fuzz_target;
use tinypack::{Codec, RunLengthCodec, SlidingWindowCodec};

fuzz_target!(|data: &[u8]| {
    // First two bytes pick the lz window and match cap, the rest is the payload
    let (window, max_match, payload) = match data {
        [w, m, rest @ ..] => (*w, *m, rest),
        _ => return,
    };

    // Limit data size to avoid slowdowns
    let payload = if payload.len() > 16 * 1024 { &payload[..16 * 1024] } else { payload };

    let rle = RunLengthCodec::new();
    assert_eq!(rle.decode(&rle.encode(payload)).unwrap(), payload, "RLE round-trip mismatch");

    let lz = SlidingWindowCodec::new(window, max_match);
    assert_eq!(lz.decode(&lz.encode(payload)).unwrap(), payload, "LZ round-trip mismatch");
});
