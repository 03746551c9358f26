//! Property-based round-trip tests for both codecs.

use proptest::prelude::*;
use tinypack::lz::{find_longest_match, MatchCandidate};
use tinypack::{Codec, LzToken, RunLengthCodec, SlidingWindowCodec, MIN_MATCH_LENGTH};

/// Small alphabets produce plenty of matches and runs
fn low_entropy_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..2048)
}

proptest! {
    #[test]
    fn rle_roundtrip(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let codec = RunLengthCodec::new();
        prop_assert_eq!(codec.decode(&codec.encode(&data))?, data);
    }

    #[test]
    fn rle_roundtrip_low_entropy(data in low_entropy_bytes()) {
        let codec = RunLengthCodec::new();
        let encoded = codec.encode(&data);

        // Adjacent runs never share a value unless the first is full
        for pair in encoded.chunks(2).collect::<Vec<_>>().windows(2) {
            prop_assert!(pair[0][0] != pair[1][0] || pair[0][1] == 255);
        }
        prop_assert_eq!(codec.decode(&encoded)?, data);
    }

    #[test]
    fn lz_roundtrip(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let codec = SlidingWindowCodec::default();
        prop_assert_eq!(codec.decode(&codec.encode(&data))?, data);
    }

    #[test]
    fn lz_roundtrip_any_config(
        data in low_entropy_bytes(),
        window in any::<u8>(),
        max_match in any::<u8>(),
    ) {
        let codec = SlidingWindowCodec::new(window, max_match);
        let encoded = codec.encode(&data);
        prop_assert_eq!(codec.decode(&encoded)?, data);
    }

    #[test]
    fn lz_tokens_cover_input(data in low_entropy_bytes()) {
        let codec = SlidingWindowCodec::default();
        let mut produced = 0usize;
        for token in codec.tokens(&data) {
            if let LzToken::Match { offset, length } = token {
                prop_assert!(offset as usize <= produced);
                prop_assert!(length >= MIN_MATCH_LENGTH);
            }
            produced += token.uncompressed_size();
        }
        prop_assert_eq!(produced, data.len());
    }

    #[test]
    fn matcher_result_is_a_real_match(
        data in low_entropy_bytes(),
        pos_seed in any::<usize>(),
        window in 1usize..300,
    ) {
        prop_assume!(!data.is_empty());
        let position = pos_seed % data.len();
        let m = find_longest_match(&data, position, window, 255);

        if m != MatchCandidate::NONE {
            prop_assert!(m.offset >= 1 && m.offset <= window.min(position));
            let start = position - m.offset;
            for i in 0..m.length {
                prop_assert_eq!(data[start + i], data[position + i]);
            }
        }
    }

    #[test]
    fn decoders_never_panic(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = RunLengthCodec::new().decode(&data);
        let _ = SlidingWindowCodec::default().decode(&data);
    }
}
