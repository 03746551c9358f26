//! Brute-force longest-match search over a bounded history window.
//!
//! The search is a pure function of the buffer: no hash chains, no cached
//! state between positions. Per position it costs
//! O(window_size * max_match_length), which is fine for windows of a few
//! hundred bytes. An indexed finder would have to reproduce the exact same
//! results, including the tie-break below.

/// Result of a match search. `offset` is the backward distance from the
/// search position; `(0, 0)` means nothing matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchCandidate {
    pub offset: usize,
    pub length: usize,
}

impl MatchCandidate {
    pub const NONE: MatchCandidate = MatchCandidate { offset: 0, length: 0 };
}

/// Find the longest earlier occurrence of `data[position..]`.
///
/// Candidates start in `[position - window_size, position)` (clamped at 0)
/// and are scanned in increasing order. A candidate replaces the current
/// best when its length is greater than *or equal to* the best, so among
/// equally long matches the closest one (smallest offset) wins.
///
/// The match may run past `position` into the lookahead, which lets the
/// decoder reproduce it with a self-overlapping copy. Length is capped at
/// `max_match_length` and at the end of the buffer.
pub fn find_longest_match(
    data: &[u8],
    position: usize,
    window_size: usize,
    max_match_length: usize,
) -> MatchCandidate {
    if position >= data.len() {
        return MatchCandidate::NONE;
    }

    let lookahead = &data[position..];
    let limit = max_match_length.min(lookahead.len());
    let window_start = position.saturating_sub(window_size);

    let mut best = MatchCandidate::NONE;
    for start in window_start..position {
        let length = common_prefix_len(&data[start..], lookahead, limit);
        if length > 0 && length >= best.length {
            best = MatchCandidate { offset: position - start, length };
        }
    }

    best
}

/// Length of the common prefix of `a` and `b`, capped at `limit`
#[inline]
fn common_prefix_len(a: &[u8], b: &[u8], limit: usize) -> usize {
    a.iter().zip(b).take(limit).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_history() {
        assert_eq!(find_longest_match(b"ABC", 0, 255, 255), MatchCandidate::NONE);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(find_longest_match(b"ABCD", 3, 255, 255), MatchCandidate::NONE);
    }

    #[test]
    fn test_simple_repeat() {
        let m = find_longest_match(b"ABCABC", 3, 255, 255);
        assert_eq!(m, MatchCandidate { offset: 3, length: 3 });
    }

    #[test]
    fn test_overlapping_run() {
        // One byte of history can describe the whole remaining run
        let m = find_longest_match(&[b'A'; 10], 1, 255, 255);
        assert_eq!(m, MatchCandidate { offset: 1, length: 9 });
    }

    #[test]
    fn test_tie_prefers_smallest_offset() {
        // "XYZ" occurs at 0 and 4; both give length 3 at position 8
        let data = b"XYZ_XYZ_XYZ";
        let m = find_longest_match(data, 8, 255, 255);
        assert_eq!(m, MatchCandidate { offset: 4, length: 3 });
    }

    #[test]
    fn test_longer_match_beats_closer() {
        let data = b"ABCDxABCyABCD";
        let m = find_longest_match(data, 9, 255, 255);
        assert_eq!(m, MatchCandidate { offset: 9, length: 4 });
    }

    #[test]
    fn test_window_bound() {
        let data = b"ABC____ABC";
        assert!(find_longest_match(data, 7, 6, 255).length < 3);
        assert_eq!(find_longest_match(data, 7, 7, 255).length, 3);
    }

    #[test]
    fn test_max_length_cap() {
        let data = vec![0u8; 100];
        assert_eq!(find_longest_match(&data, 1, 255, 10).length, 10);
    }

    #[test]
    fn test_end_of_input_cap() {
        let m = find_longest_match(b"ABCAB", 3, 255, 255);
        assert_eq!(m, MatchCandidate { offset: 3, length: 2 });
    }
}
