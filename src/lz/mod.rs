pub mod codec;
pub mod matcher;
pub mod tokens;
pub mod window;

pub use codec::{SlidingWindowCodec, Tokens, MAX_MATCH_LENGTH, WINDOW_SIZE};
pub use matcher::{find_longest_match, MatchCandidate};
pub use tokens::{LzToken, LITERAL_FLAG, MATCH_FLAG, MIN_MATCH_LENGTH};
pub use window::OutputWindow;
