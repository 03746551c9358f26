pub mod codec;
pub mod tokens;

pub use codec::RunLengthCodec;
pub use tokens::{RunToken, Runs, MAX_RUN_LENGTH};
