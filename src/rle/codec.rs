use super::tokens::{RunToken, Runs};
use crate::error::{Error, Result};
use crate::Codec;

/// Run-length codec: each maximal run becomes a `(value, count)` byte pair
#[derive(Clone, Copy, Debug, Default)]
pub struct RunLengthCodec;

impl RunLengthCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for RunLengthCodec {
    fn encode(&self, input: &[u8]) -> Vec<u8> {
        // Worst case: no byte repeats
        let mut out = Vec::with_capacity(input.len() * 2);
        for run in Runs::new(input) {
            run.write_to(&mut out);
        }
        out
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.len() % 2 != 0 {
            return Err(Error::MalformedInput {
                position: input.len() - 1,
                reason: "run-length stream has odd length",
            });
        }

        let mut out = Vec::with_capacity(input.len());
        for (i, pair) in input.chunks_exact(2).enumerate() {
            let token = RunToken::new(pair[0], pair[1]);
            if token.count == 0 {
                return Err(Error::MalformedInput {
                    position: i * 2 + 1,
                    reason: "zero-length run",
                });
            }
            token.expand_into(&mut out);
        }

        Ok(out)
    }
}
