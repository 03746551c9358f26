use super::matcher::find_longest_match;
use super::tokens::{LzToken, MIN_MATCH_LENGTH};
use super::window::OutputWindow;
use crate::error::{Error, Result};
use crate::Codec;

/// Default history window; also the largest offset a token can carry
pub const WINDOW_SIZE: u8 = 255;

/// Default (and largest) match length a token can carry
pub const MAX_MATCH_LENGTH: u8 = 255;

/// Sliding-window codec emitting literal and back-reference tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlidingWindowCodec {
    window_size: u8,
    max_match_length: u8,
}

impl SlidingWindowCodec {
    /// Create a codec with an explicit window and match cap.
    ///
    /// A zero window or a cap below [`MIN_MATCH_LENGTH`] is accepted and
    /// simply produces literal-only output.
    pub fn new(window_size: u8, max_match_length: u8) -> Self {
        Self { window_size, max_match_length }
    }

    /// Tokenize `input` without serializing it
    pub fn tokens<'a>(&self, input: &'a [u8]) -> Tokens<'a> {
        Tokens { codec: *self, data: input, pos: 0 }
    }
}

impl Default for SlidingWindowCodec {
    fn default() -> Self {
        Self::new(WINDOW_SIZE, MAX_MATCH_LENGTH)
    }
}

impl Codec for SlidingWindowCodec {
    fn encode(&self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len() + input.len() / 2);
        for token in self.tokens(input) {
            token.write_to(&mut out);
        }
        out
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut window = OutputWindow::with_capacity(input.len() * 2);
        let mut pos = 0;

        while pos < input.len() {
            let token = LzToken::parse(input, pos)?;
            match token {
                LzToken::Literal(byte) => window.push_byte(byte),
                LzToken::Match { offset, length } => {
                    if !window.copy_back(offset as usize, length as usize) {
                        return Err(Error::InvalidOffset {
                            position: pos,
                            offset: offset as usize,
                            available: window.available(),
                        });
                    }
                }
            }
            pos += token.encoded_size();
        }

        Ok(window.into_inner())
    }
}

/// Iterator producing the token stream for a buffer, left to right
pub struct Tokens<'a> {
    codec: SlidingWindowCodec,
    data: &'a [u8],
    pos: usize,
}

impl Iterator for Tokens<'_> {
    type Item = LzToken;

    fn next(&mut self) -> Option<LzToken> {
        let &byte = self.data.get(self.pos)?;

        let candidate = find_longest_match(
            self.data,
            self.pos,
            self.codec.window_size as usize,
            self.codec.max_match_length as usize,
        );

        // Shorter matches cost more than the literals they replace
        if candidate.length >= MIN_MATCH_LENGTH as usize && candidate.offset <= u8::MAX as usize {
            self.pos += candidate.length;
            Some(LzToken::Match { offset: candidate.offset as u8, length: candidate.length as u8 })
        } else {
            self.pos += 1;
            Some(LzToken::Literal(byte))
        }
    }
}
