use crate::error::{Error, Result};

/// Flag byte introducing a literal token
pub const LITERAL_FLAG: u8 = 0x00;

/// Flag byte introducing a match token
pub const MATCH_FLAG: u8 = 0x01;

/// Shortest match worth a token: a match costs 3 bytes, a literal 2
pub const MIN_MATCH_LENGTH: u8 = 3;

/// Represents a single token in the sliding-window stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LzToken {
    /// A literal byte, serialized as `[0x00, byte]`
    Literal(u8),
    /// A back-reference: copy `length` bytes from `offset` bytes back,
    /// serialized as `[0x01, offset, length]`
    Match { offset: u8, length: u8 },
}

impl LzToken {
    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        match self {
            LzToken::Literal(_) => 1,
            LzToken::Match { length, .. } => *length as usize,
        }
    }

    /// Returns the number of bytes this token occupies in the stream
    pub fn encoded_size(&self) -> usize {
        match self {
            LzToken::Literal(_) => 2,
            LzToken::Match { .. } => 3,
        }
    }

    /// Append the token's wire form to `out`
    #[inline]
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match *self {
            LzToken::Literal(byte) => out.extend_from_slice(&[LITERAL_FLAG, byte]),
            LzToken::Match { offset, length } => {
                out.extend_from_slice(&[MATCH_FLAG, offset, length])
            }
        }
    }

    /// Parse the token starting at `input[pos]`.
    ///
    /// The token occupies [`LzToken::encoded_size`] bytes. Offsets are only
    /// checked for being non-zero here; whether they reach before the start
    /// of output depends on decoder state.
    pub fn parse(input: &[u8], pos: usize) -> Result<LzToken> {
        let &flag = input.get(pos).ok_or(Error::TruncatedInput {
            position: pos,
            needed: 1,
            available: 0,
        })?;
        let rest = &input[pos + 1..];

        match flag {
            LITERAL_FLAG => {
                let &byte = rest.first().ok_or(Error::TruncatedInput {
                    position: pos,
                    needed: 1,
                    available: 0,
                })?;
                Ok(LzToken::Literal(byte))
            }
            MATCH_FLAG => {
                if rest.len() < 2 {
                    return Err(Error::TruncatedInput {
                        position: pos,
                        needed: 2,
                        available: rest.len(),
                    });
                }
                let (offset, length) = (rest[0], rest[1]);
                if offset == 0 {
                    return Err(Error::InvalidToken {
                        position: pos,
                        reason: "match offset is zero".to_string(),
                    });
                }
                if length < MIN_MATCH_LENGTH {
                    return Err(Error::InvalidToken {
                        position: pos,
                        reason: format!(
                            "match length {} below minimum {}",
                            length, MIN_MATCH_LENGTH
                        ),
                    });
                }
                Ok(LzToken::Match { offset, length })
            }
            other => Err(Error::InvalidToken {
                position: pos,
                reason: format!("unknown flag byte 0x{:02x}", other),
            }),
        }
    }
}
