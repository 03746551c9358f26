pub mod batch;
pub mod error;
pub mod lz;
pub mod rle;

pub use batch::BatchProcessor;
pub use error::{Error, Result};
pub use lz::{LzToken, SlidingWindowCodec, MAX_MATCH_LENGTH, MIN_MATCH_LENGTH, WINDOW_SIZE};
pub use rle::{RunLengthCodec, RunToken};

/// A paired encode/decode transformation over whole in-memory buffers.
///
/// `decode(&encode(b))` must reproduce `b` for every input. Encoded streams
/// carry no header, so the caller has to remember which codec produced them.
pub trait Codec: Send + Sync {
    /// Encode a buffer. Encoding has no failure mode.
    fn encode(&self, input: &[u8]) -> Vec<u8>;

    /// Decode a buffer produced by [`Codec::encode`].
    ///
    /// Any error aborts the whole decode; no partial output is returned.
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Codec selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CodecKind {
    /// Run-length pairs of (value, count)
    RunLength,
    /// Bounded sliding-window literal/match tokens
    #[default]
    SlidingWindow,
}

impl CodecKind {
    /// Short name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::RunLength => "rle",
            Self::SlidingWindow => "lz",
        }
    }

    /// Parse a short name, as produced by [`CodecKind::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rle" | "run-length" => Some(Self::RunLength),
            "lz" | "lz77" | "sliding-window" => Some(Self::SlidingWindow),
            _ => None,
        }
    }
}

/// Configuration for building a codec
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// Which codec to use
    pub kind: CodecKind,
    /// History window for the sliding-window codec (default: 255)
    pub window_size: u8,
    /// Longest match the sliding-window codec will emit (default: 255)
    pub max_match_length: u8,
}

impl CodecConfig {
    pub fn new(kind: CodecKind) -> Self {
        Self { kind, ..Default::default() }
    }

    /// Build the configured codec
    pub fn build(&self) -> Box<dyn Codec> {
        match self.kind {
            CodecKind::RunLength => Box::new(RunLengthCodec::new()),
            CodecKind::SlidingWindow => {
                Box::new(SlidingWindowCodec::new(self.window_size, self.max_match_length))
            }
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            kind: CodecKind::SlidingWindow,
            window_size: WINDOW_SIZE,
            max_match_length: MAX_MATCH_LENGTH,
        }
    }
}

/// Statistics from a single encode or decode
#[derive(Clone, Debug, Default)]
pub struct CodecStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
}

impl CodecStats {
    pub fn new(input_bytes: usize, output_bytes: usize) -> Self {
        Self { input_bytes: input_bytes as u64, output_bytes: output_bytes as u64 }
    }

    /// Output size as a fraction of input size (0.0 for empty input)
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}
