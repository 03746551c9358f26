/// Decoder output that doubles as the back-reference history.
///
/// The whole output is kept, so every byte produced so far is addressable;
/// the encoder's window bound only limits which offsets it emits.
pub struct OutputWindow {
    buffer: Vec<u8>,
}

impl OutputWindow {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buffer: Vec::with_capacity(capacity) }
    }

    /// Add a single byte to the output
    #[inline]
    pub fn push_byte(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    /// Copy `length` bytes starting `distance` bytes back from the end.
    ///
    /// distance=1 means the most recently written byte. Length can exceed
    /// distance: bytes are copied one at a time in increasing order, so each
    /// byte written becomes a source for the rest of the same copy.
    ///
    /// Returns `false` and leaves the output untouched if `distance` is zero
    /// or reaches before the start of output.
    #[inline]
    pub fn copy_back(&mut self, distance: usize, length: usize) -> bool {
        if distance == 0 || distance > self.buffer.len() {
            return false;
        }

        let start = self.buffer.len() - distance;
        self.buffer.reserve(length);
        for i in 0..length {
            let byte = self.buffer[start + i];
            self.buffer.push(byte);
        }
        true
    }

    /// Bytes available as back-reference history
    pub fn available(&self) -> usize {
        self.buffer.len()
    }

    /// Give up the decoded output
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}
