/// Longest run a single token can describe
pub const MAX_RUN_LENGTH: u8 = 255;

/// A single (value, count) pair in the run-length stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunToken {
    pub value: u8,
    /// Number of repetitions, 1..=255
    pub count: u8,
}

impl RunToken {
    pub fn new(value: u8, count: u8) -> Self {
        Self { value, count }
    }

    /// Append the serialized pair to `out`
    #[inline]
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.push(self.value);
        out.push(self.count);
    }

    /// Expand the run into `out`
    #[inline]
    pub fn expand_into(&self, out: &mut Vec<u8>) {
        out.resize(out.len() + self.count as usize, self.value);
    }
}

/// Iterator over the maximal runs of a buffer, split at [`MAX_RUN_LENGTH`]
pub struct Runs<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Runs<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl Iterator for Runs<'_> {
    type Item = RunToken;

    fn next(&mut self) -> Option<RunToken> {
        let value = *self.data.get(self.pos)?;
        let limit = (self.data.len() - self.pos).min(MAX_RUN_LENGTH as usize);
        let count = self.data[self.pos..self.pos + limit]
            .iter()
            .position(|&b| b != value)
            .unwrap_or(limit);

        self.pos += count;
        Some(RunToken::new(value, count as u8))
    }
}
