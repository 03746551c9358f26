//! Parallel batch processing of independent buffers.
//!
//! Architecture:
//! - Main thread: send one job per input buffer, collect results
//! - Worker pool: run the configured codec over each buffer
//! - Main thread: reorder results by job id
//!
//! Codecs hold no state across calls, so workers need no coordination
//! beyond the channels.

use std::collections::BTreeMap;

use crossbeam::channel::{bounded, Receiver, Sender};

use crate::error::{Error, Result};
use crate::{Codec, CodecConfig};

/// Which way to run the codec
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Encode,
    Decode,
}

/// A single buffer to process
struct Job<'a> {
    /// Sequence number for ordering output
    id: usize,
    data: &'a [u8],
}

/// Result of processing a single buffer
struct Processed {
    id: usize,
    data: Result<Vec<u8>>,
}

/// Runs one codec over many buffers on a worker pool
pub struct BatchProcessor {
    config: CodecConfig,
    num_threads: usize,
}

impl BatchProcessor {
    /// `num_threads` of 0 means one per CPU
    pub fn new(config: CodecConfig, num_threads: usize) -> Self {
        Self { config, num_threads }
    }

    pub fn effective_threads(&self) -> usize {
        match self.num_threads {
            0 => num_cpus::get().clamp(1, 32),
            n => n.clamp(1, 32),
        }
    }

    /// Encode every buffer, returning outputs in input order.
    ///
    /// Encoding itself cannot fail; an error here means the worker pool broke
    /// down (`Error::Internal`).
    pub fn encode_all(&self, inputs: &[&[u8]]) -> Result<Vec<Vec<u8>>> {
        self.process(inputs, Direction::Encode)
    }

    /// Decode every buffer, returning outputs in input order.
    ///
    /// If several buffers fail, the error for the earliest one is returned.
    pub fn decode_all(&self, inputs: &[&[u8]]) -> Result<Vec<Vec<u8>>> {
        self.process(inputs, Direction::Decode)
    }

    fn process(&self, inputs: &[&[u8]], direction: Direction) -> Result<Vec<Vec<u8>>> {
        let num_threads = self.effective_threads().min(inputs.len().max(1));
        let codec = self.config.build();

        if num_threads == 1 {
            return inputs.iter().map(|data| run(codec.as_ref(), direction, data)).collect();
        }

        self.process_parallel(codec.as_ref(), inputs, direction, num_threads)
    }

    fn process_parallel(
        &self,
        codec: &dyn Codec,
        inputs: &[&[u8]],
        direction: Direction,
        num_threads: usize,
    ) -> Result<Vec<Vec<u8>>> {
        let channel_capacity = num_threads * 4;

        let (job_tx, job_rx): (Sender<Job>, Receiver<Job>) = bounded(channel_capacity);
        let (result_tx, result_rx): (Sender<Processed>, Receiver<Processed>) =
            bounded(channel_capacity);

        // Scoped threads let workers borrow the inputs and the codec
        let result = crossbeam::scope(|scope| {
            for _ in 0..num_threads {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();

                scope.spawn(move |_| {
                    worker_thread(codec, direction, job_rx, result_tx);
                });
            }

            drop(job_rx);
            drop(result_tx);

            dispatch_and_collect(inputs, job_tx, result_rx)
        });

        result.map_err(|_| Error::Internal("Thread panicked".to_string()))?
    }
}

/// Send every job, draining results as needed so bounded channels cannot deadlock
fn dispatch_and_collect<'a>(
    inputs: &[&'a [u8]],
    job_tx: Sender<Job<'a>>,
    result_rx: Receiver<Processed>,
) -> Result<Vec<Vec<u8>>> {
    let mut finished: BTreeMap<usize, Result<Vec<u8>>> = BTreeMap::new();

    for (id, &data) in inputs.iter().enumerate() {
        let mut sent = false;
        while !sent {
            crossbeam::channel::select! {
                send(job_tx, Job { id, data }) -> res => {
                    if res.is_err() {
                        return Err(Error::Internal("Workers disconnected".to_string()));
                    }
                    sent = true;
                }
                recv(result_rx) -> res => {
                    let done = res.map_err(|_| {
                        Error::Internal("Result channel disconnected".to_string())
                    })?;
                    finished.insert(done.id, done.data);
                }
            }
        }
    }

    // Signal workers we're done
    drop(job_tx);

    while finished.len() < inputs.len() {
        match result_rx.recv() {
            Ok(done) => {
                finished.insert(done.id, done.data);
            }
            Err(_) => return Err(Error::Internal("Result channel disconnected".to_string())),
        }
    }

    // BTreeMap iterates in id order, so the first error is the earliest input's
    finished.into_values().collect()
}

/// Worker thread function: processes buffers until the job channel closes
fn worker_thread(
    codec: &dyn Codec,
    direction: Direction,
    job_rx: Receiver<Job>,
    result_tx: Sender<Processed>,
) {
    while let Ok(job) = job_rx.recv() {
        let processed = Processed { id: job.id, data: run(codec, direction, job.data) };

        if result_tx.send(processed).is_err() {
            // Main thread has stopped, exit
            break;
        }
    }
}

fn run(codec: &dyn Codec, direction: Direction, data: &[u8]) -> Result<Vec<u8>> {
    match direction {
        Direction::Encode => Ok(codec.encode(data)),
        Direction::Decode => codec.decode(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodecKind;

    fn sample_inputs() -> Vec<Vec<u8>> {
        (0..20u8)
            .map(|i| {
                let mut data = vec![i; i as usize * 7];
                data.extend_from_slice(b"abcabcabc");
                data
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let inputs = sample_inputs();
        let refs: Vec<&[u8]> = inputs.iter().map(Vec::as_slice).collect();

        for kind in [CodecKind::RunLength, CodecKind::SlidingWindow] {
            let config = CodecConfig::new(kind);
            let parallel = BatchProcessor::new(config.clone(), 4).encode_all(&refs).unwrap();
            let sequential = BatchProcessor::new(config, 1).encode_all(&refs).unwrap();
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn test_decode_reports_first_error() {
        let processor = BatchProcessor::new(CodecConfig::new(CodecKind::RunLength), 3);
        let inputs: Vec<&[u8]> = vec![&[b'a', 1][..], &[b'a'][..], &[b'b', 0][..], &[b'c', 2][..]];
        assert!(matches!(
            processor.decode_all(&inputs),
            Err(Error::MalformedInput { position: 0, .. })
        ));
    }

    #[test]
    fn test_more_jobs_than_channel_capacity() {
        // 2 threads -> capacity 8; force the send/recv interleaving
        let inputs: Vec<Vec<u8>> = (0..200usize).map(|i| b"xyzxyz".repeat(i % 13)).collect();
        let refs: Vec<&[u8]> = inputs.iter().map(Vec::as_slice).collect();

        let processor = BatchProcessor::new(CodecConfig::default(), 2);
        let encoded = processor.encode_all(&refs).unwrap();
        let encoded_refs: Vec<&[u8]> = encoded.iter().map(Vec::as_slice).collect();
        assert_eq!(processor.decode_all(&encoded_refs).unwrap(), inputs);
    }

    #[test]
    fn test_empty_batch() {
        let processor = BatchProcessor::new(CodecConfig::default(), 4);
        assert!(processor.encode_all(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_effective_threads() {
        let auto = BatchProcessor::new(CodecConfig::default(), 0);
        let threads = auto.effective_threads();
        assert!(threads >= 1);
        assert!(threads <= 32);

        let capped = BatchProcessor::new(CodecConfig::default(), 100);
        assert_eq!(capped.effective_threads(), 32); // Capped at 32
    }
}
