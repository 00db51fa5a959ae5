//! Bounded reading of a response body prefix.
//!
//! A body is pulled chunk by chunk until either the accumulated length
//! reaches the threshold or the body ends. Both outcomes are successful
//! terminations; only errors raised by the source itself are failures.

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};

/// Incremental source of body chunks.
#[async_trait]
pub trait ChunkSource: Send {
    /// Transport error raised while reading.
    type Error: std::fmt::Display + Send;

    /// Returns the next chunk, or `None` once the body is complete.
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, Self::Error>;
}

#[async_trait]
impl ChunkSource for reqwest::Response {
    type Error = reqwest::Error;

    async fn next_chunk(&mut self) -> Result<Option<Bytes>, Self::Error> {
        self.chunk().await
    }
}

/// How reading of the prefix stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Threshold reached; the rest of the body was never requested.
    ThresholdReached,
    /// The body ended before the threshold.
    EndOfStream,
}

/// Received chunks of one in-flight download, in arrival order.
#[derive(Debug, Default)]
pub struct ByteAccumulator {
    chunks: Vec<Bytes>,
    len: usize,
}

impl ByteAccumulator {
    /// Appends a chunk.
    pub fn push(&mut self, chunk: Bytes) {
        self.len += chunk.len();
        self.chunks.push(chunk);
    }

    /// Total bytes received.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing was received.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Concatenates all chunks into one buffer.
    #[must_use]
    pub fn into_bytes(mut self) -> Bytes {
        if self.chunks.len() == 1 {
            return self.chunks.pop().unwrap_or_default();
        }

        let mut buffer = BytesMut::with_capacity(self.len);
        for chunk in self.chunks {
            buffer.extend_from_slice(&chunk);
        }
        buffer.freeze()
    }
}

/// Leading bytes of a body together with the reason reading stopped.
#[derive(Debug)]
pub struct BodyPrefix {
    /// Concatenated bytes received. May exceed the threshold by up to one chunk.
    pub bytes: Bytes,
    /// Why reading stopped.
    pub termination: Termination,
}

/// Reads chunks from `source` until `threshold` bytes have arrived or the body ends.
///
/// No chunk is requested after the one that brings the total to the threshold.
///
/// # Errors
/// Returns the source error if a chunk read fails.
pub async fn read_prefix<S>(source: &mut S, threshold: usize) -> Result<BodyPrefix, S::Error>
where
    S: ChunkSource + ?Sized,
{
    let mut accumulator = ByteAccumulator::default();

    while let Some(chunk) = source.next_chunk().await? {
        accumulator.push(chunk);

        if accumulator.len() >= threshold {
            return Ok(BodyPrefix {
                bytes: accumulator.into_bytes(),
                termination: Termination::ThresholdReached,
            });
        }
    }

    Ok(BodyPrefix {
        bytes: accumulator.into_bytes(),
        termination: Termination::EndOfStream,
    })
}
