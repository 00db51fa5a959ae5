//! Synthetic image bodies and chunk sources for tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use bytes::Bytes;

use super::prefix_reader::ChunkSource;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// PNG with a valid IHDR, zero-padded to `total_len` bytes.
pub fn png(width: u32, height: u32, total_len: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(total_len);
    data.extend_from_slice(&PNG_SIGNATURE);
    data.extend_from_slice(&13_u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[8, 6, 0, 0, 0]);
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.resize(total_len.max(data.len()), 0);
    data
}

/// Baseline JPEG with APP0 and SOF0 segments, zero-padded to `total_len` bytes.
pub fn jpeg(width: u16, height: u16, total_len: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(total_len);
    data.extend_from_slice(&[0xFF, 0xD8]);
    data.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
    data.extend_from_slice(b"JFIF\0");
    data.extend_from_slice(&[0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
    data.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
    data.resize(total_len.max(data.len()), 0);
    data
}

/// GIF89a logical screen header, zero-padded to `total_len` bytes.
pub fn gif(width: u16, height: u16, total_len: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(total_len);
    data.extend_from_slice(b"GIF89a");
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&[0xF7, 0x00, 0x00]);
    data.resize(total_len.max(data.len()), 0);
    data
}

/// Chunk source replaying a body in fixed-size pieces and counting pulls.
pub struct ScriptedChunks {
    chunks: VecDeque<Bytes>,
    pulled: usize,
    fail_after: Option<usize>,
}

impl ScriptedChunks {
    /// Splits `body` into `chunk_size` pieces.
    pub fn split(body: &[u8], chunk_size: usize) -> Self {
        Self {
            chunks: body
                .chunks(chunk_size)
                .map(Bytes::copy_from_slice)
                .collect(),
            pulled: 0,
            fail_after: None,
        }
    }

    /// Like [`ScriptedChunks::split`], but the pull after `pulls` chunks fails.
    pub fn failing_after(body: &[u8], chunk_size: usize, pulls: usize) -> Self {
        Self {
            fail_after: Some(pulls),
            ..Self::split(body, chunk_size)
        }
    }

    /// Number of chunks handed out.
    pub const fn pulled(&self) -> usize {
        self.pulled
    }

    /// Number of chunks never requested.
    pub fn remaining(&self) -> usize {
        self.chunks.len()
    }
}

#[async_trait]
impl ChunkSource for ScriptedChunks {
    type Error = String;

    async fn next_chunk(&mut self) -> Result<Option<Bytes>, Self::Error> {
        if self.fail_after == Some(self.pulled) {
            return Err("connection reset by peer".to_string());
        }

        let chunk = self.chunks.pop_front();
        if chunk.is_some() {
            self.pulled += 1;
        }
        Ok(chunk)
    }
}
