// Streaming SHA-256 hasher
//
// Accumulates input of any size into 64-byte blocks and applies the
// FIPS 180-4 padding when a digest is requested.

use std::fmt;
use std::io;

use crate::compress::{compress, State, BLOCK_LEN, H0};
use crate::digest::{Digest, DIGEST_LEN};

/// Bytes needed after the data in the final block: the 0x80 marker plus
/// the 64-bit length.
const MIN_FOOTER_LEN: usize = 9;

/// Incremental SHA-256 hasher.
///
/// Feed data with [`process`](Self::process) in chunks of any size and read
/// the result with [`digest`](Self::digest). Reading a digest does not end
/// the stream: further `process` calls continue the same message.
///
/// The byte counter is a wrapping `u64`. Message lengths are therefore
/// encoded modulo 2^64 bits, which is exact for messages shorter than
/// 2^61 bytes.
#[derive(Clone)]
pub struct Sha256 {
    state: State,
    buf: [u8; BLOCK_LEN],
    buf_count: usize,
    bytes_processed: u64,
}

impl Sha256 {
    pub fn new() -> Self {
        let mut hasher = Self {
            state: H0,
            buf: [0u8; BLOCK_LEN],
            buf_count: 0,
            bytes_processed: 0,
        };
        hasher.reset();
        hasher
    }

    /// Discards all input and returns to the initial state.
    pub fn reset(&mut self) {
        tracing::trace!(bytes_processed = self.bytes_processed, "sha256 reset");

        self.state = H0;
        self.buf_count = 0;
        self.bytes_processed = 0;
    }

    /// Appends `data` to the message.
    ///
    /// Chunking does not affect the result: any split of the same bytes
    /// across calls hashes identically.
    pub fn process(&mut self, mut data: &[u8]) {
        self.bytes_processed = self.bytes_processed.wrapping_add(data.len() as u64);

        while !data.is_empty() {
            // Whole blocks go straight from the input when nothing is buffered
            if self.buf_count == 0 {
                if let Some((block, rest)) = data.split_first_chunk::<BLOCK_LEN>() {
                    compress(&mut self.state, block);
                    data = rest;
                    continue;
                }
            }

            let take = (BLOCK_LEN - self.buf_count).min(data.len());
            let (head, rest) = data.split_at(take);
            self.buf[self.buf_count..self.buf_count + take].copy_from_slice(head);
            self.buf_count += take;
            data = rest;

            if self.buf_count == BLOCK_LEN {
                compress(&mut self.state, &self.buf);
                self.buf_count = 0;
            }
        }
    }

    /// Builder-style [`process`](Self::process).
    pub fn chain(mut self, data: impl AsRef<[u8]>) -> Self {
        self.process(data.as_ref());
        self
    }

    /// Returns the digest of everything processed since the last reset.
    ///
    /// Padding is applied to a copy, so `self` is left untouched.
    pub fn digest(&self) -> Digest {
        let footer_len = footer_len(self.buf_count);
        let bit_len = self.bytes_processed.wrapping_mul(8);

        tracing::trace!(
            bytes_processed = self.bytes_processed,
            buffered = self.buf_count,
            footer_len,
            "sha256 digest"
        );

        let mut footer = [0u8; 2 * BLOCK_LEN];
        footer[0] = 0x80;
        footer[footer_len - 8..footer_len].copy_from_slice(&bit_len.to_be_bytes());

        let mut tmp = self.clone();
        tmp.process(&footer[..footer_len]);
        debug_assert_eq!(tmp.buf_count, 0);

        let mut out = [0u8; DIGEST_LEN];
        for (bytes, word) in out.chunks_exact_mut(4).zip(tmp.state) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }
        Digest::from_bytes(out)
    }

    /// Total bytes passed to [`process`](Self::process) since the last reset.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }
}

/// Length of the padding footer for a final block holding `buffered` bytes.
fn footer_len(buffered: usize) -> usize {
    let total = if buffered <= BLOCK_LEN - MIN_FOOTER_LEN {
        BLOCK_LEN
    } else {
        2 * BLOCK_LEN
    };
    total - buffered
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256")
            .field("bytes_processed", &self.bytes_processed)
            .field("buffered", &self.buf_count)
            .finish_non_exhaustive()
    }
}

impl io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.process(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
