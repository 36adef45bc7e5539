//! Streaming SHA-256 (FIPS 180-4).
//!
//! [`Sha256`] accepts input in chunks of any size and produces a
//! [`Digest`] on request without ending the stream. [`sha256`] and
//! [`sha256_hex`] cover the one-shot case.
//!
//! ```
//! use sha256_stream::Sha256;
//!
//! let mut hasher = Sha256::new();
//! hasher.process(b"ab");
//! hasher.process(b"c");
//! assert_eq!(
//!     hasher.digest().to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

mod compress;
pub mod digest;
pub mod error;
pub mod hash;
pub mod hasher;

pub use compress::BLOCK_LEN;
pub use digest::{Digest, DIGEST_LEN};
pub use error::DigestParseError;
pub use hash::{sha256, sha256_hex};
pub use hasher::Sha256;
