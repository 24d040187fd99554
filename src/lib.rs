//! # LZW codec
//!
//! A variable-width LZW compressor/decompressor operating entirely out
//! of a caller-supplied, fixed-size state block — no internal dynamic
//! allocation on the hot path. The dictionary is a flat array of
//! packed integer nodes addressed by index; codes are packed
//! LSB-first into a small bit reservoir.
//!
//! * [`state::State`] is the codec state: create one per compression
//!   direction with [`state::State::new`], then drive it with repeated
//!   calls to [`state::State::compress`] or [`state::State::decompress`].
//! * [`header`] is a thin, optional `.Z`-style file header, used only
//!   by the CLI, not by the core codec.
//!
//! ## Buffer Example
//!
//! ```
//! use lzw_codec::State;
//!
//! let input = b"TOBEORNOTTOBEORTOBEORNOT";
//! let mut encoder = State::new();
//! let mut packed = vec![0u8; input.len() * 2 + 16];
//! let n = encoder.compress(input, &mut packed).expect("compress failed");
//! packed.truncate(n);
//!
//! let mut decoder = State::new();
//! let mut restored = vec![0u8; input.len() + 16];
//! let m = decoder.decompress(&packed, &mut restored).expect("decompress failed");
//! assert_eq!(&restored[..m], input);
//! ```

mod decoder;
mod encoder;
pub mod error;
pub mod header;
mod node;
mod reservoir;
mod state;
mod table;

pub use error::{strerror, CliError, CodecError};
pub use state::State;

/// Minimum code width, in bits.
pub const MIN_WIDTH: u8 = 9;

/// Maximum code width, in bits. 12 by default (matching the classic
/// `compress(1)` table size); 16 under the `width-16` feature.
#[cfg(not(feature = "width-16"))]
pub const MAX_WIDTH: u8 = 12;
#[cfg(feature = "width-16")]
pub const MAX_WIDTH: u8 = 16;

/// Highest code index the dictionary array must hold.
pub const MAX_CODE: usize = 1usize << MAX_WIDTH as usize;

/// Dictionary-reset signal.
pub const CLEAR: u32 = 256;
/// End-of-stream signal.
pub const EOF: u32 = 257;
/// First code index assignable to a multi-byte string.
pub const FIRST: u32 = 258;

const _: () = assert!(MIN_WIDTH >= 9 && MIN_WIDTH < MAX_WIDTH);
const _: () = assert!(MAX_WIDTH as u32 <= 16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_codes_are_distinct() {
        assert!(CLEAR < EOF);
        assert!(EOF < FIRST);
        assert_eq!(FIRST, 258);
    }
}
