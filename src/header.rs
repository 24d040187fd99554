//! Optional `.Z`-style three-byte magic header.
//!
//! Not part of the core codec — a thin convenience for file-based
//! callers that want to self-describe the code width used. The core
//! `State::compress`/`decompress` never read or write this; only the
//! CLI collaborator does. Compatibility with genuine `compress(1)`
//! output is not claimed.

pub const MAGIC: [u8; 2] = [0x1F, 0x9D];
const BLOCK_MODE: u8 = 0x80;

/// Append the three-byte header for the given maximum code width.
pub fn write_header(buf: &mut Vec<u8>, max_width: u8) {
    buf.push(MAGIC[0]);
    buf.push(MAGIC[1]);
    buf.push(BLOCK_MODE | max_width);
}

/// Strip a leading header, returning the code width it declares and
/// the remaining bytes. `None` if `data` does not begin with the
/// magic bytes.
pub fn read_header(data: &[u8]) -> Option<(u8, &[u8])> {
    if data.len() >= 3 && data[0] == MAGIC[0] && data[1] == MAGIC[1] {
        let width = data[2] & !BLOCK_MODE;
        Some((width, &data[3..]))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_width() {
        let mut buf = Vec::new();
        write_header(&mut buf, 12);
        assert_eq!(buf, vec![0x1F, 0x9D, 0x8C]);
        let (width, rest) = read_header(&buf).expect("valid header");
        assert_eq!(width, 12);
        assert!(rest.is_empty());
    }

    #[test]
    fn rejects_missing_magic() {
        assert!(read_header(b"not a header").is_none());
        assert!(read_header(b"\x1f").is_none());
    }
}
