//! LZW decoder.
//!
//! Consumes codes from the reservoir, emits prefixes, grows the
//! dictionary and code width, and handles the special codes (`CLEAR`,
//! `EOF`) along with the "code not yet in the table" (KwKwK)
//! self-reference.

use crate::error::CodecError;
use crate::state::State;
use crate::table::mask;
use crate::{CLEAR, EOF, FIRST, MAX_WIDTH};

impl State {
    /// Decompress as much of `src` as fits into `dest`. Returns the
    /// number of bytes written this call. `src` must be the same
    /// slice (or a non-shrinking growth of it) across successive
    /// calls to the same state: the consumption cursor is carried
    /// inside the state, not reset per call.
    pub fn decompress(&mut self, src: &[u8], dest: &mut [u8]) -> Result<usize, CodecError> {
        if !self.was_init {
            self.init();
        }

        let mut reservoir = self.reservoir;
        let mut wptr = 0usize;

        log::debug!("entering decode loop, rptr={} slen={}", self.rptr, src.len());

        while self.rptr < src.len() {
            while (reservoir.nbits() as u32) < self.table.code_width as u32 && self.rptr < src.len()
            {
                reservoir.load_byte(src[self.rptr]);
                self.rptr += 1;
            }
            // persist the reservoir snapshot before extracting this
            // iteration's code, so an early return below leaves the
            // code fully re-derivable on the next call
            self.reservoir = reservoir;

            if (reservoir.nbits() as u32) < self.table.code_width as u32 {
                log::error!("stream ended mid-code");
                return Err(CodecError::InvalidCodeStream);
            }

            let code = reservoir.dequeue(self.table.code_width);
            log::trace!("code: {code}");

            if code == CLEAR {
                if self.table.next_code != FIRST {
                    self.table.reset();
                }
                self.must_reset = false;
                continue;
            }
            if code == EOF {
                break;
            }
            if self.must_reset {
                log::error!("string table full, expected CLEAR, got {code}");
                return Err(CodecError::StringTableFull);
            }
            if code > self.table.next_code {
                log::error!("code {} exceeds next_code {}", code, self.table.next_code);
                return Err(CodecError::InvalidCodeStream);
            }

            let known_code = code < self.table.next_code;
            let tcode = if known_code { code } else { self.table.prev_code };
            if !known_code && self.table.prev_code == EOF {
                log::error!("self-referential code with no prior code to resolve against");
                return Err(CodecError::InvalidCodeStream);
            }

            let prefix_len = 1 + self.table.prefix_len(tcode);
            if prefix_len as usize > self.longest_prefix {
                self.longest_prefix = prefix_len as usize;
            }

            let extra = if known_code { 0 } else { 1 };
            let needed = prefix_len as usize + extra;
            if needed > dest.len() {
                return Err(CodecError::DestinationTooSmall);
            }
            if wptr + needed > dest.len() {
                return Ok(wptr);
            }

            let mut walk = tcode;
            let mut first_symbol = 0u8;
            for i in 0..prefix_len {
                first_symbol = self.table.symbol(walk);
                dest[wptr + prefix_len as usize - 1 - i as usize] = first_symbol;
                walk = self.table.parent(walk);
            }
            wptr += prefix_len as usize;

            if self.table.prev_code != EOF {
                if !known_code {
                    dest[wptr] = first_symbol;
                    wptr += 1;
                }
                self.table.add(first_symbol, self.table.prev_code);
                if self.table.next_code > mask(self.table.code_width) {
                    if self.table.code_width == MAX_WIDTH {
                        self.must_reset = true;
                        self.table.prev_code = code;
                        self.reservoir = reservoir;
                        continue;
                    }
                    self.table.code_width += 1;
                }
                self.table.next_code += 1;
            }
            self.table.prev_code = code;
        }

        self.reservoir = reservoir;
        log::debug!("decompress call produced {wptr} bytes");
        Ok(wptr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::*; // bring compress into scope via State impl

    fn roundtrip(input: &[u8]) -> Vec<u8> {
        let mut enc = State::new();
        let mut packed = vec![0u8; input.len() * 2 + 64];
        let n = enc.compress(input, &mut packed).expect("compress");
        packed.truncate(n);

        let mut dec = State::new();
        let mut out = vec![0u8; input.len() + 64];
        let m = dec.decompress(&packed, &mut out).expect("decompress");
        out.truncate(m);
        out
    }

    #[test]
    fn empty_input_round_trips_to_empty_output() {
        assert_eq!(roundtrip(b""), b"");
    }

    #[test]
    fn single_byte_round_trips() {
        assert_eq!(roundtrip(b"A"), b"A");
    }

    #[test]
    fn self_reference_kwkwk_round_trips() {
        assert_eq!(roundtrip(b"ababababab"), b"ababababab");
    }

    #[test]
    fn all_zero_round_trips() {
        let data = vec![0u8; 1024];
        assert_eq!(roundtrip(&data), data);
    }

    #[test]
    fn wikipedia_example_round_trips() {
        assert_eq!(
            roundtrip(b"TOBEORNOTTOBEORTOBEORNOT"),
            b"TOBEORNOTTOBEORTOBEORNOT"
        );
    }

    #[test]
    fn destination_too_small_on_first_code() {
        let mut enc = State::new();
        let mut packed = vec![0u8; 16];
        let n = enc.compress(b"hello world", &mut packed).unwrap();
        packed.truncate(n);

        let mut dec = State::new();
        let mut out = vec![0u8; 0];
        let err = dec.decompress(&packed, &mut out).unwrap_err();
        assert_eq!(err, CodecError::DestinationTooSmall);
    }

    #[test]
    fn truncated_stream_returns_partial_then_errors_or_resumes() {
        let input = b"the quick brown fox jumps over the lazy dog".repeat(4);
        let mut enc = State::new();
        let mut packed = vec![0u8; input.len() * 2 + 64];
        let n = enc.compress(&input, &mut packed).unwrap();
        packed.truncate(n);

        let half = &packed[..packed.len() / 2];
        let mut dec = State::new();
        let mut out = vec![0u8; input.len() + 64];
        let res = dec.decompress(half, &mut out);
        // a truncated stream either yields a valid partial prefix or
        // cleanly signals invalid/missing data; it must never panic
        match res {
            Ok(n) => assert!(n <= input.len()),
            Err(e) => assert!(matches!(e, CodecError::InvalidCodeStream)),
        }

        let mut dec_full = State::new();
        let mut out_full = vec![0u8; input.len() + 64];
        let m = dec_full.decompress(&packed, &mut out_full).unwrap();
        assert_eq!(&out_full[..m], &input[..]);
    }
}
