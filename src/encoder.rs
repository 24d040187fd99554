//! LZW encoder.
//!
//! Greedy longest-match search against the string table; emits codes,
//! grows the code width, resets on table exhaustion, and flushes the
//! reservoir into the caller's output buffer.

use crate::error::CodecError;
use crate::reservoir::Reservoir;
use crate::state::State;
use crate::table::mask;
use crate::{CLEAR, EOF, MAX_WIDTH};

fn flush(reservoir: &mut Reservoir, dest: &mut [u8], wptr: &mut usize, final_flush: bool) {
    while let Some(byte) = reservoir.pull_byte() {
        dest[*wptr] = byte;
        *wptr += 1;
    }
    if final_flush {
        if let Some(byte) = reservoir.take_final_byte() {
            dest[*wptr] = byte;
            *wptr += 1;
        }
    }
}

impl State {
    /// Compress as much of `src` as fits into `dest`. Returns the
    /// number of bytes written this call. As with `decompress`, `src`
    /// must be the same slice (or a non-shrinking growth of it) across
    /// successive calls to the same state.
    pub fn compress(&mut self, src: &[u8], dest: &mut [u8]) -> Result<usize, CodecError> {
        if !self.was_init {
            if src.is_empty() {
                // empty input stays empty output; defer init so a later
                // call with real data still performs it
                return Ok(0);
            }
            self.init();
            self.reservoir.enqueue(CLEAR, self.table.code_width);
            log::debug!("queued initial CLEAR code");
        }

        let mut wptr = 0usize;
        let mut prefix_end = 0usize;
        let mut code: u32 = EOF;

        log::debug!("entering encode loop, rptr={} slen={}", self.rptr, src.len());

        while self.rptr + prefix_end < src.len() {
            let worst_case = (self.table.code_width as usize / 8) + 1 + 2 + 2;
            if wptr + worst_case > dest.len() {
                flush(&mut self.reservoir, dest, &mut wptr, false);
                return Ok(wptr);
            }

            prefix_end += 1;
            let overlong =
                self.longest_prefix_allowed > 0 && prefix_end >= self.longest_prefix_allowed;
            let prefix = &src[self.rptr..self.rptr + prefix_end];
            let found = self.table.lookup(prefix);
            if let Some(c) = found {
                code = c;
            }

            if found.is_none() || overlong {
                let symbol = src[self.rptr + prefix_end - 1];
                let parent = code;

                self.table.add(symbol, parent);
                let new_len = self.table.prefix_len(parent) + 1;
                if new_len as usize > self.longest_prefix {
                    self.longest_prefix = new_len as usize;
                }

                self.reservoir.enqueue(parent, self.table.code_width);
                log::trace!("emit code {parent} at width {}", self.table.code_width);
                flush(&mut self.reservoir, dest, &mut wptr, false);

                let mut just_reset = false;
                if self.table.next_code > mask(self.table.code_width) {
                    if self.table.code_width >= MAX_WIDTH {
                        self.reservoir.enqueue(CLEAR, self.table.code_width);
                        self.table.reset();
                        flush(&mut self.reservoir, dest, &mut wptr, false);
                        just_reset = true;
                        log::debug!("string table full, emitted CLEAR and reset");
                    } else {
                        self.table.code_width += 1;
                    }
                }
                if !just_reset {
                    self.table.prev_code = self.table.next_code;
                    self.table.next_code += 1;
                }

                self.rptr += prefix_end - 1;
                prefix_end = 0;
            }
        }

        if prefix_end != 0 {
            self.reservoir.enqueue(code, self.table.code_width);
            flush(&mut self.reservoir, dest, &mut wptr, false);
            self.table.prev_code = code;
            self.rptr += prefix_end;
        }

        if self.rptr == src.len() && self.table.prev_code != EOF {
            self.reservoir.enqueue(EOF, self.table.code_width);
            flush(&mut self.reservoir, dest, &mut wptr, true);
            self.table.prev_code = EOF;
            log::debug!("emitted EOF and final flush");
        }

        debug_assert!(wptr <= dest.len());
        log::debug!("compress call produced {wptr} bytes");
        Ok(wptr)
    }
}
