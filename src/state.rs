//! Codec state shared by the encoder and decoder.
//!
//! Caller-owned and zero-initialized at creation. A single `State` is
//! used exclusively by either `compress` or `decompress` calls for its
//! whole lifetime; mixing directions on one instance is not supported.

use crate::reservoir::Reservoir;
use crate::table::StringTable;

#[derive(Clone, Debug, Default)]
pub struct State {
    pub(crate) table: StringTable,
    pub(crate) reservoir: Reservoir,
    pub(crate) was_init: bool,
    pub(crate) must_reset: bool,
    /// Bytes of `src` consumed so far, persistent across calls.
    pub(crate) rptr: usize,
    /// Longest prefix ever assigned, for diagnostics and the
    /// `longest_prefix_allowed` invariant.
    pub longest_prefix: usize,
    /// Optional cap on assigned prefix length; 0 means unbounded.
    pub longest_prefix_allowed: usize,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap on assigned prefix length, used by the encoder to bound
    /// decoder output buffer requirements. 0 disables the cap.
    pub fn set_longest_prefix_allowed(&mut self, n: usize) {
        self.longest_prefix_allowed = n;
    }

    pub(crate) fn init(&mut self) {
        log::debug!("initializing codec state");
        self.table.seed_roots();
        self.table.reset();
        self.was_init = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_uninitialized() {
        let s = State::new();
        assert!(!s.was_init);
        assert_eq!(s.rptr, 0);
        assert_eq!(s.longest_prefix, 0);
    }
}
