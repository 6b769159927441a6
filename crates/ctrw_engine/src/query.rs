//! Position query modes.
//!
//! | Mode | Receiver | Cost per call | Valid query order |
//! |------|----------|---------------|-------------------|
//! | `FullScan` | `&self` | O(N) | any |
//! | `Resumable` | `&mut self` | O(N) amortised over a sweep | non-decreasing |
//!
//! A resumable sweep over an increasing time grid costs O(N + grid) in
//! total instead of O(N · grid). Querying an earlier time than the previous
//! resumable query does not rewind the cursor; it returns the last known
//! position. Call `reset_cursor` before starting a new sweep.

/// Traversal strategy for point-in-time position lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueryMode {
    /// Linear search from the first event on every call.
    #[default]
    FullScan,

    /// Linear search from the event found by the previous resumable call.
    Resumable,
}

/// Forward-only hint left by resumable queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryCursor {
    last_index: usize,
}

impl QueryCursor {
    /// Event index found by the most recent successful resumable query.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    #[inline]
    pub(crate) fn set(&mut self, index: usize) {
        self.last_index = index;
    }

    #[inline]
    pub(crate) fn reset(&mut self) {
        self.last_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(QueryMode::default(), QueryMode::FullScan);
        assert_eq!(QueryCursor::default().last_index(), 0);
    }

    #[test]
    fn test_cursor_set_and_reset() {
        let mut cursor = QueryCursor::default();
        cursor.set(17);
        assert_eq!(cursor.last_index(), 17);
        cursor.reset();
        assert_eq!(cursor.last_index(), 0);
    }
}
