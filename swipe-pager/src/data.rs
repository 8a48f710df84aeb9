//! Backing sequence bookkeeping: length, loop repetitions and item identity.

/// Stable identity of a materialized item.
///
/// Loop mode may repeat the source sequence several times; the repetition
/// index keeps clones of the same source item distinct for diffing renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemKey {
    /// Which copy of the source sequence the item belongs to.
    pub repetition: usize,
    /// Index of the item inside the source sequence.
    pub source_index: usize,
}

/// Length of the source sequence and how many times it is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerData {
    source_len: usize,
    repeat: usize,
}

impl PagerData {
    /// Creates bookkeeping for a source sequence of `source_len` items.
    pub fn new(source_len: usize) -> Self {
        Self {
            source_len,
            repeat: 1,
        }
    }

    /// Repeats the source sequence `repeat` times. Values below one are
    /// raised to one.
    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat.max(1);
        self
    }

    /// Length of the source sequence.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Number of repetitions of the source sequence.
    pub fn repeat(&self) -> usize {
        self.repeat
    }

    /// Total number of pages, `source_len * repeat`.
    pub fn len(&self) -> usize {
        self.source_len.saturating_mul(self.repeat)
    }

    /// Returns `true` when there is nothing to page through.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps a page index to its identity.
    ///
    /// Returns `None` for indices past the end of the backing sequence.
    pub fn key(&self, index: usize) -> Option<ItemKey> {
        if index >= self.len() {
            return None;
        }
        Some(ItemKey {
            repetition: index / self.source_len,
            source_index: index % self.source_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_repetition_keys() {
        let data = PagerData::new(4);
        assert_eq!(data.len(), 4);
        assert_eq!(
            data.key(3),
            Some(ItemKey {
                repetition: 0,
                source_index: 3
            })
        );
        assert_eq!(data.key(4), None);
    }

    #[test]
    fn test_repeated_keys_are_distinct() {
        let data = PagerData::new(3).with_repeat(2);
        assert_eq!(data.len(), 6);
        let first = data.key(1);
        let clone = data.key(4);
        assert_ne!(first, clone);
        assert_eq!(first.map(|k| k.source_index), clone.map(|k| k.source_index));
        assert_eq!(clone.map(|k| k.repetition), Some(1));
    }

    #[test]
    fn test_repeat_is_at_least_one() {
        let data = PagerData::new(5).with_repeat(0);
        assert_eq!(data.repeat(), 1);
        assert!(PagerData::new(0).is_empty());
        assert_eq!(PagerData::new(0).key(0), None);
    }
}
