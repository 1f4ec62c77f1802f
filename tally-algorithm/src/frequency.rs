//! word counter backed by a [`LinkedList`] of entries.

use crate::linked::LinkedList;
use std::fmt;
use tally_error::{Error, ErrorType, RankError, Result};
#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// A word and the number of times it has been observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    count: usize,
}

impl Entry {
    fn new(key: &str) -> Self {
        Entry {
            key: key.to_string(),
            count: 1,
        }
    }

    /// The observed word.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// How many times the word was observed.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.count)
    }
}

/// Unique words with their occurrence count.
///
/// New words are linked at the front, so before sorting the list reads from
/// the most recently discovered word to the oldest one. Rank queries sort the
/// list first whenever it was modified since the last sort.
#[derive(Debug, Default, Clone)]
pub struct FrequencyList {
    entries: LinkedList<Entry>,
    /// Set by `observe`, cleared by `sort`.
    dirty: bool,
}

impl FrequencyList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no word has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the current order is the descending order by count.
    pub fn is_sorted(&self) -> bool {
        !self.dirty
    }

    /// Whether `key` has been observed.
    pub fn contains<T>(&self, key: T) -> bool
    where
        T: AsRef<str>,
    {
        let key = key.as_ref();
        self.entries.iter().any(|entry| entry.key == key)
    }

    /// Count of `key`, if it has been observed.
    pub fn count<T>(&self, key: T) -> Option<usize>
    where
        T: AsRef<str>,
    {
        let key = key.as_ref();
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(Entry::count)
    }

    /// Counts one more occurrence of `key`.
    ///
    /// An unknown key is linked at the front with a count of 1.
    ///
    /// # Examples
    /// ```rust
    /// use tally_algorithm::frequency::FrequencyList;
    ///
    /// let mut list = FrequencyList::new();
    /// list.observe("apples");
    /// list.observe("apples");
    ///
    /// assert_eq!(list.count("apples"), Some(2));
    /// ```
    pub fn observe<T>(&mut self, key: T)
    where
        T: AsRef<str>,
    {
        let key = key.as_ref();

        if let Some(entry) = self.entries.find_mut(|entry| entry.key == key) {
            entry.count += 1;
        } else {
            #[cfg(feature = "logging")]
            trace!(key, "New word in frequency list.");

            self.entries.push_front(Entry::new(key));
        }

        self.dirty = true;
    }

    /// Reorders entries by descending count, ties keep their current order.
    pub fn sort(&mut self) {
        self.entries.sort_desc_by_key(Entry::count);
        self.dirty = false;

        #[cfg(feature = "logging")]
        debug!(entries = self.entries.len(), "Sorted frequency list.");
    }

    /// Count of the entry at 0-based position `n` in descending order.
    ///
    /// Fails with an out of range error if `n` is negative or not below
    /// [`len`](Self::len).
    pub fn rank_count<N>(&mut self, n: N) -> Result<usize>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        self.ensure_sorted();
        let len = self.entries.len();

        TryInto::<usize>::try_into(n)
            .ok()
            .filter(|index| *index < len)
            .and_then(|index| self.entries.iter().nth(index))
            .map(Entry::count)
            .ok_or_else(|| {
                Error::new(
                    ErrorType::Rank(RankError::OutOfRange),
                    None,
                    Some(format!("rank {} on a list of {} entries", n, len)),
                )
            })
    }

    /// Every entry whose count is at least `threshold`, in descending order.
    pub fn report_at_or_above(
        &mut self,
        threshold: usize,
    ) -> impl Iterator<Item = &Entry> + '_ {
        self.ensure_sorted();

        self.entries
            .iter()
            .filter(move |entry| entry.count >= threshold)
    }

    /// Entries ranked at `n` or higher, including every entry tied with the
    /// one at `n`. The result can therefore hold more than `n + 1` entries.
    ///
    /// # Examples
    /// ```rust
    /// use tally_algorithm::frequency::FrequencyList;
    ///
    /// let mut list = FrequencyList::new();
    /// for word in ["a", "b", "a", "c", "b", "a"] {
    ///     list.observe(word);
    /// }
    ///
    /// let words: Vec<String> = list
    ///     .rank_query(1)
    ///     .unwrap()
    ///     .iter()
    ///     .map(|entry| entry.to_string())
    ///     .collect();
    /// assert_eq!(words, vec!["a:3", "b:2"]);
    /// ```
    pub fn rank_query<N>(&mut self, n: N) -> Result<Vec<&Entry>>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        let threshold = self.rank_count(n)?;

        Ok(self.report_at_or_above(threshold).collect())
    }

    /// Iterates over entries in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    fn ensure_sorted(&mut self) {
        if self.dirty {
            self.sort();
        }
    }
}

impl<T: AsRef<str>> Extend<T> for FrequencyList {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.observe(key);
        }
    }
}
