//! # tally-algorithm
//!
//! hand-linked structures to count words and rank them by frequency.
//! Provided structures:
//! - LinkedList, an arena backed singly linked list with a stable descending sort;
//! - FrequencyList, the word counter built on top of it.

#![forbid(unsafe_code)]
#![deny(dead_code, unused_imports, unused_mut, missing_docs)]

/// Word counter answering rank and threshold queries.
pub mod frequency;
/// Singly linked list addressed by slot indices.
pub mod linked;
