//! singly linked list stored in an arena of slots.
//!
//! Nodes are addressed by their slot index instead of pointers. Moving a
//! node only rewrites `next` links, values never move once pushed.

use std::fmt;
use tally_error::{Error, ErrorType, ListError, Result};
#[cfg(feature = "logging")]
use tracing::trace;

/// Handle on a node of a [`LinkedList`].
///
/// A handle is only meaningful for the list that returned it, and stops
/// being valid once its node is removed with [`LinkedList::pop_front`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// Singly linked list with front insertion and front removal.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    /// Arena of nodes. `None` marks a slot freed by `pop_front`.
    nodes: Vec<Option<Node<T>>>,
    /// Freed slots, reused before the arena grows.
    free: Vec<usize>,
    head: Option<usize>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes linked in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no node.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// First value of the list, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|index| self.value(index))
    }

    /// Adds a value to the head of the list.
    ///
    /// # Examples
    /// ```rust
    /// use tally_algorithm::linked::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_front(1);
    /// list.push_front(2);
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
    /// ```
    pub fn push_front(&mut self, value: T) -> NodeId {
        let index = self.allocate(Node {
            value,
            next: self.head,
        });
        self.head = Some(index);
        self.len += 1;

        NodeId(index)
    }

    /// Removes the node at the head of the list and returns its value.
    pub fn pop_front(&mut self) -> Result<T> {
        let node = self
            .head
            .and_then(|index| {
                self.nodes.get_mut(index).and_then(Option::take).map(|node| {
                    self.free.push(index);
                    node
                })
            })
            .ok_or_else(|| {
                Error::new(
                    ErrorType::List(ListError::EmptyList),
                    None,
                    Some("cannot remove from the head of an empty list".to_string()),
                )
            })?;

        self.head = node.next;
        self.len -= 1;

        Ok(node.value)
    }

    /// Links a new value right after `node`.
    pub fn insert_after(&mut self, node: NodeId, value: T) -> Result<NodeId> {
        if self.value(node.0).is_none() {
            return Err(Error::new(
                ErrorType::List(ListError::InvalidNode),
                None,
                Some(format!("no live node in slot {}", node.0)),
            ));
        }

        let index = self.allocate(Node {
            value,
            next: self.link(node.0),
        });
        self.set_link(node.0, Some(index));
        self.len += 1;

        Ok(NodeId(index))
    }

    /// Returns the value held by `node`.
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.value(node.0)
    }

    /// Finds the first value, in list order, matching `predicate`.
    pub fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            if self.value(index).is_some_and(&mut predicate) {
                return self
                    .nodes
                    .get_mut(index)
                    .and_then(Option::as_mut)
                    .map(|node| &mut node.value);
            }
            cursor = self.link(index);
        }

        None
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Reorders the list in descending order of `key`.
    ///
    /// Nodes are taken one by one from the head and relinked into a second
    /// chain kept sorted. A node goes before the first node whose key is
    /// strictly smaller, so equal keys keep their previous relative order.
    /// Runs in quadratic time, no value is moved or cloned.
    ///
    /// # Examples
    /// ```rust
    /// use tally_algorithm::linked::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// for value in [3, 9, 1, 9, 4] {
    ///     list.push_front(value);
    /// }
    /// list.sort_desc_by_key(|value| *value);
    ///
    /// assert_eq!(list.to_string(), "List[ 9; 9; 4; 3; 1; ]");
    /// ```
    pub fn sort_desc_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        // Nothing to do with zero or one node.
        match self.head {
            Some(index) if self.link(index).is_some() => {},
            _ => return,
        }

        let mut sorted: Option<usize> = None;

        while let Some(current) = self.head {
            self.head = self.link(current);
            let current_key = self.value(current).map(&mut key);

            match sorted {
                Some(top) if self.value(top).map(&mut key) >= current_key => {
                    let mut cursor = top;
                    while let Some(next) = self.link(cursor) {
                        if self.value(next).map(&mut key) < current_key {
                            break;
                        }
                        cursor = next;
                    }

                    self.set_link(current, self.link(cursor));
                    self.set_link(cursor, Some(current));
                },
                _ => {
                    self.set_link(current, sorted);
                    sorted = Some(current);
                },
            }
        }

        self.head = sorted;

        #[cfg(feature = "logging")]
        trace!(len = self.len, "Relinked list in descending order.");
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                index
            },
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            },
        }
    }

    fn value(&self, index: usize) -> Option<&T> {
        self.nodes
            .get(index)
            .and_then(Option::as_ref)
            .map(|node| &node.value)
    }

    fn link(&self, index: usize) -> Option<usize> {
        self.nodes
            .get(index)
            .and_then(Option::as_ref)
            .and_then(|node| node.next)
    }

    fn set_link(&mut self, index: usize, next: Option<usize>) {
        if let Some(Some(node)) = self.nodes.get_mut(index) {
            node.next = next;
        }
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List[ ")?;
        for value in self.iter() {
            write!(f, "{}; ", value)?;
        }
        write!(f, "]")
    }
}

/// Iterator over the values of a [`LinkedList`], head first.
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let node = self.list.nodes.get(index)?.as_ref()?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_push_front_reverses_order() {
        let mut list = LinkedList::new();
        for value in 1..=4 {
            list.push_front(value);
        }

        assert_eq!(collect(&list), vec![4, 3, 2, 1]);
        assert_eq!(list.len(), 4);
        assert_eq!(list.front(), Some(&4));
    }

    #[test]
    fn test_pop_front() {
        let mut list = LinkedList::new();
        list.push_front("a");
        list.push_front("b");

        assert_eq!(list.pop_front().unwrap(), "b");
        assert_eq!(list.pop_front().unwrap(), "a");
        assert!(list.is_empty());

        let error = list.pop_front().unwrap_err();
        assert!(matches!(error.etype, ErrorType::List(ListError::EmptyList)));
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut list = LinkedList::new();
        list.push_front(1);
        list.push_front(2);
        list.pop_front().unwrap();
        list.push_front(3);

        assert_eq!(list.nodes.len(), 2);
        assert_eq!(collect(&list), vec![3, 1]);
    }

    #[test]
    fn test_insert_after() {
        let mut list = LinkedList::new();
        list.push_front(3);
        let first = list.push_front(1);
        let second = list.insert_after(first, 2).unwrap();

        assert_eq!(list.get(second), Some(&2));
        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);

        list.pop_front().unwrap();
        let error = list.insert_after(first, 9).unwrap_err();
        assert!(matches!(error.etype, ErrorType::List(ListError::InvalidNode)));
    }

    #[test]
    fn test_find_mut() {
        let mut list = LinkedList::new();
        list.push_front(10);
        list.push_front(20);

        if let Some(value) = list.find_mut(|value| *value == 10) {
            *value += 5;
        }

        assert_eq!(collect(&list), vec![20, 15]);
        assert!(list.find_mut(|value| *value == 99).is_none());
    }

    #[test]
    fn test_sort_numbers() {
        let mut list = LinkedList::new();
        for line in ["5 2 8", "1 8 3"] {
            for number in line.split_whitespace() {
                list.push_front(number.parse::<i64>().unwrap());
            }
        }

        list.sort_desc_by_key(|value| *value);

        assert_eq!(collect(&list), vec![8, 8, 5, 3, 2, 1]);
        assert_eq!(list.to_string(), "List[ 8; 8; 5; 3; 2; 1; ]");
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn test_sort_keeps_ties_in_traversal_order() {
        let mut list = LinkedList::new();
        list.push_front((1, 'a'));
        list.push_front((2, 'b'));
        list.push_front((1, 'c'));
        list.push_front((2, 'd'));
        // Traversal order: d2 c1 b2 a1.

        list.sort_desc_by_key(|(count, _)| *count);

        let tags: Vec<char> = list.iter().map(|(_, tag)| *tag).collect();
        assert_eq!(tags, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut list = LinkedList::new();
        for value in [(4, 'x'), (4, 'y'), (7, 'z'), (1, 'w')] {
            list.push_front(value);
        }

        list.sort_desc_by_key(|(count, _)| *count);
        let once = collect(&list);
        list.sort_desc_by_key(|(count, _)| *count);

        assert_eq!(collect(&list), once);
    }

    #[test]
    fn test_sort_degenerate_lists() {
        let mut empty: LinkedList<i64> = LinkedList::new();
        empty.sort_desc_by_key(|value| *value);
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "List[ ]");

        let mut single = LinkedList::new();
        single.push_front(42);
        single.sort_desc_by_key(|value| *value);
        assert_eq!(collect(&single), vec![42]);
    }

    #[test]
    fn test_sort_after_pop_front() {
        let mut list = LinkedList::new();
        for value in [2, 9, 4, 7] {
            list.push_front(value);
        }
        list.pop_front().unwrap();
        list.push_front(5);

        list.sort_desc_by_key(|value| *value);

        assert_eq!(collect(&list), vec![9, 5, 4, 2]);
        assert_eq!(list.iter().size_hint(), (4, Some(4)));
    }
}
