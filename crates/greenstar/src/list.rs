//! Singly linked list
//!
//! A chain of boxed nodes owned from the first node onwards. Indexed
//! operations walk the chain from the front, so `get`, `set` and `remove`
//! are O(n); appending is O(n) as well since no tail pointer is kept.

mod iter;

pub use iter::{IntoIter, Iter, IterMut};

use std::fmt;

use crate::error::ListError;

type Link<T> = Option<Box<Node<T>>>;

/// One element of the chain: a payload and the link to its successor.
///
/// The last reachable node always has `next == None`.
struct Node<T> {
    data: T,
    next: Link<T>,
}

/// A singly linked list with indexed access.
///
/// `size` always equals the number of nodes reachable from `first`.
///
/// # Example
///
/// ```
/// use greenstar::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.add(10);
/// list.add(20);
/// list.add(30);
///
/// list.set(1, 25).unwrap();
/// list.remove(0).unwrap();
///
/// assert_eq!(list.size(), 2);
/// assert_eq!(list.get(0), Ok(&25));
/// assert_eq!(list.get(1), Ok(&30));
/// ```
pub struct LinkedList<T> {
    first: Link<T>,
    size: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            first: None,
            size: 0,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Insertion
    // ═══════════════════════════════════════════════════════════════════

    /// Append `data` after the last node.
    pub fn add(&mut self, data: T) {
        let mut link = &mut self.first;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { data, next: None }));
        self.size += 1;
    }

    /// Insert `data` in front of the first node.
    pub fn push_front(&mut self, data: T) {
        let next = self.first.take();
        self.first = Some(Box::new(Node { data, next }));
        self.size += 1;
    }

    // ═══════════════════════════════════════════════════════════════════
    // Indexed Access
    // ═══════════════════════════════════════════════════════════════════

    /// Read the payload at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `index >= size()`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let out_of_bounds = ListError::IndexOutOfBounds {
            index,
            size: self.size,
        };
        if index >= self.size {
            return Err(out_of_bounds);
        }

        let mut node = self.first.as_deref();
        for _ in 0..index {
            node = node.and_then(|n| n.next.as_deref());
        }
        node.map(|n| &n.data).ok_or(out_of_bounds)
    }

    /// Mutable access to the payload at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let out_of_bounds = ListError::IndexOutOfBounds {
            index,
            size: self.size,
        };
        if index >= self.size {
            return Err(out_of_bounds);
        }

        let mut node = self.first.as_deref_mut();
        for _ in 0..index {
            node = node.and_then(|n| n.next.as_deref_mut());
        }
        node.map(|n| &mut n.data).ok_or(out_of_bounds)
    }

    /// Replace the payload at `index`, returning the previous one.
    ///
    /// Only the node at `index` changes; the chain is not relinked.
    pub fn set(&mut self, index: usize, data: T) -> Result<T, ListError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, data))
    }

    /// Unlink the node at `index` and return its payload.
    ///
    /// The predecessor's link (or the first-node link for index 0) is
    /// redirected to the removed node's successor, so every later index
    /// shifts down by one. The list is unchanged on error.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let size = self.size;
        let out_of_bounds = ListError::IndexOutOfBounds { index, size };
        if index >= size {
            return Err(out_of_bounds);
        }

        let mut link = &mut self.first;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => return Err(out_of_bounds),
            }
        }

        let removed = link.take().ok_or(out_of_bounds)?;
        let Node { data, next } = *removed;
        *link = next;
        self.size -= 1;
        Ok(data)
    }

    /// Remove and return the first payload.
    pub fn pop_front(&mut self) -> Option<T> {
        self.first.take().map(|node| {
            let Node { data, next } = *node;
            self.first = next;
            self.size -= 1;
            data
        })
    }

    /// The first payload, if any.
    pub fn first(&self) -> Option<&T> {
        self.first.as_deref().map(|n| &n.data)
    }

    /// The last payload, if any.
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Number of elements in the list.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alias for [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Check if any payload equals `data`.
    pub fn contains(&self, data: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|d| d == data)
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        let mut link = self.first.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.size = 0;
    }

    /// Iterate over payloads front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.first.as_deref(), self.size)
    }

    /// Iterate mutably over payloads front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.first.as_deref_mut(), self.size)
    }
}

// Unlink nodes one at a time; the default recursive drop of
// `Box<Node>` would overflow the stack on long chains.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = &mut self.first;
        while let Some(node) = link {
            link = &mut node.next;
        }
        for data in iter {
            let node = link.insert(Box::new(Node { data, next: None }));
            link = &mut node.next;
            self.size += 1;
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reachable<T>(list: &LinkedList<T>) -> usize {
        let mut count = 0;
        let mut node = list.first.as_deref();
        while let Some(n) = node {
            count += 1;
            node = n.next.as_deref();
        }
        count
    }

    #[test]
    fn test_size_matches_reachable_nodes() {
        let mut list = LinkedList::new();
        for i in 0..5 {
            list.add(i);
            assert_eq!(reachable(&list), list.size());
        }
        list.remove(2).unwrap();
        assert_eq!(reachable(&list), list.size());
        list.remove(0).unwrap();
        list.remove(2).unwrap();
        assert_eq!(reachable(&list), 2);
        assert_eq!(list.size(), 2);
    }

    #[test]
    fn test_remove_last_terminates_chain() {
        let mut list: LinkedList<_> = (1..=3).collect();
        assert_eq!(list.remove(2), Ok(3));
        let second = list.first.as_ref().and_then(|n| n.next.as_ref()).unwrap();
        assert!(second.next.is_none());
        assert_eq!(list.last(), Some(&2));
    }

    #[test]
    fn test_remove_out_of_bounds_leaves_list_alone() {
        let mut list: LinkedList<_> = vec!["a", "b"].into_iter().collect();
        assert_eq!(
            list.remove(2),
            Err(ListError::IndexOutOfBounds { index: 2, size: 2 })
        );
        assert_eq!(reachable(&list), 2);
    }

    #[test]
    fn test_clear_resets_size() {
        let mut list: LinkedList<_> = (0..10).collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.size(), 0);
        list.add(1);
        assert_eq!(list.get(0), Ok(&1));
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let list: LinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.size(), 200_000);
        drop(list);
    }
}
