//! Singly linked list with head-insertion construction.
//!
//! Each [`ListNode`] owns its successor through a `Box`, so a node belongs to
//! exactly one list and the chain cannot form a cycle. Traversal is forward
//! only. There is no removal or search API: the list is built once and read.

use core::fmt;
use core::iter::FusedIterator;

/// A node in a [`LinkedList`].
///
/// Holds a value and the owning link to the next node, if any.
pub struct ListNode<T> {
    value: T,
    next: Option<Box<ListNode<T>>>,
}

impl<T> ListNode<T> {
    /// Returns a reference to the value held by this node.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the next node, or `None` if this is the last one.
    #[inline]
    pub fn next(&self) -> Option<&ListNode<T>> {
        self.next.as_deref()
    }
}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListNode")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// A forward-only singly linked list.
///
/// Built by inserting at the head while walking the input backwards, so the
/// traversal order always matches the order the values were given in.
///
/// # Example
///
/// ```
/// use trove_collections::LinkedList;
///
/// let list = LinkedList::from([1, 2, 3]);
///
/// let values: Vec<_> = list.iter().copied().collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// assert_eq!(list.head(), Some(&1));
/// ```
pub struct LinkedList<T> {
    head: Option<Box<ListNode<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Creates a list whose traversal order matches `values`.
    pub fn from_vec(values: Vec<T>) -> Self {
        let mut list = Self::new();
        for value in values.into_iter().rev() {
            list.push_head(value);
        }
        list
    }

    #[inline]
    fn push_head(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
    }

    /// Returns `true` if the list holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes.
    ///
    /// Walks the whole list: O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the first value, or `None` if the list is empty.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(ListNode::value)
    }

    /// Returns the first node, or `None` if the list is empty.
    #[inline]
    pub fn head_node(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    /// Returns an iterator over values, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.nodes(),
        }
    }

    /// Returns an iterator over nodes, front to back.
    #[inline]
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            current: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink one node at a time; the default recursive drop would use
        // one stack frame per node.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        Self::from_vec(self.iter().cloned().collect())
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::new();
        for value in values.into_iter().rev() {
            list.push_head(value);
        }
        list
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Iterator over the nodes of a [`LinkedList`].
pub struct Nodes<'a, T> {
    current: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a ListNode<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(node)
    }
}

impl<T> FusedIterator for Nodes<'_, T> {}

/// Iterator over references to the values of a [`LinkedList`].
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(ListNode::value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the values of a [`LinkedList`], front to back.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.head.take()?;
        let ListNode { value, next } = *node;
        self.list.head = next;
        Some(value)
    }
}

impl<T> FusedIterator for IntoIter<T> {}
