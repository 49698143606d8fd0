//! LIFO stack over a `Vec`.

use core::fmt;

/// A last-in, first-out stack.
///
/// The top of the stack is the end of the backing vector, so `push` is
/// amortized O(1) and `pop`/`peek` are O(1). Equality and hashing compare the
/// whole backing sequence in order, bottom to top.
///
/// # Example
///
/// ```
/// use trove_collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a stack from `items`; the last element becomes the top.
    #[inline]
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a value onto the top.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top value.
    ///
    /// Returns `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the top value without removing it.
    ///
    /// Returns `None` if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the elements bottom to top.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_vec(items.into())
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
