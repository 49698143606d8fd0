//! N-ary tree with ordered, exclusively owned children.
//!
//! Every [`Node`] owns its children in a `Vec`, so a node has exactly one
//! parent and the structure can't contain cycles. Children are appended with
//! [`Node::add`] and otherwise read-only through [`Node::children`].

use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

/// A tree node: a value plus its ordered children.
///
/// # Example
///
/// ```
/// use trove_collections::{Node, tree};
///
/// let mut root = tree!("A" => ["B", "C" => ["D"]]);
/// assert_eq!(root.count(), 4);
///
/// root.add(Node::new("E"));
/// assert_eq!(root.count(), 5);
///
/// assert_eq!(root.find(&"D").map(Node::value), Some(&"D"));
/// assert!(root.find(&"Z").is_none());
/// ```
///
/// Drop, equality, hashing, and the search and size queries walk the tree
/// with an explicit stack, so a chain of any depth is safe. `Clone`, `Debug`,
/// and serde still recurse once per level.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<T> {
    value: T,
    children: Vec<Node<T>>,
}

impl<T> Node<T> {
    /// Creates a leaf.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Creates a node with pre-built children, kept in the given order.
    #[inline]
    pub fn with_children(value: T, children: Vec<Node<T>>) -> Self {
        Self { value, children }
    }

    /// Returns a reference to this node's value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to this node's value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns this node's children in order.
    #[inline]
    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends `child` after the existing children.
    ///
    /// Only this node changes; the child's own subtree is kept as is.
    #[inline]
    pub fn add(&mut self, child: Node<T>) {
        self.children.push(child);
    }

    /// Returns the number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Returns the number of levels in this subtree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Returns a pre-order iterator over this subtree.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { stack: vec![self] }
    }
}

impl<T: PartialEq> Node<T> {
    /// Returns the first node in pre-order whose value equals `value`.
    ///
    /// Checks `self` first, then each child's subtree in stored order.
    /// Returns `None` if nothing in the subtree matches.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        self.iter().find(|node| node.value == *value)
    }

    /// Mutable counterpart of [`find`](Self::find).
    pub fn find_mut(&mut self, value: &T) -> Option<&mut Node<T>> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.value == *value {
                return Some(node);
            }
            stack.extend(node.children.iter_mut().rev());
        }
        None
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Move descendants onto a work list so each node drops childless.
        let mut pending = core::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.value != b.value || a.children.len() != b.children.len() {
                return false;
            }
            pairs.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: Hash> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Pre-order values plus arities identify the shape, matching `eq`.
        for node in self {
            node.value.hash(state);
            node.children.len().hash(state);
        }
    }
}

impl<T> From<T> for Node<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<'a, T> IntoIterator for &'a Node<T> {
    type Item = &'a Node<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over the nodes of a subtree.
///
/// Uses an explicit stack, so deep trees don't grow the call stack.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Node<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Builds a [`Node`] tree from nested literal syntax.
///
/// `value => [children...]` makes an inner node, a bare `value` makes a leaf.
///
/// ```
/// use trove_collections::tree;
///
/// let root = tree!(1 => [2, 3 => [4, 5], 6]);
///
/// let preorder: Vec<_> = root.iter().map(|n| *n.value()).collect();
/// assert_eq!(preorder, vec![1, 2, 3, 4, 5, 6]);
/// ```
#[macro_export]
macro_rules! tree {
    (@children [$($done:expr,)*]) => {
        ::std::vec![$($done),*]
    };
    (@children [$($done:expr,)*] $value:expr => [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::tree!(@children [$($done,)* $crate::tree!($value => [$($inner)*]),] $($($rest)*)?)
    };
    (@children [$($done:expr,)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::tree!(@children [$($done,)* $crate::Node::new($value),] $($($rest)*)?)
    };
    ($value:expr => [$($children:tt)*]) => {
        $crate::Node::with_children($value, $crate::tree!(@children [] $($children)*))
    };
    ($value:expr) => {
        $crate::Node::new($value)
    };
}
