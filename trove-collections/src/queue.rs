//! FIFO and priority queues sharing one ring-buffer backed type.
//!
//! [`Queue`] is generic over a dequeue [`Discipline`] chosen at compile time:
//!
//! ```text
//! Queue<T>              = Queue<T, Fifo>        - dequeue takes the front
//! PriorityQueue<T>      = Queue<T, ByPriority>  - dequeue takes the max priority
//! ```
//!
//! `ByPriority` only implements [`Discipline`] for `T: Prioritized`, so asking
//! for a priority queue of plain values is a type error rather than a silent
//! fall back to FIFO.

use core::fmt;
use core::marker::PhantomData;
use std::collections::VecDeque;
use std::collections::vec_deque;

/// Values that carry an integer priority. Higher runs first.
pub trait Prioritized {
    /// Returns this value's priority.
    fn priority(&self) -> i64;
}

impl<P: Prioritized + ?Sized> Prioritized for &P {
    #[inline]
    fn priority(&self) -> i64 {
        (**self).priority()
    }
}

impl<P: Prioritized + ?Sized> Prioritized for Box<P> {
    #[inline]
    fn priority(&self) -> i64 {
        (**self).priority()
    }
}

/// Strategy that picks which element [`Queue::dequeue`] removes.
pub trait Discipline<T> {
    /// Returns the position of the element to remove next, or `None` if
    /// `items` is empty.
    fn select(items: &VecDeque<T>) -> Option<usize>;
}

/// First in, first out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fifo;

impl<T> Discipline<T> for Fifo {
    #[inline]
    fn select(items: &VecDeque<T>) -> Option<usize> {
        if items.is_empty() { None } else { Some(0) }
    }
}

/// Highest [`Prioritized::priority`] first.
///
/// Scans front to back and keeps the first element whose priority is
/// strictly greater than every one before it, so among equal top priorities
/// the one nearest the front wins. O(n) per dequeue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByPriority;

impl<T: Prioritized> Discipline<T> for ByPriority {
    fn select(items: &VecDeque<T>) -> Option<usize> {
        let mut iter = items.iter().enumerate();
        let (mut best, first) = iter.next()?;
        let mut best_priority = first.priority();

        for (idx, item) in iter {
            let priority = item.priority();
            if priority > best_priority {
                best = idx;
                best_priority = priority;
            }
        }

        Some(best)
    }
}

/// A queue whose removal order is set by the discipline `D`.
///
/// Appends go to the back in amortized O(1). What `dequeue` removes depends
/// on `D`: [`Fifo`] takes the front in O(1), [`ByPriority`] scans for the
/// maximum priority and removes it in O(n).
///
/// # Example
///
/// ```
/// use trove_collections::Queue;
///
/// let mut queue: Queue<i32> = Queue::new();
/// queue.append(1);
/// queue.append(2);
/// queue.append(3);
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), Some(3));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct Queue<T, D = Fifo> {
    items: VecDeque<T>,
    _discipline: PhantomData<fn() -> D>,
}

/// A queue that dequeues the highest-priority element first.
///
/// # Example
///
/// ```
/// use trove_collections::{PriorityQueue, Work};
///
/// let mut queue = PriorityQueue::new();
/// queue.append(Work::new("low", 1));
/// queue.append(Work::new("urgent", 9));
/// queue.append(Work::new("normal", 5));
///
/// assert_eq!(queue.dequeue().unwrap().name, "urgent");
/// assert_eq!(queue.dequeue().unwrap().name, "normal");
/// assert_eq!(queue.dequeue().unwrap().name, "low");
/// assert!(queue.dequeue().is_none());
/// ```
pub type PriorityQueue<T> = Queue<T, ByPriority>;

impl<T, D> Queue<T, D> {
    /// Creates an empty queue.
    #[inline]
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
            _discipline: PhantomData,
        }
    }

    /// Creates an empty queue with room for at least `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            _discipline: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a value to the back.
    #[inline]
    pub fn append(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Returns the oldest element, regardless of discipline.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the newest element, regardless of discipline.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Returns an iterator over elements in insertion order.
    #[inline]
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T, D: Discipline<T>> Queue<T, D> {
    /// Removes and returns the next element under the queue's discipline.
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        let idx = D::select(&self.items)?;
        self.items.remove(idx)
    }

    /// Returns the element the next [`dequeue`](Self::dequeue) would remove.
    #[inline]
    pub fn peek_next(&self) -> Option<&T> {
        let idx = D::select(&self.items)?;
        self.items.get(idx)
    }
}

impl<T, D> Default for Queue<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, D> Clone for Queue<T, D> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            _discipline: PhantomData,
        }
    }
}

impl<T: PartialEq, D> PartialEq for Queue<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, D> Eq for Queue<T, D> {}

impl<T: fmt::Debug, D> fmt::Debug for Queue<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T, D> FromIterator<T> for Queue<T, D> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            _discipline: PhantomData,
        }
    }
}

impl<T, D> Extend<T> for Queue<T, D> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T, D> IntoIterator for &'a Queue<T, D> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A named unit of work with a priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Work {
    /// Label for the work item.
    pub name: String,
    /// Scheduling priority. Higher runs first.
    pub priority: i64,
}

impl Work {
    /// Creates a work item.
    pub fn new(name: impl Into<String>, priority: i64) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

impl Prioritized for Work {
    #[inline]
    fn priority(&self) -> i64 {
        self.priority
    }
}
