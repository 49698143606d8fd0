//! Small owned containers.
//!
//! Each type here stands alone: none of them share storage or depend on each
//! other. They trade the cleverness of the big standard-library collections
//! for a narrow, predictable API.
//!
//! # Data Structures
//!
//! | Structure | Discipline | Key Operations |
//! |-----------|------------|----------------|
//! | [`LinkedList`] | Forward-only, built once | `from_vec`, `iter` |
//! | [`Stack`] | LIFO | O(1) `push`/`pop`/`peek` |
//! | [`Queue`] | FIFO | O(1) `append`/`dequeue` |
//! | [`PriorityQueue`] | Highest priority first | O(1) `append`, O(n) `dequeue` |
//! | [`Node`] | N-ary tree | `add`, `count`, pre-order `find` |
//!
//! # Absent Values
//!
//! Nothing here panics on an empty container or a failed search. `pop`,
//! `peek`, `dequeue`, and `find` return `None` instead.
//!
//! ```
//! use trove_collections::{Node, Queue, Stack};
//!
//! let mut stack: Stack<u32> = Stack::new();
//! assert_eq!(stack.pop(), None);
//!
//! let mut queue: Queue<u32> = Queue::new();
//! assert_eq!(queue.dequeue(), None);
//!
//! assert!(Node::new(1).find(&2).is_none());
//! ```
//!
//! # Choosing a Queue Discipline
//!
//! [`Queue`] takes its dequeue rule as a type parameter. The default is
//! [`Fifo`]; [`PriorityQueue`] plugs in [`ByPriority`], which requires the
//! element type to implement [`Prioritized`].
//!
//! ```
//! use trove_collections::{Prioritized, PriorityQueue};
//!
//! struct Job(i64);
//!
//! impl Prioritized for Job {
//!     fn priority(&self) -> i64 { self.0 }
//! }
//!
//! let mut jobs = PriorityQueue::new();
//! for p in [3, 1, 4, 1, 5] {
//!     jobs.append(Job(p));
//! }
//!
//! let order: Vec<_> = std::iter::from_fn(|| jobs.dequeue()).map(|j| j.0).collect();
//! assert_eq!(order, vec![5, 4, 3, 1, 1]);
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Stack`], [`Node`], and [`Work`]

#![warn(missing_docs)]

pub mod list;
pub mod queue;
pub mod stack;
pub mod tree;

pub use list::{LinkedList, ListNode};
pub use queue::{ByPriority, Discipline, Fifo, Prioritized, PriorityQueue, Queue, Work};
pub use stack::Stack;
pub use tree::Node;
