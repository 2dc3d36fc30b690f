//! A singly-linked FIFO queue. The tree uses it to stage nodes during a
//! breadth-first walk but it is usable on its own.
//!
//! # Examples
//!
//! ```
//! use bst_search::{Error, Queue};
//!
//! let mut queue = Queue::new();
//! assert!(queue.is_empty());
//!
//! queue.enqueue("a");
//! queue.enqueue("b");
//! assert_eq!(queue.len(), 2);
//!
//! assert_eq!(queue.dequeue(), Ok("a"));
//! assert_eq!(queue.dequeue(), Ok("b"));
//!
//! // Draining past the end is reported instead of yielding a placeholder.
//! assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

/// A FIFO queue with `O(1)` [`enqueue`](Queue::enqueue) and
/// [`dequeue`](Queue::dequeue).
pub struct Queue<T> {
    // Owns the whole chain. Every node is allocated with `Box::new` in `enqueue` and released
    // exactly once, either in `dequeue` or by `Drop` (which just dequeues).
    first: Link<T>,
    // Never owns anything. Only used to append without walking the chain.
    last: Link<T>,
    len: usize,
}

type Link<T> = Option<NonNull<QueueNode<T>>>;

struct QueueNode<T> {
    payload: T,
    next: Link<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        while self.dequeue().is_ok() {}
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            first: None,
            last: None,
            len: 0,
        }
    }

    /// Appends `payload` to the back of the queue.
    pub fn enqueue(&mut self, payload: T) {
        let node = NonNull::from(Box::leak(Box::new(QueueNode {
            payload,
            next: None,
        })));

        match self.last {
            // SAFETY: `last` points at the tail node which is still owned by the chain starting
            // at `first` (it's only released by `dequeue`, which clears `last` when it releases
            // the tail). We hold `&mut self` so nothing else is looking at it.
            Some(mut last) => unsafe { last.as_mut().next = Some(node) },
            None => self.first = Some(node),
        }
        self.last = Some(node);
        self.len += 1;
    }

    /// Removes the payload at the front of the queue and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyQueue`] if there is nothing to remove. Check
    /// [`is_empty`](Queue::is_empty) first to drain without hitting this.
    pub fn dequeue(&mut self) -> Result<T> {
        let first = self.first.ok_or(Error::EmptyQueue)?;

        // SAFETY: `first` was allocated with `Box::new` in `enqueue` and is only reachable
        // through `self.first` (and `self.last` if it's the tail, which we clear below). We
        // unlink it before anyone could observe it again so it's released exactly once.
        let node = unsafe { *Box::from_raw(first.as_ptr()) };
        self.first = node.next;
        if self.first.is_none() {
            self.last = None;
        }
        self.len -= 1;

        Ok(node.payload)
    }

    /// Returns a reference to the payload at the front of the queue, if any.
    pub fn peek(&self) -> Option<&T> {
        // SAFETY: Nodes reachable from `first` are live until `dequeue` takes `&mut self`,
        // which can't happen while the returned borrow of `self` is alive.
        self.first.map(|first| unsafe { &(*first.as_ptr()).payload })
    }

    /// Whether the queue has no payloads left.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// The number of payloads currently in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterates over the payloads from front to back without removing them.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.first,
            _queue: PhantomData,
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for payload in iter {
            self.enqueue(payload);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Clone for Queue<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> fmt::Debug for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back iterator over a [`Queue`]. Created by [`Queue::iter`].
pub struct Iter<'a, T> {
    next: Link<T>,
    _queue: PhantomData<&'a Queue<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: The queue is borrowed for `'a` so no node can be released while this
            // iterator (or anything it yielded) is alive.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            &node.payload
        })
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
