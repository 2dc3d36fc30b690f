//! Errors shared by the tree and the queue.

use thiserror::Error;

/// The ways an operation on a [`Tree`](crate::tree::Tree) or a
/// [`Queue`](crate::queue::Queue) can fail. Neither failure leaves the
/// structure in an invalid state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No node on the search path holds the requested key.
    #[error("key not found")]
    KeyNotFound,
    /// A payload was requested from a queue with nothing in it.
    #[error("cannot dequeue from an empty queue")]
    EmptyQueue,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
