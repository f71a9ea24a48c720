use thiserror::Error;

/// Errors raised by operations that have a precondition on the shape of a tree or queue.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `rightmost` or `leftmost` was asked for on an empty tree.
    #[error("empty tree has no extreme value")]
    EmptyTree,
    /// `min_val` or `delete_min` was called on an empty queue.
    #[error("empty queue")]
    EmptyQueue,
    /// `special_merge` was given a left queue whose largest value is not smaller than the right
    /// queue's smallest value.
    #[error("special merge requires every value of the left queue to be smaller than every value of the right queue")]
    Overlapping,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
