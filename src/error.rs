use thiserror::Error;

/// Error types for collection operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CollectionError {
    /// `pop` or `peek` on a stack with no elements
    #[error("Stack is empty")]
    EmptyStack,
    /// `dequeue` or `peek` on a queue with no elements
    #[error("Queue is empty")]
    EmptyQueue,
    /// Destination slice cannot hold every element starting at `offset`
    #[error("Destination too small: {required} slots required at offset {offset}, but only {available} available")]
    DestinationTooSmall {
        /// Index of the first slot to write
        offset: usize,
        /// Number of elements to copy
        required: usize,
        /// Number of slots from `offset` to the end of the destination
        available: usize,
    },
    /// Invalid parameter passed to a constructor
    #[error("Invalid configuration: {parameter} cannot be {value}")]
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}

/// Returns the `count` slots of `dest` starting at `offset`.
pub(crate) fn destination_window<T>(
    dest: &mut [T],
    offset: usize,
    count: usize,
) -> Result<&mut [T], CollectionError> {
    let available = dest.len().saturating_sub(offset);
    dest.get_mut(offset..offset.saturating_add(count))
        .ok_or(CollectionError::DestinationTooSmall {
            offset,
            required: count,
            available,
        })
}
