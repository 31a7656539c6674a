use thiserror::Error;

/// Failures raised by cursor operations.
///
/// Reaching the end of the readable window is never an error; reads report
/// it in-band as `None` or as a short count.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// The destination range `[offset, offset + len)` does not fit in a
    /// destination of `capacity` units.
    #[error("destination range {offset}+{len} out of bounds for capacity {capacity}")]
    IndexOutOfBounds {
        /// Requested start offset in the destination.
        offset: usize,
        /// Requested number of units.
        len: usize,
        /// Length of the destination.
        capacity: usize,
    },
    /// An argument outside its accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The cursor was closed and its backing content released.
    #[error("stream closed")]
    Closed,
}

impl CursorError {
    /// Validates that `[offset, offset + len)` lies within `capacity`.
    ///
    /// Overflow of `offset + len` is reported as out of bounds.
    pub(crate) fn check_range(offset: usize, len: usize, capacity: usize) -> Result<(), Self> {
        match offset.checked_add(len) {
            Some(end) if offset <= capacity && end <= capacity => Ok(()),
            _ => Err(Self::IndexOutOfBounds {
                offset,
                len,
                capacity,
            }),
        }
    }
}

#[cfg(feature = "std")]
impl From<CursorError> for std::io::Error {
    fn from(err: CursorError) -> Self {
        let kind = match err {
            CursorError::IndexOutOfBounds { .. } | CursorError::InvalidArgument(_) => {
                std::io::ErrorKind::InvalidInput
            }
            CursorError::Closed => std::io::ErrorKind::Other,
        };
        std::io::Error::new(kind, err)
    }
}
