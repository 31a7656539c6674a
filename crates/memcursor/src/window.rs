//! Cursor state shared by [`BufferCursor`](crate::BufferCursor) and
//! [`CharCursor`](crate::CharCursor).
//!
//! A [`Window`] tracks three indices into a backing store:
//!
//! - `position`: the next unit to read.
//! - `mark`: the position restored by [`Window::reset`].
//! - `limit`: the exclusive upper bound of the readable range, which may be
//!   narrower than the backing store.
//!
//! All length arithmetic saturates, so a position that was set past `limit`
//! reads as an exhausted window instead of underflowing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    position: usize,
    mark: usize,
    limit: usize,
}

impl Window {
    /// A window starting (and marked) at `position`.
    pub(crate) fn new(position: usize, limit: usize) -> Self {
        Self {
            position,
            mark: position,
            limit,
        }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    #[inline]
    pub(crate) fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.position)
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.position >= self.limit
    }

    /// Shortens `len` to the number of units left in the window.
    #[inline]
    pub(crate) fn clamp(&self, len: usize) -> usize {
        len.min(self.remaining())
    }

    /// Returns the unread range `[position, limit)` if it is non-empty.
    #[inline]
    pub(crate) fn unread(&self) -> Option<core::ops::Range<usize>> {
        (!self.is_exhausted()).then_some(self.position..self.limit)
    }

    /// Takes the index of the next unit and steps past it.
    #[inline]
    pub(crate) fn take_one(&mut self) -> Option<usize> {
        if self.is_exhausted() {
            return None;
        }
        let at = self.position;
        self.position += 1;
        Some(at)
    }

    /// Claims up to `len` units, returning the claimed index range.
    #[inline]
    pub(crate) fn take(&mut self, len: usize) -> core::ops::Range<usize> {
        let n = self.clamp(len);
        let start = self.position;
        self.position += n;
        start..start + n
    }

    /// Forward-only skip: the request is clamped to the remaining units and
    /// anything non-positive is a no-op returning 0.
    pub(crate) fn skip_forward(&mut self, n: i64) -> i64 {
        let n = n.min(to_i64(self.remaining()));
        if n <= 0 {
            return 0;
        }
        self.shift(n);
        n
    }

    /// Signed skip: forward moves stop at `limit`, backward moves stop at 0.
    /// Returns the delta actually applied.
    pub(crate) fn skip_signed(&mut self, n: i64) -> i64 {
        let n = n
            .min(to_i64(self.remaining()))
            .max(-to_i64(self.position));
        self.shift(n);
        n
    }

    #[inline]
    pub(crate) fn mark(&mut self) {
        self.mark = self.position;
    }

    #[inline]
    pub(crate) fn reset(&mut self) {
        self.position = self.mark;
    }

    fn shift(&mut self, delta: i64) {
        let magnitude = usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX);
        self.position = if delta >= 0 {
            self.position.saturating_add(magnitude)
        } else {
            self.position.saturating_sub(magnitude)
        };
    }
}

#[inline]
fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
