//! UTF-16 code unit cursor with an open/closed lifecycle.
//!
//! [`CharCursor`] mirrors [`BufferCursor`](crate::BufferCursor) over 16-bit
//! code units, with three differences in contract:
//!
//! - every operation fails with [`CursorError::Closed`] after
//!   [`close`](CharCursor::close);
//! - [`skip`](CharCursor::skip) accepts negative counts and rewinds, stopping
//!   at the start of the content;
//! - a zero-length [`read_into`](CharCursor::read_into) always succeeds with
//!   `Some(0)`, even when the cursor is exhausted.
//!
//! Code units are returned as-is; surrogate pairs are not combined.

use alloc::{borrow::Cow, vec::Vec};

use crate::{error::CursorError, window::Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Open,
    Closed,
}

/// A mark/reset cursor over UTF-16 code units.
///
/// ```rust
/// use memcursor::CharCursor;
///
/// let mut cursor = CharCursor::from_str("hello");
/// let mut buf = [0u16; 3];
/// assert_eq!(cursor.read_into(&mut buf, 0, 3), Ok(Some(3)));
/// assert_eq!(String::from_utf16_lossy(&buf), "hel");
///
/// cursor.mark(0)?;
/// assert_eq!(cursor.read_unit()?, Some(u16::from(b'l')));
/// cursor.reset()?;
/// assert_eq!(cursor.read_unit()?, Some(u16::from(b'l')));
/// # Ok::<(), memcursor::CursorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CharCursor<'a> {
    content: Cow<'a, [u16]>,
    window: Window,
    state: Lifecycle,
}

impl<'a> CharCursor<'a> {
    /// Creates a cursor over borrowed code units.
    pub fn new(units: &'a [u16]) -> Self {
        Self::from_content(Cow::Borrowed(units))
    }

    fn from_content(content: Cow<'a, [u16]>) -> Self {
        Self {
            window: Window::new(0, content.len()),
            content,
            state: Lifecycle::Open,
        }
    }

    #[inline]
    fn ensure_open(&self) -> Result<(), CursorError> {
        match self.state {
            Lifecycle::Open => Ok(()),
            Lifecycle::Closed => Err(CursorError::Closed),
        }
    }

    /// Reads the next code unit, or `None` at the end of the content.
    ///
    /// # Errors
    ///
    /// [`CursorError::Closed`] after [`close`](Self::close).
    #[inline]
    pub fn read_unit(&mut self) -> Result<Option<u16>, CursorError> {
        self.ensure_open()?;
        Ok(self.window.take_one().map(|at| self.content[at]))
    }

    /// Copies up to `len` code units into `dest[offset..offset + len]`.
    ///
    /// A zero `len` returns `Ok(Some(0))` without looking at the cursor.
    /// Otherwise returns `Ok(None)` when exhausted, or the number of units
    /// copied, which may be less than `len`.
    ///
    /// # Errors
    ///
    /// [`CursorError::Closed`] after [`close`](Self::close), and
    /// [`CursorError::IndexOutOfBounds`] if the destination range does not
    /// fit in `dest`.
    pub fn read_into(
        &mut self,
        dest: &mut [u16],
        offset: usize,
        len: usize,
    ) -> Result<Option<usize>, CursorError> {
        self.ensure_open()?;
        CursorError::check_range(offset, len, dest.len())?;
        if len == 0 {
            return Ok(Some(0));
        }
        if self.window.is_exhausted() {
            return Ok(None);
        }
        let src = self.window.take(len);
        let n = src.len();
        dest[offset..offset + n].copy_from_slice(&self.content[src]);
        Ok(Some(n))
    }

    /// Fills as much of `dest` as the content allows.
    ///
    /// # Errors
    ///
    /// [`CursorError::Closed`] after [`close`](Self::close).
    pub fn read(&mut self, dest: &mut [u16]) -> Result<Option<usize>, CursorError> {
        let len = dest.len();
        self.read_into(dest, 0, len)
    }

    /// Moves by `n` code units and returns the signed distance moved.
    ///
    /// Forward moves stop at the end, backward moves stop at the start. An
    /// exhausted cursor does not move in either direction and returns 0.
    ///
    /// # Errors
    ///
    /// [`CursorError::Closed`] after [`close`](Self::close).
    pub fn skip(&mut self, n: i64) -> Result<i64, CursorError> {
        self.ensure_open()?;
        if self.window.is_exhausted() {
            return Ok(0);
        }
        Ok(self.window.skip_signed(n))
    }

    /// Always `true` while open; reads never block.
    ///
    /// # Errors
    ///
    /// [`CursorError::Closed`] after [`close`](Self::close).
    pub fn ready(&self) -> Result<bool, CursorError> {
        self.ensure_open()?;
        Ok(true)
    }

    /// Always `true`.
    pub fn mark_supported(&self) -> bool {
        true
    }

    /// Records the current position for a later [`reset`](Self::reset).
    ///
    /// The read-ahead hint only has to be non-negative; the mark never
    /// expires.
    ///
    /// # Errors
    ///
    /// [`CursorError::InvalidArgument`] for a negative hint (checked first),
    /// then [`CursorError::Closed`] after [`close`](Self::close).
    pub fn mark(&mut self, read_ahead_limit: isize) -> Result<(), CursorError> {
        if read_ahead_limit < 0 {
            log::trace!("rejected read-ahead limit {read_ahead_limit}");
            return Err(CursorError::InvalidArgument("read-ahead limit < 0"));
        }
        self.ensure_open()?;
        self.window.mark();
        Ok(())
    }

    /// Moves back to the last mark, or to the start if no mark was set.
    ///
    /// # Errors
    ///
    /// [`CursorError::Closed`] after [`close`](Self::close).
    pub fn reset(&mut self) -> Result<(), CursorError> {
        self.ensure_open()?;
        self.window.reset();
        Ok(())
    }

    /// Releases the content. Every later operation fails with
    /// [`CursorError::Closed`]; closing again is a no-op.
    pub fn close(&mut self) {
        if self.state == Lifecycle::Open {
            log::trace!(
                "closing char cursor at {}/{}",
                self.window.position(),
                self.window.limit()
            );
        }
        self.state = Lifecycle::Closed;
        self.content = Cow::Borrowed(&[]);
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.state == Lifecycle::Closed
    }
}

impl CharCursor<'static> {
    /// Creates a cursor over the UTF-16 encoding of `s`.
    ///
    /// The encoding is done once, up front; the cursor owns the result.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        Self::from_content(Cow::Owned(s.encode_utf16().collect::<Vec<_>>()))
    }
}

impl From<&str> for CharCursor<'static> {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl<'a> From<&'a [u16]> for CharCursor<'a> {
    fn from(units: &'a [u16]) -> Self {
        Self::new(units)
    }
}
