//! Byte cursor over a borrowed slice.
//!
//! [`BufferCursor`] reads a window `[offset, limit)` of a byte slice without
//! copying it. It is meant for decoding payloads that are already fully in
//! memory and owned by a single thread: there is no locking and, apart from
//! the bulk-read argument check, no validation on the read path.

use core::fmt;

use bstr::BStr;

use crate::{error::CursorError, window::Window};

/// A mark/reset cursor over a window of a borrowed byte slice.
///
/// ```rust
/// use memcursor::BufferCursor;
///
/// let data = [10, 20, 30, 40, 50];
/// let mut cursor = BufferCursor::with_window(&data, 1, 3);
/// assert_eq!(cursor.read_byte(), Some(20));
///
/// let mut dest = [0; 10];
/// assert_eq!(cursor.read_into(&mut dest, 0, 10), Ok(Some(2)));
/// assert_eq!(&dest[..2], &[30, 40]);
/// assert_eq!(cursor.read_byte(), None);
/// ```
#[derive(Clone)]
pub struct BufferCursor<'a> {
    data: &'a [u8],
    window: Window,
}

impl<'a> BufferCursor<'a> {
    /// Creates a cursor over all of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_window(buf, 0, buf.len())
    }

    /// Creates a cursor over `buf[offset..]`.
    pub fn with_offset(buf: &'a [u8], offset: usize) -> Self {
        Self::with_window(buf, offset, buf.len().saturating_sub(offset))
    }

    /// Creates a cursor over `length` bytes of `buf` starting at `offset`.
    ///
    /// The position and the mark both start at `offset`. A `length` that
    /// runs past the end of `buf` is shortened to fit. `offset` itself is
    /// not validated: an offset past the end yields an exhausted cursor.
    pub fn with_window(buf: &'a [u8], offset: usize, length: usize) -> Self {
        let requested = offset.saturating_add(length);
        let limit = requested.min(buf.len());
        if requested > limit {
            log::trace!("byte window {offset}+{length} clamped to limit {limit}");
        }
        Self {
            data: buf,
            window: Window::new(offset, limit),
        }
    }

    /// Reads the next byte, or returns `None` at the end of the window.
    #[inline]
    pub fn read_byte(&mut self) -> Option<u8> {
        self.window.take_one().map(|at| self.data[at])
    }

    /// Copies up to `len` bytes into `dest[offset..offset + len]`.
    ///
    /// Returns `Ok(None)` if the cursor was already exhausted, even when
    /// `len` is zero. Otherwise the request is shortened to the bytes that
    /// remain and the number copied is returned, which may be less than
    /// `len`.
    ///
    /// # Errors
    ///
    /// [`CursorError::IndexOutOfBounds`] if the destination range does not
    /// fit in `dest`. The cursor is left untouched.
    pub fn read_into(
        &mut self,
        dest: &mut [u8],
        offset: usize,
        len: usize,
    ) -> Result<Option<usize>, CursorError> {
        CursorError::check_range(offset, len, dest.len())?;
        if self.window.is_exhausted() {
            return Ok(None);
        }
        let src = self.window.take(len);
        let n = src.len();
        if n > 0 {
            dest[offset..offset + n].copy_from_slice(&self.data[src]);
        }
        Ok(Some(n))
    }

    /// Fills as much of `dest` as the window allows.
    ///
    /// Same as `read_into(dest, 0, dest.len())`, which cannot fail.
    pub fn read(&mut self, dest: &mut [u8]) -> Option<usize> {
        if self.window.is_exhausted() {
            return None;
        }
        let src = self.window.take(dest.len());
        let n = src.len();
        dest[..n].copy_from_slice(&self.data[src]);
        Some(n)
    }

    /// Advances past up to `n` bytes and returns how many were skipped.
    ///
    /// Zero and negative requests skip nothing.
    pub fn skip(&mut self, n: i64) -> i64 {
        self.window.skip_forward(n)
    }

    /// Bytes left between the position and the limit.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.window.remaining()
    }

    /// Always `true`.
    pub fn mark_supported(&self) -> bool {
        true
    }

    /// Records the current position for a later [`reset`](Self::reset).
    ///
    /// The read-ahead hint is accepted for parity with
    /// [`CharCursor::mark`](crate::CharCursor::mark) and ignored: a mark
    /// stays valid for the lifetime of the cursor.
    pub fn mark(&mut self, _read_ahead_limit: isize) {
        self.window.mark();
    }

    /// Moves the position back to the last mark, or to the starting offset
    /// if no mark was set.
    pub fn reset(&mut self) {
        self.window.reset();
    }

    /// Does nothing; the borrowed slice stays readable.
    pub fn close(&mut self) {}

    /// The current position as an index into the whole slice.
    #[inline]
    pub fn position(&self) -> usize {
        self.window.position()
    }

    /// Moves the position without any bounds check.
    ///
    /// Unlike the other mutators this does not validate its input. A
    /// position at or past the limit makes the cursor read as exhausted; a
    /// position before the starting offset re-exposes bytes outside the
    /// original window.
    #[inline]
    pub fn set_position(&mut self, position: usize) {
        self.window.set_position(position);
    }

    /// The exclusive upper bound of the readable window.
    #[inline]
    pub fn limit(&self) -> usize {
        self.window.limit()
    }

    /// Length of the whole backing slice, independent of the window.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The unread part of the window.
    pub fn unread(&self) -> &'a [u8] {
        match self.window.unread() {
            Some(range) => &self.data[range],
            None => &[],
        }
    }

    /// Yields the remaining bytes of the window, advancing the cursor as it
    /// goes. The cursor stays usable once the iterator is dropped.
    pub fn iter_bytes(&mut self) -> impl Iterator<Item = u8> + '_ {
        core::iter::from_fn(move || self.read_byte())
    }

    /// Advances past `n` bytes that the caller has already consumed through
    /// [`unread`](Self::unread). Clamped to the window.
    pub(crate) fn advance(&mut self, n: usize) {
        self.window.take(n);
    }
}

impl fmt::Debug for BufferCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferCursor")
            .field("window", &self.window)
            .field("size", &self.data.len())
            .field("unread", &BStr::new(self.unread()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec, vec::Vec};

    use rstest::rstest;

    use super::BufferCursor;
    use crate::CursorError;

    const DATA: [u8; 5] = [10, 20, 30, 40, 50];

    #[rstest]
    #[case(0, 5, 5)]
    #[case(1, 3, 4)]
    #[case(2, 100, 5)]
    #[case(5, 0, 5)]
    #[case(3, usize::MAX, 5)]
    fn window_limit(#[case] offset: usize, #[case] length: usize, #[case] limit: usize) {
        let cursor = BufferCursor::with_window(&DATA, offset, length);
        assert_eq!(cursor.limit(), limit);
        assert_eq!(cursor.position(), offset);
        assert_eq!(cursor.size(), DATA.len());
    }

    #[test]
    fn constructors_default_the_window() {
        let whole = BufferCursor::new(&DATA);
        assert_eq!((whole.position(), whole.limit()), (0, 5));

        let tail = BufferCursor::with_offset(&DATA, 2);
        assert_eq!((tail.position(), tail.limit()), (2, 5));
        assert_eq!(tail.remaining(), 3);
    }

    #[test]
    fn windowed_read_scenario() {
        let mut cursor = BufferCursor::with_window(&DATA, 1, 3);
        assert_eq!(cursor.limit(), 4);
        assert_eq!(cursor.position(), 1);

        assert_eq!(cursor.read_byte(), Some(20));
        assert_eq!(cursor.position(), 2);

        let mut dest = [0u8; 10];
        assert_eq!(cursor.read_into(&mut dest, 0, 10), Ok(Some(2)));
        assert_eq!(&dest[..2], &[30, 40]);
        assert_eq!(cursor.position(), 4);

        assert_eq!(cursor.read_byte(), None);
        assert_eq!(cursor.read_into(&mut dest, 0, 10), Ok(None));
    }

    #[test]
    fn read_byte_is_unsigned() {
        let data = [0xff, 0x80, 0x00];
        let mut cursor = BufferCursor::new(&data);
        assert_eq!(cursor.iter_bytes().collect::<Vec<_>>(), vec![255, 128, 0]);
    }

    #[test]
    fn read_byte_stays_exhausted() {
        let mut cursor = BufferCursor::with_window(&DATA, 3, 10);
        assert_eq!(cursor.read_byte(), Some(40));
        assert_eq!(cursor.read_byte(), Some(50));
        for _ in 0..3 {
            assert_eq!(cursor.read_byte(), None);
            assert_eq!(cursor.position(), 5);
        }
    }

    #[test]
    fn zero_length_read() {
        let mut cursor = BufferCursor::new(&DATA);
        let mut dest = [0u8; 2];
        assert_eq!(cursor.read_into(&mut dest, 0, 0), Ok(Some(0)));
        assert_eq!(cursor.read_into(&mut dest, 2, 0), Ok(Some(0)));
        assert_eq!(cursor.position(), 0);

        cursor.skip(5);
        assert_eq!(cursor.read_into(&mut dest, 0, 0), Ok(None));
    }

    #[test]
    fn read_into_offset() {
        let mut cursor = BufferCursor::new(&DATA);
        let mut dest = [0u8; 4];
        assert_eq!(cursor.read_into(&mut dest, 1, 2), Ok(Some(2)));
        assert_eq!(dest, [0, 10, 20, 0]);
    }

    #[rstest]
    #[case(0, 5)]
    #[case(3, 2)]
    #[case(5, 1)]
    #[case(usize::MAX, 1)]
    fn read_into_rejects_bad_range(#[case] offset: usize, #[case] len: usize) {
        let mut cursor = BufferCursor::new(&DATA);
        let mut dest = [0u8; 4];
        assert!(matches!(
            cursor.read_into(&mut dest, offset, len),
            Err(CursorError::IndexOutOfBounds { .. })
        ));
        assert_eq!(cursor.position(), 0);
        assert_eq!(dest, [0; 4]);
    }

    #[test]
    fn bad_range_checked_before_exhaustion() {
        let mut cursor = BufferCursor::with_offset(&DATA, 5);
        let mut dest = [0u8; 1];
        assert!(cursor.read_into(&mut dest, 0, 2).is_err());
    }

    #[test]
    fn read_fills_slice() {
        let mut cursor = BufferCursor::new(&DATA);
        let mut dest = [0u8; 3];
        assert_eq!(cursor.read(&mut dest), Some(3));
        assert_eq!(dest, [10, 20, 30]);
        assert_eq!(cursor.read(&mut dest), Some(2));
        assert_eq!(&dest[..2], &[40, 50]);
        assert_eq!(cursor.read(&mut dest), None);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(-3, 0)]
    #[case(2, 2)]
    #[case(4, 3)]
    fn skip_clamps(#[case] n: i64, #[case] skipped: i64) {
        let mut cursor = BufferCursor::with_window(&DATA, 1, 3);
        assert_eq!(cursor.skip(n), skipped);
        assert_eq!(cursor.position(), 1 + usize::try_from(skipped).unwrap());
        assert!(cursor.position() <= cursor.limit());
    }

    #[test]
    fn mark_and_reset() {
        let mut cursor = BufferCursor::with_offset(&DATA, 1);
        assert!(cursor.mark_supported());

        cursor.read_byte();
        cursor.reset();
        assert_eq!(cursor.position(), 1);

        cursor.read_byte();
        cursor.mark(0);
        let mut dest = [0u8; 8];
        cursor.read_into(&mut dest, 0, 8).unwrap();
        cursor.reset();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_byte(), Some(30));
    }

    #[test]
    fn mark_ignores_hint() {
        let mut cursor = BufferCursor::new(&DATA);
        cursor.skip(1);
        cursor.mark(-1);
        cursor.skip(3);
        cursor.reset();
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn close_is_noop() {
        let mut cursor = BufferCursor::new(&DATA);
        cursor.close();
        cursor.close();
        assert_eq!(cursor.read_byte(), Some(10));
        assert_eq!(cursor.size(), 5);
    }

    #[test]
    fn set_position_unchecked() {
        let mut cursor = BufferCursor::with_window(&DATA, 2, 2);
        cursor.set_position(0);
        assert_eq!(cursor.read_byte(), Some(10));

        cursor.set_position(9);
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.read_byte(), None);
        assert_eq!(cursor.skip(1), 0);
        assert_eq!(cursor.unread(), &[] as &[u8]);
    }

    #[test]
    fn empty_slice() {
        let mut cursor = BufferCursor::new(&[]);
        assert_eq!(cursor.size(), 0);
        assert_eq!(cursor.read_byte(), None);
        assert_eq!(cursor.read_into(&mut [], 0, 0), Ok(None));
    }

    #[test]
    fn iter_bytes_leaves_cursor_usable() {
        let mut cursor = BufferCursor::with_window(&DATA, 1, 3);
        assert_eq!(cursor.iter_bytes().take(2).collect::<Vec<_>>(), vec![20, 30]);
        assert_eq!(cursor.position(), 3);

        let skipped: i64 = cursor.skip(5i64);
        assert_eq!(skipped, 1);
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.iter_bytes().next(), None);
    }

    #[test]
    fn skip_on_owned_cursor_moves_it() {
        let mut cursor = BufferCursor::new(&DATA);
        assert_eq!(cursor.skip(2), 2);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_byte(), Some(30));
    }

    #[test]
    fn debug_shows_unread_bytes() {
        let mut cursor = BufferCursor::new(b"abcd");
        cursor.skip(1);
        assert_eq!(
            format!("{cursor:?}"),
            r#"BufferCursor { window: Window { position: 1, mark: 0, limit: 4 }, size: 4, unread: "bcd" }"#
        );
    }
}
