//! `std::io` adapters.
//!
//! [`BufferCursor`] already holds its whole input in memory, so `BufRead`
//! hands out the unread window directly and `Read` is a plain copy.

use std::io;

use crate::BufferCursor;

impl io::Read for BufferCursor<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // `io::Read` signals end of stream with `Ok(0)`.
        Ok(BufferCursor::read(self, buf).unwrap_or(0))
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        if buf.len() > self.remaining() {
            self.advance(buf.len());
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        BufferCursor::read(self, buf);
        Ok(())
    }
}

impl io::BufRead for BufferCursor<'_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.unread())
    }

    fn consume(&mut self, amt: usize) {
        self.advance(amt);
    }
}
