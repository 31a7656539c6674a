//! Unsynchronized mark/reset cursors over in-memory data.
//!
//! - [`BufferCursor`] reads bytes from a window of a borrowed slice.
//! - [`CharCursor`] reads UTF-16 code units and can be closed.
//!
//! Both are single-owner decoding cursors for input that is already fully
//! materialized. Reading past the end is not an error: single-unit reads
//! return `None` and bulk reads return a short count.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer_cursor;
mod char_cursor;
mod error;
#[cfg(feature = "std")]
mod io;
mod window;


pub use buffer_cursor::BufferCursor;
pub use char_cursor::CharCursor;
pub use error::CursorError;
