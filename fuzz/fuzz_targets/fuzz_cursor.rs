#![no_main]
use std::io::{Cursor, Read, Seek, SeekFrom};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use memcursor::{BufferCursor, CharCursor, CursorError};

#[derive(Debug, Arbitrary)]
enum Op {
    ReadOne,
    ReadInto { capacity: u8, offset: u8, len: u8 },
    Skip(i8),
    Mark(i8),
    Reset,
    Close,
}

#[derive(Debug, Arbitrary)]
struct Input {
    data: Vec<u8>,
    offset: u8,
    length: u16,
    ops: Vec<Op>,
}

/// Drives a `BufferCursor` alongside `std::io::Cursor` over the same window.
fn bytes(input: &Input) {
    let data = &input.data;
    let offset = usize::from(input.offset).min(data.len());
    let mut cursor = BufferCursor::with_window(data, offset, usize::from(input.length));
    let limit = cursor.limit();
    assert!(limit <= data.len());

    let mut model = Cursor::new(&data[offset..limit]);
    let mut model_mark = 0u64;

    for op in &input.ops {
        match *op {
            Op::ReadOne => {
                let mut one = [0u8; 1];
                let expected = (model.read(&mut one).unwrap() == 1).then_some(one[0]);
                assert_eq!(cursor.read_byte(), expected);
            }
            Op::ReadInto {
                capacity,
                offset,
                len,
            } => {
                let (capacity, offset, len) =
                    (usize::from(capacity), usize::from(offset), usize::from(len));
                let mut dest = vec![0u8; capacity];
                match cursor.read_into(&mut dest, offset, len) {
                    Err(CursorError::IndexOutOfBounds { .. }) => {
                        assert!(offset > capacity || len > capacity - offset);
                    }
                    Err(err) => panic!("unexpected {err}"),
                    Ok(None) => assert_eq!(model.position() as usize, model.get_ref().len()),
                    Ok(Some(n)) => {
                        let mut expected = vec![0u8; len];
                        let m = model.read(&mut expected).unwrap();
                        assert_eq!(n, m);
                        assert_eq!(&dest[offset..offset + n], &expected[..m]);
                    }
                }
            }
            Op::Skip(n) => {
                let skipped = cursor.skip(i64::from(n));
                assert!(skipped >= 0);
                let before = model.position();
                let room = model.get_ref().len() as u64 - before;
                let want = u64::try_from(i64::from(n).max(0)).unwrap().min(room);
                model.seek(SeekFrom::Current(want as i64)).unwrap();
                assert_eq!(skipped as u64, want);
            }
            Op::Mark(hint) => {
                cursor.mark(isize::from(hint));
                model_mark = model.position();
            }
            Op::Reset => {
                cursor.reset();
                model.set_position(model_mark);
            }
            Op::Close => cursor.close(),
        }
        assert!(cursor.position() <= limit);
        assert_eq!(cursor.position() as u64, offset as u64 + model.position());
        assert_eq!(cursor.remaining(), limit - cursor.position());
    }
}

/// Drives a `CharCursor` and checks its bounds and lifecycle invariants.
fn chars(input: &Input) {
    let units: Vec<u16> = String::from_utf8_lossy(&input.data).encode_utf16().collect();
    let mut cursor = CharCursor::new(&units);
    let mut closed = false;
    // Net units moved; only tracked until the first reset.
    let mut moved: Option<i64> = Some(0);

    for op in &input.ops {
        let result = match *op {
            Op::ReadOne => cursor
                .read_unit()
                .map(|u| advance(&mut moved, i64::from(u.is_some()))),
            Op::ReadInto {
                capacity,
                offset,
                len,
            } => {
                let mut dest = vec![0u16; usize::from(capacity)];
                cursor
                    .read_into(&mut dest, usize::from(offset), usize::from(len))
                    .map(|n| advance(&mut moved, n.unwrap_or(0) as i64))
            }
            Op::Skip(n) => cursor.skip(i64::from(n)).map(|d| advance(&mut moved, d)),
            Op::Mark(hint) => cursor.mark(isize::from(hint)),
            Op::Reset => cursor.reset().map(|()| moved = None),
            Op::Close => {
                cursor.close();
                closed = true;
                Ok(())
            }
        };
        if closed {
            assert!(matches!(
                result,
                Err(CursorError::Closed | CursorError::InvalidArgument(_)) | Ok(())
            ));
            assert_eq!(cursor.read_unit(), Err(CursorError::Closed));
        }
        if let Some(moved) = moved {
            assert!((0..=units.len() as i64).contains(&moved));
        }
    }
}

fn advance(moved: &mut Option<i64>, delta: i64) {
    if let Some(m) = moved {
        *m += delta;
    }
}

fuzz_target!(|input: Input| {
    bytes(&input);
    chars(&input);
});
