#![doc = r#"
A forward-only byte cursor over the body of a MIDI track.

The [`Reader`] never rewinds. Decoders peek at most one byte ahead and
otherwise consume exactly the bytes that belong to the event being read.
"#]

mod error;
pub use error::*;

mod varlen;
pub use varlen::*;

use alloc::borrow::Cow;

#[doc = r#"
A forward-only cursor over a set of bytes.

# Example
```rust
# use midix_stream::prelude::*;
let mut reader = Reader::from_byte_slice(&[0x90, 0x3C, 0x64]);

assert_eq!(reader.peek_next(), Some(0x90));
assert_eq!(reader.read_next().unwrap(), 0x90);
assert_eq!(reader.read_exact_size::<2>().unwrap(), [0x3C, 0x64]);
assert!(reader.is_empty());
assert!(reader.read_next().unwrap_err().is_out_of_bounds());
```
"#]
#[derive(Debug, Clone)]
pub struct Reader<'slc> {
    data: Cow<'slc, [u8]>,
    position: usize,
    last_error_offset: Option<usize>,
}

impl<'slc> Reader<'slc> {
    /// Create a reader over owned or borrowed bytes
    pub fn from_bytes<B>(bytes: B) -> Self
    where
        B: Into<Cow<'slc, [u8]>>,
    {
        Self {
            data: bytes.into(),
            position: 0,
            last_error_offset: None,
        }
    }

    /// Create a reader over a borrowed slice
    pub const fn from_byte_slice(bytes: &'slc [u8]) -> Self {
        Self {
            data: Cow::Borrowed(bytes),
            position: 0,
            last_error_offset: None,
        }
    }

    /// The offset of the next byte to be read
    #[inline]
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// The number of unread bytes
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// True if every byte has been read
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unread bytes
    pub fn unread(&self) -> &[u8] {
        self.data.get(self.position..).unwrap_or_default()
    }

    /// The offset at which the last error was produced, if any
    pub const fn last_error_offset(&self) -> Option<usize> {
        self.last_error_offset
    }

    pub(crate) const fn set_last_error_offset(&mut self, offset: usize) {
        self.last_error_offset = Some(offset);
    }

    /// Returns the next byte without consuming it
    #[inline]
    pub fn peek_next(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    /// Consumes and returns the next byte
    ///
    /// # Errors
    /// if no bytes remain
    pub fn read_next(&mut self) -> ReadResult<u8> {
        let Some(byte) = self.peek_next() else {
            return Err(oob(self));
        };
        self.position += 1;
        Ok(byte)
    }

    /// Consumes exactly `SIZE` bytes.
    ///
    /// # Errors
    /// if fewer than `SIZE` bytes remain. Nothing is consumed in that case.
    pub fn read_exact_size<const SIZE: usize>(&mut self) -> ReadResult<[u8; SIZE]> {
        let end = self.position + SIZE;
        let Some(bytes) = self.data.get(self.position..end) else {
            return Err(oob(self));
        };
        let mut out = [0; SIZE];
        out.copy_from_slice(bytes);
        self.position = end;
        Ok(out)
    }

    /// Consumes `len` bytes without inspecting them.
    ///
    /// # Errors
    /// if fewer than `len` bytes remain. Nothing is consumed in that case.
    pub fn skip(&mut self, len: usize) -> ReadResult<()> {
        if self.remaining() < len {
            return Err(oob(self));
        }
        self.position += len;
        Ok(())
    }
}

#[test]
fn read_exact_size_leaves_cursor_on_failure() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_byte_slice(&[0x01, 0x02, 0x03]);
    reader.skip(2).unwrap();

    let err = reader.read_exact_size::<2>().unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.position(), 2);
    assert_eq!(reader.buffer_position(), 2);
    assert_eq!(reader.last_error_offset(), Some(2));
    assert_eq!(reader.unread(), &[0x03]);
}

#[test]
fn owned_bytes() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_bytes(alloc::vec![0xB0, 0x07]);
    assert_eq!(reader.remaining(), 2);
    assert_eq!(reader.read_next().unwrap(), 0xB0);
    assert_eq!(reader.remaining(), 1);
}
