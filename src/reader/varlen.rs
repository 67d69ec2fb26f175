use super::{ReadResult, Reader, inv_data};
use crate::ParseError;
use alloc::vec::Vec;

impl Reader<'_> {
    /// Reads a variable-length quantity, most significant group first.
    ///
    /// Each byte contributes its low 7 bits. A set leading bit means
    /// another byte follows.
    ///
    /// # Errors
    /// - out of bounds if the stream ends before a byte with a clear leading bit
    /// - [`ParseError::DeltaTimeOverflow`] if the quantity does not fit in 64 bits.
    ///   The error position is the byte that would overflow.
    ///
    /// # Example
    /// ```rust
    /// # use midix_stream::prelude::*;
    /// let mut reader = Reader::from_byte_slice(&[0x81, 0x80, 0x00, 0x90]);
    /// assert_eq!(reader.read_varlen().unwrap(), 0x4000);
    /// assert_eq!(reader.buffer_position(), 3);
    /// ```
    pub fn read_varlen(&mut self) -> ReadResult<u64> {
        let start = self.buffer_position();
        let mut value: u64 = 0;
        loop {
            if value >> 57 != 0 {
                return Err(inv_data(self, ParseError::DeltaTimeOverflow { start }));
            }
            let byte = self.read_next()?;
            value = (value << 7) | u64::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
    }
}

/// Appends the shortest variable-length encoding of `value` to `out`.
///
/// # Example
/// ```rust
/// # use midix_stream::prelude::*;
/// let mut out = Vec::new();
/// write_varlen(0x0FFF_FFFF, &mut out);
/// assert_eq!(out, [0xFF, 0xFF, 0xFF, 0x7F]);
/// ```
pub fn write_varlen(value: u64, out: &mut Vec<u8>) {
    let groups = (u64::BITS - value.leading_zeros()).div_ceil(7).max(1);
    for group in (1..groups).rev() {
        out.push(((value >> (group * 7)) & 0x7F) as u8 | 0x80);
    }
    out.push((value & 0x7F) as u8);
}

#[test]
fn standard_quantities() {
    use pretty_assertions::assert_eq;
    // table from the SMF 1.0 document
    let table: &[(u64, &[u8])] = &[
        (0x00, &[0x00]),
        (0x40, &[0x40]),
        (0x7F, &[0x7F]),
        (0x80, &[0x81, 0x00]),
        (0x2000, &[0xC0, 0x00]),
        (0x3FFF, &[0xFF, 0x7F]),
        (0x4000, &[0x81, 0x80, 0x00]),
        (0x10_0000, &[0xC0, 0x80, 0x00]),
        (0x1F_FFFF, &[0xFF, 0xFF, 0x7F]),
        (0x20_0000, &[0x81, 0x80, 0x80, 0x00]),
        (0x800_0000, &[0xC0, 0x80, 0x80, 0x00]),
        (0xFFF_FFFF, &[0xFF, 0xFF, 0xFF, 0x7F]),
    ];

    for (value, bytes) in table {
        let mut reader = Reader::from_byte_slice(bytes);
        assert_eq!(reader.read_varlen().unwrap(), *value);
        assert!(reader.is_empty());

        let mut out = Vec::new();
        write_varlen(*value, &mut out);
        assert_eq!(&out, bytes);
    }
}

#[test]
fn truncated_varlen() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_byte_slice(&[0x81, 0x80]);
    let err = reader.read_varlen().unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.position(), 2);
}

#[test]
fn u64_max_fits_ten_groups() {
    use pretty_assertions::assert_eq;
    let mut out = Vec::new();
    write_varlen(u64::MAX, &mut out);
    assert_eq!(out.len(), 10);
    assert_eq!(Reader::from_byte_slice(&out).read_varlen().unwrap(), u64::MAX);
}

#[test]
fn varlen_wider_than_64_bits() {
    use pretty_assertions::assert_eq;
    // 2^71, shortest form
    let mut bytes = alloc::vec![0x82];
    bytes.extend([0x80; 9]);
    bytes.extend([0x00, 0x90, 0x3C, 0x64]);
    let mut reader = Reader::from_byte_slice(&bytes);
    let err = reader.read_varlen().unwrap_err();
    assert_eq!(
        err.parse_error_kind(),
        Some(&ParseError::DeltaTimeOverflow { start: 0 })
    );
    assert_eq!(err.position(), 9);

    // ten groups, but the top group needs more than one bit
    let mut bytes = alloc::vec![0xFF; 9];
    bytes.push(0x7F);
    let err = Reader::from_byte_slice(&bytes).read_varlen().unwrap_err();
    assert_eq!(
        err.parse_error_kind(),
        Some(&ParseError::DeltaTimeOverflow { start: 0 })
    );
}
