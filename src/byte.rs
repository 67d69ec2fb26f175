use core::fmt;

use crate::ParseError;

#[doc = r#"
A byte with a leading `0` bit.

Data bytes carry the 7-bit values of a MIDI message: note numbers,
velocities, controller numbers and so on.
"#]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataByte(pub(crate) u8);

impl DataByte {
    /// Create a new data byte.
    ///
    /// # Errors
    /// if the leading bit of `byte` is set
    pub const fn new(byte: u8) -> Result<Self, ParseError> {
        if byte > 0x7F {
            return Err(ParseError::InvalidDataByte(byte));
        }
        Ok(Self(byte))
    }

    /// Create a data byte by dropping the leading bit of `byte`
    pub const fn new_masked(byte: u8) -> Self {
        Self(byte & 0x7F)
    }

    /// The 7-bit value
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DataByte {
    type Error = ParseError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DataByte> for u8 {
    fn from(value: DataByte) -> Self {
        value.0
    }
}

#[doc = r#"
A byte with a leading `1` bit.

The high nibble identifies the kind of message, and for channel messages
the low nibble identifies the channel.

# Example
```rust
# use midix_stream::prelude::*;
let status = StatusByte::new(0x93).unwrap();
assert_eq!(status.event_nibble(), 0x90);
assert_eq!(status.channel_nibble(), 3);

assert!(StatusByte::new(0x3C).is_err());
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusByte(u8);

impl StatusByte {
    /// Create a new status byte.
    ///
    /// # Errors
    /// if the leading bit of `byte` is not set
    pub const fn new(byte: u8) -> Result<Self, ParseError> {
        if byte < 0x80 {
            return Err(ParseError::InvalidStatusByte(byte));
        }
        Ok(Self(byte))
    }

    /// Create a status byte by setting the leading bit of `byte`
    pub const fn new_masked(byte: u8) -> Self {
        Self(byte | 0x80)
    }

    /// The raw byte
    pub const fn byte(&self) -> u8 {
        self.0
    }

    /// `status & 0xF0`
    pub const fn event_nibble(&self) -> u8 {
        self.0 & 0xF0
    }

    /// `status & 0x0F`
    pub const fn channel_nibble(&self) -> u8 {
        self.0 & 0x0F
    }
}

impl TryFrom<u8> for StatusByte {
    type Error = ParseError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StatusByte> for u8 {
    fn from(value: StatusByte) -> Self {
        value.0
    }
}

impl fmt::Display for StatusByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

#[test]
fn data_byte_rejects_leading_bit() {
    use pretty_assertions::assert_eq;
    assert_eq!(DataByte::new(0x7F).map(|b| b.value()), Ok(0x7F));
    assert_eq!(DataByte::new(0x80), Err(ParseError::InvalidDataByte(0x80)));
    assert_eq!(DataByte::new_masked(0xC0).value(), 0x40);
}

#[test]
fn status_byte_nibbles() {
    use pretty_assertions::assert_eq;
    let status = StatusByte::new(0xEF).unwrap();
    assert_eq!(status.event_nibble(), 0xE0);
    assert_eq!(status.channel_nibble(), 0x0F);
    assert_eq!(StatusByte::new(0x7F), Err(ParseError::InvalidStatusByte(0x7F)));
}
