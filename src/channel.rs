#![doc = r#"
The sixteen MIDI channels
"#]

use core::fmt;

use crate::StatusByte;
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
Identifies a MIDI channel.

Channels are numbered one through sixteen for display, and zero through
fifteen on the wire (the low nibble of the status byte).

# Example
```rust
# use midix_stream::prelude::*;
let status = StatusByte::new(0xB9).unwrap();
let channel = Channel::from_status(status);

assert_eq!(channel, Channel::Ten);
assert_eq!(channel.index(), 9);
assert_eq!(Channel::try_from(9u8).unwrap(), Channel::Ten);
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Channel {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// Identifies the channel from the low nibble of a byte. The high nibble is ignored.
    pub const fn from_nibble(byte: u8) -> Self {
        use Channel::*;
        match byte & 0x0F {
            0 => One,
            1 => Two,
            2 => Three,
            3 => Four,
            4 => Five,
            5 => Six,
            6 => Seven,
            7 => Eight,
            8 => Nine,
            9 => Ten,
            10 => Eleven,
            11 => Twelve,
            12 => Thirteen,
            13 => Fourteen,
            14 => Fifteen,
            _ => Sixteen,
        }
    }

    /// The channel addressed by a status byte
    pub const fn from_status(status: StatusByte) -> Self {
        Self::from_nibble(status.channel_nibble())
    }

    /// The wire value, `0..=15`
    pub const fn index(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

#[test]
fn every_nibble_round_trips() {
    use pretty_assertions::assert_eq;
    for nibble in 0..16u8 {
        let channel = Channel::from_nibble(0x90 | nibble);
        assert_eq!(channel.index(), nibble);
        assert_eq!(u8::from(channel), nibble);
    }
    assert!(Channel::try_from(16u8).is_err());
}
