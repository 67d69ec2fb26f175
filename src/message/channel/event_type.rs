use core::fmt;

use crate::{ParseError, StatusByte};
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The seven kinds of channel voice message, keyed by the high nibble of
their status byte.

# Example
```rust
# use midix_stream::prelude::*;
let status = StatusByte::new(0xE4).unwrap();
let event_type = EventType::from_status(status).unwrap();

assert_eq!(event_type, EventType::PitchBend);
assert_eq!(event_type.payload_len(), 2);
assert_eq!(u8::from(event_type), 0xE0);

let sysex = StatusByte::new(0xF0).unwrap();
assert_eq!(EventType::from_status(sysex), Err(ParseError::UnknownEvent(0xF0)));
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EventType {
    /// `0x8n`
    NoteOff = 0x80,
    /// `0x9n`
    NoteOn = 0x90,
    /// `0xAn`
    PolyphonicPressure = 0xA0,
    /// `0xBn`
    Controller = 0xB0,
    /// `0xCn`
    ProgramChange = 0xC0,
    /// `0xDn`
    ChannelPressure = 0xD0,
    /// `0xEn`
    PitchBend = 0xE0,
}

impl EventType {
    /// Identifies the event type of a status byte.
    ///
    /// # Errors
    /// if the high nibble is not a channel voice message (`0xF0`)
    pub fn from_status(status: StatusByte) -> Result<Self, ParseError> {
        Self::try_from(status.event_nibble()).map_err(|_| ParseError::UnknownEvent(status.byte()))
    }

    /// The number of data bytes following the status byte
    pub const fn payload_len(&self) -> usize {
        use EventType::*;
        match self {
            NoteOff | NoteOn | Controller | PitchBend => 2,
            PolyphonicPressure | ProgramChange | ChannelPressure => 1,
        }
    }

    /// The name events of this type are reported under
    pub const fn field_name(&self) -> &'static str {
        use EventType::*;
        match self {
            NoteOff => "NoteOff",
            NoteOn => "NoteOn",
            PolyphonicPressure => "PolyphonicPressure",
            Controller => "Controller",
            ProgramChange => "ProgramChange",
            ChannelPressure => "ChannelPressure",
            PitchBend => "PitchBend",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
