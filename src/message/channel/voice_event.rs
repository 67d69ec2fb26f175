use core::fmt;

use super::EventType;
use crate::DataByte;

#[doc = r#"
The payload of a channel voice message.

Values are kept exactly as they appeared in the stream. Apart from
[`PitchBend`], nothing here is masked to 7 bits.
"#]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceEvent {
    /// Release a note
    NoteOff {
        /// The note number
        note: u8,
        /// The release velocity
        velocity: u8,
    },
    /// Press a note
    NoteOn {
        /// The note number
        note: u8,
        /// The press velocity. Zero is commonly treated as a release.
        velocity: u8,
    },
    /// Pressure applied after a note was pressed
    PolyphonicPressure {
        /// The pressure amount
        pressure: u8,
    },
    /// A control change
    Controller {
        /// The controller number
        controller: u8,
        /// The new value
        value: u8,
    },
    /// Select an instrument
    ProgramChange {
        /// The program number
        program: u8,
    },
    /// Pressure applied to the whole channel
    ChannelPressure {
        /// The pressure amount
        pressure: u8,
    },
    /// Bend the pitch of the channel
    PitchBend(PitchBend),
}

impl VoiceEvent {
    /// The kind of event
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::NoteOff { .. } => EventType::NoteOff,
            Self::NoteOn { .. } => EventType::NoteOn,
            Self::PolyphonicPressure { .. } => EventType::PolyphonicPressure,
            Self::Controller { .. } => EventType::Controller,
            Self::ProgramChange { .. } => EventType::ProgramChange,
            Self::ChannelPressure { .. } => EventType::ChannelPressure,
            Self::PitchBend(_) => EventType::PitchBend,
        }
    }

    /// The note number, for note on and note off events
    pub const fn note(&self) -> Option<u8> {
        match self {
            Self::NoteOff { note, .. } | Self::NoteOn { note, .. } => Some(*note),
            _ => None,
        }
    }

    /// True for a note on with non-zero velocity
    pub const fn is_note_on(&self) -> bool {
        matches!(self, Self::NoteOn { velocity, .. } if *velocity != 0)
    }

    /// True for a note off, or a note on with zero velocity
    pub const fn is_note_off(&self) -> bool {
        matches!(
            self,
            Self::NoteOff { .. } | Self::NoteOn { velocity: 0, .. }
        )
    }
}

impl fmt::Display for VoiceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoteOff { note, velocity } => write!(f, "note off {note} velocity {velocity}"),
            Self::NoteOn { note, velocity } => write!(f, "note on {note} velocity {velocity}"),
            Self::PolyphonicPressure { pressure } => write!(f, "polyphonic pressure {pressure}"),
            Self::Controller { controller, value } => {
                write!(f, "controller {controller} = {value}")
            }
            Self::ProgramChange { program } => write!(f, "program change {program}"),
            Self::ChannelPressure { pressure } => write!(f, "channel pressure {pressure}"),
            Self::PitchBend(bend) => write!(f, "pitch bend {}", bend.value()),
        }
    }
}

#[doc = r#"
A 14-bit pitch bend amount.

The first data byte on the wire carries the low 7 bits, the second the
high 7 bits. `8192` is the center (no bend).

# Example
```rust
# use midix_stream::prelude::*;
let bend = PitchBend::from_data_bytes(0x00, 0x40);
assert_eq!(bend.value(), 8192);
assert_eq!(bend.offset(), 0);

let down = PitchBend::from_data_bytes(0x00, 0x00);
assert_eq!(down.offset(), -8192);
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchBend(u16);

impl PitchBend {
    /// No bend
    pub const CENTER: Self = Self(0x2000);
    /// The largest bend amount
    pub const MAX: u16 = 0x3FFF;

    /// Reconstruct the 14-bit value from the two data bytes, in stream order.
    /// The leading bit of each byte is dropped.
    pub const fn from_data_bytes(lsb: u8, msb: u8) -> Self {
        let lsb = DataByte::new_masked(lsb).value() as u16;
        let msb = DataByte::new_masked(msb).value() as u16;
        Self((msb << 7) | lsb)
    }

    /// Create a pitch bend from a 14-bit value. Larger values are clamped.
    pub const fn new(value: u16) -> Self {
        if value > Self::MAX {
            return Self(Self::MAX);
        }
        Self(value)
    }

    /// The 14-bit value, `0..=16383`
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// The signed distance from [`PitchBend::CENTER`], `-8192..=8191`
    pub const fn offset(&self) -> i16 {
        self.0 as i16 - Self::CENTER.0 as i16
    }

    /// The data bytes in stream order
    pub const fn to_data_bytes(&self) -> [u8; 2] {
        [(self.0 & 0x7F) as u8, (self.0 >> 7) as u8]
    }
}

#[test]
fn pitch_bend_extremes() {
    use pretty_assertions::assert_eq;
    assert_eq!(PitchBend::from_data_bytes(0x7F, 0x7F).value(), PitchBend::MAX);
    assert_eq!(PitchBend::from_data_bytes(0x7F, 0x7F).offset(), 8191);
    assert_eq!(PitchBend::from_data_bytes(0xFF, 0xFF).value(), PitchBend::MAX);
    assert_eq!(PitchBend::new(0x2000), PitchBend::CENTER);
    assert_eq!(PitchBend::new(0x3FFF).to_data_bytes(), [0x7F, 0x7F]);
}

#[test]
fn zero_velocity_note_on_is_a_release() {
    let event = VoiceEvent::NoteOn {
        note: 60,
        velocity: 0,
    };
    assert!(event.is_note_off());
    assert!(!event.is_note_on());
}
