#![doc = r#"
Display names for the numbers found in a channel voice stream.

Labels are purely informational. Decoding never depends on whether a
table has a name for a value: a missing label means the raw number is
shown instead.
"#]

mod controller;
pub use controller::*;

use crate::{Note, message::EventType};
use alloc::{borrow::Cow, string::ToString};

#[doc = r#"
Maps numeric codes to display strings.

Implement this to supply your own naming, e.g. a drum map for channel ten
or a vendor's controller assignments.

# Example
```rust
# use midix_stream::prelude::*;
# use std::borrow::Cow;
struct Drums;

impl SymbolTable for Drums {
    fn event_name(&self, code: u8) -> Option<Cow<'static, str>> {
        GeneralMidi.event_name(code)
    }
    fn note_name(&self, note: u8) -> Option<Cow<'static, str>> {
        match note {
            36 => Some("Bass Drum 1".into()),
            38 => Some("Acoustic Snare".into()),
            _ => None,
        }
    }
    fn controller_name(&self, _controller: u8) -> Option<Cow<'static, str>> {
        None
    }
}

assert_eq!(Drums.note_name(36).as_deref(), Some("Bass Drum 1"));
```
"#]
pub trait SymbolTable {
    /// The name of an event type, keyed by the high nibble of its status byte (`0x80`..`0xE0`)
    fn event_name(&self, code: u8) -> Option<Cow<'static, str>>;
    /// The name of a note number
    fn note_name(&self, note: u8) -> Option<Cow<'static, str>>;
    /// The name of a controller number
    fn controller_name(&self, controller: u8) -> Option<Cow<'static, str>>;
}

impl<T: SymbolTable + ?Sized> SymbolTable for &T {
    fn event_name(&self, code: u8) -> Option<Cow<'static, str>> {
        (**self).event_name(code)
    }
    fn note_name(&self, note: u8) -> Option<Cow<'static, str>> {
        (**self).note_name(note)
    }
    fn controller_name(&self, controller: u8) -> Option<Cow<'static, str>> {
        (**self).controller_name(controller)
    }
}

#[doc = r#"
The standard names: lowercase event names, notes in scientific pitch
notation (`60` is `C4`), and the MIDI 1.0 controller assignments.

# Example
```rust
# use midix_stream::prelude::*;
assert_eq!(GeneralMidi.event_name(0x90).as_deref(), Some("note on"));
assert_eq!(GeneralMidi.note_name(60).as_deref(), Some("C4"));
assert_eq!(GeneralMidi.controller_name(7).as_deref(), Some("Channel Volume"));
assert_eq!(GeneralMidi.controller_name(3), None);
```
"#]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralMidi;

impl SymbolTable for GeneralMidi {
    fn event_name(&self, code: u8) -> Option<Cow<'static, str>> {
        use EventType::*;
        let name = match EventType::try_from(code).ok()? {
            NoteOff => "note off",
            NoteOn => "note on",
            PolyphonicPressure => "polyphonic pressure",
            Controller => "controller",
            ProgramChange => "program change",
            ChannelPressure => "channel pressure",
            PitchBend => "pitch bend",
        };
        Some(Cow::Borrowed(name))
    }

    fn note_name(&self, note: u8) -> Option<Cow<'static, str>> {
        let note = Note::from_databyte(note).ok()?;
        Some(Cow::Owned(note.to_string()))
    }

    fn controller_name(&self, controller: u8) -> Option<Cow<'static, str>> {
        controller_name(controller)
    }
}

/// Labels nothing. Every field is shown as its raw number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unlabeled;

impl SymbolTable for Unlabeled {
    fn event_name(&self, _code: u8) -> Option<Cow<'static, str>> {
        None
    }
    fn note_name(&self, _note: u8) -> Option<Cow<'static, str>> {
        None
    }
    fn controller_name(&self, _controller: u8) -> Option<Cow<'static, str>> {
        None
    }
}

#[test]
fn out_of_range_values_are_unlabeled() {
    use pretty_assertions::assert_eq;
    assert_eq!(GeneralMidi.note_name(128), None);
    assert_eq!(GeneralMidi.event_name(0xF0), None);
    assert_eq!(GeneralMidi.event_name(0x93), None);
    assert_eq!(GeneralMidi.controller_name(200), None);
}
