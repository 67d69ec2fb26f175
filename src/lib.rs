#![doc = r#"
A forward-only decoder for MIDI channel voice event streams.

`midix-stream` reads one time-tagged event at a time from the body of a MIDI track:
the variable-length delta-time, the status byte (or the running status it implies),
and the fixed-size payload of one of the seven channel voice messages.

Each decoded event is both returned as a typed [`Ticked<ChannelVoiceMessage>`](prelude::Ticked)
and reported, field by field, into a [`FieldSink`](prelude::FieldSink) with
human-readable labels drawn from a [`SymbolTable`](prelude::SymbolTable).

# Example
```rust
use midix_stream::prelude::*;

let bytes = [0x00, 0x90, 0x3C, 0x64, 0x60, 0x3C, 0x00];
let mut reader = Reader::from_byte_slice(&bytes);
let mut context = DecoderContext::new();
let mut tree = FieldTree::default();

let first = decode_event(&mut reader, &mut context, &GeneralMidi, &mut tree).unwrap();
assert_eq!(first.tick(), 0);

// running status: the second event omits its status byte
let second = decode_event(&mut reader, &mut context, &GeneralMidi, &mut tree).unwrap();
assert_eq!(second.delta(), 0x60);
assert!(matches!(second.event().event(), VoiceEvent::NoteOn { velocity: 0, .. }));

assert_eq!(tree.get(&["NoteOn", "note"]).and_then(Node::label), Some("C4"));
```

# Features
- `std` (default): implements `std::error::Error` for the error types.
- `serde`: serialization for decoded events and the [`FieldTree`](prelude::FieldTree).
- `tracing`: diagnostic logging while decoding.
"#]
#![warn(missing_docs)]
#![warn(clippy::print_stdout)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod byte;
pub use byte::*;

mod error;
pub use error::*;

mod context;
pub use context::*;

pub mod channel;

pub mod decoder;

pub mod message;

mod note;
pub use note::*;

pub mod reader;

pub mod sink;

pub mod symbols;

#[doc = r#"
Common re-exports when working with `midix-stream`
"#]
pub mod prelude {
    pub use crate::{
        byte::*,
        channel::Channel,
        context::*,
        decoder::{Events, StreamDecoder, decode_event},
        error::*,
        message::{ChannelVoiceMessage, EventType, PitchBend, Ticked, VoiceEvent},
        note::*,
        reader::{ReadResult, Reader, ReaderError, ReaderErrorKind, write_varlen},
        sink::{FieldSink, FieldTree, Node, NullSink},
        symbols::{GeneralMidi, SymbolTable, Unlabeled},
    };
}
