#![doc = r#"
Decoding channel voice events, one at a time.

[`decode_event`] is the building block: the caller owns the [`Reader`] and
the [`DecoderContext`] and threads them through every call.
[`StreamDecoder`] bundles the two with a [`SymbolTable`] for the common
case of decoding a whole track body.
"#]

mod payload;

use core::iter::FusedIterator;

use alloc::borrow::Cow;

use crate::{
    DecoderContext, StatusByte,
    channel::Channel,
    message::{ChannelVoiceMessage, EventType, Ticked},
    reader::{ReadResult, Reader, inv_data},
    sink::{FieldSink, NullSink},
    symbols::{GeneralMidi, SymbolTable},
};

#[doc = r#"
Decodes one event: its delta-time, its status, and its payload.

The fields are reported into `sink` under a struct named after the event
type (e.g. `NoteOn`), and the decoded event is returned.

The context's accumulated tick is advanced by the delta-time as soon as it
is read, so it stays advanced even if the rest of the event is malformed.
Any error ends the event; nothing partially decoded is returned.

# Errors
- out of bounds if the stream ends inside the delta-time or before the status
- [`ParseError::DeltaTimeOverflow`](crate::ParseError::DeltaTimeOverflow) if
  the delta-time does not fit in 64 bits
- [`ParseError::UndefinedRunningStatus`](crate::ParseError::UndefinedRunningStatus)
  if a data byte comes first and no status has been seen
- [`ParseError::UnknownEvent`](crate::ParseError::UnknownEvent) for status
  bytes that are not channel voice messages (`0xF0..=0xFF`)
- [`ParseError::TruncatedPayload`](crate::ParseError::TruncatedPayload) if
  the payload is cut short. No payload field is reported in that case.

# Example
```rust
# use midix_stream::prelude::*;
let mut reader = Reader::from_byte_slice(&[0x00, 0xB0, 0x07, 0x7F]);
let mut context = DecoderContext::new();
let mut tree = FieldTree::default();

let event = decode_event(&mut reader, &mut context, &GeneralMidi, &mut tree).unwrap();
assert_eq!(event.event().channel(), Channel::One);
assert_eq!(
    *event.event().event(),
    VoiceEvent::Controller { controller: 7, value: 127 }
);

let controller = tree.get(&["Controller", "controller"]).unwrap();
assert_eq!(controller.label(), Some("Channel Volume"));
```
"#]
pub fn decode_event<T, S>(
    reader: &mut Reader<'_>,
    context: &mut DecoderContext,
    symbols: &T,
    sink: &mut S,
) -> ReadResult<Ticked<ChannelVoiceMessage>>
where
    T: SymbolTable + ?Sized,
    S: FieldSink,
{
    let delta = reader.read_varlen()?;
    let tick = context.advance(delta);

    let status = context.resolve_status(reader)?;
    let event_type = EventType::from_status(status).map_err(|e| inv_data(reader, e))?;

    sink.structure(event_type.field_name(), |sink: &mut S| -> ReadResult<_> {
        sink.begin_struct("time");
        sink.field_uint("delta", delta, None);
        sink.field_uint("tick", tick, None);
        sink.end_struct();

        let code = u8::from(event_type);
        sink.field_uint("event", code.into(), symbols.event_name(code).as_deref());

        let channel = read_channel(reader, status)?;
        sink.field_uint("channel", channel.index().into(), None);

        let event = payload::decode(reader, event_type, symbols, sink)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            "{} at tick {} (delta {}), status {}",
            event_type,
            tick,
            delta,
            status
        );

        Ok(Ticked::new(
            delta,
            tick,
            ChannelVoiceMessage::new(channel, event),
        ))
    })
}

/// Extracts the channel from the status.
///
/// If the next byte in the stream has its leading bit set, it is consumed
/// and discarded first. Any such byte would otherwise be read as payload.
// TODO: find a stream that depends on this skip. Valid channel voice
// payloads never start with a status byte, so its purpose is unknown.
fn read_channel(reader: &mut Reader<'_>, status: StatusByte) -> ReadResult<Channel> {
    if reader.peek_next().is_some_and(|byte| byte & 0x80 != 0) {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            "discarding stray status byte at {} in {} event",
            reader.buffer_position(),
            status
        );
        reader.skip(1)?;
    }
    Ok(Channel::from_status(status))
}

#[doc = r#"
Decodes a whole stream of channel voice events.

# Example
```rust
# use midix_stream::prelude::*;
let bytes = [
    0x00, 0x93, 0x3C, 0x64, // note on, channel 4
    0x60, 0x3E, 0x64,       // running status: another note on, channel 4
    0x60, 0x83, 0x3C, 0x00, // note off
];
let mut decoder = StreamDecoder::new(&bytes[..]);

let events = decoder.events().collect::<Result<Vec<_>, _>>().unwrap();
assert_eq!(events.len(), 3);
assert_eq!(events[1].event().status().byte(), 0x93);
assert_eq!(events[2].tick(), 0x60);
assert_eq!(decoder.context().absolute_tick(), 0xC0);
```
"#]
#[derive(Debug, Clone)]
pub struct StreamDecoder<'slc, T = GeneralMidi> {
    reader: Reader<'slc>,
    context: DecoderContext,
    symbols: T,
}

impl<'slc> StreamDecoder<'slc> {
    /// Decode `bytes` from the start of a stream, labelling with [`GeneralMidi`]
    pub fn new<B>(bytes: B) -> Self
    where
        B: Into<Cow<'slc, [u8]>>,
    {
        Self::with_symbols(bytes, GeneralMidi)
    }
}

impl<'slc, T: SymbolTable> StreamDecoder<'slc, T> {
    /// Decode `bytes` from the start of a stream, labelling with `symbols`
    pub fn with_symbols<B>(bytes: B, symbols: T) -> Self
    where
        B: Into<Cow<'slc, [u8]>>,
    {
        Self {
            reader: Reader::from_bytes(bytes),
            context: DecoderContext::new(),
            symbols,
        }
    }

    /// Replace the context, e.g. to resume with a known running status
    pub fn with_context(mut self, context: DecoderContext) -> Self {
        self.context = context;
        self
    }

    /// The underlying cursor
    pub fn reader(&self) -> &Reader<'slc> {
        &self.reader
    }

    /// The state carried between events
    pub fn context(&self) -> &DecoderContext {
        &self.context
    }

    /// Mutable access to the state carried between events
    pub fn context_mut(&mut self) -> &mut DecoderContext {
        &mut self.context
    }

    /// The labels used for reported fields
    pub fn symbols(&self) -> &T {
        &self.symbols
    }

    /// True if every byte has been consumed
    pub fn is_finished(&self) -> bool {
        self.reader.is_empty()
    }

    /// Decode the next event. See [`decode_event`].
    pub fn decode_event<S: FieldSink>(
        &mut self,
        sink: &mut S,
    ) -> ReadResult<Ticked<ChannelVoiceMessage>> {
        decode_event(&mut self.reader, &mut self.context, &self.symbols, sink)
    }

    /// Iterate over the remaining events, discarding the reported fields
    pub fn events(&mut self) -> Events<'_, 'slc, T, NullSink> {
        self.events_with(NullSink)
    }

    /// Iterate over the remaining events, reporting their fields into `sink`.
    ///
    /// Pass `&mut sink` to keep the sink after the iterator is dropped.
    pub fn events_with<S: FieldSink>(&mut self, sink: S) -> Events<'_, 'slc, T, S> {
        Events {
            decoder: self,
            sink,
            failed: false,
        }
    }

    /// Split into the cursor, context and symbol table
    pub fn into_parts(self) -> (Reader<'slc>, DecoderContext, T) {
        (self.reader, self.context, self.symbols)
    }
}

#[doc = r#"
An iterator over the events of a [`StreamDecoder`].

Ends when the stream is exhausted. The first error is yielded and then the
iterator ends, since the stream cannot be resynchronized from here.
"#]
pub struct Events<'d, 'slc, T, S> {
    decoder: &'d mut StreamDecoder<'slc, T>,
    sink: S,
    failed: bool,
}

impl<T: SymbolTable, S: FieldSink> Iterator for Events<'_, '_, T, S> {
    type Item = ReadResult<Ticked<ChannelVoiceMessage>>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.decoder.is_finished() {
            return None;
        }
        let result = self.decoder.decode_event(&mut self.sink);
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

impl<T: SymbolTable, S: FieldSink> FusedIterator for Events<'_, '_, T, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParseError, message::VoiceEvent, sink::FieldTree};
    use pretty_assertions::assert_eq;

    fn decode(bytes: &[u8]) -> (ReadResult<Ticked<ChannelVoiceMessage>>, FieldTree) {
        let mut reader = Reader::from_byte_slice(bytes);
        let mut context = DecoderContext::new();
        let mut tree = FieldTree::default();
        let result = decode_event(&mut reader, &mut context, &GeneralMidi, &mut tree);
        (result, tree)
    }

    #[test]
    fn note_on() {
        let (event, tree) = decode(&[0x00, 0x90, 0x3C, 0x64]);
        let event = event.unwrap();

        assert_eq!(event.tick(), 0);
        assert_eq!(event.delta(), 0);
        assert_eq!(event.event().channel(), Channel::One);
        assert_eq!(
            *event.event().event(),
            VoiceEvent::NoteOn {
                note: 60,
                velocity: 100
            }
        );

        let get = |path: &[&str]| tree.get(path).and_then(|n| n.value());
        assert_eq!(get(&["NoteOn", "time", "delta"]), Some(0));
        assert_eq!(get(&["NoteOn", "time", "tick"]), Some(0));
        assert_eq!(get(&["NoteOn", "event"]), Some(0x90));
        assert_eq!(get(&["NoteOn", "channel"]), Some(0));
        assert_eq!(get(&["NoteOn", "note"]), Some(60));
        assert_eq!(get(&["NoteOn", "velocity"]), Some(100));
        assert_eq!(
            tree.get(&["NoteOn", "event"]).and_then(|n| n.label()),
            Some("note on")
        );
        assert_eq!(
            tree.get(&["NoteOn", "note"]).and_then(|n| n.label()),
            Some("C4")
        );
    }

    #[test]
    fn field_order() {
        let (_, tree) = decode(&[0x00, 0x90, 0x3C, 0x64]);
        let names = tree.roots()[0]
            .children()
            .iter()
            .map(|n| n.name())
            .collect::<alloc::vec::Vec<_>>();
        assert_eq!(names, ["time", "event", "channel", "note", "velocity"]);
    }

    #[test]
    fn pitch_bend_center() {
        let (event, tree) = decode(&[0x00, 0xE0, 0x00, 0x40]);
        let event = event.unwrap();
        assert_eq!(
            *event.event().event(),
            VoiceEvent::PitchBend(crate::message::PitchBend::CENTER)
        );
        assert_eq!(
            tree.get(&["PitchBend", "bend"]).and_then(|n| n.value()),
            Some(8192)
        );
    }

    #[test]
    fn controller() {
        let (event, tree) = decode(&[0x00, 0xB0, 0x07, 0x7F]);
        let event = event.unwrap();
        assert_eq!(event.event().channel(), Channel::One);
        assert_eq!(
            *event.event().event(),
            VoiceEvent::Controller {
                controller: 7,
                value: 127
            }
        );
        assert_eq!(
            tree.get(&["Controller", "value"]).and_then(|n| n.value()),
            Some(127)
        );
    }

    #[test]
    fn one_byte_payloads() {
        let (event, _) = decode(&[0x00, 0xA2, 0x50]);
        assert_eq!(
            *event.unwrap().event().event(),
            VoiceEvent::PolyphonicPressure { pressure: 0x50 }
        );

        let (event, tree) = decode(&[0x00, 0xC5, 0x13]);
        let event = event.unwrap();
        assert_eq!(event.event().channel(), Channel::Six);
        assert_eq!(
            *event.event().event(),
            VoiceEvent::ProgramChange { program: 0x13 }
        );
        assert_eq!(
            tree.get(&["ProgramChange", "program"]).and_then(|n| n.value()),
            Some(0x13)
        );

        let (event, _) = decode(&[0x00, 0xDF, 0x7F]);
        let event = event.unwrap();
        assert_eq!(event.event().channel(), Channel::Sixteen);
        assert_eq!(
            *event.event().event(),
            VoiceEvent::ChannelPressure { pressure: 0x7F }
        );
    }

    #[test]
    fn truncated_note_on_reports_no_payload() {
        let (err, tree) = decode(&[0x00, 0x90, 0x3C]);
        let err = err.unwrap_err();
        assert_eq!(
            err.parse_error_kind(),
            Some(&ParseError::TruncatedPayload {
                event: EventType::NoteOn,
                needed: 2,
                remaining: 1
            })
        );
        assert_eq!(err.position(), 2);
        assert!(tree.get(&["NoteOn", "note"]).is_none());
        assert!(tree.get(&["NoteOn", "velocity"]).is_none());
        assert!(!tree.is_open());
    }

    #[test]
    fn every_payload_checks_its_length() {
        let cases = [
            (0x80, EventType::NoteOff),
            (0x90, EventType::NoteOn),
            (0xA0, EventType::PolyphonicPressure),
            (0xB0, EventType::Controller),
            (0xC0, EventType::ProgramChange),
            (0xD0, EventType::ChannelPressure),
            (0xE0, EventType::PitchBend),
        ];

        for (status, event) in cases {
            let needed = event.payload_len();
            let mut bytes = alloc::vec![0x00, status];
            bytes.extend(core::iter::repeat_n(0x01, needed - 1));

            let (err, tree) = decode(&bytes);
            assert_eq!(
                err.unwrap_err().parse_error_kind(),
                Some(&ParseError::TruncatedPayload {
                    event,
                    needed,
                    remaining: needed - 1
                }),
                "{event}"
            );
            assert_eq!(tree.roots()[0].children().len(), 3, "{event}");
        }
    }

    #[test]
    fn decoder_parts() {
        let bytes = [0x00, 0x92, 0x45, 0x40, 0x10, 0x45, 0x00];
        let mut decoder = StreamDecoder::with_symbols(&bytes[..], crate::symbols::Unlabeled);
        assert_eq!(decoder.symbols(), &crate::symbols::Unlabeled);

        let first = decoder.decode_event(&mut NullSink).unwrap();
        assert_eq!(first.event().event().note(), Some(0x45));
        assert_eq!(decoder.reader().buffer_position(), 4);

        decoder.context_mut().set_quirk_flag(true);
        let second = decoder.decode_event(&mut NullSink).unwrap().into_event();
        assert!(second.event().is_note_off());
        assert!(!decoder.context().quirk_flag());

        let (reader, context, _) = decoder.into_parts();
        assert!(reader.is_empty());
        assert_eq!(context.absolute_tick(), 0x10);
    }

    #[test]
    fn missing_payload() {
        let (err, _) = decode(&[0x00, 0xC0]);
        assert_eq!(
            err.unwrap_err().parse_error_kind(),
            Some(&ParseError::TruncatedPayload {
                event: EventType::ProgramChange,
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn unknown_event() {
        let (err, tree) = decode(&[0x00, 0xF0, 0x05, 0x7E]);
        let err = err.unwrap_err();
        assert_eq!(err.parse_error_kind(), Some(&ParseError::UnknownEvent(0xF0)));
        assert!(alloc::string::ToString::to_string(&err).contains("0xf0"));
        assert!(tree.roots().is_empty());
    }

    #[test]
    fn undefined_running_status() {
        let (err, _) = decode(&[0x00, 0x3C, 0x64]);
        let err = err.unwrap_err();
        assert_eq!(
            err.parse_error_kind(),
            Some(&ParseError::UndefinedRunningStatus(0x3C))
        );
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn stray_status_byte_is_skipped() {
        let (event, _) = decode(&[0x00, 0x90, 0x90, 0x3C, 0x64]);
        assert_eq!(
            *event.unwrap().event().event(),
            VoiceEvent::NoteOn {
                note: 60,
                velocity: 100
            }
        );
    }

    #[test]
    fn quirk_flag_is_cleared_on_dispatch() {
        let mut reader = Reader::from_byte_slice(&[0x00, 0x90, 0x3C, 0x64]);
        let mut context = DecoderContext::new();
        context.set_quirk_flag(true);
        decode_event(&mut reader, &mut context, &GeneralMidi, &mut NullSink).unwrap();
        assert!(!context.quirk_flag());
    }

    #[test]
    fn events_stop_after_error() {
        let bytes = [0x00, 0x90, 0x3C, 0x64, 0x00, 0xF2, 0x00, 0x90, 0x3C, 0x00];
        let mut decoder = StreamDecoder::new(&bytes[..]);
        let mut events = decoder.events();
        assert!(events.next().unwrap().is_ok());
        assert!(events.next().unwrap().is_err());
        assert!(events.next().is_none());
    }
}
