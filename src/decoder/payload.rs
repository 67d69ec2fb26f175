//! One decoder per channel voice event type.
//!
//! Each checks that its whole payload is present before reading any of it,
//! then reports the payload fields into the event's struct.

use crate::{
    ParseError,
    message::{EventType, PitchBend, VoiceEvent},
    reader::{ReadResult, Reader, inv_data},
    sink::FieldSink,
    symbols::SymbolTable,
};

pub(super) fn decode<T, S>(
    reader: &mut Reader<'_>,
    event_type: EventType,
    symbols: &T,
    sink: &mut S,
) -> ReadResult<VoiceEvent>
where
    T: SymbolTable + ?Sized,
    S: FieldSink,
{
    match event_type {
        EventType::NoteOff => decode_note_off(reader, symbols, sink),
        EventType::NoteOn => decode_note_on(reader, symbols, sink),
        EventType::PolyphonicPressure => decode_polyphonic_pressure(reader, sink),
        EventType::Controller => decode_controller(reader, symbols, sink),
        EventType::ProgramChange => decode_program_change(reader, sink),
        EventType::ChannelPressure => decode_channel_pressure(reader, sink),
        EventType::PitchBend => decode_pitch_bend(reader, sink),
    }
}

fn assert_least_bytes_left(reader: &mut Reader<'_>, event: EventType) -> ReadResult<()> {
    let needed = event.payload_len();
    let remaining = reader.remaining();
    if remaining < needed {
        return Err(inv_data(
            reader,
            ParseError::TruncatedPayload {
                event,
                needed,
                remaining,
            },
        ));
    }
    Ok(())
}

fn note_fields<T, S>(reader: &mut Reader<'_>, symbols: &T, sink: &mut S) -> ReadResult<(u8, u8)>
where
    T: SymbolTable + ?Sized,
    S: FieldSink,
{
    let [note, velocity] = reader.read_exact_size()?;
    sink.field_uint("note", note.into(), symbols.note_name(note).as_deref());
    sink.field_uint("velocity", velocity.into(), None);
    Ok((note, velocity))
}

fn decode_note_off<T, S>(reader: &mut Reader<'_>, symbols: &T, sink: &mut S) -> ReadResult<VoiceEvent>
where
    T: SymbolTable + ?Sized,
    S: FieldSink,
{
    assert_least_bytes_left(reader, EventType::NoteOff)?;
    let (note, velocity) = note_fields(reader, symbols, sink)?;
    Ok(VoiceEvent::NoteOff { note, velocity })
}

fn decode_note_on<T, S>(reader: &mut Reader<'_>, symbols: &T, sink: &mut S) -> ReadResult<VoiceEvent>
where
    T: SymbolTable + ?Sized,
    S: FieldSink,
{
    assert_least_bytes_left(reader, EventType::NoteOn)?;
    let (note, velocity) = note_fields(reader, symbols, sink)?;
    Ok(VoiceEvent::NoteOn { note, velocity })
}

fn decode_polyphonic_pressure<S: FieldSink>(
    reader: &mut Reader<'_>,
    sink: &mut S,
) -> ReadResult<VoiceEvent> {
    assert_least_bytes_left(reader, EventType::PolyphonicPressure)?;
    let pressure = reader.read_next()?;
    sink.field_uint("pressure", pressure.into(), None);
    Ok(VoiceEvent::PolyphonicPressure { pressure })
}

fn decode_controller<T, S>(
    reader: &mut Reader<'_>,
    symbols: &T,
    sink: &mut S,
) -> ReadResult<VoiceEvent>
where
    T: SymbolTable + ?Sized,
    S: FieldSink,
{
    assert_least_bytes_left(reader, EventType::Controller)?;
    let [controller, value] = reader.read_exact_size()?;
    sink.field_uint(
        "controller",
        controller.into(),
        symbols.controller_name(controller).as_deref(),
    );
    sink.field_uint("value", value.into(), None);
    Ok(VoiceEvent::Controller { controller, value })
}

fn decode_program_change<S: FieldSink>(
    reader: &mut Reader<'_>,
    sink: &mut S,
) -> ReadResult<VoiceEvent> {
    assert_least_bytes_left(reader, EventType::ProgramChange)?;
    let program = reader.read_next()?;
    sink.field_uint("program", program.into(), None);
    Ok(VoiceEvent::ProgramChange { program })
}

fn decode_channel_pressure<S: FieldSink>(
    reader: &mut Reader<'_>,
    sink: &mut S,
) -> ReadResult<VoiceEvent> {
    assert_least_bytes_left(reader, EventType::ChannelPressure)?;
    let pressure = reader.read_next()?;
    sink.field_uint("pressure", pressure.into(), None);
    Ok(VoiceEvent::ChannelPressure { pressure })
}

fn decode_pitch_bend<S: FieldSink>(reader: &mut Reader<'_>, sink: &mut S) -> ReadResult<VoiceEvent> {
    assert_least_bytes_left(reader, EventType::PitchBend)?;
    let [lsb, msb] = reader.read_exact_size()?;
    let bend = PitchBend::from_data_bytes(lsb, msb);
    sink.field_uint("bend", bend.value().into(), None);
    Ok(VoiceEvent::PitchBend(bend))
}
