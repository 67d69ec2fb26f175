use midix_stream::prelude::*;
use pretty_assertions::assert_eq;

fn decode_all(bytes: &[u8]) -> Vec<Ticked<ChannelVoiceMessage>> {
    StreamDecoder::new(bytes)
        .events()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn omitted_status_repeats_note_on() {
    let events = decode_all(&[
        0x00, 0x93, 0x3C, 0x64, //
        0x10, 0x40, 0x64,
    ]);

    assert_eq!(events.len(), 2);
    let second = events[1].event();
    assert_eq!(second.channel(), Channel::Four);
    assert_eq!(second.status().byte(), 0x93);
    assert_eq!(
        *second.event(),
        VoiceEvent::NoteOn {
            note: 0x40,
            velocity: 0x64
        }
    );
}

#[test]
fn new_status_replaces_running_status() {
    let mut reader = Reader::from_byte_slice(&[
        0x00, 0x90, 0x3C, 0x64, //
        0x00, 0xB1, 0x40, 0x7F, //
        0x00, 0x40, 0x00,
    ]);
    let mut context = DecoderContext::new();

    let mut statuses = Vec::new();
    while !reader.is_empty() {
        decode_event(&mut reader, &mut context, &GeneralMidi, &mut NullSink).unwrap();
        statuses.push(context.running_status().map(|s| s.byte()));
    }
    assert_eq!(statuses, [Some(0x90), Some(0xB1), Some(0xB1)]);
}

#[test]
fn running_status_does_not_consume_data() {
    let mut reader = Reader::from_byte_slice(&[0x00, 0xC0, 0x05, 0x00, 0x06]);
    let mut context = DecoderContext::new();

    decode_event(&mut reader, &mut context, &GeneralMidi, &mut NullSink).unwrap();
    let second = decode_event(&mut reader, &mut context, &GeneralMidi, &mut NullSink).unwrap();

    assert_eq!(
        *second.event().event(),
        VoiceEvent::ProgramChange { program: 0x06 }
    );
    assert!(reader.is_empty());
}

#[test]
fn seeded_context_resumes_mid_stream() {
    let status = StatusByte::new(0xE2).unwrap();
    let mut decoder = StreamDecoder::new(&[0x05, 0x00, 0x40][..])
        .with_context(DecoderContext::with_running_status(status));

    let event = decoder.decode_event(&mut NullSink).unwrap();
    assert_eq!(event.event().channel(), Channel::Three);
    assert_eq!(
        *event.event().event(),
        VoiceEvent::PitchBend(PitchBend::CENTER)
    );
}

#[test]
fn data_before_any_status_fails() {
    let mut decoder = StreamDecoder::new(&[0x00, 0x3C, 0x64][..]);
    let err = decoder.decode_event(&mut NullSink).unwrap_err();

    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::ParseError(ParseError::UndefinedRunningStatus(0x3C))
    );
    assert_eq!(decoder.context().running_status(), None);
}

#[test]
fn unknown_status_still_becomes_running_status() {
    let mut reader = Reader::from_byte_slice(&[0x00, 0xF0, 0x00, 0x3C]);
    let mut context = DecoderContext::new();

    let err = decode_event(&mut reader, &mut context, &GeneralMidi, &mut NullSink).unwrap_err();
    assert_eq!(err.parse_error_kind(), Some(&ParseError::UnknownEvent(0xF0)));
    assert_eq!(context.running_status().map(|s| s.byte()), Some(0xF0));

    // the same status is unknown when reused
    let err = decode_event(&mut reader, &mut context, &GeneralMidi, &mut NullSink).unwrap_err();
    assert_eq!(err.parse_error_kind(), Some(&ParseError::UnknownEvent(0xF0)));
}
