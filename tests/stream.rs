use std::borrow::Cow;

use midix_stream::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn absolute_tick_is_sum_of_deltas() {
    let deltas: [u64; 6] = [0, 1, 0x7F, 0x80, 0x3FFF, 0x20_0000];

    let mut bytes = Vec::new();
    for delta in deltas {
        write_varlen(delta, &mut bytes);
        bytes.extend_from_slice(&[0xD0, 0x10]);
    }

    let mut reader = Reader::from_byte_slice(&bytes);
    let mut context = DecoderContext::new();
    assert_eq!(context.absolute_tick(), 0);

    let mut expected = 0;
    for delta in deltas {
        let event = decode_event(&mut reader, &mut context, &GeneralMidi, &mut NullSink).unwrap();
        assert_eq!(event.delta(), delta);
        assert_eq!(event.tick(), expected);
        expected += delta;
        assert_eq!(context.absolute_tick(), expected);
        assert_eq!(event.accumulated_ticks(), expected);
    }
    assert!(reader.is_empty());
}

#[test]
fn varlen_round_trip() {
    let sequences: &[&[u8]] = &[
        &[0x00],
        &[0x7F],
        &[0x81, 0x00],
        &[0x83, 0x60],
        &[0xFF, 0x7F],
        &[0x81, 0x80, 0x00],
        &[0xBF, 0xFF, 0xFF, 0x7F],
        &[0x81, 0x80, 0x80, 0x80, 0x00],
    ];

    for bytes in sequences {
        let mut reader = Reader::from_byte_slice(bytes);
        let value = reader.read_varlen().unwrap();
        assert!(reader.is_empty());

        let mut encoded = Vec::new();
        write_varlen(value, &mut encoded);
        assert_eq!(&encoded, bytes);
    }
}

#[test]
fn truncated_delta_time() {
    let mut decoder = StreamDecoder::new(&[0x00, 0x90, 0x3C, 0x64, 0x81][..]);
    decoder.decode_event(&mut NullSink).unwrap();

    let err = decoder.decode_event(&mut NullSink).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.position(), 5);
}

#[test]
fn delta_time_wider_than_64_bits() {
    let mut bytes = vec![0x82];
    bytes.extend([0x80; 9]);
    bytes.extend([0x00, 0x90, 0x3C, 0x64]);

    let mut decoder = StreamDecoder::new(bytes);
    let err = decoder.decode_event(&mut NullSink).unwrap_err();
    assert_eq!(
        err.parse_error_kind(),
        Some(&ParseError::DeltaTimeOverflow { start: 0 })
    );
    assert_eq!(decoder.context().absolute_tick(), 0);
}

#[test]
fn missing_status_after_delta() {
    let mut decoder = StreamDecoder::new(&[0x00][..]);
    let err = decoder.decode_event(&mut NullSink).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.position(), 1);
}

#[test]
fn one_struct_per_event() {
    let bytes = [
        0x00, 0x90, 0x3C, 0x64, //
        0x60, 0xE0, 0x00, 0x40, //
        0x00, 0x80, 0x3C, 0x40,
    ];
    let mut tree = FieldTree::default();
    let mut decoder = StreamDecoder::new(&bytes[..]);
    let count = decoder.events_with(&mut tree).count();
    assert_eq!(count, 3);

    let names = tree.roots().iter().map(Node::name).collect::<Vec<_>>();
    assert_eq!(names, ["NoteOn", "PitchBend", "NoteOff"]);

    let note_off = &tree.roots()[2];
    assert_eq!(note_off.get(&["time", "tick"]).and_then(Node::value), Some(0x60));
    assert_eq!(note_off.get(&["time", "delta"]).and_then(Node::value), Some(0));
    assert_eq!(note_off.get(&["event"]).and_then(Node::label), Some("note off"));
    assert_eq!(note_off.get(&["note"]).and_then(Node::label), Some("C4"));
}

#[test]
fn unlabeled_fields_display_raw_numbers() {
    let mut tree = FieldTree::default();
    let mut decoder = StreamDecoder::with_symbols(&[0x00, 0x95, 0x3C, 0x64][..], Unlabeled);
    let event = decoder.decode_event(&mut tree).unwrap();

    // decoding is the same with or without labels
    assert_eq!(event.event().channel(), Channel::Six);

    let note = tree.get(&["NoteOn", "note"]).unwrap();
    assert_eq!(note.label(), None);
    assert_eq!(note.display().as_deref(), Some("60"));
    let event_code = tree.get(&["NoteOn", "event"]).unwrap();
    assert_eq!(event_code.display().as_deref(), Some("144"));
}

struct Percussion;

impl SymbolTable for Percussion {
    fn event_name(&self, code: u8) -> Option<Cow<'static, str>> {
        GeneralMidi.event_name(code)
    }
    fn note_name(&self, note: u8) -> Option<Cow<'static, str>> {
        (note == 42).then_some(Cow::Borrowed("Closed Hi-Hat"))
    }
    fn controller_name(&self, _controller: u8) -> Option<Cow<'static, str>> {
        None
    }
}

#[test]
fn host_symbol_table() {
    let bytes = [0x00, 0x99, 0x2A, 0x50, 0x00, 0x2B, 0x50, 0x00, 0xB9, 0x07, 0x64];
    let mut tree = FieldTree::default();
    let mut decoder = StreamDecoder::with_symbols(&bytes[..], Percussion);
    let events = decoder
        .events_with(&mut tree)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(events.len(), 3);

    let labels = tree
        .roots()
        .iter()
        .filter_map(|event| event.get(&["note"]))
        .map(|note| note.display().unwrap().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(labels, ["Closed Hi-Hat", "43"]);

    let controller = tree.get(&["Controller", "controller"]).unwrap();
    assert_eq!(controller.display().as_deref(), Some("7"));
}

#[test]
fn owned_stream() {
    let bytes = vec![0x00, 0xB0, 0x40, 0x7F, 0x83, 0x60, 0x40, 0x00];
    let mut decoder = StreamDecoder::new(bytes);
    let events = decoder.events().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(events[1].delta(), 480);
    assert_eq!(
        *events[1].event().event(),
        VoiceEvent::Controller {
            controller: 0x40,
            value: 0x00
        }
    );
    assert!(decoder.is_finished());
}
