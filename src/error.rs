use crate::message::EventType;
use thiserror::Error;

#[doc = r#"
The ways a channel voice event stream can be malformed.

Every variant is fatal for the event being decoded. Deciding whether
to abort the stream or resynchronize is left to the caller.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A byte expected to have its leading bit clear did not
    #[error("Invalid data byte ({0:#04x}), leading bit is set")]
    InvalidDataByte(u8),
    /// A byte expected to have its leading bit set did not
    #[error("Invalid status byte ({0:#04x}), leading bit is not set")]
    InvalidStatusByte(u8),
    /// A data byte appeared where a status byte was expected, and no
    /// status byte has been seen yet in this stream.
    #[error("undefined running status, data byte ({0:#04x}) before any status byte")]
    UndefinedRunningStatus(u8),
    /// The status byte does not identify one of the seven channel voice messages.
    ///
    /// Holds the complete status byte.
    #[error("unknown MIDI event ({:#04x})", .0 & 0xF0)]
    UnknownEvent(u8),
    /// A delta-time needs more than 64 bits
    #[error("delta-time starting at {start} does not fit in 64 bits")]
    DeltaTimeOverflow {
        /// Offset of the first byte of the delta-time
        start: usize,
    },
    /// Fewer bytes remain than the event's fixed payload length
    #[error("{event} needs {needed} bytes, only {remaining} left")]
    TruncatedPayload {
        /// The event being decoded
        event: EventType,
        /// The payload length of the event
        needed: usize,
        /// What was left in the stream
        remaining: usize,
    },
}

#[test]
fn unknown_event_reports_status_nibble() {
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;
    assert_eq!(
        ParseError::UnknownEvent(0xF0).to_string(),
        "unknown MIDI event (0xf0)"
    );
    assert_eq!(
        ParseError::UnknownEvent(0xF7).to_string(),
        "unknown MIDI event (0xf0)"
    );
}
