use crate::{
    ParseError, StatusByte,
    reader::{ReadResult, Reader, inv_data, oob},
};

#[doc = r#"
The state carried from one event to the next within a single stream.

Create one per track and pass it to every [`decode_event`](crate::decoder::decode_event)
call for that track.

- `running_status` is the last full status byte seen. Events that omit
  their status byte reuse it.
- `absolute_tick` is the sum of every delta-time decoded so far.
- `quirk_flag` is cleared whenever an event is dispatched. Nothing in this
  crate reads it; it is kept for hosts that need to know whether anything
  set it since the last event.

# Example
```rust
# use midix_stream::prelude::*;
let mut context = DecoderContext::new();
let mut reader = Reader::from_byte_slice(&[0x10, 0x91, 0x40, 0x40, 0x10, 0x40, 0x00]);

decode_event(&mut reader, &mut context, &Unlabeled, &mut NullSink).unwrap();
assert_eq!(context.running_status().map(|s| s.byte()), Some(0x91));

decode_event(&mut reader, &mut context, &Unlabeled, &mut NullSink).unwrap();
assert_eq!(context.absolute_tick(), 0x20);
```
"#]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoderContext {
    running_status: Option<StatusByte>,
    absolute_tick: u64,
    quirk_flag: bool,
}

impl DecoderContext {
    /// A context for the start of a stream
    pub const fn new() -> Self {
        Self {
            running_status: None,
            absolute_tick: 0,
            quirk_flag: false,
        }
    }

    /// A context resuming a stream whose last status byte is already known
    pub const fn with_running_status(status: StatusByte) -> Self {
        Self {
            running_status: Some(status),
            absolute_tick: 0,
            quirk_flag: false,
        }
    }

    /// The last full status byte seen
    pub const fn running_status(&self) -> Option<StatusByte> {
        self.running_status
    }

    /// The sum of all delta-times decoded so far
    pub const fn absolute_tick(&self) -> u64 {
        self.absolute_tick
    }

    /// Set by the host, cleared on every event dispatch
    pub const fn quirk_flag(&self) -> bool {
        self.quirk_flag
    }

    /// Sets the quirk flag. It stays set until the next event is dispatched.
    pub const fn set_quirk_flag(&mut self, flag: bool) {
        self.quirk_flag = flag;
    }

    /// Adds `delta` to the accumulator, returning the value from before the addition
    pub(crate) const fn advance(&mut self, delta: u64) -> u64 {
        let tick = self.absolute_tick;
        self.absolute_tick = tick.saturating_add(delta);
        tick
    }

    /// Determines the status of the next event.
    ///
    /// A full status byte is consumed and becomes the new running status.
    /// A data byte is left in the stream for the payload decoder, and the
    /// running status is used in its place.
    pub(crate) fn resolve_status(&mut self, reader: &mut Reader<'_>) -> ReadResult<StatusByte> {
        self.quirk_flag = false;

        let Some(byte) = reader.peek_next() else {
            return Err(oob(reader));
        };

        if let Ok(status) = StatusByte::new(byte) {
            reader.skip(1)?;
            self.running_status = Some(status);
            return Ok(status);
        }

        match self.running_status {
            Some(status) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "reusing running status {} at {}",
                    status,
                    reader.buffer_position()
                );
                Ok(status)
            }
            None => Err(inv_data(reader, ParseError::UndefinedRunningStatus(byte))),
        }
    }
}
