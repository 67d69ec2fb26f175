#![doc = r#"
Contains all Channel Voice Message types

# Hierarchy
```text
           |-----------------------|
           | Channel Voice Message |
           |-----------------------|
            /                     \
|---------|                         |------------|
| Channel |                         | VoiceEvent |
|---------|                         |------------|
                                          |
                                    |-----------|
                                    | EventType |
                                    |-----------|
```
"#]

mod event_type;
pub use event_type::*;

mod voice_event;
pub use voice_event::*;

use core::fmt;

use crate::{StatusByte, channel::Channel};

#[doc = r#"
A channel voice message: a [`VoiceEvent`] addressed to a [`Channel`]
"#]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelVoiceMessage {
    channel: Channel,
    event: VoiceEvent,
}

impl ChannelVoiceMessage {
    /// Create a new channel voice message
    pub const fn new(channel: Channel, event: VoiceEvent) -> Self {
        Self { channel, event }
    }

    /// The addressed channel
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// The event
    pub const fn event(&self) -> &VoiceEvent {
        &self.event
    }

    /// The kind of event
    pub const fn event_type(&self) -> EventType {
        self.event.event_type()
    }

    /// The full status byte this message is sent with
    pub fn status(&self) -> StatusByte {
        StatusByte::from_parts(self.event_type(), self.channel)
    }
}

impl fmt::Display for ChannelVoiceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (channel {})", self.event, self.channel)
    }
}

impl StatusByte {
    /// The status byte for an event type on a channel
    pub fn from_parts(event_type: EventType, channel: Channel) -> Self {
        Self::new_masked(u8::from(event_type) | channel.index())
    }
}

#[test]
fn status_from_parts() {
    use pretty_assertions::assert_eq;
    let message = ChannelVoiceMessage::new(
        Channel::Four,
        VoiceEvent::Controller {
            controller: 7,
            value: 100,
        },
    );
    assert_eq!(message.status().byte(), 0xB3);
}
