#[doc = r#"
An event tagged with its position in the stream, in ticks.

`tick` is the stream's accumulated time *before* this event's delta was
added, matching what is reported to the field sink. The event itself
occurs at [`Ticked::accumulated_ticks`].
"#]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticked<E> {
    delta: u64,
    tick: u64,
    event: E,
}

impl<E> Ticked<E> {
    /// Tag an event
    pub const fn new(delta: u64, tick: u64, event: E) -> Self {
        Self { delta, tick, event }
    }

    /// The ticks elapsed since the previous event
    pub const fn delta(&self) -> u64 {
        self.delta
    }

    /// The stream's accumulated ticks before this event
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// The stream's accumulated ticks including this event
    pub const fn accumulated_ticks(&self) -> u64 {
        self.tick.saturating_add(self.delta)
    }

    /// The tagged event
    pub const fn event(&self) -> &E {
        &self.event
    }

    /// Drop the tag
    pub fn into_event(self) -> E {
        self.event
    }
}
