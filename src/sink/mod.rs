#![doc = r#"
Where decoded fields are reported.

Decoders describe each event as a tree of named fields: a struct named
after the event, holding a `time` struct, the event code, the channel,
and the payload fields.

```text
NoteOn
├── time
│   ├── delta    0
│   └── tick     0
├── event        144 (note on)
├── channel      0
├── note         60 (C4)
└── velocity     100
```
"#]

mod tree;
pub use tree::*;

#[doc = r#"
Receives the fields of decoded events.

Structs are opened and closed in strict nesting order. Labels are
optional annotations; a sink should fall back to the numeric value when
none is given.
"#]
pub trait FieldSink {
    /// Open a named struct. Following fields belong to it until the matching [`FieldSink::end_struct`].
    fn begin_struct(&mut self, name: &'static str);

    /// Close the most recently opened struct
    fn end_struct(&mut self);

    /// Report an unsigned field, optionally with a display label
    fn field_uint(&mut self, name: &'static str, value: u64, label: Option<&str>);

    /// Runs `f` inside a struct named `name`.
    ///
    /// The struct is closed whether or not `f` succeeds.
    fn structure<T, E, F>(&mut self, name: &'static str, f: F) -> Result<T, E>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        self.begin_struct(name);
        let out = f(self);
        self.end_struct();
        out
    }
}

impl<S: FieldSink + ?Sized> FieldSink for &mut S {
    fn begin_struct(&mut self, name: &'static str) {
        (**self).begin_struct(name)
    }
    fn end_struct(&mut self) {
        (**self).end_struct()
    }
    fn field_uint(&mut self, name: &'static str, value: u64, label: Option<&str>) {
        (**self).field_uint(name, value, label)
    }
}

/// Discards every field
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FieldSink for NullSink {
    fn begin_struct(&mut self, _name: &'static str) {}
    fn end_struct(&mut self) {}
    fn field_uint(&mut self, _name: &'static str, _value: u64, _label: Option<&str>) {}
}
