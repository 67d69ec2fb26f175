use core::fmt;

use crate::{DataByte, ParseError};

#[doc = r#"
Identifies a note number.

Notes are interpreted as a 7-bit number.

Each value corresponds to some [`Key`] and [`Octave`].
Note `0` is `C-1`, note `60` is `C4` (middle C), and note `127` is `G9`.

# Example
```rust
# use midix_stream::prelude::*;

let note = Note::from_databyte(63).unwrap(); // 63 is between 0-127

assert_eq!(note.key(), Key::DSharp);
assert_eq!(note.octave(), Octave::new(4));
assert_eq!(note.to_string(), "D#4");
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note(DataByte);

impl Note {
    /// Create a new note.
    ///
    /// Checks for correctness (leading 0 bit).
    pub fn from_databyte<B>(rep: B) -> Result<Self, ParseError>
    where
        B: TryInto<DataByte, Error = ParseError>,
    {
        rep.try_into().map(Self)
    }

    /// Create a note from a given key and octave.
    ///
    /// Returns `None` above `G9`, which is not representable in MIDI.
    pub const fn new(key: Key, octave: Octave) -> Option<Self> {
        let octave_mult = (octave.value() + 1) as u8 * 12;
        let note_byte = octave_mult + key.get_mod_12();

        if note_byte > 127 {
            return None;
        }

        Some(Self(DataByte(note_byte)))
    }

    /// Identifies the key of the note pressed
    #[inline]
    pub const fn key(&self) -> Key {
        Key::from_data_byte(&self.0)
    }

    /// Identifies the octave of the note pressed
    #[inline]
    pub const fn octave(&self) -> Octave {
        Octave::from_data_byte(&self.0)
    }

    /// Returns the underlying byte of the note
    pub const fn byte(&self) -> u8 {
        self.0.0
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key(), self.octave())
    }
}

#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[doc = r#"
The pitch class of a [`Note`], spelled with sharps
"#]
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Key {
    /// Returns true if the key is a black key
    #[inline]
    pub const fn is_sharp(&self) -> bool {
        use Key::*;
        matches!(self, CSharp | DSharp | FSharp | GSharp | ASharp)
    }

    /// Identify the key from a note byte.
    #[inline]
    pub const fn from_data_byte(note: &DataByte) -> Self {
        use Key::*;
        match note.value() % 12 {
            0 => C,
            1 => CSharp,
            2 => D,
            3 => DSharp,
            4 => E,
            5 => F,
            6 => FSharp,
            7 => G,
            8 => GSharp,
            9 => A,
            10 => ASharp,
            _ => B,
        }
    }

    const fn get_mod_12(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Key::*;
        let name = match self {
            C => "C",
            CSharp => "C#",
            D => "D",
            DSharp => "D#",
            E => "E",
            F => "F",
            FSharp => "F#",
            G => "G",
            GSharp => "G#",
            A => "A",
            ASharp => "A#",
            B => "B",
        };
        f.write_str(name)
    }
}

#[doc = r#"
Identifies the octave of a [`Note`]. Values range from -1 to 9.
"#]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Octave(i8);

impl Octave {
    /// Identify an octave from a note byte.
    pub const fn from_data_byte(note: &DataByte) -> Self {
        let octave = note.value() / 12;

        Self(octave as i8 - 1)
    }

    /// Should be a value between [-1, 9]. Clamps between these two values.
    pub const fn new(mut octave: i8) -> Self {
        if octave < -1 {
            octave = -1
        } else if octave > 9 {
            octave = 9;
        }
        Self(octave)
    }

    /// The octave, from `[-1,9]`
    pub const fn value(&self) -> i8 {
        self.0
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[test]
fn note_names() {
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    let name = |byte: u8| Note::from_databyte(byte).unwrap().to_string();
    assert_eq!(name(0), "C-1");
    assert_eq!(name(60), "C4");
    assert_eq!(name(61), "C#4");
    assert_eq!(name(69), "A4");
    assert_eq!(name(127), "G9");

    let sharps = (60..72u8)
        .filter(|byte| Note::from_databyte(*byte).unwrap().key().is_sharp())
        .count();
    assert_eq!(sharps, 5);
}

#[test]
fn note_from_key_octave_pairs() {
    use pretty_assertions::assert_eq;
    for byte in 0..128u8 {
        let note = Note::from_databyte(byte).unwrap();
        assert_eq!(Note::new(note.key(), note.octave()), Some(note));
    }
    assert_eq!(Note::new(Key::GSharp, Octave::new(9)), None);
}
