use alloc::{borrow::Cow, format};

/// The MIDI 1.0 name of a controller number.
///
/// Controllers `32..=63` are the LSB of controllers `0..=31` and are named
/// after them. Unassigned numbers have no name.
pub fn controller_name(controller: u8) -> Option<Cow<'static, str>> {
    if let 32..=63 = controller {
        let msb = msb_controller_name(controller - 32)?;
        return Some(Cow::Owned(format!("{msb} (LSB)")));
    }
    let name = match controller {
        0..=31 => msb_controller_name(controller)?,
        64 => "Damper Pedal (Sustain)",
        65 => "Portamento On/Off",
        66 => "Sostenuto",
        67 => "Soft Pedal",
        68 => "Legato Footswitch",
        69 => "Hold 2",
        70 => "Sound Variation",
        71 => "Timbre/Harmonic Intensity",
        72 => "Release Time",
        73 => "Attack Time",
        74 => "Brightness",
        75 => "Decay Time",
        76 => "Vibrato Rate",
        77 => "Vibrato Depth",
        78 => "Vibrato Delay",
        79 => "Sound Controller 10",
        80 => "General Purpose Controller 5",
        81 => "General Purpose Controller 6",
        82 => "General Purpose Controller 7",
        83 => "General Purpose Controller 8",
        84 => "Portamento Control",
        88 => "High Resolution Velocity Prefix",
        91 => "Reverb Send Level",
        92 => "Tremolo Depth",
        93 => "Chorus Send Level",
        94 => "Celeste Depth",
        95 => "Phaser Depth",
        96 => "Data Increment",
        97 => "Data Decrement",
        98 => "Non-Registered Parameter Number (LSB)",
        99 => "Non-Registered Parameter Number (MSB)",
        100 => "Registered Parameter Number (LSB)",
        101 => "Registered Parameter Number (MSB)",
        120 => "All Sound Off",
        121 => "Reset All Controllers",
        122 => "Local Control",
        123 => "All Notes Off",
        124 => "Omni Mode Off",
        125 => "Omni Mode On",
        126 => "Mono Mode On",
        127 => "Poly Mode On",
        _ => return None,
    };
    Some(Cow::Borrowed(name))
}

const fn msb_controller_name(controller: u8) -> Option<&'static str> {
    let name = match controller {
        0 => "Bank Select",
        1 => "Modulation Wheel",
        2 => "Breath Controller",
        4 => "Foot Controller",
        5 => "Portamento Time",
        6 => "Data Entry",
        7 => "Channel Volume",
        8 => "Balance",
        10 => "Pan",
        11 => "Expression Controller",
        12 => "Effect Control 1",
        13 => "Effect Control 2",
        16 => "General Purpose Controller 1",
        17 => "General Purpose Controller 2",
        18 => "General Purpose Controller 3",
        19 => "General Purpose Controller 4",
        _ => return None,
    };
    Some(name)
}

#[test]
fn lsb_controllers_follow_their_msb() {
    use pretty_assertions::assert_eq;
    assert_eq!(controller_name(0).as_deref(), Some("Bank Select"));
    assert_eq!(controller_name(32).as_deref(), Some("Bank Select (LSB)"));
    assert_eq!(controller_name(39).as_deref(), Some("Channel Volume (LSB)"));
    assert_eq!(controller_name(35), None);
    assert_eq!(controller_name(64).as_deref(), Some("Damper Pedal (Sustain)"));
    assert_eq!(controller_name(85), None);
}
