//! North American Braille Computer Code
//!
//! Maps one byte of a flat braille file to its six-dot cell. Lower case
//! (0x60..=0x7F) shares the cells of 0x40..=0x5F.

/// The cell for `byte`, or `None` for bytes outside the printable range.
pub fn glyph(byte: u8) -> Option<char> {
    match byte {
        0x20 => Some('⠀'),
        0x21 => Some('⠮'),
        0x22 => Some('⠐'),
        0x23 => Some('⠼'),
        0x24 => Some('⠫'),
        0x25 => Some('⠩'),
        0x26 => Some('⠯'),
        0x27 => Some('⠄'),
        0x28 => Some('⠷'),
        0x29 => Some('⠾'),
        0x2A => Some('⠡'),
        0x2B => Some('⠬'),
        0x2C => Some('⠠'),
        0x2D => Some('⠤'),
        0x2E => Some('⠨'),
        0x2F => Some('⠌'),
        0x30 => Some('⠴'),
        0x31 => Some('⠂'),
        0x32 => Some('⠆'),
        0x33 => Some('⠒'),
        0x34 => Some('⠲'),
        0x35 => Some('⠢'),
        0x36 => Some('⠖'),
        0x37 => Some('⠶'),
        0x38 => Some('⠦'),
        0x39 => Some('⠔'),
        0x3A => Some('⠱'),
        0x3B => Some('⠰'),
        0x3C => Some('⠣'),
        0x3D => Some('⠿'),
        0x3E => Some('⠜'),
        0x3F => Some('⠹'),
        0x40 => Some('⠈'),
        0x41 => Some('⠁'),
        0x42 => Some('⠃'),
        0x43 => Some('⠉'),
        0x44 => Some('⠙'),
        0x45 => Some('⠑'),
        0x46 => Some('⠋'),
        0x47 => Some('⠛'),
        0x48 => Some('⠓'),
        0x49 => Some('⠊'),
        0x4A => Some('⠚'),
        0x4B => Some('⠅'),
        0x4C => Some('⠇'),
        0x4D => Some('⠍'),
        0x4E => Some('⠝'),
        0x4F => Some('⠕'),
        0x50 => Some('⠏'),
        0x51 => Some('⠟'),
        0x52 => Some('⠗'),
        0x53 => Some('⠎'),
        0x54 => Some('⠞'),
        0x55 => Some('⠥'),
        0x56 => Some('⠧'),
        0x57 => Some('⠺'),
        0x58 => Some('⠭'),
        0x59 => Some('⠽'),
        0x5A => Some('⠵'),
        0x5B => Some('⠪'),
        0x5C => Some('⠳'),
        0x5D => Some('⠻'),
        0x5E => Some('⠘'),
        0x5F => Some('⠸'),
        0x60 => Some('⠈'),
        0x61 => Some('⠁'),
        0x62 => Some('⠃'),
        0x63 => Some('⠉'),
        0x64 => Some('⠙'),
        0x65 => Some('⠑'),
        0x66 => Some('⠋'),
        0x67 => Some('⠛'),
        0x68 => Some('⠓'),
        0x69 => Some('⠊'),
        0x6A => Some('⠚'),
        0x6B => Some('⠅'),
        0x6C => Some('⠇'),
        0x6D => Some('⠍'),
        0x6E => Some('⠝'),
        0x6F => Some('⠕'),
        0x70 => Some('⠏'),
        0x71 => Some('⠟'),
        0x72 => Some('⠗'),
        0x73 => Some('⠎'),
        0x74 => Some('⠞'),
        0x75 => Some('⠥'),
        0x76 => Some('⠧'),
        0x77 => Some('⠺'),
        0x78 => Some('⠭'),
        0x79 => Some('⠽'),
        0x7A => Some('⠵'),
        0x7B => Some('⠪'),
        0x7C => Some('⠳'),
        0x7D => Some('⠻'),
        0x7E => Some('⠘'),
        0x7F => Some('⠸'),
        _ => None,
    }
}
