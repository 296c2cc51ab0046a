//! Named cubes and parsing of cube ids.
//!
//! A cube id is either a well-known puzzle name, a decimal integer or a
//! `0x`-prefixed hex integer. Whatever the spelling, the value must fit in
//! the 54 bond bits.

use crate::bits::Cube;
use crate::error::{Error, Result};

/// Builds a table entry, refusing (at compile time) ids wider than 54 bits.
const fn named(bits: u64) -> Cube {
    match Cube::new(bits) {
        Some(cube) => cube,
        None => panic!("named cube sets a bit above bond 53"),
    }
}

/// Well-known bandaged 3x3x3 designs.
pub const NAMED_CUBES: &[(&str, Cube)] = &[
    ("rubik’s", named(0x0)),
    ("clock", named(0x20)),
    ("stripe", named(0x400)),
    ("bar", named(0x60)),
    ("edge", named(0xC00)),
    ("slice", named(0x401_8020)),
    ("quad", named(0x5A0)),
    ("bridge", named(0x461)),
    ("stalactites", named(0x100_0000_0C08)),
    ("lioh", named(0x10_0000_0000_0461)),
    ("bell", named(0x8_B400_4000)),
    ("morse", named(0x29A_0000_0400)),
    ("c-block", named(0xB5A0_0000)),
    ("plate", named(0x5AD)),
    ("2-3-4", named(0x202_0010_002D)),
    ("loop", named(0x1_8060_0C03)),
    ("equator", named(0x30_0C00_0000_0C03)),
    ("aurumq", named(0x1_FC60_0000)),
    ("grandstand", named(0x1_8C00_0FE0)),
    ("diamond", named(0x8000_802E_3401)),
    ("pendulum", named(0x1_8000_842E_0421)),
    ("rayray", named(0x1_FC20_3001)),
    ("fortress", named(0x3FE_0000_0421)),
    ("fuse", named(0xB40D_85A0)),
    ("3-slices", named(0x842D_B421)),
    ("aggressor", named(0x3FE_0000_041C)),
    ("roux", named(0x10_0586_802C_3421)),
    ("1x3x3", named(0x31_8C01_8C60_0C63)),
    ("stonehenge", named(0x8_8000_B42F_B5A1)),
    ("alcatraz", named(0x10_8400_F43F_87A1)),
];

/// Small graphs that make good defaults.
pub const STARTERS: &[Cube] = &[
    named(0x10_8BF0_8460_05A1),
    named(0x8020_0084),
    named(0x10_0400_C7AC_043D),
    named(0x1_8280_0008),
    named(0xC63),
    named(0x30_0000_0004_0203),
    named(0x8000_8020_05A0),
];

/// Looks up a named cube, ignoring case.
///
/// `rubiks` and `rubik's` are accepted for `rubik’s`.
pub fn lookup(name: &str) -> Option<Cube> {
    let name = name.trim().to_lowercase().replace('\'', "’");
    let name = if name == "rubiks" { "rubik’s".to_owned() } else { name };
    NAMED_CUBES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, cube)| cube)
}

/// Turns a user-supplied id into a cube.
///
/// Names win over numbers. Numbers may use `_` separators.
pub fn parse_cube(input: &str) -> Result<Cube> {
    if let Some(cube) = lookup(input) {
        return Ok(cube);
    }

    let trimmed = input.trim();
    let digits = trimmed.replace('_', "");
    let (negative, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.strip_prefix('+').unwrap_or(digits.as_str())),
    };

    let value = match magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
    {
        Some(hex) => u128::from_str_radix(hex, 16),
        None => magnitude.parse::<u128>(),
    }
    .map_err(|_| Error::Unparseable {
        input: trimmed.to_owned(),
    })?;

    if negative && value != 0 {
        return Err(Error::Negative {
            input: trimmed.to_owned(),
        });
    }

    u64::try_from(value)
        .ok()
        .and_then(Cube::new)
        .ok_or_else(|| Error::OutOfRange {
            input: trimmed.to_owned(),
        })
}
