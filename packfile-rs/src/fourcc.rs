/// Module for working with four-character codes.
///
/// Both container formats and the chunks inside them are identified by a fourcc,
/// stored little-endian so the first character of the code lands in the lowest byte.

/// Builds a fourcc value from its ASCII characters.
pub const fn fourcc(code: [u8; 4]) -> u32 {
    u32::from_le_bytes(code)
}

/// Renders a fourcc for display. Codes with non-printable bytes fall back to hex.
pub fn display(code: u32) -> String {
    let bytes = code.to_le_bytes();
    if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        bytes.iter().map(|b| *b as char).collect()
    } else {
        format!("{code:#010x}")
    }
}

/// Fourcc constants for the known container formats and chunk identifiers.
pub mod fcc {
    use super::fourcc;

    /// Material container.
    pub const AMAT: u32 = fourcc(*b"AMAT");
    /// Model container.
    pub const MODL: u32 = fourcc(*b"MODL");

    /// Shader data chunk of a material container.
    pub const DX9S: u32 = fourcc(*b"DX9S");
    /// Geometry chunk of a model container.
    pub const GEOM: u32 = fourcc(*b"GEOM");
    /// Material data chunk of a material container.
    pub const GRMT: u32 = fourcc(*b"GRMT");
    /// Skeleton chunk of a model container.
    pub const SKEL: u32 = fourcc(*b"SKEL");
}
