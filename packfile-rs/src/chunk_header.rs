use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Represents the fixed header prefixed to every chunk in a PackFile.
///
/// The header is 16 bytes on disk, packed, with all fields little-endian.
#[derive(Debug, Clone, Copy)]
pub struct ChunkHeader {
    /// Fourcc identifying this chunk.
    pub magic: u32,
    /// Byte count from the end of this field to the end of the chunk payload.
    pub next_chunk_offset: u32,
    /// Record format version, handed through to the record decoder.
    pub version: u16,
    /// Size of this chunk header as written. May differ from [`ChunkHeader::SIZE`].
    pub header_size: u16,
    /// Offset to an optional type descriptor, unused by the reader.
    pub descriptor_offset: u32,
}

impl ChunkHeader {
    /// Size of the header structure, in bytes.
    pub const SIZE: usize = 16;

    /// Offset base of `next_chunk_offset`: the field sits 4 bytes into the header
    /// and is 4 bytes wide, so the distance it encodes is measured from byte 8 of
    /// the chunk.
    pub(crate) const NEXT_OFFSET_BASE: usize = 8;

    /// Parses a chunk header from the start of `data`.
    ///
    /// Returns `None` when fewer than [`ChunkHeader::SIZE`] bytes remain, which a
    /// table scan treats as the end of the chunk table.
    pub fn read_from(data: &[u8]) -> Option<Self> {
        if data.len() < Self::SIZE {
            return None;
        }

        let mut reader = Cursor::new(data);
        let magic = reader.read_u32::<LittleEndian>().ok()?;
        let next_chunk_offset = reader.read_u32::<LittleEndian>().ok()?;
        let version = reader.read_u16::<LittleEndian>().ok()?;
        let header_size = reader.read_u16::<LittleEndian>().ok()?;
        let descriptor_offset = reader.read_u32::<LittleEndian>().ok()?;

        Some(ChunkHeader {
            magic,
            next_chunk_offset,
            version,
            header_size,
            descriptor_offset,
        })
    }

    /// Total span of this chunk in the table, header included.
    pub fn span(&self) -> usize {
        self.next_chunk_offset as usize + Self::NEXT_OFFSET_BASE
    }
}
