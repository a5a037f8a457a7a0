use crate::error::PackError;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

/// Magic bytes at the start of every PackFile.
pub const PACK_MAGIC: [u8; 2] = *b"PF";

/// Represents the fixed header at the start of every PackFile.
///
/// The header is 12 bytes on disk, packed, with all multi-byte fields little-endian.
#[derive(Debug, Clone, Copy)]
pub struct FileHeader {
    /// Magic bytes, always `b"PF"`.
    pub magic: [u8; 2],
    /// Format metadata, not interpreted by the reader.
    pub descriptor_type: u16,
    /// Reserved, written as zero.
    pub zero: u16,
    /// Declared header size. The chunk table always starts at [`FileHeader::SIZE`],
    /// so this field is carried but never used to compute offsets.
    pub header_size: u16,
    /// Fourcc of the content stored in this container.
    pub content_type: u32,
}

impl FileHeader {
    /// Size of the header as written, in bytes.
    pub const SIZE: usize = 12;

    /// Parses a file header from the start of `data`.
    ///
    /// Fails with [`PackError::InvalidFormat`] when the buffer is shorter than the
    /// header (12 bytes) or the magic bytes are wrong. Content type validation against the
    /// expected container format happens in `PackFile::assign`.
    pub fn read_from(data: &[u8]) -> Result<Self, PackError> {
        if data.len() < Self::SIZE {
            return Err(PackError::InvalidFormat(format!(
                "Data too short for a pack file header: {} bytes",
                data.len()
            )));
        }

        let mut reader = Cursor::new(data);
        let mut magic = [0u8; 2];
        reader.read_exact(&mut magic)?;
        let descriptor_type = reader.read_u16::<LittleEndian>()?;
        let zero = reader.read_u16::<LittleEndian>()?;
        let header_size = reader.read_u16::<LittleEndian>()?;
        let content_type = reader.read_u32::<LittleEndian>()?;

        if magic != PACK_MAGIC {
            return Err(PackError::InvalidFormat(format!(
                "Bad pack file magic: {magic:02x?}"
            )));
        }

        Ok(FileHeader {
            magic,
            descriptor_type,
            zero,
            header_size,
            content_type,
        })
    }
}
