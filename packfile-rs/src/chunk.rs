use crate::chunk_header::ChunkHeader;
use crate::fourcc;

/// Represents a borrowed view of one chunk inside a container buffer.
///
/// The view stays valid for as long as the container that produced it is alive
/// and not reassigned; it never owns or copies the payload bytes.
#[derive(Debug, Clone, Copy)]
pub struct ChunkData<'a> {
    /// Fourcc identifying the chunk.
    pub identifier: u32,
    /// Record format version from the chunk header.
    pub version: u16,
    /// The chunk payload, everything after the chunk header.
    pub data: &'a [u8],
}

/// Iterates the chunk table of a PackFile buffer in storage order.
///
/// The iterator walks the bytes immediately following the file header. Trailing
/// bytes too short for a chunk header end the iteration, as does a table entry
/// whose declared span runs past the end of the buffer or whose declared header
/// size exceeds its span. A malformed entry is logged and treated as "no more
/// chunks" rather than reported as an error.
pub struct Chunks<'a> {
    remaining: &'a [u8],
}

impl<'a> Chunks<'a> {
    /// Creates an iterator over `table`, the container bytes immediately after
    /// the file header.
    pub fn new(table: &'a [u8]) -> Self {
        Chunks { remaining: table }
    }

    pub(crate) fn empty() -> Self {
        Chunks { remaining: &[] }
    }

    fn stop(&mut self) -> Option<ChunkData<'a>> {
        self.remaining = &[];
        None
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = ChunkData<'a>;

    fn next(&mut self) -> Option<ChunkData<'a>> {
        let header = ChunkHeader::read_from(self.remaining)?;
        let span = header.span();

        if span > self.remaining.len() {
            tracing::warn!(
                "Chunk {} declares a {} byte span with {} bytes remaining, ending scan",
                fourcc::display(header.magic),
                span,
                self.remaining.len()
            );
            return self.stop();
        }
        if header.header_size as usize > span {
            tracing::warn!(
                "Chunk {} declares a {} byte header inside a {} byte span, ending scan",
                fourcc::display(header.magic),
                header.header_size,
                span
            );
            return self.stop();
        }

        // The payload always starts after the fixed header structure, while its
        // length is derived from the header size the chunk itself declares.
        let payload_len = span - header.header_size as usize;
        if ChunkHeader::SIZE + payload_len > self.remaining.len() {
            tracing::warn!(
                "Chunk {} payload of {} bytes runs past the end of the buffer, ending scan",
                fourcc::display(header.magic),
                payload_len
            );
            return self.stop();
        }

        let data = &self.remaining[ChunkHeader::SIZE..ChunkHeader::SIZE + payload_len];
        self.remaining = &self.remaining[span..];

        Some(ChunkData {
            identifier: header.magic,
            version: header.version,
            data,
        })
    }
}
