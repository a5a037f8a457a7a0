use crate::chunk::{ChunkData, Chunks};
use crate::chunk_record::ChunkRecord;
use crate::error::PackError;
use crate::file_header::FileHeader;
use crate::fourcc::{self, fcc};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Represents a loaded PackFile container, providing access to its chunks.
///
/// `PackFile` is the main entry point of the library. The const parameter is the
/// fourcc of the container format a given instantiation accepts; a buffer whose
/// header carries any other content type is rejected at load time, so every
/// later access can assume a well formed header.
///
/// # Usage
///
/// Typically, you create a `PackFile` by calling [`PackFile::open`] with the path
/// of an asset file, or [`PackFile::from_bytes`] with an in-memory buffer. Once
/// loaded, chunks can be located by identifier with [`PackFile::chunk_data`],
/// enumerated with [`PackFile::chunks`], or decoded into records with
/// [`PackFile::chunk`].
///
/// ```no_run
/// use packfile_rs::fourcc::fcc;
/// use packfile_rs::pack_file::MaterialPackFile;
///
/// let pack = MaterialPackFile::open("gw_default.amat").unwrap();
///
/// for chunk in pack.chunks() {
///     println!("{} v{}: {} bytes", chunk.identifier, chunk.version, chunk.data.len());
/// }
///
/// if let Some(material) = pack.chunk_data(fcc::GRMT) {
///     // ... decode the material payload as needed ...
/// }
/// ```
///
/// # Sharing
///
/// Cloning a `PackFile` is cheap: clones share the underlying buffer through a
/// reference counted handle, and the buffer is immutable once validated.
/// Reassigning one handle swaps in a fresh buffer and never disturbs data or
/// chunk views obtained through another handle.
#[derive(Debug, Clone)]
pub struct PackFile<const FILE_TYPE: u32> {
    /// The raw container bytes, shared between clones.
    data: Arc<Vec<u8>>,
    /// The validated file header, present once data is loaded.
    header: Option<FileHeader>,
}

impl<const FILE_TYPE: u32> PackFile<FILE_TYPE> {
    /// Creates an empty container with no data loaded.
    pub fn new() -> Self {
        PackFile {
            data: Arc::new(Vec::new()),
            header: None,
        }
    }

    /// Opens the file at `path` and validates it as a container of this format.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PackError> {
        let mut pack = Self::new();
        pack.load(path)?;
        Ok(pack)
    }

    /// Validates `data` as a container of this format.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, PackError> {
        let mut pack = Self::new();
        pack.assign(data)?;
        Ok(pack)
    }

    /// Replaces this container's contents with the file at `path`, read whole
    /// into memory.
    ///
    /// On failure the previously loaded contents are retained untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PackError> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        self.assign(data)
    }

    /// Replaces this container's contents with `data`.
    ///
    /// The buffer must be at least a file header long, start with the `PF`
    /// magic, and carry this instantiation's content type. Validation happens
    /// before any state is touched, so on failure the previously loaded
    /// contents are retained untouched.
    pub fn assign(&mut self, data: Vec<u8>) -> Result<(), PackError> {
        let header = FileHeader::read_from(&data)?;
        if header.content_type != FILE_TYPE {
            return Err(PackError::InvalidFormat(format!(
                "Content type mismatch: expected {}, found {}",
                fourcc::display(FILE_TYPE),
                fourcc::display(header.content_type)
            )));
        }

        tracing::debug!(
            "Assigned a {} byte {} container",
            data.len(),
            fourcc::display(FILE_TYPE)
        );
        self.data = Arc::new(data);
        self.header = Some(header);
        Ok(())
    }

    /// Returns the fourcc of this container's format, or zero while no data is
    /// loaded.
    pub fn file_type(&self) -> u32 {
        if self.header.is_some() {
            FILE_TYPE
        } else {
            0
        }
    }

    /// Returns the validated file header, if data is loaded.
    pub fn header(&self) -> Option<&FileHeader> {
        self.header.as_ref()
    }

    /// Iterates the chunk table in storage order. Empty while no data is loaded.
    pub fn chunks(&self) -> Chunks<'_> {
        match self.header {
            Some(_) => Chunks::new(&self.data[FileHeader::SIZE..]),
            None => Chunks::empty(),
        }
    }

    /// Looks for a chunk with the given identifier and returns a borrowed view
    /// of its payload if found.
    ///
    /// The first chunk in storage order wins when identifiers repeat. Absence is
    /// an expected outcome and is not reported as an error. The returned view is
    /// only valid while this container is alive and not reassigned; copy the
    /// payload if it needs to outlive the container.
    pub fn chunk_data(&self, identifier: u32) -> Option<ChunkData<'_>> {
        self.chunks().find(|chunk| chunk.identifier == identifier)
    }

    /// Looks for the chunk `R` decodes and returns it as an owned record.
    ///
    /// Returns `Ok(None)` when the container holds no such chunk; the decoder is
    /// only invoked on a located payload. A decoder failure is reported as an
    /// error, never as absence.
    pub fn chunk<R: ChunkRecord<FILE_TYPE>>(&self) -> Result<Option<R>, PackError> {
        match self.chunk_data(R::IDENTIFIER) {
            Some(chunk) => R::from_chunk(chunk.version, chunk.data).map(Some),
            None => Ok(None),
        }
    }
}

impl<const FILE_TYPE: u32> Default for PackFile<FILE_TYPE> {
    fn default() -> Self {
        Self::new()
    }
}

// Aliases for the known pack formats, as shipped by the original tooling.

/// A PackFile holding material data.
pub type MaterialPackFile = PackFile<{ fcc::AMAT }>;
/// A PackFile holding model data.
pub type ModelPackFile = PackFile<{ fcc::MODL }>;
