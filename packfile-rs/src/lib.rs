//! # packfile-rs
//!
//! `packfile-rs` is a pure Rust reader for the chunked PackFile container format
//! used to store typed game asset records (materials, models, etc.).
//! It validates the container header, walks the chunk table, and hands chunk
//! payloads to caller supplied record decoders.
//!
//! ## Features
//! - Load containers from a file or an in-memory buffer
//! - Locate chunks by four-character code, or enumerate the whole table
//! - Decode chunks into owned records through a compile-time keyed registry
//! - Cheap, reference counted sharing of a loaded container
//!
//! ## Usage
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! packfile-rs = "0.1"
//! ```
//!
//! ### Example: Listing and Looking Up Chunks
//! ```no_run
//! use packfile_rs::fourcc::{self, fcc};
//! use packfile_rs::pack_file::MaterialPackFile;
//!
//! // Open a material container
//! let pack = MaterialPackFile::open("gw_default.amat").unwrap();
//!
//! // List all chunks
//! for chunk in pack.chunks() {
//!     println!(
//!         "{} v{}: {} bytes",
//!         fourcc::display(chunk.identifier),
//!         chunk.version,
//!         chunk.data.len()
//!     );
//! }
//!
//! // Look up one chunk by identifier
//! let material = pack.chunk_data(fcc::GRMT).expect("no material chunk");
//! println!("material payload is {} bytes", material.data.len());
//! ```

pub mod chunk;
pub mod chunk_header;
pub mod chunk_record;
pub mod error;
pub mod file_header;
pub mod fourcc;
pub mod pack_file;
