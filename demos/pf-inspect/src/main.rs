//! # pf-inspect
//!
//! `pf-inspect` is a small command line tool for looking inside PackFile assets.
//! It prints the container header and one line per chunk in the table, which is
//! handy when figuring out what an unknown asset file holds.
//!
//! ## Usage
//! ```sh
//! cargo run -p pf-inspect -- path/to/asset.amat
//! ```

use clap::Parser;
use packfile_rs::chunk::Chunks;
use packfile_rs::file_header::FileHeader;
use packfile_rs::fourcc;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pf-inspect", about = "Lists the chunks of a PackFile asset")]
struct Args {
    /// The pack file to inspect.
    file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let data = std::fs::read(&args.file)?;
    let header = FileHeader::read_from(&data)?;

    println!(
        "{}: {} container, descriptor type {}, declared header size {}",
        args.file.display(),
        fourcc::display(header.content_type),
        header.descriptor_type,
        header.header_size
    );

    for chunk in Chunks::new(&data[FileHeader::SIZE..]) {
        println!(
            "  {} v{:<3} {} bytes",
            fourcc::display(chunk.identifier),
            chunk.version,
            chunk.data.len()
        );
    }

    Ok(())
}
