mod ascii;
mod binary;
mod error;
mod model;
mod sniff;

use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

pub use ascii::read_ascii;
pub use binary::{read_binary, HEADER_SIZE, RECORD_SIZE};
pub use error::*;
pub use model::*;
pub use sniff::{is_ascii, is_ascii_bytes, SNIFF_WINDOW};

/// Opens the file at `p`, detects its encoding and reads its facets.
pub fn read_stl<P: AsRef<Path>>(p: P) -> Result<StlFile> {
    let p = p.as_ref();
    // Open before sniffing so a missing file is reported by the open itself.
    let mut f = BufReader::new(std::fs::File::open(p)?);
    let format = StlFormat::detect(p)?;
    format.facet_counter(&mut f)
}

/// Detects the encoding of an in-memory STL file and reads its facets.
pub fn parse_stl(data: &[u8]) -> Result<StlFile> {
    let mut c = Cursor::new(data);
    StlFormat::sniff(data).facet_counter(&mut c)
}

pub trait StlReader: Read {
    fn read_stl(&mut self) -> Result<StlFile>;
}

impl<T: Read + Seek> StlReader for T {
    /// Sniffs the encoding from the current position onwards, then rewinds
    /// and reads the facets.
    fn read_stl(&mut self) -> Result<StlFile> {
        let start = self.stream_position()?;
        let mut window = Vec::with_capacity(SNIFF_WINDOW);
        self.by_ref()
            .take(SNIFF_WINDOW as u64)
            .read_to_end(&mut window)?;
        self.seek(SeekFrom::Start(start))?;
        StlFormat::sniff(&window).facet_counter(self)
    }
}
