use byteorder::{LittleEndian, ReadBytesExt};
use log::debug;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use stlarea_mesh::{Facet, Vector3};

use crate::{Result, StlFile};

/// Size of the free-form header that opens every binary file.
pub const HEADER_SIZE: u64 = 80;

/// Size of a single facet record: a normal and 3 vertices of 3 `f64`s each,
/// followed by the 2-byte attribute byte count.
pub const RECORD_SIZE: usize = 4 * 3 * 8 + 2;

fn read_vector<T: Read>(f: &mut T) -> std::io::Result<Vector3> {
    Ok(Vector3 {
        x: f.read_f64::<LittleEndian>()?,
        y: f.read_f64::<LittleEndian>()?,
        z: f.read_f64::<LittleEndian>()?,
    })
}

fn read_facet<T: Read>(f: &mut T) -> std::io::Result<Facet> {
    let normal = read_vector(f)?;
    let vertices = [read_vector(f)?, read_vector(f)?, read_vector(f)?];
    // After the geometry there is a 2-byte unsigned integer called the
    // "attribute byte count". There is no standard structure of this field, but
    // some applications use this for color data.
    let _attribute_byte_count = f.read_u16::<LittleEndian>()?;
    Ok(Facet::new(normal, vertices))
}

/// Reads the facets of a binary STL file.
///
/// Unlike the common binary STL layout, every coordinate here is stored as a
/// little-endian 64-bit float (see [`RECORD_SIZE`]). The facet count that
/// usually follows the header is not part of this layout either: records are
/// read back to back until the stream runs out.
///
/// The header is expected at the current position of `f`.
///
/// A record cut short by the end of the stream is dropped and ends the read
/// successfully. Any other I/O error fails the read.
pub fn read_binary<T: Read + Seek>(f: &mut T) -> Result<StlFile> {
    // There is no defined structure for the header but some implementations
    // will stash some metadata in it. We just skip it.
    f.seek(SeekFrom::Current(HEADER_SIZE as i64))?;

    let mut facets = Vec::new();
    loop {
        match read_facet(f) {
            Ok(facet) => facets.push(facet),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }
    }

    debug!("read {} facets from binary STL", facets.len());
    let count = facets.len();
    Ok(StlFile::new(facets, count))
}
