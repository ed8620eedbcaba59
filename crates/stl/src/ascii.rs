use std::io::BufRead;

use log::debug;
use stlarea_mesh::{Facet, Vector3};

use crate::{Result, StlError, StlFile};

// A facet normal line is followed by up to this many lines holding its
// vertices. This leaves room for the `outer loop` line that precedes them.
const VERTEX_SCAN_LINES: usize = 4;

/// Reads a byte stream line by line, tracking the line number.
struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }

    /// Returns the next line with surrounding whitespace removed, or `None`
    /// at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, since only the
    /// keywords and numbers of a line matter.
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(String::from_utf8_lossy(&self.buf).trim().to_owned()))
    }
}

fn parse_component(text: &str, line: usize) -> f64 {
    // Non-numeric text is read as zero instead of failing the whole file.
    text.parse().unwrap_or_else(|_| {
        debug!("line {line}: treating non-numeric value {text:?} as 0");
        0.0
    })
}

/// Parses the three components following `skip` leading keywords, if the
/// line has exactly that shape.
fn parse_vector(line: &str, skip: usize, line_number: usize) -> Option<Vector3> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != skip + 3 {
        return None;
    }
    Some(Vector3 {
        x: parse_component(fields[skip], line_number),
        y: parse_component(fields[skip + 1], line_number),
        z: parse_component(fields[skip + 2], line_number),
    })
}

/// Reads the facets of an ASCII STL file.
///
/// The expected layout is:
///
/// ```text
/// solid <name>
///   facet normal <nx> <ny> <nz>
///     outer loop
///       vertex <x> <y> <z>
///       vertex <x> <y> <z>
///       vertex <x> <y> <z>
///     endloop
///   endfacet
///   ...
/// endsolid <name>
/// ```
///
/// Parsing stops at the first `endsolid` line or at end of input. Lines that
/// are not part of a facet are ignored. Any malformed facet fails the whole
/// read; no partial result is returned.
pub fn read_ascii<R: BufRead>(r: R) -> Result<StlFile> {
    let mut lines = Lines::new(r);
    let mut facets = Vec::new();
    let mut count = 0;

    while let Some(line) = lines.next_line()? {
        if line.starts_with("solid") {
            continue;
        }
        if line.starts_with("endsolid") {
            break;
        }
        if !line.starts_with("facet normal") {
            continue;
        }

        count += 1;
        let facet_line = lines.line;
        let normal = parse_vector(&line, 2, facet_line)
            .ok_or(StlError::MalformedNormal { line: facet_line })?;

        // Lines in this window that aren't vertices (`outer loop`, `endloop`)
        // are consumed and skipped.
        let mut vertices = Vec::with_capacity(3);
        for _ in 0..VERTEX_SCAN_LINES {
            let Some(line) = lines.next_line()? else {
                break;
            };
            if !line.starts_with("vertex") {
                continue;
            }
            let vertex = parse_vector(&line, 1, lines.line)
                .ok_or(StlError::MalformedVertex { line: lines.line })?;
            vertices.push(vertex);
        }

        let vertices: [Vector3; 3] =
            vertices
                .try_into()
                .map_err(|v: Vec<Vector3>| StlError::MissingVertex {
                    line: facet_line,
                    found: v.len(),
                })?;
        facets.push(Facet::new(normal, vertices));
    }

    debug!("read {count} facets from ASCII STL ({} lines)", lines.line);
    Ok(StlFile::new(facets, count))
}
