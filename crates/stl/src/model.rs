use std::io::{BufReader, Read, Seek};
use std::path::Path;

use log::debug;
use stlarea_mesh::{Facet, ReducerConfig};

use crate::{ascii::read_ascii, binary::read_binary, sniff, Result};

/// The facets read from an STL file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StlFile {
    facets: Vec<Facet>,
    count: usize,
}

impl StlFile {
    pub(crate) fn new(facets: Vec<Facet>, count: usize) -> Self {
        Self { facets, count }
    }

    /// Returns the number of facets that were read.
    pub fn facet_count(&self) -> usize {
        self.count
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn into_inner(self) -> Vec<Facet> {
        let StlFile { facets, .. } = self;
        facets
    }
}

/// Something that can turn an STL byte stream into facets and reduce those
/// facets into a surface area.
pub trait Model {
    /// Reads every facet from `r`.
    ///
    /// On error nothing that was read so far is returned.
    fn facet_counter<R: Read + Seek>(&self, r: &mut R) -> Result<StlFile>;

    /// Sums the area of `facets`. See [`stlarea_mesh::surface_area`].
    fn surface_area(&self, facets: &[Facet]) -> f64 {
        stlarea_mesh::surface_area(facets)
    }

    /// Like [`Model::surface_area`] with an explicit reducer configuration.
    fn surface_area_with(&self, facets: &[Facet], config: &ReducerConfig) -> f64 {
        stlarea_mesh::surface_area_with(facets, config)
    }
}

/// The ASCII encoding, read line by line from the current stream position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascii;

impl Model for Ascii {
    fn facet_counter<R: Read + Seek>(&self, r: &mut R) -> Result<StlFile> {
        read_ascii(BufReader::new(r))
    }
}

/// The binary encoding, with its header at the current stream position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binary;

impl Model for Binary {
    fn facet_counter<R: Read + Seek>(&self, r: &mut R) -> Result<StlFile> {
        read_binary(r)
    }
}

/// An encoding picked at runtime by sniffing the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StlFormat {
    Ascii,
    Binary,
}

impl StlFormat {
    /// Picks the encoding from the leading bytes of a file.
    pub fn sniff(window: &[u8]) -> Self {
        Self::from_is_ascii(sniff::is_ascii_bytes(window))
    }

    /// Picks the encoding of the file at `p`.
    pub fn detect<P: AsRef<Path>>(p: P) -> Result<Self> {
        let p = p.as_ref();
        let format = Self::from_is_ascii(sniff::is_ascii(p)?);
        debug!("{} looks like {format:?} STL", p.display());
        Ok(format)
    }

    fn from_is_ascii(is_ascii: bool) -> Self {
        if is_ascii {
            StlFormat::Ascii
        } else {
            StlFormat::Binary
        }
    }
}

impl Model for StlFormat {
    fn facet_counter<R: Read + Seek>(&self, r: &mut R) -> Result<StlFile> {
        match self {
            StlFormat::Ascii => Ascii.facet_counter(r),
            StlFormat::Binary => Binary.facet_counter(r),
        }
    }
}
