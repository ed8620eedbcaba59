use thiserror::Error;

pub type Result<T> = std::result::Result<T, StlError>;

/// Errors produced while reading an STL file.
///
/// Running out of input is never an error on its own: both parsers stop at
/// end of stream and return what they have read so far.
#[derive(Debug, Error)]
pub enum StlError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A `facet normal` line did not have exactly three components.
    #[error("malformed facet normal found (line {line})")]
    MalformedNormal { line: usize },

    /// A `vertex` line did not have exactly three components.
    #[error("malformed vertex found (line {line})")]
    MalformedVertex { line: usize },

    /// A facet did not list exactly three vertices.
    #[error("missing vertex found (facet on line {line} has {found} vertices)")]
    MissingVertex { line: usize, found: usize },
}
