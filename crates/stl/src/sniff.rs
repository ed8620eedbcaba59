use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::Result;

/// Number of leading bytes inspected when guessing the encoding of a file.
pub const SNIFF_WINDOW: usize = 1024;

// ASCII files open with `solid <name>` and their first facet follows
// shortly after. Binary headers are free-form and almost never contain
// this keyword.
const ASCII_KEYWORD: &[u8] = b"facet";

/// Returns true if the first [`SNIFF_WINDOW`] bytes of `window` contain the
/// `facet` keyword.
pub fn is_ascii_bytes(window: &[u8]) -> bool {
    let window = &window[..window.len().min(SNIFF_WINDOW)];
    window
        .windows(ASCII_KEYWORD.len())
        .any(|w| w == ASCII_KEYWORD)
}

/// Guesses whether the file at `p` is an ASCII STL file.
///
/// This is a heuristic. A binary header that happens to contain `facet`, or
/// an ASCII file with more than [`SNIFF_WINDOW`] bytes before its first
/// facet, will be misclassified. Files shorter than the window, including
/// empty files, are simply scanned as far as they go.
pub fn is_ascii<P: AsRef<Path>>(p: P) -> Result<bool> {
    let f = File::open(p)?;
    let mut window = Vec::with_capacity(SNIFF_WINDOW);
    f.take(SNIFF_WINDOW as u64).read_to_end(&mut window)?;
    Ok(is_ascii_bytes(&window))
}
