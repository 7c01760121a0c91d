//! Path derivation for input and output files.

use crate::convert::ConvertError;

/// File name portion of a path: everything after the last backslash, or the
/// whole string when there is none.
///
/// Inputs are treated as Windows drag-and-drop strings, so backslash is the
/// only separator recognized. A forward-slash path comes back whole; that
/// only affects the displayed name, since classification scans for the same
/// substrings either way.
pub fn file_name(path: &str) -> &str {
    match path.rfind('\\') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Output path: the input path truncated after its FIRST '.' with the
/// literal extension `gba` appended.
///
/// `a.b.gbc` becomes `a.gba`. The first dot wins even when it sits in a
/// directory component. A dot-free path is rejected with `InvalidInputPath`.
pub fn output_path(path: &str) -> Result<String, ConvertError> {
    let dot = path
        .find('.')
        .ok_or_else(|| ConvertError::InvalidInputPath {
            path: path.to_string(),
        })?;
    Ok(format!("{}gba", &path[..=dot]))
}
