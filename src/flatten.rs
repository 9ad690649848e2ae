//! The core transform: one multi-map in, one multi-map out.
//!
//! Everything else in this crate is plumbing around [`flatten`]. It has no
//! opinion about HTTP, percent-encoding, or where the pairs came from — it
//! splits values on a literal delimiter and re-emits them in place.

/// Splits every value on `delimiter` and re-emits each piece as its own
/// entry under the same key.
///
/// Order is preserved twice over: entries keep their relative input order,
/// and within one entry the pieces appear in split order. An entry whose
/// value does not contain the delimiter passes through unchanged, so the
/// function is a no-op on already-flat input.
///
/// Splitting never yields zero pieces — an empty value stays as one empty
/// entry, and a delimiter-only value becomes a run of empty entries:
///
/// ```rust
/// use splay::flatten;
///
/// let pairs = vec![("q".to_owned(), ",,".to_owned())];
/// assert_eq!(flatten(pairs, ",").len(), 3);
/// ```
///
/// Keys are never invented or dropped; a key absent from the input is absent
/// from the output.
pub fn flatten(entries: Vec<(String, String)>, delimiter: &str) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        for piece in value.split(delimiter) {
            out.push((key.clone(), piece.to_owned()));
        }
    }
    out
}
