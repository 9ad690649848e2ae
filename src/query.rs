//! Query-string codec.
//!
//! Decoding and encoding both follow the WHATWG `application/x-www-form-urlencoded`
//! rules via [`form_urlencoded`], which is what the major Rust HTTP stacks use
//! under the hood. Using one codec for both directions is what makes the
//! rewrite safe: whatever [`decode`] produces, [`encode`] serializes back into
//! bytes that decode to the same pairs.

use std::borrow::Cow;

/// Decodes a raw query string into an ordered multi-map of key/value pairs.
///
/// Percent-escapes are decoded, `+` becomes a space, and blank values are
/// kept: `q=` and a bare `q` both decode to `("q", "")`. Malformed escapes
/// are passed through lossily rather than rejected, matching how the rest of
/// the ecosystem treats them. An empty query decodes to no pairs.
pub(crate) fn decode(raw: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(raw.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Encodes an ordered multi-map back into a raw query string.
///
/// Each key and value is percent-encoded (space as `+`), pairs are joined
/// with `&`, key and value with `=`. The empty multi-map encodes to `""`.
pub(crate) fn encode(pairs: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Decoded view of one pair, borrowing where no unescaping was needed.
///
/// Only used for read-side accessors on [`Request`](crate::Request); the
/// rewrite path owns its pairs outright.
pub(crate) fn decode_borrowed(raw: &str) -> impl Iterator<Item = (Cow<'_, str>, Cow<'_, str>)> {
    form_urlencoded::parse(raw.as_bytes())
}
