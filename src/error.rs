//! Unified error type.

use std::fmt;

/// The error type returned by splay's fallible operations.
///
/// The flatten logic and the middleware chain introduce no failure modes of
/// their own: splitting a string always succeeds and handlers express
/// application failures as [`Response`](crate::Response) values. What is
/// left is infrastructure — binding a port, accepting a connection — and
/// that is what this type carries.
#[derive(Debug)]
pub struct Error(std::io::Error);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "io: {}", self.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self(e)
    }
}
