//! Error type shared by the fallible queries and constructors.

use crate::shape::ShapeKind;

/// Failure of a query or constructor. A plain miss is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The pair is declared in the call surface but has no algorithm behind it.
    #[error("{lhs} against {rhs} is not supported")]
    Unsupported { lhs: ShapeKind, rhs: ShapeKind },
    /// A direction had to be derived from a zero-length vector.
    #[error("degenerate geometry: {0}")]
    Degenerate(&'static str),
}

impl Error {
    #[inline]
    pub fn unsupported(lhs: ShapeKind, rhs: ShapeKind) -> Error {
        tracing::debug!(%lhs, %rhs, "unsupported shape pairing requested");
        Error::Unsupported { lhs, rhs }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_message_names_both_kinds() {
        let e = Error::unsupported(ShapeKind::Aabb, ShapeKind::Capsule);
        assert_eq!(e, Error::Unsupported { lhs: ShapeKind::Aabb, rhs: ShapeKind::Capsule });
        assert_eq!(e.to_string(), "aabb against capsule is not supported");
    }
}
