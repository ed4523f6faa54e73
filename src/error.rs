//! Error type for the flat-array boundary and kind dispatch.

use thiserror::Error;

use crate::VolumeKind;

/// Errors raised when turning raw numbers into bounding volumes, or when
/// asking for containment between volumes of different kinds.
///
/// The containment predicates themselves never fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VolumeError {
    /// The flat array does not have the length its kind requires.
    #[error("{kind} expects {expected} numbers, got {actual}")]
    InvalidLength {
        /// Kind that was being decoded.
        kind: VolumeKind,
        /// Required number of elements.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },
    /// Inner and outer volumes are of different kinds.
    #[error("cannot test a {inner} against a {outer}")]
    KindMismatch {
        /// Kind of the candidate volume.
        inner: VolumeKind,
        /// Kind of the enclosing volume.
        outer: VolumeKind,
    },
    /// A kind name other than `region`, `sphere` or `box`.
    #[error("unknown bounding volume kind: {0}")]
    UnknownKind(String),
}

impl VolumeError {
    pub(crate) fn check_len(kind: VolumeKind, values: &[f64]) -> Result<(), Self> {
        let expected = kind.flat_len();
        if values.len() == expected {
            Ok(())
        } else {
            Err(Self::InvalidLength {
                kind,
                expected,
                actual: values.len(),
            })
        }
    }
}
