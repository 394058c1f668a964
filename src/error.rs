//! Crate-level error types.

use std::fmt;

/// Malformed or mismatched geometry handed to the placement builder or the
/// reference mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Flat position buffer length is not a multiple of 3.
    NotTriples {
        /// Length of the offending buffer.
        len: usize,
    },
    /// Requested instance count does not match `positions.len() / 3`.
    CountMismatch {
        /// Instance count the caller asked for.
        expected: usize,
        /// Vertex count actually present in the buffer.
        actual: usize,
    },
    /// Triangle index buffer length is not a multiple of 3.
    IndicesNotTriples {
        /// Length of the offending buffer.
        len: usize,
    },
    /// A triangle index points past the end of the vertex buffer.
    IndexOutOfRange {
        /// The offending index value.
        index: u32,
        /// Number of vertices available.
        vertex_count: usize,
    },
    /// The color palette has no entries.
    EmptyPalette,
    /// A random-draw range has `min > max` or a non-finite bound.
    InvalidRange {
        /// Which static parameter the range belongs to.
        param: &'static str,
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotTriples { len } => {
                write!(f, "position buffer length {len} is not a multiple of 3")
            }
            Self::CountMismatch { expected, actual } => write!(
                f,
                "instance count {expected} does not match vertex count \
                 {actual}"
            ),
            Self::IndicesNotTriples { len } => {
                write!(f, "index buffer length {len} is not a multiple of 3")
            }
            Self::IndexOutOfRange {
                index,
                vertex_count,
            } => write!(
                f,
                "triangle index {index} out of range for {vertex_count} \
                 vertices"
            ),
            Self::EmptyPalette => write!(f, "color palette is empty"),
            Self::InvalidRange { param, min, max } => {
                write!(f, "invalid {param} range [{min}, {max}]")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Out-of-range instance index on a per-index uniform write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    /// The offending index.
    pub index: usize,
    /// Number of instances in the store.
    pub len: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "instance index {} out of range for {} instances",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexError {}

/// Errors produced by the stipple crate.
#[derive(Debug)]
pub enum StippleError {
    /// Mesh setup failed on malformed geometry.
    Geometry(GeometryError),
    /// Per-instance write outside the instance table.
    Index(IndexError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for StippleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(e) => write!(f, "geometry error: {e}"),
            Self::Index(e) => write!(f, "index error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for StippleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            Self::Index(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<GeometryError> for StippleError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

impl From<IndexError> for StippleError {
    fn from(e: IndexError) -> Self {
        Self::Index(e)
    }
}

impl From<std::io::Error> for StippleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
