//! Error types for the spanwise core library.
//!
//! Defines the error enums exposed by the public API, their stable codes, and a
//! convenient result alias.

use std::{fmt, io};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Broad category of a [`ForestError`].
///
/// Callers that only need to know whether the input was malformed or merely
/// referenced a missing node can branch on the kind instead of every variant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A size or weight argument was not acceptable.
    InvalidArgument,
    /// A node id fell outside `[0, node_count)`.
    OutOfRange,
}

impl ErrorKind {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::OutOfRange => "OUT_OF_RANGE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced by the disjoint set and spanning forest operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ForestError {
    /// A signed node count was negative.
    #[error("node count must be non-negative (got {got})")]
    NegativeNodeCount {
        /// The rejected node count.
        got: i64,
    },
    /// A signed edge count was negative.
    #[error("edge count must be non-negative (got {got})")]
    NegativeEdgeCount {
        /// The rejected edge count.
        got: i64,
    },
    /// An edge carried a weight without a total order (NaN or infinity).
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// The first endpoint as provided.
        left: usize,
        /// The second endpoint as provided.
        right: usize,
    },
    /// A node id was not below the node count.
    #[error("node {node} is out of range for node_count {node_count}")]
    NodeOutOfRange {
        /// The offending node id.
        node: usize,
        /// The number of nodes in the structure or graph.
        node_count: usize,
    },
    /// A signed node id was negative.
    #[error("node {node} is out of range: ids must be non-negative")]
    NegativeNodeId {
        /// The offending node id.
        node: i64,
    },
    /// The selected weights sum to a value the weight type cannot hold.
    #[error("total weight of {edge_count} selected edges overflows the weight type")]
    WeightOverflow {
        /// Number of edges in the forest.
        edge_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ForestError`] variants.
    enum ForestErrorCode for ForestError {
        /// A signed node count was negative.
        NegativeNodeCount => NegativeNodeCount { .. } => "SPANWISE_NEGATIVE_NODE_COUNT",
        /// A signed edge count was negative.
        NegativeEdgeCount => NegativeEdgeCount { .. } => "SPANWISE_NEGATIVE_EDGE_COUNT",
        /// An edge carried a non-finite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "SPANWISE_NON_FINITE_WEIGHT",
        /// A node id was not below the node count.
        NodeOutOfRange => NodeOutOfRange { .. } => "SPANWISE_NODE_OUT_OF_RANGE",
        /// A signed node id was negative.
        NegativeNodeId => NegativeNodeId { .. } => "SPANWISE_NEGATIVE_NODE_ID",
        /// The forest's total weight overflowed.
        WeightOverflow => WeightOverflow { .. } => "SPANWISE_WEIGHT_OVERFLOW",
    }
}

impl ForestError {
    /// Returns the [`ErrorKind`] this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeNodeCount { .. }
            | Self::NegativeEdgeCount { .. }
            | Self::NonFiniteWeight { .. }
            | Self::WeightOverflow { .. } => ErrorKind::InvalidArgument,
            Self::NodeOutOfRange { .. } | Self::NegativeNodeId { .. } => ErrorKind::OutOfRange,
        }
    }
}

/// An error produced while reading the edge-list text format.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The underlying reader failed.
    #[error("failed to read edge list: {source}")]
    Io {
        /// Error raised by the reader.
        #[source]
        source: io::Error,
    },
    /// The input held no `<node_count> <edge_count>` header line.
    #[error("edge list is missing the `<node_count> <edge_count>` header")]
    MissingHeader,
    /// A line could not be parsed.
    #[error("line {line}: {reason}")]
    Malformed {
        /// One-based line number in the input.
        line: usize,
        /// Human-readable description of the problem.
        reason: String,
    },
    /// The number of edge lines differed from the header.
    #[error("header declares {declared} edges but {found} were found")]
    EdgeCountMismatch {
        /// Edge count from the header.
        declared: usize,
        /// Number of edge lines actually present.
        found: usize,
    },
    /// A parsed value violated a graph constraint.
    #[error("line {line}: {error}")]
    Invalid {
        /// One-based line number in the input.
        line: usize,
        /// Underlying validation failure.
        #[source]
        error: ForestError,
    },
}

define_error_codes! {
    /// Stable codes describing [`EdgeListError`] variants.
    enum EdgeListErrorCode for EdgeListError {
        /// The underlying reader failed.
        Io => Io { .. } => "EDGE_LIST_IO",
        /// The input held no header line.
        MissingHeader => MissingHeader => "EDGE_LIST_MISSING_HEADER",
        /// A line could not be parsed.
        Malformed => Malformed { .. } => "EDGE_LIST_MALFORMED",
        /// The number of edge lines differed from the header.
        EdgeCountMismatch => EdgeCountMismatch { .. } => "EDGE_LIST_EDGE_COUNT_MISMATCH",
        /// A parsed value violated a graph constraint.
        Invalid => Invalid { .. } => "EDGE_LIST_INVALID",
    }
}

impl EdgeListError {
    /// Retrieve the inner [`ForestError`] when the failure was a graph
    /// constraint violation.
    #[must_use]
    pub const fn forest_error(&self) -> Option<&ForestError> {
        match self {
            Self::Invalid { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for EdgeListError {
    fn from(source: io::Error) -> Self {
        Self::Io { source }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ForestError>;
