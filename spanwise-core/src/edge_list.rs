//! Plain-text edge lists.
//!
//! The format is the one used by competitive-programming graph tasks:
//!
//! ```text
//! # comment lines and blank lines are ignored
//! <node_count> <edge_count>
//! <u> <v> [<w>]
//! ...
//! ```
//!
//! Node labels may be zero- or one-based; [`EdgeList`] always stores
//! zero-based ids.

use std::{fmt, io::BufRead, str::FromStr};

use tracing::{Span, field, instrument};

use crate::{
    Edge, Weight,
    connectivity::Road,
    disjoint_set::node_count_from_signed,
    error::{EdgeListError, ForestError},
};

/// Label of the first node in the text format.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum IndexBase {
    /// Nodes are labelled `0..n`.
    #[default]
    Zero,
    /// Nodes are labelled `1..=n`.
    One,
}

impl IndexBase {
    const fn offset(self) -> i64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    /// Converts a zero-based id back into this base's label.
    #[must_use]
    pub const fn label(self, node: usize) -> usize {
        match self {
            Self::Zero => node,
            Self::One => node.saturating_add(1),
        }
    }
}

/// Shape of the edge-list text.
///
/// # Examples
/// ```
/// use spanwise_core::{EdgeListFormat, IndexBase};
///
/// let format = EdgeListFormat::new()
///     .with_index_base(IndexBase::One)
///     .with_weights(false);
/// assert_eq!(format.index_base(), IndexBase::One);
/// assert!(!format.weighted());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdgeListFormat {
    index_base: IndexBase,
    weighted: bool,
}

impl Default for EdgeListFormat {
    fn default() -> Self {
        Self {
            index_base: IndexBase::Zero,
            weighted: true,
        }
    }
}

impl EdgeListFormat {
    /// Zero-based, weighted edge lines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the node label base.
    #[must_use]
    pub const fn with_index_base(mut self, index_base: IndexBase) -> Self {
        self.index_base = index_base;
        self
    }

    /// Sets whether edge lines carry a third weight column.
    #[must_use]
    pub const fn with_weights(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Returns the node label base.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index_base(&self) -> IndexBase { self.index_base }

    /// Returns `true` when edge lines carry weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weighted(&self) -> bool { self.weighted }
}

/// A validated graph read from an edge list.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeList<W> {
    node_count: usize,
    edges: Vec<Edge<W>>,
}

impl<W: Weight> EdgeList<W> {
    /// Returns the declared node count.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the edges with zero-based endpoints, in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the endpoints of every edge, dropping weights.
    #[must_use]
    pub fn roads(&self) -> Vec<Road> {
        self.edges
            .iter()
            .map(|edge| (edge.source(), edge.target()))
            .collect()
    }

    /// Consumes the list, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }
}

/// Reads and validates an edge list.
///
/// Unweighted lines receive [`Weight::zero`]. Every endpoint is checked
/// against the header's node count, and every weight for validity, before the
/// list is returned.
///
/// # Errors
/// Returns [`EdgeListError`] when the reader fails, the header is missing, a
/// line is malformed, the edge count differs from the header, or a value
/// violates a graph constraint (negative counts, negative or out-of-range
/// node ids, non-finite weights).
///
/// # Examples
/// ```
/// use spanwise_core::{EdgeListFormat, read_edge_list};
///
/// let text = "3 2\n0 1 4\n1 2 5\n";
/// let list = read_edge_list::<u32, _>(text.as_bytes(), EdgeListFormat::new())?;
/// assert_eq!(list.node_count(), 3);
/// assert_eq!(list.edges()[1].weight(), 5);
/// # Ok::<(), spanwise_core::EdgeListError>(())
/// ```
#[instrument(
    name = "core.edge_list.read",
    err,
    skip(reader, format),
    fields(
        index_base = ?format.index_base,
        weighted = format.weighted,
        node_count = field::Empty,
        edge_count = field::Empty,
    ),
)]
pub fn read_edge_list<W, R>(reader: R, format: EdgeListFormat) -> Result<EdgeList<W>, EdgeListError>
where
    W: Weight + FromStr,
    W::Err: fmt::Display,
    R: BufRead,
{
    let mut header: Option<(usize, usize)> = None;
    let mut edges = Vec::new();
    let mut found = 0_usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let Some((node_count, declared)) = header else {
            let parsed = parse_header(content, line_no)?;
            edges.reserve(parsed.1.min(1 << 16));
            header = Some(parsed);
            continue;
        };

        found += 1;
        if found > declared {
            continue;
        }
        edges.push(parse_edge(content, line_no, node_count, format)?);
    }

    let (node_count, declared) = header.ok_or(EdgeListError::MissingHeader)?;
    if found != declared {
        return Err(EdgeListError::EdgeCountMismatch { declared, found });
    }

    let span = Span::current();
    span.record("node_count", node_count);
    span.record("edge_count", edges.len());
    Ok(EdgeList { node_count, edges })
}

fn parse_header(content: &str, line: usize) -> Result<(usize, usize), EdgeListError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [nodes, edges] = fields.as_slice() else {
        return Err(EdgeListError::Malformed {
            line,
            reason: format!("expected `<node_count> <edge_count>`, found {} fields", fields.len()),
        });
    };
    let nodes = parse_integer(nodes, "node count", line)?;
    let edges = parse_integer(edges, "edge count", line)?;

    let node_count =
        node_count_from_signed(nodes).map_err(|error| EdgeListError::Invalid { line, error })?;
    let edge_count = usize::try_from(edges).map_err(|_| EdgeListError::Invalid {
        line,
        error: ForestError::NegativeEdgeCount { got: edges },
    })?;
    Ok((node_count, edge_count))
}

fn parse_edge<W>(
    content: &str,
    line: usize,
    node_count: usize,
    format: EdgeListFormat,
) -> Result<Edge<W>, EdgeListError>
where
    W: Weight + FromStr,
    W::Err: fmt::Display,
{
    let fields: Vec<&str> = content.split_whitespace().collect();
    let expected = if format.weighted { 3 } else { 2 };
    if fields.len() != expected {
        return Err(EdgeListError::Malformed {
            line,
            reason: format!("expected {expected} fields, found {}", fields.len()),
        });
    }

    let source = parse_node(fields[0], line, node_count, format.index_base)?;
    let target = parse_node(fields[1], line, node_count, format.index_base)?;
    let weight = match fields.get(2) {
        Some(raw) => raw.parse::<W>().map_err(|err| EdgeListError::Malformed {
            line,
            reason: format!("invalid weight `{raw}`: {err}"),
        })?,
        None => W::zero(),
    };
    if !weight.is_valid() {
        return Err(EdgeListError::Invalid {
            line,
            error: ForestError::NonFiniteWeight {
                left: format.index_base.label(source),
                right: format.index_base.label(target),
            },
        });
    }
    Ok(Edge::new(source, target, weight))
}

fn parse_node(
    raw: &str,
    line: usize,
    node_count: usize,
    base: IndexBase,
) -> Result<usize, EdgeListError> {
    let label = parse_integer(raw, "node id", line)?;
    let invalid = |error| EdgeListError::Invalid { line, error };
    if label < 0 {
        return Err(invalid(ForestError::NegativeNodeId { node: label }));
    }
    let out_of_range = || ForestError::NodeOutOfRange {
        node: usize::try_from(label).unwrap_or(usize::MAX),
        node_count,
    };
    let node = usize::try_from(label - base.offset()).map_err(|_| invalid(out_of_range()))?;
    if node >= node_count {
        return Err(invalid(out_of_range()));
    }
    Ok(node)
}

fn parse_integer(raw: &str, what: &str, line: usize) -> Result<i64, EdgeListError> {
    raw.parse::<i64>().map_err(|err| EdgeListError::Malformed {
        line,
        reason: format!("invalid {what} `{raw}`: {err}"),
    })
}
