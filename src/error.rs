//! Error types.

use alloc::string::String;

use crate::alignment::Alignment;
use crate::cell::CellId;
use crate::geometry::Size;

/// Layout computation error.
///
/// Every variant except [`CellNotFound`](Self::CellNotFound) aborts an
/// arrangement pass before any child of the offending container is moved.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A non-collapsed cell's alignment lacks a horizontal or vertical flag.
    #[error("{cell} has alignment `{alignment}` without both a horizontal and a vertical component")]
    MissingAxis { cell: CellId, alignment: Alignment },
    /// A child reported a negative or NaN natural size.
    #[error("{cell} reported invalid natural size {size}")]
    InvalidSize { cell: CellId, size: Size },
    /// Nested containers went deeper than the configured limit.
    #[error("container nesting exceeds depth limit {limit}")]
    DepthExceeded { limit: usize },
    /// A cell handle no longer refers to a cell of this container.
    #[error("{0} not found")]
    CellNotFound(CellId),
}

/// Error returned when an alignment string contains an unknown flag name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown alignment flag `{token}`")]
pub struct ParseAlignmentError {
    /// The offending name, as written.
    pub token: String,
}
