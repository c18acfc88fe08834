//! Error type for IR construction.

use crate::ids::{OperationId, ValueId};

/// An error raised by an IR mutation that would violate a structural
/// invariant.
///
/// Handle errors replace the null-pointer failures of a pointer-based IR:
/// an ID that is out of range for the graph being mutated (stale, or
/// allocated by a different graph) is rejected before any state changes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IrError {
    /// A value handle does not refer to a value owned by this graph.
    #[error("value handle {0:?} is not owned by this graph")]
    InvalidValue(ValueId),

    /// An operation handle does not refer to an operation owned by this graph.
    #[error("operation handle {0:?} is not owned by this graph")]
    InvalidOperation(OperationId),

    /// A graph with the same module name already exists in the netlist.
    #[error("graph with module name `{0}` already exists in netlist")]
    DuplicateGraph(String),

    /// An attribute key was empty.
    #[error("attribute key must not be empty")]
    EmptyAttributeKey,

    /// An attribute value failed JSON-compatibility validation.
    #[error("attribute value must be JSON-compatible (contains a non-finite double)")]
    UnsupportedAttributeValue,
}
