//! Value definitions — typed signal nodes in the def-use graph.
//!
//! A [`Value`] represents a named wire of a fixed bit width. It records at
//! most one defining operation and the ordered list of operand positions
//! that read it. Both records are maintained by the owning
//! [`Graph`](crate::graph::Graph); see [`Graph::add_operand`](crate::graph::Graph::add_operand)
//! and [`Graph::add_result`](crate::graph::Graph::add_result).

use crate::ids::OperationId;
use serde::{Deserialize, Serialize};

/// One read of a value: the consuming operation and the operand position
/// at which the value appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Use {
    /// The operation consuming the value.
    pub operation: OperationId,
    /// The position in that operation's operand list.
    pub operand_index: usize,
}

/// A typed signal node within a graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Value {
    /// The signal name.
    pub symbol: String,
    /// The bit width.
    pub width: u32,
    /// Whether the signal is interpreted as signed.
    pub signed: bool,
    /// Whether the value backs an input port of its graph.
    pub is_input: bool,
    /// Whether the value backs an output port of its graph.
    pub is_output: bool,
    def_op: Option<OperationId>,
    users: Vec<Use>,
}

impl Value {
    /// Creates a new value with no definer, no users, and no port role.
    pub fn new(symbol: impl Into<String>, width: u32, signed: bool) -> Self {
        Self {
            symbol: symbol.into(),
            width,
            signed,
            is_input: false,
            is_output: false,
            def_op: None,
            users: Vec::new(),
        }
    }

    /// Returns the operation currently recorded as defining this value.
    pub fn def_op(&self) -> Option<OperationId> {
        self.def_op
    }

    /// Returns the ordered list of uses of this value.
    pub fn users(&self) -> &[Use] {
        &self.users
    }

    /// Records `op` as the defining operation, replacing any previous
    /// definer. Last writer wins; uniqueness is not enforced at this layer.
    pub(crate) fn set_def_op(&mut self, op: OperationId) {
        self.def_op = Some(op);
    }

    /// Appends a use record.
    pub(crate) fn add_user(&mut self, operation: OperationId, operand_index: usize) {
        self.users.push(Use {
            operation,
            operand_index,
        });
    }
}
