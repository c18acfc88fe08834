//! Per-module graph — exclusive owner of its values and operations.
//!
//! A [`Graph`] holds the arenas backing one module's def-use graph together
//! with its named input and output port maps. All cross-references between
//! nodes are arena IDs, so the def-use relationship carries no ownership and
//! nodes live exactly as long as the graph. The dual updates that keep the
//! def-use graph consistent ([`add_operand`](Graph::add_operand) and
//! [`add_result`](Graph::add_result)) live here because they touch both
//! sides of the relationship.

use crate::arena::Arena;
use crate::error::IrError;
use crate::ids::{OperationId, ValueId};
use crate::operation::{Operation, OperationKind};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The IR container for a single module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// The module name, unique within the owning netlist.
    pub module_name: String,
    /// Whether this module is a top module of the design.
    pub is_top_module: bool,
    /// Whether this module is a black box (body not lowered).
    pub is_black_box: bool,
    values: Arena<ValueId, Value>,
    operations: Arena<OperationId, Operation>,
    input_ports: BTreeMap<String, ValueId>,
    output_ports: BTreeMap<String, ValueId>,
}

impl Graph {
    /// Creates an empty graph for the named module.
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            is_top_module: false,
            is_black_box: false,
            values: Arena::new(),
            operations: Arena::new(),
            input_ports: BTreeMap::new(),
            output_ports: BTreeMap::new(),
        }
    }

    /// Allocates a new value in this graph.
    pub fn create_value(&mut self, symbol: impl Into<String>, width: u32, signed: bool) -> ValueId {
        self.values.alloc(Value::new(symbol, width, signed))
    }

    /// Allocates a new operation in this graph.
    pub fn create_operation(&mut self, kind: OperationKind, symbol: impl Into<String>) -> OperationId {
        self.operations.alloc(Operation::new(kind, symbol))
    }

    /// Returns the value behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    pub fn value(&self, id: ValueId) -> &Value {
        self.values.get(id)
    }

    /// Mutable form of [`value`](Self::value).
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    pub fn value_mut(&mut self, id: ValueId) -> &mut Value {
        self.values.get_mut(id)
    }

    /// Returns the value behind `id`, or `None` for a foreign handle.
    pub fn try_value(&self, id: ValueId) -> Option<&Value> {
        self.values.try_get(id)
    }

    /// Returns the operation behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    pub fn operation(&self, id: OperationId) -> &Operation {
        self.operations.get(id)
    }

    /// Mutable form of [`operation`](Self::operation).
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this graph.
    pub fn operation_mut(&mut self, id: OperationId) -> &mut Operation {
        self.operations.get_mut(id)
    }

    /// Returns the operation behind `id`, or `None` for a foreign handle.
    pub fn try_operation(&self, id: OperationId) -> Option<&Operation> {
        self.operations.try_get(id)
    }

    /// Appends `value` to `op`'s operand list and records the matching use
    /// entry `(op, index)` on `value` in the same call.
    ///
    /// Fails without mutating anything if either handle is not owned by
    /// this graph.
    pub fn add_operand(&mut self, op: OperationId, value: ValueId) -> Result<(), IrError> {
        if !self.values.contains(value) {
            return Err(IrError::InvalidValue(value));
        }
        let operation = self
            .operations
            .try_get_mut(op)
            .ok_or(IrError::InvalidOperation(op))?;
        let index = operation.push_operand(value);
        self.values.get_mut(value).add_user(op, index);
        Ok(())
    }

    /// Appends `value` to `op`'s result list and records `op` as `value`'s
    /// defining operation, silently replacing any prior definer.
    ///
    /// Fails without mutating anything if either handle is not owned by
    /// this graph.
    pub fn add_result(&mut self, op: OperationId, value: ValueId) -> Result<(), IrError> {
        if !self.values.contains(value) {
            return Err(IrError::InvalidValue(value));
        }
        let operation = self
            .operations
            .try_get_mut(op)
            .ok_or(IrError::InvalidOperation(op))?;
        operation.push_result(value);
        self.values.get_mut(value).set_def_op(op);
        Ok(())
    }

    /// Registers `value` as the input port `name`, setting its input role
    /// flag. Re-registering `name` overwrites the mapping (last write wins).
    pub fn add_input_port(&mut self, name: impl Into<String>, value: ValueId) -> Result<(), IrError> {
        let backing = self
            .values
            .try_get_mut(value)
            .ok_or(IrError::InvalidValue(value))?;
        backing.is_input = true;
        self.input_ports.insert(name.into(), value);
        Ok(())
    }

    /// Registers `value` as the output port `name`, setting its output role
    /// flag. Re-registering `name` overwrites the mapping (last write wins).
    pub fn add_output_port(&mut self, name: impl Into<String>, value: ValueId) -> Result<(), IrError> {
        let backing = self
            .values
            .try_get_mut(value)
            .ok_or(IrError::InvalidValue(value))?;
        backing.is_output = true;
        self.output_ports.insert(name.into(), value);
        Ok(())
    }

    /// Returns the arena of owned values.
    pub fn values(&self) -> &Arena<ValueId, Value> {
        &self.values
    }

    /// Returns the arena of owned operations.
    pub fn operations(&self) -> &Arena<OperationId, Operation> {
        &self.operations
    }

    /// Returns the name-to-value input port map.
    pub fn input_ports(&self) -> &BTreeMap<String, ValueId> {
        &self.input_ports
    }

    /// Returns the name-to-value output port map.
    pub fn output_ports(&self) -> &BTreeMap<String, ValueId> {
        &self.output_ports
    }
}
