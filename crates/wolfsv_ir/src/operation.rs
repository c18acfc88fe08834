//! Operation definitions — the computational nodes of the def-use graph.
//!
//! An [`Operation`] consumes operand values, produces result values, and
//! carries a string-keyed bag of JSON-compatible [`AttrValue`] attributes.
//! Operand and result lists are appended through the owning
//! [`Graph`](crate::graph::Graph), which performs the matching def-use
//! bookkeeping on the referenced values.

use crate::attr::AttrValue;
use crate::error::IrError;
use crate::ids::ValueId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The kind of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// A primitive computation (gate-level or word-level operator).
    Primitive,
    /// An instantiation of another module.
    Instance,
    /// A record of an interface-typed port, carrying its type descriptor
    /// as an attribute.
    InterfacePort,
    /// A record of a port construct the lowering does not recognize.
    Unsupported,
}

/// A node in the def-use graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// The operation kind.
    pub kind: OperationKind,
    /// The instance or result name.
    pub symbol: String,
    operands: Vec<ValueId>,
    results: Vec<ValueId>,
    attributes: BTreeMap<String, AttrValue>,
}

impl Operation {
    /// Creates a new operation with no operands, results, or attributes.
    pub fn new(kind: OperationKind, symbol: impl Into<String>) -> Self {
        Self {
            kind,
            symbol: symbol.into(),
            operands: Vec::new(),
            results: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Returns the ordered operand list.
    pub fn operands(&self) -> &[ValueId] {
        &self.operands
    }

    /// Returns the ordered result list.
    pub fn results(&self) -> &[ValueId] {
        &self.results
    }

    /// Returns a read-only view of the attribute bag.
    pub fn attributes(&self) -> &BTreeMap<String, AttrValue> {
        &self.attributes
    }

    /// Inserts or overwrites the attribute under `key`.
    ///
    /// Fails if `key` is empty or `value` is not JSON-compatible; on
    /// failure the existing attributes are left unchanged.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<(), IrError> {
        let key = key.into();
        if key.is_empty() {
            return Err(IrError::EmptyAttributeKey);
        }
        let value = value.into();
        if !value.is_json_compatible() {
            return Err(IrError::UnsupportedAttributeValue);
        }
        self.attributes.insert(key, value);
        Ok(())
    }

    /// Removes the attribute under `key`. No-op if absent.
    pub fn erase_attribute(&mut self, key: &str) {
        self.attributes.remove(key);
    }

    /// Returns the attribute under `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Mutable form of [`attribute`](Self::attribute).
    ///
    /// In-place edits bypass write validation; keeping doubles finite is a
    /// caller invariant on this path.
    pub fn attribute_mut(&mut self, key: &str) -> Option<&mut AttrValue> {
        self.attributes.get_mut(key)
    }

    /// Appends `value` to the operand list, returning the new operand index.
    pub(crate) fn push_operand(&mut self, value: ValueId) -> usize {
        let index = self.operands.len();
        self.operands.push(value);
        index
    }

    /// Appends `value` to the result list.
    pub(crate) fn push_result(&mut self, value: ValueId) {
        self.results.push(value);
    }
}
