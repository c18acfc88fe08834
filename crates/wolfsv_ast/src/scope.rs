//! Root scope and top-level instance symbols.

use crate::port::Port;
use serde::{Deserialize, Serialize};

/// The root of an elaborated design: the ordered top-level instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootScope {
    /// Top-level instantiable symbols, in declaration order.
    pub top_instances: Vec<Instance>,
}

impl RootScope {
    /// Creates an empty root scope.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A top-level instantiable symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// The instance name.
    pub name: String,
    /// What kind of instantiable this is.
    pub kind: InstanceKind,
}

impl Instance {
    /// Creates a module instance with the given port list.
    pub fn module(name: impl Into<String>, ports: Vec<Port>) -> Self {
        Self {
            name: name.into(),
            kind: InstanceKind::Module { ports },
        }
    }

    /// Creates a non-module instantiable (program, checker, primitive).
    pub fn other(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: InstanceKind::Other,
        }
    }
}

/// Discriminant separating module instances from other instantiable kinds.
///
/// Only modules are lowered to netlist graphs; everything else is skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstanceKind {
    /// A module instantiation with its elaborated port list.
    Module {
        /// The module's ports, in declaration order.
        ports: Vec<Port>,
    },
    /// Any other instantiable kind (program, checker, primitive).
    Other,
}
