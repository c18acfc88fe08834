//! Elaborated port symbols.
//!
//! Ports come in four shapes, modeled as a closed tagged variant so the
//! lowering pass can match exhaustively: plain data ports with a resolved
//! type, bundled port groups, interface-typed ports, and a catch-all for
//! kinds the contract does not describe further.

use serde::{Deserialize, Serialize};

/// The direction of data flow through a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Data flows into the module.
    Input,
    /// Data flows out of the module.
    Output,
    /// Data flows both ways.
    InOut,
}

/// The resolved type of a simple port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortType {
    /// Bit width.
    pub width: u32,
    /// Whether the type is signed.
    pub signed: bool,
}

/// A plain data port with a resolved width and signedness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplePort {
    /// The port name.
    pub name: String,
    /// The direction of data flow.
    pub direction: Direction,
    /// The resolved port type.
    pub ty: PortType,
}

/// Multiple sub-ports bundled under one declared name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPort {
    /// The bundled port name.
    pub name: String,
    /// The member ports making up the bundle.
    pub members: Vec<SimplePort>,
}

/// A port whose type is a named interface, optionally narrowed by a modport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfacePort {
    /// The port name.
    pub name: String,
    /// The resolved interface definition name, if resolution succeeded.
    pub interface: Option<String>,
    /// The modport narrowing the interface, if one was named.
    pub modport: Option<String>,
    /// Whether the port was declared with the generic `interface` keyword.
    pub generic: bool,
}

/// A port of a kind the contract does not describe further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherPort {
    /// The port name.
    pub name: String,
}

/// An elaborated port symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Port {
    /// A plain data port.
    Simple(SimplePort),
    /// A bundled port group.
    Group(GroupPort),
    /// An interface-typed port.
    Interface(InterfacePort),
    /// Any other port kind.
    Other(OtherPort),
}

impl Port {
    /// Returns the declared name of the port, whatever its shape.
    pub fn name(&self) -> &str {
        match self {
            Port::Simple(p) => &p.name,
            Port::Group(p) => &p.name,
            Port::Interface(p) => &p.name,
            Port::Other(p) => &p.name,
        }
    }
}
