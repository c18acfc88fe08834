//! WolfSV IR — the netlist intermediate representation.
//!
//! This crate defines the core IR types [`Value`], [`Operation`], [`Graph`],
//! and [`Netlist`] that the elaboration stage populates from an elaborated
//! SystemVerilog design tree. Values and operations form a def-use graph
//! whose consistency is maintained by the owning [`Graph`].

#![warn(missing_docs)]

pub mod arena;
pub mod attr;
pub mod error;
pub mod graph;
pub mod ids;
pub mod netlist;
pub mod operation;
pub mod value;

pub use arena::{Arena, ArenaId};
pub use attr::AttrValue;
pub use error::IrError;
pub use graph::Graph;
pub use ids::{OperationId, ValueId};
pub use netlist::Netlist;
pub use operation::{Operation, OperationKind};
pub use value::{Use, Value};
