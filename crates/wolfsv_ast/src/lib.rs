//! Elaborated-tree contract between the front-end compiler and the netlist core.
//!
//! The front end parses and semantically elaborates the design, then hands
//! the core a read-only [`RootScope`]: the ordered top-level instantiable
//! symbols, each with a name, an instance-kind discriminant, and — for
//! modules — an ordered port list. The core never constructs these trees
//! outside of tests.

#![warn(missing_docs)]

pub mod port;
pub mod scope;

pub use port::{Direction, GroupPort, InterfacePort, OtherPort, Port, PortType, SimplePort};
pub use scope::{Instance, InstanceKind, RootScope};
