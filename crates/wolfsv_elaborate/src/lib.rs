//! Elaborated-tree-to-netlist lowering.
//!
//! [`Elaborate::convert`] walks the front end's [`RootScope`] and populates
//! a fresh [`Netlist`], one [`Graph`] per top-level module. Only structural
//! port information is lowered: simple ports become port-registered values,
//! interface-typed ports are recorded as operations carrying a type
//! descriptor attribute, and bundled port groups abort the conversion.
//!
//! # Usage
//!
//! ```ignore
//! let elaborate = Elaborate::new();
//! let netlist = elaborate.convert(&root)?;
//! ```

#![warn(missing_docs)]

pub mod errors;

pub use errors::ElaborateError;

use std::sync::{Arc, Mutex, Weak};

use wolfsv_ast::{Direction, InstanceKind, InterfacePort, Port, RootScope};
use wolfsv_ir::{Graph, Netlist, OperationKind};

/// Attribute key under which port lowerings record their type descriptor.
pub const TYPE_DESC_ATTR: &str = "type_desc";

/// Descriptor recorded for port kinds the lowering does not recognize.
pub const UNSUPPORTED_PORT_DESC: &str = "<unsupported port kind>";

/// The conversion driver.
///
/// Carries no state across calls besides a lock and a non-owning
/// observation of the most recently produced netlist. Holding the lock for
/// the whole of [`convert`](Self::convert) serializes concurrent calls on
/// one instance.
#[derive(Debug, Default)]
pub struct Elaborate {
    latest: Mutex<Weak<Netlist>>,
}

impl Elaborate {
    /// Creates a new conversion driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts an elaborated root scope into a fresh netlist.
    ///
    /// Top-level instances that are not modules are skipped. A bundled
    /// port group aborts the whole call: no netlist is returned and the
    /// last-result observation keeps referring to the previous successful
    /// conversion.
    pub fn convert(&self, root: &RootScope) -> Result<Arc<Netlist>, ElaborateError> {
        let mut latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());

        let mut netlist = Netlist::new();
        for instance in &root.top_instances {
            let ports = match &instance.kind {
                InstanceKind::Module { ports } => ports,
                InstanceKind::Other => continue,
            };
            let graph = netlist.create_graph(&instance.name)?;
            graph.is_top_module = true;
            lower_ports(graph, &instance.name, ports)?;
        }

        let netlist = Arc::new(netlist);
        *latest = Arc::downgrade(&netlist);
        Ok(netlist)
    }

    /// Returns the most recently produced netlist, if any caller still
    /// holds it.
    ///
    /// The observation is non-owning and only updated on success, so it
    /// never refers to a partially built netlist.
    pub fn latest_netlist(&self) -> Option<Arc<Netlist>> {
        self.latest
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .upgrade()
    }
}

/// Lowers one module's port list into `graph`.
fn lower_ports(graph: &mut Graph, module: &str, ports: &[Port]) -> Result<(), ElaborateError> {
    for port in ports {
        match port {
            Port::Simple(simple) => {
                let value = graph.create_value(&simple.name, simple.ty.width, simple.ty.signed);
                match simple.direction {
                    Direction::Input => graph.add_input_port(&simple.name, value)?,
                    Direction::Output => graph.add_output_port(&simple.name, value)?,
                    Direction::InOut => {
                        graph.add_input_port(&simple.name, value)?;
                        graph.add_output_port(&simple.name, value)?;
                    }
                }
            }
            Port::Group(group) => {
                return Err(ElaborateError::UnsupportedPortGroup {
                    module: module.to_string(),
                    port: group.name.clone(),
                });
            }
            Port::Interface(iface) => {
                let op = graph.create_operation(OperationKind::InterfacePort, &iface.name);
                graph
                    .operation_mut(op)
                    .set_attribute(TYPE_DESC_ATTR, interface_type_desc(iface))?;
            }
            Port::Other(other) => {
                let op = graph.create_operation(OperationKind::Unsupported, &other.name);
                graph
                    .operation_mut(op)
                    .set_attribute(TYPE_DESC_ATTR, UNSUPPORTED_PORT_DESC)?;
            }
        }
    }
    Ok(())
}

/// Builds the composite type descriptor of an interface-typed port.
///
/// Resolved interfaces yield `"<iface>"` or `"<iface>.<modport>"`;
/// unresolved generic ports yield `"generic"`; anything else yields the
/// `"<invalid>"` placeholder.
fn interface_type_desc(port: &InterfacePort) -> String {
    match (&port.interface, &port.modport) {
        (Some(iface), Some(modport)) => format!("{iface}.{modport}"),
        (Some(iface), None) => iface.clone(),
        (None, _) if port.generic => "generic".to_string(),
        (None, _) => "<invalid>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use wolfsv_ast::{GroupPort, Instance, OtherPort, PortType, SimplePort};
    use wolfsv_ir::{AttrValue, Operation};

    fn simple(name: &str, direction: Direction, width: u32, signed: bool) -> Port {
        Port::Simple(SimplePort {
            name: name.to_string(),
            direction,
            ty: PortType { width, signed },
        })
    }

    fn interface(name: &str, iface: Option<&str>, modport: Option<&str>, generic: bool) -> Port {
        Port::Interface(InterfacePort {
            name: name.to_string(),
            interface: iface.map(str::to_string),
            modport: modport.map(str::to_string),
            generic,
        })
    }

    fn find_op<'a>(graph: &'a Graph, symbol: &str) -> &'a Operation {
        graph
            .operations()
            .values()
            .find(|op| op.symbol == symbol)
            .expect("operation not found")
    }

    #[test]
    fn end_to_end_success() {
        let root = RootScope {
            top_instances: vec![Instance::module(
                "m",
                vec![
                    simple("clk", Direction::Input, 1, false),
                    interface("bus", Some("axi"), Some("master"), false),
                ],
            )],
        };

        let elaborate = Elaborate::new();
        let netlist = elaborate.convert(&root).unwrap();

        assert_eq!(netlist.len(), 1);
        let graph = netlist.graph("m").unwrap();
        assert!(graph.is_top_module);

        let clk = graph.input_ports()["clk"];
        assert!(graph.value(clk).is_input);
        assert_eq!(graph.value(clk).width, 1);
        assert!(!graph.value(clk).signed);

        let bus = find_op(graph, "bus");
        assert_eq!(bus.kind, OperationKind::InterfacePort);
        assert_eq!(
            bus.attribute(TYPE_DESC_ATTR),
            Some(&AttrValue::from("axi.master"))
        );
    }

    #[test]
    fn port_group_aborts_conversion() {
        let root = RootScope {
            top_instances: vec![Instance::module(
                "m",
                vec![
                    simple("clk", Direction::Input, 1, false),
                    Port::Group(GroupPort {
                        name: "grp".to_string(),
                        members: vec![],
                    }),
                ],
            )],
        };

        let elaborate = Elaborate::new();
        let err = elaborate.convert(&root).unwrap_err();
        assert_eq!(
            err,
            ElaborateError::UnsupportedPortGroup {
                module: "m".to_string(),
                port: "grp".to_string(),
            }
        );
        // The whole conversion failed: no netlist exists to hold `m`, and
        // the last-result observation was never updated.
        assert!(elaborate.latest_netlist().is_none());
    }

    #[test]
    fn failure_keeps_previous_result_observable() {
        let elaborate = Elaborate::new();
        let good = RootScope {
            top_instances: vec![Instance::module("ok", vec![])],
        };
        let kept = elaborate.convert(&good).unwrap();

        let bad = RootScope {
            top_instances: vec![Instance::module(
                "m",
                vec![Port::Group(GroupPort {
                    name: "grp".to_string(),
                    members: vec![],
                })],
            )],
        };
        elaborate.convert(&bad).unwrap_err();

        let latest = elaborate.latest_netlist().unwrap();
        assert!(Arc::ptr_eq(&latest, &kept));
        assert!(latest.graph("ok").is_some());
    }

    #[test]
    fn interface_descriptor_variants() {
        let root = RootScope {
            top_instances: vec![Instance::module(
                "m",
                vec![
                    interface("plain", Some("axi"), None, false),
                    interface("generic_if", None, None, true),
                    interface("broken", None, None, false),
                    interface("modported", Some("axi"), Some("slave"), false),
                ],
            )],
        };

        let netlist = Elaborate::new().convert(&root).unwrap();
        let graph = netlist.graph("m").unwrap();
        let desc = |symbol: &str| {
            find_op(graph, symbol)
                .attribute(TYPE_DESC_ATTR)
                .and_then(AttrValue::as_str)
                .map(str::to_string)
        };
        assert_eq!(desc("plain").as_deref(), Some("axi"));
        assert_eq!(desc("generic_if").as_deref(), Some("generic"));
        assert_eq!(desc("broken").as_deref(), Some("<invalid>"));
        assert_eq!(desc("modported").as_deref(), Some("axi.slave"));
    }

    #[test]
    fn unrecognized_port_kind_degrades() {
        let root = RootScope {
            top_instances: vec![Instance::module(
                "m",
                vec![
                    Port::Other(OtherPort {
                        name: "mystery".to_string(),
                    }),
                    simple("q", Direction::Output, 8, true),
                ],
            )],
        };

        let netlist = Elaborate::new().convert(&root).unwrap();
        let graph = netlist.graph("m").unwrap();

        let op = find_op(graph, "mystery");
        assert_eq!(op.kind, OperationKind::Unsupported);
        assert_eq!(
            op.attribute(TYPE_DESC_ATTR),
            Some(&AttrValue::from(UNSUPPORTED_PORT_DESC))
        );
        // Lowering continued past the unrecognized port.
        let q = graph.output_ports()["q"];
        assert!(graph.value(q).is_output);
        assert!(graph.value(q).signed);
    }

    #[test]
    fn non_module_instances_skipped() {
        let root = RootScope {
            top_instances: vec![
                Instance::other("checker0"),
                Instance::module("m", vec![]),
            ],
        };
        let netlist = Elaborate::new().convert(&root).unwrap();
        assert_eq!(netlist.len(), 1);
        assert!(netlist.graph("checker0").is_none());
    }

    #[test]
    fn empty_root_yields_empty_netlist() {
        let netlist = Elaborate::new().convert(&RootScope::new()).unwrap();
        assert!(netlist.is_empty());
    }

    #[test]
    fn inout_registered_in_both_maps() {
        let root = RootScope {
            top_instances: vec![Instance::module(
                "m",
                vec![simple("pad", Direction::InOut, 1, false)],
            )],
        };
        let netlist = Elaborate::new().convert(&root).unwrap();
        let graph = netlist.graph("m").unwrap();
        let value = graph.input_ports()["pad"];
        assert_eq!(graph.output_ports()["pad"], value);
        assert!(graph.value(value).is_input);
        assert!(graph.value(value).is_output);
    }

    #[test]
    fn latest_netlist_is_weak() {
        let elaborate = Elaborate::new();
        let root = RootScope {
            top_instances: vec![Instance::module("m", vec![])],
        };
        let netlist = elaborate.convert(&root).unwrap();
        assert!(elaborate.latest_netlist().is_some());
        drop(netlist);
        assert!(elaborate.latest_netlist().is_none());
    }

    #[test]
    fn concurrent_convert_calls_serialize() {
        let elaborate = Arc::new(Elaborate::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let elaborate = Arc::clone(&elaborate);
            handles.push(thread::spawn(move || {
                let root = RootScope {
                    top_instances: vec![Instance::module(
                        format!("m{i}"),
                        vec![simple("clk", Direction::Input, 1, false)],
                    )],
                };
                elaborate.convert(&root).unwrap()
            }));
        }
        for (i, handle) in handles.into_iter().enumerate() {
            let netlist = handle.join().unwrap();
            assert!(netlist.graph(&format!("m{i}")).is_some());
        }
    }

    #[test]
    fn produced_netlist_exports_to_json() {
        let root = RootScope {
            top_instances: vec![Instance::module(
                "m",
                vec![
                    simple("clk", Direction::Input, 1, false),
                    interface("bus", Some("axi"), Some("master"), false),
                ],
            )],
        };
        let netlist = Elaborate::new().convert(&root).unwrap();
        let json = serde_json::to_value(&*netlist).unwrap();
        assert!(json["graphs"]["m"]["input_ports"]["clk"].is_number());
    }

    #[test]
    fn duplicate_top_module_names_fail() {
        let root = RootScope {
            top_instances: vec![
                Instance::module("m", vec![]),
                Instance::module("m", vec![]),
            ],
        };
        let err = Elaborate::new().convert(&root).unwrap_err();
        assert_eq!(
            err,
            ElaborateError::Ir(wolfsv_ir::IrError::DuplicateGraph("m".to_string()))
        );
    }
}
