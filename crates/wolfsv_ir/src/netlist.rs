//! Top-level netlist — the registry of uniquely-named module graphs.

use crate::error::IrError;
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete netlist, owning one [`Graph`] per module.
///
/// Module name uniqueness is enforced at insertion here, not inside
/// [`Graph`] itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Netlist {
    graphs: BTreeMap<String, Graph>,
}

impl Netlist {
    /// Creates an empty netlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a fresh graph for `module_name` and inserts it.
    ///
    /// Fails if a graph already exists under that name.
    pub fn create_graph(&mut self, module_name: impl Into<String>) -> Result<&mut Graph, IrError> {
        self.emplace_graph(Graph::new(module_name))
    }

    /// Takes ownership of `graph`, indexing it by its module name.
    ///
    /// Fails on a duplicate module name, leaving the existing graph
    /// untouched.
    pub fn emplace_graph(&mut self, graph: Graph) -> Result<&mut Graph, IrError> {
        use std::collections::btree_map::Entry;
        match self.graphs.entry(graph.module_name.clone()) {
            Entry::Occupied(occupied) => Err(IrError::DuplicateGraph(occupied.key().clone())),
            Entry::Vacant(vacant) => Ok(vacant.insert(graph)),
        }
    }

    /// Returns the graph for `module_name`, if present.
    pub fn graph(&self, module_name: &str) -> Option<&Graph> {
        self.graphs.get(module_name)
    }

    /// Mutable form of [`graph`](Self::graph).
    pub fn graph_mut(&mut self, module_name: &str) -> Option<&mut Graph> {
        self.graphs.get_mut(module_name)
    }

    /// Returns a read-only view of the full registry.
    pub fn graphs(&self) -> &BTreeMap<String, Graph> {
        &self.graphs
    }

    /// Returns the number of graphs in the netlist.
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Returns `true` if the netlist contains no graphs.
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_lookup() {
        let mut netlist = Netlist::new();
        netlist.create_graph("top").unwrap();
        assert!(netlist.graph("top").is_some());
        assert!(netlist.graph("missing").is_none());
        assert_eq!(netlist.len(), 1);
    }

    #[test]
    fn duplicate_name_rejected_first_graph_unmodified() {
        let mut netlist = Netlist::new();
        {
            let g = netlist.create_graph("alu").unwrap();
            g.is_top_module = true;
            g.create_value("a", 8, false);
        }
        let err = netlist.create_graph("alu").unwrap_err();
        assert_eq!(err, IrError::DuplicateGraph("alu".to_string()));

        let first = netlist.graph("alu").unwrap();
        assert!(first.is_top_module);
        assert_eq!(first.values().len(), 1);
        assert_eq!(netlist.len(), 1);
    }

    #[test]
    fn emplace_prebuilt_graph() {
        let mut netlist = Netlist::new();
        let mut g = Graph::new("sub");
        g.is_black_box = true;
        netlist.emplace_graph(g).unwrap();
        assert!(netlist.graph("sub").unwrap().is_black_box);
    }

    #[test]
    fn graph_mut_allows_edits() {
        let mut netlist = Netlist::new();
        netlist.create_graph("m").unwrap();
        netlist.graph_mut("m").unwrap().is_top_module = true;
        assert!(netlist.graph("m").unwrap().is_top_module);
    }

    #[test]
    fn graphs_view_is_ordered_by_name() {
        let mut netlist = Netlist::new();
        netlist.create_graph("b").unwrap();
        netlist.create_graph("a").unwrap();
        let names: Vec<_> = netlist.graphs().keys().cloned().collect();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn serde_roundtrip() {
        let mut netlist = Netlist::new();
        let g = netlist.create_graph("m").unwrap();
        let v = g.create_value("clk", 1, false);
        g.add_input_port("clk", v).unwrap();

        let json = serde_json::to_string(&netlist).unwrap();
        let restored: Netlist = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 1);
        assert!(restored.graph("m").unwrap().input_ports().contains_key("clk"));
    }
}
