//! Wait-for graph derivation.
//!
//! Nodes are declared processes; an edge P -> H is recorded when P waits
//! on a resource H currently holds. Node order and per-node edge order are
//! reproducible because they decide which cycle detection reports first.

use crate::model::AllocationModel;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Directed process-to-process graph with insertion-ordered iteration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaitForGraph {
    adjacency: HashMap<String, Vec<String>>,
    order: Vec<String>,
}

impl WaitForGraph {
    /// Derive the graph from the model's current state.
    ///
    /// Every declared process appears as a node even when isolated. Waits
    /// are scanned in creation order and matched against holds on the same
    /// resource identifier in their creation order; each match adds one
    /// edge. A wait or hold naming an undeclared process contributes
    /// nothing, a holder equal to the waiter contributes nothing, and an
    /// edge already present for that waiter is not added twice. Resource
    /// declaration is never consulted.
    pub fn derive(model: &AllocationModel) -> Self {
        let mut graph = WaitForGraph::default();
        for process in model.processes() {
            graph.adjacency.insert(process.clone(), Vec::new());
            graph.order.push(process.clone());
        }

        let mut holders_by_resource: HashMap<&str, Vec<&str>> = HashMap::new();
        for hold in model.holds() {
            holders_by_resource
                .entry(hold.resource.as_str())
                .or_default()
                .push(hold.process.as_str());
        }

        let mut recorded: HashSet<(String, String)> = HashSet::new();
        for wait in model.waits() {
            if !model.has_process(&wait.process) {
                continue;
            }
            let Some(holders) = holders_by_resource.get(wait.resource.as_str()) else {
                continue;
            };
            for holder in holders {
                if !model.has_process(holder) || *holder == wait.process {
                    continue;
                }
                if recorded.insert((wait.process.clone(), (*holder).to_string()))
                    && let Some(neighbors) = graph.adjacency.get_mut(&wait.process)
                {
                    neighbors.push((*holder).to_string());
                }
            }
        }
        graph
    }

    /// Nodes in process-declaration order.
    pub fn nodes(&self) -> &[String] {
        &self.order
    }

    /// Outgoing edges of `node` in insertion order. Unknown nodes have no
    /// edges.
    pub fn neighbors(&self, node: &str) -> &[String] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Key-sorted copy of the adjacency, used wherever the graph is
    /// serialized. Neighbor lists keep their insertion order.
    pub fn to_sorted_map(&self) -> BTreeMap<String, Vec<String>> {
        self.adjacency
            .iter()
            .map(|(node, neighbors)| (node.clone(), neighbors.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AllocationModel;

    fn model_with(
        processes: &[&str],
        resources: &[&str],
        holds: &[(&str, &str)],
        waits: &[(&str, &str)],
    ) -> AllocationModel {
        let mut model = AllocationModel::new();
        for name in processes {
            model.add_process(name).expect("process should add");
        }
        for name in resources {
            model.add_resource(name).expect("resource should add");
        }
        for (process, resource) in holds {
            model.add_hold(process, resource).expect("hold should add");
        }
        for (process, resource) in waits {
            model.add_wait(process, resource).expect("wait should add");
        }
        model
    }

    #[test]
    fn every_declared_process_is_a_node() {
        let model = model_with(&["P1", "P2", "P3"], &["R1"], &[], &[]);
        let graph = WaitForGraph::derive(&model);
        assert_eq!(
            graph.nodes(),
            ["P1".to_string(), "P2".to_string(), "P3".to_string()]
        );
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors("P2").is_empty());
    }

    #[test]
    fn wait_joined_with_hold_produces_an_edge() {
        let model = model_with(
            &["P1", "P2"],
            &["R1"],
            &[("P2", "R1")],
            &[("P1", "R1")],
        );
        let graph = WaitForGraph::derive(&model);
        assert_eq!(graph.neighbors("P1"), ["P2".to_string()]);
        assert!(graph.neighbors("P2").is_empty());
    }

    #[test]
    fn self_hold_never_produces_a_self_edge() {
        let model = model_with(&["P1"], &["R1"], &[("P1", "R1")], &[("P1", "R1")]);
        let graph = WaitForGraph::derive(&model);
        assert!(graph.neighbors("P1").is_empty());
    }

    #[test]
    fn repeated_targets_are_deduplicated_per_source() {
        let model = model_with(
            &["P1", "P2"],
            &["R1", "R2"],
            &[("P2", "R1"), ("P2", "R2")],
            &[("P1", "R1"), ("P1", "R2")],
        );
        let graph = WaitForGraph::derive(&model);
        assert_eq!(graph.neighbors("P1"), ["P2".to_string()]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn undeclared_processes_are_skipped_on_both_sides() {
        let mut model = model_with(&["P1"], &["R1"], &[], &[]);
        model.add_hold("P9", "R1").expect("hold should add");
        model.add_wait("P1", "R1").expect("wait should add");
        model.add_wait("P8", "R1").expect("wait should add");
        let graph = WaitForGraph::derive(&model);
        assert!(graph.neighbors("P1").is_empty());
        assert_eq!(graph.nodes(), ["P1".to_string()]);
    }

    #[test]
    fn resource_declaration_is_not_consulted() {
        let mut model = model_with(&["P1", "P2"], &[], &[], &[]);
        model.add_hold("P2", "R9").expect("hold should add");
        model.add_wait("P1", "R9").expect("wait should add");
        let graph = WaitForGraph::derive(&model);
        assert_eq!(graph.neighbors("P1"), ["P2".to_string()]);
    }

    #[test]
    fn edge_order_follows_wait_then_hold_creation_order() {
        let model = model_with(
            &["P1", "P2", "P3", "P4"],
            &["R1", "R2"],
            &[("P3", "R1"), ("P2", "R1"), ("P4", "R2")],
            &[("P1", "R1"), ("P1", "R2")],
        );
        let graph = WaitForGraph::derive(&model);
        assert_eq!(
            graph.neighbors("P1"),
            ["P3".to_string(), "P2".to_string(), "P4".to_string()]
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let model = model_with(
            &["P1", "P2", "P3"],
            &["R1", "R2", "R3"],
            &[("P1", "R1"), ("P2", "R2"), ("P3", "R3")],
            &[("P1", "R2"), ("P2", "R3"), ("P3", "R1")],
        );
        assert_eq!(WaitForGraph::derive(&model), WaitForGraph::derive(&model));
    }

    #[test]
    fn sorted_map_sorts_keys_and_keeps_neighbor_order() {
        let model = model_with(
            &["P2", "P1"],
            &["R1", "R2"],
            &[("P2", "R1"), ("P1", "R2")],
            &[("P1", "R1")],
        );
        let graph = WaitForGraph::derive(&model);
        let map = graph.to_sorted_map();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["P1", "P2"]);
        assert_eq!(map["P1"], ["P2".to_string()]);
    }
}
