//! Batch cycle detection over the wait-for graph.

use crate::graph::WaitForGraph;
use std::collections::HashSet;

/// Depth-first search for the first cycle reachable under the graph's
/// node order.
///
/// Returns the cycle as a path whose first and last elements repeat the
/// entry process (`[P1, P2, P1]`), or `None` when the graph is acyclic.
/// The search stops at the first cycle found; it does not look for a
/// shortest or otherwise preferred one.
pub fn find_cycle(graph: &WaitForGraph) -> Option<Vec<String>> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut on_stack: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = Vec::new();

    for node in graph.nodes() {
        if visited.contains(node.as_str()) {
            continue;
        }
        if let Some(cycle) = dfs(graph, node, &mut visited, &mut on_stack, &mut stack) {
            return Some(cycle);
        }
    }
    None
}

fn dfs<'a>(
    graph: &'a WaitForGraph,
    node: &'a str,
    visited: &mut HashSet<&'a str>,
    on_stack: &mut HashSet<&'a str>,
    stack: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    visited.insert(node);
    on_stack.insert(node);
    stack.push(node);

    for neighbor in graph.neighbors(node) {
        if !visited.contains(neighbor.as_str()) {
            if let Some(cycle) = dfs(graph, neighbor, visited, on_stack, stack) {
                return Some(cycle);
            }
        } else if on_stack.contains(neighbor.as_str()) {
            // The cycle is the stack suffix from the neighbor's position,
            // closed by repeating the neighbor.
            let start = stack
                .iter()
                .position(|n| *n == neighbor.as_str())
                .unwrap_or(0);
            let mut cycle: Vec<String> = stack[start..].iter().map(|n| n.to_string()).collect();
            cycle.push(neighbor.clone());
            return Some(cycle);
        }
    }

    stack.pop();
    on_stack.remove(node);
    None
}
