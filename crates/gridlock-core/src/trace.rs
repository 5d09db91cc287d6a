//! Instrumented cycle detection: the same search as [`crate::detect`],
//! materialized as a finite sequence of replayable step records.
//!
//! Every decision point emits one step whose collections are copied at
//! emission time, so later search progress never rewrites an earlier
//! record. Playback collaborators only ever need "the step at index i";
//! the search is never re-run.

use crate::graph::WaitForGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What one step of the search did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Start,
    Visit,
    Check,
    Recurse,
    Skip,
    Cycle,
    Backtrack,
    Complete,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Start => "start",
            StepKind::Visit => "visit",
            StepKind::Check => "check",
            StepKind::Recurse => "recurse",
            StepKind::Skip => "skip",
            StepKind::Cycle => "cycle",
            StepKind::Backtrack => "backtrack",
            StepKind::Complete => "complete",
        }
    }
}

/// One immutable snapshot of search progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStep {
    /// 1-based position in the trace.
    pub index: usize,
    pub kind: StepKind,
    pub description: String,
    /// Identifiers in first-visit order.
    pub visited: Vec<String>,
    /// Root-to-current path at emission time.
    pub stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examined_neighbor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Vec<String>>,
}

/// Materialized search trace with 1-based random access.
///
/// The last step is always the terminal one: a `cycle` step the instant
/// the first cycle is found (nothing is emitted after it, not even the
/// backtracks of the unwinding path), or a single `complete` step after
/// the last root is exhausted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionTrace {
    steps: Vec<TraceStep>,
}

impl DetectionTrace {
    /// Run the instrumented search over `graph`.
    pub fn record(graph: &WaitForGraph) -> Self {
        DetectionTrace {
            steps: Recorder::new(graph).run(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at 1-based `index`, or `None` outside `1..=len()`.
    pub fn step(&self, index: usize) -> Option<&TraceStep> {
        index.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// The terminal step (kind `cycle` or `complete`).
    pub fn terminal(&self) -> Option<&TraceStep> {
        self.steps.last()
    }

    /// Cycle path when the search found one.
    pub fn cycle(&self) -> Option<&[String]> {
        self.steps.last().and_then(|step| step.cycle.as_deref())
    }

    pub fn deadlock_detected(&self) -> bool {
        self.cycle().is_some()
    }
}

struct Recorder<'g> {
    graph: &'g WaitForGraph,
    steps: Vec<TraceStep>,
    visited: Vec<String>,
    visited_set: HashSet<String>,
    stack: Vec<String>,
    on_stack: HashSet<String>,
}

impl<'g> Recorder<'g> {
    fn new(graph: &'g WaitForGraph) -> Self {
        Recorder {
            graph,
            steps: Vec::new(),
            visited: Vec::new(),
            visited_set: HashSet::new(),
            stack: Vec::new(),
            on_stack: HashSet::new(),
        }
    }

    fn run(mut self) -> Vec<TraceStep> {
        if self.graph.is_empty() {
            self.emit(
                StepKind::Complete,
                "Graph is empty. No cycles possible.".to_string(),
                None,
                None,
                None,
            );
            return self.steps;
        }

        let graph = self.graph;
        let mut found = false;
        for node in graph.nodes() {
            if self.visited_set.contains(node) {
                continue;
            }
            self.emit(
                StepKind::Start,
                format!("Starting DFS from node {node}."),
                None,
                None,
                None,
            );
            if self.dfs(node) {
                found = true;
                break;
            }
        }

        if !found {
            self.emit(
                StepKind::Complete,
                "No cycles found. System is deadlock-free.".to_string(),
                None,
                None,
                None,
            );
        }
        self.steps
    }

    fn dfs(&mut self, node: &str) -> bool {
        self.visited.push(node.to_string());
        self.visited_set.insert(node.to_string());
        self.stack.push(node.to_string());
        self.on_stack.insert(node.to_string());
        self.emit(
            StepKind::Visit,
            format!("Visiting node {node}. Added to visited set and stack."),
            Some(node),
            None,
            None,
        );

        let graph = self.graph;
        for neighbor in graph.neighbors(node) {
            self.emit(
                StepKind::Check,
                format!("Checking neighbor {neighbor} of {node}."),
                Some(node),
                Some(neighbor),
                None,
            );

            if !self.visited_set.contains(neighbor.as_str()) {
                self.emit(
                    StepKind::Recurse,
                    format!("{neighbor} not visited yet. Exploring {neighbor} recursively."),
                    Some(node),
                    Some(neighbor),
                    None,
                );
                if self.dfs(neighbor) {
                    return true;
                }
            } else if self.on_stack.contains(neighbor.as_str()) {
                let start = self
                    .stack
                    .iter()
                    .position(|n| n == neighbor)
                    .unwrap_or(0);
                let mut cycle = self.stack[start..].to_vec();
                cycle.push(neighbor.clone());
                self.emit(
                    StepKind::Cycle,
                    format!(
                        "Cycle detected! {neighbor} is on the stack. Cycle: {}",
                        cycle.join(" -> ")
                    ),
                    Some(node),
                    Some(neighbor),
                    Some(cycle),
                );
                return true;
            } else {
                self.emit(
                    StepKind::Skip,
                    format!(
                        "{neighbor} was already visited and fully explored. No cycle through this path."
                    ),
                    Some(node),
                    Some(neighbor),
                    None,
                );
            }
        }

        self.stack.pop();
        self.on_stack.remove(node);
        self.emit(
            StepKind::Backtrack,
            format!("Backtracking from {node}. Removed from stack."),
            None,
            None,
            None,
        );
        false
    }

    fn emit(
        &mut self,
        kind: StepKind,
        description: String,
        current_node: Option<&str>,
        examined_neighbor: Option<&str>,
        cycle: Option<Vec<String>>,
    ) {
        self.steps.push(TraceStep {
            index: self.steps.len() + 1,
            kind,
            description,
            visited: self.visited.clone(),
            stack: self.stack.clone(),
            current_node: current_node.map(str::to_string),
            examined_neighbor: examined_neighbor.map(str::to_string),
            cycle,
        });
    }
}
