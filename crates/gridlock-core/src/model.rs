//! Resource-allocation state: declared processes and resources plus the
//! hold and wait edges between them.
//!
//! The model is an explicit value owned by the caller; every operation
//! takes it by reference. Declaration order is kept because it is
//! observable downstream (graph derivation and cycle selection), while
//! hash indexes beside the ordered vectors keep duplicate and membership
//! checks O(1).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One process/resource edge. The same shape records both holds
/// (ownership) and waits (pending requests).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub process: String,
    pub resource: String,
}

impl Allocation {
    pub fn new(process: impl Into<String>, resource: impl Into<String>) -> Self {
        Allocation {
            process: process.into(),
            resource: resource.into(),
        }
    }
}

/// Which entity set an operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Process,
    Resource,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Process => "process",
            EntityKind::Resource => "resource",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which edge set an operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Hold,
    Wait,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Hold => "hold",
            RelationKind::Wait => "wait",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recoverable failures from model operations. All of these are reported
/// to the user; none abort the program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("{0} already exists: {1}")]
    DuplicateEntity(EntityKind, String),

    #[error("{0} name must not be blank")]
    InvalidName(EntityKind),

    #[error("select both a process and a resource for the {0}")]
    MissingSelection(RelationKind),

    #[error("{0} already recorded: {1} -> {2}")]
    DuplicateRelation(RelationKind, String, String),

    #[error("no processes declared; add at least one first")]
    NoProcesses,
}

/// What removing a process or resource did. Removal never fails; unknown
/// names come back with `removed: false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalOutcome {
    pub removed: bool,
    pub detached_holds: usize,
    pub detached_waits: usize,
}

/// Plain state document: the model as it appears on disk and in reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelState {
    pub processes: Vec<String>,
    pub resources: Vec<String>,
    pub holds: Vec<Allocation>,
    pub waits: Vec<Allocation>,
}

/// Mutable resource-allocation state with cascade rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "ModelState", into = "ModelState")]
pub struct AllocationModel {
    processes: Vec<String>,
    resources: Vec<String>,
    holds: Vec<Allocation>,
    waits: Vec<Allocation>,
    process_names: HashSet<String>,
    resource_names: HashSet<String>,
    hold_pairs: HashSet<(String, String)>,
    wait_pairs: HashSet<(String, String)>,
}

impl AllocationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a process. Names are trimmed before validation.
    pub fn add_process(&mut self, name: &str) -> Result<(), ModelError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::InvalidName(EntityKind::Process));
        }
        if !self.process_names.insert(name.to_string()) {
            return Err(ModelError::DuplicateEntity(
                EntityKind::Process,
                name.to_string(),
            ));
        }
        self.processes.push(name.to_string());
        Ok(())
    }

    /// Declare a resource. Names are trimmed before validation.
    pub fn add_resource(&mut self, name: &str) -> Result<(), ModelError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::InvalidName(EntityKind::Resource));
        }
        if !self.resource_names.insert(name.to_string()) {
            return Err(ModelError::DuplicateEntity(
                EntityKind::Resource,
                name.to_string(),
            ));
        }
        self.resources.push(name.to_string());
        Ok(())
    }

    /// Record that `process` currently owns `resource`.
    ///
    /// Endpoint declaration is not checked here. The graph builder skips
    /// edges whose process is undeclared; resource names are matched as
    /// plain identifiers whether declared or not.
    pub fn add_hold(&mut self, process: &str, resource: &str) -> Result<(), ModelError> {
        add_relation(
            RelationKind::Hold,
            &mut self.hold_pairs,
            &mut self.holds,
            process,
            resource,
        )
    }

    /// Record that `process` is blocked waiting for `resource`.
    pub fn add_wait(&mut self, process: &str, resource: &str) -> Result<(), ModelError> {
        add_relation(
            RelationKind::Wait,
            &mut self.wait_pairs,
            &mut self.waits,
            process,
            resource,
        )
    }

    /// Remove a process together with every hold/wait edge naming it.
    /// The cascade runs even for undeclared names so stale edges cannot
    /// outlive their process.
    pub fn remove_process(&mut self, name: &str) -> RemovalOutcome {
        let name = name.trim();
        let removed = self.process_names.remove(name);
        if removed {
            self.processes.retain(|p| p != name);
        }
        let detached_holds =
            detach_edges(&mut self.holds, &mut self.hold_pairs, |a| a.process == name);
        let detached_waits =
            detach_edges(&mut self.waits, &mut self.wait_pairs, |a| a.process == name);
        RemovalOutcome {
            removed,
            detached_holds,
            detached_waits,
        }
    }

    /// Remove a resource together with every hold/wait edge naming it.
    pub fn remove_resource(&mut self, name: &str) -> RemovalOutcome {
        let name = name.trim();
        let removed = self.resource_names.remove(name);
        if removed {
            self.resources.retain(|r| r != name);
        }
        let detached_holds =
            detach_edges(&mut self.holds, &mut self.hold_pairs, |a| a.resource == name);
        let detached_waits =
            detach_edges(&mut self.waits, &mut self.wait_pairs, |a| a.resource == name);
        RemovalOutcome {
            removed,
            detached_holds,
            detached_waits,
        }
    }

    /// Remove one hold edge. Returns whether the pair was present.
    pub fn remove_hold(&mut self, process: &str, resource: &str) -> bool {
        remove_relation(&mut self.hold_pairs, &mut self.holds, process, resource)
    }

    /// Remove one wait edge. Returns whether the pair was present.
    pub fn remove_wait(&mut self, process: &str, resource: &str) -> bool {
        remove_relation(&mut self.wait_pairs, &mut self.waits, process, resource)
    }

    /// Drop every hold edge. Returns how many were removed.
    pub fn clear_holds(&mut self) -> usize {
        let count = self.holds.len();
        self.holds.clear();
        self.hold_pairs.clear();
        count
    }

    /// Drop every wait edge. Returns how many were removed.
    pub fn clear_waits(&mut self) -> usize {
        let count = self.waits.len();
        self.waits.clear();
        self.wait_pairs.clear();
        count
    }

    /// Empty the whole model.
    pub fn reset(&mut self) {
        *self = AllocationModel::default();
    }

    /// Declared processes in declaration order.
    pub fn processes(&self) -> &[String] {
        &self.processes
    }

    /// Declared resources in declaration order.
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Hold edges in creation order.
    pub fn holds(&self) -> &[Allocation] {
        &self.holds
    }

    /// Wait edges in creation order.
    pub fn waits(&self) -> &[Allocation] {
        &self.waits
    }

    pub fn has_process(&self, name: &str) -> bool {
        self.process_names.contains(name)
    }

    pub fn has_resource(&self, name: &str) -> bool {
        self.resource_names.contains(name)
    }

    /// Precondition for detection entry points: at least one process must
    /// be declared.
    pub fn require_processes(&self) -> Result<(), ModelError> {
        if self.processes.is_empty() {
            return Err(ModelError::NoProcesses);
        }
        Ok(())
    }
}

fn add_relation(
    kind: RelationKind,
    pairs: &mut HashSet<(String, String)>,
    edges: &mut Vec<Allocation>,
    process: &str,
    resource: &str,
) -> Result<(), ModelError> {
    let process = process.trim();
    let resource = resource.trim();
    if process.is_empty() || resource.is_empty() {
        return Err(ModelError::MissingSelection(kind));
    }
    if !pairs.insert((process.to_string(), resource.to_string())) {
        return Err(ModelError::DuplicateRelation(
            kind,
            process.to_string(),
            resource.to_string(),
        ));
    }
    edges.push(Allocation::new(process, resource));
    Ok(())
}

fn remove_relation(
    pairs: &mut HashSet<(String, String)>,
    edges: &mut Vec<Allocation>,
    process: &str,
    resource: &str,
) -> bool {
    let process = process.trim();
    let resource = resource.trim();
    if !pairs.remove(&(process.to_string(), resource.to_string())) {
        return false;
    }
    edges.retain(|edge| !(edge.process == process && edge.resource == resource));
    true
}

fn detach_edges(
    edges: &mut Vec<Allocation>,
    pairs: &mut HashSet<(String, String)>,
    matches: impl Fn(&Allocation) -> bool,
) -> usize {
    let before = edges.len();
    edges.retain(|edge| {
        if matches(edge) {
            pairs.remove(&(edge.process.clone(), edge.resource.clone()));
            false
        } else {
            true
        }
    });
    before - edges.len()
}

impl From<ModelState> for AllocationModel {
    /// Rebuild a model from a plain state document. Blank names, duplicate
    /// names, and duplicate pairs are skipped rather than rejected so a
    /// hand-edited document still loads.
    fn from(state: ModelState) -> Self {
        let mut model = AllocationModel::default();
        for name in &state.processes {
            let _ = model.add_process(name);
        }
        for name in &state.resources {
            let _ = model.add_resource(name);
        }
        for edge in &state.holds {
            let _ = model.add_hold(&edge.process, &edge.resource);
        }
        for edge in &state.waits {
            let _ = model.add_wait(&edge.process, &edge.resource);
        }
        model
    }
}

impl From<AllocationModel> for ModelState {
    fn from(model: AllocationModel) -> Self {
        ModelState {
            processes: model.processes,
            resources: model.resources,
            holds: model.holds,
            waits: model.waits,
        }
    }
}
