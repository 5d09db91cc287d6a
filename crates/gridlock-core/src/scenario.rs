//! Built-in example scenarios.
//!
//! Each scenario is a complete ready-made model: one that deadlocks and
//! one that stays runnable, so the detector and the step player have
//! known inputs to demonstrate against.

use crate::model::{Allocation, AllocationModel, ModelState};

/// Two processes holding one resource each and waiting on the other's.
pub const SIMPLE_DEADLOCK: &str = "simple-deadlock";

/// Same shape minus one wait edge, so the dependency chain stays acyclic.
pub const NO_DEADLOCK: &str = "no-deadlock";

/// All scenario names, in presentation order.
pub fn names() -> &'static [&'static str] {
    &[SIMPLE_DEADLOCK, NO_DEADLOCK]
}

/// Look a scenario up by name.
pub fn by_name(name: &str) -> Option<AllocationModel> {
    match name {
        SIMPLE_DEADLOCK => Some(simple_deadlock()),
        NO_DEADLOCK => Some(no_deadlock()),
        _ => None,
    }
}

/// The classic circular wait: P1 holds R1 and wants R2, P2 holds R2 and
/// wants R1.
pub fn simple_deadlock() -> AllocationModel {
    AllocationModel::from(ModelState {
        processes: vec!["P1".to_string(), "P2".to_string()],
        resources: vec!["R1".to_string(), "R2".to_string()],
        holds: vec![Allocation::new("P1", "R1"), Allocation::new("P2", "R2")],
        waits: vec![Allocation::new("P1", "R2"), Allocation::new("P2", "R1")],
    })
}

/// One-directional waiting only: P2 wants R1, nobody wants what P2 holds.
pub fn no_deadlock() -> AllocationModel {
    AllocationModel::from(ModelState {
        processes: vec!["P1".to_string(), "P2".to_string()],
        resources: vec!["R1".to_string(), "R2".to_string()],
        holds: vec![Allocation::new("P1", "R1"), Allocation::new("P2", "R2")],
        waits: vec![Allocation::new("P2", "R1")],
    })
}
