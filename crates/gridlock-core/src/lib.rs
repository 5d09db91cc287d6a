//! # gridlock-core
//!
//! Deadlock analysis for resource-allocation models.
//!
//! This crate provides:
//! - `AllocationModel` (processes, resources, hold/wait edges)
//! - `WaitForGraph` derivation (who waits on whom)
//! - cycle detection, plain (`find_cycle`) and traced (`DetectionTrace`)
//! - `AnalysisReport` assembly for export
//! - built-in scenarios and JSON model persistence
//!
//! It intentionally does not render anything or talk to a terminal.
//! Presentation lives in the CLI crate (`gridlock-cli`).
//!
//! ## Data flow
//!
//! ```text
//! AllocationModel (declared state, JSON document on disk)
//!     |  derive
//! WaitForGraph (process -> process adjacency)
//!     |  search
//! find_cycle / DetectionTrace -> AnalysisReport
//! ```

pub mod detect;
pub mod graph;
pub mod model;
pub mod report;
pub mod scenario;
pub mod store;
pub mod trace;

pub use detect::find_cycle;
pub use graph::WaitForGraph;
pub use model::{
    Allocation, AllocationModel, EntityKind, ModelError, ModelState, RelationKind, RemovalOutcome,
};
pub use report::AnalysisReport;
pub use store::{StoreError, load_model, load_model_or_default, save_model};
pub use trace::{DetectionTrace, StepKind, TraceStep};
