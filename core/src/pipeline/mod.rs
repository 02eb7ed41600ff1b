// storefront/src/pipeline/mod.rs

//! A small async step pipeline: named steps run in order over a shared
//! `ContextData`, each step driven by `on` handlers that may continue, stop,
//! or fail the run.

pub mod context_data;
pub mod control;
pub mod definition;
pub mod execution;

pub use context_data::ContextData;
pub use control::{PipelineControl, PipelineResult};
pub use definition::{Handler, Pipeline, StepDef};
