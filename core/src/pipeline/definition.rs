// storefront/src/pipeline/definition.rs

//! Contains the `Pipeline<TData, Err>` struct definition and the methods used
//! to declare its steps and attach handlers to them.

use crate::error::PipelineError;
use crate::pipeline::context_data::ContextData;
use crate::pipeline::control::PipelineControl;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

/// A pipeline step handler.
///
/// A handler takes a clone of the run's `ContextData<TData>` and returns a
/// boxed future resolving to `Result<PipelineControl, Err>`.
///
/// Handlers must drop every lock guard before their first `.await`.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;

/// A named step of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDef {
  pub name: String,
}

/// An ordered list of named steps, each driven by one or more `on` handlers,
/// run against a shared `ContextData<TData>`.
///
/// `Err` must be constructible from `PipelineError` so that structural
/// failures (a step without handlers) surface through the same error type
/// the handlers return.
pub struct Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  pub(crate) steps: Vec<StepDef>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  /// Creates a pipeline with the given step names, in execution order.
  pub fn new(step_names: &[&str]) -> Self {
    let steps = step_names
      .iter()
      .map(|name| StepDef {
        name: (*name).to_string(),
      })
      .collect();

    Self {
      steps,
      on: HashMap::new(),
    }
  }

  /// Names of the declared steps, in execution order.
  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  /// Panics if no step with the given name was declared.
  /// A typo in a step name is a setup bug, not a runtime condition.
  fn ensure_step_exists(&self, step_name: &str) {
    if !self.steps.iter().any(|s| s.name == step_name) {
      panic!("Pipeline setup error: Step '{}' not found in pipeline definition.", step_name);
    }
  }

  /// Registers an `on` handler for a step.
  ///
  /// The handler may return any error type convertible into the pipeline's `Err`.
  pub fn on<F, UserProvidedErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(ContextData<TData>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<PipelineControl, UserProvidedErr>> + Send + 'static,
    UserProvidedErr: Into<Err> + Send + Sync + 'static,
  {
    self.ensure_step_exists(step_name);
    let final_handler: Handler<TData, Err> = Box::new(move |ctx_data| {
      let user_fut = handler_fn(ctx_data);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });
    self.on.entry(step_name.to_string()).or_default().push(final_handler);
  }
}
