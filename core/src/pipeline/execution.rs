// storefront/src/pipeline/execution.rs

//! Contains `Pipeline::run()`, which executes the declared steps in order.

use crate::error::PipelineError;
use crate::pipeline::context_data::ContextData;
use crate::pipeline::control::{PipelineControl, PipelineResult};
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Instrument, Level};

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  /// Executes the pipeline against the given shared context `ctx_data`.
  ///
  /// Steps run strictly in declaration order. The first handler error aborts
  /// the run and is returned unchanged; a handler returning
  /// `PipelineControl::Stop` ends the run with `PipelineResult::Stopped`.
  #[instrument(
    name = "Pipeline::run",
    skip_all,
    fields(
      pipeline_context_data_type = %std::any::type_name::<TData>(),
      num_steps = self.steps.len(),
    ),
    err(Display)
  )]
  pub async fn run(&self, ctx_data: ContextData<TData>) -> Result<PipelineResult, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name_str = step_def.name.as_str();

      let handlers = match self.on.get(step_name_str) {
        Some(handlers) if !handlers.is_empty() => handlers,
        _ => {
          event!(Level::ERROR, step_name = step_name_str, "Step has no handlers.");
          return Err(Err::from(PipelineError::HandlerMissing {
            step_name: step_def.name.clone(),
          }));
        }
      };

      let step_span = span!(
        Level::INFO,
        "pipeline_step_execution",
        step_name = step_name_str,
        step_index = step_idx
      );

      for (handler_idx, handler_fn) in handlers.iter().enumerate() {
        let outcome = handler_fn(ctx_data.clone())
          .instrument(span!(parent: &step_span, Level::DEBUG, "on_handler", handler_index = handler_idx))
          .await;
        match outcome {
          Ok(PipelineControl::Continue) => {}
          Ok(PipelineControl::Stop) => {
            event!(Level::INFO, step_name = step_name_str, "Pipeline stopped by a handler.");
            return Ok(PipelineResult::Stopped);
          }
          Err(e) => {
            event!(Level::WARN, step_name = step_name_str, error = %e, "Handler failed.");
            return Err(e);
          }
        }
      }
      event!(Level::DEBUG, step_name = step_name_str, "Step finished.");
    }

    event!(Level::DEBUG, "Pipeline execution completed successfully.");
    Ok(PipelineResult::Completed)
  }
}
