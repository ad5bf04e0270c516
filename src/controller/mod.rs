//! The imperative shell around the pure calculator core.
//!
//! [`Calculator`] is the single owner of the input state. It runs pure
//! transitions, completes pending evaluations against a
//! [`CalculatorService`], and keeps the history panel in sync with the
//! store.
//!
//! # Error Channel
//!
//! A failed evaluation never aborts a transition: the state falls back to
//! the first operand and [`Calculator::press`] returns the
//! [`EvaluateError`] for the front end to show. History failures are only
//! logged; the panel keeps whatever it showed before.
//!
//! Every operation takes `&mut self`, so one calculator never has two
//! requests in flight.

mod panel;

pub use panel::HistoryPanel;

use crate::checkpoint::{CheckpointError, SessionCheckpoint};
use crate::core::{CalculationRequest, CalculatorState, Input, Step};
use crate::service::{CalculatorService, EvaluateError};
use tracing::{debug, error, warn};

pub struct Calculator<S: CalculatorService> {
    service: S,
    state: CalculatorState,
    panel: HistoryPanel,
}

impl<S: CalculatorService> Calculator<S> {
    /// A calculator in the initial state. History is empty until
    /// [`Calculator::mount`] or the first successful evaluation.
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: CalculatorState::new(),
            panel: HistoryPanel::new(),
        }
    }

    /// Resume a saved session. The checkpoint is validated first.
    pub fn restore(service: S, checkpoint: &SessionCheckpoint) -> Result<Self, CheckpointError> {
        checkpoint.verify()?;

        let mut panel = HistoryPanel::new();
        panel.set_visible(checkpoint.history_visible);

        Ok(Self {
            service,
            state: checkpoint.state.clone(),
            panel,
        })
    }

    /// Snapshot the session.
    pub fn checkpoint(&self) -> SessionCheckpoint {
        SessionCheckpoint::new(self.state.clone(), self.panel.is_visible())
    }

    /// Load the history, as a freshly shown calculator does.
    pub async fn mount(&mut self) {
        self.refresh_history().await;
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn history(&self) -> &HistoryPanel {
        &self.panel
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Show or hide the history panel.
    pub fn toggle_history(&mut self) -> bool {
        self.panel.toggle()
    }

    /// Handle one keypad input.
    ///
    /// The state always advances. `Err` means an evaluation failed and the
    /// calculator fell back to the first operand; the error is reported
    /// here and nowhere else.
    pub async fn press(&mut self, input: Input) -> Result<(), EvaluateError> {
        debug!(input = %input.label(), display = %self.state.display(), "press");

        match self.state.apply(input) {
            Step::Settled(next) => {
                self.state = next;
                Ok(())
            }
            Step::Evaluate(pending) => match self.evaluate(pending.request()).await {
                Ok(result) => {
                    self.state = pending.resolve(result);
                    Ok(())
                }
                Err(err) => {
                    self.state = pending.fallback();
                    Err(err)
                }
            },
        }
    }

    /// Feed several inputs in order, collecting every surfaced error.
    pub async fn press_all<I>(&mut self, inputs: I) -> Vec<EvaluateError>
    where
        I: IntoIterator<Item = Input>,
    {
        let mut errors = Vec::new();
        for input in inputs {
            if let Err(err) = self.press(input).await {
                errors.push(err);
            }
        }
        errors
    }

    /// Ask the service for a result; on success the history is re-read.
    pub async fn evaluate(&mut self, request: &CalculationRequest) -> Result<f64, EvaluateError> {
        match self.service.calculate(request).await {
            Ok(result) => {
                debug!(%request, result, "evaluated");
                self.refresh_history().await;
                Ok(result)
            }
            Err(err) => {
                error!(%request, error = %err, "evaluation failed");
                Err(EvaluateError::from(err))
            }
        }
    }

    /// Replace the panel's log with the store's current history.
    pub async fn refresh_history(&mut self) {
        match self.service.history().await {
            Ok(entries) => {
                let log = self.panel.log().replace(entries);
                self.panel.show_log(log);
            }
            Err(err) => warn!(error = %err, "failed to fetch history"),
        }
    }

    /// Delete the store's history; the panel empties only if that worked.
    pub async fn clear_history(&mut self) {
        match self.service.clear_history().await {
            Ok(()) => {
                let log = self.panel.log().cleared();
                self.panel.show_log(log);
            }
            Err(err) => warn!(error = %err, "failed to clear history"),
        }
    }
}
