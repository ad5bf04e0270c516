//! The calculator API boundary.
//!
//! [`CalculatorService`] is the seam between the controller and the remote
//! arithmetic service / history store. [`HttpCalculatorService`] talks to the
//! real API; tests substitute their own implementations.

mod error;
mod http;

pub use error::{EvaluateError, ServiceError, UNREACHABLE_MESSAGE};
pub use http::HttpCalculatorService;

use crate::core::{CalculationRequest, HistoryEntry};
use async_trait::async_trait;

/// Operations the remote calculator API offers.
#[async_trait]
pub trait CalculatorService: Send + Sync {
    /// `POST /api/calculate`
    async fn calculate(&self, request: &CalculationRequest) -> Result<f64, ServiceError>;

    /// `GET /api/history`, in store order.
    async fn history(&self) -> Result<Vec<HistoryEntry>, ServiceError>;

    /// `DELETE /api/history`
    async fn clear_history(&self) -> Result<(), ServiceError>;

    /// `GET /api/health`, returning the reported status line.
    async fn health(&self) -> Result<String, ServiceError>;
}
