//! Tally: a four-function calculator client
//!
//! Tally follows a "pure core, imperative shell" layout. The calculator's
//! input handling is a pure state machine; arithmetic and history live in a
//! remote HTTP service that the shell talks to.
//!
//! # Core Concepts
//!
//! - **State**: [`CalculatorState`] plus pure transitions per keypad input
//! - **Steps**: operator and equals presses may yield a pending evaluation
//! - **Service**: [`CalculatorService`], the async boundary to the remote API
//! - **Controller**: [`Calculator`], the single owner that completes evaluations
//!   and keeps the history panel current
//!
//! # Example
//!
//! ```rust
//! use tally::core::{CalculatorState, Digit, Operation, Step};
//!
//! let state = CalculatorState::new()
//!     .input_digit(Digit::new(5).unwrap())
//!     .set_operator(Operation::Add)
//!     .settled()
//!     .unwrap()
//!     .input_digit(Digit::new(3).unwrap());
//!
//! let Step::Evaluate(pending) = state.equals() else {
//!     unreachable!("an operation is pending");
//! };
//! assert_eq!(pending.request().num1, 5.0);
//! assert_eq!(pending.request().num2, 3.0);
//!
//! // The controller would ask the service; here we supply the answer.
//! let state = pending.resolve(8.0);
//! assert_eq!(state.display(), "8");
//! ```

pub mod checkpoint;
pub mod config;
pub mod controller;
pub mod core;
pub mod service;

// Re-export commonly used types
pub use checkpoint::{CheckpointError, SessionCheckpoint};
pub use config::{ClientConfig, ConfigError};
pub use controller::{Calculator, HistoryPanel};
pub use core::{CalculatorState, Digit, HistoryEntry, HistoryLog, Input, Operation, Step};
pub use service::{CalculatorService, EvaluateError, HttpCalculatorService, ServiceError};
