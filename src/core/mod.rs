//! Pure core of the calculator.
//!
//! This module contains everything that can be decided without talking to
//! the remote service:
//! - Keypad inputs and digits
//! - The input state machine and its transitions
//! - Display text formatting and parsing
//! - The history snapshot read from the store
//!
//! Nothing here performs I/O. Transitions that need arithmetic hand back a
//! [`PendingEvaluation`] for the controller to complete.

mod history;
mod input;
mod numeral;
mod operation;
mod state;

pub use history::{parse_timestamp, HistoryEntry, HistoryLog};
pub use input::{Digit, Input, InputError};
pub use numeral::{format_number, parse_display};
pub use operation::{CalculationRequest, Operation};
pub use state::{CalculatorState, PendingEvaluation, StateViolation, Step};
