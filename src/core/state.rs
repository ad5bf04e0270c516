//! Calculator input state and its pure transitions.
//!
//! A [`CalculatorState`] is an immutable value. Every transition takes
//! `&self` and returns the next state, so a front end can keep any number
//! of past states around without copying hazards.
//!
//! Digit, decimal and clear presses settle immediately. Operator and equals
//! presses may need the arithmetic service; for those the transition yields
//! a [`Step::Evaluate`] holding the request and everything needed to build
//! the next state once the result (or failure) is known.

use super::input::{Digit, Input};
use super::numeral::{format_number, is_display_numeral, parse_display};
use super::operation::{CalculationRequest, Operation};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Ways a state can break the display and operator invariants.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateViolation {
    #[error("Display is empty")]
    EmptyDisplay,

    #[error("Display '{0}' contains more than one decimal point")]
    MultipleDecimalPoints(String),

    #[error("Display '{0}' is not a number")]
    NotANumber(String),

    #[error("Operator '{0}' is pending without a pending operand")]
    OperatorWithoutOperand(Operation),
}

/// The calculator's input state.
///
/// # Example
///
/// ```rust
/// use tally::core::{CalculatorState, Digit};
///
/// let state = CalculatorState::new()
///     .input_digit(Digit::new(4).unwrap())
///     .input_decimal()
///     .input_digit(Digit::new(2).unwrap());
///
/// assert_eq!(state.display(), "4.2");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    display: String,
    pending_operand: Option<f64>,
    pending_operator: Option<Operation>,
    awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The initial state: `"0"` on the display, nothing pending.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_operand: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending_operator
    }

    /// True right after an operator or equals press: the next digit starts
    /// a fresh number.
    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// The number currently on the display.
    pub fn value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// Apply any input.
    pub fn apply(&self, input: Input) -> Step {
        match input {
            Input::Digit(d) => Step::Settled(self.input_digit(d)),
            Input::Decimal => Step::Settled(self.input_decimal()),
            Input::Clear => Step::Settled(self.clear()),
            Input::Operator(op) => self.set_operator(op),
            Input::Equals => self.equals(),
        }
    }

    pub fn input_digit(&self, digit: Digit) -> Self {
        let display = if self.awaiting_operand || self.display == "0" {
            digit.to_string()
        } else {
            format!("{}{}", self.display, digit)
        };

        Self {
            display,
            awaiting_operand: false,
            ..self.clone()
        }
    }

    /// A second decimal point in the same number is ignored.
    pub fn input_decimal(&self) -> Self {
        if self.awaiting_operand {
            return Self {
                display: "0.".to_string(),
                awaiting_operand: false,
                ..self.clone()
            };
        }

        if self.display.contains('.') {
            return self.clone();
        }

        Self {
            display: format!("{}.", self.display),
            ..self.clone()
        }
    }

    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Record `op` as the pending operator.
    ///
    /// With no pending operand the displayed value becomes the operand.
    /// With both an operand and an operator pending, the previous operation
    /// is resolved first, left to right.
    pub fn set_operator(&self, op: Operation) -> Step {
        let value = self.value();

        match (self.pending_operand, self.pending_operator) {
            (None, _) => Step::Settled(Self {
                pending_operand: Some(value),
                pending_operator: Some(op),
                awaiting_operand: true,
                ..self.clone()
            }),
            (Some(operand), Some(pending)) => Step::Evaluate(PendingEvaluation {
                request: CalculationRequest::new(operand, value, pending),
                resume: Resume::Chain { next: op },
            }),
            (Some(_), None) => Step::Settled(Self {
                pending_operator: Some(op),
                awaiting_operand: true,
                ..self.clone()
            }),
        }
    }

    /// Resolve the pending operation, if there is one.
    pub fn equals(&self) -> Step {
        match (self.pending_operand, self.pending_operator) {
            (Some(operand), Some(op)) => Step::Evaluate(PendingEvaluation {
                request: CalculationRequest::new(operand, self.value(), op),
                resume: Resume::Equals,
            }),
            _ => Step::Settled(self.clone()),
        }
    }

    /// Check the state against its invariants, collecting every violation.
    ///
    /// States built through the transitions always pass; this is meant for
    /// states that come from outside, such as a restored session.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<StateViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<StateViolation>>> = Vec::new();

        if self.display.is_empty() {
            checks.push(Validation::fail(StateViolation::EmptyDisplay));
        } else if self.display.matches('.').count() > 1 {
            checks.push(Validation::fail(StateViolation::MultipleDecimalPoints(
                self.display.clone(),
            )));
        } else if !is_display_numeral(&self.display) {
            checks.push(Validation::fail(StateViolation::NotANumber(
                self.display.clone(),
            )));
        }

        if let (None, Some(op)) = (self.pending_operand, self.pending_operator) {
            checks.push(Validation::fail(StateViolation::OperatorWithoutOperand(op)));
        }

        if checks.is_empty() {
            return Validation::success(());
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

/// Outcome of a pure transition.
#[derive(Clone, PartialEq, Debug)]
pub enum Step {
    /// The transition is complete.
    Settled(CalculatorState),

    /// The transition needs the arithmetic service before it can complete.
    Evaluate(PendingEvaluation),
}

impl Step {
    /// The settled state, if no evaluation is needed.
    pub fn settled(self) -> Option<CalculatorState> {
        match self {
            Self::Settled(state) => Some(state),
            Self::Evaluate(_) => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Resume {
    /// Operator press: the result becomes the new operand.
    Chain { next: Operation },
    /// Equals press: the result is shown and nothing stays pending.
    Equals,
}

/// An operation waiting on the arithmetic service.
#[derive(Clone, PartialEq, Debug)]
pub struct PendingEvaluation {
    request: CalculationRequest,
    resume: Resume,
}

impl PendingEvaluation {
    /// What to send to the service.
    pub fn request(&self) -> &CalculationRequest {
        &self.request
    }

    /// Whether this evaluation came from an equals press.
    pub fn is_equals(&self) -> bool {
        matches!(self.resume, Resume::Equals)
    }

    /// Complete the transition with the service's result.
    pub fn resolve(self, result: f64) -> CalculatorState {
        let display = format_number(result);
        match self.resume {
            Resume::Chain { next } => CalculatorState {
                display,
                pending_operand: Some(result),
                pending_operator: Some(next),
                awaiting_operand: true,
            },
            Resume::Equals => CalculatorState {
                display,
                pending_operand: None,
                pending_operator: None,
                awaiting_operand: true,
            },
        }
    }

    /// Complete the transition after a failed evaluation.
    ///
    /// The calculation counts as resolved with the first operand unchanged.
    pub fn fallback(self) -> CalculatorState {
        let first = self.request.num1;
        self.resolve(first)
    }
}
