//! Arithmetic operations and the request handed to the arithmetic service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary operations the calculator offers.
///
/// Serializes as the lower-case operation name, which is the wire format
/// the arithmetic service expects.
///
/// # Example
///
/// ```rust
/// use tally::core::Operation;
///
/// assert_eq!(Operation::Divide.name(), "divide");
/// assert_eq!(Operation::Divide.symbol(), "÷");
/// assert_eq!(serde_json::to_string(&Operation::Add).unwrap(), "\"add\"");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in keypad order.
    pub const ALL: [Operation; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Wire name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Symbol used when rendering an expression.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Body of a `POST /api/calculate` request.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// First operand
    pub num1: f64,
    /// Second operand
    pub num2: f64,
    /// Operation to apply
    pub operation: Operation,
}

impl CalculationRequest {
    pub fn new(num1: f64, num2: f64, operation: Operation) -> Self {
        Self {
            num1,
            num2,
            operation,
        }
    }
}

impl fmt::Display for CalculationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.num1, self.operation, self.num2)
    }
}
