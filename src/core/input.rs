//! Input events driving the calculator.
//!
//! Every key on the keypad maps to exactly one [`Input`]. Parsing from
//! characters lets front ends feed whole key sequences such as `"12+3="`.

use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while turning raw keys into inputs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Digit must be between 0 and 9, got {0}")]
    DigitOutOfRange(u8),

    #[error("Unrecognized key '{0}'")]
    UnknownKey(char),

    #[error("Expected a single key, got '{0}'")]
    NotASingleKey(String),
}

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, InputError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InputError::DigitOutOfRange(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// The digit as its ASCII character.
    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(InputError::UnknownKey(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A keypad event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Input {
    Digit(Digit),
    Decimal,
    Clear,
    Operator(Operation),
    Equals,
}

impl Input {
    /// Map a single key to an input.
    ///
    /// Accepts `0`-`9`, `.`, `+`, `-`, `*`/`x`/`×`, `/`/`÷`, `=`, `c`/`C`.
    pub fn from_key(key: char) -> Result<Self, InputError> {
        let input = match key {
            '0'..='9' => Self::Digit(Digit::try_from(key)?),
            '.' => Self::Decimal,
            '+' => Self::Operator(Operation::Add),
            '-' => Self::Operator(Operation::Subtract),
            '*' | 'x' | 'X' | '×' => Self::Operator(Operation::Multiply),
            '/' | '÷' => Self::Operator(Operation::Divide),
            '=' => Self::Equals,
            'c' | 'C' => Self::Clear,
            other => return Err(InputError::UnknownKey(other)),
        };
        Ok(input)
    }

    /// Parse a key sequence, skipping whitespace.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{Input, Operation};
    ///
    /// let inputs = Input::parse_sequence("1 + 2 =").unwrap();
    /// assert_eq!(inputs.len(), 4);
    /// assert_eq!(inputs[1], Input::Operator(Operation::Add));
    /// ```
    pub fn parse_sequence(keys: &str) -> Result<Vec<Self>, InputError> {
        keys.chars()
            .filter(|c| !c.is_whitespace())
            .map(Self::from_key)
            .collect()
    }

    /// Short label used in logs.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Clear => "C".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::from_key(key),
            _ => Err(InputError::NotASingleKey(s.to_string())),
        }
    }
}
