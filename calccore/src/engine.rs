//! Calculator engine — accumulator, pending operator, input buffer, memory
//!
//! Classic deferred-operator accumulator: an operator press folds the number
//! typed so far into the running result using the operator recorded by the
//! *previous* operator press, then records the new one.

use crate::format::format_value;
use crate::keypad::{BinOp, Key};
use thiserror::Error;

/// Errors the key dispatch cannot normally produce.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The input buffer does not parse as a number. Reachable only through a
    /// bare "." (decimal point pressed on a fresh buffer).
    #[error("input buffer is not a number: {0:?}")]
    InvalidNumber(String),
}

/// Operator recorded by the last operator press.
///
/// `Equals` means the last action produced a final result; the next typed
/// digit starts a fresh chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    None,
    Op(BinOp),
    Equals,
}

/// The calculator state machine. One [`press`](Engine::press) per button
/// activation, single-threaded.
pub struct Engine {
    /// Running result of the current chain.
    result: f64,
    /// Digits/decimal point typed since the last operator press. Never
    /// empty; "0" at rest.
    input: String,
    pending: Pending,
    /// One-register memory, touched only by the memory keys.
    memory: f64,
    /// Main display surface, mirrors whatever the last press showed.
    display: String,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            result: 0.0,
            input: "0".to_string(),
            pending: Pending::None,
            memory: 0.0,
            display: "0".to_string(),
        }
    }

    /// Main display text (the large numeric line).
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current value of the memory register.
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// The "Memory = <value>" line under the keypad.
    pub fn memory_text(&self) -> String {
        format!("Memory = {}", format_value(self.memory))
    }

    /// Handle one button activation and return the main display text.
    pub fn press(&mut self, key: Key) -> Result<&str, CalcError> {
        match key {
            Key::Digit(d) => self.type_char(char::from(b'0' + d)),
            Key::Decimal => self.type_char('.'),
            Key::Op(op) => {
                self.compute()?;
                self.pending = Pending::Op(op);
            }
            Key::Equals => {
                self.compute()?;
                self.pending = Pending::Equals;
            }
            Key::Sqrt => {
                // A completed result (after =) is reused; otherwise the
                // typed number is the operand. Negative input yields NaN,
                // shown as-is.
                if self.pending != Pending::Equals {
                    self.result = self.parse_input()?;
                }
                self.result = self.result.sqrt();
                self.input = format_value(self.result);
                self.display = self.input.clone();
                self.pending = Pending::Equals;
            }
            Key::Backspace => {
                self.input.pop();
                if self.input.is_empty() {
                    self.input.push('0');
                }
                self.display = self.input.clone();
            }
            Key::Clear => {
                self.result = 0.0;
                self.input = "0".to_string();
                self.pending = Pending::None;
                self.display = "0".to_string();
            }
            Key::MemRecall => {
                self.input = format_value(self.memory);
                self.display = self.input.clone();
            }
            Key::MemAdd => {
                let operand = self.memory_operand()?;
                self.memory += operand;
            }
            Key::MemSubtract => {
                let operand = self.memory_operand()?;
                self.memory -= operand;
            }
            Key::MemClear => self.memory = 0.0,
        }
        Ok(&self.display)
    }

    /// Digit or decimal point. A lone "0" is replaced, anything else appends.
    fn type_char(&mut self, c: char) {
        if self.pending == Pending::Equals {
            // Fresh chain after =
            self.result = 0.0;
            self.pending = Pending::None;
        }
        if self.input == "0" {
            self.input = c.to_string();
        } else {
            self.input.push(c);
        }
        self.display = self.input.clone();
    }

    /// Fold the typed number into the accumulator using the previous pending
    /// operator, then show the new accumulator.
    fn compute(&mut self) -> Result<(), CalcError> {
        let operand = self.parse_input()?;
        self.input = "0".to_string();
        match self.pending {
            Pending::None => self.result = operand,
            // = again: keep the result
            Pending::Equals => {}
            Pending::Op(op) => match op {
                BinOp::Add => self.result += operand,
                BinOp::Subtract => self.result -= operand,
                BinOp::Multiply => self.result *= operand,
                // Division by zero is unguarded: Inf/NaN flow to the
                // display like any other value.
                BinOp::Divide => self.result /= operand,
                BinOp::Power => {
                    // Deliberately lossy: the power result is truncated to
                    // an integer value (saturating cast) and displayed as
                    // integer text.
                    let truncated = self.result.powf(operand) as i64;
                    self.result = truncated as f64;
                    self.display = truncated.to_string();
                    return Ok(());
                }
            },
        }
        self.display = format_value(self.result);
        Ok(())
    }

    /// Operand for M+/M-: the typed number, or the completed result after =.
    fn memory_operand(&self) -> Result<f64, CalcError> {
        if self.pending == Pending::Equals {
            Ok(self.result)
        } else {
            self.parse_input()
        }
    }

    fn parse_input(&self) -> Result<f64, CalcError> {
        self.input
            .parse()
            .map_err(|_| CalcError::InvalidNumber(self.input.clone()))
    }
}
