//! calccore — shared library for the grid calculator
//!
//! The calculator engine (the state machine behind the keys), the button
//! model, display formatting, and the app theme.

pub mod engine;
pub mod format;
pub mod keypad;
pub mod theme;

pub use engine::{CalcError, Engine};
pub use keypad::{BinOp, Key, KeyClass};
pub use theme::CalcTheme;
