//! Button model — the fixed 24-key alphabet and grid layout

/// Binary operator applied between the accumulator and the typed number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// One calculator button, decided from its label once at UI construction.
///
/// `Digit` holds 0–9.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Decimal,
    Op(BinOp),
    Equals,
    Sqrt,
    Backspace,
    Clear,
    MemAdd,
    MemSubtract,
    MemRecall,
    MemClear,
}

/// Styling class for a button (the keypad uses three fill colors).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyClass {
    Digit,
    Operator,
    Memory,
}

/// The 24 buttons in grid order (4 columns, 6 rows).
pub const LAYOUT: [[&str; 4]; 6] = [
    ["7", "8", "9", "+"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "×"],
    [".", "0", "=", "÷"],
    ["C", "←", "^", "√"],
    ["M+", "M-", "MR", "MC"],
];

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Key {
    /// Map a button label to its key. Returns `None` for labels outside the
    /// 24-symbol alphabet.
    pub fn from_label(label: &str) -> Option<Key> {
        let key = match label {
            "0" => Key::Digit(0),
            "1" => Key::Digit(1),
            "2" => Key::Digit(2),
            "3" => Key::Digit(3),
            "4" => Key::Digit(4),
            "5" => Key::Digit(5),
            "6" => Key::Digit(6),
            "7" => Key::Digit(7),
            "8" => Key::Digit(8),
            "9" => Key::Digit(9),
            "." => Key::Decimal,
            "+" => Key::Op(BinOp::Add),
            "-" => Key::Op(BinOp::Subtract),
            "×" => Key::Op(BinOp::Multiply),
            "÷" => Key::Op(BinOp::Divide),
            "^" => Key::Op(BinOp::Power),
            "=" => Key::Equals,
            "√" => Key::Sqrt,
            "←" => Key::Backspace,
            "C" => Key::Clear,
            "M+" => Key::MemAdd,
            "M-" => Key::MemSubtract,
            "MR" => Key::MemRecall,
            "MC" => Key::MemClear,
            _ => return None,
        };
        Some(key)
    }

    /// The label printed on the button face.
    pub fn label(&self) -> &'static str {
        match *self {
            Key::Digit(d) => DIGIT_LABELS[usize::from(d)],
            Key::Decimal => ".",
            Key::Op(BinOp::Add) => "+",
            Key::Op(BinOp::Subtract) => "-",
            Key::Op(BinOp::Multiply) => "×",
            Key::Op(BinOp::Divide) => "÷",
            Key::Op(BinOp::Power) => "^",
            Key::Equals => "=",
            Key::Sqrt => "√",
            Key::Backspace => "←",
            Key::Clear => "C",
            Key::MemAdd => "M+",
            Key::MemSubtract => "M-",
            Key::MemRecall => "MR",
            Key::MemClear => "MC",
        }
    }

    /// Styling class for the button fill.
    pub fn class(&self) -> KeyClass {
        match self {
            Key::Digit(_) => KeyClass::Digit,
            Key::MemAdd | Key::MemSubtract | Key::MemRecall | Key::MemClear => KeyClass::Memory,
            _ => KeyClass::Operator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_layout_label_maps_to_a_key() {
        for row in LAYOUT {
            for label in row {
                let key = Key::from_label(label);
                assert!(key.is_some(), "no key for label {label:?}");
                assert_eq!(key.unwrap().label(), label);
            }
        }
    }

    #[test]
    fn layout_keys_are_distinct() {
        let mut seen = Vec::new();
        for row in LAYOUT {
            for label in row {
                let key = Key::from_label(label).unwrap();
                assert!(!seen.contains(&key), "duplicate key for {label:?}");
                seen.push(key);
            }
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn unknown_labels_are_rejected() {
        for label in ["", "00", "x", "/", "%", "CE", "sqrt"] {
            assert_eq!(Key::from_label(label), None, "label {label:?}");
        }
    }

    #[test]
    fn styling_classes_match_the_three_button_groups() {
        assert_eq!(Key::Digit(7).class(), KeyClass::Digit);
        assert_eq!(Key::Decimal.class(), KeyClass::Operator);
        assert_eq!(Key::Clear.class(), KeyClass::Operator);
        assert_eq!(Key::Backspace.class(), KeyClass::Operator);
        assert_eq!(Key::Op(BinOp::Power).class(), KeyClass::Operator);
        assert_eq!(Key::MemRecall.class(), KeyClass::Memory);
    }
}
