use std::fmt::Display;
use std::fmt::Formatter;

/// The boolean function computed by a two-input gate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GateKind {
    And,
    Or,
    Xor,
}

impl GateKind {
    /// The output of a healthy gate of this kind for the given inputs.
    pub fn evaluate(self, a: bool, b: bool) -> bool {
        match self {
            GateKind::And => a && b,
            GateKind::Or => a || b,
            GateKind::Xor => a ^ b,
        }
    }
}

impl Display for GateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GateKind::And => write!(f, "AND"),
            GateKind::Or => write!(f, "OR"),
            GateKind::Xor => write!(f, "XOR"),
        }
    }
}
