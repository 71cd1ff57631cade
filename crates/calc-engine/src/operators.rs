//! Operator definitions and the symbol registry.

use crate::op::Op;
use std::collections::HashMap;

/// Map of symbol to registered op.
pub type OpTable = HashMap<&'static str, Op>;

/// Map of symbol to precedence rank.
pub type RankTable = HashMap<&'static str, u8>;

/// All registered constants and operators.
///
/// `÷` and `-` receive their operands in reduction order (most recently
/// reduced first), so their functions swap to keep entry-order semantics:
/// pushing `5`, `3`, `-` computes `5 - 3`.
pub fn operators() -> Vec<Op> {
    vec![
        Op::Constant("π"),
        Op::Binary("✕", |a, b| a * b),
        Op::Binary("÷", |a, b| b / a),
        Op::Binary("+", |a, b| a + b),
        Op::Binary("-", |a, b| b - a),
        Op::Unary("√", f64::sqrt),
        Op::Unary("sin", f64::sin),
        Op::Unary("cos", f64::cos),
    ]
}

/// Builds the symbol registry from [`operators`].
pub fn operators_map() -> OpTable {
    let mut map = HashMap::new();
    for op in operators() {
        if let Some(symbol) = op.symbol() {
            map.insert(symbol, op);
        }
    }
    map
}

/// Precedence ranks for every registered operator.
///
/// Nothing consults the ranks yet: evaluation and rendering are purely
/// stack-order driven. The table backs a possible precedence-aware
/// rendering mode and is exposed through [`crate::CalcEngine::precedence`].
pub fn precedence_map() -> RankTable {
    let mut ranks: RankTable = HashMap::new();
    ranks.insert("√", 100);
    ranks.insert("sin", 100);
    ranks.insert("cos", 100);
    ranks.insert("✕", 50);
    ranks.insert("÷", 50);
    ranks.insert("+", 10);
    ranks.insert("-", 10);
    ranks
}

/// Resolves a constant symbol to its numeric value.
pub fn constant_value(symbol: &str) -> Option<f64> {
    match symbol {
        "π" => Some(std::f64::consts::PI),
        _ => None,
    }
}
