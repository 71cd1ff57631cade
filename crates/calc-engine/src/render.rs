//! Infix rendering of the operation stack for history display.

use crate::op::Op;

/// Renders `ops` by consuming elements from the tail, mirroring the
/// reduction order of [`crate::evaluate::evaluate`].
///
/// Operands render in decimal form, constants as their symbol, unary
/// operators as `symbol(inner)`. Binary operators join their operands in
/// reduction order, except `÷` and `-` which emit them swapped so the
/// string reads left to right the way the expression evaluates.
pub fn traverse(ops: &[Op]) -> (Option<String>, &[Op]) {
    if let Some((op, rest)) = ops.split_last() {
        match op {
            Op::Operand(value) => return (Some(value.to_string()), rest),
            Op::Constant(symbol) => return (Some(symbol.to_string()), rest),
            Op::Unary(symbol, _) => {
                let (inner, remaining) = traverse(rest);
                if let Some(inner) = inner {
                    return (Some(format!("{}({})", symbol, inner)), remaining);
                }
            }
            Op::Binary(symbol, _) => {
                let (first, remaining) = traverse(rest);
                if let Some(first) = first {
                    let (second, remaining) = traverse(remaining);
                    if let Some(second) = second {
                        let rendered = if matches!(*symbol, "÷" | "-") {
                            format!("{}{}{}", second, symbol, first)
                        } else {
                            format!("{}{}{}", first, symbol, second)
                        };
                        return (Some(rendered), remaining);
                    }
                }
            }
        }
    }
    (None, ops)
}
