//! Canonical source rendering.
//!
//! The output of `Display` re-parses to an equal tree: chains used as
//! operands of another chain are wrapped in brackets, since brackets
//! themselves leave no node behind.

use std::fmt;

use crate::ast::*;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(lit) => write!(f, "{lit}"),
            Node::BinaryChain(chain) => write!(f, "{chain}"),
            Node::Variable(var) => write!(f, "{}", var.name),
            Node::Declaration(decl) => write!(f, "{decl}"),
            Node::Commands(seq) => write!(f, "{seq}"),
        }
    }
}

/// Zeros after a leading `1` in the rendering of positive infinity. `1e309`
/// exceeds `f64::MAX`, so the digits read back as infinity.
const INFINITY_ZEROS: usize = 309;

/// Literals read from source are never negative or NaN, so only positive
/// infinity (an overflowing digit string) needs special treatment. Other
/// non-finite values render through `f64` and do not re-parse.
impl fmt::Display for LiteralNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == f64::INFINITY {
            write!(f, "1{}", "0".repeat(INFINITY_ZEROS))
        } else {
            write!(f, "{}", self.value)
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for BinaryChainNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match slot {
                ChainSlot::Operator(op) => write!(f, "{op}")?,
                ChainSlot::Operand(node @ Node::Literal(_))
                | ChainSlot::Operand(node @ Node::Variable(_)) => write!(f, "{node}")?,
                ChainSlot::Operand(node) => write!(f, "({node})")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for DeclarationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.assignee)
    }
}

impl fmt::Display for CommandSequenceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}
