// Precedence reduction of a flat binary chain

use newlang_ast::{BinaryChainNode, BinaryOperator, ChainSlot, Node};

use crate::interpreter::{EvalError, Interpreter};

/// Working copy of a chain slot. Operands start out pending and are
/// replaced by their value when their operator is reduced; the tree itself
/// is never touched, so a tree can be evaluated any number of times.
#[derive(Debug, Clone, Copy)]
enum Slot<'a> {
    Pending(&'a Node),
    Value(f64),
    Operator(BinaryOperator),
}

impl<'a, 'env> Interpreter<'a, 'env> {
    /// Repeatedly reduces the leftmost operator of highest precedence with
    /// its two neighbours until one value remains.
    pub(crate) fn reduce_chain(&mut self, chain: &'a BinaryChainNode) -> Result<f64, EvalError> {
        let malformed = || EvalError::MalformedChain {
            len: chain.slots.len(),
        };
        if chain.slots.len() % 2 == 0 {
            return Err(malformed());
        }

        let mut slots: Vec<Slot<'a>> = Vec::with_capacity(chain.slots.len());
        for (i, slot) in chain.slots.iter().enumerate() {
            let slot = match slot {
                ChainSlot::Operand(node) if i % 2 == 0 => Slot::Pending(node),
                ChainSlot::Operator(op) if i % 2 == 1 => Slot::Operator(*op),
                _ => return Err(malformed()),
            };
            slots.push(slot);
        }

        while slots.len() > 1 {
            let (at, op) = highest_operator(&slots).ok_or_else(malformed)?;
            let lhs = self.operand_value(slots[at - 1], chain)?;
            let rhs = self.operand_value(slots[at + 1], chain)?;
            let value = op.apply(lhs, rhs);
            log::trace!("reduced {lhs} {op} {rhs} = {value}");
            slots.splice(at - 1..=at + 1, [Slot::Value(value)]);
        }

        self.operand_value(slots[0], chain)
    }

    fn operand_value(
        &mut self,
        slot: Slot<'a>,
        chain: &BinaryChainNode,
    ) -> Result<f64, EvalError> {
        match slot {
            Slot::Pending(node) => self.eval(node),
            Slot::Value(value) => Ok(value),
            Slot::Operator(_) => Err(EvalError::MalformedChain {
                len: chain.slots.len(),
            }),
        }
    }
}

/// Position of the operator to reduce next. Ties go to the leftmost, which
/// makes operators of equal precedence left associative.
fn highest_operator(slots: &[Slot<'_>]) -> Option<(usize, BinaryOperator)> {
    let mut best: Option<(usize, BinaryOperator)> = None;
    for (i, slot) in slots.iter().enumerate() {
        if let Slot::Operator(op) = *slot {
            match best {
                Some((_, current)) if current.precedence() >= op.precedence() => {}
                _ => best = Some((i, op)),
            }
        }
    }
    best
}
