// Abstract Syntax Tree (AST) definitions for NewLanguage.
// Every node evaluates to a single f64; see newlang_eval for the walk.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of the syntax tree. The set of variants is closed; evaluation
/// dispatches on it with exhaustive matching.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "node"))]
pub enum Node {
    Literal(LiteralNode),
    BinaryChain(BinaryChainNode),
    Variable(VariableNode),
    Declaration(Box<DeclarationNode>),
    Commands(CommandSequenceNode),
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LiteralNode {
    pub value: f64,
}

/// A flat `operand (operator operand)*` sequence as matched, before
/// precedence reduction. Slots alternate and both begin and end with an
/// operand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryChainNode {
    pub slots: Vec<ChainSlot>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChainSlot {
    Operand(Node),
    Operator(BinaryOperator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

/// A by-name reference, resolved through the environment at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableNode {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeclarationNode {
    pub name: String,
    pub assignee: Node,
}

/// Comma separated commands. Only the last value is the sequence value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommandSequenceNode {
    pub commands: Vec<Node>,
}

impl BinaryOperator {
    /// Every operator symbol the chain matcher recognises.
    pub const SYMBOLS: &'static str = "+-*/";

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Sub),
            '*' => Some(BinaryOperator::Mul),
            '/' => Some(BinaryOperator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
        }
    }

    /// Reduction priority. Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Mul | BinaryOperator::Div => 2,
            BinaryOperator::Add | BinaryOperator::Sub => 1,
        }
    }

    /// IEEE-754 semantics throughout: division by zero yields inf or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOperator::Add => lhs + rhs,
            BinaryOperator::Sub => lhs - rhs,
            BinaryOperator::Mul => lhs * rhs,
            BinaryOperator::Div => lhs / rhs,
        }
    }
}

impl Node {
    pub fn literal(value: f64) -> Self {
        Node::Literal(LiteralNode { value })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Node::Variable(VariableNode { name: name.into() })
    }

    pub fn declaration(name: impl Into<String>, assignee: Node) -> Self {
        Node::Declaration(Box::new(DeclarationNode {
            name: name.into(),
            assignee,
        }))
    }

    /// Builds a chain from its first operand and the following
    /// `(operator, operand)` pairs.
    pub fn chain(first: Node, rest: impl IntoIterator<Item = (BinaryOperator, Node)>) -> Self {
        let mut slots = vec![ChainSlot::Operand(first)];
        for (op, operand) in rest {
            slots.push(ChainSlot::Operator(op));
            slots.push(ChainSlot::Operand(operand));
        }
        Node::BinaryChain(BinaryChainNode { slots })
    }

    pub fn commands(commands: Vec<Node>) -> Self {
        Node::Commands(CommandSequenceNode { commands })
    }
}
