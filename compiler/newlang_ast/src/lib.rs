//! Abstract Syntax Tree (AST) for NewLanguage.
//!
//! This crate defines the node model produced by `newlang_parser` and
//! consumed by `newlang_eval`, together with canonical source rendering and
//! (behind the default `serde` feature) JSON helpers.

pub mod ast;
mod display;

pub use ast::{
    BinaryChainNode, BinaryOperator, ChainSlot, CommandSequenceNode, DeclarationNode,
    LiteralNode, Node, VariableNode,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A result type for AST operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Serializes an AST node to a JSON string.
///
/// # Example
///
/// ```
/// use newlang_ast::{to_json, Node};
///
/// let json = to_json(&Node::literal(42.0)).unwrap();
/// assert!(json.contains(r#""type": "Literal""#));
/// assert!(json.contains(r#""value": 42.0"#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes an AST node from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
