//! Evaluation of NewLanguage syntax trees to a single `f64`.

pub mod interpreter;
mod reduce;

pub use interpreter::{evaluate, EvalError, Interpreter};
