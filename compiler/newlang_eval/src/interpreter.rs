// Tree-walking evaluator for NewLanguage
// Threads an environment through the walk; declarations snapshot it

use newlang_ast::{DeclarationNode, Node};
use newlang_env::{EnvError, Environment};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("unknown variable '{name}'")]
    UnknownVariable { name: String },
    /// A chain whose slots do not alternate operand/operator. The parser
    /// never builds one.
    #[error("malformed binary chain with {len} slot(s)")]
    MalformedChain { len: usize },
    #[error("empty command sequence")]
    EmptySequence,
    #[error(transparent)]
    Env(#[from] EnvError),
}

pub struct Interpreter<'a, 'env> {
    env: &'env mut Environment<'a>,
}

impl<'a, 'env> Interpreter<'a, 'env> {
    pub fn new(env: &'env mut Environment<'a>) -> Self {
        Interpreter { env }
    }

    /// Evaluates `node` against the environment this interpreter owns.
    ///
    /// Declarations add their binding to that environment, so evaluating a
    /// command sequence leaves every declared name behind.
    ///
    /// # Examples
    ///
    /// ```
    /// use newlang_ast::Node;
    /// use newlang_env::Environment;
    /// use newlang_eval::Interpreter;
    ///
    /// let decl = Node::declaration("foo", Node::literal(5.0));
    /// let mut env = Environment::new();
    /// assert_eq!(Interpreter::new(&mut env).eval(&decl), Ok(5.0));
    /// assert_eq!(env.names(), vec!["foo"]);
    /// ```
    pub fn eval(&mut self, node: &'a Node) -> Result<f64, EvalError> {
        match node {
            Node::Literal(lit) => Ok(lit.value),
            Node::BinaryChain(chain) => self.reduce_chain(chain),
            Node::Variable(var) => {
                let decl = self
                    .env
                    .get(&var.name)
                    .ok_or_else(|| EvalError::UnknownVariable {
                        name: var.name.clone(),
                    })?;
                log::trace!("resolving '{}'", var.name);
                // Bindings are not cached: each reference re-evaluates the
                // right-hand side against the current environment.
                self.eval(&decl.assignee)
            }
            Node::Declaration(decl) => self.declare(decl),
            Node::Commands(seq) => {
                let mut last = None;
                for command in &seq.commands {
                    last = Some(self.eval(command)?);
                }
                // The parser never produces an empty sequence.
                last.ok_or(EvalError::EmptySequence)
            }
        }
    }

    /// The binding goes into the live environment, while the assignee sees
    /// only the bindings that existed before it; a name is never visible
    /// inside its own definition.
    fn declare(&mut self, decl: &'a DeclarationNode) -> Result<f64, EvalError> {
        let mut snapshot = self.env.snapshot();
        self.env.declare(decl)?;
        log::debug!("declared '{}'", decl.name);
        Interpreter::new(&mut snapshot).eval(&decl.assignee)
    }
}

/// Evaluates a whole program against a fresh, empty environment.
pub fn evaluate(root: &Node) -> Result<f64, EvalError> {
    let mut env = Environment::new();
    Interpreter::new(&mut env).eval(root)
}
