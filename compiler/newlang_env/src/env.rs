// Evaluation environment for NewLanguage
// Maps each declared name to the declaration node that introduced it

use std::collections::HashMap;

use newlang_ast::DeclarationNode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("variable '{name}' is already declared")]
    Redeclaration { name: String },
}

/// Name bindings visible during one evaluation scope.
///
/// Bindings borrow the declaration nodes from the tree being evaluated;
/// a reference is resolved by re-evaluating the bound declaration's
/// assignee, so the environment never stores values.
#[derive(Debug, Clone, Default)]
pub struct Environment<'a> {
    bindings: HashMap<String, &'a DeclarationNode>,
}

impl<'a> Environment<'a> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// An independent copy of the current bindings. Declarations made on
    /// either side afterwards are not visible to the other.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Binds `decl.name` to `decl`. A name may be bound at most once per
    /// scope; a second binding is a redeclaration error and leaves the
    /// existing binding in place.
    pub fn declare(&mut self, decl: &'a DeclarationNode) -> Result<(), EnvError> {
        if self.bindings.contains_key(&decl.name) {
            return Err(EnvError::Redeclaration {
                name: decl.name.clone(),
            });
        }
        self.bindings.insert(decl.name.clone(), decl);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&'a DeclarationNode> {
        self.bindings.get(name).copied()
    }

    /// Declared names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
