//! Parse-then-evaluate entry point for NewLanguage programs.
//!
//! ```
//! use newlang::Engine;
//!
//! let engine = Engine::new("foo: 5, bar: 2 * foo, bar + foo");
//! assert_eq!(engine.run().unwrap(), 15.0);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use newlang_ast::Node;
use newlang_env::Environment;
use newlang_eval::{EvalError, Interpreter};
use newlang_parser::{parse_program, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input file '{}' does not exist", path.display())]
    MissingInputFile { path: PathBuf },
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("cannot serialize tree: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Holds one program's source text. Nothing else is cached, so `run` can be
/// called any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    source: String,
}

impl Engine {
    pub fn new(source: impl Into<String>) -> Self {
        Engine {
            source: source.into(),
        }
    }

    /// Reads the whole file at `path`; `\r\n` and lone `\r` line endings
    /// become `\n`.
    pub fn from_source_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingInputFile {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} byte(s) from {}", text.len(), path.display());
        Ok(Engine::new(normalize_line_endings(&text)))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn parse(&self) -> Result<Node, Error> {
        Ok(parse_program(&self.source)?)
    }

    /// The parsed tree as pretty-printed JSON.
    pub fn ast_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.parse()?)?)
    }

    /// Parses the program and evaluates it against a fresh environment,
    /// returning the value of its last command.
    pub fn run(&self) -> Result<f64, Error> {
        let root = self.parse()?;
        log::info!("parsed program, evaluating");

        let mut env = Environment::new();
        let value = Interpreter::new(&mut env).eval(&root)?;
        log::debug!("declared: {:?}", env.names());
        log::info!("program evaluated to {value}");
        Ok(value)
    }
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
