pub mod env;

pub use env::{EnvError, Environment};
