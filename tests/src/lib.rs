//! Shared fixtures for the integration tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Programs paired with the value they evaluate to.
pub const VALUED_PROGRAMS: &[(&str, f64)] = &[
    ("1234", 1234.0),
    ("1234 + 5678.9", 6912.9),
    ("(5 + 2) + 7", 14.0),
    ("1 + 10 / 2 * 2", 11.0),
    ("foo: 5 + 2, foo", 7.0),
    ("foo: 5, foo", 5.0),
    ("foo: 5, bar: 2 * foo, bar + foo", 15.0),
    ("1 2 + 3", 15.0),
    ("a: .5, b: a * 4, (b - a) * (b + a)", 3.75),
];

/// The multi-line program the CLI examples use.
pub const DECLARATIONS_PROGRAM: &str = "
foo: 5,
bar: 2 * foo,
bar + foo
";

/// Writes `text` to `dir/name` and returns the path.
pub fn write_program(dir: &Path, name: &str, text: &str) -> io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, text)?;
    Ok(path)
}
