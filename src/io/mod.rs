pub mod document;
pub mod loader;
pub mod writers;

pub use document::{Inspection, LoadOptions};
pub use loader::{
    inspect_file, inspect_str, load_assessment, parse_assessment, DocumentFormat,
};

use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))
}
