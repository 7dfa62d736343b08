//! Constants and default value functions used by the Config struct.

use crate::compile::DEFAULT_COMPILER_COMMAND;
use std::path::PathBuf;

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "fpreport.yaml";

pub fn default_compiler() -> String {
    DEFAULT_COMPILER_COMMAND.to_string()
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

pub fn default_true() -> bool {
    true
}
