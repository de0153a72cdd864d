//! The `resolve-node-modules` patch command.
//!
//! Turns command-line configuration into patch options, runs the tree walk
//! from `rnm_core` and reports the applied replacements.
//!
//! # Examples
//!
//! ```no_run
//! use rnm_patch::{Config, run_patch};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/project")),
//!     dry_run: true,
//!     exclude: vec!["node_modules".to_string()],
//!     pattern: "**".to_string(),
//!     include_binaries: false,
//!     include_git_ignored: false,
//!     exact: false,
//!     json: false,
//! };
//!
//! let result = run_patch(&cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! rnm_patch::print_replacements(&mut stdout, &result)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod reporter;
mod runner;

// Re-export public API
pub use config::Config;
pub use reporter::{print_header, print_json, print_replacements, print_summary};
pub use rnm_core::{FilePatch, PatchResult, Replacement};
pub use runner::run_patch;
