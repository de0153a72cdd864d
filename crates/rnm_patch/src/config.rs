use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use path_clean::clean;
use rnm_core::{MatchPolicy, PatchOptions};
use std::{env, path::PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "resolve-node-modules")]
#[command(about = "Rewrite node_modules paths in text files to the modules resolved on disk")]
#[command(version, long_about = None)]
pub struct Config {
    /// Path to the directory from where a recursive patch will be applied
    /// (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Don't write to any files
    #[arg(long)]
    pub dry_run: bool,

    /// Glob patterns to exclude
    #[arg(long, num_args = 1.., default_value = "node_modules")]
    pub exclude: Vec<String>,

    /// Glob pattern selecting the files to patch
    #[arg(long, default_value = "**")]
    pub pattern: String,

    /// Skip excluding binary file extensions
    #[arg(long)]
    pub include_binaries: bool,

    /// Skip excluding files from .gitignore files
    #[arg(long)]
    pub include_git_ignored: bool,

    /// Require directory entries to match the module name exactly
    #[arg(long)]
    pub exact: bool,

    /// Print the replacements as JSON
    #[arg(long)]
    pub json: bool,
}

impl Config {
    /// The absolute root directory to patch
    pub fn root_path(&self) -> Result<PathBuf> {
        let root = match &self.root {
            Some(r) => r.clone(),
            None => {
                debug!("No root provided, using the current directory");
                env::current_dir().context("Failed to determine the current directory")?
            }
        };
        let absolute = std::path::absolute(&root)
            .with_context(|| format!("Failed to resolve {}", root.display()))?;
        Ok(clean(absolute))
    }

    pub fn patch_options(&self) -> PatchOptions {
        PatchOptions {
            dry_run: self.dry_run,
            pattern: self.pattern.clone(),
            exclude_patterns: self.exclude.iter().cloned().collect(),
            exclude_binaries: !self.include_binaries,
            exclude_git_ignored: !self.include_git_ignored,
            match_policy: if self.exact { MatchPolicy::Exact } else { MatchPolicy::Prefix },
        }
    }
}
