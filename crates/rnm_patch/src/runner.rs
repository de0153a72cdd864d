use anyhow::{Context, Result};
use log::{debug, info};
use rnm_core::{PatchResult, patch_tree};

use crate::config::Config;

pub fn run_patch(cfg: &Config) -> Result<PatchResult> {
    let root = cfg.root_path()?;
    info!("Using root directory: {}", root.display());

    let options = cfg.patch_options();
    debug!("Patch options: {:?}", options);

    let result = patch_tree(&root, &options)
        .with_context(|| format!("Failed to patch files in {}", root.display()))?;
    debug!(
        "Found {} replacements in {} files",
        result.total_replacements(),
        result.files.len()
    );
    Ok(result)
}
