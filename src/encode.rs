use std::path::Path;

use crate::foundation::error::MockshotResult;

pub(crate) mod gif;
pub(crate) mod png;

/// Create every missing directory above `path`.
pub fn ensure_parent_dir(path: &Path) -> MockshotResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
