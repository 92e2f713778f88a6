use std::path::PathBuf;

use crate::foundation::error::{MockshotError, MockshotResult};

/// Environment variable listing extra font directories (separated like `PATH`).
pub const FONT_DIR_ENV: &str = "MOCKSHOT_FONT_DIR";
/// Environment variable overriding the rayon worker count.
pub const THREADS_ENV: &str = "MOCKSHOT_THREADS";

/// Rendering configuration shared by the composer, animator and catalog pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// Extra directories scanned for `.ttf`/`.otf`/`.ttc` files, after system fonts.
    pub font_dirs: Vec<PathBuf>,
    /// Render animation frames on a rayon pool.
    pub parallel: bool,
    /// Worker count for parallel rendering; rayon's default when `None`.
    pub threads: Option<usize>,
}

impl RenderSettings {
    /// Defaults overlaid with `MOCKSHOT_FONT_DIR` and `MOCKSHOT_THREADS`.
    pub fn from_env() -> MockshotResult<Self> {
        let mut settings = Self::default();
        if let Some(dirs) = std::env::var_os(FONT_DIR_ENV) {
            settings.font_dirs = std::env::split_paths(&dirs).collect();
        }
        if let Ok(raw) = std::env::var(THREADS_ENV) {
            let n = raw.trim().parse::<usize>().map_err(|e| {
                MockshotError::validation(format!("{THREADS_ENV} must be an integer: {e}"))
            })?;
            settings.threads = Some(n);
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that cannot be honored.
    pub fn validate(&self) -> MockshotResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(MockshotError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}
