use std::path::{Path, PathBuf};

/// Sitemap file name read from the working directory
pub const DEFAULT_SITEMAP_FILE: &str = "sitemap.xml";

/// Redirect file name written to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "django_redirects.txt";

/// Where a generation run reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub sitemap_path: PathBuf,
    pub output_path: PathBuf,
}

impl GenerateOptions {
    /// Resolve the fixed input and output names under `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            sitemap_path: dir.join(DEFAULT_SITEMAP_FILE),
            output_path: dir.join(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            sitemap_path: PathBuf::from(DEFAULT_SITEMAP_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}
