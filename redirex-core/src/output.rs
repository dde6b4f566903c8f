use crate::format::{CHUNK_SIZE, group_count};
use std::fmt;
use std::fs;
use std::path::Path;

/// Counts reported to the operator after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub redirects: usize,
    pub groups: usize,
    pub chunk_size: usize,
}

impl GenerationSummary {
    pub fn new(redirects: usize) -> Self {
        Self {
            redirects,
            groups: group_count(redirects),
            chunk_size: CHUNK_SIZE,
        }
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} redirects in {} groups of {}",
            self.redirects, self.groups, self.chunk_size
        )
    }
}

/// Write the rendered redirects, replacing any existing file
pub fn save_redirects(content: &str, path: &Path) -> std::io::Result<()> {
    fs::write(path, content)
}
