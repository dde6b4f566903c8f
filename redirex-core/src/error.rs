use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedirectError {
    #[error("Failed to read sitemap {}: {source}", .path.display())]
    ReadSitemap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write redirects to {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RedirectError>;
