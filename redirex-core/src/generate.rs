use crate::config::GenerateOptions;
use crate::error::{RedirectError, Result};
use crate::format::{DjangoSyntax, render_redirects};
use crate::output::{GenerationSummary, save_redirects};
use crate::sitemap::extract_paths;
use std::fs;
use tracing::info;

/// Read the sitemap, render Django redirects and write them out.
///
/// Nothing is written when the sitemap cannot be read.
pub fn generate_redirects(options: &GenerateOptions) -> Result<GenerationSummary> {
    let GenerateOptions {
        sitemap_path,
        output_path,
    } = options;

    info!("Reading sitemap from {}", sitemap_path.display());
    let bytes = fs::read(sitemap_path).map_err(|source| RedirectError::ReadSitemap {
        path: sitemap_path.clone(),
        source,
    })?;

    // Stray non-UTF-8 bytes become U+FFFD; they can never be part of a match
    let content = String::from_utf8_lossy(&bytes);

    let paths = extract_paths(&content);
    let rendered = render_redirects(&paths, &DjangoSyntax);

    info!(
        "Writing {} redirects to {}",
        paths.len(),
        output_path.display()
    );
    save_redirects(&rendered, output_path).map_err(|source| RedirectError::WriteOutput {
        path: output_path.clone(),
        source,
    })?;

    Ok(GenerationSummary::new(paths.len()))
}
