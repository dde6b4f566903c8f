// Pattern-based extraction of <loc> entries from sitemap text

use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// One matched `<loc>` element, borrowed from the sitemap text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlEntry<'a> {
    /// Full URL between the `<loc>` tags
    pub url: &'a str,
    /// Host without any leading `www.`
    pub domain: &'a str,
    /// Everything after the first slash following the host
    pub path: &'a str,
}

fn loc_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<loc>(https?://(?:www\.)?([^/]+)/([^<]+))</loc>").expect("loc regex is valid")
    })
}

/// Find every `<loc>` entry that carries a non-empty path, in document order.
///
/// The surrounding XML is never validated; anything that does not match the
/// pattern is skipped silently.
pub fn extract_entries(text: &str) -> Vec<UrlEntry<'_>> {
    let entries: Vec<UrlEntry<'_>> = loc_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let entry = UrlEntry {
                url: caps.get(1)?.as_str(),
                domain: caps.get(2)?.as_str(),
                path: caps.get(3)?.as_str(),
            };
            trace!(url = entry.url, domain = entry.domain, "matched sitemap entry");
            Some(entry)
        })
        .collect();

    debug!("Extracted {} sitemap entries", entries.len());
    entries
}

/// Extract only the path portion of each entry
pub fn extract_paths(text: &str) -> Vec<String> {
    extract_entries(text)
        .into_iter()
        .map(|entry| entry.path.to_string())
        .collect()
}
