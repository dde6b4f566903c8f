pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod output;
pub mod sitemap;

pub use config::GenerateOptions;
pub use error::RedirectError;
pub use format::{CHUNK_SIZE, DjangoSyntax, RedirectSyntax};
pub use generate::generate_redirects;
pub use output::GenerationSummary;
pub use sitemap::UrlEntry;
