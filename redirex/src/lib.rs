// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{handle_generate, init_tracing, run_generate};

// Re-export generation types from redirex-core
pub use redirex_core::{GenerateOptions, GenerationSummary, RedirectError};
