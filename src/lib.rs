// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod colors;
pub mod config;
pub mod error;
pub mod input_field;
pub mod language;
pub mod logging;
pub mod mask;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod util;
pub mod word_source;
pub mod wrap;

mod proptests;

pub use error::{Error, Result};
