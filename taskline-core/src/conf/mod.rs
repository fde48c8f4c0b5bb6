pub mod error;
mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::*;
pub use types::*;
