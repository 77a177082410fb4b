pub mod config;
pub mod error;
pub mod fixed;

pub use config::ConverterConfig;
pub use error::{MapError, Result};
