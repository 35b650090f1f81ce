#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{engine::FlyoverEngine, lookups::HttpLookupChain};
pub use utils::error::{FlyoverError, Result};
