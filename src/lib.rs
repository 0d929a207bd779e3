pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::Engine, normalize::NormalizePipeline, report::ReportPipeline};
pub use utils::error::{RenormError, Result};
