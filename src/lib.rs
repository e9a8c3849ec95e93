//! Nutrition profiles for generic ingredients.
//!
//! Application layer over [`fdc_search`]: configuration loading, the
//! nutrition lookup tool, a stdio JSON bridge for hosts, and plain-text
//! reports for the CLI.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus `USDA_API_KEY`, feeding [`fdc_search::FdcConfig`]
//! - **Tool**: JSON arguments in, profile or error object out
//! - **Host bridge**: newline-delimited JSON over stdin/stdout
//! - **Report**: human-readable profile and candidate ranking

pub mod config;
pub mod error;
pub mod host;
pub mod report;
pub mod tool;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use tool::{NutritionTool, ToolError, ToolErrorKind, ToolOutcome};
