pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{JsonRenderer, TextRenderer};
pub use config::{toml_config::TomlConfig, OutputFormat};
pub use crate::core::{calculator::Calculator, session::Session};
pub use domain::model::{Field, FieldEdit, FormState, Ratios, Recipe};
pub use utils::error::{KombuchaError, Result};
