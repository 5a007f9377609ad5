pub mod calculator;
pub mod ingredients;
pub mod instructions;
pub mod reducer;
pub mod session;

pub use crate::domain::model::{Field, FieldEdit, FieldState, FormState, Ratios, Recipe};
pub use crate::domain::ports::{ConfigProvider, Renderer};
pub use crate::utils::error::Result;
